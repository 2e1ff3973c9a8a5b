//! Shared UI components

pub mod breadcrumb;
pub mod modal;
pub mod statusbar;
