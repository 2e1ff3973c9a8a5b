//! Page panels

pub mod editor;
