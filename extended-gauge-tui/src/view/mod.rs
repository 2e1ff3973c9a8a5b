//! View layer: draws the Model
//!
//!     layout.rs               title bar, panels, status bar
//!     components/             breadcrumb, status bar, modals
//!     pages/                  the page editor
//!     theme.rs                colors and shared styles

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
