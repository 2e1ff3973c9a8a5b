//! Editing services: list controller, navigation, propagation, rendering, session

mod dispatcher;
mod editor;
mod element_list;
mod navigation;
mod propagation;

pub use dispatcher::{page_header, render_page};
pub use editor::ConfigEditor;
pub use element_list::{ChangeKind, ElementList, ElementListChange};
pub use navigation::{Frame, NavigationStack};
pub use propagation::{commit, EditTarget};
