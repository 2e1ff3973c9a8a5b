//! Extended Gauge Core Library
//!
//! Generic configuration-page framework behind the extended gauge card editor:
//! - Persistent configuration values with copy-on-write path edits
//! - Declarative page trees (menus, forms, entity pickers, element lists, custom sections)
//! - A navigation stack that binds each open page to a location in the configuration
//! - Propagation of edits back to a new configuration root
//!
//! Host integration (hooks, change notification, event bus, entity states) is
//! abstracted through traits, so the library runs under any frontend.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ConfigEditor, ElementList, ElementListChange, NavigationStack};
pub use traits::{ConfigListener, EditorHooks, EntityStore, EventBus};
pub use types::{ConfigPath, ConfigValue, Page, PageSection, PageView, PathStep, SectionKind};
