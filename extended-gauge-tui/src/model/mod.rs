//!
//! src/model/mod.rs
//! Model layer: application state
//!
//! The Model layer is the single source of truth of the terminal app. It holds
//! plain data; every change goes through the Update layer.
//!
//!
//! Module structure:
//!     src/model/mod.rs
//!         mod app;            // App, the root state
//!         mod modal;          // modal state (field editor, confirmations, help)
//!         mod rows;           // PageView flattened into selectable rows
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 1. App
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App {
//!         should_quit,        // leave the main loop
//!         session,            // backend EditorSession
//!         page,               // last PageView rendered by the editor
//!         rows,               // page rows as shown on screen
//!         selected,           // index into rows
//!         modal,              // active modal, if any
//!         status_message,     // right side of the status bar
//!         save_requested,     // picked up by the main loop
//!     }
//!
//!     App::refresh() asks the editor for a new PageView and rebuilds the rows.
//!     The Update layer calls it after every edit or navigation.
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 2. Rows
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Each section of the page becomes one or more rows:
//!
//!         Menu            →  Menu row (opens the linked page)
//!         Form            →  Heading + one Field row per schema field
//!         Entity          →  Heading + Field rows + EditLink row
//!         ElementList     →  Heading + one Element row per list row + AddElement
//!         Custom          →  Heading + Custom content
//!
//!     Errors that belong to no field become Notice rows. Headings, notices
//!     and custom content cannot be selected.
//!

mod app;
mod modal;
mod rows;

pub use app::App;
pub use modal::{FieldInput, FieldInputError, Modal, ModalState};
pub use rows::{build_rows, Row, RowKind};
