//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              main loop (app.rs)                            │
//！│                                                                            │
//！│  ┌────────────────────────────── UI layer ────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │  layer  │ translate│   layer   │  consume │  layer   │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ mutates       │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          └───────────┘   ┌───── │  Model   │         │   │
//！│  │   │  layer  │                          │      │  layer   │         │   │
//！│  │   └────┬────┘ ◀──────── reads ─────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ editor calls      │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │terminal │                                │ Backend  │              │
//！│      │ (Util)  │                                │  layer   │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │  extended-gauge-  │           │
//！│                                           │       core        │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message layer: what the user asked for
//!
//! The bridge between Event and Update. Every key press is translated into a
//! message and the Update layer changes the Model according to it.
//!
//!
//! Module structure:
//!     src/message/mod.rs
//!         mod app;            // AppMessage, the top-level message
//!         mod content;        // ContentMessage, for the page panel
//!         mod modal;          // ModalMessage, for the open modal
//!
//!
//!     AppMessage carries the global actions and wraps the two sub-messages:
//!
//!         pub enum AppMessage {
//!             Quit,                           // quit, asks again when unsaved
//!             ForceQuit,                      // Ctrl+C
//!             Content(ContentMessage),        // page panel
//!             Modal(ModalMessage),            // open modal
//!             GoBack,                         // close modal / previous page
//!             Save,                           // write the card file
//!             ShowHelp,
//!             ToggleTheme,
//!             SwitchLanguage,
//!             ClearStatus,
//!             Noop,                           // stands in for Option::None
//!         }
//!
//!
//!     In src/event/handler.rs:
//!         pub fn handle_event(event: Event, app: &App) -> AppMessage {
//!             ...
//!         }
//!
//!     and in src/app.rs the message goes on to:
//!         update::update(app, msg);
//!
//! Next stop: src/update/mod.rs
//!

mod app;
mod content;
mod modal;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
