//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              main loop (app.rs)                            │
//！│                                                                            │
//！│  ┌────────────────────────────── UI layer ────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │  layer  │ translate│   layer   │  consume │   layer  │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ mutate        │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          └───────────┘   ┌───── │  Model   │         │   │
//！│  │   │  layer  │ ◀──────── read ──────────┘      │   layer  │         │   │
//！│  │   └────┬────┘                                 └────┬─────┘         │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ edits / saves     │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │terminal │                                │ Backend  │              │
//！│      │ (Util)  │                                │  layer   │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │extended-gauge-core│           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend layer: the editing session behind the UI
//!
//! The backend knows nothing about the terminal. It owns the card file, the
//! page tree, the entity states and the `ConfigEditor` from extended-gauge-core.
//!
//!
//! Module structure:
//!     src/backend/mod.rs
//!         mod config_service;     // card file on disk (JSON)
//!         mod default_config;     // configuration of a brand new card
//!         mod entity_states;      // entity states file
//!         mod gauge_hooks;        // card policy plugged into the editor
//!         mod session;            // EditorSession, the entry point for the UI
//!         mod site_structure;     // embedded page tree
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 1. EditorSession
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Defined in src/backend/session.rs.
//!
//!         Creation:
//!             1. Load the card file (or start from the default configuration)
//!             2. Load entity states (optional)
//!             3. Parse the embedded site structure
//!             4. Build GaugeEditorHooks and a ChannelConfigListener
//!             5. Create the ConfigEditor and seed it with the configuration
//!             6. Attach the editor to an InMemoryEventBus
//!
//!         Provided to the UI:
//!             - editor() / editor_mut()   rendering, navigation, edits
//!             - sync_changes()            feed emitted roots back into the editor
//!             - save()                    write the file, publish "lovelace_updated"
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 2. Data flow
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     User confirms the field editor
//!         ↓
//!     Update layer builds the new section value
//!         ↓
//!     ConfigEditor::update_form_values (validate, derive, propagate)
//!         ↓
//!     ChannelConfigListener sends the new root
//!         ↓
//!     Main loop calls EditorSession::sync_changes (root echoed, session dirty)
//!         ↓
//!     Model re-renders the current page, View redraws
//!

mod config_service;
mod default_config;
mod entity_states;
mod gauge_hooks;
mod session;
mod site_structure;

pub use config_service::CardFile;
pub use default_config::default_config;
pub use entity_states::load_entity_store;
pub use gauge_hooks::GaugeEditorHooks;
pub use session::EditorSession;
pub use site_structure::main_page;
