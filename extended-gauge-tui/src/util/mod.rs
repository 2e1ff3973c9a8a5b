//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           main loop (app.rs)                            │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ key     │ ─▶  │  Event  │ ─▶  │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  layer  │     │  layer   │     │  layer  │         │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────            │
//！│         │          │  layer  │     │  layer   │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── reads state                          │
//！│           screen   │  layer  │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘
//!
//! src/util/mod.rs
//! Util layer: infrastructure without business logic
//!
//!
//! Module structure:
//!     src/util/mod.rs
//!         mod color;          // RGB triples <-> hex / css color strings
//!         mod terminal;       // terminal setup and teardown
//!
//!
//!     Terminal setup:
//!
//!         · Raw mode
//!             - no line buffering, every key arrives immediately
//!             - no echo
//!             - Ctrl+C and arrow keys arrive as key events
//!
//!         · Alternate screen
//!             - the editor draws on the second screen buffer
//!             - the shell contents come back on exit
//!
//!     restore_terminal must run whether the main loop succeeded or not, and
//!     the panic hook runs it as well, so a crash never leaves the shell in
//!     raw mode.
//!
//!     Colors:
//!         Card colors are stored as `[r, g, b]` lists. The field editor shows
//!         them as `#rrggbb` and accepts `#rrggbb`, `#rgb` and `rgb(r, g, b)`.
//!

mod color;
mod terminal;

pub use color::{hex_to_rgb, rgb_to_hex};
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
