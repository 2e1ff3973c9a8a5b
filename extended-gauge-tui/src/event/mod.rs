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
//! src/event/mod.rs
//! Event layer: input handling
//!
//! Turns key presses into messages.
//!
//!
//! Module structure:
//!     src/event/mod.rs
//!         mod handler;        // event handler
//!         mod keymap;         // key bindings
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     · poll_event      called by app.rs, waits at most `timeout`
//!
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//!             if event::poll(timeout)? {
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!
//!     · handle_event    dispatch
//!
//!         Event::Key(KeyEvent)        → handle_key_event()
//!         Event::Resize(w, h)         → Noop, the next pass redraws
//!         anything else               → Noop
//!
//!         handle_key_event() checks, in this order:
//!             - an open modal gets every key (handle_modal_keys)
//!             - global keys: Ctrl+C, ?, Alt+h, Ctrl+s, Alt+t, Alt+l, Esc, q
//!             - page keys (handle_content_keys)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! Modal keys
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Field editor:
//!         Esc             → ModalMessage::Close
//!         Enter           → ModalMessage::Confirm
//!         ←/→, ↑/↓, Tab   → ModalMessage::PrevOption / NextOption
//!         Space           → NextOption for switches and choices
//!         characters      → ModalMessage::Input(c) for text, numbers, colors
//!         Backspace       → ModalMessage::Backspace
//!
//!     Removal confirmation:
//!         ←/→, Tab        → ModalMessage::ToggleRemoveFocus
//!         Enter           → ModalMessage::Confirm
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
