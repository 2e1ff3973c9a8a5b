//! Host seam trait definitions

mod config_listener;
mod editor_hooks;
mod entity_store;
mod event_bus;

pub use config_listener::{ChannelConfigListener, ConfigListener, NoopConfigListener};
pub use editor_hooks::{DefaultEditorHooks, EditorHooks};
pub use entity_store::{EntityState, EntityStore, InMemoryEntityStore};
pub use event_bus::{
    BusEvent, EventBus, EventCallback, InMemoryEventBus, Subscription, CONFIG_SAVED_EVENT,
};
