//! Host event bus abstract Trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::error::{CoreError, CoreResult};

/// Event type the host publishes after the card configuration was saved
pub const CONFIG_SAVED_EVENT: &str = "lovelace_updated";

/// An event delivered through the bus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusEvent {
    pub event_type: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl BusEvent {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            data: serde_json::Value::Null,
        }
    }
}

pub type EventCallback = Arc<dyn Fn(&BusEvent) + Send + Sync>;

/// Handle of an active subscription
///
/// Unsubscribing consumes the handle; dropping it without unsubscribing keeps
/// the subscription alive.
pub struct Subscription {
    cancel: Box<dyn FnOnce() + Send + Sync>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Box::new(cancel),
        }
    }

    pub fn unsubscribe(self) {
        (self.cancel)();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// Event Bus Trait
///
/// Provides a default memory implementation of `InMemoryEventBus`.
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Subscribe to events of one type
    ///
    /// # Arguments
    /// * `event_type` - Event type to listen for
    /// * `callback` - Invoked for every matching event
    async fn subscribe(&self, event_type: &str, callback: EventCallback) -> CoreResult<Subscription>;

    /// Deliver an event to every subscriber of its type
    async fn publish(&self, event: BusEvent) -> CoreResult<()>;
}

type Subscribers = HashMap<String, Vec<(u64, EventCallback)>>;

#[derive(Default)]
struct BusState {
    next_id: u64,
    subscribers: Subscribers,
}

/// In-memory event bus
///
/// Callbacks run synchronously inside `publish`.
#[derive(Clone, Default)]
pub struct InMemoryEventBus {
    state: Arc<RwLock<BusState>>,
}

impl InMemoryEventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions for an event type
    pub fn subscriber_count(&self, event_type: &str) -> usize {
        self.state
            .read()
            .map(|state| state.subscribers.get(event_type).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

fn poisoned<T>(_: T) -> CoreError {
    CoreError::EventBus("subscriber registry poisoned".to_string())
}

#[async_trait]
impl EventBus for InMemoryEventBus {
    async fn subscribe(&self, event_type: &str, callback: EventCallback) -> CoreResult<Subscription> {
        let id = {
            let mut state = self.state.write().map_err(poisoned)?;
            state.next_id += 1;
            let id = state.next_id;
            state
                .subscribers
                .entry(event_type.to_string())
                .or_default()
                .push((id, callback));
            id
        };

        let state = Arc::clone(&self.state);
        let event_type = event_type.to_string();
        Ok(Subscription::new(move || {
            if let Ok(mut state) = state.write() {
                if let Some(list) = state.subscribers.get_mut(&event_type) {
                    list.retain(|(sub_id, _)| *sub_id != id);
                }
            }
        }))
    }

    async fn publish(&self, event: BusEvent) -> CoreResult<()> {
        // Snapshot first so a callback may subscribe or unsubscribe
        let callbacks: Vec<EventCallback> = {
            let state = self.state.read().map_err(poisoned)?;
            state
                .subscribers
                .get(&event.event_type)
                .map(|list| list.iter().map(|(_, cb)| Arc::clone(cb)).collect())
                .unwrap_or_default()
        };
        log::debug!(
            "Publishing {} to {} subscriber(s)",
            event.event_type,
            callbacks.len()
        );
        for callback in callbacks {
            callback(&event);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, EventCallback) {
        let count = Arc::new(AtomicUsize::new(0));
        let cb_count = Arc::clone(&count);
        let callback: EventCallback = Arc::new(move |_| {
            cb_count.fetch_add(1, Ordering::SeqCst);
        });
        (count, callback)
    }

    #[tokio::test]
    async fn delivers_only_matching_events() {
        let bus = InMemoryEventBus::new();
        let (count, callback) = counter();
        let _sub = bus.subscribe(CONFIG_SAVED_EVENT, callback).await.unwrap();

        bus.publish(BusEvent::new(CONFIG_SAVED_EVENT)).await.unwrap();
        bus.publish(BusEvent::new("state_changed")).await.unwrap();
        bus.publish(BusEvent::new(CONFIG_SAVED_EVENT)).await.unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn unsubscribe_stops_delivery() {
        let bus = InMemoryEventBus::new();
        let (count, callback) = counter();
        let sub = bus.subscribe(CONFIG_SAVED_EVENT, callback).await.unwrap();
        assert_eq!(bus.subscriber_count(CONFIG_SAVED_EVENT), 1);

        sub.unsubscribe();
        bus.publish(BusEvent::new(CONFIG_SAVED_EVENT)).await.unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(bus.subscriber_count(CONFIG_SAVED_EVENT), 0);
    }
}
