//! Entity state store abstract Trait

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

/// Current state of one host entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub entity_id: String,
    pub state: String,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl EntityState {
    /// `friendly_name` attribute, falling back to the entity id
    pub fn friendly_name(&self) -> &str {
        self.attributes
            .get("friendly_name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or(&self.entity_id)
    }

    pub fn unit_of_measurement(&self) -> Option<&str> {
        self.attributes
            .get("unit_of_measurement")
            .and_then(serde_json::Value::as_str)
    }
}

/// Read-only view of the host's entity states
///
/// Consumed by hooks and form collaborators.
pub trait EntityStore: Send + Sync {
    fn get(&self, entity_id: &str) -> Option<EntityState>;

    /// All entity ids, sorted
    fn entity_ids(&self) -> Vec<String>;
}

/// In-memory entity store
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntityStore {
    states: BTreeMap<String, EntityState>,
}

impl InMemoryEntityStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, state: EntityState) {
        self.states.insert(state.entity_id.clone(), state);
    }

    /// Load states from JSON.
    ///
    /// Accepts either an array of states or an object keyed by entity id whose
    /// values are states without the `entity_id` field.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let mut store = Self::new();
        match value {
            serde_json::Value::Object(map) => {
                for (entity_id, mut state) in map {
                    if let Some(obj) = state.as_object_mut() {
                        obj.insert(
                            "entity_id".to_string(),
                            serde_json::Value::String(entity_id),
                        );
                    }
                    store.insert(serde_json::from_value(state)?);
                }
            }
            other => {
                let states: Vec<EntityState> = serde_json::from_value(other)?;
                for state in states {
                    store.insert(state);
                }
            }
        }
        Ok(store)
    }
}

impl EntityStore for InMemoryEntityStore {
    fn get(&self, entity_id: &str) -> Option<EntityState> {
        self.states.get(entity_id).cloned()
    }

    fn entity_ids(&self) -> Vec<String> {
        self.states.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_state_array() {
        let store = InMemoryEntityStore::from_json(
            r#"[
                { "entity_id": "sensor.boiler", "state": "61.5",
                  "attributes": { "friendly_name": "Boiler", "unit_of_measurement": "°C" } },
                { "entity_id": "light.kitchen", "state": "on" }
            ]"#,
        )
        .unwrap();

        assert_eq!(store.entity_ids(), ["light.kitchen", "sensor.boiler"]);
        let boiler = store.get("sensor.boiler").unwrap();
        assert_eq!(boiler.friendly_name(), "Boiler");
        assert_eq!(boiler.unit_of_measurement(), Some("°C"));
        assert_eq!(store.get("light.kitchen").unwrap().friendly_name(), "light.kitchen");
    }

    #[test]
    fn loads_state_object() {
        let store = InMemoryEntityStore::from_json(
            r#"{ "sensor.power": { "state": "230", "attributes": { "unit_of_measurement": "W" } } }"#,
        )
        .unwrap();
        assert_eq!(store.get("sensor.power").unwrap().state, "230");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(InMemoryEntityStore::from_json("[{").is_err());
    }
}
