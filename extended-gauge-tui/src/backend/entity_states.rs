//! Entity states file

use std::path::Path;

use anyhow::{Context, Result};
use extended_gauge_core::traits::InMemoryEntityStore;
use tokio::fs;

/// Load entity states; no file means an empty store
pub async fn load_entity_store(path: Option<&Path>) -> Result<InMemoryEntityStore> {
    let Some(path) = path else {
        return Ok(InMemoryEntityStore::new());
    };

    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let store = InMemoryEntityStore::from_json(&content)
        .with_context(|| format!("parsing {}", path.display()))?;

    log::info!("Loaded entity states from {}", path.display());
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use extended_gauge_core::EntityStore;
    use tempfile::TempDir;

    #[tokio::test]
    async fn no_path_gives_empty_store() {
        let store = load_entity_store(None).await.unwrap();
        assert!(store.entity_ids().is_empty());
    }

    #[tokio::test]
    async fn loads_keyed_states() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("states.json");
        std::fs::write(
            &path,
            r#"{ "sensor.power": { "state": "12", "attributes": { "unit_of_measurement": "kW" } } }"#,
        )
        .unwrap();

        let store = load_entity_store(Some(&path)).await.unwrap();
        let power = store.get("sensor.power").unwrap();
        assert_eq!(power.unit_of_measurement(), Some("kW"));
    }
}
