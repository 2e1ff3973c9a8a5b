//! Gauge card policy
//!
//! [`GaugeEditorHooks`] is what makes the generic editor a gauge card editor:
//! range checks on the gauge and segment bounds, the entity's unit of measurement
//! copied into the entity settings, a default color for new segments and the
//! localisation of labels and errors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use extended_gauge_core::types::{schema_fields, ErrorMap, Record, Selector};
use extended_gauge_core::{ConfigValue, EditorHooks, EntityStore, PageSection};

use crate::i18n;

pub const OUT_OF_RANGE: &str = "out_of_range";
pub const VALUE_LOWER_GREATER_THAN_UPPER: &str = "value_lower_greater_than_upper";
pub const RANGE_LOWER_GREATER_THAN_UPPER: &str = "range_lower_greater_than_upper";

/// Error key for problems that belong to no single field
pub const BASE_ERROR: &str = "base";

/// Color of a freshly added segment, the host's accent color
const ACCENT_COLOR: [u8; 3] = [255, 152, 0];

pub struct GaugeEditorHooks {
    entities: Arc<dyn EntityStore>,
    saved: AtomicBool,
}

impl GaugeEditorHooks {
    pub fn new(entities: Arc<dyn EntityStore>) -> Self {
        Self {
            entities,
            saved: AtomicBool::new(false),
        }
    }

    /// Whether a save was reported since the last call
    pub fn take_saved(&self) -> bool {
        self.saved.swap(false, Ordering::SeqCst)
    }

    /// Entity section with the entity's unit of measurement in its settings
    fn with_entity_unit(&self, section: &ConfigValue) -> ConfigValue {
        let mut settings: Record = section
            .get("settings")
            .and_then(ConfigValue::as_object)
            .cloned()
            .unwrap_or_default();

        let entity_id = section
            .get("entity")
            .and_then(ConfigValue::as_str)
            .filter(|id| !id.is_empty());
        match entity_id {
            Some(entity_id) => {
                let Some(state) = self.entities.get(entity_id) else {
                    return section.clone();
                };
                match state.unit_of_measurement() {
                    Some(unit) => {
                        settings.insert("unit_of_measurement".to_string(), unit.into());
                    }
                    None => {
                        settings.shift_remove("unit_of_measurement");
                    }
                }
            }
            None => {
                if settings.shift_remove("unit_of_measurement").is_none() {
                    return section.clone();
                }
            }
        }

        section
            .with_key("settings", ConfigValue::object(settings))
            .unwrap_or_else(|_| section.clone())
    }
}

/// `data[lower] > data[upper]`, when both are numbers
fn lower_above_upper(data: &ConfigValue, lower: &str, upper: &str) -> bool {
    let number = |key: &str| data.get(key).and_then(ConfigValue::as_f64);
    matches!((number(lower), number(upper)), (Some(l), Some(u)) if l > u)
}

impl EditorHooks for GaugeEditorHooks {
    fn validate_form(
        &self,
        page_name: &str,
        section: &PageSection,
        data: &ConfigValue,
        errors: &mut ErrorMap,
    ) -> bool {
        let schema = section.resolve_schema(data);
        for field in schema_fields(&schema) {
            let Selector::Number { min, max, .. } = &field.selector else {
                continue;
            };
            let Some(value) = data.get(&field.name).and_then(ConfigValue::as_f64) else {
                continue;
            };
            if min.is_some_and(|min| value < min) || max.is_some_and(|max| value > max) {
                errors.insert(field.name.clone(), OUT_OF_RANGE.to_string());
            }
        }

        match (page_name, section.name.as_str()) {
            ("", "main") if lower_above_upper(data, "min_value", "max_value") => {
                errors.insert(BASE_ERROR.to_string(), VALUE_LOWER_GREATER_THAN_UPPER.to_string());
            }
            ("segment_list", "settings")
                if lower_above_upper(data, "segment_lower", "segment_upper") =>
            {
                errors.insert(BASE_ERROR.to_string(), RANGE_LOWER_GREATER_THAN_UPPER.to_string());
            }
            _ => {}
        }

        errors.is_empty()
    }

    fn value_changed(
        &self,
        page_name: &str,
        page_data: ConfigValue,
        section_name: &str,
        new_value: &ConfigValue,
        _old_value: &ConfigValue,
    ) -> ConfigValue {
        if !(page_name.is_empty() && section_name == "entity") {
            return page_data;
        }
        let section = self.with_entity_unit(new_value);
        page_data.with_key(section_name, section).unwrap_or(page_data)
    }

    fn list_element_added(&self, list_name: &str, element: ConfigValue) -> ConfigValue {
        if list_name != "segment_list" {
            return element;
        }
        let settings = element.get("settings").cloned().unwrap_or_default();
        if settings.get("segment_color").is_some() {
            return element;
        }

        let color = ConfigValue::list(ACCENT_COLOR.iter().map(|c| i64::from(*c).into()).collect());
        settings
            .with_key("segment_color", color)
            .and_then(|settings| element.with_key("settings", settings))
            .unwrap_or(element)
    }

    fn config_saved(&self) {
        log::debug!("Card configuration saved by host");
        self.saved.store(true, Ordering::SeqCst);
    }

    fn localize_text(&self, key: &str) -> String {
        i18n::localize(&format!("editor.{key}"))
    }

    fn localize_error(&self, key: &str) -> String {
        i18n::localize(&format!("error.{key}"))
    }
}
