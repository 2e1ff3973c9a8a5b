//! Test helper module
//!
//! Recording mock implementations of the host seams and a sample page tree.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::error::{CoreError, CoreResult};
use crate::traits::{BusEvent, ConfigListener, EditorHooks, EventBus, EventCallback, Subscription};
use crate::types::{
    ConfigValue, EntityFilter, ErrorMap, Page, PageSection, SchemaItem, SectionKind, Selector,
};

// ===== RecordingHooks =====

#[derive(Default)]
pub struct RecordingHooks {
    invalid_sections: Vec<String>,
    veto_removal: bool,
    validate_calls: AtomicUsize,
    value_changed_calls: AtomicUsize,
    added_calls: AtomicUsize,
    saved_calls: AtomicUsize,
    removing: Mutex<Vec<ConfigValue>>,
}

impl RecordingHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `{ "min_value": "invalid" }` for this section
    pub fn invalid_section(mut self, name: &str) -> Self {
        self.invalid_sections.push(name.to_string());
        self
    }

    pub fn veto_removal(mut self) -> Self {
        self.veto_removal = true;
        self
    }

    pub fn validate_calls(&self) -> usize {
        self.validate_calls.load(Ordering::SeqCst)
    }

    pub fn value_changed_calls(&self) -> usize {
        self.value_changed_calls.load(Ordering::SeqCst)
    }

    pub fn added_calls(&self) -> usize {
        self.added_calls.load(Ordering::SeqCst)
    }

    pub fn saved_calls(&self) -> usize {
        self.saved_calls.load(Ordering::SeqCst)
    }

    /// Elements passed to the removal hook, in call order
    pub fn removing(&self) -> Vec<ConfigValue> {
        self.removing.lock().unwrap().clone()
    }
}

impl EditorHooks for RecordingHooks {
    fn validate_form(
        &self,
        _page_name: &str,
        section: &PageSection,
        _data: &ConfigValue,
        errors: &mut ErrorMap,
    ) -> bool {
        self.validate_calls.fetch_add(1, Ordering::SeqCst);
        if self.invalid_sections.contains(&section.name) {
            errors.insert("min_value".to_string(), "invalid".to_string());
            return false;
        }
        true
    }

    /// Marks the page data with the edited section name
    fn value_changed(
        &self,
        _page_name: &str,
        page_data: ConfigValue,
        section_name: &str,
        _new_value: &ConfigValue,
        _old_value: &ConfigValue,
    ) -> ConfigValue {
        self.value_changed_calls.fetch_add(1, Ordering::SeqCst);
        page_data
            .with_key("derived_from", section_name.into())
            .unwrap_or(page_data)
    }

    fn list_element_added(&self, _list_name: &str, element: ConfigValue) -> ConfigValue {
        self.added_calls.fetch_add(1, Ordering::SeqCst);
        element
            .with_key("settings", json!({ "segment_lower": 0 }).into())
            .unwrap_or(element)
    }

    fn list_element_removing(&self, _list_name: &str, element: &ConfigValue) -> bool {
        self.removing.lock().unwrap().push(element.clone());
        !self.veto_removal
    }

    fn render_custom(
        &self,
        section: &PageSection,
        _data: &ConfigValue,
        _errors: &ErrorMap,
    ) -> Option<serde_json::Value> {
        Some(json!({ "section": section.name }))
    }

    fn config_saved(&self) {
        self.saved_calls.fetch_add(1, Ordering::SeqCst);
    }
}

// ===== RecordingListener =====

#[derive(Default)]
pub struct RecordingListener {
    emitted: Mutex<Vec<ConfigValue>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emitted(&self) -> Vec<ConfigValue> {
        self.emitted.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.emitted.lock().unwrap().len()
    }
}

impl ConfigListener for RecordingListener {
    fn config_changed(&self, config: &ConfigValue) {
        self.emitted.lock().unwrap().push(config.clone());
    }
}

// ===== FailingEventBus =====

pub struct FailingEventBus;

#[async_trait]
impl EventBus for FailingEventBus {
    async fn subscribe(&self, _event_type: &str, _callback: EventCallback) -> CoreResult<Subscription> {
        Err(CoreError::EventBus("connection closed".to_string()))
    }

    async fn publish(&self, _event: BusEvent) -> CoreResult<()> {
        Err(CoreError::EventBus("connection closed".to_string()))
    }
}

// ===== Factory methods =====

/// Card page tree plus a menu and a custom section
pub fn sample_page() -> Arc<Page> {
    let title_schema = vec![SchemaItem::field("title", Selector::Text {})];

    let entity_page = Page::new(vec![PageSection::new("settings", SectionKind::Form)
        .with_schema(vec![SchemaItem::field("decimals", Selector::Number {
            min: Some(0.0),
            max: Some(6.0),
            step: Some(1.0),
            mode: None,
        })])])
    .with_title("entity_settings");

    let segment_page = Page::new(vec![
        PageSection::new("title", SectionKind::Form).with_schema(title_schema.clone()),
        PageSection::new("settings", SectionKind::Form),
    ])
    .with_title("edit_segment")
    .with_alternative_title("add_segment");

    let advanced_page = Page::new(vec![PageSection::new("options", SectionKind::Form)])
        .with_title("advanced");

    Arc::new(Page::new(vec![
        PageSection::new("title", SectionKind::Form).with_schema(title_schema),
        PageSection::new("entity", SectionKind::Entity)
            .with_schema(vec![SchemaItem::field("entity", Selector::Entity {
                filter: EntityFilter {
                    domain: vec!["sensor".to_string()],
                },
            })])
            .with_link(entity_page),
        PageSection::new("main", SectionKind::Form).with_schema(vec![SchemaItem::grid(
            "200px",
            vec![
                SchemaItem::field("min_value", Selector::Number {
                    min: None,
                    max: None,
                    step: None,
                    mode: None,
                }),
                SchemaItem::field("show_needle", Selector::Boolean {}),
            ],
        )]),
        PageSection::new("segment_list", SectionKind::ElementList)
            .with_title("segment_list")
            .with_alternative_title("segment_list_empty")
            .sortable()
            .with_link(segment_page),
        PageSection::new("advanced", SectionKind::Menu)
            .with_title("Advanced")
            .with_link(advanced_page),
        PageSection::new("preview", SectionKind::Custom),
    ]))
}

pub fn sample_config() -> ConfigValue {
    ConfigValue::from(json!({
        "type": "custom:extended-gauge-card",
        "title": { "title": "Boiler" },
        "entity": { "entity": "sensor.boiler", "settings": { "decimals": 1 } },
        "main": { "min_value": 0, "max_value": 100, "show_needle": true },
        "segment_list": [
            { "id": 0, "title": { "title": "cold" }, "settings": { "segment_lower": 0, "segment_upper": 40 } },
            { "id": 1, "title": { "title": "hot" }, "settings": { "segment_lower": 40, "segment_upper": 100 } }
        ],
        "advanced": { "options": { "animate": true } }
    }))
}
