//! Shared test helpers

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use extended_gauge_core::traits::ChannelConfigListener;
use extended_gauge_core::types::ErrorMap;
use extended_gauge_core::{ConfigEditor, ConfigValue, EditorHooks, Page, PageSection};
use tokio::sync::mpsc::UnboundedReceiver;

/// Assert that an `Option` is `Some` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

pub const PAGE_TREE: &str = r#"{
    "sections": [
        { "name": "a", "type": "form" },
        { "name": "b", "type": "form" },
        {
            "name": "list",
            "type": "element_list",
            "title": "rows",
            "sortable": true,
            "link": {
                "title": "edit_row",
                "alternative_title": "add_row",
                "sections": [ { "name": "f", "type": "form" } ]
            }
        }
    ]
}"#;

pub fn page_tree() -> Arc<Page> {
    match Page::from_json(PAGE_TREE) {
        Ok(page) => page,
        Err(e) => panic!("test page tree does not parse: {e}"),
    }
}

pub fn config() -> ConfigValue {
    ConfigValue::from(serde_json::json!({
        "a": { "x": 1 },
        "b": { "y": 2 },
        "list": [
            { "id": 0, "f": { "v": 1 } },
            { "id": 1, "f": { "v": 2 } },
            { "id": 2, "f": { "v": 3 } }
        ]
    }))
}

/// Hooks that reject `v > 100`, derive `touched = true` and can veto removals
#[derive(Default)]
pub struct CountingHooks {
    pub veto_removal: bool,
    pub derived: AtomicUsize,
}

impl EditorHooks for CountingHooks {
    fn validate_form(
        &self,
        _page_name: &str,
        _section: &PageSection,
        data: &ConfigValue,
        errors: &mut ErrorMap,
    ) -> bool {
        if data.get("v").and_then(ConfigValue::as_i64).is_some_and(|v| v > 100) {
            errors.insert("v".to_string(), "too_large".to_string());
            return false;
        }
        true
    }

    fn value_changed(
        &self,
        _page_name: &str,
        page_data: ConfigValue,
        _section_name: &str,
        _new_value: &ConfigValue,
        _old_value: &ConfigValue,
    ) -> ConfigValue {
        self.derived.fetch_add(1, Ordering::SeqCst);
        page_data.with_key("touched", true.into()).unwrap_or(page_data)
    }

    fn list_element_removing(&self, _list_name: &str, _element: &ConfigValue) -> bool {
        !self.veto_removal
    }
}

pub struct Session {
    pub editor: ConfigEditor,
    pub hooks: Arc<CountingHooks>,
    pub changes: UnboundedReceiver<ConfigValue>,
}

impl Session {
    /// Drain every emitted root
    pub fn emitted(&mut self) -> Vec<ConfigValue> {
        let mut roots = Vec::new();
        while let Ok(root) = self.changes.try_recv() {
            roots.push(root);
        }
        roots
    }
}

pub fn session(hooks: CountingHooks) -> Session {
    let hooks = Arc::new(hooks);
    let (listener, changes) = ChannelConfigListener::new();
    let mut editor = ConfigEditor::new(
        page_tree(),
        Arc::clone(&hooks) as Arc<dyn EditorHooks>,
        Arc::new(listener),
    );
    editor.set_config(config());
    Session {
        editor,
        hooks,
        changes,
    }
}
