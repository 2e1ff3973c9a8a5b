//! Editor hooks Trait
//!
//! Card-specific policy plugs into the editor through [`EditorHooks`]: validation,
//! derived defaults, list element defaults, removal confirmation, custom section
//! content and text localisation. Every method has a neutral default, so a host
//! only overrides what it needs.

use crate::types::{ConfigValue, ErrorMap, PageSection};

/// Policy callbacks invoked by the editor session
///
/// `page_name` is the section name through which the current page was reached
/// (empty on the root page).
pub trait EditorHooks: Send + Sync {
    /// Validate the data of one section.
    ///
    /// Errors go into `errors` (field name to error key), which starts out empty.
    /// Returning `false` skips [`EditorHooks::value_changed`]; the data is still stored.
    fn validate_form(
        &self,
        _page_name: &str,
        _section: &PageSection,
        _data: &ConfigValue,
        _errors: &mut ErrorMap,
    ) -> bool {
        true
    }

    /// Derive further values of the page after a valid section edit.
    ///
    /// Receives the page data with the new section value already in place and
    /// returns the page data to store.
    fn value_changed(
        &self,
        _page_name: &str,
        page_data: ConfigValue,
        _section_name: &str,
        _new_value: &ConfigValue,
        _old_value: &ConfigValue,
    ) -> ConfigValue {
        page_data
    }

    /// Fill defaults into a freshly added list element
    fn list_element_added(&self, _list_name: &str, element: ConfigValue) -> ConfigValue {
        element
    }

    /// Confirm removal of `element`; `false` vetoes the change
    fn list_element_removing(&self, _list_name: &str, _element: &ConfigValue) -> bool {
        true
    }

    /// Content of a custom section
    fn render_custom(
        &self,
        _section: &PageSection,
        _data: &ConfigValue,
        _errors: &ErrorMap,
    ) -> Option<serde_json::Value> {
        None
    }

    /// The host reported that the configuration was saved
    fn config_saved(&self) {}

    fn localize_text(&self, key: &str) -> String {
        key.to_string()
    }

    fn localize_error(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Hooks with every default in place
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEditorHooks;

impl EditorHooks for DefaultEditorHooks {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SectionKind;

    #[test]
    fn defaults_are_neutral() {
        let hooks = DefaultEditorHooks;
        let section = PageSection::new("main", SectionKind::Form);
        let data = ConfigValue::from(serde_json::json!({ "min_value": 0 }));
        let mut errors = ErrorMap::new();

        assert!(hooks.validate_form("", &section, &data, &mut errors));
        assert!(errors.is_empty());
        assert!(hooks
            .value_changed("", data.clone(), "main", &ConfigValue::Null, &ConfigValue::Null)
            .ptr_eq(&data));
        assert!(hooks.list_element_added("segment_list", data.clone()).ptr_eq(&data));
        assert!(hooks.list_element_removing("segment_list", &data));
        assert!(hooks.render_custom(&section, &data, &errors).is_none());
        assert_eq!(hooks.localize_text("edit_segment"), "edit_segment");
        assert_eq!(hooks.localize_error("out_of_range"), "out_of_range");
    }
}
