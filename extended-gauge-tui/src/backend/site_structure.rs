//! Page tree of the gauge card editor
//!
//! The root page holds the title, the entity (with a settings page), the main
//! gauge settings and the sortable segment list. Each segment opens a page with
//! its title and settings.

use std::sync::Arc;

use anyhow::Result;
use extended_gauge_core::Page;

const SITE_STRUCTURE: &str = include_str!("../../assets/site_structure.json");

pub fn main_page() -> Result<Arc<Page>> {
    Ok(Page::from_json(SITE_STRUCTURE)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use extended_gauge_core::types::{schema_fields, Selector};
    use extended_gauge_core::{ConfigValue, SectionKind};

    #[test]
    fn embedded_tree_parses() {
        let page = main_page().unwrap();
        let names: Vec<_> = page.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["title", "entity", "main", "segment_list"]);
        assert!(page.title.is_none());
    }

    #[test]
    fn segment_list_links_to_segment_page() {
        let page = main_page().unwrap();
        let list = page.section("segment_list").unwrap();
        assert_eq!(list.kind, SectionKind::ElementList);
        assert!(list.sortable);

        let segment = list.link.as_ref().unwrap();
        assert_eq!(segment.title.as_deref(), Some("edit_segment"));
        assert_eq!(segment.alternative_title.as_deref(), Some("add_segment"));

        let settings = segment.section("settings").unwrap();
        let schema = settings.resolve_schema(&ConfigValue::Null);
        let fields: Vec<_> = schema_fields(&schema).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            fields,
            ["segment_lower", "segment_upper", "segment_color", "segment_value_replacement"]
        );
    }

    #[test]
    fn entity_field_only_offers_sensors() {
        let page = main_page().unwrap();
        let entity = page.section("entity").unwrap();
        let schema = entity.resolve_schema(&ConfigValue::Null);
        let field = schema_fields(&schema)[0];

        let Selector::Entity { filter } = &field.selector else {
            panic!("entity selector expected");
        };
        assert!(filter.matches("sensor.boiler"));
        assert!(!filter.matches("light.kitchen"));
        assert_eq!(
            entity.link.as_ref().and_then(|p| p.title.as_deref()),
            Some("entity_settings")
        );
    }
}
