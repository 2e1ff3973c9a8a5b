//! Page rows

use extended_gauge_core::types::{
    schema_fields, CustomView, ElementListView, ErrorMap, FormView, SchemaField, SectionView,
};
use extended_gauge_core::{ConfigValue, EditorHooks, PageView};

use crate::i18n::t;

#[derive(Debug, Clone, PartialEq)]
pub enum RowKind {
    /// Section caption
    Heading,
    Menu {
        icon: String,
    },
    Field {
        field: SchemaField,
        value: ConfigValue,
        /// Localised validation error
        error: Option<String>,
    },
    /// Opens the page linked from an entity section
    EditLink,
    Element {
        index: usize,
        sortable: bool,
    },
    AddElement {
        enabled: bool,
    },
    /// Section-level message, usually a validation error
    Notice,
    Custom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Section of the current page the row belongs to
    pub section: String,
    pub label: String,
    pub kind: RowKind,
}

impl Row {
    fn new(section: &str, label: impl Into<String>, kind: RowKind) -> Self {
        Self {
            section: section.to_string(),
            label: label.into(),
            kind,
        }
    }

    pub fn is_selectable(&self) -> bool {
        !matches!(
            self.kind,
            RowKind::Heading | RowKind::Notice | RowKind::Custom
        )
    }
}

/// Flatten a page into rows
pub fn build_rows(page: &PageView, hooks: &dyn EditorHooks) -> Vec<Row> {
    let mut rows = Vec::new();
    for section in &page.sections {
        match section {
            SectionView::Menu(menu) => rows.push(Row::new(
                &menu.name,
                menu.header.clone(),
                RowKind::Menu {
                    icon: menu.icon.clone(),
                },
            )),
            SectionView::Form(form) => push_form(&mut rows, form, hooks),
            SectionView::Entity(entity) => {
                push_form(&mut rows, &entity.form, hooks);
                if entity.can_edit {
                    rows.push(Row::new(
                        &entity.form.name,
                        t().editor.edit_settings,
                        RowKind::EditLink,
                    ));
                }
            }
            SectionView::ElementList(list) => push_list(&mut rows, list),
            SectionView::Custom(custom) => push_custom(&mut rows, custom, hooks),
        }
    }
    rows
}

fn push_form(rows: &mut Vec<Row>, form: &FormView, hooks: &dyn EditorHooks) {
    rows.push(Row::new(&form.name, hooks.localize_text(&form.name), RowKind::Heading));

    let fields = schema_fields(&form.schema);
    for field in &fields {
        rows.push(Row::new(
            &form.name,
            hooks.localize_text(&field.name),
            RowKind::Field {
                field: (*field).clone(),
                value: form.data.get(&field.name).cloned().unwrap_or_default(),
                error: form.errors.get(&field.name).cloned(),
            },
        ));
    }

    let is_field = |key: &str| fields.iter().any(|field| field.name == key);
    push_notices(rows, &form.name, &form.errors, is_field);
}

fn push_list(rows: &mut Vec<Row>, list: &ElementListView) {
    let heading = if list.rows.is_empty() && !list.empty_text.is_empty() {
        &list.empty_text
    } else {
        &list.title
    };
    rows.push(Row::new(&list.name, heading.clone(), RowKind::Heading));

    for row in &list.rows {
        let text = if row.text.is_empty() {
            t().editor.untitled_row.to_string()
        } else {
            row.text.clone()
        };
        rows.push(Row::new(
            &list.name,
            text,
            RowKind::Element {
                index: row.index,
                sortable: list.sortable,
            },
        ));
    }

    rows.push(Row::new(
        &list.name,
        list.add_new_text.clone(),
        RowKind::AddElement {
            enabled: list.can_add,
        },
    ));
}

fn push_custom(rows: &mut Vec<Row>, custom: &CustomView, hooks: &dyn EditorHooks) {
    rows.push(Row::new(&custom.name, hooks.localize_text(&custom.name), RowKind::Heading));
    if let Some(content) = &custom.content {
        let text = match content {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        rows.push(Row::new(&custom.name, text, RowKind::Custom));
    }
    push_notices(rows, &custom.name, &custom.errors, |_| false);
}

fn push_notices(rows: &mut Vec<Row>, section: &str, errors: &ErrorMap, is_field: impl Fn(&str) -> bool) {
    for (key, message) in errors {
        if !is_field(key) {
            rows.push(Row::new(section, message.clone(), RowKind::Notice));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extended_gauge_core::services::render_page;
    use extended_gauge_core::traits::DefaultEditorHooks;
    use extended_gauge_core::NavigationStack;
    use serde_json::json;

    use crate::backend::main_page;

    fn rows_for(config: serde_json::Value) -> Vec<Row> {
        let mut stack = NavigationStack::new();
        stack.seed(main_page().unwrap(), config.into());
        let view = render_page(&mut stack, &DefaultEditorHooks).unwrap();
        build_rows(&view, &DefaultEditorHooks)
    }

    fn kinds(rows: &[Row]) -> Vec<&'static str> {
        rows.iter()
            .map(|row| match row.kind {
                RowKind::Heading => "heading",
                RowKind::Menu { .. } => "menu",
                RowKind::Field { .. } => "field",
                RowKind::EditLink => "link",
                RowKind::Element { .. } => "element",
                RowKind::AddElement { .. } => "add",
                RowKind::Notice => "notice",
                RowKind::Custom => "custom",
            })
            .collect()
    }

    #[test]
    fn main_page_rows_follow_sections() {
        let rows = rows_for(json!({
            "segment_list": [ { "id": 0, "title": { "title": "Low" } } ]
        }));
        let kinds = kinds(&rows);

        // title: heading + field, entity: heading + field + link, main: heading + 8 fields
        assert_eq!(&kinds[..5], ["heading", "field", "heading", "field", "link"]);
        assert_eq!(kinds.iter().filter(|k| **k == "field").count(), 10);
        assert_eq!(&kinds[kinds.len() - 3..], ["heading", "element", "add"]);

        let element = &rows[rows.len() - 2];
        assert_eq!(element.label, "Low");
        assert_eq!(element.section, "segment_list");
        // a single row cannot be reordered
        assert_eq!(element.kind, RowKind::Element { index: 0, sortable: false });
    }

    #[test]
    fn empty_list_uses_empty_text_and_allows_adding() {
        let rows = rows_for(json!({}));
        let heading = rows.iter().rev().find(|r| r.kind == RowKind::Heading).unwrap();
        assert_eq!(heading.label, "segment_list_empty");
        assert_eq!(rows.last().unwrap().kind, RowKind::AddElement { enabled: true });
    }

    #[test]
    fn untitled_last_row_disables_adding() {
        let rows = rows_for(json!({ "segment_list": [ { "id": 0 } ] }));
        assert_eq!(rows.last().unwrap().kind, RowKind::AddElement { enabled: false });
        assert_eq!(rows[rows.len() - 2].label, t().editor.untitled_row);
    }

    #[test]
    fn field_rows_carry_values() {
        let rows = rows_for(json!({ "main": { "min_value": 5 } }));
        let min = rows.iter().find(|r| r.label == "min_value").unwrap();
        let RowKind::Field { value, error, .. } = &min.kind else {
            panic!("field row expected");
        };
        assert_eq!(value.as_i64(), Some(5));
        assert!(error.is_none());
        assert!(min.is_selectable());
    }

    #[test]
    fn section_errors_become_notices() {
        let page = PageView {
            header: None,
            can_go_back: false,
            depth: 1,
            path: extended_gauge_core::ConfigPath::root(),
            sections: vec![SectionView::Form(FormView {
                name: "main".to_string(),
                schema: Vec::new(),
                data: ConfigValue::Null,
                errors: ErrorMap::from([("base".to_string(), "bad range".to_string())]),
            })],
        };
        let rows = build_rows(&page, &DefaultEditorHooks);
        assert_eq!(kinds(&rows), ["heading", "notice"]);
        assert_eq!(rows[1].label, "bad range");
        assert!(!rows[1].is_selectable());
    }
}
