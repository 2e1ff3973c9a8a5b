//! Render model handed to rendering collaborators

use std::collections::BTreeMap;

use serde::Serialize;

use super::path::ConfigPath;
use super::schema::Schema;
use super::value::ConfigValue;

/// Validation errors of one section: field name to error key
pub type ErrorMap = BTreeMap<String, String>;

/// Everything needed to draw the current page
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    /// Localised page header, `None` when blank
    pub header: Option<String>,
    pub can_go_back: bool,
    /// Number of frames on the stack
    pub depth: usize,
    /// Location of the displayed data, from the configuration root
    pub path: ConfigPath,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionView {
    Menu(MenuView),
    Form(FormView),
    Entity(EntityView),
    ElementList(ElementListView),
    Custom(CustomView),
}

impl SectionView {
    pub fn name(&self) -> &str {
        match self {
            Self::Menu(view) => &view.name,
            Self::Form(view) | Self::Entity(EntityView { form: view, .. }) => &view.name,
            Self::ElementList(view) => &view.name,
            Self::Custom(view) => &view.name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuView {
    pub name: String,
    pub header: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub name: String,
    pub schema: Schema,
    pub data: ConfigValue,
    pub errors: ErrorMap,
}

/// A form with an edit affordance that opens the linked page
#[derive(Debug, Clone, Serialize)]
pub struct EntityView {
    pub form: FormView,
    pub can_edit: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ElementRow {
    pub index: usize,
    pub id: Option<i64>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ElementListView {
    pub name: String,
    pub title: String,
    /// Shown instead of the title when the list is empty
    pub empty_text: String,
    pub add_new_text: String,
    pub sortable: bool,
    pub rows: Vec<ElementRow>,
    pub can_add: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomView {
    pub name: String,
    pub data: ConfigValue,
    pub errors: ErrorMap,
    pub content: Option<serde_json::Value>,
}
