//! Declarative page tree
//!
//! Pages and their sections are static templates. They are shared through `Arc`
//! by every frame that shows them and are never modified while editing.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::schema::{Schema, SchemaBuilder, SectionSchema};
use super::value::ConfigValue;
use crate::error::{CoreError, CoreResult};

/// Icon shown for menu sections without an explicit icon
pub const DEFAULT_MENU_ICON: &str = "mdi:dots-horizontal-circle-outline";

/// Closed set of section kinds the dispatcher knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Menu,
    Form,
    Entity,
    ElementList,
    Custom,
}

/// A named unit of a page, bound to the configuration field of the same name
#[derive(Debug, Clone, Deserialize)]
pub struct PageSection {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub alternative_title: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub schema: Option<SectionSchema>,
    #[serde(default)]
    pub link: Option<Arc<Page>>,
    #[serde(default)]
    pub sortable: bool,
}

impl PageSection {
    pub fn new(name: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            title: None,
            alternative_title: None,
            icon: None,
            schema: None,
            link: None,
            sortable: false,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_alternative_title(mut self, title: impl Into<String>) -> Self {
        self.alternative_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(SectionSchema::Static(schema));
        self
    }

    #[must_use]
    pub fn with_conditional_schema(mut self, field: impl Into<String>, build: SchemaBuilder) -> Self {
        self.schema = Some(SectionSchema::Conditional {
            field: field.into(),
            build,
        });
        self
    }

    #[must_use]
    pub fn with_link(mut self, page: impl Into<Arc<Page>>) -> Self {
        self.link = Some(page.into());
        self
    }

    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Schema for the current section data, empty if the section has none
    pub fn resolve_schema(&self, data: &ConfigValue) -> Schema {
        self.schema
            .as_ref()
            .map(|schema| schema.resolve(data))
            .unwrap_or_default()
    }
}

/// A page template: header texts and ordered sections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub alternative_title: Option<String>,
    #[serde(default)]
    pub sections: Vec<PageSection>,
}

impl Page {
    pub fn new(sections: Vec<PageSection>) -> Self {
        Self {
            title: None,
            alternative_title: None,
            sections,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_alternative_title(mut self, title: impl Into<String>) -> Self {
        self.alternative_title = Some(title.into());
        self
    }

    pub fn section(&self, name: &str) -> Option<&PageSection> {
        self.sections.iter().find(|section| section.name == name)
    }

    /// Parse and check a page tree
    pub fn from_json(json: &str) -> CoreResult<Arc<Self>> {
        let page: Self =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidPage(e.to_string()))?;
        page.validate()?;
        Ok(Arc::new(page))
    }

    /// Section names must be unique per page, element lists need a row page
    pub fn validate(&self) -> CoreResult<()> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.name.as_str()) {
                return Err(CoreError::InvalidPage(format!(
                    "duplicate section name '{}'",
                    section.name
                )));
            }
            if section.kind == SectionKind::ElementList && section.link.is_none() {
                return Err(CoreError::InvalidPage(format!(
                    "element list '{}' has no link",
                    section.name
                )));
            }
            if let Some(link) = &section.link {
                link.validate()?;
            }
        }
        Ok(())
    }
}
