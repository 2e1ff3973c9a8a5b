//! Form schema types
//!
//! A schema is the list of fields a form section shows. The JSON shape follows the
//! host form widget: plain fields carry a `name` and a single-key `selector`, and
//! fields can be grouped into a `grid`.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use super::value::ConfigValue;

pub type Schema = Vec<SchemaItem>;

/// Schema entry: a grid of nested items or a single field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaItem {
    Grid(SchemaGrid),
    Field(SchemaField),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaGrid {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_min_width: Option<String>,
    pub schema: Schema,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    pub selector: Selector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberMode {
    Box,
    Slider,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityFilter {
    #[serde(default)]
    pub domain: Vec<String>,
}

impl EntityFilter {
    /// Whether an entity id such as `sensor.boiler` passes the domain filter
    pub fn matches(&self, entity_id: &str) -> bool {
        if self.domain.is_empty() {
            return true;
        }
        entity_id
            .split_once('.')
            .is_some_and(|(domain, _)| self.domain.iter().any(|d| d == domain))
    }
}

/// Widget kind of a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    Text {},
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<NumberMode>,
    },
    Boolean {},
    Entity {
        #[serde(default)]
        filter: EntityFilter,
    },
    ColorRgb {},
    Select {
        #[serde(default)]
        options: Vec<String>,
    },
}

impl SchemaItem {
    pub fn field(name: impl Into<String>, selector: Selector) -> Self {
        Self::Field(SchemaField {
            name: name.into(),
            selector,
        })
    }

    pub fn grid(column_min_width: impl Into<String>, schema: Schema) -> Self {
        Self::Grid(SchemaGrid {
            kind: "grid".to_string(),
            column_min_width: Some(column_min_width.into()),
            schema,
        })
    }
}

/// All plain fields of a schema in display order, grids flattened
pub fn schema_fields(schema: &[SchemaItem]) -> Vec<&SchemaField> {
    let mut fields = Vec::new();
    collect_fields(schema, &mut fields);
    fields
}

fn collect_fields<'a>(schema: &'a [SchemaItem], out: &mut Vec<&'a SchemaField>) {
    for item in schema {
        match item {
            SchemaItem::Grid(grid) => collect_fields(&grid.schema, out),
            SchemaItem::Field(field) => out.push(field),
        }
    }
}

/// Builds a schema from the current value of the controlling field
pub type SchemaBuilder = Arc<dyn Fn(&ConfigValue) -> Schema + Send + Sync>;

/// Schema of a section, fixed or depending on one field of the section's data
#[derive(Clone)]
pub enum SectionSchema {
    Static(Schema),
    Conditional { field: String, build: SchemaBuilder },
}

impl SectionSchema {
    /// Concrete schema for the current section data.
    ///
    /// Conditional schemas read `field` from `data`; a missing field reads as `Null`.
    pub fn resolve(&self, data: &ConfigValue) -> Schema {
        match self {
            Self::Static(schema) => schema.clone(),
            Self::Conditional { field, build } => {
                let value = data.get(field).cloned().unwrap_or_default();
                build(&value)
            }
        }
    }
}

impl fmt::Debug for SectionSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(schema) => f.debug_tuple("Static").field(schema).finish(),
            Self::Conditional { field, .. } => f
                .debug_struct("Conditional")
                .field("field", field)
                .finish_non_exhaustive(),
        }
    }
}

// Page trees loaded from JSON can only carry static schemas
impl<'de> Deserialize<'de> for SectionSchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Schema::deserialize(deserializer).map(Self::Static)
    }
}
