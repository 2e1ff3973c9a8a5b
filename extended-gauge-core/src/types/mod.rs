//! Type definition module

mod page;
mod path;
mod schema;
mod value;
mod view;

pub use page::{Page, PageSection, SectionKind, DEFAULT_MENU_ICON};
pub use path::{ConfigPath, PathStep};
pub use schema::{
    schema_fields, EntityFilter, NumberMode, Schema, SchemaBuilder, SchemaField, SchemaGrid,
    SchemaItem, SectionSchema, Selector,
};
pub use value::{ConfigValue, Record};
pub use view::{
    CustomView, ElementListView, ElementRow, EntityView, ErrorMap, FormView, MenuView, PageView,
    SectionView,
};
