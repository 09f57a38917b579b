//! Column formatters.
//!
//! A column reads one value out of a [`Record`] and renders it as the markup
//! for one table cell. Rendering is two steps:
//!
//! 1. [`Column::values`] builds a mapping of template variable names to values.
//! 2. [`Column::render`] substitutes that mapping into the column's template,
//!    HTML-escaping every interpolated value.
//!
//! | Column | Value |
//! |--------|-------|
//! | [`TextColumn`] | Display label, else raw field, else empty |
//! | [`ForeignKeyColumn`] | Field of a related record |
//! | [`ListColumn`] | `<ul>` of one field per collection item |
//! | [`GroupedListColumn`] | `<ul>` grouped under `<strong>` capitalized titles |
//! | [`BooleanColumn`] | Yes/No label with an optional muted annotation |
//!
//! The [`Col`] shorthand builds boxed columns for a table:
//!
//! ```rust
//! use admintable::column::Col;
//!
//! let columns = vec![
//!     Col::text("name", "Name"),
//!     Col::foreign_key("category", "name", "Category"),
//!     Col::boolean("active", "Active"),
//! ];
//! assert_eq!(columns[1].label(), "Category");
//! ```

mod boolean;
mod foreign_key;
mod list;
mod text;

pub use boolean::BooleanColumn;
pub use foreign_key::ForeignKeyColumn;
pub use list::{GroupedListColumn, ItemGroup, ListColumn};
pub use text::TextColumn;

use admintable_render::{Renderer, SafeHtml};

use crate::error::Result;
use crate::ordering::Dir;
use crate::record::Record;
use crate::settings::TableSettings;

/// Template variables produced by a column for one record.
pub type ColumnValues = serde_json::Map<String, serde_json::Value>;

/// A table column.
pub trait Column: Send + Sync {
    /// Header label.
    fn label(&self) -> &str;

    /// Record attribute this column reads.
    fn field(&self) -> &str;

    /// Template the column's values are rendered through.
    fn template(&self) -> &str;

    /// Extracts the template variables for `record`.
    fn values(&self, record: &dyn Record, settings: &TableSettings) -> Result<ColumnValues>;

    /// Renders the cell markup for `record` from the inline template.
    ///
    /// A [`Table`](crate::Table) registers the template once at build time
    /// and renders rows through that copy instead.
    fn render(
        &self,
        record: &dyn Record,
        renderer: &Renderer,
        settings: &TableSettings,
    ) -> Result<SafeHtml> {
        let values = self.values(record, settings)?;
        Ok(renderer.render_str(self.template(), &values)?)
    }
}

impl std::fmt::Debug for dyn Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("field", &self.field())
            .field("label", &self.label())
            .finish()
    }
}

/// Shorthand constructors for boxed columns.
pub struct Col;

impl Col {
    /// Plain text column.
    pub fn text(field: impl Into<String>, label: impl Into<String>) -> Box<dyn Column> {
        Box::new(TextColumn::new(field, label))
    }

    /// Attribute `related_field` of the record's related object `field`.
    pub fn foreign_key(
        field: impl Into<String>,
        related_field: impl Into<String>,
        label: impl Into<String>,
    ) -> Box<dyn Column> {
        Box::new(ForeignKeyColumn::new(field, related_field, label))
    }

    /// Bulleted list of `item_field` for every item in collection `field`.
    pub fn list(
        field: impl Into<String>,
        item_field: impl Into<String>,
        label: impl Into<String>,
    ) -> Box<dyn Column> {
        Box::new(ListColumn::new(field, item_field, label))
    }

    /// Bulleted list grouped by `title_field`, sorted in direction `dir`.
    pub fn grouped_list(
        field: impl Into<String>,
        item_field: impl Into<String>,
        title_field: impl Into<String>,
        dir: Dir,
        label: impl Into<String>,
    ) -> Box<dyn Column> {
        Box::new(GroupedListColumn::new(field, item_field, title_field, label).order(dir))
    }

    /// Yes/No column.
    pub fn boolean(field: impl Into<String>, label: impl Into<String>) -> Box<dyn Column> {
        Box::new(BooleanColumn::new(field, label))
    }

    /// Yes/No column that appends `annotation` when `flag_field` is true.
    pub fn boolean_annotated(
        field: impl Into<String>,
        label: impl Into<String>,
        flag_field: impl Into<String>,
        annotation: impl Into<String>,
    ) -> Box<dyn Column> {
        Box::new(BooleanColumn::new(field, label).annotate(flag_field, annotation))
    }
}

/// Upper-cases the first character of `text` and lower-cases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
