//! # admintable - HTML list tables for admin views
//!
//! `admintable` renders the list pages of an admin interface: a header row,
//! a row per record with one formatted cell per column, and an actions cell
//! with edit/delete links gated by per-record permission hooks. The finished
//! fragment goes through an HTML-escaping template engine and comes back as
//! [`SafeHtml`].
//!
//! ## Core Concepts
//!
//! - [`Record`]: typed access to a record's fields, related objects and collections
//! - [`column`]: formatters that turn one record field into one cell
//! - [`Table`]: title, columns, URL builders and classes, fixed at definition time
//! - [`PreparedTable`]: a table bound to records, a [`Request`] and a [`Context`];
//!   the only thing that renders
//! - [`TableSettings`]: labels and classes, loadable from YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use admintable::column::{BooleanColumn, Col};
//! use admintable::{Context, Dir, Request, Table};
//! use serde_json::json;
//!
//! let table = Table::builder("Pantry")
//!     .column(Col::text("name", "Name"))
//!     .column(Col::foreign_key("shelf", "label", "Shelf"))
//!     .column(Col::grouped_list("items", "name", "kind", Dir::Asc, "Contents"))
//!     .column(Box::new(
//!         BooleanColumn::new("open", "Open").annotate("featured", "(featured)"),
//!     ))
//!     .edit_url(|ids| format!("/pantries/{}/edit/", ids[0]))
//!     .delete_url(|ids| format!("/pantries/{}/delete/", ids[0]))
//!     .build()
//!     .unwrap();
//!
//! let pantries = vec![json!({
//!     "id": 1,
//!     "name": "Main",
//!     "shelf": {"label": "A1"},
//!     "items": [
//!         {"name": "Leek", "kind": "vegetable"},
//!         {"name": "Apple", "kind": "fruit"},
//!     ],
//!     "open": true,
//!     "featured": true,
//! })];
//!
//! let request = Request::new("/pantries/").with_user("alice");
//! let html = table
//!     .prepare(&pantries, &request, Context::new())
//!     .render(Context::new())
//!     .unwrap();
//!
//! assert!(html
//!     .as_str()
//!     .contains("<strong>Fruit</strong><li>Apple</li><strong>Vegetable</strong><li>Leek</li>"));
//! assert!(html
//!     .as_str()
//!     .contains(r#"Yes<br /><span class="text-muted"><em>(featured)</em></span>"#));
//! ```
//!
//! ## Pagination
//!
//! The table template includes `partials/pagination_table.html` after the
//! table. The built-in partial shows `page` / `num_pages` from the context;
//! replace it with the site's own through [`Table::renderer_mut`] or
//! [`TableBuilder::renderer`].

pub mod column;
mod error;
mod ordering;
mod record;
mod request;
mod settings;
mod table;

pub use admintable_render as render;
pub use admintable_render::{RenderError, Renderer, SafeHtml};

pub use column::{Col, Column, ColumnValues};
pub use error::{Result, TableError};
pub use ordering::{compare_field_values, Dir};
pub use record::{Record, RecordId, Value};
pub use request::{Context, Request};
pub use settings::{Labels, TableSettings};
pub use table::{
    column_template_name, Action, ActionLink, PreparedTable, Row, Table, TableBuilder, ToolsCell,
    UrlBuilder,
};
