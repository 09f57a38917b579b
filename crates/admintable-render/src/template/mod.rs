//! HTML template rendering for admin tables.
//!
//! Templates are rendered by MiniJinja with HTML auto-escaping always on.
//! Cell markup produced by column templates is already escaped and reaches
//! the row template through the `safe` filter.
//!
//! ## Built-in templates
//!
//! | Name | Renders |
//! |------|---------|
//! | `admintable/table.html` | Outer shell: caption, header row, body rows, pagination include |
//! | `admintable/headers.html` | `<th>` cells from `headers` |
//! | `admintable/row.html` | One `<tr>` from `row.cells` and `row.tools` |
//! | `admintable/tools.html` | Edit/delete action cell from `tools` |
//! | `partials/pagination_table.html` | Page navigation, hidden unless `num_pages > 1` |
//!
//! Override any of them with [`Renderer::add_template`] or load a directory of
//! replacements with [`Renderer::add_template_dir`].

pub mod builtin;
mod engine;
mod loader;
mod renderer;

pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use loader::{walk_template_dir, TemplateFile, TEMPLATE_EXTENSIONS};
pub use renderer::{ContextMap, Renderer};
