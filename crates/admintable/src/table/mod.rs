//! Table configuration and the prepare step.
//!
//! A [`Table`] is configured once, when the list view is defined: title,
//! columns, URL builders, classes. Rendering needs request-scoped inputs
//! that only exist once a request arrives, so a table cannot render by
//! itself. [`Table::prepare`] pairs it with records, a [`Request`], and a
//! [`Context`], producing a [`PreparedTable`] that can.
//!
//! ```rust
//! use admintable::column::Col;
//! use admintable::{Context, Request, Table};
//! use serde_json::json;
//!
//! let table = Table::builder("Products")
//!     .column(Col::text("name", "Name"))
//!     .column(Col::boolean("active", "Active"))
//!     .edit_url(|ids| format!("/products/{}/edit/", ids[0]))
//!     .delete_url(|ids| format!("/products/{}/delete/", ids[0]))
//!     .build()
//!     .unwrap();
//!
//! let products = vec![json!({"id": 1, "name": "Apple", "active": true})];
//! let request = Request::new("/products/");
//! let prepared = table.prepare(&products, &request, Context::new());
//!
//! let html = prepared.render(Context::new()).unwrap();
//! assert!(html.as_str().contains("<td>Apple</td>"));
//! assert!(html
//!     .as_str()
//!     .contains(r#"href="&#x2f;products&#x2f;1&#x2f;edit&#x2f;""#));
//! ```

mod prepared;

pub use prepared::{Action, ActionLink, PreparedTable, Row, ToolsCell};

use admintable_render::Renderer;

use crate::column::Column;
use crate::error::{Result, TableError};
use crate::record::{Record, RecordId};
use crate::request::{Context, Request};
use crate::settings::TableSettings;

/// Builds an edit or delete URL from a one-element identifier slice.
pub type UrlBuilder = Box<dyn Fn(&[RecordId]) -> String + Send + Sync>;

/// Name under which the template of the column at `index` is registered.
pub fn column_template_name(index: usize) -> String {
    format!("admintable/column/{}", index)
}

/// A configured table.
///
/// The column list is fixed once built. The actions column is not part of
/// it; the renderer always appends that one last.
pub struct Table {
    title: String,
    columns: Vec<Box<dyn Column>>,
    column_templates: Vec<String>,
    edit_url: Option<UrlBuilder>,
    delete_url: Option<UrlBuilder>,
    css_classes: Vec<String>,
    settings: TableSettings,
    renderer: Renderer,
}

impl Table {
    /// Starts building a table with the given title.
    pub fn builder(title: impl Into<String>) -> TableBuilder {
        TableBuilder::new(title)
    }

    /// Builds a table from its four defining parts with default settings.
    pub fn new<E, D>(
        title: impl Into<String>,
        columns: Vec<Box<dyn Column>>,
        edit_url: E,
        delete_url: D,
    ) -> Result<Self>
    where
        E: Fn(&[RecordId]) -> String + Send + Sync + 'static,
        D: Fn(&[RecordId]) -> String + Send + Sync + 'static,
    {
        TableBuilder::new(title)
            .columns(columns)
            .edit_url(edit_url)
            .delete_url(delete_url)
            .build()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &[Box<dyn Column>] {
        &self.columns
    }

    /// Registered template names, one per column in column order.
    pub fn column_templates(&self) -> &[String] {
        &self.column_templates
    }

    pub fn css_classes(&self) -> &[String] {
        &self.css_classes
    }

    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Mutable access to the renderer, for registering template overrides.
    ///
    /// Column templates can be replaced too, by their
    /// [`column_template_name`].
    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    /// Pairs the table with the records and request-scoped inputs to render.
    pub fn prepare<'t, R: Record + 't>(
        &'t self,
        objects: impl IntoIterator<Item = &'t R>,
        request: &'t Request,
        context: Context,
    ) -> PreparedTable<'t> {
        let objects = objects
            .into_iter()
            .map(|record| record as &dyn Record)
            .collect();
        self.prepare_records(objects, request, context)
    }

    /// Like [`prepare`](Self::prepare), for a collection of mixed record types.
    pub fn prepare_records<'t>(
        &'t self,
        objects: Vec<&'t dyn Record>,
        request: &'t Request,
        context: Context,
    ) -> PreparedTable<'t> {
        log::debug!(
            "preparing table '{}' with {} record(s)",
            self.title,
            objects.len()
        );
        PreparedTable::new(self, objects, request, context)
    }

    pub(crate) fn edit_url(&self, id: &RecordId) -> Option<String> {
        self.edit_url
            .as_ref()
            .map(|build| build(std::slice::from_ref(id)))
    }

    pub(crate) fn delete_url(&self, id: &RecordId) -> Option<String> {
        self.delete_url
            .as_ref()
            .map(|build| build(std::slice::from_ref(id)))
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("title", &self.title)
            .field("columns", &self.columns)
            .field("edit_url", &self.edit_url.is_some())
            .field("delete_url", &self.delete_url.is_some())
            .field("css_classes", &self.css_classes)
            .field("settings", &self.settings)
            .finish()
    }
}

/// Builder for [`Table`].
pub struct TableBuilder {
    title: String,
    columns: Vec<Box<dyn Column>>,
    edit_url: Option<UrlBuilder>,
    delete_url: Option<UrlBuilder>,
    css_classes: Option<Vec<String>>,
    settings: TableSettings,
    renderer: Option<Renderer>,
}

impl TableBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        TableBuilder {
            title: title.into(),
            columns: Vec::new(),
            edit_url: None,
            delete_url: None,
            css_classes: None,
            settings: TableSettings::default(),
            renderer: None,
        }
    }

    /// Appends a column.
    pub fn column(mut self, column: Box<dyn Column>) -> Self {
        self.columns.push(column);
        self
    }

    /// Appends several columns in order.
    pub fn columns(mut self, columns: impl IntoIterator<Item = Box<dyn Column>>) -> Self {
        self.columns.extend(columns);
        self
    }

    pub fn edit_url<F>(mut self, build: F) -> Self
    where
        F: Fn(&[RecordId]) -> String + Send + Sync + 'static,
    {
        self.edit_url = Some(Box::new(build));
        self
    }

    pub fn delete_url<F>(mut self, build: F) -> Self
    where
        F: Fn(&[RecordId]) -> String + Send + Sync + 'static,
    {
        self.delete_url = Some(Box::new(build));
        self
    }

    /// Adds a class to the `<table>` element.
    ///
    /// Without any, the table uses [`TableSettings::css_classes`].
    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.css_classes
            .get_or_insert_with(Vec::new)
            .push(class.into());
        self
    }

    pub fn settings(mut self, settings: TableSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Uses a preconfigured renderer, e.g. one with a host pagination partial.
    pub fn renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Builds the table.
    ///
    /// Every column template is compiled and registered with the renderer
    /// here, so a broken one fails the build rather than the first render.
    pub fn build(self) -> Result<Table> {
        if self.columns.is_empty() {
            return Err(TableError::NoColumns(self.title));
        }

        let mut renderer = match self.renderer {
            Some(renderer) => renderer,
            None => Renderer::new()?,
        };
        let column_templates = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| -> Result<String> {
                let name = column_template_name(index);
                renderer.add_template(&name, column.template())?;
                Ok(name)
            })
            .collect::<Result<Vec<_>>>()?;
        let css_classes = self
            .css_classes
            .unwrap_or_else(|| self.settings.css_classes.clone());

        Ok(Table {
            title: self.title,
            columns: self.columns,
            column_templates,
            edit_url: self.edit_url,
            delete_url: self.delete_url,
            css_classes,
            settings: self.settings,
            renderer,
        })
    }
}
