//! A table bound to records and a request, ready to render.

use std::fmt;

use admintable_render::template::builtin;
use admintable_render::{ContextMap, RenderError, SafeHtml};
use serde::Serialize;

use super::Table;
use crate::error::Result;
use crate::record::{Record, RecordId};
use crate::request::{Context, Request};

/// Row action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Edit,
    Delete,
}

/// One action link in the tools cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionLink {
    pub action: Action,
    pub label: String,
    /// Tooltip: the table title followed by the label.
    pub title: String,
    /// Target URL; `None` renders the disabled placeholder.
    pub url: Option<String>,
    /// Confirmation modal selector, set on delete links only.
    pub modal: Option<String>,
    pub class: String,
}

impl ActionLink {
    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }
}

/// The actions cell appended to every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolsCell {
    pub class: String,
    pub edit: ActionLink,
    pub delete: ActionLink,
}

/// One rendered data row: a cell per column, then the tools cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: RecordId,
    pub cells: Vec<SafeHtml>,
    pub tools: SafeHtml,
}

#[derive(Serialize)]
struct HeadersView {
    headers: Vec<String>,
}

#[derive(Serialize)]
struct ToolsView<'a> {
    tools: &'a ToolsCell,
}

#[derive(Serialize)]
struct RowView<'a> {
    row: &'a Row,
}

#[derive(Serialize)]
struct TableView<'a> {
    title: &'a str,
    wrapper_class: &'a str,
    css_class: String,
    headers: Vec<String>,
    rows: Vec<Row>,
}

/// A [`Table`] paired with records, a request, and extra template context.
///
/// Rendering does not mutate anything, so rendering the same prepared table
/// twice produces identical output.
pub struct PreparedTable<'t> {
    table: &'t Table,
    objects: Vec<&'t dyn Record>,
    request: &'t Request,
    context: Context,
}

impl<'t> PreparedTable<'t> {
    pub(crate) fn new(
        table: &'t Table,
        objects: Vec<&'t dyn Record>,
        request: &'t Request,
        context: Context,
    ) -> Self {
        PreparedTable {
            table,
            objects,
            request,
            context,
        }
    }

    pub fn table(&self) -> &'t Table {
        self.table
    }

    pub fn objects(&self) -> &[&'t dyn Record] {
        &self.objects
    }

    pub fn request(&self) -> &'t Request {
        self.request
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Header labels: one per column, then an empty one for the actions column.
    pub fn header_cells(&self) -> Vec<String> {
        self.table
            .columns()
            .iter()
            .map(|column| column.label().to_string())
            .chain(std::iter::once(String::new()))
            .collect()
    }

    /// The header cells as `<th>` markup.
    pub fn print_headers(&self) -> Result<SafeHtml> {
        let view = HeadersView {
            headers: self.header_cells(),
        };
        Ok(self.table.renderer().render(builtin::HEADERS, &view)?)
    }

    /// Edit and delete links for `record`.
    ///
    /// Both start disabled. Each is enabled with a URL built from the
    /// record's id when the table has a builder for it and the record's
    /// capability hook allows the action.
    pub fn tools(&self, record: &dyn Record) -> ToolsCell {
        let settings = self.table.settings();
        let id = record.id();

        let edit_url = if record.can_be_edited(self.request, &self.context) {
            self.table.edit_url(&id)
        } else {
            None
        };
        let delete_url = if record.can_be_deleted(self.request, &self.context) {
            self.table.delete_url(&id)
        } else {
            None
        };

        let modal = Some(settings.delete_modal.clone()).filter(|m| !m.is_empty());

        ToolsCell {
            class: settings.actions_class.clone(),
            edit: ActionLink {
                action: Action::Edit,
                label: settings.labels.edit.clone(),
                title: self.tooltip(&settings.labels.edit),
                class: settings.link_class(edit_url.is_some()),
                url: edit_url,
                modal: None,
            },
            delete: ActionLink {
                action: Action::Delete,
                label: settings.labels.delete.clone(),
                title: self.tooltip(&settings.labels.delete),
                class: settings.link_class(delete_url.is_some()),
                url: delete_url,
                modal,
            },
        }
    }

    fn tooltip(&self, label: &str) -> String {
        match self.table.title() {
            "" => label.to_string(),
            title => format!("{} {}", title, label),
        }
    }

    /// The tools cell for `record` as `<td>` markup.
    pub fn print_tools_column(&self, record: &dyn Record) -> Result<SafeHtml> {
        let tools = self.tools(record);
        Ok(self
            .table
            .renderer()
            .render(builtin::TOOLS, &ToolsView { tools: &tools })?)
    }

    /// Renders every column's cell and the tools cell for `record`.
    pub fn row(&self, record: &dyn Record) -> Result<Row> {
        let renderer = self.table.renderer();
        let settings = self.table.settings();

        let cells = self
            .table
            .columns()
            .iter()
            .zip(self.table.column_templates())
            .map(|(column, template)| -> Result<SafeHtml> {
                let values = column.values(record, settings)?;
                Ok(renderer.render(template, &values)?)
            })
            .collect::<Result<Vec<_>>>()?;
        let tools = self.print_tools_column(record)?;

        let id = record.id();
        log::trace!("rendered row {} of table '{}'", id, self.table.title());
        Ok(Row { id, cells, tools })
    }

    /// Rows for every prepared record, in collection order.
    pub fn rows(&self) -> Result<Vec<Row>> {
        self.objects.iter().map(|&record| self.row(record)).collect()
    }

    /// `record`'s row as `<tr>` markup.
    pub fn print_row(&self, record: &dyn Record) -> Result<SafeHtml> {
        let row = self.row(record)?;
        Ok(self
            .table
            .renderer()
            .render(builtin::ROW, &RowView { row: &row })?)
    }

    /// Every row's markup, concatenated.
    pub fn print_rows(&self) -> Result<SafeHtml> {
        let mut markup = String::new();
        for &record in &self.objects {
            markup.push_str(self.print_row(record)?.as_str());
        }
        Ok(SafeHtml::from_trusted(markup))
    }

    /// Renders the complete table.
    ///
    /// The template sees `title`, `css_class`, `headers`, `rows`, `request`,
    /// the prepared context, and `kwargs`. `kwargs` override context entries;
    /// the table's own variables override both.
    pub fn render(&self, kwargs: Context) -> Result<SafeHtml> {
        let view = TableView {
            title: self.table.title(),
            wrapper_class: &self.table.settings().wrapper_class,
            css_class: self.table.css_classes().join(" "),
            headers: self.header_cells(),
            rows: self.rows()?,
        };

        let mut context: ContextMap = self
            .context
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        context.extend(kwargs);
        context.insert(
            "request".to_string(),
            serde_json::to_value(self.request).map_err(RenderError::from)?,
        );

        log::debug!(
            "rendering table '{}' ({} rows) with {}",
            self.table.title(),
            view.rows.len(),
            builtin::TABLE
        );
        Ok(self
            .table
            .renderer()
            .render_with_context(builtin::TABLE, &view, &context)?)
    }
}

impl fmt::Debug for PreparedTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedTable")
            .field("table", &self.table.title())
            .field("objects", &self.objects.len())
            .field("request", &self.request)
            .field("context", &self.context)
            .finish()
    }
}

/// Same as [`PreparedTable::render`] with no kwargs.
///
/// A render error is logged and nothing is written. Call
/// [`render`](PreparedTable::render) to handle the error.
impl fmt::Display for PreparedTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render(Context::new()) {
            Ok(html) => f.write_str(html.as_str()),
            Err(err) => {
                log::warn!("failed to render table '{}': {}", self.table.title(), err);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Col;
    use crate::settings::TableSettings;
    use serde_json::json;

    fn products_table() -> Table {
        Table::builder("Products")
            .column(Col::text("name", "Name"))
            .column(Col::boolean("active", "Active"))
            .edit_url(|ids| format!("/products/{}/edit/", ids[0]))
            .delete_url(|ids| format!("/products/{}/delete/", ids[0]))
            .build()
            .unwrap()
    }

    #[test]
    fn header_cells_end_with_actions_column() {
        let table = products_table();
        let request = Request::default();
        let records: Vec<serde_json::Value> = Vec::new();
        let prepared = table.prepare(&records, &request, Context::new());

        assert_eq!(prepared.header_cells(), vec!["Name", "Active", ""]);
        assert_eq!(
            prepared.print_headers().unwrap(),
            "<th>Name</th><th>Active</th><th></th>"
        );
    }

    #[test]
    fn tools_enabled_by_default() {
        let table = products_table();
        let request = Request::default();
        let records = vec![json!({"id": 3})];
        let prepared = table.prepare(&records, &request, Context::new());

        let tools = prepared.tools(&records[0]);
        assert_eq!(tools.edit.url.as_deref(), Some("/products/3/edit/"));
        assert_eq!(tools.delete.url.as_deref(), Some("/products/3/delete/"));
        assert_eq!(tools.edit.class, "btn btn-sm");
        assert!(tools.delete.is_enabled());
    }

    #[test]
    fn tools_respect_capability_hooks() {
        let table = products_table();
        let request = Request::default();
        let records = vec![json!({"id": 3, "can_be_deleted": false})];
        let prepared = table.prepare(&records, &request, Context::new());

        let tools = prepared.tools(&records[0]);
        assert!(tools.edit.is_enabled());
        assert!(!tools.delete.is_enabled());
        assert_eq!(tools.delete.class, "btn btn-sm disabled");
    }

    #[test]
    fn tools_carry_tooltips_and_delete_modal() {
        let table = products_table();
        let request = Request::default();
        let records = vec![json!({"id": 3})];
        let prepared = table.prepare(&records, &request, Context::new());

        let tools = prepared.tools(&records[0]);
        assert_eq!(tools.edit.title, "Products Edit");
        assert_eq!(tools.delete.title, "Products Delete");
        assert_eq!(tools.edit.modal, None);
        assert_eq!(tools.delete.modal.as_deref(), Some("#modal-delete"));
    }

    #[test]
    fn untitled_table_tooltip_is_label() {
        let table = Table::builder("")
            .column(Col::text("name", "Name"))
            .settings(TableSettings {
                delete_modal: String::new(),
                ..TableSettings::default()
            })
            .build()
            .unwrap();
        let request = Request::default();
        let records = vec![json!({"id": 3})];
        let prepared = table.prepare(&records, &request, Context::new());

        let tools = prepared.tools(&records[0]);
        assert_eq!(tools.edit.title, "Edit");
        assert_eq!(tools.delete.modal, None);
        let markup = prepared.print_tools_column(&records[0]).unwrap();
        assert!(!markup.as_str().contains("data-modal-delete"));
    }

    #[test]
    fn tools_disabled_without_url_builder() {
        let table = Table::builder("Read only")
            .column(Col::text("name", "Name"))
            .build()
            .unwrap();
        let request = Request::default();
        let records = vec![json!({"id": 1})];
        let prepared = table.prepare(&records, &request, Context::new());

        let tools = prepared.tools(&records[0]);
        assert!(!tools.edit.is_enabled());
        assert!(!tools.delete.is_enabled());
    }

    #[test]
    fn print_tools_column_markup() {
        let table = products_table();
        let request = Request::default();
        let records = vec![json!({"id": 3, "can_be_edited": false})];
        let prepared = table.prepare(&records, &request, Context::new());

        let out = prepared.print_tools_column(&records[0]).unwrap();
        assert_eq!(
            out,
            concat!(
                r#"<td class="text-right table-icons-column">"#,
                r##"<a data-no-pjax href="#" aria-disabled="true" title="Products Edit" class="btn btn-sm disabled">Edit</a>"##,
                " ",
                r#"<a data-no-pjax href="&#x2f;products&#x2f;3&#x2f;delete&#x2f;" title="Products Delete""#,
                r##" data-modal-delete="#modal-delete" data-modal-name="" class="btn btn-sm">Delete</a>"##,
                "</td>",
            )
        );
    }

    #[test]
    fn row_has_cell_per_column() {
        let table = products_table();
        let request = Request::default();
        let records = vec![json!({"id": 1, "name": "Apple", "active": true})];
        let prepared = table.prepare(&records, &request, Context::new());

        let row = prepared.row(&records[0]).unwrap();
        assert_eq!(row.id, RecordId::from(1u64));
        assert_eq!(row.cells, vec![SafeHtml::from_trusted("Apple"), SafeHtml::from_trusted("Yes")]);
        assert!(row
            .tools
            .as_str()
            .starts_with("<td class=\"text-right table-icons-column\">"));
    }

    #[test]
    fn print_rows_concatenates_in_order() {
        let table = products_table();
        let request = Request::default();
        let records = vec![
            json!({"id": 1, "name": "Apple", "active": true}),
            json!({"id": 2, "name": "Pear", "active": false}),
        ];
        let prepared = table.prepare(&records, &request, Context::new());

        let rows = prepared.print_rows().unwrap();
        let first = prepared.print_row(&records[0]).unwrap();
        let second = prepared.print_row(&records[1]).unwrap();
        assert_eq!(rows.as_str(), format!("{}{}", first, second));
        assert!(first.as_str().starts_with("<tr><td>Apple</td><td>Yes</td>"));
        assert!(first.as_str().ends_with("</td></tr>"));
    }

    #[test]
    fn render_error_aborts() {
        let table = Table::builder("Products")
            .column(Col::foreign_key("category", "name", "Category"))
            .build()
            .unwrap();
        let request = Request::default();
        let records = vec![json!({"id": 1, "category": {"name": "Fruit"}}), json!({"id": 2})];
        let prepared = table.prepare(&records, &request, Context::new());

        assert!(prepared.render(Context::new()).is_err());
        assert!(prepared.print_rows().is_err());
    }

    #[test]
    fn display_of_failing_table_writes_nothing() {
        let table = Table::builder("Products")
            .column(Col::foreign_key("category", "name", "Category"))
            .build()
            .unwrap();
        let request = Request::default();
        let records = vec![json!({"id": 1})];
        let prepared = table.prepare(&records, &request, Context::new());

        assert!(prepared.render(Context::new()).is_err());
        assert_eq!(prepared.to_string(), "");
        assert_eq!(format!("<main>{}</main>", prepared), "<main></main>");
    }

    #[test]
    fn rows_use_registered_column_templates() {
        let mut table = products_table();
        table
            .renderer_mut()
            .add_template("admintable/column/0", "<em>{{ value }}</em>")
            .unwrap();
        let request = Request::default();
        let records = vec![json!({"id": 1, "name": "Apple", "active": true})];
        let prepared = table.prepare(&records, &request, Context::new());

        let row = prepared.row(&records[0]).unwrap();
        assert_eq!(row.cells[0], "<em>Apple</em>");
        assert_eq!(row.cells[1], "Yes");
    }

    #[test]
    fn display_matches_render() {
        let table = products_table();
        let request = Request::default();
        let records = vec![json!({"id": 1, "name": "Apple", "active": true})];
        let prepared = table.prepare(&records, &request, Context::new());

        assert_eq!(
            prepared.to_string(),
            prepared.render(Context::new()).unwrap().into_string()
        );
        assert_eq!(prepared.len(), 1);
        assert!(!prepared.is_empty());
    }
}
