use std::borrow::Cow;

use serde_json::json;

use super::{Column, ColumnValues};
use crate::error::Result;
use crate::record::{display_or_field, Record};
use crate::settings::TableSettings;

const TEMPLATE: &str = "{{ value }}";

/// Plain text column.
///
/// Renders the field's display label when the record has a non-empty one,
/// otherwise the raw field value, otherwise an empty cell. A missing field is
/// never an error.
#[derive(Debug, Clone)]
pub struct TextColumn {
    field: String,
    label: String,
    template: Cow<'static, str>,
}

impl TextColumn {
    pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
        TextColumn {
            field: field.into(),
            label: label.into(),
            template: Cow::Borrowed(TEMPLATE),
        }
    }

    /// Replaces the cell template. The template receives `value`.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Cow::Owned(template.into());
        self
    }
}

impl Column for TextColumn {
    fn label(&self) -> &str {
        &self.label
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn template(&self) -> &str {
        &self.template
    }

    fn values(&self, record: &dyn Record, _settings: &TableSettings) -> Result<ColumnValues> {
        let value = display_or_field(record, &self.field).unwrap_or_default();
        let mut values = ColumnValues::new();
        values.insert("value".to_string(), json!(value));
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admintable_render::Renderer;
    use serde_json::json;

    fn render(column: &TextColumn, record: &serde_json::Value) -> String {
        let renderer = Renderer::new().unwrap();
        column
            .render(record, &renderer, &TableSettings::default())
            .unwrap()
            .into_string()
    }

    #[test]
    fn renders_raw_value() {
        let column = TextColumn::new("name", "Name");
        assert_eq!(render(&column, &json!({"name": "Apple"})), "Apple");
        assert_eq!(render(&column, &json!({"name": 12})), "12");
    }

    #[test]
    fn prefers_display_label() {
        let column = TextColumn::new("status", "Status");
        let record = json!({"status": "a", "status_display": "Active"});
        assert_eq!(render(&column, &record), "Active");
    }

    #[test]
    fn empty_display_label_falls_back_to_value() {
        let column = TextColumn::new("status", "Status");
        let record = json!({"status": "a", "status_display": ""});
        assert_eq!(render(&column, &record), "a");
    }

    #[test]
    fn missing_field_renders_empty() {
        let column = TextColumn::new("name", "Name");
        assert_eq!(render(&column, &json!({"id": 1})), "");

        let values = column
            .values(&json!({"id": 1}), &TableSettings::default())
            .unwrap();
        assert_eq!(values.get("value"), Some(&json!("")));
    }

    #[test]
    fn escapes_markup() {
        let column = TextColumn::new("name", "Name");
        let out = render(&column, &json!({"name": "Salt & <Pepper>"}));
        assert_eq!(out, "Salt &amp; &lt;Pepper&gt;");
    }

    #[test]
    fn custom_template() {
        let column = TextColumn::new("name", "Name").with_template("<strong>{{ value }}</strong>");
        assert_eq!(
            render(&column, &json!({"name": "Apple"})),
            "<strong>Apple</strong>"
        );
    }
}
