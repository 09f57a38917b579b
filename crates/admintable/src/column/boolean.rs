use std::borrow::Cow;

use serde_json::json;

use super::{Column, ColumnValues};
use crate::error::Result;
use crate::record::Record;
use crate::settings::TableSettings;

const TEMPLATE: &str = concat!(
    "{{ label }}",
    "{% if annotation %}",
    r#"<br /><span class="{{ muted_class }}"><em>{{ annotation }}</em></span>"#,
    "{% endif %}",
);

#[derive(Debug, Clone)]
struct Annotation {
    flag_field: String,
    text: String,
}

/// Yes/No column.
///
/// Labels come from [`TableSettings::labels`]. An absent or non-boolean
/// field reads as false. With [`annotate`](Self::annotate), an emphasized
/// muted span is appended on its own line whenever the record's flag field
/// is true.
#[derive(Debug, Clone)]
pub struct BooleanColumn {
    field: String,
    label: String,
    annotation: Option<Annotation>,
    template: Cow<'static, str>,
}

impl BooleanColumn {
    pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
        BooleanColumn {
            field: field.into(),
            label: label.into(),
            annotation: None,
            template: Cow::Borrowed(TEMPLATE),
        }
    }

    /// Appends `text` in a muted span when `flag_field` is true.
    pub fn annotate(mut self, flag_field: impl Into<String>, text: impl Into<String>) -> Self {
        self.annotation = Some(Annotation {
            flag_field: flag_field.into(),
            text: text.into(),
        });
        self
    }

    /// Replaces the cell template.
    ///
    /// The template receives `value`, `label`, `annotation` and `muted_class`.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Cow::Owned(template.into());
        self
    }
}

fn flag(record: &dyn Record, name: &str) -> bool {
    record
        .field(name)
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

impl Column for BooleanColumn {
    fn label(&self) -> &str {
        &self.label
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn template(&self) -> &str {
        &self.template
    }

    fn values(&self, record: &dyn Record, settings: &TableSettings) -> Result<ColumnValues> {
        let value = flag(record, &self.field);
        let annotation = self
            .annotation
            .as_ref()
            .filter(|a| flag(record, &a.flag_field))
            .map(|a| a.text.clone());

        let mut values = ColumnValues::new();
        values.insert("value".to_string(), json!(value));
        values.insert("label".to_string(), json!(settings.yes_no(value)));
        values.insert("annotation".to_string(), json!(annotation));
        values.insert("muted_class".to_string(), json!(settings.muted_class));
        Ok(values)
    }
}
