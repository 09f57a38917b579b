use std::borrow::Cow;

use serde_json::json;

use super::{Column, ColumnValues};
use crate::error::{Result, TableError};
use crate::record::Record;
use crate::settings::TableSettings;

const TEMPLATE: &str = "{{ value }}";

/// Field of a related record.
///
/// The related object must exist: its absence is
/// [`TableError::MissingRelated`]. A missing field on a present related
/// object renders empty. Display labels are not consulted.
#[derive(Debug, Clone)]
pub struct ForeignKeyColumn {
    field: String,
    related_field: String,
    label: String,
    template: Cow<'static, str>,
}

impl ForeignKeyColumn {
    pub fn new(
        field: impl Into<String>,
        related_field: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        ForeignKeyColumn {
            field: field.into(),
            related_field: related_field.into(),
            label: label.into(),
            template: Cow::Borrowed(TEMPLATE),
        }
    }

    /// Replaces the cell template. The template receives `value`.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Cow::Owned(template.into());
        self
    }

    pub fn related_field(&self) -> &str {
        &self.related_field
    }
}

impl Column for ForeignKeyColumn {
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
        let related = record
            .related(&self.field)
            .ok_or_else(|| TableError::MissingRelated {
                column: self.label.clone(),
                field: self.field.clone(),
            })?;

        let value = related
            .field(&self.related_field)
            .map(|v| v.to_string())
            .unwrap_or_default();

        let mut values = ColumnValues::new();
        values.insert("value".to_string(), json!(value));
        Ok(values)
    }
}
