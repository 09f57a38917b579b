//! Table presentation settings.
//!
//! Labels and CSS classes that vary per site or locale live here rather than
//! in templates, so a host can load them from YAML:
//!
//! ```rust
//! use admintable::TableSettings;
//!
//! let settings = TableSettings::from_yaml(r#"
//! css_classes: [table, table-hover]
//! labels:
//!   yes: Oui
//!   no: Non
//! "#).unwrap();
//!
//! assert_eq!(settings.labels.yes, "Oui");
//! assert_eq!(settings.labels.edit, "Edit");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Localizable labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub yes: String,
    pub no: String,
    pub edit: String,
    pub delete: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            yes: "Yes".to_string(),
            no: "No".to_string(),
            edit: "Edit".to_string(),
            delete: "Delete".to_string(),
        }
    }
}

/// Presentation settings shared by every column and the actions cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Classes on the `<table>` element when the table sets none of its own.
    pub css_classes: Vec<String>,
    /// Class of the `<div>` around the table and pagination; empty drops the div.
    pub wrapper_class: String,
    pub labels: Labels,
    /// Class of the `<ul>` rendered by list columns.
    pub list_class: String,
    /// Class of the annotation span appended by boolean columns.
    pub muted_class: String,
    /// Class of the actions `<td>`.
    pub actions_class: String,
    /// Selector of the delete confirmation modal, emitted as
    /// `data-modal-delete` on delete links; empty omits the hook.
    pub delete_modal: String,
    /// Class of an enabled action link.
    pub link_class: String,
    /// Class added to an action link the record does not permit.
    pub disabled_class: String,
}

impl Default for TableSettings {
    fn default() -> Self {
        TableSettings {
            css_classes: vec!["table".to_string(), "table-hover".to_string()],
            wrapper_class: "table-responsive".to_string(),
            labels: Labels::default(),
            list_class: "list-unstyled".to_string(),
            muted_class: "text-muted".to_string(),
            actions_class: "text-right table-icons-column".to_string(),
            delete_modal: "#modal-delete".to_string(),
            link_class: "btn btn-sm".to_string(),
            disabled_class: "disabled".to_string(),
        }
    }
}

impl TableSettings {
    /// Parses settings from YAML. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, TableError> {
        serde_yaml::from_str(yaml).map_err(|e| TableError::Settings(e.to_string()))
    }

    /// Reads and parses a YAML settings file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| TableError::Settings(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&yaml)
    }

    /// Class string for an action link.
    pub(crate) fn link_class(&self, enabled: bool) -> String {
        if enabled {
            self.link_class.clone()
        } else {
            format!("{} {}", self.link_class, self.disabled_class)
        }
    }

    pub(crate) fn yes_no(&self, value: bool) -> &str {
        if value {
            &self.labels.yes
        } else {
            &self.labels.no
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = TableSettings::default();
        assert_eq!(settings.css_classes, vec!["table", "table-hover"]);
        assert_eq!(settings.wrapper_class, "table-responsive");
        assert_eq!(settings.list_class, "list-unstyled");
        assert_eq!(settings.delete_modal, "#modal-delete");
        assert_eq!(settings.yes_no(true), "Yes");
        assert_eq!(settings.yes_no(false), "No");
        assert_eq!(settings.link_class(true), "btn btn-sm");
        assert_eq!(settings.link_class(false), "btn btn-sm disabled");
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let settings = TableSettings::from_yaml("muted_class: small\n").unwrap();
        assert_eq!(settings.muted_class, "small");
        assert_eq!(settings.labels, Labels::default());
        assert_eq!(settings.actions_class, "text-right table-icons-column");
    }

    #[test]
    fn empty_strings_disable_markup_hooks() {
        let settings = TableSettings::from_yaml("wrapper_class: ''\ndelete_modal: ''\n").unwrap();
        assert!(settings.wrapper_class.is_empty());
        assert!(settings.delete_modal.is_empty());
        assert_eq!(settings.list_class, "list-unstyled");
    }

    #[test]
    fn invalid_yaml_is_settings_error() {
        let result = TableSettings::from_yaml("css_classes: {not: [a list");
        assert!(matches!(result, Err(TableError::Settings(_))));
    }

    #[test]
    fn yaml_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "labels:\n  delete: Remove\n").unwrap();

        let settings = TableSettings::from_yaml_file(tmp.path()).unwrap();
        assert_eq!(settings.labels.delete, "Remove");
        assert_eq!(settings.labels.edit, "Edit");
    }

    #[test]
    fn missing_yaml_file() {
        let result = TableSettings::from_yaml_file("/no/such/settings.yaml");
        assert!(matches!(result, Err(TableError::Settings(_))));
    }
}
