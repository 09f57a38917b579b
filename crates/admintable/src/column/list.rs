use std::borrow::Cow;
use std::cmp::Ordering;

use admintable_render::RenderError;
use serde::Serialize;
use serde_json::json;

use super::{capitalize, Column, ColumnValues};
use crate::error::{Result, TableError};
use crate::ordering::{compare_field_values, Dir};
use crate::record::{display_or_field, Record, Value};
use crate::settings::TableSettings;

const LIST_TEMPLATE: &str = concat!(
    r#"<ul{% if list_class %} class="{{ list_class }}"{% endif %}>"#,
    "{% for item in items %}<li>{{ item }}</li>{% endfor %}",
    "</ul>",
);

const GROUPED_TEMPLATE: &str = concat!(
    r#"<ul{% if list_class %} class="{{ list_class }}"{% endif %}>"#,
    "{% for group in groups %}",
    "<strong>{{ group.title }}</strong>",
    "{% for item in group.items %}<li>{{ item }}</li>{% endfor %}",
    "{% endfor %}",
    "</ul>",
);

fn collection_of<'r>(
    record: &'r dyn Record,
    field: &str,
    label: &str,
) -> Result<Vec<&'r dyn Record>> {
    record
        .collection(field)
        .ok_or_else(|| TableError::MissingCollection {
            column: label.to_string(),
            field: field.to_string(),
        })
}

/// Bulleted list of one field per item of a related collection.
///
/// Items keep the collection's iteration order. A missing collection is
/// [`TableError::MissingCollection`]; a missing item field renders as an
/// empty list item.
#[derive(Debug, Clone)]
pub struct ListColumn {
    field: String,
    item_field: String,
    label: String,
    template: Cow<'static, str>,
}

impl ListColumn {
    pub fn new(
        field: impl Into<String>,
        item_field: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        ListColumn {
            field: field.into(),
            item_field: item_field.into(),
            label: label.into(),
            template: Cow::Borrowed(LIST_TEMPLATE),
        }
    }

    /// Replaces the cell template. The template receives `items` and
    /// `list_class`.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Cow::Owned(template.into());
        self
    }

    /// Item texts in collection order.
    pub fn items(&self, record: &dyn Record) -> Result<Vec<String>> {
        let collection = collection_of(record, &self.field, &self.label)?;
        Ok(collection
            .into_iter()
            .map(|item| display_or_field(item, &self.item_field).unwrap_or_default())
            .collect())
    }
}

impl Column for ListColumn {
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
        let mut values = ColumnValues::new();
        values.insert("items".to_string(), json!(self.items(record)?));
        values.insert("list_class".to_string(), json!(settings.list_class));
        Ok(values)
    }
}

/// A titled run of list items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemGroup {
    /// Capitalized title text.
    pub title: String,
    pub items: Vec<String>,
}

/// Bulleted list grouped under `<strong>` titles.
///
/// The collection is stably sorted by `title_field` in the configured
/// direction before grouping, so every distinct title heads exactly one
/// group whatever order the record returns items in. Items without a title
/// sort last and form a group with an empty title.
#[derive(Debug, Clone)]
pub struct GroupedListColumn {
    field: String,
    item_field: String,
    title_field: String,
    dir: Dir,
    label: String,
    template: Cow<'static, str>,
}

impl GroupedListColumn {
    pub fn new(
        field: impl Into<String>,
        item_field: impl Into<String>,
        title_field: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        GroupedListColumn {
            field: field.into(),
            item_field: item_field.into(),
            title_field: title_field.into(),
            dir: Dir::Asc,
            label: label.into(),
            template: Cow::Borrowed(GROUPED_TEMPLATE),
        }
    }

    /// Sets the title sort direction (ascending by default).
    pub fn order(mut self, dir: Dir) -> Self {
        self.dir = dir;
        self
    }

    /// Replaces the cell template. The template receives `groups` and
    /// `list_class`.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Cow::Owned(template.into());
        self
    }

    /// Groups the record's collection by title.
    pub fn groups(&self, record: &dyn Record) -> Result<Vec<ItemGroup>> {
        let mut keyed: Vec<(Option<Value<'static>>, &dyn Record)> =
            collection_of(record, &self.field, &self.label)?
                .into_iter()
                .map(|item| (self.group_key(item), item))
                .collect();
        keyed.sort_by(|(a, _), (b, _)| compare_field_values(a.as_ref(), b.as_ref(), self.dir));

        let mut groups: Vec<ItemGroup> = Vec::new();
        for (index, (key, item)) in keyed.iter().enumerate() {
            let starts_group = index == 0
                || compare_field_values(keyed[index - 1].0.as_ref(), key.as_ref(), Dir::Asc)
                    != Ordering::Equal;

            if starts_group {
                let title = key.as_ref().map(Value::to_string).unwrap_or_default();
                groups.push(ItemGroup {
                    title: capitalize(&title),
                    items: Vec::new(),
                });
            }

            if let Some(group) = groups.last_mut() {
                group
                    .items
                    .push(display_or_field(*item, &self.item_field).unwrap_or_default());
            }
        }
        Ok(groups)
    }

    /// The value an item is sorted and grouped by.
    ///
    /// Text is compared in its capitalized form, the form the header shows,
    /// so titles differing only in case share a group. Empty text counts as
    /// no title.
    fn group_key(&self, item: &dyn Record) -> Option<Value<'static>> {
        let key = match item.display(&self.title_field).filter(|l| !l.is_empty()) {
            Some(label) => Value::from(capitalize(&label)),
            None => match item.field(&self.title_field)? {
                Value::Text(text) => Value::from(capitalize(&text)),
                Value::Int(n) => Value::Int(n),
                Value::Float(n) => Value::Float(n),
                Value::Bool(b) => Value::Bool(b),
            },
        };
        match key {
            Value::Text(text) if text.is_empty() => None,
            key => Some(key),
        }
    }
}

impl Column for GroupedListColumn {
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
        let groups = serde_json::to_value(self.groups(record)?).map_err(RenderError::from)?;
        let mut values = ColumnValues::new();
        values.insert("groups".to_string(), groups);
        values.insert("list_class".to_string(), json!(settings.list_class));
        Ok(values)
    }
}
