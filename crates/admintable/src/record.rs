//! Record access for column formatters.
//!
//! Columns never look fields up dynamically. Instead a record implements
//! [`Record`], answering typed questions about its fields, related objects,
//! and collections, each returning `None` when the thing is absent. Columns
//! map the absent case to their own defaults.
//!
//! # Example
//!
//! ```
//! use admintable::{Record, RecordId, Value};
//!
//! struct Product {
//!     id: u64,
//!     name: String,
//!     active: bool,
//! }
//!
//! impl Record for Product {
//!     fn id(&self) -> RecordId {
//!         self.id.into()
//!     }
//!
//!     fn field(&self, name: &str) -> Option<Value<'_>> {
//!         match name {
//!             "name" => Some(Value::text(&self.name)),
//!             "active" => Some(Value::Bool(self.active)),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::request::{Context, Request};

/// Identifier handed to edit/delete URL builders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId(id.to_string())
    }
}

impl From<u32> for RecordId {
    fn from(id: u32) -> Self {
        RecordId(id.to_string())
    }
}

/// Scalar field value, borrowed from the record where possible.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Text(Cow<'a, str>),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl<'a> Value<'a> {
    /// Borrowed text value.
    pub fn text(s: &'a str) -> Self {
        Value::Text(Cow::Borrowed(s))
    }

    /// Returns the boolean, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the text, if this is a `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Text(Cow::Owned(s))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::text(s)
    }
}

/// A data record that columns can read.
///
/// Only [`id`](Record::id) and [`field`](Record::field) are required. The
/// capability hooks default to "always permitted".
pub trait Record {
    /// Identifier used to build edit/delete URLs.
    fn id(&self) -> RecordId;

    /// Scalar attribute by name.
    fn field(&self, name: &str) -> Option<Value<'_>>;

    /// Human-readable label for a choice field, if the field has one.
    fn display(&self, _name: &str) -> Option<String> {
        None
    }

    /// Related object reached through `name`.
    fn related(&self, _name: &str) -> Option<&dyn Record> {
        None
    }

    /// Related collection reached through `name`, in iteration order.
    fn collection(&self, _name: &str) -> Option<Vec<&dyn Record>> {
        None
    }

    /// Whether the current request may edit this record.
    fn can_be_edited(&self, _request: &Request, _context: &Context) -> bool {
        true
    }

    /// Whether the current request may delete this record.
    fn can_be_deleted(&self, _request: &Request, _context: &Context) -> bool {
        true
    }
}

/// Text for `name`: the display label when present and non-empty, else the
/// raw field value, else `None`.
pub(crate) fn display_or_field(record: &dyn Record, name: &str) -> Option<String> {
    record
        .display(name)
        .filter(|label| !label.is_empty())
        .or_else(|| record.field(name).map(|value| value.to_string()))
}

/// JSON objects are records.
///
/// - `id` reads the `"id"` member (string or number); absent ids are empty.
/// - Scalars (string, number, bool) are fields; `null` is absent.
/// - `display(name)` reads the string member `"<name>_display"`.
/// - Nested objects are related records; arrays of objects are collections.
/// - Boolean members `"can_be_edited"` / `"can_be_deleted"` drive the
///   capability hooks, defaulting to `true`.
impl Record for serde_json::Value {
    fn id(&self) -> RecordId {
        match self.get("id") {
            Some(serde_json::Value::String(s)) => RecordId::new(s.clone()),
            Some(serde_json::Value::Number(n)) => RecordId::new(n.to_string()),
            _ => RecordId::new(""),
        }
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        match self.get(name)? {
            serde_json::Value::String(s) => Some(Value::text(s)),
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Value::Int(i)),
                None => n.as_f64().map(Value::Float),
            },
            _ => None,
        }
    }

    fn display(&self, name: &str) -> Option<String> {
        self.get(format!("{}_display", name))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    fn related(&self, name: &str) -> Option<&dyn Record> {
        let related = self.get(name)?;
        related.is_object().then_some(related as &dyn Record)
    }

    fn collection(&self, name: &str) -> Option<Vec<&dyn Record>> {
        let items = self.get(name)?.as_array()?;
        Some(items.iter().map(|item| item as &dyn Record).collect())
    }

    fn can_be_edited(&self, _request: &Request, _context: &Context) -> bool {
        self.get("can_be_edited")
            .and_then(|v| v.as_bool())
            .unwrap_or(true)
    }

    fn can_be_deleted(&self, _request: &Request, _context: &Context) -> bool {
        self.get("can_be_deleted")
            .and_then(|v| v.as_bool())
            .unwrap_or(true)
    }
}
