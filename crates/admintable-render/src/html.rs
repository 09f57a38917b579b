//! Escaped HTML fragments.

use std::fmt;

use serde::{Serialize, Serializer};

/// An HTML fragment that has already been escaped.
///
/// Every string produced by the renderer is wrapped in `SafeHtml` so callers
/// can tell trusted markup apart from raw text. Insert it into a surrounding
/// page verbatim; escaping it again would double-encode entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Wraps markup that the caller guarantees is already escaped.
    pub fn from_trusted(markup: impl Into<String>) -> Self {
        SafeHtml(markup.into())
    }

    /// Returns the markup as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the fragment, returning the markup.
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SafeHtml {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SafeHtml {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for SafeHtml {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl From<SafeHtml> for minijinja::Value {
    fn from(html: SafeHtml) -> Self {
        minijinja::Value::from_safe_string(html.0)
    }
}
