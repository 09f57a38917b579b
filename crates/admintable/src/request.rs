//! Request-scoped inputs to a render.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Extra template variables supplied for one render.
pub type Context = BTreeMap<String, serde_json::Value>;

/// The caller's identity and request details.
///
/// Serialized into the table template as `request`, and handed to record
/// capability hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Authenticated user name, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Request path, used by pagination links.
    #[serde(default)]
    pub path: String,

    /// Query string parameters.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub query: BTreeMap<String, String>,

    /// Permission names granted to the user.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub permissions: BTreeSet<String>,
}

impl Request {
    /// Anonymous request for `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Request {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.insert(permission.into());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn has_perm(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}
