//! Error type for column and table rendering.

use admintable_render::RenderError;
use thiserror::Error;

/// Errors raised while building or rendering a table.
///
/// Missing scalar fields are never errors; columns render their default
/// instead. Missing related objects and collections abort the render.
#[derive(Debug, Error)]
pub enum TableError {
    /// A foreign-key column's related object is absent.
    #[error("column '{column}': record has no related object '{field}'")]
    MissingRelated { column: String, field: String },

    /// A list column's collection is absent.
    #[error("column '{column}': record has no collection '{field}'")]
    MissingCollection { column: String, field: String },

    /// A table was built without any columns.
    #[error("table '{0}' has no columns")]
    NoColumns(String),

    /// Settings could not be loaded.
    #[error("invalid table settings: {0}")]
    Settings(String),

    /// Template rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
