//! Error types for template rendering.
//!
//! [`RenderError`] is the error type for every rendering operation. It hides
//! the underlying template engine's error type behind a stable public API.

use thiserror::Error;

/// Error type for template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template syntax error or compilation failure.
    #[error("template error: {0}")]
    Template(String),

    /// Template not registered with the engine.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Data could not be serialized into a template context.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error while loading templates from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure raised while evaluating a template.
    #[error("{0}")]
    Operation(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            ErrorKind::SyntaxError
            | ErrorKind::BadEscape
            | ErrorKind::UndefinedError
            | ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownMethod => RenderError::Template(err.to_string()),
            ErrorKind::BadSerialization => RenderError::Serialization(err.to_string()),
            _ => RenderError::Operation(err.to_string()),
        }
    }
}
