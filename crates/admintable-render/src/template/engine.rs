//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait which lets the renderer
//! work with different template backends. The default implementation is
//! [`MiniJinjaEngine`], configured for HTML output.

use minijinja::{AutoEscape, Environment, Value};

use crate::error::RenderError;

/// A template engine that can render templates with data.
///
/// Engines must HTML-escape interpolated values by default; markup that is
/// already trusted is passed through with the `safe` filter.
pub trait TemplateEngine: Send + Sync {
    /// Compiles and renders a template string in one step.
    ///
    /// The template may `{% include %}` any template previously registered
    /// via [`add_template`](Self::add_template).
    fn render_template(&self, template: &str, data: &serde_json::Value)
        -> Result<String, RenderError>;

    /// Adds (or replaces) a named template.
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    /// Renders a previously registered template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Checks if a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine.
///
/// Every template, named or inline, is rendered with HTML auto-escaping.
///
/// # Example
///
/// ```rust
/// use admintable_render::template::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let engine = MiniJinjaEngine::new();
/// let output = engine
///     .render_template("<td>{{ name }}</td>", &json!({"name": "Fish & Chips"}))
///     .unwrap();
/// assert_eq!(output, "<td>Fish &amp; Chips</td>");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates a new engine that HTML-escapes every template.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_name: &str| AutoEscape::Html);
        Self { env }
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    ///
    /// Use this to register host-specific filters or globals.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render_template(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError> {
        let value = Value::from_serialize(data);
        Ok(self.env.render_str(template, value)?)
    }

    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        let value = Value::from_serialize(data);
        Ok(tmpl.render(value)?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}
