//! Renderer with the built-in table templates pre-registered.
//!
//! [`Renderer`] owns a [`TemplateEngine`] and seeds it with
//! [`BUILTIN_TEMPLATES`](super::builtin::BUILTIN_TEMPLATES). Templates added
//! later with the same name replace the built-in version:
//!
//! ```rust
//! use admintable_render::Renderer;
//! use serde_json::json;
//!
//! let mut renderer = Renderer::new().unwrap();
//! renderer
//!     .add_template("partials/pagination_table.html", "<nav>{{ page }}</nav>")
//!     .unwrap();
//!
//! let out = renderer
//!     .render("partials/pagination_table.html", &json!({"page": 2}))
//!     .unwrap();
//! assert_eq!(out, "<nav>2</nav>");
//! ```

use std::path::Path;

use serde::Serialize;

use super::builtin::BUILTIN_TEMPLATES;
use super::engine::{MiniJinjaEngine, TemplateEngine};
use super::loader::walk_template_dir;
use crate::error::RenderError;
use crate::html::SafeHtml;

/// Extra template variables merged into a render call.
pub type ContextMap = serde_json::Map<String, serde_json::Value>;

/// A renderer with the table templates registered.
pub struct Renderer {
    engine: Box<dyn TemplateEngine>,
}

impl Renderer {
    /// Creates a renderer backed by [`MiniJinjaEngine`].
    pub fn new() -> Result<Self, RenderError> {
        Self::with_engine(Box::new(MiniJinjaEngine::new()))
    }

    /// Creates a renderer backed by a custom engine.
    ///
    /// The built-in templates are registered with the engine before returning.
    pub fn with_engine(mut engine: Box<dyn TemplateEngine>) -> Result<Self, RenderError> {
        for (name, source) in BUILTIN_TEMPLATES {
            engine.add_template(name, source)?;
        }
        Ok(Self { engine })
    }

    /// Registers (or replaces) a named template.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        log::debug!("registering template {}", name);
        self.engine.add_template(name, source)
    }

    /// Registers every template found below `path`.
    ///
    /// See [`walk_template_dir`] for naming rules. Returns the number of
    /// templates registered.
    pub fn add_template_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, RenderError> {
        let files = walk_template_dir(path.as_ref())?;
        for file in &files {
            let source = file.read()?;
            self.add_template(&file.name, &source)?;
        }
        log::debug!(
            "loaded {} template(s) from {}",
            files.len(),
            path.as_ref().display()
        );
        Ok(files.len())
    }

    /// Returns true if a template with the given name is registered.
    pub fn has_template(&self, name: &str) -> bool {
        self.engine.has_template(name)
    }

    /// Renders a registered template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<SafeHtml, RenderError> {
        let value = serde_json::to_value(data)?;
        let output = self.engine.render_named(name, &value)?;
        Ok(SafeHtml::from_trusted(output))
    }

    /// Renders a registered template with extra context variables.
    ///
    /// `data` must serialize to an object. Its keys take precedence over
    /// `context` keys of the same name.
    pub fn render_with_context<T: Serialize>(
        &self,
        name: &str,
        data: &T,
        context: &ContextMap,
    ) -> Result<SafeHtml, RenderError> {
        let value = merge_context(serde_json::to_value(data)?, context)?;
        let output = self.engine.render_named(name, &value)?;
        Ok(SafeHtml::from_trusted(output))
    }

    /// Compiles and renders an inline template string.
    pub fn render_str<T: Serialize>(&self, source: &str, data: &T) -> Result<SafeHtml, RenderError> {
        let value = serde_json::to_value(data)?;
        let output = self.engine.render_template(source, &value)?;
        Ok(SafeHtml::from_trusted(output))
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}

fn merge_context(
    data: serde_json::Value,
    context: &ContextMap,
) -> Result<serde_json::Value, RenderError> {
    let serde_json::Value::Object(data) = data else {
        return Err(RenderError::Serialization(
            "template data must serialize to an object".to_string(),
        ));
    };

    let mut combined = context.clone();
    combined.extend(data);
    Ok(serde_json::Value::Object(combined))
}
