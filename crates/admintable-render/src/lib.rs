//! # admintable-render
//!
//! Template rendering foundation for `admintable`: a [`TemplateEngine`]
//! abstraction with a MiniJinja implementation, the built-in table templates,
//! and [`SafeHtml`] for escaped output.
//!
//! ```rust
//! use admintable_render::{template::builtin, Renderer};
//! use serde_json::json;
//!
//! let renderer = Renderer::new().unwrap();
//! let headers = renderer
//!     .render(builtin::HEADERS, &json!({"headers": ["Name", ""]}))
//!     .unwrap();
//! assert_eq!(headers, "<th>Name</th><th></th>");
//! ```

mod error;
mod html;
pub mod template;

pub use error::RenderError;
pub use html::SafeHtml;
pub use template::{ContextMap, MiniJinjaEngine, Renderer, TemplateEngine};
