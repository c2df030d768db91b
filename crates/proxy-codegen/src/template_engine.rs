//! Template engine for C# proxy generation using Handlebars.
//!
//! Wraps Handlebars with the built-in client proxy templates registered.
//! HTML escaping is disabled since the output is C# source, where generic
//! arguments contain `<` and `>`.
//!
//! # Examples
//!
//! ```
//! use proxy_gen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let context = json!({"class_name": "BookClientProxy", "namespace": "Acme.ClientProxies"});
//! let partial = engine.render("csharp/client-proxy-partial", &context).unwrap();
//! assert!(partial.contains("public partial class BookClientProxy"));
//! ```

use handlebars::Handlebars;
use proxy_gen_core::{Error, Result};
use serde::Serialize;

/// Name of the generated client proxy template.
pub const CLIENT_PROXY_TEMPLATE: &str = "csharp/client-proxy";

/// Name of the user-owned partial class template.
pub const CLIENT_PROXY_PARTIAL_TEMPLATE: &str = "csharp/client-proxy-partial";

/// Template engine for proxy source generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the C# templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_csharp_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_csharp_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        handlebars
            .register_template_string(
                CLIENT_PROXY_TEMPLATE,
                include_str!("../templates/csharp/client-proxy.cs.hbs"),
            )
            .map_err(|e| Error::SerializationError {
                message: format!("Failed to register client proxy template: {e}"),
                source: None,
            })?;

        handlebars
            .register_template_string(
                CLIENT_PROXY_PARTIAL_TEMPLATE,
                include_str!("../templates/csharp/client-proxy-partial.cs.hbs"),
            )
            .map_err(|e| Error::SerializationError {
                message: format!("Failed to register client proxy partial template: {e}"),
                source: None,
            })?;

        Ok(())
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context is missing a variable the template uses
    /// - Template rendering fails
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::SerializationError {
                message: format!("Template rendering failed: {e}"),
                source: None,
            })
    }

    /// Registers an additional template at runtime.
    ///
    /// # Errors
    ///
    /// Returns error if template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::SerializationError {
                message: format!("Failed to register template '{name}': {e}"),
                source: None,
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_engine_creation() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.has_template(CLIENT_PROXY_TEMPLATE));
        assert!(engine.has_template(CLIENT_PROXY_PARTIAL_TEMPLATE));
    }

    #[test]
    fn test_render_does_not_escape_generics() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .register_template_string("probe", "{{type_name}}")
            .unwrap();

        let result = engine
            .render("probe", &json!({"type_name": "Dictionary<string,BookDto>"}))
            .unwrap();
        assert_eq!(result, "Dictionary<string,BookDto>");
    }

    #[test]
    fn test_render_partial_template() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine
            .render(
                CLIENT_PROXY_PARTIAL_TEMPLATE,
                &json!({"class_name": "BookClientProxy", "namespace": "Acme.ClientProxies"}),
            )
            .unwrap();

        assert!(result.starts_with("// This file is part of BookClientProxy, you can customize it here"));
        assert!(result.contains("namespace Acme.ClientProxies"));
        assert!(!result.contains("ClientProxyBase"));
    }

    #[test]
    fn test_strict_mode_rejects_missing_variable() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render(CLIENT_PROXY_PARTIAL_TEMPLATE, &json!({"class_name": "X"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_render_unknown_template() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.render("csharp/missing", &json!({})).is_err());
    }

    #[test]
    fn test_invalid_template_registration() {
        let mut engine = TemplateEngine::new().unwrap();
        assert!(engine.register_template_string("broken", "{{#if x}}unclosed").is_err());
    }
}
