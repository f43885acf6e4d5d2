//! Parametric template rendering via MiniJinja.

use crate::error::{Error, Result};
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates an environment carrying the case-conversion helpers
    /// templates rely on as their utility namespace.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_filter("snake_case", |value: String| cruet::to_snake_case(&value));
        env.add_filter("camel_case", |value: String| cruet::to_camel_case(&value));
        env.add_filter("pascal_case", |value: String| cruet::to_pascal_case(&value));
        env.add_filter("kebab_case", |value: String| cruet::to_kebab_case(&value));
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("temp", template).map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("temp").map_err(Error::MinijinjaError)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_filters() {
        let renderer = MiniJinjaRenderer::new();
        let context = serde_json::json!({ "project_name": "My Project" });

        let result =
            renderer.render("{{ project_name | snake_case }}", &context).unwrap();
        assert_eq!(result, "my_project");

        let result =
            renderer.render("Hello {{ project_name }}!", &context).unwrap();
        assert_eq!(result, "Hello My Project!");
    }

    #[test]
    fn test_render_invalid_template() {
        let renderer = MiniJinjaRenderer::new();
        let context = serde_json::json!({});
        assert!(renderer.render("{{ unclosed", &context).is_err());
    }
}
