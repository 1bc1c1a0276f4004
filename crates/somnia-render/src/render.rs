use tera::{Context, Tera};

use crate::error::RenderError;
use crate::view::ResultView;

/// Name the built-in result template is registered under.
pub const RESULT_TEMPLATE_NAME: &str = "result";

/// The standard result-screen wording. Front ends may register their own
/// templates; the context variables are the `ResultView` fields.
pub const DEFAULT_RESULT_TEMPLATE: &str = "\
{{ greeting }}

Your STOP-BANG score: {{ score_display }}
{{ tier_label }}

{{ tier_text }}
";

/// Renders result views against a set of registered templates.
///
/// Templates are parsed once, at registration, so one renderer can be built
/// when the form loads and reused for every submission it shows.
pub struct ResultRenderer {
    tera: Tera,
}

impl ResultRenderer {
    /// A renderer with the default result template already registered.
    pub fn new() -> Result<Self, RenderError> {
        let mut renderer = Self {
            tera: Tera::default(),
        };
        renderer.add_template(RESULT_TEMPLATE_NAME, DEFAULT_RESULT_TEMPLATE)?;
        Ok(renderer)
    }

    /// Register a template, replacing any previous one under the same name.
    pub fn add_template(&mut self, name: &str, content: &str) -> Result<(), RenderError> {
        self.tera
            .add_raw_template(name, content)
            .map_err(|e| RenderError::TemplateParse(e.to_string()))
    }

    /// Render a registered template against a result view.
    pub fn render(&self, template_name: &str, view: &ResultView) -> Result<String, RenderError> {
        let context = Context::from_serialize(view)?;
        Ok(self.tera.render(template_name, &context)?)
    }

    /// Render the built-in result template.
    pub fn render_default(&self, view: &ResultView) -> Result<String, RenderError> {
        self.render(RESULT_TEMPLATE_NAME, view)
    }
}
