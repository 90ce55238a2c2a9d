//! Template rendering with Tera

use super::card::escape_html;
use super::state::{DisplayState, ERROR_MESSAGE};
use anyhow::Result;
use tera::{Context, Tera};
use tracing::error;

/// Template renderer.
///
/// Every `{{ }}` interpolation in the `.html` templates goes through
/// [`escape_html`]; only the pre-rendered results fragment is marked safe.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Create a new template renderer with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.set_escape_fn(escape_html);

        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            ("index.html", include_str!("../templates/index.html")),
            (
                "components/message.html",
                include_str!("../templates/components/message.html"),
            ),
            (
                "components/results.html",
                include_str!("../templates/components/results.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with a Tera Context
    pub fn render_with_context(&self, template: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template, context)?)
    }

    /// Full replacement content of the results area for a state
    pub fn render_state(&self, state: &DisplayState) -> Result<String> {
        let mut ctx = Context::new();
        match state {
            DisplayState::Idle => Ok(String::new()),
            DisplayState::Results(view) => {
                ctx.insert("total", &view.total);
                ctx.insert("cards", &view.cards);
                self.render_with_context("components/results.html", &ctx)
            }
            other => {
                ctx.insert("message", other.message().unwrap_or_default());
                self.render_with_context("components/message.html", &ctx)
            }
        }
    }

    /// Like [`render_state`](Self::render_state), but never fails: a render
    /// error is logged and the generic error notice is shown instead.
    pub fn render_fragment(&self, state: &DisplayState) -> String {
        self.render_state(state).unwrap_or_else(|e| {
            error!("Template error rendering {} state: {}", state.kind(), e);
            format!("<div class=\"message\">{}</div>", ERROR_MESSAGE)
        })
    }

    /// Render the search page with the results area filled in
    pub fn render_page(
        &self,
        instance_name: &str,
        query: Option<&str>,
        state: &DisplayState,
    ) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("instance_name", instance_name);
        ctx.insert("query", query.unwrap_or_default());
        ctx.insert("results", &self.render_state(state)?);
        self.render_with_context("index.html", &ctx)
    }
}
