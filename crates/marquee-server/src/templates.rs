//! Page template loading and rendering via `minijinja`.
//!
//! Templates are loaded from the filesystem (default: `templates/`
//! directory) so pages can be restyled without recompiling. Every page
//! extends `base.j2`, which renders the shared navigation and the optional
//! flash message from the context.

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use crate::error::AppError;

/// Every template the engine loads at startup, `<name>.j2` on disk.
///
/// `base` is the shared layout; the rest are the pages the routes render.
const PAGE_TEMPLATES: &[&str] = &[
    "base",
    "home",
    "venues",
    "venue_detail",
    "venue_form",
    "search_venues",
    "artists",
    "artist_detail",
    "artist_form",
    "search_artists",
    "shows",
    "show_form",
    "404",
];

/// Manages page template loading and rendering.
///
/// Wraps a `minijinja` [`Environment`] with all page templates pre-loaded.
/// Templates can be edited on disk and will be picked up on the next call
/// to [`TemplateEngine::new`].
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine loading every page template from the
    /// given directory.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Template`] when a template file is missing or
    /// fails to parse.
    pub fn new(templates_dir: &str) -> Result<Self, AppError> {
        let mut env = Environment::new();

        // Template names carry no extension, so escaping must be opted
        // into explicitly; everything rendered here is HTML.
        env.set_auto_escape_callback(|_| AutoEscape::Html);

        for name in PAGE_TEMPLATES {
            let source = load_template(templates_dir, name)?;
            env.add_template_owned((*name).to_owned(), source)
                .map_err(|e| AppError::Template(format!("failed to add template {name}: {e}")))?;
        }

        Ok(Self { env })
    }

    /// Render a page template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Template`] when the template is unknown or
    /// rendering fails.
    pub fn render(&self, name: &str, context: impl Serialize) -> Result<String, AppError> {
        self.env
            .get_template(name)
            .map_err(|e| AppError::Template(format!("missing template {name}: {e}")))?
            .render(context)
            .map_err(|e| AppError::Template(format!("{name} render failed: {e}")))
    }
}

/// Read a template file from disk.
fn load_template(dir: &str, name: &str) -> Result<String, AppError> {
    let path = format!("{dir}/{name}.j2");
    std::fs::read_to_string(&path)
        .map_err(|e| AppError::Template(format!("failed to read {path}: {e}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn engine_loads_the_shipped_templates() {
        // The crate ships its templates; loading them must always work.
        let engine = TemplateEngine::new("templates");
        assert!(engine.is_ok(), "shipped templates should load");
    }

    #[test]
    fn missing_directory_returns_template_error() {
        let result = TemplateEngine::new("no-such-directory");
        assert!(matches!(result, Err(AppError::Template(_))));
    }

    #[test]
    fn unknown_template_name_is_an_error() {
        let engine = TemplateEngine::new("templates").unwrap();
        let result = engine.render("nonexistent", serde_json::json!({}));
        assert!(matches!(result, Err(AppError::Template(_))));
    }

    #[test]
    fn flash_renders_into_the_page() {
        let engine = TemplateEngine::new("templates").unwrap();
        let html = engine
            .render(
                "home",
                serde_json::json!({
                    "flash": {"kind": "success", "message": "Venue Test Hall was successfully listed!"}
                }),
            )
            .unwrap();
        assert!(html.contains("Venue Test Hall was successfully listed!"));
        assert!(html.contains("flash-success"));
    }
}
