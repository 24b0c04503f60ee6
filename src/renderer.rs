//! Template renderer for generated Go code.
//! Wraps a parsed MiniJinja template behind the [`TemplateRenderer`] trait so
//! generators can render data without depending on the engine directly.
use crate::error::{Error, Result};
use minijinja::{Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Name of the template being rendered.
    fn name(&self) -> &str;

    /// Renders the template with the given context.
    ///
    /// # Arguments
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, context: &minijinja::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine holding one parsed template.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
    name: String,
}

/// Creates the environment every renderer starts from.
///
/// Trailing newlines are kept since generated files should end with one, and
/// undefined variables are errors so typos in templates do not render silently.
pub fn default_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}

impl MiniJinjaRenderer {
    /// Parses `source` as the template `name`.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not parse
    pub fn new<N: Into<String>, S: Into<String>>(name: N, source: S) -> Result<Self> {
        Self::with_environment(default_environment(), name, source)
    }

    /// Parses `source` into a caller-provided environment, keeping its filters,
    /// globals and other templates.
    pub fn with_environment<N: Into<String>, S: Into<String>>(
        mut env: Environment<'static>,
        name: N,
        source: S,
    ) -> Result<Self> {
        let name = name.into();
        env.add_template_owned(name.clone(), source.into())
            .map_err(Error::MinijinjaError)?;
        Ok(Self { env, name })
    }

    /// Uses the template `name` already registered in `env`.
    ///
    /// # Errors
    /// * `Error::InvalidParameter` if `name` is empty
    /// * `Error::MinijinjaError` if no such template exists
    pub fn from_environment<N: Into<String>>(env: Environment<'static>, name: N) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidParameter {
                func: "MiniJinjaRenderer::from_environment()".to_string(),
                reason: "name must not be an empty string".to_string(),
            });
        }
        env.get_template(&name).map_err(Error::MinijinjaError)?;
        Ok(Self { env, name })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn name(&self) -> &str {
        &self.name
    }

    /// Renders the template using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if rendering fails, including references to
    ///   undefined fields
    fn render(&self, context: &minijinja::Value) -> Result<String> {
        let tmpl = self.env.get_template(&self.name).map_err(Error::MinijinjaError)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}
