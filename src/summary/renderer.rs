use std::path::{Path, PathBuf};
use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use tracing::{debug, instrument};

use super::view::StandingsView;
use crate::config::Config;
use crate::constants::STANDINGS_TEMPLATE_NAME;
use crate::error::{Result, StandingsError};

/// Renders standings views with the Jinja template found in a template directory.
pub struct TemplateRenderer {
    env: Environment<'static>,
    template_dir: PathBuf,
}

impl TemplateRenderer {
    pub fn new(template_dir: impl AsRef<Path>) -> Result<Self> {
        let template_dir = template_dir.as_ref().to_path_buf();
        if !template_dir.is_dir() {
            return Err(StandingsError::Configuration(format!(
                "template directory {} not found",
                template_dir.display()
            )));
        }

        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_loader(minijinja::path_loader(template_dir.clone()));
        Ok(Self { env, template_dir })
    }

    /// Uses `TEMPLATE_PATH`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.template_path()?)
    }

    #[instrument(skip(self, view), fields(template_dir = %self.template_dir.display()))]
    pub fn render(&self, view: &StandingsView) -> Result<String> {
        let template = self.env.get_template(STANDINGS_TEMPLATE_NAME).map_err(|e| match e.kind() {
            ErrorKind::TemplateNotFound => StandingsError::Configuration(format!(
                "template {} not found in {}",
                STANDINGS_TEMPLATE_NAME,
                self.template_dir.display()
            )),
            _ => StandingsError::Template(e),
        })?;

        let body = template.render(view)?;
        debug!(bytes = body.len(), "Rendered standings message");
        Ok(body)
    }
}
