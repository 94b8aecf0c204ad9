// -- imports
use serde::Deserialize;
use std::path::Path;

use crate::builder::BuildArgs;
use crate::error::{AppError, Result};
use crate::render::PageConfigs;

// -- config

#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlConfig {
    build: BuildArgs,
    page: PageConfigs,
}

impl TomlConfig {
    /// Parse TOML config file with explicit project root for path resolution.
    ///
    /// # Arguments
    ///
    /// * `toml_path` - Path to the TOML config file
    /// * `project_root` - Base directory for resolving relative paths
    ///
    /// # Errors
    ///
    /// Returns `AppError` if:
    /// - The path is not a valid toml file
    /// - File read fails
    /// - TOML parsing fails
    pub fn from_toml(toml_path: &Path, project_root: &Path) -> Result<Self> {
        if !toml_path.is_file() || toml_path.extension().is_none_or(|ext| ext != "toml") {
            return Err(AppError::Config(format!(
                "TOML config path is not a valid .toml file: {:?}",
                toml_path
            )));
        }

        let content = std::fs::read_to_string(toml_path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.resolve_paths(project_root);

        // Transfer page config to build args
        config.build.page_cfg = config.page.clone();

        Ok(config)
    }

    /// Resolve relative paths against project root
    fn resolve_paths(&mut self, project_root: &Path) {
        if !self.build.images_dir.is_absolute() {
            self.build.images_dir = project_root.join(&self.build.images_dir);
        }

        if !self.build.output.is_absolute() {
            self.build.output = project_root.join(&self.build.output);
        }
    }
}

impl From<TomlConfig> for BuildArgs {
    fn from(config: TomlConfig) -> Self {
        config.build
    }
}

// -- public API

/// Parse TOML config file and return BuildArgs.
///
/// # Arguments
///
/// * `toml_path` - Path to the TOML config file
/// * `project_root` - Base directory for resolving relative paths
///
/// # Errors
///
/// Returns `AppError` if TOML parsing or path resolution fails.
pub fn parse_toml(toml_path: &Path, project_root: &Path) -> Result<BuildArgs> {
    TomlConfig::from_toml(toml_path, project_root).map(Into::into)
}

// -- tests
