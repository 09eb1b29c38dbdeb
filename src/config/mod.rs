//! Tool configuration.
//!
//! Settings normally read from `confdoc.toml`. Every field has a default,
//! so an empty file is valid. Command-line flags override values loaded
//! here.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ConfdocError, Result, model::DEFAULT_RESERVED_NAMESPACES};

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = "confdoc.toml";

/// Settings for a documentation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Directory relative output paths are resolved against.
    pub project_dir: Option<PathBuf>,

    /// Project name reported in diagnostics.
    pub project_name: Option<String>,

    /// Namespaces whose types are treated as framework types.
    pub reserved_namespaces: Vec<String>,

    /// Model files loaded when none are given on the command line.
    pub models: Vec<PathBuf>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            project_dir: None,
            project_name: None,
            reserved_namespaces: DEFAULT_RESERVED_NAMESPACES
                .iter()
                .map(|ns| ns.to_string())
                .collect(),
            models: Vec::new(),
        }
    }
}

impl ToolConfig {
    /// Loads a configuration file.
    ///
    /// Relative `project_dir` and `models` paths are taken relative to the
    /// directory containing the file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is invalid
    /// - A reserved namespace is empty or malformed
    pub fn load(path: &Path) -> Result<ToolConfig> {
        let content = fs::read_to_string(path).map_err(|e| ConfdocError::io(e, path))?;
        let mut config = Self::from_toml_str(&content)
            .map_err(|e| match e {
                ConfdocError::ModelParse { details, .. } => {
                    ConfdocError::parse(details, Some(path))
                }
                other => other,
            })?;

        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }

        debug!(path = %path.display(), "Loaded tool configuration");
        Ok(config)
    }

    /// Parses configuration from TOML text without resolving paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or fails validation.
    pub fn from_toml_str(content: &str) -> Result<ToolConfig> {
        let config: ToolConfig =
            toml::from_str(content).map_err(|e| ConfdocError::parse(e, None))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot check.
    ///
    /// # Errors
    ///
    /// Returns `ConfdocError::ConfigValidation` for a blank or malformed
    /// reserved namespace.
    pub fn validate(&self) -> Result<()> {
        for namespace in &self.reserved_namespaces {
            if namespace.is_empty() || namespace.split('.').any(str::is_empty) {
                return Err(ConfdocError::ConfigValidation {
                    component: "reserved_namespaces".to_string(),
                    details: format!("'{namespace}' is not a valid namespace"),
                });
            }
        }
        Ok(())
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        if let Some(dir) = self.project_dir.take() {
            self.project_dir = Some(join_relative(base, dir));
        }
        self.models = self
            .models
            .drain(..)
            .map(|model| join_relative(base, model))
            .collect();
    }
}

fn join_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
