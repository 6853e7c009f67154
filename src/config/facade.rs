//! Config loading facade: assembles sources in precedence order and validates.

use super::merge_policy;
use super::sources::{global_file, workspace_file};
use super::DirsumConfig;
use crate::error::AppError;
use config::{File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Loads [`DirsumConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a scan rooted at `root`.
    ///
    /// Precedence: defaults, global file, `<root>/.dirsum.toml`, environment.
    pub fn load(root: &Path) -> Result<DirsumConfig, AppError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, root)?;
        let config: DirsumConfig = builder
            .add_source(merge_policy::environment())
            .build()?
            .try_deserialize()?;

        Self::validate(&config)?;
        debug!(root = %root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from an explicit file; it must exist.
    ///
    /// Replaces the global and workspace files. Environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<DirsumConfig, AppError> {
        let config: DirsumConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .add_source(merge_policy::environment())
            .build()?
            .try_deserialize()?;

        Self::validate(&config)?;
        debug!(config_path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }

    fn validate(config: &DirsumConfig) -> Result<(), AppError> {
        config.scan.validate().map_err(|e| {
            AppError::ConfigError(format!("Configuration validation failed: {}", e))
        })
    }
}
