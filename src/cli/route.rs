//! CLI route: run context built from parsed flags and layered config.

use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, DirsumConfig, ScanConfig};
use crate::error::AppError;
use crate::ignore::IgnoreSpec;
use crate::manifest::{self, RunSummary};
use crate::tree::path::{relative_path_string, resolve_root};
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything a manifest run needs, with CLI flags applied over config.
#[derive(Debug, Clone)]
pub struct RunContext {
    root: PathBuf,
    output: PathBuf,
    ignore: IgnoreSpec,
}

impl RunContext {
    /// Resolve the root, load configuration, and apply CLI overrides.
    ///
    /// `--config` replaces the global and workspace config files.
    pub fn new(cli: &Cli) -> Result<Self, AppError> {
        let root = resolve_root(&cli.dir)?;
        let config = match cli.config {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&root)?,
        };
        let context = Self::from_config(root, &config, cli);
        context.validate()?;
        Ok(context)
    }

    /// Apply the config-file rules to the merged values, flags included.
    pub fn validate(&self) -> Result<(), AppError> {
        let merged = ScanConfig {
            output: self.output.clone(),
            ignore: self.ignore.prefixes().to_vec(),
        };
        merged
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid scan settings: {}", e)))
    }

    /// Merge CLI flags over an already-loaded config.
    pub fn from_config(root: PathBuf, config: &DirsumConfig, cli: &Cli) -> Self {
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| config.scan.output.clone());
        // An explicit --ignore replaces the configured list
        let ignore = match cli.ignore {
            Some(ref list) => IgnoreSpec::from_comma_list(list),
            None => config.scan.ignore_spec(),
        };
        Self {
            root,
            output,
            ignore,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn ignore(&self) -> &IgnoreSpec {
        &self.ignore
    }

    /// Whether a file at `path` would be hashed by this run.
    ///
    /// Relative paths resolve against the current directory, as file
    /// writers do, not against the root.
    pub fn scans_path(&self, path: &Path) -> bool {
        let absolute = match resolve_root(path) {
            Ok(absolute) => absolute,
            Err(_) => return false,
        };
        if absolute == self.root || !absolute.starts_with(&self.root) {
            return false;
        }
        !self
            .ignore
            .is_ignored(&relative_path_string(&self.root, &absolute))
    }

    /// Run the manifest pipeline
    pub fn execute(&self) -> Result<RunSummary, AppError> {
        let summary = manifest::generate(&self.root, &self.output, self.ignore.clone())?;
        info!(
            root = %summary.root.display(),
            output = %summary.output.display(),
            entries = summary.manifest.len(),
            "Manifest written"
        );
        Ok(summary)
    }
}
