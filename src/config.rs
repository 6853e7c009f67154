//! Configuration System
//!
//! Layered configuration for scans and logging. Sources, lowest precedence
//! first: built-in defaults, the global config file, the scan root's
//! `.dirsum.toml`, then `DIRSUM_*` environment variables. Command-line flags
//! are applied on top by the CLI.

use crate::ignore::IgnoreSpec;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge_policy;
mod sources;

pub use facade::ConfigLoader;
pub use merge_policy::ENV_PREFIX;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{workspace_config_path, WORKSPACE_CONFIG_FILE};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirsumConfig {
    /// Scan settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for a manifest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Manifest file name, resolved relative to the scan root
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Relative path prefixes to exclude
    #[serde(default)]
    pub ignore: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("checksums.json")
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            ignore: Vec::new(),
        }
    }
}

impl ScanConfig {
    pub fn ignore_spec(&self) -> IgnoreSpec {
        IgnoreSpec::new(self.ignore.iter().cloned())
    }

    /// Validate scan configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.output.as_os_str().is_empty() {
            return Err("Output file cannot be empty".to_string());
        }
        if self.output.file_name().is_none() {
            return Err(format!(
                "Output path {} does not name a file",
                self.output.display()
            ));
        }
        Ok(())
    }
}
