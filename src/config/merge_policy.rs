//! Merge rules: defaults, override order, environment overrides.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};

/// Prefix for environment overrides, e.g. `DIRSUM_SCAN__OUTPUT`
pub const ENV_PREFIX: &str = "DIRSUM";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("scan.output", "checksums.json")?
        .set_default("scan.ignore", Vec::<String>::new())
}

/// Environment source, applied after every file source.
///
/// `DIRSUM_SCAN__IGNORE` is split on commas like the `--ignore` flag.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("scan.ignore")
}
