//! Dirsum CLI Binary
//!
//! Writes a JSON manifest of SHA-1 checksums for a directory tree.

use clap::Parser;
use dirsum::cli::{format_summary, map_error, Cli, RunContext};
use dirsum::config::ConfigLoader;
use dirsum::logging::{init_logging, log_file_path, LoggingConfig};
use dirsum::tree::path::resolve_root;
use std::process;
use tracing::{error, info, warn};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Dirsum starting");

    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing run: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    if let Some(log_file) = log_file_path(&logging_config) {
        if context.scans_path(&log_file) {
            warn!(
                log_file = %log_file.display(),
                "Log file is inside the scanned tree and its checksum will vary; \
                 exclude it with --ignore or move it with --log-file"
            );
        }
    }

    match context.execute() {
        Ok(summary) => {
            if !cli.quiet {
                println!("{}", format_summary(&summary));
            }
        }
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults. Config
/// errors are ignored here; they are reported when the run context loads.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default(),
        None => resolve_root(&cli.dir)
            .ok()
            .and_then(|root| ConfigLoader::load(&root).ok())
            .map(|c| c.logging)
            .unwrap_or_default(),
    };

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
