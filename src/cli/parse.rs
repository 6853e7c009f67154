//! CLI parse: clap types for dirsum. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Dirsum CLI - checksum manifests for directory trees
#[derive(Debug, Parser)]
#[command(name = "dirsum", version)]
#[command(about = "Calculate SHA-1 checksums for every file under a directory and save them as JSON")]
pub struct Cli {
    /// Root directory to calculate checksums
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Output file to save checksums, relative to the root directory [default: checksums.json]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Comma-separated list of paths to ignore (relative to root)
    #[arg(long)]
    pub ignore: Option<String>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Suppress logs and the run summary
    #[arg(long, short, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
