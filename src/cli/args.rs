//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Snake species identification from photos, online or fully offline.
#[derive(Debug, Parser)]
#[command(name = "sarpa")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image file to identify.
    pub image: Option<PathBuf>,

    /// Common options for identification.
    #[command(flatten)]
    pub identify: IdentifyArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Browse the species database.
    Db {
        /// Database action to perform.
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Db subcommand actions.
#[derive(Debug, Subcommand)]
pub enum DbAction {
    /// List all species in the database.
    List,
    /// Show the full record for one species.
    Info {
        /// Common English name of the species.
        name: String,
    },
    /// Verify the database loads and report the record count.
    Check,
}

/// Arguments for an identification run.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct IdentifyArgs {
    /// Use the on-device classifier and bundled species database.
    #[arg(long, conflicts_with = "online")]
    pub offline: bool,

    /// Use the remote identification server.
    #[arg(long)]
    pub online: bool,

    /// Identification endpoint URL (overrides config).
    #[arg(long, env = "SARPA_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides config).
    #[arg(long, env = "SARPA_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Path to the ONNX model file (overrides config).
    #[arg(long, env = "SARPA_MODEL_PATH")]
    pub model: Option<PathBuf>,

    /// Path to the labels file (overrides config).
    #[arg(long, env = "SARPA_LABELS_PATH")]
    pub labels: Option<PathBuf>,

    /// Path to an external species JSON file (overrides config).
    #[arg(long, env = "SARPA_DB_PATH")]
    pub database: Option<PathBuf>,

    /// Print the result as JSON instead of a text card.
    #[arg(long)]
    pub json: bool,

    /// Disable the progress spinner.
    #[arg(long)]
    pub no_progress: bool,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}
