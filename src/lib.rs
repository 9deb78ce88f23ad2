//! Sarpa - snake species identification CLI tool.
//!
//! This crate identifies snake species (focused on the snakes of Sri
//! Lanka) from a photo, either by calling a remote inference server or
//! by running an on-device classifier against a bundled species table.

#![warn(missing_docs)]

pub mod classifier;
pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod identify;
pub mod media;
pub mod output;
pub mod remote;

use clap::Parser;
use classifier::SnakeClassifier;
use cli::{Cli, Command, IdentifyArgs};
use config::{Config, RemoteConfig, config_file_path, load_default_config, save_default_config};
use db::SpeciesDb;
use identify::{Identification, Identifier, LocalState, Mode, SpeciesDetails};
use media::ImageHandle;
use remote::RemoteClient;
use std::path::Path;
use tracing::{info, warn};

pub use error::{Error, Result};

/// Main entry point for sarpa CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.identify.verbose, cli.identify.quiet);

    // Load configuration
    let config = load_default_config()?;

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    // Default: identify an image
    // Show help if no image provided
    let Some(image_path) = cli.image else {
        cli::help::print_smart_help(&config);
        return Ok(());
    };

    identify_image(&image_path, &cli.identify, &config)
}

/// Run one identification attempt and render the outcome.
fn identify_image(path: &Path, args: &IdentifyArgs, config: &Config) -> Result<()> {
    let mode = resolve_mode(args, config);
    info!("Identification mode: {mode}");

    let db = load_species_db(args.database.as_deref(), config)?;
    info!("Species database: {} records", db.len());

    let image = ImageHandle::from_path(path)?;

    let remote = RemoteClient::new(&resolve_remote_config(args, config))?;
    let local = match mode {
        Mode::Offline => build_local_classifier(args, config)?,
        // Never consulted in online mode.
        Mode::Online => LocalState::Unavailable("classifier not loaded in online mode".to_string()),
    };

    let identifier = Identifier::new(remote, local, db);

    let spinner_enabled = !args.quiet && !args.no_progress;
    let spinner = output::progress::create_spinner("Identifying...", spinner_enabled);

    // One attempt in flight; the runtime is only needed for its duration.
    let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Internal {
        message: format!("failed to create async runtime: {e}"),
    })?;
    let result = runtime.block_on(identifier.identify(Some(&image), mode));

    output::progress::finish_spinner(spinner);

    let identification = result?;
    if let Some(note) = identification.note() {
        warn!("{note}");
    }

    if args.json {
        output::print_json(&identification)?;
    } else {
        output::print_text(&identification);
    }

    Ok(())
}

/// Pick the identification mode from flags, falling back to config.
fn resolve_mode(args: &IdentifyArgs, config: &Config) -> Mode {
    if args.offline {
        Mode::Offline
    } else if args.online {
        Mode::Online
    } else {
        config.defaults.mode
    }
}

/// Apply CLI overrides to the configured remote settings.
fn resolve_remote_config(args: &IdentifyArgs, config: &Config) -> RemoteConfig {
    let mut remote = config.remote.clone();
    if let Some(endpoint) = &args.endpoint {
        remote.endpoint = endpoint.clone();
    }
    if let Some(timeout) = args.timeout {
        remote.timeout_secs = timeout;
    }
    remote
}

/// Load the species table from the override path, config, or bundle.
fn load_species_db(override_path: Option<&Path>, config: &Config) -> Result<SpeciesDb> {
    match override_path.or(config.database.path.as_deref()) {
        Some(path) => SpeciesDb::load(path),
        None => SpeciesDb::bundled(),
    }
}

/// Build the on-device classifier, recording an initialization failure
/// instead of aborting: the failure then surfaces through the identify
/// call and persists for the session, without touching online mode.
fn build_local_classifier(
    args: &IdentifyArgs,
    config: &Config,
) -> Result<LocalState<SnakeClassifier>> {
    let model_path = args
        .model
        .clone()
        .or_else(|| config.model.path.clone())
        .ok_or_else(|| Error::ConfigValidation {
            message: "no model configured (use --model or set model.path in config)".to_string(),
        })?;
    let labels_path = args
        .labels
        .clone()
        .or_else(|| config.model.labels.clone())
        .ok_or_else(|| Error::ConfigValidation {
            message: "no labels configured (use --labels or set model.labels in config)"
                .to_string(),
        })?;

    info!("Loading model: {}", model_path.display());
    Ok(match SnakeClassifier::new(&model_path, &labels_path) {
        Ok(classifier) => LocalState::Ready(classifier),
        Err(e) => {
            warn!("Offline classifier failed to initialize: {e}");
            LocalState::Unavailable(e.to_string())
        }
    })
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // Build filter string based on verbosity level.
    // ORT logging is suppressed by default; use -v to see ORT warnings,
    // -vv for info, -vvv for full trace.
    let filter_str = if quiet {
        "warn,ort=off".to_string()
    } else {
        match verbose {
            0 => "info,ort=off".to_string(),
            1 => "debug,ort=warn".to_string(),
            2 => "trace,ort=info".to_string(),
            _ => "trace".to_string(),
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
        Command::Db { action } => handle_db_command(action, config),
    }
}

fn handle_config_command(action: cli::ConfigAction) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
                println!("\nNext steps:");
                println!("  set [remote].endpoint to your identification server for online mode");
                println!("  set [model].path and [model].labels to enable offline mode");
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn handle_db_command(action: cli::DbAction, config: &Config) -> Result<()> {
    use cli::DbAction;

    let db = load_species_db(None, config)?;

    match action {
        DbAction::List => {
            println!("Species database: {} records", db.len());
            println!();
            for record in db.records() {
                println!("  {} ({})", record.common_name, record.scientific_name);
            }
            Ok(())
        }
        DbAction::Info { name } => {
            let record = db
                .lookup(&name)
                .ok_or_else(|| Error::SpeciesNotFound { name: name.clone() })?;
            output::print_text(&Identification::Found(SpeciesDetails::from_record(record)));
            Ok(())
        }
        DbAction::Check => {
            if db.is_empty() {
                return Err(Error::ConfigValidation {
                    message: "species database is empty".to_string(),
                });
            }
            println!("Database OK: {} records", db.len());
            Ok(())
        }
    }
}
