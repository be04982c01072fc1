//! # idstore CLI
//!
//! Command-line interface for the idstore ID-addressed file store.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use idstore_config::logging::{init_logging, LogLevel};
use idstore_config::{log_cli_debug, Config, ConfigSources};
use idstore_core::FileStore;

mod config_cmd;
mod item;
mod stats;

/// idstore - store and retrieve files by arbitrary ID
#[derive(Parser)]
#[command(name = "idstore")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Store root directory (overrides config and IDSTORE_ROOT)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Extra config file layered over the global and project files
    #[arg(long = "config", global = true, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// Reject IDs that do not match the configured pattern
    #[arg(long, global = true)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new item from FILE (or stdin)
    Put {
        id: String,
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Write an item's content to stdout or a file
    Get {
        id: String,
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Replace an existing item's content from FILE (or stdin)
    Update {
        id: String,
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Delete an item
    Rm { id: String },

    /// Report whether an item exists (exit status 1 if not)
    Exists { id: String },

    /// Print the path an ID maps to
    Path {
        id: String,
        /// Print the path relative to the store root
        #[arg(long)]
        relative: bool,
    },

    /// Validate an ID against the configured pattern (exit status 1 if invalid)
    Check { id: String },

    /// Display store statistics
    Stats {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Inspect or initialise configuration
    Config {
        #[command(subcommand)]
        command: config_cmd::ConfigCommands,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut sources = ConfigSources::standard();
    if let Some(path) = &cli.config_file {
        sources = sources.with_explicit(path);
    }
    let mut config = Config::load_from(&sources).context("Failed to load configuration")?;
    if let Some(root) = &cli.root {
        config.store.root = root.clone();
    }
    if cli.strict {
        config.store.enforce_valid_ids = true;
    }

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level()
    };
    init_logging(level);
    log_cli_debug!(
        "Configuration resolved",
        root = tracing::field::display(config.store.root.display()),
        chunk_size = config.store.chunk_size
    );

    let open_store =
        || FileStore::with_config(config.store_config()).context("Invalid store settings");

    match cli.command {
        Commands::Put { id, file } => item::cmd_put(&open_store()?, &id, file.as_deref()),
        Commands::Get { id, output } => item::cmd_get(&open_store()?, &id, output.as_deref()),
        Commands::Update { id, file } => item::cmd_update(&open_store()?, &id, file.as_deref()),
        Commands::Rm { id } => item::cmd_rm(&open_store()?, &id),
        Commands::Exists { id } => item::cmd_exists(&open_store()?, &id),
        Commands::Path { id, relative } => item::cmd_path(&open_store()?, &id, relative),
        Commands::Check { id } => item::cmd_check(&open_store()?, &id),
        Commands::Stats { json } => stats::run(&open_store()?, json),
        Commands::Config { command } => {
            config_cmd::run(&command, &config).map(|_| ExitCode::SUCCESS)
        }
    }
}
