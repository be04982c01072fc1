//! `idstore config` subcommands.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use idstore_config::path::normalize_or_original;
use idstore_config::Config;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file locations
    Path,
    /// Write a default config file
    Init {
        /// Write the global file instead of the project file
        #[arg(long)]
        global: bool,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(command: &ConfigCommands, config: &Config) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigCommands::Path => {
            match Config::global_config_path() {
                Some(path) => println!("Global:  {}", path.display()),
                None => println!("Global:  (no home directory)"),
            }
            println!(
                "Project: {}",
                normalize_or_original(Config::project_config_path()).display()
            );
            println!("Store:   {}", config.store.root.display());
        }
        ConfigCommands::Init { global, force } => {
            let path = if *global {
                Config::global_config_path().context("No home directory for global config")?
            } else {
                Config::project_config_path()
            };
            write_default(&path, *force)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, Config::default_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
