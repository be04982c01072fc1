//! Per-item commands: put, get, update, rm, exists, path, check.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use idstore_config::{log_cli_info, log_cli_warn};
use idstore_core::{copy_stream, FileStore};

/// Content source: a file if given, stdin otherwise.
fn open_input(file: Option<&Path>) -> Result<Box<dyn Read>> {
    match file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

pub fn cmd_put(store: &FileStore, id: &str, file: Option<&Path>) -> Result<ExitCode> {
    let input = open_input(file)?;
    let written = store.create(id, input)?;
    log_cli_info!("Item created", id = id, bytes = written);
    println!("Created {}: {} bytes", id, written);
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_get(store: &FileStore, id: &str, output: Option<&Path>) -> Result<ExitCode> {
    let Some(mut reader) = store.read(id)? else {
        bail!("ID not found: {}", id);
    };
    match output {
        Some(path) => {
            let copied = copy_stream(path, &mut reader)?;
            log_cli_info!("Item exported", id = id, bytes = copied);
        }
        None => {
            io::copy(&mut reader, &mut io::stdout().lock()).context("Failed to write stdout")?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_update(store: &FileStore, id: &str, file: Option<&Path>) -> Result<ExitCode> {
    let input = open_input(file)?;
    let written = store.update(id, input)?;
    log_cli_info!("Item updated", id = id, bytes = written);
    println!("Updated {}: {} bytes", id, written);
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_rm(store: &FileStore, id: &str) -> Result<ExitCode> {
    if !store.delete(id)? {
        log_cli_warn!(
            "Removal refused",
            id = id,
            path = tracing::field::display(store.absolute_path(id).display())
        );
        bail!(
            "Filesystem refused to remove {} ({})",
            id,
            store.absolute_path(id).display()
        );
    }
    println!("Deleted {}", id);
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_exists(store: &FileStore, id: &str) -> Result<ExitCode> {
    let exists = store.exists(id)?;
    println!("{}", exists);
    Ok(if exists {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

pub fn cmd_path(store: &FileStore, id: &str, relative: bool) -> Result<ExitCode> {
    let path = if relative {
        store.relative_path(id)
    } else {
        store.absolute_path(id)
    };
    println!("{}", path.display());
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_check(store: &FileStore, id: &str) -> Result<ExitCode> {
    if store.is_valid_id(id) {
        println!("valid");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("invalid (pattern: {})", store.id_pattern());
        Ok(ExitCode::FAILURE)
    }
}
