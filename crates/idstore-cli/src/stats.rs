//! `idstore stats`

use std::process::ExitCode;

use anyhow::Result;
use idstore_core::FileStore;

pub fn run(store: &FileStore, json: bool) -> Result<ExitCode> {
    let stats = store.stats()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("Store: {}", store.root().display());
    println!("  Items:       {}", stats.item_count);
    println!("  Total bytes: {}", stats.total_bytes);
    println!("  Avg size:    {}", stats.avg_item_size());
    println!("  <1KB:        {}", stats.small_items);
    println!("  1KB-1MB:     {}", stats.medium_items);
    println!("  1MB-100MB:   {}", stats.large_items);
    println!("  >100MB:      {}", stats.huge_items);
    Ok(ExitCode::SUCCESS)
}
