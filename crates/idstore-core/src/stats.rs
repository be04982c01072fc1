//! Store statistics gathered by walking the root directory.

use std::path::Path;

use serde::Serialize;
use walkdir::WalkDir;

use crate::{Result, StoreError};

/// Statistics about the items under a store root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Number of stored items
    pub item_count: u64,
    /// Total bytes across all items
    pub total_bytes: u64,
    /// Items < 1KB
    pub small_items: u64,
    /// Items 1KB - 1MB
    pub medium_items: u64,
    /// Items 1MB - 100MB
    pub large_items: u64,
    /// Items > 100MB
    pub huge_items: u64,
}

impl StoreStats {
    /// Average item size in bytes
    pub fn avg_item_size(&self) -> u64 {
        if self.item_count == 0 {
            0
        } else {
            self.total_bytes / self.item_count
        }
    }

    fn record(&mut self, size: u64) {
        self.item_count += 1;
        self.total_bytes += size;
        if size < 1024 {
            self.small_items += 1;
        } else if size < 1024 * 1024 {
            self.medium_items += 1;
        } else if size < 100 * 1024 * 1024 {
            self.large_items += 1;
        } else {
            self.huge_items += 1;
        }
    }
}

/// Count regular files under `root` whose name ends with `extension`.
pub(crate) fn collect(root: &Path, extension: &str) -> Result<StoreStats> {
    let mut stats = StoreStats::default();
    if !root.exists() {
        return Ok(stats);
    }

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            StoreError::Io {
                path,
                source: e.into(),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(extension));
        if !matches {
            continue;
        }
        let size = entry
            .metadata()
            .map_err(|e| StoreError::Io {
                path: entry.path().to_path_buf(),
                source: e.into(),
            })?
            .len();
        stats.record(size);
    }

    Ok(stats)
}
