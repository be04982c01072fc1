//! ID → path mapping.
//!
//! An ID is cut into consecutive chunks of `chunk_size` characters. Every
//! chunk but the last becomes a directory; the last becomes the file name
//! with the extension appended:
//!
//! ```text
//! chunk_size = 2, extension = ".file"
//!
//! "1234567"   →  12/34/56/7.file
//! "10"        →  10.file
//! "1000"      →  10/00.file
//! ```
//!
//! Only the terminal component carries the extension, so a file can never
//! share a name with an intermediate directory (`10.file` vs `10/`).
//!
//! The result is always relative: root and prefix components produced by
//! separators inside the ID are dropped.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Pure mapping from an ID to its path relative to the store root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdLayout {
    chunk_size: usize,
    extension: String,
}

impl IdLayout {
    /// Create a layout. `chunk_size` must be non-zero; callers validate it.
    pub fn new(chunk_size: usize, extension: impl Into<String>) -> Self {
        Self {
            chunk_size,
            extension: extension.into(),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Map `id` to its relative path.
    ///
    /// Chunks are counted in characters, not bytes, so multi-byte IDs are
    /// never split inside a code point. The empty ID maps to the bare
    /// extension.
    pub fn relative_path(&self, id: &str) -> PathBuf {
        let chars: Vec<char> = id.chars().collect();
        let mut joined = String::with_capacity(id.len() + chars.len() + self.extension.len());

        for (i, chunk) in chars.chunks(self.chunk_size.max(1)).enumerate() {
            if i > 0 {
                joined.push(MAIN_SEPARATOR);
            }
            joined.extend(chunk);
        }
        joined.push_str(&self.extension);

        Path::new(&joined)
            .components()
            .filter(|c| {
                matches!(
                    c,
                    Component::Normal(_) | Component::CurDir | Component::ParentDir
                )
            })
            .collect()
    }
}
