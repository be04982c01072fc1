//! # idstore-core
//!
//! File storage addressed by arbitrary string IDs.
//!
//! Every ID maps deterministically to exactly one file under the store root.
//! The ID is cut into fixed-size chunks that become nested directories,
//! which keeps per-directory fan-out bounded for large ID spaces.
//!
//! ## Directory Layout
//!
//! ```text
//! <root>/
//! ├── 10.file            # id "10"
//! └── 10/
//!     ├── 00.file        # id "1000"
//!     └── 00/
//!         └── 1.file     # id "100001"
//! ```
//!
//! ## Concurrency
//!
//! There is no locking inside the store. `create` relies on exclusive file
//! creation (`O_EXCL`), so concurrent creates of the same ID have exactly one
//! winner. `update` and `delete` check-then-act; racing calls on the same ID
//! may observe `NotFound` or last-writer-wins content.

mod layout;
mod stats;
mod stream;

pub use layout::IdLayout;
pub use stats::StoreStats;
pub use stream::{copy_stream, StoreWriter};

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Default pattern a valid ID must fully match.
pub const DEFAULT_ID_PATTERN: &str = r"[a-zA-Z0-9_\.-]+";

/// Default number of ID characters per path segment.
pub const DEFAULT_CHUNK_SIZE: usize = 2;

/// Default suffix appended to the terminal path component.
pub const DEFAULT_EXTENSION: &str = ".file";

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("duplicate ID {id} ({})", path.display())]
    DuplicateId { id: String, path: PathBuf },

    #[error("ID not found: {id} ({})", path.display())]
    NotFound { id: String, path: PathBuf },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid ID: {id:?}")]
    InvalidId { id: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Construction-time settings for a [`FileStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub root: PathBuf,
    pub id_pattern: String,
    pub chunk_size: usize,
    pub extension: String,
    /// Reject IDs failing [`FileStore::is_valid_id`] before touching disk.
    pub enforce_valid_ids: bool,
}

impl StoreConfig {
    /// Defaults rooted at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            id_pattern: DEFAULT_ID_PATTERN.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            extension: DEFAULT_EXTENSION.to_string(),
            enforce_valid_ids: false,
        }
    }

    pub fn with_id_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.id_pattern = pattern.into();
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_enforced_ids(mut self, enforce: bool) -> Self {
        self.enforce_valid_ids = enforce;
        self
    }
}

/// Compile `pattern` so that only a full match of the ID is accepted.
fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})$"))
        .map_err(|e| StoreError::InvalidArgument(format!("bad ID pattern {pattern:?}: {e}")))
}

fn check_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(StoreError::InvalidArgument(
            "chunk size must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// True when `err` means "nothing at this path", including a file standing
/// where an ancestor directory was expected.
fn is_missing(err: &io::Error) -> bool {
    if err.kind() == io::ErrorKind::NotFound {
        return true;
    }
    #[cfg(unix)]
    {
        err.raw_os_error() == Some(libc::ENOTDIR)
    }
    #[cfg(not(unix))]
    {
        false
    }
}

/// ID-addressed file store.
///
/// Each instance owns its configuration; several stores with different
/// settings may share a process or even a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    config: StoreConfig,
    pattern: Regex,
    layout: IdLayout,
}

impl FileStore {
    /// Create a store with default settings rooted at `root`.
    ///
    /// The root directory is not created or checked.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        Self::with_config(StoreConfig::new(root))
    }

    /// Create a store from an explicit configuration.
    ///
    /// Fails with [`StoreError::InvalidArgument`] for an uncompilable ID
    /// pattern or a zero chunk size.
    pub fn with_config(config: StoreConfig) -> Result<Self> {
        check_chunk_size(config.chunk_size)?;
        let pattern = compile_pattern(&config.id_pattern)?;
        let layout = IdLayout::new(config.chunk_size, config.extension.clone());
        Ok(Self {
            config,
            pattern,
            layout,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get the root path of the store.
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn id_pattern(&self) -> &str {
        &self.config.id_pattern
    }

    pub fn chunk_size(&self) -> usize {
        self.config.chunk_size
    }

    pub fn extension(&self) -> &str {
        &self.config.extension
    }

    pub fn enforces_valid_ids(&self) -> bool {
        self.config.enforce_valid_ids
    }

    pub fn set_root<P: AsRef<Path>>(&mut self, root: P) {
        self.config.root = root.as_ref().to_path_buf();
    }

    pub fn set_id_pattern(&mut self, pattern: impl Into<String>) -> Result<()> {
        let pattern = pattern.into();
        self.pattern = compile_pattern(&pattern)?;
        self.config.id_pattern = pattern;
        Ok(())
    }

    pub fn set_chunk_size(&mut self, chunk_size: usize) -> Result<()> {
        check_chunk_size(chunk_size)?;
        self.config.chunk_size = chunk_size;
        self.layout = IdLayout::new(chunk_size, self.config.extension.clone());
        Ok(())
    }

    pub fn set_extension(&mut self, extension: impl Into<String>) {
        self.config.extension = extension.into();
        self.layout = IdLayout::new(self.config.chunk_size, self.config.extension.clone());
    }

    pub fn set_enforce_valid_ids(&mut self, enforce: bool) {
        self.config.enforce_valid_ids = enforce;
    }

    /// True if `id` is non-empty and fully matches the ID pattern.
    ///
    /// Advisory unless the store enforces valid IDs.
    pub fn is_valid_id(&self, id: &str) -> bool {
        !id.is_empty() && self.pattern.is_match(id)
    }

    /// [`is_valid_id`](Self::is_valid_id) for callers holding an optional ID.
    pub fn is_valid_id_opt(&self, id: Option<&str>) -> bool {
        id.is_some_and(|id| self.is_valid_id(id))
    }

    /// Path of `id` relative to the store root.
    pub fn relative_path(&self, id: &str) -> PathBuf {
        self.layout.relative_path(id)
    }

    /// Path of `id` including the store root.
    pub fn absolute_path(&self, id: &str) -> PathBuf {
        self.config.root.join(self.layout.relative_path(id))
    }

    fn resolve(&self, id: &str) -> Result<PathBuf> {
        if self.config.enforce_valid_ids && !self.is_valid_id(id) {
            return Err(StoreError::InvalidId { id: id.to_string() });
        }
        Ok(self.absolute_path(id))
    }

    /// Check whether an item exists for `id`.
    ///
    /// A missing path is `Ok(false)`; other filesystem failures propagate.
    pub fn exists(&self, id: &str) -> Result<bool> {
        let path = self.resolve(id)?;
        match fs::metadata(&path) {
            Ok(_) => Ok(true),
            Err(e) if is_missing(&e) => Ok(false),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    /// Open the item for reading. Returns `None` if it does not exist.
    ///
    /// The caller owns the returned reader; it is positioned at the start.
    #[instrument(skip(self), level = "debug")]
    pub fn read(&self, id: &str) -> Result<Option<BufReader<File>>> {
        let path = self.resolve(id)?;
        match File::open(&path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(e) if is_missing(&e) => {
                debug!(path = %path.display(), "item not present");
                Ok(None)
            }
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    /// Read the whole item into memory. Returns `None` if it does not exist.
    pub fn read_to_vec(&self, id: &str) -> Result<Option<Vec<u8>>> {
        let Some(mut reader) = self.read(id)? else {
            return Ok(None);
        };
        let mut data = Vec::new();
        reader.read_to_end(&mut data).map_err(|source| StoreError::Io {
            path: self.absolute_path(id),
            source,
        })?;
        Ok(Some(data))
    }

    /// Create missing ancestors and exclusively create the item file.
    fn create_exclusive(&self, id: &str) -> Result<(File, PathBuf)> {
        let path = self.resolve(id)?;

        // create_dir_all treats a directory created concurrently as success.
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => {
                debug!(path = %path.display(), "created item file");
                Ok((file, path))
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(StoreError::DuplicateId {
                id: id.to_string(),
                path,
            }),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    /// Open an existing item for a truncating write, never creating it.
    fn open_existing(&self, id: &str) -> Result<(File, PathBuf)> {
        let path = self.resolve(id)?;
        match OpenOptions::new().write(true).truncate(true).open(&path) {
            Ok(file) => Ok((file, path)),
            Err(e) if is_missing(&e) => Err(StoreError::NotFound {
                id: id.to_string(),
                path,
            }),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    /// Store the bytes of `content` under a new `id`.
    ///
    /// Fails with [`StoreError::DuplicateId`] if the ID is taken. `content`
    /// is read to EOF but not closed. If copying fails, the partially written
    /// file is removed so the ID stays free. Returns the number of bytes
    /// written.
    #[instrument(skip(self, content), level = "debug")]
    pub fn create<R: Read>(&self, id: &str, mut content: R) -> Result<u64> {
        let (file, path) = self.create_exclusive(id)?;
        match stream::pump(file, &mut content) {
            Ok(written) => Ok(written),
            Err(source) => {
                if let Err(e) = fs::remove_file(&path) {
                    warn!(path = %path.display(), error = %e, "failed to remove partial item");
                }
                Err(StoreError::Io { path, source })
            }
        }
    }

    /// Create a new `id` and return a buffered writer for its content.
    ///
    /// The file exists (empty) as soon as this returns.
    #[instrument(skip(self), level = "debug")]
    pub fn create_writer(&self, id: &str) -> Result<StoreWriter> {
        let (file, path) = self.create_exclusive(id)?;
        Ok(StoreWriter::new(file, path))
    }

    /// Replace the content of an existing `id` with the bytes of `content`.
    ///
    /// Fails with [`StoreError::NotFound`] if the ID does not exist. The file
    /// is truncated to exactly the new length.
    #[instrument(skip(self, content), level = "debug")]
    pub fn update<R: Read>(&self, id: &str, mut content: R) -> Result<u64> {
        let (file, path) = self.open_existing(id)?;
        stream::pump(file, &mut content).map_err(|source| StoreError::Io { path, source })
    }

    /// Truncate an existing `id` and return a buffered writer for its new
    /// content.
    #[instrument(skip(self), level = "debug")]
    pub fn update_writer(&self, id: &str) -> Result<StoreWriter> {
        let (file, path) = self.open_existing(id)?;
        Ok(StoreWriter::new(file, path))
    }

    /// Delete the item for `id`. Parent directories are left in place.
    ///
    /// Fails with [`StoreError::NotFound`] if the ID does not exist. Returns
    /// `false` when the filesystem refused the removal for any other reason.
    #[instrument(skip(self), level = "debug")]
    pub fn delete(&self, id: &str) -> Result<bool> {
        let path = self.resolve(id)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if is_missing(&e) => Err(StoreError::NotFound {
                id: id.to_string(),
                path,
            }),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "filesystem refused removal");
                Ok(false)
            }
        }
    }

    /// Get statistics about the items under the root.
    pub fn stats(&self) -> Result<StoreStats> {
        stats::collect(&self.config.root, &self.config.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn store() -> (TempDir, FileStore) {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path()).unwrap();
        (temp, store)
    }

    fn read_all(store: &FileStore, id: &str) -> Vec<u8> {
        store.read_to_vec(id).unwrap().expect("item should exist")
    }

    #[test]
    fn test_valid_id() {
        let (_temp, store) = store();
        let cases = [
            ("", false),
            ("aoeui", true),
            ("12345", true),
            ("a-_", true),
            ("a.b", true),
            ("&", false),
            ("ab&", false),
            ("a/b", false),
        ];
        for (id, expected) in cases {
            assert_eq!(store.is_valid_id(id), expected, "id {id:?}");
        }
        assert!(!store.is_valid_id_opt(None));
        assert!(store.is_valid_id_opt(Some("ok")));
    }

    #[test]
    fn test_pattern_requires_full_match() {
        let temp = TempDir::new().unwrap();
        let store =
            FileStore::with_config(StoreConfig::new(temp.path()).with_id_pattern("[0-9]+")).unwrap();
        assert!(store.is_valid_id("123"));
        assert!(!store.is_valid_id("123abc"));
        assert!(!store.is_valid_id("abc123"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let temp = TempDir::new().unwrap();
        let err = FileStore::with_config(StoreConfig::new(temp.path()).with_chunk_size(0))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));

        let err = FileStore::with_config(StoreConfig::new(temp.path()).with_id_pattern("[a-"))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));
    }

    #[test]
    fn test_setters_revalidate() {
        let (_temp, mut store) = store();
        assert!(store.set_chunk_size(0).is_err());
        assert_eq!(store.chunk_size(), DEFAULT_CHUNK_SIZE);
        assert!(store.set_id_pattern("(").is_err());
        assert_eq!(store.id_pattern(), DEFAULT_ID_PATTERN);

        store.set_chunk_size(3).unwrap();
        store.set_extension(".dat");
        assert_eq!(
            store.relative_path("abcdefg"),
            Path::new("abc").join("def").join("g.dat")
        );
    }

    #[test]
    fn test_absolute_path_under_root() {
        let (temp, store) = store();
        assert_eq!(
            store.absolute_path("1234567"),
            temp.path().join("12").join("34").join("56").join("7.file")
        );
        assert!(store.absolute_path("x").starts_with(store.root()));
    }

    #[test]
    fn test_rooted_id_stays_under_root() {
        let (temp, store) = store();
        let path = store.absolute_path("/abc");
        assert!(path.starts_with(store.root()), "escaped root: {}", path.display());
        assert_eq!(path, temp.path().join("a").join("bc.file"));

        store.create("/abc", &b"inside"[..]).unwrap();
        assert!(path.is_file());
        assert_eq!(read_all(&store, "/abc"), b"inside");
        assert!(store.delete("/abc").unwrap());
    }

    #[test]
    fn test_exists_lifecycle() {
        let (_temp, store) = store();
        let id = "testExists";
        assert!(!store.exists(id).unwrap());

        store.create(id, &b"content"[..]).unwrap();
        assert!(store.exists(id).unwrap());

        assert!(store.delete(id).unwrap());
        assert!(!store.exists(id).unwrap());

        let err = store.delete(id).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_exists_sees_externally_created_file() {
        let (_temp, store) = store();
        let path = store.absolute_path("external");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        File::create(&path).unwrap();
        assert!(store.exists("external").unwrap());
    }

    #[test]
    fn test_read_missing_is_none() {
        let (_temp, store) = store();
        assert!(store.read("testRead").unwrap().is_none());
        assert!(store.read_to_vec("testRead").unwrap().is_none());
    }

    #[test]
    fn test_read_through_file_ancestor_is_none() {
        let (_temp, mut store) = store();
        // With an empty extension "ab" is a file, so "abcd" would need it as a directory.
        store.set_extension("");
        store.create("ab", &b"x"[..]).unwrap();
        assert!(store.read("abcd").unwrap().is_none());
        assert!(!store.exists("abcd").unwrap());
    }

    #[test]
    fn test_create_and_read_roundtrip() {
        let (_temp, store) = store();
        let data: Vec<u8> = (0..50_000u32).map(|i| (i % 251) as u8).collect();

        let written = store.create("testRead", data.as_slice()).unwrap();
        assert_eq!(written, data.len() as u64);
        assert_eq!(read_all(&store, "testRead"), data);
    }

    #[test]
    fn test_create_empty_content() {
        let (_temp, store) = store();
        store.create("empty", io::empty()).unwrap();
        assert!(store.exists("empty").unwrap());
        assert!(read_all(&store, "empty").is_empty());
    }

    #[test]
    fn test_create_does_not_close_source() {
        let (_temp, store) = store();
        let mut source = io::Cursor::new(b"shared".to_vec());
        store.create("first", &mut source).unwrap();
        source.set_position(0);
        store.create("second", &mut source).unwrap();
        assert_eq!(read_all(&store, "second"), b"shared");
    }

    #[test]
    fn test_duplicate_create_rejected_and_content_kept() {
        let (_temp, store) = store();
        store.create("dup", &b"original"[..]).unwrap();

        let err = store.create("dup", &b"intruder"[..]).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { ref id, .. } if id == "dup"));
        assert_eq!(read_all(&store, "dup"), b"original");

        let err = store.create_writer("dup").unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { .. }));
        assert_eq!(read_all(&store, "dup"), b"original");
    }

    #[test]
    fn test_prefix_ids_coexist() {
        let (_temp, store) = store();
        store.create("10", &b"short"[..]).unwrap();
        store.create("1000", &b"long"[..]).unwrap();
        store.create("100001", &b"longer"[..]).unwrap();

        assert_eq!(read_all(&store, "10"), b"short");
        assert_eq!(read_all(&store, "1000"), b"long");
        assert_eq!(read_all(&store, "100001"), b"longer");
    }

    #[test]
    fn test_create_writer() {
        let (_temp, store) = store();
        let mut writer = store.create_writer("testCreateString").unwrap();
        assert!(store.exists("testCreateString").unwrap());
        writer.write_all(b"pulled ").unwrap();
        writer.write_all(b"content").unwrap();
        writer.finish().unwrap();

        assert_eq!(read_all(&store, "testCreateString"), b"pulled content");
    }

    #[test]
    fn test_failed_create_frees_id() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("broken source"))
            }
        }

        let (_temp, store) = store();
        let err = store.create("broken", Broken).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(!store.exists("broken").unwrap());

        store.create("broken", &b"retry"[..]).unwrap();
        assert_eq!(read_all(&store, "broken"), b"retry");
    }

    #[test]
    fn test_update_overwrites_fully() {
        let (_temp, store) = store();
        store.create("upd", &b"a rather long first version"[..]).unwrap();
        store.update("upd", &b"short"[..]).unwrap();
        assert_eq!(read_all(&store, "upd"), b"short");
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let (_temp, store) = store();
        let err = store.update("ghost", &b"data"[..]).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref id, .. } if id == "ghost"));
        assert!(!store.exists("ghost").unwrap());

        let err = store.update_writer("ghost").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert!(!store.exists("ghost").unwrap());
    }

    #[test]
    fn test_update_writer_truncates() {
        let (_temp, store) = store();
        store.create("pull", &b"0123456789"[..]).unwrap();

        {
            let mut writer = store.update_writer("pull").unwrap();
            writer.write_all(b"abc").unwrap();
        }

        assert_eq!(read_all(&store, "pull"), b"abc");
    }

    #[test]
    fn test_delete_keeps_parent_directories() {
        let (_temp, store) = store();
        store.create("abcdef", &b"x"[..]).unwrap();
        let parent = store.absolute_path("abcdef").parent().unwrap().to_path_buf();

        assert!(store.delete("abcdef").unwrap());
        assert!(parent.is_dir());
    }

    #[test]
    fn test_delete_refused_returns_false() {
        let (temp, mut store) = store();
        store.set_extension("");
        store.create("abcd", &b"x"[..]).unwrap();

        // "ab" maps onto the directory holding "abcd".
        let dir = temp.path().join("ab");
        assert!(dir.is_dir());
        assert!(!store.delete("ab").unwrap());
        assert!(dir.is_dir());
        assert_eq!(read_all(&store, "abcd"), b"x");
    }

    #[test]
    fn test_enforced_ids_reject_before_disk() {
        let temp = TempDir::new().unwrap();
        let store =
            FileStore::with_config(StoreConfig::new(temp.path()).with_enforced_ids(true)).unwrap();

        for result in [
            store.create("bad id", &b"x"[..]).map(|_| ()),
            store.create_writer("bad/id").map(|_| ()),
            store.update("&", &b"x"[..]).map(|_| ()),
            store.update_writer("").map(|_| ()),
            store.delete("bad id").map(|_| ()),
            store.exists("bad id").map(|_| ()),
            store.read("bad id").map(|_| ()),
        ] {
            assert!(matches!(result, Err(StoreError::InvalidId { .. })));
        }
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);

        store.create("good-id", &b"x"[..]).unwrap();
        assert!(store.exists("good-id").unwrap());
    }

    #[test]
    fn test_advisory_validation_by_default() {
        let (_temp, store) = store();
        assert!(!store.is_valid_id("has space"));
        store.create("has space", &b"x"[..]).unwrap();
        assert_eq!(read_all(&store, "has space"), b"x");
    }

    #[test]
    fn test_stores_with_different_configs_coexist() {
        let temp = TempDir::new().unwrap();
        let a = FileStore::new(temp.path()).unwrap();
        let b = FileStore::with_config(
            StoreConfig::new(temp.path())
                .with_chunk_size(3)
                .with_extension(".bin"),
        )
        .unwrap();

        a.create("shared", &b"from a"[..]).unwrap();
        b.create("shared", &b"from b"[..]).unwrap();

        assert_eq!(read_all(&a, "shared"), b"from a");
        assert_eq!(read_all(&b, "shared"), b"from b");
        assert_ne!(a.absolute_path("shared"), b.absolute_path("shared"));
    }

    #[test]
    fn test_stats_counts_items() {
        let (_temp, store) = store();
        store.create("blob1", &b"one"[..]).unwrap();
        store.create("blob2", &b"two"[..]).unwrap();
        store.create("blob3", &b"three"[..]).unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.item_count, 3);
        assert_eq!(stats.total_bytes, 11);
    }
}
