//! Byte transfer between caller streams and stored files.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::{Result, StoreError};

/// Buffered writable stream handed out by the pull variants
/// ([`FileStore::create_writer`](crate::FileStore::create_writer) and
/// [`FileStore::update_writer`](crate::FileStore::update_writer)).
///
/// Dropping the writer flushes and closes the file; flush errors are lost
/// on drop, so call [`StoreWriter::finish`] to observe them.
#[derive(Debug)]
pub struct StoreWriter {
    inner: BufWriter<File>,
    path: PathBuf,
}

impl StoreWriter {
    pub(crate) fn new(file: File, path: PathBuf) -> Self {
        Self {
            inner: BufWriter::new(file),
            path,
        }
    }

    /// Path of the file being written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered bytes and close the file.
    pub fn finish(mut self) -> Result<()> {
        self.inner.flush().map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl Write for StoreWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Copy every byte of `source` into `destination`, creating or truncating it.
///
/// The destination handle is released on every exit path, including a
/// failed copy. `source` is read to EOF but never closed.
pub fn copy_stream<R: Read + ?Sized>(destination: &Path, source: &mut R) -> Result<u64> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(destination)
        .map_err(|source| StoreError::Io {
            path: destination.to_path_buf(),
            source,
        })?;
    pump(file, source).map_err(|source| StoreError::Io {
        path: destination.to_path_buf(),
        source,
    })
}

/// Buffered copy into an already opened file. Consumes the handle so it is
/// closed when this returns, whatever the outcome.
pub(crate) fn pump<R: Read + ?Sized>(file: File, source: &mut R) -> io::Result<u64> {
    let mut writer = BufWriter::new(file);
    let written = io::copy(source, &mut writer)?;
    writer.flush()?;
    Ok(written)
}
