/*!
 * File Store
 * Fixed-capacity, in-memory file table with whole-buffer writes
 */

use super::types::{File, FileContents, FileInfo};
use crate::core::data_structures::{InlineString, ResourceTable};
use crate::core::errors::{FsError, FsResult, TableError};
use crate::core::limits::{MAX_FILENAME, MAX_FILE_SIZE};
use std::time::SystemTime;
use tracing::{info, warn};

/// Flat file table keyed by filename
///
/// Filenames are bounded to `MAX_FILENAME - 1` bytes; longer names are
/// truncated on every operation, so lookups agree with creates.
#[derive(Debug)]
pub struct FileStore {
    table: ResourceTable<InlineString, File>,
    buffer_len: usize,
}

impl FileStore {
    /// Store with `capacity` files of `MAX_FILE_SIZE` bytes each
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_limits(capacity, MAX_FILE_SIZE)
    }

    /// Store with a custom per-file buffer size
    pub fn with_limits(capacity: usize, buffer_len: usize) -> Self {
        Self {
            table: ResourceTable::with_capacity(capacity),
            buffer_len,
        }
    }

    /// Create an empty file
    pub fn create(&mut self, filename: &str) -> FsResult<()> {
        let key = Self::key(filename);
        let capacity = self.capacity();

        self.table
            .allocate(key.clone(), File::empty(self.buffer_len))
            .map_err(|err| match err {
                TableError::Duplicate => FsError::AlreadyExists(key.to_string()),
                TableError::Full | TableError::NotFound => {
                    warn!(filename = %key, capacity, "File system full");
                    FsError::TableFull { capacity }
                }
            })?;

        info!(filename = %key, "Created file");
        Ok(())
    }

    /// Replace the whole content of a file
    ///
    /// `data` must be strictly shorter than the buffer; one byte is reserved.
    /// On error nothing changes.
    pub fn write(&mut self, filename: &str, data: &[u8]) -> FsResult<usize> {
        let key = Self::key(filename);
        let max = self.max_write();
        let file = self
            .table
            .find_mut(&key)
            .ok_or_else(|| FsError::NotFound(key.to_string()))?;

        if data.len() >= file.data.len() {
            return Err(FsError::TooLarge {
                len: data.len(),
                max,
            });
        }

        let len = data.len();
        file.data[..len].copy_from_slice(data);
        file.data[len..].fill(0);
        file.size = len;
        file.modified_at = SystemTime::now();

        info!(filename = %key, bytes = len, "Wrote file");
        Ok(len)
    }

    pub fn read(&self, filename: &str) -> FsResult<FileContents> {
        let key = Self::key(filename);
        let file = self
            .table
            .find(&key)
            .ok_or_else(|| FsError::NotFound(key.to_string()))?;

        Ok(FileContents {
            size: file.size,
            data: file.content().to_vec(),
        })
    }

    /// Zero a file's bytes and release its slot
    pub fn delete(&mut self, filename: &str) -> FsResult<()> {
        let key = Self::key(filename);
        self.table
            .free(&key)
            .map_err(|_| FsError::NotFound(key.to_string()))?;

        info!(filename = %key, "Deleted file");
        Ok(())
    }

    /// Files in table order
    pub fn list(&self) -> Vec<FileInfo> {
        self.table
            .iter()
            .map(|(name, file)| FileInfo {
                filename: name.to_string(),
                size: file.size,
                created_at: file.created_at,
                modified_at: file.modified_at,
            })
            .collect()
    }

    pub fn exists(&self, filename: &str) -> bool {
        self.table.contains(&Self::key(filename))
    }

    /// Drop every file
    pub fn reset(&mut self) {
        self.table.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Largest payload a single write accepts
    #[inline]
    pub fn max_write(&self) -> usize {
        self.buffer_len.saturating_sub(1)
    }

    fn key(filename: &str) -> InlineString {
        InlineString::bounded(filename, MAX_FILENAME)
    }
}
