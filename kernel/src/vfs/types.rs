/*!
 * VFS Types
 * File table payload and snapshots
 */

use crate::core::data_structures::Scrub;
use crate::core::types::Timestamp;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// File table payload
///
/// `data` is a fixed-size buffer; only the first `size` bytes are content and
/// everything after them is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub(crate) data: Vec<u8>,
    pub(crate) size: usize,
    pub(crate) created_at: Timestamp,
    pub(crate) modified_at: Timestamp,
}

impl File {
    /// Empty file backed by a zeroed buffer of `buffer_len` bytes
    pub(crate) fn empty(buffer_len: usize) -> Self {
        let now = SystemTime::now();
        Self {
            data: vec![0; buffer_len],
            size: 0,
            created_at: now,
            modified_at: now,
        }
    }

    pub(crate) fn content(&self) -> &[u8] {
        &self.data[..self.size]
    }
}

impl Default for File {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            size: 0,
            created_at: SystemTime::UNIX_EPOCH,
            modified_at: SystemTime::UNIX_EPOCH,
        }
    }
}

impl Scrub for File {
    /// Zero the buffer in place before the slot is released
    fn scrub(&mut self) {
        self.data.fill(0);
        self.size = 0;
        self.created_at = SystemTime::UNIX_EPOCH;
        self.modified_at = SystemTime::UNIX_EPOCH;
    }
}

/// File snapshot returned by listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FileInfo {
    pub filename: String,
    pub size: usize,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}

/// Result of reading a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContents {
    pub size: usize,
    pub data: Vec<u8>,
}

impl FileContents {
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Content as text, replacing invalid UTF-8
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}
