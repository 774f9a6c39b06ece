/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resource table operation result
pub type TableResult<T> = Result<T, TableError>;

/// Process operation result
///
/// # Must Use
/// Process operations can fail and must be handled
pub type ProcessResult<T> = Result<T, ProcessError>;

/// File store operation result
pub type FsResult<T> = Result<T, FsError>;

/// Errors raised by a fixed-capacity resource table
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(rename_all = "snake_case")]
pub enum TableError {
    #[error("key already present")]
    #[diagnostic(code(table::duplicate))]
    Duplicate,

    #[error("table is full")]
    #[diagnostic(code(table::full))]
    Full,

    #[error("key not found")]
    #[diagnostic(code(table::not_found))]
    NotFound,
}

/// Process-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ProcessError {
    #[error("Process PID {0} not found!")]
    #[diagnostic(
        code(process::not_found),
        help("The process may have completed or been killed. Use `list` to see live PIDs.")
    )]
    NotFound(Pid),

    #[error("Process table full! ({capacity} slots)")]
    #[diagnostic(
        code(process::table_full),
        help("Kill a process or let the scheduler run processes to completion.")
    )]
    TableFull { capacity: usize },
}

/// File store errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum FsError {
    #[error("File '{0}' already exists!")]
    #[diagnostic(code(vfs::already_exists), help("Write to the existing file or remove it first."))]
    AlreadyExists(String),

    #[error("File '{0}' not found!")]
    #[diagnostic(code(vfs::not_found), help("Use `ls` to see existing files."))]
    NotFound(String),

    #[error("File system full! ({capacity} files)")]
    #[diagnostic(code(vfs::table_full), help("Remove unused files to free a slot."))]
    TableFull { capacity: usize },

    #[error("Data too large! Max size: {max} bytes (got {len})")]
    #[diagnostic(code(vfs::too_large), help("Split the data across several files."))]
    TooLarge { len: usize, max: usize },
}

/// Configuration errors
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    #[diagnostic(code(config::invalid_value))]
    InvalidValue { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(config::invalid))]
    Invalid(String),

    #[error("Failed to read config file {path}")]
    #[diagnostic(code(config::io), help("Check the KERNEL_CONFIG path."))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file")]
    #[diagnostic(code(config::parse), help("The config file must be a JSON object."))]
    Parse(#[from] serde_json::Error),
}

/// Unified kernel error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum KernelError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    #[diagnostic(code(kernel::io))]
    Io(#[from] std::io::Error),
}
