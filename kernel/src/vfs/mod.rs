/*!
 * Virtual File System Module
 * Flat, fixed-capacity, in-memory file table
 */

pub mod store;
pub mod types;

// Re-exports
pub use store::FileStore;
pub use types::{File, FileContents, FileInfo};
