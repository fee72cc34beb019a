//! Storage layer for FinanceMaster
//!
//! The whole application state is persisted as one serialized snapshot in a
//! single slot of a key-value store. Files are written atomically.

pub mod file_io;
pub mod kv;
pub mod slot;

pub use file_io::{read_string, write_json_atomic, write_string_atomic};
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use slot::{SnapshotSlot, DEFAULT_STORAGE_KEY};

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;

/// Open the file-backed slot for `key` under the configured data directory
pub fn open_file_slot(
    paths: &FinancePaths,
    key: &str,
) -> Result<SnapshotSlot<FileKeyValueStore>, FinanceError> {
    paths.ensure_directories()?;
    let kv = FileKeyValueStore::new(paths.data_dir());
    // Fail early on a key that can't name a file
    kv.path_for(key)?;
    Ok(SnapshotSlot::new(kv, key))
}
