//! Roster persistence
//!
//! Features:
//! - Plain JSON array of names
//! - Full overwrite on every save (tmp → rename)
//! - Missing document loads as an empty roster

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

/// Errors raised by a roster store
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed roster document: {0}")]
    Format(#[from] serde_json::Error),
}

/// Storage boundary for the player roster.
///
/// Implementations persist the full ordered list; there is no incremental
/// update.
pub trait RosterStore {
    /// Read the persisted names in order
    fn load(&self) -> Result<Vec<String>, StorageError>;
    /// Overwrite the persisted names
    fn save(&self, names: &[String]) -> Result<(), StorageError>;
}
