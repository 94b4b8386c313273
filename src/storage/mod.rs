//! Storage layer for the ledger
//!
//! Provides the persistence adapter: a key-value document store with a JSON
//! file implementation (atomic writes, automatic directory creation) and an
//! in-memory one.

pub mod documents;
pub mod file_io;

pub use documents::{DocumentStore, JsonFileStore, MemoryStore, ENTRIES_KEY, FINANCIAL_DATA_KEY};
pub use file_io::{read_text, write_json_atomic, write_text_atomic};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Open the file store under the configured data directory
pub fn open_file_store(paths: &LedgerPaths) -> Result<JsonFileStore, LedgerError> {
    paths.ensure_directories()?;
    Ok(JsonFileStore::new(paths.data_dir()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_file_store_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let store = open_file_store(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(
            store.path_for(ENTRIES_KEY),
            temp_dir.path().join("data").join("app-pareja-expenses.json")
        );
    }
}
