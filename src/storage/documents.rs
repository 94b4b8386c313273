//! Key-value document stores
//!
//! The ledger persists exactly two documents, addressed by fixed keys. A
//! store only moves text; parsing and defaults are the ledger's concern.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::LedgerError;

use super::file_io::{read_text, write_text_atomic};

/// Key of the entries document
pub const ENTRIES_KEY: &str = "app-pareja-expenses";

/// Key of the aggregate (FinancialData) document
pub const FINANCIAL_DATA_KEY: &str = "app-pareja-financial-data";

/// Durable local key-value storage for text documents
pub trait DocumentStore {
    /// Read a document; `Ok(None)` if it has never been written
    fn read(&self, key: &str) -> Result<Option<String>, LedgerError>;

    /// Replace a document
    fn write(&self, key: &str, contents: &str) -> Result<(), LedgerError>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn read(&self, key: &str) -> Result<Option<String>, LedgerError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), LedgerError> {
        (**self).write(key, contents)
    }
}

/// One `<key>.json` file per document inside a directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl DocumentStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>, LedgerError> {
        read_text(self.path_for(key))
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), LedgerError> {
        write_text_atomic(self.path_for(key), contents)
    }
}

/// In-process store, for embedding and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a document
    pub fn with_document(self, key: &str, contents: impl Into<String>) -> Self {
        self.documents
            .borrow_mut()
            .insert(key.to_string(), contents.into());
        self
    }

    /// Current contents of a document
    pub fn get(&self, key: &str) -> Option<String> {
        self.documents.borrow().get(key).cloned()
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, LedgerError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), LedgerError> {
        self.documents
            .borrow_mut()
            .insert(key.to_string(), contents.to_string());
        Ok(())
    }
}
