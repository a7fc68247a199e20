//! In-memory roster store for tests and headless sessions

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{RosterStore, StorageError};

#[derive(Debug, Default)]
struct Inner {
    names: RefCell<Vec<String>>,
    saves: Cell<usize>,
}

/// Keeps the "persisted" roster in memory.
///
/// Clones share the same document, so a test can hold one handle and give
/// another to the roster.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with names
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        *store.inner.names.borrow_mut() = names.into_iter().map(Into::into).collect();
        store
    }

    /// Current persisted document
    pub fn names(&self) -> Vec<String> {
        self.inner.names.borrow().clone()
    }

    /// Number of save calls so far
    pub fn save_count(&self) -> usize {
        self.inner.saves.get()
    }
}

impl RosterStore for MemoryStore {
    fn load(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.names())
    }

    fn save(&self, names: &[String]) -> Result<(), StorageError> {
        *self.inner.names.borrow_mut() = names.to_vec();
        self.inner.saves.set(self.inner.saves.get() + 1);
        Ok(())
    }
}
