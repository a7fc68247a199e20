//! Player roster
//!
//! Ordered, duplicate-free list of player names. Every successful mutation
//! writes the full list through the store; storage faults are logged and
//! never reach the caller.

use crate::persistence::RosterStore;

pub struct Roster {
    players: Vec<String>,
    store: Box<dyn RosterStore>,
}

impl std::fmt::Debug for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Roster").field("players", &self.players).finish()
    }
}

impl Roster {
    /// Load the roster from storage, falling back to empty on any failure
    pub fn load(store: Box<dyn RosterStore>) -> Self {
        let players = match store.load() {
            Ok(names) => sanitize(names),
            Err(e) => {
                log::error!("Roster load failed, starting empty: {}", e);
                Vec::new()
            }
        };
        log::info!("Loaded {} players", players.len());
        Self { players, store }
    }

    /// Register a player. Returns false for empty or duplicate names.
    pub fn add(&mut self, name: &str) -> bool {
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.players.push(name.to_string());
        self.persist();
        true
    }

    /// Remove a player. Returns false if the name is not registered.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(pos) = self.players.iter().position(|p| p == name) else {
            return false;
        };
        self.players.remove(pos);
        self.persist();
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    /// Players in insertion order
    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn persist(&self) {
        match self.store.save(&self.players) {
            Ok(()) => log::debug!("Roster saved ({} players)", self.players.len()),
            Err(e) => log::warn!("Roster save failed, keeping in-memory roster: {}", e),
        }
    }
}

/// Drop empty and repeated names from a loaded document, keeping first occurrences
fn sanitize(names: Vec<String>) -> Vec<String> {
    let total = names.len();
    let mut players: Vec<String> = Vec::with_capacity(total);
    for name in names {
        if !name.is_empty() && !players.contains(&name) {
            players.push(name);
        }
    }
    if players.len() != total {
        log::warn!(
            "Dropped {} empty or duplicate roster entries",
            total - players.len()
        );
    }
    players
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStore, StorageError};

    struct BrokenStore;

    impl RosterStore for BrokenStore {
        fn load(&self) -> Result<Vec<String>, StorageError> {
            Err(StorageError::Format(
                serde_json::from_str::<Vec<String>>("oops").unwrap_err(),
            ))
        }

        fn save(&self, _names: &[String]) -> Result<(), StorageError> {
            Err(StorageError::Write {
                path: "players.json".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        }
    }

    #[test]
    fn test_add_persists() {
        let store = MemoryStore::new();
        let mut roster = Roster::load(Box::new(store.clone()));

        assert!(roster.add("Alice"));
        assert!(roster.add("Bob"));
        assert_eq!(roster.players(), ["Alice", "Bob"]);
        assert_eq!(store.names(), vec!["Alice", "Bob"]);
        assert_eq!(store.save_count(), 2);
    }

    #[test]
    fn test_add_rejects_empty_and_duplicates() {
        let store = MemoryStore::new();
        let mut roster = Roster::load(Box::new(store.clone()));

        assert!(!roster.add(""));
        assert!(roster.add("Alice"));
        assert!(!roster.add("Alice"));
        assert_eq!(roster.len(), 1);
        assert_eq!(store.save_count(), 1);

        // Identity is the exact string
        assert!(roster.add("alice"));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_remove_absent_leaves_storage_untouched() {
        let store = MemoryStore::with_names(["Alice", "Bob"]);
        let mut roster = Roster::load(Box::new(store.clone()));

        assert!(!roster.remove("Carol"));
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.names(), vec!["Alice", "Bob"]);

        assert!(roster.remove("Alice"));
        assert_eq!(roster.players(), ["Bob"]);
        assert_eq!(store.names(), vec!["Bob"]);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_load_sanitizes_document() {
        let store = MemoryStore::with_names(["Alice", "", "Bob", "Alice"]);
        let roster = Roster::load(Box::new(store));
        assert_eq!(roster.players(), ["Alice", "Bob"]);
    }

    #[test]
    fn test_storage_faults_are_absorbed() {
        let mut roster = Roster::load(Box::new(BrokenStore));
        assert!(roster.is_empty());

        // Save fails, in-memory state still updates
        assert!(roster.add("Alice"));
        assert!(roster.contains("Alice"));
        assert!(roster.remove("Alice"));
        assert!(roster.is_empty());
    }
}
