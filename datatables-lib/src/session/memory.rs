//! In-memory session store using DashMap

use dashmap::DashMap;

use super::SessionStore;
use crate::error::SessionError;

/// A session store backed by a concurrent hash map.
///
/// State lives as long as the store; dropping it ends the session.
///
/// # Example
///
/// ```
/// use datatables_lib::session::{InMemorySession, SessionStore};
///
/// let session = InMemorySession::new();
/// session.set("greeting", serde_json::json!("hello")).unwrap();
/// assert_eq!(session.get("greeting"), Some(serde_json::json!("hello")));
/// ```
#[derive(Debug, Default)]
pub struct InMemorySession {
    store: DashMap<String, serde_json::Value>,
}

impl InMemorySession {
    /// Creates a new empty session.
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Removes every key.
    pub fn clear(&self) {
        self.store.clear();
    }
}

impl SessionStore for InMemorySession {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.store.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), SessionError> {
        self.store.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SessionError> {
        self.store.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::session::SessionStoreExt;

    #[test]
    fn test_get_set_delete() {
        let session = InMemorySession::new();
        assert_eq!(session.get("a"), None);

        session.set("a", json!(1)).unwrap();
        assert_eq!(session.get("a"), Some(json!(1)));

        session.delete("a").unwrap();
        session.delete("a").unwrap();
        assert!(session.is_empty());
    }

    #[test]
    fn test_typed_access() {
        let session = InMemorySession::new();
        session.set_as("n", &41u64).unwrap();
        assert_eq!(session.get_as::<u64>("n").unwrap(), Some(41));
        assert_eq!(session.get_or("missing", 7u64).unwrap(), 7);

        session.set("n", json!("not a number")).unwrap();
        assert!(session.get_as::<u64>("n").is_err());
    }
}
