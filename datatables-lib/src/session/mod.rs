//! Session-scoped keyed state
//!
//! A [`SessionStore`] holds values that survive across render passes for one
//! user session. It is passed by handle to whatever needs it; nothing in this
//! crate keeps ambient global state.

mod memory;
mod reset;

pub use memory::*;
pub use reset::*;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::SessionError;

/// Key-value store scoped to one user session.
///
/// Each key is owned by exactly one widget. Two widgets sharing a key see
/// each other's state.
pub trait SessionStore: Send + Sync {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<serde_json::Value>;

    /// Stores a value under `key`, replacing any previous value.
    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), SessionError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), SessionError>;
}

/// Typed access on top of any [`SessionStore`].
pub trait SessionStoreExt: SessionStore {
    /// Returns the value under `key` decoded as `T`.
    fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SessionError> {
        match self.get(key) {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|source| SessionError::Decode {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Returns the value under `key` decoded as `T`, or `default` if absent.
    fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, SessionError> {
        Ok(self.get_as(key)?.unwrap_or(default))
    }

    /// Encodes `value` and stores it under `key`.
    fn set_as<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SessionError> {
        let value = serde_json::to_value(value).map_err(|source| SessionError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.set(key, value)
    }
}

impl<S: SessionStore + ?Sized> SessionStoreExt for S {}
