//! Reset nonces
//!
//! A keyed widget keeps its selection across render passes. To clear it,
//! the caller bumps the widget's reset nonce: the next payload carries the
//! new value, and a widget that sees a nonce different from the last one it
//! observed discards its selection. The widget is trusted to comply; there
//! is no acknowledgement.

use super::SessionStore;
use super::SessionStoreExt;
use crate::error::SessionError;
use crate::host::RerunTrigger;

/// Returns the session key holding the reset nonce of widget `key`.
pub fn nonce_key(key: &str) -> String {
    format!("{key}__reset_nonce")
}

/// Options for [`ResetCoordinator::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetOptions {
    /// Request a rerun of the whole page after bumping the nonce.
    ///
    /// Default: true
    pub rerun: bool,
}

impl Default for ResetOptions {
    fn default() -> Self {
        Self { rerun: true }
    }
}

impl ResetOptions {
    /// Bump the nonce without requesting a rerun.
    pub fn no_rerun() -> Self {
        Self { rerun: false }
    }
}

/// Owns the reset nonces stored in a session.
///
/// The coordinator is the only writer of nonce entries. A nonce is absent
/// (read as 0) until the first reset and grows by exactly one per reset.
pub struct ResetCoordinator<'a> {
    store: &'a dyn SessionStore,
}

impl<'a> ResetCoordinator<'a> {
    /// Creates a coordinator over a session store.
    pub fn new(store: &'a dyn SessionStore) -> Self {
        Self { store }
    }

    /// Returns the current nonce of widget `key`, 0 if never reset.
    pub fn nonce(&self, key: &str) -> Result<u64, SessionError> {
        self.store.get_or(&nonce_key(key), 0)
    }

    /// Bumps the nonce of widget `key` and returns the new value.
    ///
    /// With `options.rerun`, asks `trigger` to rerun the whole page. The
    /// counter saturates at `u64::MAX`.
    pub fn reset(&self, key: &str, trigger: &dyn RerunTrigger, options: ResetOptions) -> Result<u64, SessionError> {
        let current = self.nonce(key)?;
        let next = current.saturating_add(1);
        if next == current {
            log::warn!("reset nonce for '{}' is saturated", key);
        }
        self.store.set_as(&nonce_key(key), &next)?;
        log::info!("reset selection of '{}' (nonce {})", key, next);

        if options.rerun {
            trigger.request_rerun();
        }
        Ok(next)
    }

    /// Drops the nonce of a widget that no longer exists.
    ///
    /// The next read returns 0 again.
    pub fn forget(&self, key: &str) -> Result<(), SessionError> {
        log::debug!("forgetting reset nonce of '{}'", key);
        self.store.delete(&nonce_key(key))
    }
}
