//! Rerun requests

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Asks the host to restart the whole page computation from the top.
///
/// Reruns are coarse: every widget on the page is rendered again, not only
/// the one whose state changed.
pub trait RerunTrigger: Send + Sync {
    /// Requests a rerun once the current pass returns.
    fn request_rerun(&self);
}

/// A rerun request flag.
///
/// Any number of requests made during one pass collapse into a single rerun.
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct RerunFlag {
    requested: Arc<AtomicBool>,
}

impl RerunFlag {
    /// Creates a cleared flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a rerun has been requested and not yet taken.
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Clears the flag, returning whether a rerun was requested.
    pub fn take(&self) -> bool {
        self.requested.swap(false, Ordering::SeqCst)
    }
}

impl RerunTrigger for RerunFlag {
    fn request_rerun(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_collapse() {
        let flag = RerunFlag::new();
        let clone = flag.clone();
        flag.request_rerun();
        clone.request_rerun();

        assert!(flag.is_requested());
        assert!(clone.take());
        assert!(!flag.take());
    }
}
