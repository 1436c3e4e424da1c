//! Minimal page host
//!
//! A [`Host`] owns one user session: its keyed state, the widget boundary
//! and the rerun flag. [`Host::run`] executes a page function and executes
//! it again from the top for as long as the pass requested a rerun.

mod rerun;

pub use rerun::*;

use crate::DataTable;
use crate::boundary::WidgetBoundary;
use crate::config::TableConfig;
use crate::error::Error;
use crate::error::Result;
use crate::model::Dataset;
use crate::result::InteractionResult;
use crate::session::ResetCoordinator;
use crate::session::ResetOptions;
use crate::session::SessionStore;

/// Host behavior settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Consecutive reruns allowed before [`Host::run`] gives up.
    ///
    /// Default: 8
    pub max_reruns: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { max_reruns: 8 }
    }
}

impl HostConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rerun limit.
    pub fn with_max_reruns(mut self, max: usize) -> Self {
        self.max_reruns = max;
        self
    }
}

/// One user session hosting a page.
pub struct Host<S, B> {
    session: S,
    boundary: B,
    rerun: RerunFlag,
    config: HostConfig,
}

impl<S: SessionStore, B: WidgetBoundary> Host<S, B> {
    /// Creates a host with default settings.
    pub fn new(session: S, boundary: B) -> Self {
        Self::with_config(session, boundary, HostConfig::default())
    }

    /// Creates a host with the given settings.
    pub fn with_config(session: S, boundary: B, config: HostConfig) -> Self {
        Self {
            session,
            boundary,
            rerun: RerunFlag::new(),
            config,
        }
    }

    /// Returns the session store.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Returns the widget boundary.
    pub fn boundary(&self) -> &B {
        &self.boundary
    }

    /// Runs `page` until a pass completes without requesting a rerun.
    ///
    /// Returns the output of the last pass.
    pub fn run<T>(&self, mut page: impl FnMut(&PageContext<'_>) -> Result<T>) -> Result<T> {
        let cx = PageContext {
            session: &self.session,
            boundary: &self.boundary,
            rerun: &self.rerun,
        };
        let mut reruns = 0;
        loop {
            let output = page(&cx)?;
            if !self.rerun.take() {
                return Ok(output);
            }
            reruns += 1;
            if reruns > self.config.max_reruns {
                return Err(Error::RerunLimit(self.config.max_reruns));
            }
            log::debug!("rerunning page (rerun {})", reruns);
        }
    }
}

/// What a page function can do during one pass.
pub struct PageContext<'a> {
    session: &'a dyn SessionStore,
    boundary: &'a dyn WidgetBoundary,
    rerun: &'a RerunFlag,
}

impl PageContext<'_> {
    /// Renders a table and returns its interaction result.
    pub fn table(&self, dataset: Option<&Dataset>, config: &TableConfig) -> Result<InteractionResult> {
        DataTable::new(self.session, self.boundary).render(dataset, config)
    }

    /// Clears the selection of table `key` and, by default, reruns the page.
    ///
    /// The rerun starts once the current pass returns.
    pub fn reset_selection(&self, key: &str, options: ResetOptions) -> Result<u64> {
        Ok(ResetCoordinator::new(self.session).reset(key, self.rerun, options)?)
    }

    /// Requests a rerun of the page.
    pub fn rerun(&self) {
        self.rerun.request_rerun();
    }

    /// Returns the session store.
    pub fn session(&self) -> &dyn SessionStore {
        self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::InMemoryBoundary;
    use crate::session::InMemorySession;

    #[test]
    fn test_single_pass_without_rerun() {
        let host = Host::new(InMemorySession::new(), InMemoryBoundary::new());
        let mut passes = 0;
        host.run(|_| {
            passes += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(passes, 1);
    }

    #[test]
    fn test_rerun_runs_again() {
        let host = Host::new(InMemorySession::new(), InMemoryBoundary::new());
        let mut passes = 0;
        host.run(|cx| {
            passes += 1;
            if passes == 1 {
                cx.rerun();
            }
            Ok(())
        })
        .unwrap();
        assert_eq!(passes, 2);
    }

    #[test]
    fn test_rerun_limit() {
        let host = Host::with_config(
            InMemorySession::new(),
            InMemoryBoundary::new(),
            HostConfig::new().with_max_reruns(2),
        );
        let err = host
            .run(|cx| {
                cx.rerun();
                Ok(())
            })
            .unwrap_err();
        assert!(matches!(err, Error::RerunLimit(2)));
    }
}
