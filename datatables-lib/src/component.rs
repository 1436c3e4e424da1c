//! Binding between a dataset and the table widget

use crate::boundary::WidgetBoundary;
use crate::config::TableConfig;
use crate::error::Result;
use crate::model::Dataset;
use crate::payload::Payload;
use crate::result::InteractionResult;
use crate::session::ResetCoordinator;
use crate::session::SessionStore;

/// Renders tables through a widget boundary.
///
/// Each call to [`render`](Self::render) is one render cycle: validate the
/// inputs, read the widget's reset nonce, send the payload, decode what the
/// widget reports back.
///
/// # Example
///
/// ```
/// use datatables_lib::DataTable;
/// use datatables_lib::boundary::InMemoryBoundary;
/// use datatables_lib::config::TableConfig;
/// use datatables_lib::model::Dataset;
/// use datatables_lib::session::InMemorySession;
///
/// let session = InMemorySession::new();
/// let boundary = InMemoryBoundary::new();
/// let table = DataTable::new(&session, &boundary);
///
/// let dataset = Dataset::from_json_records(r#"[{"ID": 1, "Name": "Aspirin"}]"#).unwrap();
/// let result = table.render(Some(&dataset), &TableConfig::new().key("molecules")).unwrap();
/// assert!(result.is_idle());
/// ```
pub struct DataTable<'a> {
    session: &'a dyn SessionStore,
    boundary: &'a dyn WidgetBoundary,
}

impl<'a> DataTable<'a> {
    /// Creates a binding over a session and a boundary.
    pub fn new(session: &'a dyn SessionStore, boundary: &'a dyn WidgetBoundary) -> Self {
        Self { session, boundary }
    }

    /// Builds the payload for one render without sending it.
    ///
    /// Keyed widgets carry their current reset nonce; keyless ones carry
    /// none.
    pub fn payload(&self, dataset: Option<&Dataset>, config: &TableConfig) -> Result<Payload> {
        let reset_nonce = match config.widget_key() {
            Some(key) => Some(ResetCoordinator::new(self.session).nonce(key)?),
            None => None,
        };
        Ok(Payload::build(dataset, config, reset_nonce)?)
    }

    /// Renders the table and returns what the user has done with it.
    ///
    /// Configuration errors are raised before anything is sent to the
    /// widget.
    pub fn render(&self, dataset: Option<&Dataset>, config: &TableConfig) -> Result<InteractionResult> {
        let payload = self.payload(dataset, config)?;
        log::debug!(
            "rendering table {:?}: {} rows, {} columns, nonce {:?}",
            payload.key,
            payload.data.len(),
            payload.columns.len(),
            payload.reset_nonce
        );

        let value = self.boundary.exchange(&payload)?;
        Ok(InteractionResult::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::config::ActionSpec;
    use crate::config::ButtonDef;
    use crate::error::BoundaryError;
    use crate::error::ConfigError;
    use crate::error::Error;
    use crate::model::Row;
    use crate::session::InMemorySession;

    #[derive(Default)]
    struct CountingBoundary {
        calls: AtomicUsize,
    }

    impl WidgetBoundary for CountingBoundary {
        fn exchange(&self, payload: &Payload) -> std::result::Result<serde_json::Value, BoundaryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(payload.default.to_value())
        }
    }

    struct Unreachable;

    impl WidgetBoundary for Unreachable {
        fn exchange(&self, _payload: &Payload) -> std::result::Result<serde_json::Value, BoundaryError> {
            Err(BoundaryError::Unavailable("http://localhost:3001".to_string()))
        }
    }

    #[test]
    fn test_missing_dataset_never_reaches_boundary() {
        let session = InMemorySession::new();
        let boundary = CountingBoundary::default();
        let err = DataTable::new(&session, &boundary)
            .render(None, &TableConfig::default())
            .unwrap_err();

        assert!(matches!(err, Error::Config(ConfigError::MissingDataset)));
        assert_eq!(boundary.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_bad_insert_index_never_reaches_boundary() {
        let session = InMemorySession::new();
        let boundary = CountingBoundary::default();
        let dataset = Dataset::new(["ID"], vec![Row::new().set("ID", 1i64)]).unwrap();
        let config = TableConfig::new().actions(ActionSpec::new().insert_at(5).button(ButtonDef::new("x", "X")));

        let err = DataTable::new(&session, &boundary).render(Some(&dataset), &config).unwrap_err();
        assert!(err.is_config());
        assert_eq!(boundary.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_keyless_payload_has_no_nonce() {
        let session = InMemorySession::new();
        let boundary = CountingBoundary::default();
        let dataset = Dataset::new(["ID"], vec![]).unwrap();
        let payload = DataTable::new(&session, &boundary)
            .payload(Some(&dataset), &TableConfig::default())
            .unwrap();
        assert_eq!(payload.reset_nonce, None);
    }

    #[test]
    fn test_keyed_payload_defaults_nonce_to_zero() {
        let session = InMemorySession::new();
        let boundary = CountingBoundary::default();
        let dataset = Dataset::new(["ID"], vec![]).unwrap();
        let payload = DataTable::new(&session, &boundary)
            .payload(Some(&dataset), &TableConfig::new().key("t"))
            .unwrap();
        assert_eq!(payload.reset_nonce, Some(0));
    }

    #[test]
    fn test_empty_key_is_keyless() {
        let session = InMemorySession::new();
        session.set("__reset_nonce", serde_json::json!(4)).unwrap();
        let boundary = CountingBoundary::default();
        let dataset = Dataset::new(["ID"], vec![]).unwrap();
        let payload = DataTable::new(&session, &boundary)
            .payload(Some(&dataset), &TableConfig::new().key(""))
            .unwrap();
        assert_eq!(payload.reset_nonce, None);
        assert_eq!(payload.key, None);
        assert!(payload.identity().unwrap().starts_with("__anonymous_"));
    }

    #[test]
    fn test_boundary_failure_is_surfaced() {
        let session = InMemorySession::new();
        let dataset = Dataset::new(["ID"], vec![]).unwrap();
        let err = DataTable::new(&session, &Unreachable)
            .render(Some(&dataset), &TableConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::Boundary(BoundaryError::Unavailable(_))));
    }
}
