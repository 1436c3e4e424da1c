//! In-process widget boundary

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::WidgetBoundary;
use crate::error::BoundaryError;
use crate::payload::Payload;
use crate::widget::WidgetModel;

/// A boundary that runs the widget model in-process.
///
/// Widgets are tracked by [`Payload::identity`]: keyed widgets keep their
/// state across passes, keyless ones become a new widget whenever any
/// argument changes. User actions are simulated with
/// [`InMemoryBoundary::interact`].
///
/// # Example
///
/// ```
/// use datatables_lib::boundary::{InMemoryBoundary, WidgetBoundary};
/// use datatables_lib::config::TableConfig;
/// use datatables_lib::model::Dataset;
/// use datatables_lib::payload::Payload;
///
/// let dataset = Dataset::from_json_records(r#"[{"ID": 1}, {"ID": 2}]"#).unwrap();
/// let payload = Payload::build(Some(&dataset), &TableConfig::new().key("t"), Some(0)).unwrap();
///
/// let boundary = InMemoryBoundary::new();
/// boundary.exchange(&payload).unwrap();
/// boundary.interact("t", |w| w.select(1));
///
/// let value = boundary.exchange(&payload).unwrap();
/// assert_eq!(value["indexes"], serde_json::json!([1]));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBoundary {
    widgets: DashMap<String, WidgetModel>,
}

impl InMemoryBoundary {
    /// Creates a boundary with no mounted widgets.
    pub fn new() -> Self {
        Self {
            widgets: DashMap::new(),
        }
    }

    /// Runs a user action against a mounted widget.
    ///
    /// Returns `None` if no widget with that identity has been rendered.
    pub fn interact<R>(&self, identity: &str, f: impl FnOnce(&mut WidgetModel) -> R) -> Option<R> {
        let mut widget = self.widgets.get_mut(identity)?;
        Some(f(widget.value_mut()))
    }

    /// Returns a snapshot of a mounted widget.
    pub fn widget(&self, identity: &str) -> Option<WidgetModel> {
        self.widgets.get(identity).map(|w| w.value().clone())
    }

    /// Unmounts a widget, discarding its state.
    pub fn unmount(&self, identity: &str) -> bool {
        self.widgets.remove(identity).is_some()
    }

    /// Returns the number of mounted widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns `true` if no widget is mounted.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl WidgetBoundary for InMemoryBoundary {
    fn exchange(&self, payload: &Payload) -> Result<serde_json::Value, BoundaryError> {
        let identity = payload.identity()?;
        let value = match self.widgets.entry(identity) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().update(payload.clone());
                entry.get().value().to_value()
            }
            Entry::Vacant(entry) => {
                log::debug!("mounting widget '{}'", entry.key());
                let widget = entry.insert(WidgetModel::mount(payload.clone()));
                widget.value().value().to_value()
            }
        };
        Ok(value)
    }
}
