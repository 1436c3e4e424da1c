//! Boundary to the embedded table widget
//!
//! The widget itself (rendering, sorting, searching, paging) lives on the
//! other side of [`WidgetBoundary`]. Each render pass hands it one
//! [`Payload`] and gets back the widget's current value: whatever the
//! widget last published, or the payload's default if it has published
//! nothing. Interactions between two passes are not queued; only the most
//! recent one is observable.

mod memory;

pub use memory::*;

use crate::error::BoundaryError;
use crate::payload::Payload;

/// Delivers payloads to a widget and returns its synchronized value.
pub trait WidgetBoundary: Send + Sync {
    /// Renders `payload` and returns the widget's current value.
    fn exchange(&self, payload: &Payload) -> Result<serde_json::Value, BoundaryError>;
}

impl<B: WidgetBoundary + ?Sized> WidgetBoundary for &B {
    fn exchange(&self, payload: &Payload) -> Result<serde_json::Value, BoundaryError> {
        (**self).exchange(payload)
    }
}
