//! Widget-side behavior of the table
//!
//! [`WidgetModel`] is the browser half of the contract: it lays out the
//! columns for a payload, tracks the selection, turns button clicks into
//! action results and discards its selection when it observes a new reset
//! nonce. The in-memory boundary drives one model per widget.

mod columns;
mod markup;

pub use columns::*;
pub use markup::*;

use std::collections::BTreeSet;

use crate::config::SelectMode;
use crate::payload::Payload;
use crate::result::InteractionResult;

/// State of one rendered table.
#[derive(Debug, Clone)]
pub struct WidgetModel {
    payload: Payload,
    columns: Vec<ColumnDef>,
    selected: BTreeSet<usize>,
    observed_nonce: u64,
    value: InteractionResult,
}

impl WidgetModel {
    /// Mounts a widget for its first payload.
    ///
    /// A freshly mounted widget publishes the empty selection.
    pub fn mount(payload: Payload) -> Self {
        let columns = build_columns(&payload);
        let observed_nonce = payload.reset_nonce.unwrap_or(0);
        Self {
            payload,
            columns,
            selected: BTreeSet::new(),
            observed_nonce,
            value: InteractionResult::Idle,
        }
    }

    /// Applies the payload of a later render pass.
    ///
    /// Selected positions past the end of the new data are dropped, and a
    /// payload with selection disabled drops all of them. A reset nonce
    /// different from the last one observed clears the selection. Whenever
    /// the selection changes here it is published again.
    pub fn update(&mut self, payload: Payload) {
        let nonce = payload.reset_nonce.unwrap_or(0);
        let rows = payload.data.len();
        self.columns = build_columns(&payload);
        self.payload = payload;

        let before = self.selected.len();
        self.selected.retain(|&idx| idx < rows);
        if !self.payload.select.is_enabled() {
            self.selected.clear();
        }
        let mut republish = self.selected.len() != before;

        if nonce != self.observed_nonce {
            log::debug!("widget observed reset nonce {} (was {})", nonce, self.observed_nonce);
            self.observed_nonce = nonce;
            self.selected.clear();
            republish = true;
        }
        if republish {
            self.publish_selection();
        }
    }

    /// Returns the payload the widget last rendered.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns the displayed columns.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns the last reset nonce the widget observed.
    pub fn observed_nonce(&self) -> u64 {
        self.observed_nonce
    }

    /// Returns the selected row positions in ascending order.
    pub fn selected(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    /// Returns the value the widget last published.
    pub fn value(&self) -> &InteractionResult {
        &self.value
    }

    /// Selects the row at `index`.
    ///
    /// In single mode this replaces any other selection. Returns `false` if
    /// nothing changed (selection disabled, index out of range, or already
    /// the selection).
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.payload.data.len() {
            return false;
        }
        let changed = match self.payload.select {
            SelectMode::Disabled => false,
            SelectMode::Single => {
                let already = self.selected.len() == 1 && self.selected.contains(&index);
                if !already {
                    self.selected.clear();
                    self.selected.insert(index);
                }
                !already
            }
            SelectMode::Multi => self.selected.insert(index),
        };
        if changed {
            self.publish_selection();
        }
        changed
    }

    /// Deselects the row at `index`. Returns `false` if it was not selected.
    pub fn deselect(&mut self, index: usize) -> bool {
        let changed = self.selected.remove(&index);
        if changed {
            self.publish_selection();
        }
        changed
    }

    /// Clicks a row: selects it, or deselects it if already selected.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.selected.contains(&index) {
            self.deselect(index)
        } else {
            self.select(index)
        }
    }

    /// Clicks the action button `action` on the row at `index`.
    ///
    /// Publishes the row's data merged with the button id. Returns `false`
    /// if no such button is rendered or the row does not exist. The
    /// selection is not touched.
    pub fn click_action(&mut self, action: &str, index: usize) -> bool {
        let rendered = self
            .payload
            .actions
            .as_ref()
            .and_then(|spec| spec.find(action))
            .is_some_and(is_renderable);
        let Some(row) = self.payload.data.get(index) else {
            return false;
        };
        if !rendered {
            return false;
        }
        self.value = InteractionResult::action(action, index, row.clone());
        true
    }

    fn publish_selection(&mut self) {
        let indexes = self.selected();
        let rows = indexes
            .iter()
            .filter_map(|&idx| self.payload.data.get(idx).cloned())
            .collect();
        self.value = InteractionResult::selection(rows, indexes);
    }
}
