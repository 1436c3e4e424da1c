//! Column definitions as the widget lays them out

use serde::Serialize;

use super::markup::render_actions;
use crate::payload::Payload;

/// Title of the synthetic actions column.
pub const ACTIONS_TITLE: &str = "Actions";

/// One displayed column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub title: String,
    /// Row field shown in this column; `None` for the actions column.
    pub data: Option<String>,
    pub orderable: bool,
    pub visible: bool,
    pub searchable: bool,
    #[serde(rename = "className", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Fixed cell markup, used by the actions column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,
}

impl ColumnDef {
    /// Returns `true` for the synthetic actions column.
    pub fn is_actions(&self) -> bool {
        self.data.is_none()
    }
}

/// Lays out the columns for a payload.
///
/// Data columns follow `payload.columns`. If actions are configured, the
/// actions column is inserted at `insertIndex`, clamped to the column count.
pub fn build_columns(payload: &Payload) -> Vec<ColumnDef> {
    let mut columns: Vec<ColumnDef> = payload
        .columns
        .iter()
        .map(|c| ColumnDef {
            title: c.clone(),
            data: Some(c.clone()),
            orderable: payload.orderable.contains(c),
            visible: !payload.hidden.contains(c),
            searchable: payload.searchable.contains(c),
            class_name: None,
            render: None,
        })
        .collect();

    if let Some(actions) = &payload.actions {
        let index = actions.insert_index.min(columns.len());
        columns.insert(
            index,
            ColumnDef {
                title: ACTIONS_TITLE.to_string(),
                data: None,
                orderable: false,
                visible: true,
                searchable: false,
                class_name: Some("actions-cell".to_string()),
                render: Some(render_actions(actions)),
            },
        );
    }
    columns
}
