//! Interaction results delivered by the widget
//!
//! The widget reports one of two JSON shapes:
//!
//! - Selection: `{"rows": [...], "indexes": [...], "count": n}`. The idle
//!   value before any interaction is the empty selection.
//! - Action: the clicked row's fields merged with `"action"` (button id) and
//!   `"_rowIndex"` (position of the row in the dataset).
//!
//! The shapes carry no tag; an `action` key marks an action click.
//! [`InteractionResult`] gives both shapes an explicit variant and
//! serializes back to exactly the wire form.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;

use crate::error::BoundaryError;
use crate::model::Row;

/// Wire key naming the clicked button.
pub const ACTION_KEY: &str = "action";

/// Wire key carrying the clicked row's position.
pub const ROW_INDEX_KEY: &str = "_rowIndex";

/// What the user did with a table since it was last rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionResult {
    /// Nothing selected and no button clicked.
    #[default]
    Idle,
    /// The currently selected rows.
    Selection {
        rows: Vec<Row>,
        /// Positions of the selected rows in the dataset as delivered.
        indexes: Vec<usize>,
        count: usize,
    },
    /// An action button was clicked.
    Action {
        /// Id of the clicked button.
        action: String,
        /// Position of the clicked row in the dataset as delivered.
        row_index: usize,
        /// The clicked row's data, without the `action`/`_rowIndex` fields.
        row: Row,
    },
}

impl InteractionResult {
    /// Builds a selection result; an empty selection is [`Idle`](Self::Idle).
    pub fn selection(rows: Vec<Row>, indexes: Vec<usize>) -> Self {
        if rows.is_empty() && indexes.is_empty() {
            return Self::Idle;
        }
        let count = rows.len();
        Self::Selection { rows, indexes, count }
    }

    /// Builds an action result.
    pub fn action(action: impl Into<String>, row_index: usize, row: Row) -> Self {
        Self::Action {
            action: action.into(),
            row_index,
            row,
        }
    }

    /// Returns `true` for the idle value.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns the clicked button id, if this is an action.
    pub fn action_id(&self) -> Option<&str> {
        match self {
            Self::Action { action, .. } => Some(action),
            _ => None,
        }
    }

    /// Returns the selected rows (empty for idle and actions).
    pub fn selected_rows(&self) -> &[Row] {
        match self {
            Self::Selection { rows, .. } => rows,
            _ => &[],
        }
    }

    /// Returns the selected row positions (empty for idle and actions).
    pub fn selected_indexes(&self) -> &[usize] {
        match self {
            Self::Selection { indexes, .. } => indexes,
            _ => &[],
        }
    }

    /// Returns the wire form as a JSON value.
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            Self::Idle => idle_value(),
            Self::Selection { rows, indexes, count } => serde_json::json!({
                "rows": rows,
                "indexes": indexes,
                "count": count,
            }),
            Self::Action { action, row_index, row } => {
                let mut map = serde_json::Map::with_capacity(row.len() + 2);
                for (k, v) in row.iter() {
                    map.insert(k.to_string(), serde_json::to_value(v).unwrap_or_default());
                }
                map.insert(ACTION_KEY.to_string(), action.clone().into());
                map.insert(ROW_INDEX_KEY.to_string(), (*row_index).into());
                serde_json::Value::Object(map)
            }
        }
    }

    /// Decodes a value delivered by the widget.
    ///
    /// `null` (nothing delivered yet) and the empty selection both decode to
    /// [`Idle`](Self::Idle).
    pub fn from_value(value: serde_json::Value) -> Result<Self, BoundaryError> {
        let map = match value {
            serde_json::Value::Null => return Ok(Self::Idle),
            serde_json::Value::Object(map) => map,
            other => return Err(BoundaryError::unexpected("not an object", other)),
        };

        if map.contains_key(ACTION_KEY) {
            decode_action(map)
        } else {
            decode_selection(map)
        }
    }
}

/// Returns the idle wire value `{"rows": [], "indexes": [], "count": 0}`.
pub fn idle_value() -> serde_json::Value {
    serde_json::json!({ "rows": [], "indexes": [], "count": 0 })
}

fn decode_action(mut map: serde_json::Map<String, serde_json::Value>) -> Result<InteractionResult, BoundaryError> {
    let action = match map.shift_remove(ACTION_KEY) {
        Some(serde_json::Value::String(s)) => s,
        _ => {
            return Err(BoundaryError::unexpected(
                "action is not a string",
                serde_json::Value::Object(map),
            ));
        }
    };
    let row_index = match map.shift_remove(ROW_INDEX_KEY).as_ref().and_then(serde_json::Value::as_u64) {
        Some(idx) => idx as usize,
        None => {
            return Err(BoundaryError::unexpected(
                "action without a valid _rowIndex",
                serde_json::Value::Object(map),
            ));
        }
    };
    let value = serde_json::Value::Object(map);
    let row: Row = serde_json::from_value(value.clone())
        .map_err(|e| BoundaryError::unexpected(format!("action row is not an object: {e}"), value))?;
    Ok(InteractionResult::Action { action, row_index, row })
}

fn decode_selection(map: serde_json::Map<String, serde_json::Value>) -> Result<InteractionResult, BoundaryError> {
    #[derive(Deserialize)]
    struct Wire {
        rows: Vec<Row>,
        indexes: Vec<usize>,
        count: usize,
    }

    let value = serde_json::Value::Object(map);
    let wire: Wire = match serde_json::from_value(value.clone()) {
        Ok(wire) => wire,
        Err(e) => return Err(BoundaryError::unexpected(format!("not a selection: {e}"), value)),
    };
    if wire.rows.len() != wire.indexes.len() || wire.count != wire.rows.len() {
        return Err(BoundaryError::unexpected("selection counts disagree", value));
    }
    Ok(InteractionResult::selection(wire.rows, wire.indexes))
}

impl Serialize for InteractionResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Action { action, row_index, row } => {
                let mut map = serializer.serialize_map(Some(row.len() + 2))?;
                for (k, v) in row.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.serialize_entry(ACTION_KEY, action)?;
                map.serialize_entry(ROW_INDEX_KEY, row_index)?;
                map.end()
            }
            Self::Idle => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("rows", &[] as &[Row])?;
                map.serialize_entry("indexes", &[] as &[usize])?;
                map.serialize_entry("count", &0usize)?;
                map.end()
            }
            Self::Selection { rows, indexes, count } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("rows", rows)?;
                map.serialize_entry("indexes", indexes)?;
                map.serialize_entry("count", count)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for InteractionResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(id: i64) -> Row {
        Row::new().set("ID", id).set("Name", format!("row{id}"))
    }

    #[test]
    fn test_idle_wire_shape() {
        assert_eq!(InteractionResult::Idle.to_value(), json!({"rows": [], "indexes": [], "count": 0}));
        assert_eq!(
            serde_json::to_string(&InteractionResult::Idle).unwrap(),
            r#"{"rows":[],"indexes":[],"count":0}"#
        );
    }

    #[test]
    fn test_idle_never_has_action_key() {
        let value = InteractionResult::Idle.to_value();
        assert!(value.get(ACTION_KEY).is_none());
    }

    #[test]
    fn test_null_and_empty_selection_decode_to_idle() {
        assert!(InteractionResult::from_value(serde_json::Value::Null).unwrap().is_idle());
        assert!(InteractionResult::from_value(idle_value()).unwrap().is_idle());
    }

    #[test]
    fn test_decode_selection() {
        let value = json!({"rows": [{"ID": 1, "Name": "row1"}], "indexes": [1], "count": 1});
        let result = InteractionResult::from_value(value).unwrap();
        assert_eq!(
            result,
            InteractionResult::Selection {
                rows: vec![row(1)],
                indexes: vec![1],
                count: 1,
            }
        );
    }

    #[test]
    fn test_decode_action_strips_control_fields() {
        let value = json!({"ID": 4, "Name": "row4", "action": "delete", "_rowIndex": 4});
        let result = InteractionResult::from_value(value).unwrap();
        assert_eq!(result.action_id(), Some("delete"));
        match result {
            InteractionResult::Action { row_index, row: data, .. } => {
                assert_eq!(row_index, 4);
                assert_eq!(data, row(4));
            }
            other => panic!("expected action, got {other:?}"),
        }
    }

    #[test]
    fn test_action_wire_shape_is_merged_row() {
        let result = InteractionResult::action("delete", 4, row(4));
        let expected = json!({"ID": 4, "Name": "row4", "action": "delete", "_rowIndex": 4});
        assert_eq!(result.to_value(), expected);
        assert_eq!(serde_json::to_value(&result).unwrap(), expected);
    }

    #[test]
    fn test_action_on_row_with_no_fields() {
        let result = InteractionResult::from_value(json!({"action": "add", "_rowIndex": 0})).unwrap();
        assert_eq!(result, InteractionResult::action("add", 0, Row::new()));
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert!(InteractionResult::from_value(json!([1, 2])).is_err());
        assert!(InteractionResult::from_value(json!({"action": 3, "_rowIndex": 0})).is_err());
        assert!(InteractionResult::from_value(json!({"action": "x"})).is_err());
        assert!(InteractionResult::from_value(json!({"rows": [], "indexes": [0], "count": 1})).is_err());
        assert!(InteractionResult::from_value(json!({"foo": 1})).is_err());
    }

    #[test]
    fn test_deserialize_via_serde() {
        let result: InteractionResult =
            serde_json::from_str(r#"{"rows":[{"ID":0,"Name":"row0"}],"indexes":[0],"count":1}"#).unwrap();
        assert_eq!(result.selected_indexes(), &[0]);
    }
}
