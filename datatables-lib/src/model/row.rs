//! Ordered table row

use super::Value;

/// One row of a [`Dataset`](super::Dataset).
///
/// A row maps column names to cell values and keeps the order in which
/// fields were inserted, so serializing a row always yields the same JSON
/// object byte for byte.
///
/// # Example
///
/// ```
/// use datatables_lib::model::Row;
///
/// let row = Row::new()
///     .set("ID", 1i64)
///     .set("Name", "Aspirin");
///
/// assert_eq!(row.get("Name").and_then(|v| v.as_str()), Some("Aspirin"));
/// assert_eq!(row.keys().collect::<Vec<_>>(), vec!["ID", "Name"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub(crate) fields: Vec<(String, Value)>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty row with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    // =========================================================================
    // Field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == field).map(|(_, v)| v)
    }

    /// Returns `true` if the row contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == field)
    }

    /// Returns the field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over `(field, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts a field value.
    ///
    /// Replacing an existing field keeps its original position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == field) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        let pos = self.fields.iter().position(|(k, _)| k == field)?;
        Some(self.fields.remove(pos).1)
    }

    /// Returns a copy of this row with fields arranged in `columns` order.
    ///
    /// Fields not named in `columns` are dropped; columns the row lacks are
    /// skipped.
    pub(crate) fn arranged(&self, columns: &[String]) -> Row {
        let fields = columns
            .iter()
            .filter_map(|c| self.get(c).map(|v| (c.clone(), v.clone())))
            .collect();
        Row { fields }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}
