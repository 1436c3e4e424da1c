//! Rectangular dataset handed to the table widget

use std::collections::HashSet;

use serde::Serialize;

use super::Row;
use crate::error::ConfigError;

/// An ordered set of columns and the rows that fill them.
///
/// A dataset is always rectangular: every row has a value (possibly null)
/// for every declared column and nothing else. Construction checks this and
/// rearranges each row's fields into column order, so two datasets built
/// from the same records serialize identically.
///
/// # Example
///
/// ```
/// use datatables_lib::model::{Dataset, Row};
///
/// let dataset = Dataset::new(
///     ["ID", "Name"],
///     vec![
///         Row::new().set("Name", "Aspirin").set("ID", 1i64),
///         Row::new().set("ID", 2i64).set("Name", "Caffeine"),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.row(0).unwrap().keys().collect::<Vec<_>>(), vec!["ID", "Name"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    columns: Vec<String>,
    #[serde(rename = "data")]
    rows: Vec<Row>,
}

impl Dataset {
    /// Creates a dataset from explicit columns and rows.
    pub fn new<I, S>(columns: I, rows: Vec<Row>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        check_columns(&columns)?;

        let declared: HashSet<&str> = columns.iter().map(String::as_str).collect();
        let mut arranged = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            let missing: Vec<String> = columns
                .iter()
                .filter(|c| !row.contains(c))
                .cloned()
                .collect();
            let unexpected: Vec<String> = row
                .keys()
                .filter(|k| !declared.contains(k))
                .map(str::to_string)
                .collect();
            if !missing.is_empty() || !unexpected.is_empty() {
                return Err(ConfigError::ragged(idx, missing, unexpected));
            }
            arranged.push(row.arranged(&columns));
        }

        Ok(Self {
            columns,
            rows: arranged,
        })
    }

    /// Creates a dataset whose columns are taken from the first row.
    ///
    /// An empty record list yields an empty dataset with no columns.
    pub fn from_records(rows: Vec<Row>) -> Result<Self, ConfigError> {
        let columns: Vec<String> = rows
            .first()
            .map(|r| r.keys().map(str::to_string).collect())
            .unwrap_or_default();
        Self::new(columns, rows)
    }

    /// Parses a records-oriented JSON array (`[{"col": value, ...}, ...]`).
    pub fn from_json_records(json: &str) -> Result<Self, ConfigError> {
        let rows: Vec<Row> = serde_json::from_str(json)?;
        Self::from_records(rows)
    }

    /// Returns the column names in display order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the rows in delivery order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the row at `index`, if any.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the dataset declares the column.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn check_columns(columns: &[String]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for (position, column) in columns.iter().enumerate() {
        if column.is_empty() {
            return Err(ConfigError::EmptyColumnName { position });
        }
        if !seen.insert(column.as_str()) {
            return Err(ConfigError::DuplicateColumn(column.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    fn molecules() -> Vec<Row> {
        vec![
            Row::new().set("ID", 1i64).set("Name", "Aspirin"),
            Row::new().set("ID", 2i64).set("Name", Value::Null),
        ]
    }

    #[test]
    fn test_nulls_are_allowed() {
        let dataset = Dataset::new(["ID", "Name"], molecules()).unwrap();
        assert!(dataset.row(1).unwrap().get("Name").unwrap().is_null());
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let mut rows = molecules();
        rows.push(Row::new().set("ID", 3i64));

        let err = Dataset::new(["ID", "Name"], rows).unwrap_err();
        match err {
            ConfigError::RaggedRow { row, missing, unexpected } => {
                assert_eq!(row, 2);
                assert_eq!(missing, vec!["Name".to_string()]);
                assert!(unexpected.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extra_field_is_rejected() {
        let mut rows = molecules();
        rows[0].insert("Smiles", "CC(=O)O");

        let err = Dataset::new(["ID", "Name"], rows).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::RaggedRow { row: 0, ref unexpected, .. } if unexpected == &vec!["Smiles".to_string()]
        ));
    }

    #[test]
    fn test_duplicate_and_empty_columns() {
        assert!(matches!(
            Dataset::new(["ID", "ID"], vec![]),
            Err(ConfigError::DuplicateColumn(c)) if c == "ID"
        ));
        assert!(matches!(
            Dataset::new(["ID", ""], vec![]),
            Err(ConfigError::EmptyColumnName { position: 1 })
        ));
    }

    #[test]
    fn test_from_json_records_detects_inconsistent_columns() {
        let json = r#"[{"ID": 1, "Name": "a"}, {"ID": 2, "Label": "b"}]"#;
        assert!(matches!(
            Dataset::from_json_records(json),
            Err(ConfigError::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_from_json_records_rejects_malformed_document() {
        assert!(matches!(
            Dataset::from_json_records(r#"{"ID": 1}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_rows_are_arranged_in_column_order() {
        let json = r#"[{"ID": 1, "Name": "a"}, {"Name": "b", "ID": 2}]"#;
        let dataset = Dataset::from_json_records(json).unwrap();
        let encoded = serde_json::to_string(dataset.rows()).unwrap();
        assert_eq!(encoded, r#"[{"ID":1,"Name":"a"},{"ID":2,"Name":"b"}]"#);
    }
}
