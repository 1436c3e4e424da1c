//! Configuration error types

/// Errors raised while validating a dataset or table configuration.
///
/// These are always raised synchronously, before a payload is built and
/// before anything crosses the widget boundary.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No dataset was supplied to the table.
    #[error("No dataset supplied")]
    MissingDataset,

    /// A column name was empty.
    #[error("Column at position {position} has an empty name")]
    EmptyColumnName { position: usize },

    /// The same column name was declared twice.
    #[error("Column '{0}' is declared more than once")]
    DuplicateColumn(String),

    /// A row does not carry exactly the declared columns.
    #[error("Row {row} does not match the declared columns (missing: {missing:?}, unexpected: {unexpected:?})")]
    RaggedRow {
        /// Position of the offending row.
        row: usize,
        /// Declared columns the row has no value for.
        missing: Vec<String>,
        /// Fields the row carries that are not declared columns.
        unexpected: Vec<String>,
    },

    /// The selection mode is not one of `single`, `multi` or disabled.
    #[error("Invalid select mode '{0}', expected \"single\", \"multi\" or false")]
    InvalidSelectMode(String),

    /// The button layout direction is not `horizontal` or `vertical`.
    #[error("Invalid button direction '{0}', expected \"horizontal\" or \"vertical\"")]
    InvalidDirection(String),

    /// The actions column would be inserted past the last column.
    #[error("Actions insertIndex {index} is out of range for {columns} columns")]
    InsertIndexOutOfRange { index: usize, columns: usize },

    /// An action button has no id to report clicks with.
    #[error("Action button at position {position} has an empty id")]
    EmptyButtonId { position: usize },

    /// A dataset or configuration document could not be parsed.
    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a ragged row error.
    pub fn ragged(row: usize, missing: Vec<String>, unexpected: Vec<String>) -> Self {
        Self::RaggedRow {
            row,
            missing,
            unexpected,
        }
    }
}
