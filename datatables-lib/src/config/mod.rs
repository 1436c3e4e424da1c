//! Table configuration
//!
//! [`TableConfig`] is an immutable snapshot of the display and behavior
//! options for one render. It is built fresh on every render pass, either
//! with the builder methods or by deserializing a JSON document that uses
//! the widget's option names (`pageLength`, `lengthMenu`, ...).

mod actions;
mod select;

pub use actions::*;
pub use select::*;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::model::Dataset;

/// Default name of the identifier column.
pub const DEFAULT_ID_COL: &str = "ID";

/// Default number of rows per page.
pub const DEFAULT_PAGE_LENGTH: u32 = 25;

/// Default page-size menu.
pub const DEFAULT_LENGTH_MENU: [u32; 4] = [10, 25, 50, 100];

/// Display and behavior options for one table render.
///
/// # Example
///
/// ```
/// use datatables_lib::config::{Scroll, SelectMode, TableConfig};
///
/// let config = TableConfig::new()
///     .key("molecules")
///     .page_length(10)
///     .select(SelectMode::Multi)
///     .orderable(["Name", "MW"])
///     .hidden(["ID"])
///     .scroll_y("480px");
///
/// assert_eq!(config.key.as_deref(), Some("molecules"));
/// assert_eq!(config.scroll_y, Scroll::Css("480px".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Name of the identifier column.
    pub id_col: String,

    /// Rows per page initially.
    ///
    /// Default: 25
    #[serde(rename = "pageLength")]
    pub page_length: u32,

    /// Options offered in the page-size menu.
    ///
    /// Default: `[10, 25, 50, 100]`
    #[serde(rename = "lengthMenu")]
    pub length_menu: Vec<u32>,

    /// Columns the user may sort by.
    pub orderable_cols: Vec<String>,

    /// Columns that are not displayed.
    pub hidden_cols: Vec<String>,

    /// Columns included in the search box.
    pub searchable_cols: Vec<String>,

    /// Row selection mode.
    ///
    /// Default: single
    pub select: SelectMode,

    #[serde(rename = "scrollX")]
    pub scroll_x: Scroll,

    #[serde(rename = "scrollY")]
    pub scroll_y: Scroll,

    /// Only render rows as they are displayed.
    ///
    /// Default: true
    #[serde(rename = "deferRender")]
    pub defer_render: bool,

    /// Widget layout directive, passed through uninterpreted.
    pub layout: Option<serde_json::Value>,

    /// Optional per-row action buttons.
    pub actions: Option<ActionSpec>,

    /// Identity of the widget within the session.
    ///
    /// Two tables must never share a key.
    pub key: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            id_col: DEFAULT_ID_COL.to_string(),
            page_length: DEFAULT_PAGE_LENGTH,
            length_menu: DEFAULT_LENGTH_MENU.to_vec(),
            orderable_cols: Vec::new(),
            hidden_cols: Vec::new(),
            searchable_cols: Vec::new(),
            select: SelectMode::Single,
            scroll_x: Scroll::Disabled,
            scroll_y: Scroll::Disabled,
            defer_render: true,
            layout: None,
            actions: None,
            key: None,
        }
    }
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the identifier column.
    pub fn id_col(mut self, id_col: impl Into<String>) -> Self {
        self.id_col = id_col.into();
        self
    }

    /// Sets the initial page length.
    pub fn page_length(mut self, page_length: u32) -> Self {
        self.page_length = page_length;
        self
    }

    /// Sets the page-size menu.
    pub fn length_menu(mut self, menu: impl IntoIterator<Item = u32>) -> Self {
        self.length_menu = menu.into_iter().collect();
        self
    }

    /// Sets the sortable columns.
    pub fn orderable<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.orderable_cols = cols.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the hidden columns.
    pub fn hidden<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hidden_cols = cols.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the searchable columns.
    pub fn searchable<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.searchable_cols = cols.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the selection mode.
    pub fn select(mut self, mode: SelectMode) -> Self {
        self.select = mode;
        self
    }

    /// Sets horizontal scrolling.
    pub fn scroll_x(mut self, scroll: impl Into<Scroll>) -> Self {
        self.scroll_x = scroll.into();
        self
    }

    /// Sets vertical scrolling.
    pub fn scroll_y(mut self, scroll: impl Into<Scroll>) -> Self {
        self.scroll_y = scroll.into();
        self
    }

    /// Sets deferred row rendering.
    pub fn defer_render(mut self, defer: bool) -> Self {
        self.defer_render = defer;
        self
    }

    /// Sets the layout directive.
    pub fn layout(mut self, layout: serde_json::Value) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Sets the action buttons.
    pub fn actions(mut self, actions: ActionSpec) -> Self {
        self.actions = Some(actions);
        self
    }

    /// Sets the widget key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Returns the key the widget is tracked under. An empty key counts as
    /// no key.
    pub fn widget_key(&self) -> Option<&str> {
        self.key.as_deref().filter(|key| !key.is_empty())
    }

    /// Checks this config against the dataset it will render.
    ///
    /// Hard errors are returned. Misuse that only makes results ambiguous
    /// (duplicate button ids, unknown column names) is logged and allowed.
    pub fn validate(&self, dataset: &Dataset) -> Result<(), ConfigError> {
        if let Some(actions) = &self.actions {
            actions.validate(dataset.column_count())?;
            for id in actions.duplicate_ids() {
                log::warn!("action button id '{}' is used more than once; clicks are ambiguous", id);
            }
        }

        let named = [
            ("orderable_cols", &self.orderable_cols),
            ("hidden_cols", &self.hidden_cols),
            ("searchable_cols", &self.searchable_cols),
        ];
        for (option, cols) in named {
            for col in cols.iter().filter(|c| !dataset.has_column(c)) {
                log::warn!("{} names unknown column '{}'", option, col);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    #[test]
    fn test_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.id_col, "ID");
        assert_eq!(config.page_length, 25);
        assert_eq!(config.length_menu, vec![10, 25, 50, 100]);
        assert_eq!(config.select, SelectMode::Single);
        assert!(config.defer_render);
        assert!(config.key.is_none());
    }

    #[test]
    fn test_from_json_uses_widget_names() {
        let config = TableConfig::from_json(
            r#"{
                "pageLength": 10,
                "select": false,
                "scrollY": "480px",
                "orderable_cols": ["Name"],
                "layout": {"top1End": {"buttons": ["colvis"]}},
                "key": "t"
            }"#,
        )
        .unwrap();
        assert_eq!(config.page_length, 10);
        assert_eq!(config.select, SelectMode::Disabled);
        assert_eq!(config.scroll_y, Scroll::Css("480px".into()));
        assert_eq!(config.orderable_cols, vec!["Name".to_string()]);
        assert_eq!(config.length_menu, vec![10, 25, 50, 100]);
        assert!(config.layout.is_some());
    }

    #[test]
    fn test_from_json_rejects_bad_select_and_unknown_fields() {
        assert!(TableConfig::from_json(r#"{"select": "os"}"#).is_err());
        assert!(TableConfig::from_json(r#"{"pagelength": 5}"#).is_err());
    }

    #[test]
    fn test_validate_checks_actions() {
        let dataset = Dataset::new(["ID"], vec![Row::new().set("ID", 1i64)]).unwrap();
        let config = TableConfig::new().actions(ActionSpec::new().insert_at(2).button(ButtonDef::new("a", "A")));
        assert!(matches!(
            config.validate(&dataset),
            Err(ConfigError::InsertIndexOutOfRange { index: 2, columns: 1 })
        ));

        let config = TableConfig::new().hidden(["Nope"]);
        assert!(config.validate(&dataset).is_ok());
    }
}
