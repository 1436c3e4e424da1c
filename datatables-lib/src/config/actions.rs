//! Action button column configuration

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::error::ConfigError;

/// Layout direction of the buttons inside an action cell.
///
/// Parsing is case-insensitive in both `FromStr` and configuration
/// documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonDirection {
    #[default]
    Horizontal,
    Vertical,
}

impl ButtonDirection {
    /// Returns the CSS class used for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonDirection::Horizontal => "horizontal",
            ButtonDirection::Vertical => "vertical",
        }
    }
}

impl FromStr for ButtonDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(ButtonDirection::Horizontal),
            "vertical" => Ok(ButtonDirection::Vertical),
            _ => Err(ConfigError::InvalidDirection(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ButtonDirection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ButtonDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One button rendered in every row of the actions column.
///
/// The `id` is what a click reports back as `action`, so it must be
/// non-empty and should be unique within the [`ActionSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonDef {
    pub id: String,
    pub title: String,
    /// Label text shown on the button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline SVG icon markup, inserted unescaped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    /// Extra CSS class names.
    #[serde(default, rename = "className", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl ButtonDef {
    /// Creates a button with an id and a title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: None,
            svg: None,
            class_name: None,
        }
    }

    /// Sets the label text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the icon markup.
    pub fn with_svg(mut self, svg: impl Into<String>) -> Self {
        self.svg = Some(svg.into());
        self
    }

    /// Sets extra CSS class names.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// Declares a synthetic "Actions" column with per-row buttons.
///
/// # Example
///
/// ```
/// use datatables_lib::config::{ActionSpec, ButtonDef, ButtonDirection};
///
/// let actions = ActionSpec::new()
///     .insert_at(0)
///     .direction(ButtonDirection::Vertical)
///     .button(ButtonDef::new("view", "View").with_text("View"))
///     .button(ButtonDef::new("delete", "Delete").with_svg("<svg/>"));
///
/// assert_eq!(actions.buttons.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    /// Column position the actions column is inserted at.
    #[serde(rename = "insertIndex", default)]
    pub insert_index: usize,
    #[serde(rename = "btndirection", default)]
    pub direction: ButtonDirection,
    pub buttons: Vec<ButtonDef>,
    #[serde(
        rename = "hideWhenSelectSingle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hide_when_select_single: Option<bool>,
}

impl ActionSpec {
    /// Creates an empty action spec inserting at column 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the insertion position.
    pub fn insert_at(mut self, index: usize) -> Self {
        self.insert_index = index;
        self
    }

    /// Sets the button layout direction.
    pub fn direction(mut self, direction: ButtonDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Appends a button.
    pub fn button(mut self, button: ButtonDef) -> Self {
        self.buttons.push(button);
        self
    }

    /// Sets the `hideWhenSelectSingle` hint.
    pub fn hide_when_select_single(mut self, hide: bool) -> Self {
        self.hide_when_select_single = Some(hide);
        self
    }

    /// Returns the button with the given id.
    pub fn find(&self, id: &str) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Checks the spec against a table with `columns` data columns.
    pub fn validate(&self, columns: usize) -> Result<(), ConfigError> {
        if self.insert_index > columns {
            return Err(ConfigError::InsertIndexOutOfRange {
                index: self.insert_index,
                columns,
            });
        }
        if let Some(position) = self.buttons.iter().position(|b| b.id.is_empty()) {
            return Err(ConfigError::EmptyButtonId { position });
        }
        Ok(())
    }

    /// Returns ids that appear on more than one button.
    ///
    /// Clicks on such buttons cannot be told apart.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dups = Vec::new();
        for button in &self.buttons {
            if !seen.insert(button.id.as_str()) && !dups.contains(&button.id.as_str()) {
                dups.push(button.id.as_str());
            }
        }
        dups
    }
}
