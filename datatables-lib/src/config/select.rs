//! Selection and scroll options

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Visitor;

use crate::error::ConfigError;

/// Row selection mode of the widget.
///
/// On the wire this is `"single"`, `"multi"` or `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SelectMode {
    /// At most one row selected at a time.
    #[default]
    Single,
    /// Any number of rows selected.
    Multi,
    /// Selection turned off.
    Disabled,
}

impl SelectMode {
    /// Returns `true` unless selection is disabled.
    pub fn is_enabled(self) -> bool {
        !matches!(self, SelectMode::Disabled)
    }
}

impl FromStr for SelectMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(SelectMode::Single),
            "multi" => Ok(SelectMode::Multi),
            "false" | "disabled" | "none" => Ok(SelectMode::Disabled),
            _ => Err(ConfigError::InvalidSelectMode(s.to_string())),
        }
    }
}

impl fmt::Display for SelectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectMode::Single => f.write_str("single"),
            SelectMode::Multi => f.write_str("multi"),
            SelectMode::Disabled => f.write_str("false"),
        }
    }
}

impl Serialize for SelectMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SelectMode::Single => serializer.serialize_str("single"),
            SelectMode::Multi => serializer.serialize_str("multi"),
            SelectMode::Disabled => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for SelectMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SelectVisitor;

        impl Visitor<'_> for SelectVisitor {
            type Value = SelectMode;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("\"single\", \"multi\" or false")
            }

            fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<SelectMode, E> {
                if v {
                    Err(E::custom(ConfigError::InvalidSelectMode("true".to_string())))
                } else {
                    Ok(SelectMode::Disabled)
                }
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<SelectMode, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(SelectVisitor)
    }
}

/// Horizontal or vertical scrolling of the table body.
///
/// On the wire this is `false`, `true`, or a CSS length such as `"480px"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Scroll {
    /// No scrolling.
    #[default]
    Disabled,
    /// Scrolling with the widget's natural size.
    Enabled,
    /// Scrolling within the given CSS length.
    Css(String),
}

impl From<bool> for Scroll {
    fn from(v: bool) -> Self {
        if v { Scroll::Enabled } else { Scroll::Disabled }
    }
}

impl From<&str> for Scroll {
    fn from(v: &str) -> Self {
        Scroll::Css(v.to_string())
    }
}

impl From<String> for Scroll {
    fn from(v: String) -> Self {
        Scroll::Css(v)
    }
}

impl Serialize for Scroll {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scroll::Disabled => serializer.serialize_bool(false),
            Scroll::Enabled => serializer.serialize_bool(true),
            Scroll::Css(len) => serializer.serialize_str(len),
        }
    }
}

impl<'de> Deserialize<'de> for Scroll {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScrollVisitor;

        impl Visitor<'_> for ScrollVisitor {
            type Value = Scroll;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean or a CSS length")
            }

            fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Scroll, E> {
                Ok(v.into())
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Scroll, E> {
                Ok(v.into())
            }
        }

        deserializer.deserialize_any(ScrollVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_mode_wire_form() {
        assert_eq!(serde_json::to_string(&SelectMode::Single).unwrap(), r#""single""#);
        assert_eq!(serde_json::to_string(&SelectMode::Multi).unwrap(), r#""multi""#);
        assert_eq!(serde_json::to_string(&SelectMode::Disabled).unwrap(), "false");
    }

    #[test]
    fn test_select_mode_parse() {
        assert_eq!("multi".parse::<SelectMode>().unwrap(), SelectMode::Multi);
        assert_eq!("Disabled".parse::<SelectMode>().unwrap(), SelectMode::Disabled);
        assert!(matches!(
            "os".parse::<SelectMode>(),
            Err(ConfigError::InvalidSelectMode(s)) if s == "os"
        ));
    }

    #[test]
    fn test_select_mode_deserialize() {
        assert_eq!(serde_json::from_str::<SelectMode>("false").unwrap(), SelectMode::Disabled);
        assert_eq!(serde_json::from_str::<SelectMode>(r#""single""#).unwrap(), SelectMode::Single);
        assert!(serde_json::from_str::<SelectMode>("true").is_err());
        assert!(serde_json::from_str::<SelectMode>("3").is_err());
    }

    #[test]
    fn test_scroll_wire_form() {
        assert_eq!(serde_json::to_string(&Scroll::Disabled).unwrap(), "false");
        assert_eq!(serde_json::to_string(&Scroll::Enabled).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Scroll::from("480px")).unwrap(), r#""480px""#);
        assert_eq!(serde_json::from_str::<Scroll>(r#""50vh""#).unwrap(), Scroll::Css("50vh".into()));
    }
}
