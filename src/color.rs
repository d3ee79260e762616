//! Text color values.

use crate::error::{Result, TateError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref RE_HEX_COLOR: Regex = Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
}

/// Palette offered next to the free color input
pub const PRESET_COLORS: [&str; 15] = [
    "#000000", "#333333", "#666666", "#999999", "#CCCCCC",
    "#FFFFFF", "#FF0000", "#00FF00", "#0000FF", "#FFFF00",
    "#FF00FF", "#00FFFF", "#FFA500", "#800080", "#FFC0CB",
];

/// A validated hex color, `#RGB` or `#RRGGBB`, stored as given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if RE_HEX_COLOR.is_match(s) {
            Ok(Color(s.to_string()))
        } else {
            Err(TateError::InvalidColor(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The palette as parsed colors
    pub fn presets() -> Vec<Color> {
        PRESET_COLORS
            .iter()
            .map(|c| Color(c.to_string()))
            .collect()
    }
}

impl Default for Color {
    fn default() -> Self {
        Color("#000000".to_string())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Color {
    type Err = TateError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = TateError;

    fn try_from(s: String) -> Result<Self> {
        Color::parse(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.0
    }
}
