//! Severity-to-color mapping.
//!
//! Each recognized severity may be assigned a [`LevelColor`], which is
//! applied to both the message and the padded level label when colorization
//! is enabled. Severities without a mapping are printed unstyled.

use std::collections::HashMap;
use std::str::FromStr;

use colored::{Color, Colorize};
use serde::{Deserialize, Deserializer, de};

use crate::Error;

/// Terminal color applied to a severity's output
///
/// Deserializes from a color name such as `"yellow"` or `"bright red"`,
/// so color maps can be loaded from configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelColor(pub Color);

impl LevelColor {
    /// Wrap `text` in the ANSI escape sequence for this color
    ///
    /// Whether escape codes are actually emitted also depends on the
    /// `colored` crate's terminal detection and overrides.
    pub fn paint(&self, text: &str) -> String {
        text.color(self.0).to_string()
    }
}

impl From<Color> for LevelColor {
    fn from(color: Color) -> Self {
        LevelColor(color)
    }
}

impl FromStr for LevelColor {
    type Err = Error;

    fn from_str(name: &str) -> crate::Result<Self> {
        Color::from_str(name)
            .map(LevelColor)
            .map_err(|()| Error::UnknownColor(name.to_string()))
    }
}

impl<'de> Deserialize<'de> for LevelColor {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// Default color map: white, yellow and red for info, warn and error
pub fn default_colors() -> HashMap<String, LevelColor> {
    HashMap::from([
        ("info".to_string(), LevelColor(Color::White)),
        ("warn".to_string(), LevelColor(Color::Yellow)),
        ("error".to_string(), LevelColor(Color::Red)),
    ])
}
