//! Viewer configuration, read from TOML.
//!
//! ```toml
//! initial_flavour = "quad"
//! column_width = 70
//!
//! [palette]
//! positive = "#005600"
//! negative = "#7c0000"
//! ```

use crate::error::ConfigError;
use normview_kernel::Flavour;
use normview_table::Emphasis;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_COLUMN_WIDTH: usize = 70;

/// An sRGB colour, written `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::Colour(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(bad)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(bad());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| bad())
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// Colours for the two emphasis classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Palette {
    pub positive: Rgb,
    pub negative: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            positive: Rgb::new(0x00, 0x56, 0x00),
            negative: Rgb::new(0x7c, 0x00, 0x00),
        }
    }
}

impl Palette {
    pub fn colour(&self, emphasis: Emphasis) -> Rgb {
        match emphasis {
            Emphasis::Positive => self.positive,
            Emphasis::Negative => self.negative,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ViewerConfig {
    /// Flavour to start in when nothing has been selected yet.
    pub initial_flavour: Option<Flavour>,
    /// Preferred width of every column.
    pub column_width: usize,
    pub palette: Palette,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            initial_flavour: None,
            column_width: DEFAULT_COLUMN_WIDTH,
            palette: Palette::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
