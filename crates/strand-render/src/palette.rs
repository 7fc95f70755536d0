use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {input:?}: expected `#rgb` or `#rrggbb`")]
pub struct ColorParseError {
    pub input: String,
}

/// An opaque sRGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_string(),
        };
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let (r, g, b) = match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).map_err(|_| err())?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).map_err(|_| err())?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).map_err(|_| err())?;
                (r, g, b)
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| err())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| err())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| err())?;
                (r, g, b)
            }
            _ => return Err(err()),
        };
        Ok(Self { r, g, b })
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The three colors a scene is drawn with.
///
/// Missing fields fall back to the defaults when deserializing, so a palette file may override
/// only some of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Path, connectors, polygon outlines and the label.
    pub foreground: Color,
    pub background: Color,
    pub polygon_fill: Color,
}

impl Palette {
    pub const DEFAULT_FOREGROUND: Color = Color::rgb(0xeb, 0xeb, 0xd3);
    pub const DEFAULT_BACKGROUND: Color = Color::rgb(0x08, 0x3d, 0x77);
    /// Matches the background so polygons read as cut-outs.
    pub const DEFAULT_POLYGON_FILL: Color = Color::rgb(0x08, 0x3d, 0x77);
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: Self::DEFAULT_FOREGROUND,
            background: Self::DEFAULT_BACKGROUND,
            polygon_fill: Self::DEFAULT_POLYGON_FILL,
        }
    }
}
