//! Item and style colors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a color string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid color: {0:?}")]
pub struct ColorParseError(pub String);

/// RGBA color
///
/// Serialized as a `#RRGGBB` (or `#RRGGBBAA` when translucent) string, the
/// form host style sheets accept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
    pub fn parse_hex(s: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError(s.to_string());
        let digits = s.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            _ => return Err(err()),
        };
        let channel = |i: usize| -> Result<f32, ColorParseError> {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| err())
        };

        let alpha = if expanded.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Hex string form, alpha included only when not fully opaque
    pub fn to_hex_string(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if byte(self.a) == 0xFF {
            format!("#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Color as host style sheets accept it
///
/// `#`-prefixed hex strings are parsed into a [`Color`]. Named and functional
/// forms (`red`, `transparent`, `rgba(0, 0, 0, 0.5)`) are handed to the host
/// verbatim.
#[derive(Clone, Debug, PartialEq)]
pub enum HostColor {
    Rgba(Color),
    Raw(String),
}

impl HostColor {
    /// Parse a host color string; only blank strings and malformed hex fail
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError(s.to_string()));
        }
        if trimmed.starts_with('#') {
            return Color::parse_hex(trimmed).map(HostColor::Rgba);
        }
        Ok(HostColor::Raw(trimmed.to_string()))
    }

    /// The parsed color, when given in hex
    pub fn rgba(&self) -> Option<Color> {
        match self {
            HostColor::Rgba(color) => Some(*color),
            HostColor::Raw(_) => None,
        }
    }
}

impl From<Color> for HostColor {
    fn from(color: Color) -> Self {
        HostColor::Rgba(color)
    }
}

impl fmt::Display for HostColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostColor::Rgba(color) => fmt::Display::fmt(color, f),
            HostColor::Raw(raw) => f.write_str(raw),
        }
    }
}

impl FromStr for HostColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HostColor::parse(s)
    }
}

impl Serialize for HostColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HostColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HostColor::parse(&s).map_err(serde::de::Error::custom)
    }
}
