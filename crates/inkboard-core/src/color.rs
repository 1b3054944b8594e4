//! RGB color with `#rrggbb` wire representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color must start with '#': {0}")]
    MissingHash(String),
    #[error("color must be 3 or 6 hex digits: {0}")]
    BadLength(String),
    #[error("invalid hex digit in color: {0}")]
    BadDigit(String),
}

/// An 8-bit RGB color.
///
/// Serialized as a `#rrggbb` hex string, matching the values the drawing
/// client exchanges.
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

    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Parse a `#rgb` or `#rrggbb` hex color.
    pub fn from_hex(color: &str) -> Result<Self, ColorParseError> {
        let hex = color
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(color.to_string()))?
            .trim();

        let digit = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::BadDigit(color.to_string()))
        };

        match hex.len() {
            3 => {
                // #rgb -> #rrggbb
                let r = digit(&hex[0..1])? * 17;
                let g = digit(&hex[1..2])? * 17;
                let b = digit(&hex[2..3])? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = digit(&hex[0..2])?;
                let g = digit(&hex[2..4])?;
                let b = digit(&hex[4..6])?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ColorParseError::BadLength(color.to_string())),
        }
    }

    /// Format as a `#rrggbb` hex string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit() {
        assert_eq!(Rgb::from_hex("#000000").unwrap(), Rgb::black());
        assert_eq!(Rgb::from_hex("#8B5CF6").unwrap(), Rgb::new(0x8b, 0x5c, 0xf6));
    }

    #[test]
    fn test_parse_three_digit() {
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::white());
        assert_eq!(Rgb::from_hex("#f00").unwrap(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Rgb::from_hex("000000").is_err());
        assert!(Rgb::from_hex("#0000").is_err());
        assert!(Rgb::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Rgb::new(0x10, 0xb9, 0x81);
        assert_eq!(Rgb::from_hex(&color.to_hex()).unwrap(), color);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::black()).unwrap();
        assert_eq!(json, "\"#000000\"");

        let color: Rgb = serde_json::from_str("\"#10b981\"").unwrap();
        assert_eq!(color, Rgb::new(0x10, 0xb9, 0x81));
    }
}
