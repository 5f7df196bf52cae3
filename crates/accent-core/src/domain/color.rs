//! Canonical accent color value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when building an [`AccentColor`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorParseError {
    /// Text was not of the form `#rrggbb`.
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),

    /// A unit-interval channel value was outside `[0.0, 1.0]` (or NaN).
    #[error("Channel value out of range: {0}")]
    ChannelOutOfRange(f64),
}

/// A desktop accent color as a lowercase `#rrggbb` string.
///
/// Values are always complete; there is no alpha channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccentColor(String);

impl AccentColor {
    /// Build a color from 8-bit channels.
    #[must_use]
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(format!("#{red:02x}{green:02x}{blue:02x}"))
    }

    /// Build a color from channels in the closed unit interval.
    ///
    /// Each channel is scaled by 255 and floored. Any channel outside
    /// `[0.0, 1.0]` rejects the whole color.
    pub fn from_unit_rgb(red: f64, green: f64, blue: f64) -> Result<Self, ColorParseError> {
        Ok(Self::from_rgb(
            unit_to_byte(red)?,
            unit_to_byte(green)?,
            unit_to_byte(blue)?,
        ))
    }

    /// The `#rrggbb` representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn red(&self) -> u8 {
        self.channel(1)
    }

    #[must_use]
    pub fn green(&self) -> u8 {
        self.channel(3)
    }

    #[must_use]
    pub fn blue(&self) -> u8 {
        self.channel(5)
    }

    /// All three channels as a tuple.
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    // Construction guarantees six hex digits after `#`.
    fn channel(&self, start: usize) -> u8 {
        u8::from_str_radix(&self.0[start..start + 2], 16).unwrap_or_default()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_byte(value: f64) -> Result<u8, ColorParseError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ColorParseError::ChannelOutOfRange(value));
    }
    // In range, so the floored product is within 0..=255.
    Ok((value * 255.0).floor() as u8)
}

impl FromStr for AccentColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ColorParseError::InvalidHex(s.to_string()))?;
        Ok(Self(format!("#{}", digits.to_ascii_lowercase())))
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccentColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<AccentColor> for String {
    fn from(color: AccentColor) -> Self {
        color.0
    }
}

impl Serialize for AccentColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccentColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_is_lowercase_hex() {
        assert_eq!(AccentColor::from_rgb(0xEA, 0x54, 0x21).as_str(), "#ea5421");
        assert_eq!(AccentColor::from_rgb(0, 0, 0).as_str(), "#000000");
    }

    #[test]
    fn test_from_unit_rgb_floors_channels() {
        let color = AccentColor::from_unit_rgb(0.92, 0.33, 0.13).unwrap();
        assert_eq!(color.rgb(), (234, 84, 33));
        assert_eq!(color.to_string(), "#ea5421");

        let white = AccentColor::from_unit_rgb(1.0, 1.0, 1.0).unwrap();
        assert_eq!(white.as_str(), "#ffffff");
    }

    #[test]
    fn test_from_unit_rgb_rejects_out_of_range() {
        assert_eq!(
            AccentColor::from_unit_rgb(0.5, 1.2, 0.5),
            Err(ColorParseError::ChannelOutOfRange(1.2))
        );
        assert!(AccentColor::from_unit_rgb(-0.1, 0.0, 0.0).is_err());
        assert!(AccentColor::from_unit_rgb(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_parse_normalizes_case() {
        let color: AccentColor = "#0073E5".parse().unwrap();
        assert_eq!(color.as_str(), "#0073e5");
        assert_eq!(color.blue(), 0xe5);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["0073e5", "#0073e", "#0073e5ff", "#gg73e5", ""] {
            assert!(bad.parse::<AccentColor>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let color = AccentColor::from_rgb(0x86, 0x5e, 0x3c);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#865e3c\"");

        let back: AccentColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<AccentColor>("\"orange\"").is_err());
    }
}
