//! This file defines [`RGBColor`], the integer sRGB color every other representation in this crate
//! converts through, along with its hex-code parsing and formatting. Hex codes are accepted in either
//! case, with or without a leading `#`. They are produced in two forms: lowercase from
//! [`RGBColor::to_hex_code`], which is what gets handed to other code, and uppercase from the
//! `Display` implementation, which is what gets shown to people.
//!
//! [`RGBColor`]: struct.RGBColor.html
//! [`RGBColor::to_hex_code`]: struct.RGBColor.html#method.to_hex_code

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::colors::HSLColor;
use crate::error::ColorParseError;

/// A color in the sRGB space, with each channel an integer between 0 and 255.
///
/// # Example
///
/// ```
/// # use huepick::prelude::*;
/// let teal = RGBColor::from_hex_code("#008080").unwrap();
/// assert_eq!(teal, RGBColor { r: 0, g: 128, b: 128 });
/// assert_eq!(teal.to_hex_code(), "#008080");
/// assert_eq!(teal.to_string(), "#008080");
/// let coral: RGBColor = "FF7F50".parse().unwrap();
/// assert_eq!(coral.to_hex_code(), "#ff7f50");
/// assert_eq!(coral.to_string(), "#FF7F50");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct RGBColor {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl RGBColor {
    /// Pure black, `#000000`.
    pub const BLACK: RGBColor = RGBColor { r: 0, g: 0, b: 0 };
    /// Pure white, `#ffffff`.
    pub const WHITE: RGBColor = RGBColor {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parses a hex code of exactly six hex digits, optionally prefixed by `#`. Both upper and
    /// lowercase digits are accepted. Three-digit shorthand is not.
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, ColorParseError> {
        let digits = hex.trim_start_matches('#');
        let len = digits.chars().count();
        if len != 6 {
            return Err(ColorParseError::InvalidHexLength(len));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHexDigit(hex.to_string()));
        }
        // every character is ASCII now, so byte slicing lands on character boundaries
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidHexDigit(hex.to_string()))
        };
        Ok(RGBColor {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Returns the lowercase, zero-padded `#rrggbb` form of this color.
    pub fn to_hex_code(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns the channels normalized to the range 0-1.
    pub fn to_unit(&self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.,
            f64::from(self.g) / 255.,
            f64::from(self.b) / 255.,
        ]
    }

    /// Builds a color from channels in the range 0-1, scaling and rounding each one. Values outside
    /// of that range are clamped.
    pub fn from_unit(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor {
            r: unit_to_channel(r),
            g: unit_to_channel(g),
            b: unit_to_channel(b),
        }
    }
}

// rounding happens before clamping so that e.g. 1.0000001 still maps to 255
fn unit_to_channel(c: f64) -> u8 {
    let scaled = (c * 255.).round();
    if scaled.is_nan() || scaled <= 0. {
        0
    } else if scaled >= 255. {
        255
    } else {
        scaled as u8
    }
}

/// Formats the color the way it is displayed: uppercase, `#RRGGBB`.
impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parses either a hex code or an `hsl(h, s%, l%)` string.
impl FromStr for RGBColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<RGBColor, ColorParseError> {
        let trimmed = s.trim();
        if trimmed.starts_with("hsl") {
            trimmed.parse::<HSLColor>().map(|hsl| hsl.to_rgb())
        } else {
            RGBColor::from_hex_code(trimmed)
        }
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        RGBColor {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }
    }
}

impl From<[u8; 3]> for RGBColor {
    fn from(rgb: [u8; 3]) -> RGBColor {
        RGBColor {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        }
    }
}

impl From<RGBColor> for [u8; 3] {
    fn from(rgb: RGBColor) -> [u8; 3] {
        [rgb.r, rgb.g, rgb.b]
    }
}

impl Serialize for RGBColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_code())
    }
}

impl<'de> Deserialize<'de> for RGBColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<RGBColor, D::Error> {
        let hex = String::deserialize(deserializer)?;
        RGBColor::from_hex_code(&hex).map_err(de::Error::custom)
    }
}

/// Formats an `[r, g, b]` triple as a lowercase `#rrggbb` hex code.
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    RGBColor::from(rgb).to_hex_code()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_parsing() {
        let c = RGBColor::from_hex_code("#1a2B3c").unwrap();
        assert_eq!(c, RGBColor { r: 26, g: 43, b: 60 });
        assert_eq!(RGBColor::from_hex_code("ffffff").unwrap(), RGBColor::WHITE);
        // errors
        assert_eq!(
            RGBColor::from_hex_code("#fff"),
            Err(ColorParseError::InvalidHexLength(3))
        );
        assert_eq!(
            RGBColor::from_hex_code("#gg0000"),
            Err(ColorParseError::InvalidHexDigit("#gg0000".to_string()))
        );
        // multi-byte characters are counted, not sliced through
        assert_eq!(
            RGBColor::from_hex_code("#ééé"),
            Err(ColorParseError::InvalidHexLength(3))
        );
        assert!(RGBColor::from_hex_code("#ff00ééé").is_err());
    }

    #[test]
    fn test_hex_formatting() {
        let c = RGBColor { r: 10, g: 0, b: 171 };
        assert_eq!(c.to_hex_code(), "#0a00ab");
        assert_eq!(c.to_string(), "#0A00AB");
        assert_eq!(rgb_to_hex([0, 0, 0]), "#000000");
        assert_eq!(rgb_to_hex([255, 128, 1]), "#ff8001");
    }

    #[test]
    fn test_string_parsing() {
        let red: RGBColor = "hsl(0, 100%, 50%)".parse().unwrap();
        assert_eq!(red, RGBColor { r: 255, g: 0, b: 0 });
        let blue: RGBColor = " #0000FF ".parse().unwrap();
        assert_eq!(blue, RGBColor { r: 0, g: 0, b: 255 });
        assert!("hsl(nope)".parse::<RGBColor>().is_err());
        assert!("blue".parse::<RGBColor>().is_err());
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(RGBColor::from_unit(1., 0.5, 0.), RGBColor { r: 255, g: 128, b: 0 });
        // clamped
        assert_eq!(RGBColor::from_unit(1.2, -0.3, 0.), RGBColor { r: 255, g: 0, b: 0 });
        assert_eq!(RGBColor::WHITE.to_unit(), [1., 1., 1.]);
    }
}
