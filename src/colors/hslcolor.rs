//! This file implements HSL: a simple transformation of sRGB that creates a cylindrical space.
//! *Lightness* in HSL runs from black, through fully saturated in the middle, to white at the end,
//! which makes it much easier to describe in words than HSV's value. That is why the picker names its
//! colors from HSL coordinates, even though the picker itself works in HSV.
//!
//! Like `HSVColor`, the saturation and lightness components are percentages from 0 to 100 and the
//! hue is in degrees. The string form accepted here is the integer-only `hsl(H, S%, L%)` notation.

use std::str::FromStr;

use regex::Regex;

use crate::color::RGBColor;
use crate::error::ColorParseError;
use crate::naming::color_name;

lazy_static! {
    // unanchored: the first hsl(...) anywhere in the string is used
    static ref HSL_PATTERN: Regex =
        Regex::new(r"hsl\((\d+),\s*(\d+)%,\s*(\d+)%\)").expect("HSL pattern is a valid regex");
}

/// A color in the HSL color space, a direct transformation of the sRGB space.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component. Ranges from 0 to 360, as the angle in a cylindrical space. Exactly the same
    /// as the hue component of HSV.
    pub h: f64,
    /// The saturation component, from 0 to 100.
    pub s: f64,
    /// The lightness component, from 0 (black) to 100 (white).
    pub l: f64,
}

impl HSLColor {
    /// Converts to RGB. The hue picks one of six half-open 60 degree sectors; a hue outside of
    /// `[0, 360)` falls in none of them and contributes no chroma, leaving a gray.
    pub fn to_rgb(&self) -> RGBColor {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let h = self.h;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        // the second-largest component before the offset is added
        let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let offset = l - chroma / 2.0;

        let (r1, g1, b1) = if 0.0 <= h && h < 60.0 {
            (chroma, x, 0.0)
        } else if 60.0 <= h && h < 120.0 {
            (x, chroma, 0.0)
        } else if 120.0 <= h && h < 180.0 {
            (0.0, chroma, x)
        } else if 180.0 <= h && h < 240.0 {
            (0.0, x, chroma)
        } else if 240.0 <= h && h < 300.0 {
            (x, 0.0, chroma)
        } else if 300.0 <= h && h < 360.0 {
            (chroma, 0.0, x)
        } else {
            (0.0, 0.0, 0.0)
        };
        RGBColor::from_unit(r1 + offset, g1 + offset, b1 + offset)
    }

    /// Gives a short human-readable description of this color, e.g. "Light Muted Azure". See
    /// [`color_name`](../../naming/fn.color_name.html).
    pub fn name(&self) -> String {
        color_name(self.h, self.s, self.l)
    }
}

impl FromStr for HSLColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<HSLColor, ColorParseError> {
        let caps = HSL_PATTERN
            .captures(s)
            .ok_or_else(|| ColorParseError::InvalidColorSyntax(s.to_string()))?;
        let component = |i: usize| {
            caps[i]
                .parse::<f64>()
                .map_err(|_| ColorParseError::InvalidColorSyntax(s.to_string()))
        };
        Ok(HSLColor {
            h: component(1)?,
            s: component(2)?,
            l: component(3)?,
        })
    }
}

/// Parses an `hsl(H, S%, L%)` string into an `[r, g, b]` triple. Anything that doesn't match gives
/// `[0, 0, 0]`.
pub fn hsl_string_to_rgb(hsl: &str) -> [u8; 3] {
    match hsl.parse::<HSLColor>() {
        Ok(color) => color.to_rgb().into(),
        Err(e) => {
            debug!("falling back to black: {}", e);
            [0, 0, 0]
        }
    }
}
