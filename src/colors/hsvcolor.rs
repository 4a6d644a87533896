//! This module implements the HSV color space, a cousin of the HSL color space. The definition of
//! value differs from lightness: it goes from black to full saturation instead of black to
//! white. This makes value an extraordinarily poor analog of luminance (dark purple is the same
//! value as white, despite reflecting one-tenth the light), but it lines up exactly with the two
//! axes of a picker's gradient map: saturation runs left to right and value runs bottom to top,
//! while the hue slider picks the fully saturated color in the top right corner.
//!
//! Components are stored the way the picker uses them: hue in degrees, saturation and value as
//! percentages. Conversions out of RGB round every component to the nearest integer, so a color
//! that went through HSV and back may be off by a few units per channel.

use crate::color::RGBColor;
use crate::colors::hslcolor::HSLColor;
use crate::error::ColorParseError;

/// An HSV color, defining parameters for hue, saturation, and value from the RGB space.
/// # Example
/// Walking the hue around the wheel while holding saturation and value fixed.
///
/// ```
/// # use huepick::prelude::*;
/// # use huepick::colors::HSVColor;
/// let red = HSVColor { h: 0., s: 50., v: 80. };
/// let yellow = HSVColor { h: 60., s: 50., v: 80. };
/// assert_eq!(red.to_hex_code(), "#cc6666");
/// assert_eq!(yellow.to_hex_code(), "#cccc66");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, described as an angle that ranges between 0 and 360 in degrees. While values outside
    /// of this range *may* not break, they shouldn't be treated as valid.
    pub h: f64,
    /// The saturation, from 0 (gray) to 100 (fully saturated).
    pub s: f64,
    /// The value, defined as the largest RGB primary value of a color as a percentage from 0 to 100.
    pub v: f64,
}

impl HSVColor {
    /// Converts from RGB, rounding every component to the nearest integer.
    pub fn from_rgb(rgb: RGBColor) -> HSVColor {
        let [r, g, b] = rgb.to_unit();

        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let chroma = max_c - min_c;

        let hue = if chroma == 0.0 {
            // undefined for grays, 0 by convention
            0.0
        } else if max_c == r {
            60.0 * (((g - b) / chroma) % 6.0)
        } else if max_c == g {
            60.0 * ((b - r) / chroma + 2.0)
        } else {
            60.0 * ((r - g) / chroma + 4.0)
        };
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };

        let saturation = if max_c == 0.0 { 0.0 } else { chroma / max_c };

        HSVColor {
            h: hue.round(),
            s: (saturation * 100.0).round(),
            v: (max_c * 100.0).round(),
        }
    }

    /// Parses a hex code and converts it to HSV. See [`RGBColor::from_hex_code`] for the accepted
    /// syntax.
    ///
    /// [`RGBColor::from_hex_code`]: ../../color/struct.RGBColor.html#method.from_hex_code
    pub fn from_hex_code(hex: &str) -> Result<HSVColor, ColorParseError> {
        RGBColor::from_hex_code(hex).map(HSVColor::from_rgb)
    }

    /// Converts back to RGB using the six-sector table. The sector is `floor(h / 60) mod 6`, so a hue
    /// of exactly 360 lands back on red.
    pub fn to_rgb(&self) -> RGBColor {
        let s = self.s / 100.0;
        let v = self.v / 100.0;

        let sector = (self.h / 60.0).floor();
        let f = self.h / 60.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match (sector as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        RGBColor::from_unit(r, g, b)
    }

    /// Converts to a lowercase `#rrggbb` hex code.
    pub fn to_hex_code(&self) -> String {
        self.to_rgb().to_hex_code()
    }

    /// Converts to HSL without going through RGB. The hue is carried over unchanged; saturation and
    /// lightness are rounded to integer percentages.
    pub fn to_hsl(&self) -> HSLColor {
        let s = self.s / 100.0;
        let v = self.v / 100.0;
        let l = v * (1.0 - s / 2.0);
        let sl = if l == 0.0 || l == 1.0 {
            0.0
        } else {
            (v - l) / l.min(1.0 - l)
        };
        HSLColor {
            h: self.h,
            s: (sl * 100.0).round(),
            l: (l * 100.0).round(),
        }
    }
}

impl From<RGBColor> for HSVColor {
    fn from(rgb: RGBColor) -> HSVColor {
        HSVColor::from_rgb(rgb)
    }
}

/// Converts a hex code to HSV. Unparseable input yields all-zero components instead of an error.
pub fn hex_to_hsv(hex: &str) -> HSVColor {
    match HSVColor::from_hex_code(hex) {
        Ok(hsv) => hsv,
        Err(e) => {
            debug!("falling back to zero HSV for {:?}: {}", hex, e);
            HSVColor::default()
        }
    }
}

/// Converts HSV components (degrees, percent, percent) to a lowercase `#rrggbb` hex code.
pub fn hsv_to_hex(h: f64, s: f64, v: f64) -> String {
    HSVColor { h, s, v }.to_hex_code()
}

/// Converts HSV components (degrees, percent, percent) to HSL.
pub fn hsv_to_hsl(h: f64, s: f64, v: f64) -> HSLColor {
    HSVColor { h, s, v }.to_hsl()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn hsv(h: f64, s: f64, v: f64) -> HSVColor {
        HSVColor { h, s, v }
    }

    #[test]
    fn test_hex_to_hsv() {
        assert_eq!(hex_to_hsv("#ff0000"), hsv(0., 100., 100.));
        assert_eq!(hex_to_hsv("00FF00"), hsv(120., 100., 100.));
        assert_eq!(hex_to_hsv("#0000ff"), hsv(240., 100., 100.));
        // negative hues wrap around
        assert_eq!(hex_to_hsv("#ff00ff"), hsv(300., 100., 100.));
        assert_eq!(hex_to_hsv("#808080"), hsv(0., 0., 50.));
        assert_eq!(hex_to_hsv("#6699cc"), hsv(210., 50., 80.));
        assert_eq!(hex_to_hsv("#000000"), hsv(0., 0., 0.));
    }

    #[test]
    fn test_hex_to_hsv_fallback() {
        assert_eq!(hex_to_hsv("not a color"), hsv(0., 0., 0.));
        assert_eq!(hex_to_hsv("#12345"), hsv(0., 0., 0.));
        assert!(HSVColor::from_hex_code("#12345").is_err());
    }

    #[test]
    fn test_hsv_to_hex() {
        assert_eq!(hsv_to_hex(0., 100., 100.), "#ff0000");
        assert_eq!(hsv_to_hex(120., 100., 100.), "#00ff00");
        assert_eq!(hsv_to_hex(240., 100., 100.), "#0000ff");
        // sector 6 is the same as sector 0
        assert_eq!(hsv_to_hex(360., 100., 100.), "#ff0000");
        assert_eq!(hsv_to_hex(0., 0., 50.), "#808080");
        assert_eq!(hsv_to_hex(210., 50., 80.), "#6699cc");
        assert_eq!(hsv_to_hex(0., 0., 0.), "#000000");
        assert_eq!(hsv_to_hex(0., 0., 100.), "#ffffff");
    }

    #[test]
    fn test_hsv_to_hsl() {
        assert_eq!(hsv_to_hsl(0., 100., 100.), HSLColor { h: 0., s: 100., l: 50. });
        assert_eq!(hsv_to_hsl(0., 0., 100.), HSLColor { h: 0., s: 0., l: 100. });
        assert_eq!(hsv_to_hsl(0., 0., 0.), HSLColor { h: 0., s: 0., l: 0. });
        assert_eq!(hsv_to_hsl(210., 50., 80.), HSLColor { h: 210., s: 50., l: 60. });
        // hue passes through untouched, even unrounded
        assert_eq!(hsv_to_hsl(12.5, 0., 50.).h, 12.5);
    }

    #[test]
    fn test_known_round_trips() {
        for hex in &["#ff0000", "#6699cc", "#ffffff", "#000000", "#ffff00", "#00ffff"] {
            assert_eq!(hex_to_hsv(hex).to_hex_code(), *hex);
        }
    }
}
