//! This module implements the accessibility side of the picker: relative luminance, the WCAG 2.1
//! contrast ratio between two colors, the four pass/fail tiers that ratio is judged against, and a
//! black-or-white choice of text color for drawing over an arbitrary background.
//!
//! Relative luminance is the perceptually weighted brightness of a color after undoing the sRGB
//! gamma curve. The contrast ratio `(L1 + 0.05) / (L2 + 0.05)` puts the lighter color on top, so it
//! is symmetric and never below 1; black on white scores exactly 21.

use crate::color::RGBColor;
use crate::colors::HSLColor;
use crate::error::ColorParseError;

/// Linearizes one sRGB channel in the range 0-1. The 0.03928 threshold is the one the WCAG text
/// uses.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Computes the relative luminance of a color, from 0 for black to 1 for white.
pub fn relative_luminance(color: RGBColor) -> f64 {
    let [r, g, b] = color.to_unit();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Computes the contrast ratio between two colors. The order of the arguments doesn't matter.
///
/// # Example
/// ```
/// # use huepick::prelude::*;
/// # use huepick::contrast::contrast_ratio;
/// let ratio = contrast_ratio(RGBColor::BLACK, RGBColor::WHITE);
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
pub fn contrast_ratio(color1: RGBColor, color2: RGBColor) -> f64 {
    let l1 = relative_luminance(color1);
    let l2 = relative_luminance(color2);
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Returns black for light backgrounds (luminance above 0.5) and white for everything else.
pub fn readable_text_color(background: RGBColor) -> RGBColor {
    if relative_luminance(background) > 0.5 {
        RGBColor::BLACK
    } else {
        RGBColor::WHITE
    }
}

/// Pass/fail results for one WCAG conformance level.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplianceLevel {
    /// Whether the ratio is enough for large text (18pt, or 14pt bold).
    pub large: bool,
    /// Whether the ratio is enough for normal body text.
    pub normal: bool,
}

/// Pass/fail results for both WCAG conformance levels. The thresholds are inclusive and
/// independent of each other.
///
/// | Level | Large text | Normal text |
/// |-------|------------|-------------|
/// | AA    | 3          | 4.5         |
/// | AAA   | 4.5        | 7           |
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WCAGCompliance {
    /// The AA (minimum) level.
    #[serde(rename = "AA")]
    pub aa: ComplianceLevel,
    /// The AAA (enhanced) level.
    #[serde(rename = "AAA")]
    pub aaa: ComplianceLevel,
}

impl WCAGCompliance {
    /// Judges a contrast ratio against every threshold.
    pub fn from_ratio(ratio: f64) -> WCAGCompliance {
        WCAGCompliance {
            aa: ComplianceLevel {
                large: ratio >= 3.0,
                normal: ratio >= 4.5,
            },
            aaa: ComplianceLevel {
                large: ratio >= 4.5,
                normal: ratio >= 7.0,
            },
        }
    }

    /// Judges the contrast between two colors.
    pub fn between(color1: RGBColor, color2: RGBColor) -> WCAGCompliance {
        WCAGCompliance::from_ratio(contrast_ratio(color1, color2))
    }
}

/// Everything an accessibility panel shows about one color: its hex code and how it fares as a
/// background for black text and for white text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityReport {
    /// The color being judged.
    pub color: RGBColor,
    /// Its lowercase hex code.
    pub hex: String,
    /// The contrast ratio against pure black.
    pub black_contrast: f64,
    /// The contrast ratio against pure white.
    pub white_contrast: f64,
    /// Compliance of black text on this color.
    pub black_compliance: WCAGCompliance,
    /// Compliance of white text on this color.
    pub white_compliance: WCAGCompliance,
}

impl AccessibilityReport {
    /// Builds the report for one color.
    pub fn new(color: RGBColor) -> AccessibilityReport {
        let black_contrast = contrast_ratio(color, RGBColor::BLACK);
        let white_contrast = contrast_ratio(color, RGBColor::WHITE);
        AccessibilityReport {
            color,
            hex: color.to_hex_code(),
            black_contrast,
            white_contrast,
            black_compliance: WCAGCompliance::from_ratio(black_contrast),
            white_compliance: WCAGCompliance::from_ratio(white_contrast),
        }
    }

    /// Builds the report for an `hsl(H, S%, L%)` string.
    pub fn from_hsl_str(hsl: &str) -> Result<AccessibilityReport, ColorParseError> {
        let color: HSLColor = hsl.parse()?;
        Ok(AccessibilityReport::new(color.to_rgb()))
    }

    /// Picks whichever of black or white contrasts better with the color. Ties go to black.
    pub fn best_text_color(&self) -> RGBColor {
        if self.black_contrast >= self.white_contrast {
            RGBColor::BLACK
        } else {
            RGBColor::WHITE
        }
    }
}
