//! This module contains the cylindrical transformations of [`RGBColor`] used by the picker: HSV,
//! which drives the gradient map and hue slider, and HSL, which is used for display and naming. For
//! convenience, each main type is imported into this module's namespace directly.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html
pub mod hslcolor;
pub mod hsvcolor;

// for convenience, use this namespace for the color objects
pub use self::hslcolor::{hsl_string_to_rgb, HSLColor};
pub use self::hsvcolor::{hex_to_hsv, hsv_to_hex, hsv_to_hsl, HSVColor};
