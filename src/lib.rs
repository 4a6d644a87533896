//! Huepick is the color math behind an HSV color picker: conversions between hex codes, RGB, HSV,
//! and HSL; relative luminance and WCAG contrast scoring; short descriptive names for colors; and a
//! framework-independent state machine for the picker itself. Nothing here draws anything. A UI
//! layer feeds pointer positions into a [`Picker`] and reads colors, names, and contrast reports
//! back out.
//!
//! None of the conversion functions fail on bad numbers: out-of-range components are clamped when a
//! color is finally turned into RGB, and the string-accepting shortcuts like [`hex_to_hsv`] fall back
//! to all-zero output instead of returning an error. Strict versions that do return
//! [`ColorParseError`] exist alongside them.
//!
//! [`Picker`]: picker/struct.Picker.html
//! [`hex_to_hsv`]: colors/hsvcolor/fn.hex_to_hsv.html
//! [`ColorParseError`]: error/enum.ColorParseError.html

#![doc(html_root_url = "https://docs.rs/huepick/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod color;
pub mod colors;
pub mod config;
pub mod contrast;
pub mod error;
pub mod naming;
pub mod palette;
pub mod picker;
pub mod prelude;

pub use color::rgb_to_hex;
pub use colors::{hex_to_hsv, hsl_string_to_rgb, hsv_to_hex, hsv_to_hsl};
pub use contrast::{contrast_ratio, readable_text_color, relative_luminance};
pub use naming::color_name;
