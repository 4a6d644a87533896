//! This module brings the most common huepick types under a single namespace, to prevent excessive
//! imports: the ubiquitous [`RGBColor`], its parse error, the picker and its config, and the WCAG
//! result type. The alternative color spaces in the [`colors`] module are not included.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html
//! [`colors`]: ../colors/index.html

pub use crate::color::RGBColor;
pub use crate::config::PickerConfig;
pub use crate::contrast::WCAGCompliance;
pub use crate::error::ColorParseError;
pub use crate::picker::{DragState, Picker, PickerEvent};
