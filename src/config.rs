//! Configuration for a [`Picker`](../picker/struct.Picker.html). Every field has a default, so a
//! config can be deserialized from any partial document, including an empty one.

use crate::color::RGBColor;

/// The default number of recently committed colors a picker remembers.
pub const DEFAULT_MAX_RECENT_COLORS: usize = 10;

/// Options a picker is created with.
///
/// # Example
/// ```
/// # use huepick::prelude::*;
/// let config: PickerConfig = serde_json::from_str(
///     r##"{"value": "#00ff00", "presetColors": ["#112233"], "maxRecentColors": 4}"##,
/// ).unwrap();
/// assert_eq!(config.initial_color().to_hex_code(), "#00ff00");
/// assert_eq!(config.max_recent_colors, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    /// The color the picker starts on.
    pub value: RGBColor,
    /// Overrides `value` as the starting color when present.
    pub default_color: Option<RGBColor>,
    /// Colors always offered as swatches, after any recent ones.
    pub preset_colors: Vec<RGBColor>,
    /// How many recent colors are remembered, and how many swatches are offered in total.
    pub max_recent_colors: usize,
}

impl PickerConfig {
    /// The color a new picker opens with.
    pub fn initial_color(&self) -> RGBColor {
        self.default_color.unwrap_or(self.value)
    }
}

impl Default for PickerConfig {
    fn default() -> PickerConfig {
        PickerConfig {
            value: RGBColor { r: 255, g: 0, b: 0 },
            default_color: None,
            preset_colors: Vec::new(),
            max_recent_colors: DEFAULT_MAX_RECENT_COLORS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: PickerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PickerConfig::default());
        assert_eq!(config.initial_color().to_hex_code(), "#ff0000");
        assert_eq!(config.max_recent_colors, 10);
    }

    #[test]
    fn test_default_color_override() {
        let config: PickerConfig =
            serde_json::from_str(r##"{"value": "#ffffff", "defaultColor": "#000000"}"##).unwrap();
        assert_eq!(config.initial_color(), RGBColor::BLACK);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let result = serde_json::from_str::<PickerConfig>(r#"{"value": "red"}"#);
        assert!(result.is_err());
    }
}
