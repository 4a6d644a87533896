//! This module gives colors short descriptive names, like "Very Light Muted Azure" or "40% Gray",
//! from their HSL coordinates. This is a heuristic for labeling a picker's preview, not an inverse
//! of any naming standard: hues are quantized to the nearest 15 degrees and looked up in a fixed
//! table of 24 names, and then prefixed with coarse lightness and saturation modifiers.

/// The names of each 15 degree hue bucket, starting at red and going around the wheel.
pub static HUE_NAMES: [&str; 24] = [
    "Red",
    "Red Orange",
    "Orange",
    "Orange Yellow",
    "Yellow",
    "Yellow Lime",
    "Lime",
    "Lime Green",
    "Green",
    "Green Emerald",
    "Emerald",
    "Emerald Cyan",
    "Cyan",
    "Cyan Azure",
    "Azure",
    "Azure Blue",
    "Blue",
    "Blue Violet",
    "Violet",
    "Violet Purple",
    "Purple",
    "Purple Magenta",
    "Magenta",
    "Magenta Red",
];

/// The width of each hue bucket, in degrees.
pub const HUE_STEP: f64 = 15.0;

/// Returns the name of the hue bucket nearest to `h`. Hues outside of `[0, 360)` wrap around; a
/// non-finite hue has no bucket and is just called "Color".
pub fn hue_name(h: f64) -> &'static str {
    if !h.is_finite() {
        return "Color";
    }
    let bucket = (h / HUE_STEP).round() as i64;
    HUE_NAMES[bucket.rem_euclid(HUE_NAMES.len() as i64) as usize]
}

/// Describes a lightness percentage. The middle band (45-55) and the two bands around it get no
/// modifier at all.
pub fn lightness_name(l: f64) -> &'static str {
    if l >= 95.0 {
        "White"
    } else if l >= 85.0 {
        "Very Light"
    } else if l >= 70.0 {
        "Light"
    } else if l >= 45.0 && l <= 55.0 {
        ""
    } else if l <= 15.0 {
        "Very Dark"
    } else if l <= 30.0 {
        "Dark"
    } else {
        ""
    }
}

/// Describes a saturation percentage.
pub fn saturation_name(s: f64) -> &'static str {
    if s <= 5.0 {
        // color_name handles grays before it gets here
        "Gray"
    } else if s <= 30.0 {
        "Muted"
    } else {
        ""
    }
}

/// Names a color given its HSL components (degrees, percent, percent).
///
/// Nearly gray colors (saturation at most 5%) ignore the hue and are named by lightness alone.
/// Everything else is named `[lightness] [saturation] hue`, skipping empty modifiers.
///
/// # Example
/// ```
/// # use huepick::naming::color_name;
/// assert_eq!(color_name(0., 0., 100.), "White");
/// assert_eq!(color_name(0., 3., 42.4), "42% Gray");
/// assert_eq!(color_name(120., 100., 50.), "Green");
/// assert_eq!(color_name(212., 20., 88.), "Very Light Muted Azure");
/// assert_eq!(color_name(359., 80., 25.), "Dark Red");
/// ```
pub fn color_name(h: f64, s: f64, l: f64) -> String {
    if s <= 5.0 {
        return if l >= 95.0 {
            "White".to_string()
        } else if l <= 5.0 {
            "Black".to_string()
        } else {
            format!("{}% Gray", l.round())
        };
    }

    let parts = [lightness_name(l), saturation_name(s), hue_name(h)];
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<&str>>()
        .join(" ")
}
