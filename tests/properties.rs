use float_cmp::approx_eq;
use proptest::prelude::*;

use huepick::colors::HSVColor;
use huepick::prelude::*;
use huepick::{color_name, contrast_ratio, hex_to_hsv, hsv_to_hex, relative_luminance};

fn any_rgb() -> impl Strategy<Value = RGBColor> {
    any::<[u8; 3]>().prop_map(RGBColor::from)
}

proptest! {
    // HSV components are rounded to whole degrees and percents, so the trip back can drift a little:
    // the largest channel by at most one unit, the others by at most five.
    #[test]
    fn hex_hsv_round_trip_is_close(rgb in any_rgb()) {
        let hsv = hex_to_hsv(&rgb.to_hex_code());
        let back = RGBColor::from_hex_code(&hsv_to_hex(hsv.h, hsv.s, hsv.v)).unwrap();
        let before: [u8; 3] = rgb.into();
        let after: [u8; 3] = back.into();
        let max_channel = (0..3).max_by_key(|&i| before[i]).unwrap();
        for i in 0..3 {
            let drift = (i16::from(before[i]) - i16::from(after[i])).abs();
            prop_assert!(drift <= 5, "{} -> {:?} -> {}", rgb, hsv, back);
            if i == max_channel {
                prop_assert!(drift <= 1, "{} -> {:?} -> {}", rgb, hsv, back);
            }
        }
    }

    #[test]
    fn hsv_components_stay_in_range(rgb in any_rgb()) {
        let hsv = HSVColor::from_rgb(rgb);
        prop_assert!(hsv.h >= 0.0 && hsv.h <= 360.0);
        prop_assert!(hsv.s >= 0.0 && hsv.s <= 100.0);
        prop_assert!(hsv.v >= 0.0 && hsv.v <= 100.0);
        let hsl = hsv.to_hsl();
        prop_assert!(hsl.s >= 0.0 && hsl.s <= 100.0);
        prop_assert!(hsl.l >= 0.0 && hsl.l <= 100.0);
    }

    #[test]
    fn grays_round_trip_exactly(level in any::<u8>()) {
        let gray = RGBColor { r: level, g: level, b: level };
        let hsv = HSVColor::from_rgb(gray);
        prop_assert_eq!(hsv.h, 0.0);
        prop_assert_eq!(hsv.s, 0.0);
        let back = hsv.to_rgb();
        prop_assert_eq!(back.r, back.g);
        prop_assert_eq!(back.g, back.b);
        prop_assert!((i16::from(back.r) - i16::from(level)).abs() <= 1);
    }

    #[test]
    fn contrast_with_self_is_one(rgb in any_rgb()) {
        prop_assert_eq!(contrast_ratio(rgb, rgb), 1.0);
    }

    #[test]
    fn contrast_is_symmetric_and_bounded(a in any_rgb(), b in any_rgb()) {
        let ratio = contrast_ratio(a, b);
        prop_assert_eq!(ratio, contrast_ratio(b, a));
        prop_assert!(ratio >= 1.0);
        prop_assert!(ratio <= 21.0 + 1e-9);
    }

    #[test]
    fn luminance_is_normalized(rgb in any_rgb()) {
        let l = relative_luminance(rgb);
        prop_assert!(l >= 0.0 && l <= 1.0 + 1e-12);
    }

    #[test]
    fn compliance_tiers_are_nested(ratio in 1.0f64..21.0) {
        let c = WCAGCompliance::from_ratio(ratio);
        // anything good enough for a stricter tier passes the looser ones
        prop_assert!(!c.aaa.normal || c.aa.normal);
        prop_assert!(!c.aa.normal || c.aa.large);
        prop_assert_eq!(c.aa.normal, c.aaa.large);
    }

    #[test]
    fn names_are_never_empty(h in 0.0f64..360.0, s in 0.0f64..=100.0, l in 0.0f64..=100.0) {
        let name = color_name(h, s, l);
        prop_assert!(!name.is_empty());
        prop_assert!(!name.starts_with(' ') && !name.ends_with(' '));
        prop_assert!(!name.contains("  "));
    }
}

#[test]
fn black_and_white() {
    let ratio = contrast_ratio(RGBColor::BLACK, RGBColor::WHITE);
    assert!(approx_eq!(f64, ratio, 21.0, epsilon = 1e-9));
    let all = WCAGCompliance::from_ratio(ratio);
    assert!(all.aa.large && all.aa.normal && all.aaa.large && all.aaa.normal);
    let none = WCAGCompliance::from_ratio(1.0);
    assert!(!none.aa.large && !none.aa.normal && !none.aaa.large && !none.aaa.normal);
}

#[test]
fn top_level_shortcuts() {
    assert_eq!(huepick::rgb_to_hex([0, 128, 255]), "#0080ff");
    assert_eq!(huepick::hsl_string_to_rgb("not a color"), [0, 0, 0]);
    assert_eq!(huepick::hsv_to_hsl(120., 100., 100.).name(), "Green");
    assert_eq!(
        huepick::readable_text_color(RGBColor::BLACK).to_hex_code(),
        "#ffffff"
    );
    assert_eq!(
        huepick::readable_text_color(RGBColor::WHITE).to_hex_code(),
        "#000000"
    );
    assert_eq!(color_name(0., 0., 100.), "White");
    assert_eq!(color_name(0., 0., 0.), "Black");
    assert_eq!(color_name(0., 0., 50.), "50% Gray");
    assert_eq!(color_name(0., 100., 50.), "Red");
    assert_eq!(color_name(120., 100., 50.), "Green");
}
