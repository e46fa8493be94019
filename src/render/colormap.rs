//! The diverging "Spectral" color scheme used for both regions and markers.

use plotters::style::RGBColor;

/// Eleven evenly spaced stops, red at 0.0 through yellow to blue at 1.0.
const SPECTRAL_STOPS: [(u8, u8, u8); 11] = [
    (158, 1, 66),
    (213, 62, 79),
    (244, 109, 67),
    (253, 174, 97),
    (254, 224, 139),
    (255, 255, 191),
    (230, 245, 152),
    (171, 221, 164),
    (102, 194, 165),
    (50, 136, 189),
    (94, 79, 162),
];

/// Fill color for cells classified negative (score <= 0).
pub const NEGATIVE_REGION: RGBColor = RGBColor(158, 1, 66);
/// Fill color for cells classified positive (score > 0).
pub const POSITIVE_REGION: RGBColor = RGBColor(94, 79, 162);

/// Samples the colormap at `t`, clamped to `[0, 1]`. NaN maps to the low end.
pub fn spectral(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (SPECTRAL_STOPS.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(SPECTRAL_STOPS.len() - 1);
    let frac = scaled - lower as f64;

    let (r0, g0, b0) = SPECTRAL_STOPS[lower];
    let (r1, g1, b1) = SPECTRAL_STOPS[upper];
    RGBColor(lerp(r0, r1, frac), lerp(g0, g1, frac), lerp(b0, b1, frac))
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

/// Rescales `values` onto `[0, 1]` by their min and max.
/// A constant (or entirely non-finite) input maps to 0.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;
    values
        .iter()
        .map(|&v| {
            if !v.is_finite() || !span.is_finite() || span <= 0.0 {
                0.0
            } else {
                (v - min) / span
            }
        })
        .collect()
}

/// `color` drawn at `alpha` over a white background, as one opaque color.
pub fn over_white(color: RGBColor, alpha: f64) -> RGBColor {
    let alpha = alpha.clamp(0.0, 1.0);
    let blend = |c: u8| (c as f64 * alpha + 255.0 * (1.0 - alpha)).round() as u8;
    RGBColor(blend(color.0), blend(color.1), blend(color.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spectral_endpoints_match_region_colors() {
        assert_eq!(spectral(0.0), NEGATIVE_REGION);
        assert_eq!(spectral(1.0), POSITIVE_REGION);
        assert_eq!(spectral(0.5), RGBColor(255, 255, 191));
        // Out of range and NaN are clamped.
        assert_eq!(spectral(-3.0), NEGATIVE_REGION);
        assert_eq!(spectral(7.0), POSITIVE_REGION);
        assert_eq!(spectral(f64::NAN), NEGATIVE_REGION);
    }

    #[test]
    fn test_spectral_interpolates_between_stops() {
        // Halfway between the first two stops.
        assert_eq!(spectral(0.05), RGBColor(186, 32, 73));
    }

    #[test]
    fn test_normalize_spans_unit_interval() {
        assert_eq!(normalize(&[-1.0, 1.0, 0.0]), vec![0.0, 1.0, 0.5]);
        assert_eq!(normalize(&[2.0, 2.0]), vec![0.0, 0.0]);
        assert_eq!(normalize(&[f64::NAN, 3.0, 5.0]), vec![0.0, 0.0, 1.0]);
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_over_white_blends() {
        assert_eq!(over_white(RGBColor(0, 0, 0), 1.0), RGBColor(0, 0, 0));
        assert_eq!(over_white(RGBColor(0, 0, 0), 0.0), RGBColor(255, 255, 255));
        assert_eq!(over_white(NEGATIVE_REGION, 0.8), RGBColor(177, 52, 104));
    }
}
