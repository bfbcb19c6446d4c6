//! Ordering and inspection of finished palettes.

use crate::color::{Lab, Srgb};

/// Sort colors from lightest to darkest by CIE L*.
///
/// The sort is stable: colors with equal lightness keep their relative
/// order.
pub fn sort_by_lightness(colors: &mut [Srgb]) {
    colors.sort_by(|a, b| Lab::from(*b).l.total_cmp(&Lab::from(*a).l));
}

/// Sort colors by their sRGB distance from black, farthest first.
///
/// Mostly tracks brightness but counts saturated primaries as far out as
/// greys of the same channel sum would be. Stable.
pub fn sort_by_distance(colors: &mut [Srgb]) {
    let black = Srgb::new(0.0, 0.0, 0.0);
    colors.sort_by(|a, b| b.distance_rgb(black).total_cmp(&a.distance_rgb(black)));
}

/// Whether the palette holds at least two entries that are not all the
/// same color.
pub fn has_variation(colors: &[Srgb]) -> bool {
    match colors.split_first() {
        Some((first, rest)) if !rest.is_empty() => rest.iter().any(|c| c != first),
        _ => false,
    }
}
