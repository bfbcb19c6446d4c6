//! Classic color-wheel harmonies.
//!
//! All rotations happen on the HSV (or, for [`analogous`], HSL) hue wheel
//! and wrap into `0.0..360.0`. The input color is always part of the
//! result.

use crate::color::{Hsl, Hsv, Srgb};
use crate::palette::sort::sort_by_lightness;

/// Per-channel byte inversion (`255 - x`).
pub fn complement(color: Srgb) -> Srgb {
    let [r, g, b] = color.to_bytes();
    Srgb::from_u8(!r, !g, !b)
}

/// `[color, complement(color)]`.
pub fn complementary(color: Srgb) -> Vec<Srgb> {
    vec![color, complement(color)]
}

/// `count` colors whose HSL hues are neighbours of `color`'s on a wheel
/// cut into `slices` equal parts.
///
/// Neighbours fan out on alternating sides: one slice clockwise, one slice
/// counter-clockwise, two slices clockwise and so on. The result is sorted
/// lightest first. `count` and `slices` are raised to at least 2.
///
/// ```
/// use palettegen::{harmony, Srgb};
///
/// let colors = harmony::analogous(Srgb::from_u8(200, 60, 40), 3, 12);
/// assert_eq!(colors.len(), 3);
/// ```
pub fn analogous(color: Srgb, count: usize, slices: usize) -> Vec<Srgb> {
    let count = count.max(2);
    let part = 360.0 / slices.max(2) as f64;
    let base = Hsl::from(color);

    let mut colors = Vec::with_capacity(count);
    colors.push(color);
    for i in 1..count {
        let distance = i.div_ceil(2) as f64 * part;
        let offset = if i % 2 == 1 { distance } else { -distance };
        let h = (base.h + offset).rem_euclid(360.0);
        colors.push(Srgb::from(Hsl::new(h, base.s, base.l)));
    }

    sort_by_lightness(&mut colors);
    colors
}

/// `count` shades of `color`'s hue: the HSV value advances by `1 / count`
/// per entry, wrapping around at 1. Sorted lightest first; `count` is
/// raised to at least 2.
pub fn monochromatic(color: Srgb, count: usize) -> Vec<Srgb> {
    let count = count.max(2);
    let base = Hsv::from(color);
    let step = 1.0 / count as f64;

    let mut colors = Vec::with_capacity(count);
    colors.push(color);
    for i in 1..count {
        let v = (base.v + step * i as f64).rem_euclid(1.0);
        colors.push(Srgb::from(Hsv::new(base.h, base.s, v)));
    }

    sort_by_lightness(&mut colors);
    colors
}

fn rotate(color: Srgb, degrees: f64) -> Srgb {
    Srgb::from(Hsv::from(color).rotate_hue(degrees))
}

/// `[+120°, color, -120°]`.
pub fn triad(color: Srgb) -> Vec<Srgb> {
    vec![rotate(color, 120.0), color, rotate(color, -120.0)]
}

/// `[+72°, color, -216°]`.
pub fn split_complementary(color: Srgb) -> Vec<Srgb> {
    vec![rotate(color, 72.0), color, rotate(color, -216.0)]
}

/// `[color, +90°, +180°, +270°]`.
pub fn square(color: Srgb) -> Vec<Srgb> {
    vec![
        color,
        rotate(color, 90.0),
        rotate(color, 180.0),
        rotate(color, 270.0),
    ]
}

/// `[color, +120°, +180°, +300°]`.
pub fn tetradic(color: Srgb) -> Vec<Srgb> {
    vec![
        color,
        rotate(color, 120.0),
        rotate(color, 180.0),
        rotate(color, 300.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue(c: Srgb) -> f64 {
        Hsv::from(c).h
    }

    fn assert_hue(c: Srgb, expected: f64) {
        let diff = (hue(c) - expected).rem_euclid(360.0);
        assert!(diff < 0.5 || diff > 359.5, "hue {} expected {expected}", hue(c));
    }

    #[test]
    fn test_complement_inverts_bytes() {
        let c = Srgb::from_u8(10, 200, 255);
        assert_eq!(complement(c).to_bytes(), [245, 55, 0]);
        assert_eq!(complementary(c), vec![c, complement(c)]);
    }

    #[test]
    fn test_triad_and_split() {
        let red = Srgb::from_u8(255, 0, 0);
        let t = triad(red);
        assert_eq!(t.len(), 3);
        assert_eq!(t[1], red);
        assert_hue(t[0], 120.0);
        assert_hue(t[2], 240.0);

        let s = split_complementary(red);
        assert_hue(s[0], 72.0);
        assert_eq!(s[1], red);
        assert_hue(s[2], 144.0);
    }

    #[test]
    fn test_square_and_tetradic() {
        let c = Srgb::from(Hsv::new(30.0, 0.8, 0.9));
        let sq = square(c);
        assert_eq!(sq.len(), 4);
        assert_hue(sq[1], 120.0);
        assert_hue(sq[2], 210.0);
        assert_hue(sq[3], 300.0);

        let te = tetradic(c);
        assert_hue(te[1], 150.0);
        assert_hue(te[2], 210.0);
        assert_hue(te[3], 330.0);
    }

    #[test]
    fn test_analogous_neighbours() {
        let c = Srgb::from(Hsl::new(100.0, 0.7, 0.5));
        let colors = analogous(c, 3, 12);
        assert_eq!(colors.len(), 3);
        assert!(colors.contains(&c));

        let mut hues: Vec<f64> = colors.iter().map(|&x| Hsl::from(x).h.round()).collect();
        hues.sort_by(f64::total_cmp);
        assert_eq!(hues, vec![70.0, 100.0, 130.0]);
    }

    #[test]
    fn test_analogous_minimums() {
        let c = Srgb::from_u8(40, 90, 200);
        assert_eq!(analogous(c, 0, 0).len(), 2);
    }

    #[test]
    fn test_monochromatic_keeps_hue_and_sorts() {
        let c = Srgb::from(Hsv::new(200.0, 0.6, 0.3));
        let colors = monochromatic(c, 4);
        assert_eq!(colors.len(), 4);
        assert!(colors.contains(&c));
        for pair in colors.windows(2) {
            let l0 = crate::color::Lab::from(pair[0]).l;
            let l1 = crate::color::Lab::from(pair[1]).l;
            assert!(l0 >= l1);
        }
        for &x in &colors {
            assert_hue(x, 200.0);
        }
    }
}
