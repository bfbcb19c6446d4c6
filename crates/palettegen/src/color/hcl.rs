//! HCL: CIE L*a*b* in cylindrical coordinates.
//!
//! - **H** (Hue): angle in degrees, `0.0..360.0`
//! - **C** (Chroma): distance from the neutral axis, `sqrt(a^2 + b^2)`
//! - **L** (Lightness): same as Lab L
//!
//! Constraints like "muted, darkish colors" are easiest to state here, so the
//! preset predicates test chroma and lightness on this type.

use super::lab::Lab;
use super::srgb::Srgb;

/// Chroma below which hue is treated as undefined and reported as 0.
const ACHROMATIC_THRESHOLD: f64 = 1e-4;

/// A color in HCL (polar Lab) space.
///
/// For achromatic colors hue is undefined; the conversion sets it to 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hcl {
    /// Hue in degrees, 0.0..360.0
    pub h: f64,
    /// Chroma, 0.0 = grey; in-gamut colors stay below ~1.35
    pub c: f64,
    /// Lightness, 0.0..=1.0
    pub l: f64,
}

impl Hcl {
    #[inline]
    pub fn new(h: f64, c: f64, l: f64) -> Self {
        Self { h, c, l }
    }
}

impl From<Lab> for Hcl {
    fn from(lab: Lab) -> Self {
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        let h = if c > ACHROMATIC_THRESHOLD {
            lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0)
        } else {
            0.0
        };
        Self { h, c, l: lab.l }
    }
}

impl From<Hcl> for Lab {
    fn from(hcl: Hcl) -> Self {
        let h = hcl.h.to_radians();
        Lab::new(hcl.l, hcl.c * h.cos(), hcl.c * h.sin())
    }
}

impl From<Srgb> for Hcl {
    fn from(srgb: Srgb) -> Self {
        Hcl::from(Lab::from(srgb))
    }
}

impl From<Hcl> for Srgb {
    /// Not clamped; check [`Srgb::is_in_gamut`] on the result.
    fn from(hcl: Hcl) -> Self {
        Srgb::from(Lab::from(hcl))
    }
}

/// Interpolate a hue angle the short way round the circle.
pub(super) fn lerp_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let delta = (h2 - h1 + 540.0).rem_euclid(360.0) - 180.0;
    (h1 + t * delta).rem_euclid(360.0)
}

impl Srgb {
    /// Interpolate two colors in HCL, taking the shorter hue arc.
    pub fn blend_hcl(self, other: Srgb, t: f64) -> Srgb {
        let a = Hcl::from(self);
        let b = Hcl::from(other);
        Srgb::from(Hcl {
            h: lerp_hue(a.h, b.h, t),
            c: a.c + t * (b.c - a.c),
            l: a.l + t * (b.l - a.l),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUND_TRIP_TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_lab_hcl_round_trip() {
        let test_colors = [
            Lab::new(0.5, 0.1, 0.0),
            Lab::new(0.5, 0.0, 0.1),
            Lab::new(0.5, -0.1, 0.0),
            Lab::new(0.5, 0.0, -0.1),
            Lab::new(0.3, -0.4, -0.2),
            Lab::new(0.8, 0.05, 0.02),
        ];

        for original in test_colors {
            let back = Lab::from(Hcl::from(original));
            assert!((back.l - original.l).abs() < ROUND_TRIP_TOLERANCE);
            assert!(
                (back.a - original.a).abs() < ROUND_TRIP_TOLERANCE,
                "{original:?} -> {back:?}"
            );
            assert!(
                (back.b - original.b).abs() < ROUND_TRIP_TOLERANCE,
                "{original:?} -> {back:?}"
            );
        }
    }

    #[test]
    fn test_hue_range_and_axes() {
        assert!((Hcl::from(Lab::new(0.5, 0.2, 0.0)).h - 0.0).abs() < 1e-9);
        assert!((Hcl::from(Lab::new(0.5, 0.0, 0.2)).h - 90.0).abs() < 1e-9);
        assert!((Hcl::from(Lab::new(0.5, -0.2, 0.0)).h - 180.0).abs() < 1e-9);
        assert!((Hcl::from(Lab::new(0.5, 0.0, -0.2)).h - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        let grey = Hcl::from(Lab::new(0.4, 0.0, 0.0));
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.c, 0.0);
        assert_eq!(grey.l, 0.4);
    }

    #[test]
    fn test_lerp_hue_short_way() {
        assert!((lerp_hue(350.0, 10.0, 0.5) - 0.0).abs() < 1e-9);
        assert!((lerp_hue(10.0, 350.0, 0.5) - 0.0).abs() < 1e-9);
        assert!((lerp_hue(90.0, 180.0, 0.5) - 135.0).abs() < 1e-9);
        assert!((lerp_hue(90.0, 180.0, 1.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_blend_hcl_endpoints() {
        let a = Srgb::from_u8(200, 40, 40);
        let b = Srgb::from_u8(40, 40, 200);
        assert_eq!(a.blend_hcl(b, 0.0).to_bytes(), a.to_bytes());
        assert_eq!(a.blend_hcl(b, 1.0).to_bytes(), b.to_bytes());
    }
}
