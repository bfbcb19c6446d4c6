//! CIE L*a*b* perceptual color space
//!
//! The palette generator clusters in this space because Euclidean distance
//! between two Lab colors approximates how different they look.
//!
//! Components are scaled down by 100 from the textbook ranges: `l` runs from
//! 0.0 (black) to 1.0 (white), and the displayable part of `a`/`b` lies
//! roughly within -1.0..=1.0. D65 is the reference white.
//!
//! # References
//!
//! <https://en.wikipedia.org/wiki/CIELAB_color_space#CIELAB%E2%80%93CIEXYZ_conversions>

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;
use super::xyz::{Xyz, D65};

/// A color in CIE L*a*b* space (D65, unit-scaled).
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are not clamped. Lab triples outside the sRGB gamut are valid
/// values of this type; converting them yields an out-of-gamut [`Srgb`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 1.0 (white)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

/// (6/29)^3, the linear/cube-root switch point of the Lab transfer function.
const EPSILON: f64 = 216.0 / 24389.0;

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        t / 3.0 * 29.0 / 6.0 * 29.0 / 6.0 + 4.0 / 29.0
    }
}

#[inline]
fn lab_finv(t: f64) -> f64 {
    if t > 6.0 / 29.0 {
        t * t * t
    } else {
        3.0 * 6.0 / 29.0 * 6.0 / 29.0 * (t - 4.0 / 29.0)
    }
}

impl Lab {
    /// Create a new Lab color.
    ///
    /// ```
    /// use palettegen::Lab;
    ///
    /// // Mid-gray, no chroma
    /// let gray = Lab::new(0.5, 0.0, 0.0);
    /// ```
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance. Same ordering as [`distance`](Self::distance)
    /// without the square root, so nearest-neighbour searches use this.
    #[inline]
    pub fn distance_squared(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    /// Euclidean distance, the perceptual difference between two colors.
    ///
    /// 0.0 means identical; around 1.0 or more means very different.
    ///
    /// ```
    /// use palettegen::Lab;
    ///
    /// let black = Lab::new(0.0, 0.0, 0.0);
    /// let white = Lab::new(1.0, 0.0, 0.0);
    /// assert_eq!(black.distance(white), 1.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Lab) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Convert to XYZ using an explicit reference white.
    pub fn to_xyz_white_ref(self, wref: [f64; 3]) -> Xyz {
        let l2 = (self.l + 0.16) / 1.16;
        Xyz {
            x: wref[0] * lab_finv(l2 + self.a / 5.0),
            y: wref[1] * lab_finv(l2),
            z: wref[2] * lab_finv(l2 - self.b / 2.0),
        }
    }

    /// Convert from XYZ using an explicit reference white.
    pub fn from_xyz_white_ref(xyz: Xyz, wref: [f64; 3]) -> Self {
        let fy = lab_f(xyz.y / wref[1]);
        Lab {
            l: 1.16 * fy - 0.16,
            a: 5.0 * (lab_f(xyz.x / wref[0]) - fy),
            b: 2.0 * (fy - lab_f(xyz.z / wref[2])),
        }
    }

    /// Convert to sRGB, returning `None` when the result is not displayable.
    ///
    /// This is the admissibility half of the gamut test used by the sampler
    /// and by the centroid check.
    #[inline]
    pub fn to_srgb_checked(self) -> Option<Srgb> {
        let srgb = Srgb::from(self);
        srgb.is_in_gamut().then_some(srgb)
    }

    /// Whether this Lab triple maps to a displayable sRGB color.
    #[inline]
    pub fn is_in_gamut(self) -> bool {
        self.to_srgb_checked().is_some()
    }

    /// Interpolate in Lab; smoother than interpolating sRGB channels.
    #[inline]
    pub fn blend(self, other: Lab, t: f64) -> Lab {
        Lab {
            l: self.l + t * (other.l - self.l),
            a: self.a + t * (other.a - self.a),
            b: self.b + t * (other.b - self.b),
        }
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        Lab::from_xyz_white_ref(xyz, D65)
    }
}

impl From<Lab> for Xyz {
    fn from(lab: Lab) -> Self {
        lab.to_xyz_white_ref(D65)
    }
}

impl From<Srgb> for Lab {
    /// sRGB -> linear RGB -> XYZ -> Lab.
    fn from(srgb: Srgb) -> Self {
        Lab::from(Xyz::from(LinearRgb::from(srgb)))
    }
}

impl From<Lab> for Srgb {
    /// Lab -> XYZ -> linear RGB -> sRGB. Not clamped.
    fn from(lab: Lab) -> Self {
        Srgb::from(LinearRgb::from(Xyz::from(lab)))
    }
}

impl Srgb {
    /// Perceptual distance between two sRGB colors, measured in Lab.
    #[inline]
    pub fn distance_lab(self, other: Srgb) -> f64 {
        Lab::from(self).distance(Lab::from(other))
    }

    /// Interpolate two colors through Lab.
    #[inline]
    pub fn blend_lab(self, other: Srgb, t: f64) -> Srgb {
        Srgb::from(Lab::from(self).blend(Lab::from(other), t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tolerance against the palette crate, which derives its sRGB matrix
    /// from the primaries rather than using the rounded published values.
    const PALETTE_TOLERANCE: f64 = 1e-4;

    /// The inverse matrix is derived from the forward one, so a round trip
    /// only accumulates floating-point error.
    const ROUND_TRIP_TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_lab_matches_palette_crate() {
        use palette::white_point::D65 as PaletteD65;
        use palette::{IntoColor, Lab as PaletteLab, Srgb as PaletteSrgb};

        let test_colors = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (0.5, 0.5, 0.5),
            (1.0, 1.0, 1.0),
            (0.0, 0.0, 0.0),
            (0.9, 0.4, 0.1),
        ];

        for (r, g, b) in test_colors {
            let ours = Lab::from(Srgb::new(r, g, b));
            let theirs: PaletteLab<PaletteD65, f64> =
                PaletteSrgb::new(r, g, b).into_linear().into_color();

            assert!(
                approx_eq(ours.l, theirs.l / 100.0, PALETTE_TOLERANCE),
                "L mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.l,
                theirs.l / 100.0
            );
            assert!(
                approx_eq(ours.a, theirs.a / 100.0, PALETTE_TOLERANCE),
                "a mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.a,
                theirs.a / 100.0
            );
            assert!(
                approx_eq(ours.b, theirs.b / 100.0, PALETTE_TOLERANCE),
                "b mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.b,
                theirs.b / 100.0
            );
        }
    }

    #[test]
    fn test_lab_round_trip() {
        let test_colors = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (1.0, 1.0, 0.0),
            (1.0, 0.0, 1.0),
            (0.0, 1.0, 1.0),
            (0.5, 0.5, 0.5),
            (0.01, 0.02, 0.03),
            (1.0, 1.0, 1.0),
            (0.0, 0.0, 0.0),
        ];

        for (r, g, b) in test_colors {
            let back = Srgb::from(Lab::from(Srgb::new(r, g, b)));
            assert!(
                approx_eq(back.r, r, ROUND_TRIP_TOLERANCE),
                "r for ({r}, {g}, {b}): {}",
                back.r
            );
            assert!(
                approx_eq(back.g, g, ROUND_TRIP_TOLERANCE),
                "g for ({r}, {g}, {b}): {}",
                back.g
            );
            assert!(
                approx_eq(back.b, b, ROUND_TRIP_TOLERANCE),
                "b for ({r}, {g}, {b}): {}",
                back.b
            );
        }
    }

    #[test]
    fn test_lab_known_values() {
        let white = Lab::from(Srgb::new(1.0, 1.0, 1.0));
        assert!(approx_eq(white.l, 1.0, 1e-4), "white L = {}", white.l);
        assert!(approx_eq(white.a, 0.0, 1e-4), "white a = {}", white.a);
        assert!(approx_eq(white.b, 0.0, 1e-4), "white b = {}", white.b);

        let black = Lab::from(Srgb::new(0.0, 0.0, 0.0));
        assert!(approx_eq(black.l, 0.0, 1e-12));

        // Pure red is roughly L*=53, a*=80, b*=67
        let red = Lab::from(Srgb::new(1.0, 0.0, 0.0));
        assert!(approx_eq(red.l, 0.5324, 1e-3), "red L = {}", red.l);
        assert!(approx_eq(red.a, 0.8009, 1e-3), "red a = {}", red.a);
        assert!(approx_eq(red.b, 0.6720, 1e-3), "red b = {}", red.b);
    }

    #[test]
    fn test_gamut_check() {
        assert!(Lab::new(0.5, 0.0, 0.0).is_in_gamut());
        assert!(Lab::new(0.5, 0.0, 0.0).to_srgb_checked().is_some());
        // Far outside anything a monitor can show
        assert!(!Lab::new(0.5, 0.9, -0.9).is_in_gamut());
        assert!(!Lab::new(1.1, 0.0, 0.0).is_in_gamut());
    }

    #[test]
    fn test_distance() {
        let white = Lab::new(1.0, 0.0, 0.0);
        let black = Lab::new(0.0, 0.0, 0.0);
        let gray = Lab::new(0.5, 0.0, 0.0);

        assert!(approx_eq(white.distance(black), 1.0, 1e-12));
        assert!(approx_eq(gray.distance(black), gray.distance(white), 1e-12));
        assert_eq!(white.distance(white), 0.0);

        let p = Lab::new(0.5, 0.2, 0.0);
        let q = Lab::new(0.5, 0.0, -0.2);
        assert!(approx_eq(p.distance_squared(q), 0.08, 1e-12));
    }

    #[test]
    fn test_srgb_distance_lab() {
        let a = Srgb::from_u8(200, 10, 10);
        assert_eq!(a.distance_lab(a), 0.0);
        assert!(a.distance_lab(Srgb::from_u8(10, 10, 200)) > 0.5);
    }

    #[test]
    fn test_blend_lab_endpoints() {
        let a = Srgb::from_u8(255, 0, 0);
        let b = Srgb::from_u8(0, 0, 255);
        assert_eq!(a.blend_lab(b, 0.0).to_bytes(), a.to_bytes());
        assert_eq!(a.blend_lab(b, 1.0).to_bytes(), b.to_bytes());
    }
}
