//! CIE L*u*v* color space
//!
//! An alternative to Lab with the same lightness axis. Distances are
//! perceptual too, and blends through Luv keep hues from going muddy.
//!
//! Scaled like [`Lab`](super::Lab): `l` runs from 0.0 to 1.0 and the
//! displayable part of `u`/`v` lies roughly within -1.0..=1.0.
//!
//! # References
//!
//! <https://en.wikipedia.org/wiki/CIELUV>

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;
use super::xyz::{Xyz, D65};

/// A color in CIE L*u*v* space (unit-scaled).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Luv {
    pub l: f64,
    pub u: f64,
    pub v: f64,
}

/// (6/29)^3, below which lightness is linear in Y.
const EPSILON: f64 = 216.0 / 24389.0;

/// (29/3)^3 / 100, the slope of the linear segment in unit-scaled L.
const KAPPA: f64 = 24389.0 / 27.0 / 100.0;

/// Chromaticity coordinates u', v'. Black maps to (0, 0).
fn uv_prime(x: f64, y: f64, z: f64) -> (f64, f64) {
    let denom = x + 15.0 * y + 3.0 * z;
    if denom == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * x / denom, 9.0 * y / denom)
    }
}

impl Luv {
    #[inline]
    pub fn new(l: f64, u: f64, v: f64) -> Self {
        Self { l, u, v }
    }

    /// Euclidean distance in Luv.
    #[inline]
    pub fn distance(self, other: Luv) -> f64 {
        let dl = self.l - other.l;
        let du = self.u - other.u;
        let dv = self.v - other.v;
        (dl * dl + du * du + dv * dv).sqrt()
    }

    #[inline]
    pub fn blend(self, other: Luv, t: f64) -> Luv {
        Luv {
            l: self.l + t * (other.l - self.l),
            u: self.u + t * (other.u - self.u),
            v: self.v + t * (other.v - self.v),
        }
    }

    pub fn from_xyz_white_ref(xyz: Xyz, wref: [f64; 3]) -> Self {
        let yr = xyz.y / wref[1];
        let l = if yr <= EPSILON {
            KAPPA * yr
        } else {
            1.16 * yr.cbrt() - 0.16
        };
        let (u, v) = uv_prime(xyz.x, xyz.y, xyz.z);
        let (un, vn) = uv_prime(wref[0], wref[1], wref[2]);
        Luv {
            l,
            u: 13.0 * l * (u - un),
            v: 13.0 * l * (v - vn),
        }
    }

    pub fn to_xyz_white_ref(self, wref: [f64; 3]) -> Xyz {
        if self.l == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0);
        }
        let y = if self.l <= KAPPA * EPSILON {
            wref[1] * self.l / KAPPA
        } else {
            let f = (self.l + 0.16) / 1.16;
            wref[1] * f * f * f
        };
        let (un, vn) = uv_prime(wref[0], wref[1], wref[2]);
        let u = self.u / (13.0 * self.l) + un;
        let v = self.v / (13.0 * self.l) + vn;
        Xyz {
            x: y * 9.0 * u / (4.0 * v),
            y,
            z: y * (12.0 - 3.0 * u - 20.0 * v) / (4.0 * v),
        }
    }
}

impl From<Xyz> for Luv {
    fn from(xyz: Xyz) -> Self {
        Luv::from_xyz_white_ref(xyz, D65)
    }
}

impl From<Luv> for Xyz {
    fn from(luv: Luv) -> Self {
        luv.to_xyz_white_ref(D65)
    }
}

impl From<Srgb> for Luv {
    fn from(srgb: Srgb) -> Self {
        Luv::from(Xyz::from(LinearRgb::from(srgb)))
    }
}

impl From<Luv> for Srgb {
    /// Not clamped.
    fn from(luv: Luv) -> Self {
        Srgb::from(LinearRgb::from(Xyz::from(luv)))
    }
}

impl Srgb {
    /// Perceptual distance measured in Luv.
    #[inline]
    pub fn distance_luv(self, other: Srgb) -> f64 {
        Luv::from(self).distance(Luv::from(other))
    }

    /// Interpolate two colors through Luv.
    #[inline]
    pub fn blend_luv(self, other: Srgb, t: f64) -> Srgb {
        Srgb::from(Luv::from(self).blend(Luv::from(other), t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Lab;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_luv_known_values() {
        let white = Luv::from(Srgb::new(1.0, 1.0, 1.0));
        assert!(approx_eq(white.l, 1.0, 1e-4), "white L = {}", white.l);
        assert!(approx_eq(white.u, 0.0, 1e-3), "white u = {}", white.u);
        assert!(approx_eq(white.v, 0.0, 1e-3), "white v = {}", white.v);

        assert_eq!(Luv::from(Srgb::new(0.0, 0.0, 0.0)), Luv::new(0.0, 0.0, 0.0));

        // Pure red is roughly L*=53.2, u*=175.0, v*=37.8
        let red = Luv::from(Srgb::new(1.0, 0.0, 0.0));
        assert!(approx_eq(red.l, 0.5324, 1e-3), "red L = {}", red.l);
        assert!(approx_eq(red.u, 1.7502, 2e-3), "red u = {}", red.u);
        assert!(approx_eq(red.v, 0.3780, 2e-3), "red v = {}", red.v);
    }

    #[test]
    fn test_lightness_matches_lab() {
        for c in [Srgb::from_u8(30, 60, 90), Srgb::from_u8(2, 1, 3), Srgb::from_u8(200, 180, 10)] {
            assert!(approx_eq(Luv::from(c).l, Lab::from(c).l, 1e-12));
        }
    }

    #[test]
    fn test_luv_round_trip() {
        // The dark one exercises the linear segment of L
        for bytes in [[255, 0, 0], [0, 0, 255], [12, 200, 90], [1, 2, 3], [255, 255, 255]] {
            let c = Srgb::from_bytes(bytes);
            let back = Srgb::from(Luv::from(c));
            assert!(approx_eq(back.r, c.r, 1e-9), "{bytes:?} -> {back:?}");
            assert!(approx_eq(back.g, c.g, 1e-9), "{bytes:?} -> {back:?}");
            assert!(approx_eq(back.b, c.b, 1e-9), "{bytes:?} -> {back:?}");
        }
        assert_eq!(Srgb::from(Luv::new(0.0, 0.0, 0.0)), Srgb::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_distance_and_blend() {
        let a = Srgb::from_u8(200, 10, 10);
        let b = Srgb::from_u8(10, 10, 200);
        assert_eq!(a.distance_luv(a), 0.0);
        assert!(a.distance_luv(b) > 0.5);
        assert_eq!(a.blend_luv(b, 0.0).to_bytes(), a.to_bytes());
        assert_eq!(a.blend_luv(b, 1.0).to_bytes(), b.to_bytes());
    }
}
