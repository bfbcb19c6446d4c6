//! CIE XYZ color space (D65)
//!
//! XYZ is the device-independent hub between linear RGB and CIE L*a*b* /
//! L*u*v*. The xyY chromaticity form lives here too.
//! Matrices are the sRGB primaries with D65 reference white, per
//! <http://www.brucelindbloom.com/Eqn_RGB_XYZ_Matrix.html>.

use super::linear_rgb::LinearRgb;

/// D65 reference white (2° observer), normalized to Y = 1.
pub const D65: [f64; 3] = [0.95047, 1.00000, 1.08883];

/// D50 reference white (2° observer), normalized to Y = 1.
pub const D50: [f64; 3] = [0.96422, 1.00000, 0.82521];

/// A color in CIE XYZ space. Y is relative luminance (white = 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<LinearRgb> for Xyz {
    fn from(rgb: LinearRgb) -> Self {
        Xyz {
            x: 0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b,
            y: 0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b,
            z: 0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b,
        }
    }
}

impl From<Xyz> for LinearRgb {
    /// Inverse matrix, computed exactly from the forward one rather than
    /// taken from the rounded published table. The result is not clamped.
    fn from(xyz: Xyz) -> Self {
        LinearRgb {
            r: 3.2404548360214083 * xyz.x - 1.5371388501025751 * xyz.y
                - 0.4985315468684809 * xyz.z,
            g: -0.9692663898756537 * xyz.x
                + 1.8760109288424913 * xyz.y
                + 0.041556082346673524 * xyz.z,
            b: 0.05564341960421366 * xyz.x - 0.20402585426769815 * xyz.y
                + 1.0572251624579287 * xyz.z,
        }
    }
}

/// CIE xyY: chromaticity `x`, `y` plus luminance `yy` (the XYZ `Y`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyy {
    pub x: f64,
    pub y: f64,
    pub yy: f64,
}

impl Xyy {
    #[inline]
    pub fn new(x: f64, y: f64, yy: f64) -> Self {
        Self { x, y, yy }
    }

    /// Chromaticity from XYZ. Black has no chromaticity of its own and
    /// takes that of `wref`.
    pub fn from_xyz_white_ref(xyz: Xyz, wref: [f64; 3]) -> Self {
        let n = xyz.x + xyz.y + xyz.z;
        if n.abs() < 1e-14 {
            let wn = wref[0] + wref[1] + wref[2];
            return Xyy::new(wref[0] / wn, wref[1] / wn, xyz.y);
        }
        Xyy::new(xyz.x / n, xyz.y / n, xyz.y)
    }
}

impl From<Xyz> for Xyy {
    fn from(xyz: Xyz) -> Self {
        Xyy::from_xyz_white_ref(xyz, D65)
    }
}

impl From<Xyy> for Xyz {
    fn from(c: Xyy) -> Self {
        if c.y.abs() < 1e-14 {
            return Xyz::new(0.0, c.yy, 0.0);
        }
        Xyz::new(c.yy / c.y * c.x, c.yy, c.yy / c.y * (1.0 - c.x - c.y))
    }
}
