//! Linear RGB color type
//!
//! Linear RGB is the bridge between gamma-encoded sRGB and CIE XYZ. Transfer
//! functions use the exact IEC 61966-2-1 formulas and never clamp, so colors
//! that fall outside the sRGB gamut remain detectable after conversion.

use super::srgb::Srgb;

/// A color in linear RGB color space.
///
/// Values represent light intensity proportional to physical light power.
/// In-gamut colors lie in 0.0..=1.0; conversions from perceptual spaces may
/// produce values outside that range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// IEC 61966-2-1: gamma-encoded sRGB to linear light. Unclamped.
#[inline]
pub(crate) fn linearize(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

impl From<Srgb> for LinearRgb {
    fn from(srgb: Srgb) -> Self {
        Self {
            r: linearize(srgb.r),
            g: linearize(srgb.g),
            b: linearize(srgb.b),
        }
    }
}
