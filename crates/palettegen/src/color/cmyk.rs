//! Subtractive CMYK, naive (no ink profile).

use super::srgb::Srgb;

/// Cyan / Magenta / Yellow / Key, each in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    #[inline]
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }
}

impl From<Srgb> for Cmyk {
    fn from(rgb: Srgb) -> Self {
        let k = (1.0 - rgb.r).min(1.0 - rgb.g).min(1.0 - rgb.b);
        if k >= 1.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 1.0);
        }
        Cmyk {
            c: (1.0 - rgb.r - k) / (1.0 - k),
            m: (1.0 - rgb.g - k) / (1.0 - k),
            y: (1.0 - rgb.b - k) / (1.0 - k),
            k,
        }
    }
}

impl From<Cmyk> for Srgb {
    fn from(cmyk: Cmyk) -> Self {
        let white = 1.0 - cmyk.k;
        Srgb::new(
            (1.0 - cmyk.c) * white,
            (1.0 - cmyk.m) * white,
            (1.0 - cmyk.y) * white,
        )
    }
}
