//! HSV and HSL cylindrical RGB models.
//!
//! Neither is perceptually uniform. They are used for the cheap "fast"
//! generators and the harmony helpers, where evenly spaced hue angles matter
//! more than perceptual spacing.
//!
//! Hue is in degrees `0.0..360.0`; saturation, value and lightness are in
//! `0.0..=1.0`. Formulas follow <https://en.wikipedia.org/wiki/HSL_and_HSV>.

use super::hcl::lerp_hue;
use super::srgb::Srgb;

/// Hue / Saturation / Value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Hue / Saturation / Lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsv {
    #[inline]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Same saturation and value, hue rotated by `degrees` (wrapping).
    #[inline]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }
}

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Shared hue computation for HSV and HSL. Returns 0 for greys.
fn hue_of(c: Srgb, max: f64, min: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    let d = max - min;
    let h = if max == c.r {
        ((c.g - c.b) / d).rem_euclid(6.0)
    } else if max == c.g {
        (c.b - c.r) / d + 2.0
    } else {
        (c.r - c.g) / d + 4.0
    };
    (h * 60.0).rem_euclid(360.0)
}

impl From<Srgb> for Hsv {
    fn from(c: Srgb) -> Self {
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let s = if max != 0.0 { (max - min) / max } else { 0.0 };
        Hsv {
            h: hue_of(c, max, min),
            s,
            v: max,
        }
    }
}

impl From<Hsv> for Srgb {
    fn from(hsv: Hsv) -> Self {
        let hp = hsv.h.rem_euclid(360.0) / 60.0;
        let c = hsv.v * hsv.s;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let m = hsv.v - c;

        let (r, g, b) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Srgb::new(m + r, m + g, m + b)
    }
}

impl From<Srgb> for Hsl {
    fn from(c: Srgb) -> Self {
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let l = (max + min) / 2.0;

        let s = if max == min {
            0.0
        } else if l > 0.5 {
            (max - min) / (2.0 - max - min)
        } else {
            (max - min) / (max + min)
        };

        Hsl {
            h: hue_of(c, max, min),
            s,
            l,
        }
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl From<Hsl> for Srgb {
    fn from(hsl: Hsl) -> Self {
        if hsl.s == 0.0 {
            return Srgb::new(hsl.l, hsl.l, hsl.l);
        }

        let q = if hsl.l < 0.5 {
            hsl.l * (1.0 + hsl.s)
        } else {
            hsl.l + hsl.s - hsl.l * hsl.s
        };
        let p = 2.0 * hsl.l - q;
        let h = hsl.h.rem_euclid(360.0) / 360.0;

        Srgb::new(
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    }
}

impl Srgb {
    /// Interpolate in HSV along the shorter hue arc. Passes through
    /// oversaturated intermediates; prefer Lab, Luv or HCL blends.
    pub fn blend_hsv(self, other: Srgb, t: f64) -> Srgb {
        let a = Hsv::from(self);
        let b = Hsv::from(other);
        Srgb::from(Hsv {
            h: lerp_hue(a.h, b.h, t),
            s: a.s + t * (b.s - a.s),
            v: a.v + t * (b.v - a.v),
        })
    }
}
