//! Ready-made palette and single-color generators.
//!
//! Two moods, each in two flavours:
//!
//! | Mood  | Soft (k-means, distinct)   | Fast (HSV, evenly spaced hues) |
//! |-------|----------------------------|--------------------------------|
//! | warm  | [`warm_palette`]           | [`fast_warm_palette`]          |
//! | happy | [`happy_palette`]          | [`fast_happy_palette`]         |
//!
//! The soft variants run the full soft palette generator with a predicate
//! over HCL chroma and lightness. The fast variants only spread hues around
//! the HSV wheel; they are instant but make no perceptual guarantees.
//!
//! Every generator takes the random source explicitly.

use rand::Rng;

use crate::color::{Hcl, Hsv, Lab, Srgb};
use crate::palette::PaletteError;
use crate::soft::{SoftPalette, SoftPaletteSettings};

/// Maximum rejection draws for single-color generators before clamping.
const MAX_COLOR_DRAWS: usize = 1000;

/// Muted, darkish colors: chroma in `0.1..=0.4`, lightness in `0.2..=0.5`.
pub fn is_warm(lab: Lab) -> bool {
    let c = Hcl::from(lab).c;
    (0.1..=0.4).contains(&c) && (0.2..=0.5).contains(&lab.l)
}

/// Saturated, bright-ish colors: chroma at least `0.3`, lightness in `0.4..=0.8`.
pub fn is_happy(lab: Lab) -> bool {
    Hcl::from(lab).c >= 0.3 && (0.4..=0.8).contains(&lab.l)
}

/// Settings used by [`warm_palette`]: warm predicate, dense sampling.
pub fn warm_settings() -> SoftPaletteSettings {
    SoftPaletteSettings::new()
        .predicate(is_warm)
        .dense_sampling(true)
}

/// Settings used by [`happy_palette`]: happy predicate, dense sampling.
pub fn happy_settings() -> SoftPaletteSettings {
    SoftPaletteSettings::new()
        .predicate(is_happy)
        .dense_sampling(true)
}

/// `count` distinct warm colors.
pub fn warm_palette<R: Rng>(count: usize, rng: R) -> Result<Vec<Srgb>, PaletteError> {
    SoftPalette::with_rng(warm_settings(), rng).generate(count)
}

/// `count` distinct happy colors.
pub fn happy_palette<R: Rng>(count: usize, rng: R) -> Result<Vec<Srgb>, PaletteError> {
    SoftPalette::with_rng(happy_settings(), rng).generate(count)
}

/// Evenly spaced hues with random saturation and value in the given bands.
fn fast_palette<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
    (s_min, s_span): (f64, f64),
    (v_min, v_span): (f64, f64),
) -> Vec<Srgb> {
    (0..count)
        .map(|i| {
            let h = i as f64 * (360.0 / count as f64);
            let s = s_min + rng.gen::<f64>() * s_span;
            let v = v_min + rng.gen::<f64>() * v_span;
            Srgb::from(Hsv::new(h, s, v))
        })
        .collect()
}

/// `count` warm colors, evenly spaced around the hue wheel. Not guaranteed
/// to be distinct.
pub fn fast_warm_palette<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Srgb> {
    fast_palette(count, rng, (0.55, 0.2), (0.35, 0.2))
}

/// `count` happy colors, evenly spaced around the hue wheel. Not guaranteed
/// to be distinct.
pub fn fast_happy_palette<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Srgb> {
    fast_palette(count, rng, (0.8, 0.2), (0.65, 0.2))
}

/// Draw HCL colors until one is displayable.
fn random_hcl<R: Rng + ?Sized>(
    rng: &mut R,
    (c_min, c_span): (f64, f64),
    (l_min, l_span): (f64, f64),
) -> Srgb {
    let mut color = Srgb::new(0.0, 0.0, 0.0);
    for _ in 0..MAX_COLOR_DRAWS {
        color = Srgb::from(Hcl::new(
            rng.gen::<f64>() * 360.0,
            c_min + rng.gen::<f64>() * c_span,
            l_min + rng.gen::<f64>() * l_span,
        ));
        if color.is_in_gamut() {
            return color;
        }
    }
    color.clamped()
}

/// A single random warm color (HCL based, always in gamut).
pub fn warm_color<R: Rng + ?Sized>(rng: &mut R) -> Srgb {
    random_hcl(rng, (0.1, 0.3), (0.2, 0.3))
}

/// A single random happy color (HCL based, always in gamut).
pub fn happy_color<R: Rng + ?Sized>(rng: &mut R) -> Srgb {
    random_hcl(rng, (0.5, 0.3), (0.5, 0.3))
}

/// A single random warm color straight from HSV.
pub fn fast_warm_color<R: Rng + ?Sized>(rng: &mut R) -> Srgb {
    Srgb::from(Hsv::new(
        rng.gen::<f64>() * 360.0,
        0.5 + rng.gen::<f64>() * 0.3,
        0.3 + rng.gen::<f64>() * 0.3,
    ))
}

/// A single random happy color straight from HSV.
pub fn fast_happy_color<R: Rng + ?Sized>(rng: &mut R) -> Srgb {
    Srgb::from(Hsv::new(
        rng.gen::<f64>() * 360.0,
        0.7 + rng.gen::<f64>() * 0.3,
        0.6 + rng.gen::<f64>() * 0.3,
    ))
}
