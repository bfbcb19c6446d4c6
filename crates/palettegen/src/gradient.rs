//! Stepped gradients between colors.
//!
//! Counts below [`MIN_STEPS`] are raised to it.

use crate::color::{Hsl, Srgb};

/// Smallest number of entries a gradient produces.
pub const MIN_STEPS: usize = 3;

/// `count` colors interpolated channel-wise in sRGB, from `from` to `to`
/// inclusive.
///
/// ```
/// use palettegen::{gradient, Srgb};
///
/// let steps = gradient::rgb_steps(Srgb::from_u8(0, 0, 0), Srgb::from_u8(255, 255, 255), 5);
/// assert_eq!(steps.len(), 5);
/// assert_eq!(steps[2].to_bytes(), [128, 128, 128]);
/// ```
pub fn rgb_steps(from: Srgb, to: Srgb, count: usize) -> Vec<Srgb> {
    let count = count.max(MIN_STEPS);
    let last = (count - 1) as f64;
    (0..count)
        .map(|i| from.blend_rgb(to, i as f64 / last))
        .collect()
}

/// `count` HSL colors sharing hue and saturation with `base`, with
/// lightness stepping evenly toward `target_l`.
///
/// The first entry is already one step away from `base`; the last one sits
/// exactly on `target_l`.
pub fn lightness_steps(base: Hsl, target_l: f64, count: usize) -> Vec<Hsl> {
    let count = count.max(MIN_STEPS);
    let step = (target_l - base.l) / count as f64;
    (1..=count)
        .map(|i| Hsl::new(base.h, base.s, base.l + step * i as f64))
        .collect()
}

/// Like [`lightness_steps`], heading toward white when `base` is light and
/// toward black otherwise.
pub fn lightness_steps_to_extreme(base: Hsl, count: usize) -> Vec<Hsl> {
    let target = if base.l > 0.5 { 1.0 } else { 0.0 };
    lightness_steps(base, target, count)
}
