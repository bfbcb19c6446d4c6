//! Color types and conversion utilities
//!
//! Every type is a plain `Copy` struct of `f64` components with `From`
//! conversions along the chain:
//!
//! ```text
//! Srgb <-> LinearRgb <-> Xyz <-> Lab <-> Hcl
//!                         Xyz <-> Luv
//!                         Xyz <-> Xyy
//! Srgb <-> Hsv
//! Srgb <-> Hsl
//! Srgb <-> Cmyk
//! ```
//!
//! Conversions never clamp. A Lab triple outside the sRGB gamut converts to
//! an `Srgb` with channels outside `0.0..=1.0`, which is exactly what the
//! palette generator's gamut test looks for.
//!
//! # Example
//!
//! ```
//! use palettegen::{Lab, Srgb};
//!
//! let srgb = Srgb::from_u8(128, 64, 32);
//! let lab = Lab::from(srgb);
//! let back = Srgb::from(lab);
//! assert_eq!(back.to_bytes(), [128, 64, 32]);
//! ```

mod cmyk;
mod hcl;
mod hsv;
mod lab;
mod linear_rgb;
mod luv;
mod srgb;
mod xyz;

pub use cmyk::Cmyk;
pub use hcl::Hcl;
pub use hsv::{Hsl, Hsv};
pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use luv::Luv;
pub use srgb::{Srgb, RGB_DELTA};
pub use xyz::{Xyy, Xyz, D50, D65};
