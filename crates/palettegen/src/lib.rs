//! palettegen: Perceptually distinct color palettes
//!
//! This library generates palettes of colors that are as far apart from each
//! other as possible to the human eye, optionally restricted to a region of
//! the color space (only pastels, only dark colors, "no greens", ...).
//!
//! # Quick Start
//!
//! ```
//! use palettegen::{generate_palette, SoftPaletteSettings};
//!
//! // Eight colors, none of them too light
//! let settings = SoftPaletteSettings::new()
//!     .predicate(|lab| lab.l <= 0.7)
//!     .iterations(20)
//!     .seed(42);
//!
//! let colors = generate_palette(8, &settings).unwrap();
//! for color in &colors {
//!     println!("{color}"); // #rrggbb
//! }
//! # assert_eq!(colors.len(), 8);
//! ```
//!
//! # How It Works
//!
//! The soft palette generator samples CIE L*a*b* on a regular grid, keeps
//! the samples that are displayable in sRGB and accepted by the caller's
//! predicate, and clusters them with k-means. Cluster representatives fall
//! back to actual samples (medoids) whenever a centroid would leave the
//! admissible region. See the [`soft`] module for details.
//!
//! Lab is used because Euclidean distance there roughly follows perceived
//! color difference; in sRGB the same distance can look tiny for one pair
//! of colors and huge for another.
//!
//! # Color Spaces
//!
//! - [`Srgb`]: gamma-encoded sRGB for input and output
//! - [`LinearRgb`]: linear light
//! - [`Xyz`] / [`Xyy`]: CIE 1931 XYZ (D65) and its chromaticity form
//! - [`Lab`]: CIE L*a*b* (D65), L scaled to `0.0..=1.0`
//! - [`Luv`]: CIE L*u*v* (D65), scaled like Lab
//! - [`Hcl`]: cylindrical Lab (hue, chroma, lightness)
//! - [`Hsv`] / [`Hsl`]: cylindrical RGB, used by the fast generators and
//!   harmonies
//! - [`Cmyk`]: naive subtractive model
//!
//! # Beyond Soft Palettes
//!
//! - [`presets`]: ready-made warm and happy palettes and single colors
//! - [`harmony`]: complementary, triad, square and other wheel harmonies
//! - [`gradient`]: stepped gradients in RGB and HSL lightness
//! - [`sort`]: ordering by lightness or by distance from black

pub mod color;
pub mod gradient;
pub mod harmony;
pub mod palette;
pub mod presets;
pub mod soft;


pub use color::{Cmyk, Hcl, Hsl, Hsv, Lab, LinearRgb, Luv, Srgb, Xyy, Xyz};
pub use palette::{sort, PaletteError, ParseColorError};
pub use soft::{generate_palette, soft_palette, Predicate, SoftPalette, SoftPaletteSettings};
