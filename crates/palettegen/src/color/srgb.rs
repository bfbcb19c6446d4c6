//! sRGB color type
//!
//! sRGB is the displayable color space every generated palette ends up in.
//! All channels are gamma-encoded floats; a color is displayable ("in gamut")
//! only when every channel lies in `0.0..=1.0`.

use std::fmt;
use std::str::FromStr;

use super::linear_rgb::LinearRgb;
use crate::palette::ParseColorError;

/// Tolerance used by [`Srgb::almost_equal_rgb`]: one 8-bit step per channel.
pub const RGB_DELTA: f64 = 1.0 / 255.0;

/// A color in sRGB color space.
///
/// Values are nominally in the range 0.0..=1.0 (mapping to 0..255 for 8-bit).
/// Conversions out of perceptual spaces are not clamped, so an `Srgb` may hold
/// out-of-range channels; use [`Srgb::is_in_gamut`] to test for that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-corrected, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma-corrected, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma-corrected, 0.0..=1.0)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use palettegen::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    ///
    /// # Example
    /// ```
    /// use palettegen::Srgb;
    /// let color = Srgb::new(1.0, 0.5, 0.0);
    /// let bytes = color.to_bytes();
    /// assert_eq!(bytes[0], 255);
    /// assert_eq!(bytes[2], 0);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Whether every channel is displayable (within `0.0..=1.0`).
    ///
    /// NaN channels are never in gamut.
    #[inline]
    pub fn is_in_gamut(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|channel| (0.0..=1.0).contains(channel))
    }

    /// Clamp every channel into `0.0..=1.0`. A no-op for in-gamut colors.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Lowercase `#rrggbb` representation.
    ///
    /// ```
    /// use palettegen::Srgb;
    /// assert_eq!(Srgb::from_u8(255, 0, 128).to_hex(), "#ff0080");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// `"r, g, b"` with 8-bit channels, the form CSS `rgb()` takes.
    ///
    /// ```
    /// use palettegen::Srgb;
    /// assert_eq!(Srgb::from_u8(255, 0, 128).to_rgb_string(), "255, 0, 128");
    /// ```
    pub fn to_rgb_string(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("{r}, {g}, {b}")
    }

    /// Whether every 8-bit channel is one of the 216-color web-safe levels
    /// (`00`, `33`, `66`, `99`, `cc`, `ff`).
    pub fn is_web_safe(self) -> bool {
        self.to_bytes().iter().all(|channel| channel % 0x33 == 0)
    }

    /// Euclidean distance in sRGB. Not perceptual; prefer
    /// [`Lab::distance`](crate::Lab::distance) for anything visual.
    #[inline]
    pub fn distance_rgb(self, other: Srgb) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Equality within one 8-bit step per channel on average.
    #[inline]
    pub fn almost_equal_rgb(self, other: Srgb) -> bool {
        (self.r - other.r).abs() + (self.g - other.g).abs() + (self.b - other.b).abs()
            < 3.0 * RGB_DELTA
    }

    /// Linear interpolation of the gamma-encoded channels.
    ///
    /// `t == 0` yields `self`, `t == 1` yields `other`.
    #[inline]
    pub fn blend_rgb(self, other: Srgb, t: f64) -> Srgb {
        Srgb {
            r: self.r + t * (other.r - self.r),
            g: self.g + t * (other.g - self.g),
            b: self.b + t * (other.b - self.b),
        }
    }
}

/// IEC 61966-2-1: linear light to gamma-encoded sRGB. Unclamped.
#[inline]
pub(crate) fn delinearize(v: f64) -> f64 {
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

impl From<LinearRgb> for Srgb {
    /// Gamma-encode linear RGB. Out-of-range input stays out of range so the
    /// result can still be gamut-tested.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: delinearize(linear.r),
            g: delinearize(linear.g),
            b: delinearize(linear.b),
        }
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive; surrounding whitespace is trimmed.
    ///
    /// ```
    /// use palettegen::Srgb;
    ///
    /// let white: Srgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.r, 1.0);
    ///
    /// let red: Srgb = "#F00".parse().unwrap();
    /// assert_eq!(red.g, 0.0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }
        // from_str_radix alone would let a `+` sign through
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
