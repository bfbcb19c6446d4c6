//! Error types for palette operations
//!
//! This module provides error types for hex color parsing and palette
//! generation.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// A character other than `0-9`, `a-f` or `A-F`, including signs
    #[error("invalid hex digit '{0}'")]
    InvalidDigit(char),
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The admissible part of the sampled color space holds fewer colors than
    /// were requested. Either the constraint is too tight, the count is too
    /// high, or dense sampling is needed.
    #[error(
        "more colors requested ({requested}) than admissible samples available ({available}); \
         lower the count, enable dense sampling, or relax the constraint"
    )]
    Infeasible {
        /// Number of colors asked for
        requested: usize,
        /// Number of admissible grid samples found
        available: usize,
    },
}
