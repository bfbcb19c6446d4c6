//! Palette-level types and utilities
//!
//! This module provides the error types shared across the crate and helpers
//! that operate on finished palettes (ordering, variation checks).

mod error;
pub mod sort;

pub use error::{PaletteError, ParseColorError};
