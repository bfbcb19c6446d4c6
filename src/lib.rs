//! softpal - soft palette generator
//!
//! Command-line front end for the `palettegen` crate.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod output;
pub mod services;
