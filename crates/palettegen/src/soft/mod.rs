//! Soft palettes: k-means over the admissible part of CIE L*a*b*.
//!
//! # Algorithm
//!
//! ```text
//! Sampling   grid over Lab, keep in-gamut points the predicate accepts
//!     |
//!     +---> fewer candidates than colors?  Err(Infeasible)
//!     +---> exactly as many?               return them all
//!     |
//! Seeding    `count` distinct random candidates (medoids)
//!     |
//! Iterating  `iterations` times:
//!     |        assign  every candidate to its nearest representative
//!     |        update  centroid per cluster, medoid fallback when the
//!     |                cluster is empty or its centroid is inadmissible
//!     v
//! Done       representatives -> sRGB, in representative order
//! ```
//!
//! Representatives start as medoids so they are admissible from the first
//! round, and the medoid fallback keeps them admissible afterwards. The
//! predicate may therefore describe any shape, convex or not.
//!
//! There is no convergence test: the round count is fixed, which keeps
//! runtime predictable. Randomness comes only from the generator owned by
//! [`SoftPalette`], so a fixed seed reproduces the palette exactly.

mod assign;
mod sampler;
mod seed;
mod settings;
mod update;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::{Lab, Srgb};
use crate::palette::PaletteError;

pub use settings::{Predicate, SoftPaletteSettings, DEFAULT_ITERATIONS};

/// Soft palette generator.
///
/// Owns the settings and the random generator for its runs. Create one per
/// palette, or reuse one to draw several palettes from the same random
/// stream.
///
/// # Example
///
/// ```
/// use palettegen::{SoftPalette, SoftPaletteSettings};
///
/// let settings = SoftPaletteSettings::new().iterations(10).seed(1);
/// let colors = SoftPalette::new(settings).generate(5).unwrap();
///
/// assert_eq!(colors.len(), 5);
/// assert!(colors.iter().all(|c| c.is_in_gamut()));
/// ```
pub struct SoftPalette<R = StdRng> {
    settings: SoftPaletteSettings,
    rng: R,
}

impl SoftPalette<StdRng> {
    /// Create a generator seeded from `settings.seed`, or from system entropy
    /// when no seed is set.
    pub fn new(settings: SoftPaletteSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { settings, rng }
    }
}

impl<R: Rng> SoftPalette<R> {
    /// Create a generator drawing from an injected random source.
    /// `settings.seed` is ignored.
    pub fn with_rng(settings: SoftPaletteSettings, rng: R) -> Self {
        Self { settings, rng }
    }

    /// The settings this generator runs with.
    pub fn settings(&self) -> &SoftPaletteSettings {
        &self.settings
    }

    /// Generate `count` visually distinct, admissible colors.
    ///
    /// # Errors
    ///
    /// [`PaletteError::Infeasible`] when fewer than `count` grid samples are
    /// admissible. This is decided before any random number is drawn, so it
    /// depends only on the predicate and the sampling density.
    pub fn generate(&mut self, count: usize) -> Result<Vec<Srgb>, PaletteError> {
        self.generate_lab(count)
            .map(|labs| labs.into_iter().map(Srgb::from).collect())
    }

    /// Like [`generate`](Self::generate), returning the Lab representatives.
    pub fn generate_lab(&mut self, count: usize) -> Result<Vec<Lab>, PaletteError> {
        let candidates = sampler::sample(&self.settings);

        if candidates.len() < count {
            tracing::debug!(
                requested = count,
                available = candidates.len(),
                "Palette request is infeasible"
            );
            return Err(PaletteError::Infeasible {
                requested: count,
                available: candidates.len(),
            });
        }
        if candidates.len() == count {
            tracing::debug!(count, "Candidate set exactly fills the palette");
            return Ok(candidates);
        }
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut representatives = seed::seed(&candidates, count, &mut self.rng);

        for round in 0..self.settings.iterations {
            let assignment = assign::assign(&candidates, &representatives);
            let (next, stats) = update::update(
                &candidates,
                &representatives,
                assignment,
                &self.settings,
                &mut self.rng,
            );
            representatives = next;

            tracing::trace!(
                round,
                centroids = stats.centroids,
                empty_clusters = stats.empty_clusters,
                inadmissible_centroids = stats.inadmissible_centroids,
                "k-means round"
            );
        }

        tracing::debug!(
            count,
            candidates = candidates.len(),
            iterations = self.settings.iterations,
            "Generated soft palette"
        );

        Ok(representatives)
    }
}

/// Generate `count` distinct colors with the given settings.
///
/// Shorthand for `SoftPalette::new(settings.clone()).generate(count)`.
///
/// ```
/// use palettegen::{generate_palette, PaletteError, SoftPaletteSettings};
///
/// let never = SoftPaletteSettings::new().predicate(|_| false);
/// assert!(matches!(
///     generate_palette(3, &never),
///     Err(PaletteError::Infeasible { requested: 3, available: 0 })
/// ));
/// ```
pub fn generate_palette(
    count: usize,
    settings: &SoftPaletteSettings,
) -> Result<Vec<Srgb>, PaletteError> {
    SoftPalette::new(settings.clone()).generate(count)
}

/// Generate `count` distinct colors with default settings.
pub fn soft_palette(count: usize) -> Result<Vec<Srgb>, PaletteError> {
    generate_palette(count, &SoftPaletteSettings::default())
}

#[cfg(test)]
pub(crate) use sampler::sample;
