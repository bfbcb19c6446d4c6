//! Soft palette options and configuration.
//!
//! This module provides [`SoftPaletteSettings`], the knobs that control how
//! the color space is sampled and clustered.

use std::fmt;
use std::sync::Arc;

use crate::color::Lab;

/// Default number of assign/update rounds.
pub const DEFAULT_ITERATIONS: u32 = 50;

/// Caller-supplied admissibility test over Lab samples.
///
/// Shared behind an `Arc` so settings stay cheap to clone and can be handed
/// to worker threads.
pub type Predicate = Arc<dyn Fn(Lab) -> bool + Send + Sync>;

/// Configuration for soft palette generation.
///
/// # Defaults
///
/// - No predicate: every in-gamut color is admissible
/// - 50 iterations
/// - Sparse sampling (L step 0.05, a/b step 0.1)
/// - No seed: the generator is seeded from system entropy
///
/// # Example
///
/// ```
/// use palettegen::SoftPaletteSettings;
///
/// // Dark, bluish-green colors only, reproducible across runs
/// let settings = SoftPaletteSettings::new()
///     .predicate(|lab| lab.l <= 0.5 && lab.a <= 0.0 && lab.b <= 0.0)
///     .iterations(30)
///     .dense_sampling(true)
///     .seed(7);
///
/// assert!(settings.admits(palettegen::Lab::new(0.4, -0.1, -0.1)));
/// assert!(!settings.admits(palettegen::Lab::new(0.6, -0.1, -0.1)));
/// ```
#[derive(Clone)]
pub struct SoftPaletteSettings {
    /// Restricts the usable color space. `None` admits everything in gamut.
    predicate: Option<Predicate>,

    /// Number of assign/update rounds. Higher is better quality but slower;
    /// usually two figures.
    ///
    /// Default: `50`
    pub iterations: u32,

    /// Sample the Lab space on a finer grid (L step 0.01, a/b step 0.05,
    /// about 170 000 grid points instead of about 9 000).
    ///
    /// Worth enabling when the predicate carves out a small or oddly shaped
    /// region of the color space.
    ///
    /// Default: `false`
    pub dense_sampling: bool,

    /// Seed for the run's random generator. `None` draws from entropy.
    ///
    /// Default: `None`
    pub seed: Option<u64>,
}

impl Default for SoftPaletteSettings {
    fn default() -> Self {
        Self {
            predicate: None,
            iterations: DEFAULT_ITERATIONS,
            dense_sampling: false,
            seed: None,
        }
    }
}

impl fmt::Debug for SoftPaletteSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoftPaletteSettings")
            .field("predicate", &self.predicate.as_ref().map(|_| "<fn>"))
            .field("iterations", &self.iterations)
            .field("dense_sampling", &self.dense_sampling)
            .field("seed", &self.seed)
            .finish()
    }
}

impl SoftPaletteSettings {
    /// Create settings with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the color space to Lab samples accepted by `check`.
    pub fn predicate<F>(mut self, check: F) -> Self
    where
        F: Fn(Lab) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(check));
        self
    }

    /// Use an already shared predicate.
    #[inline]
    pub fn shared_predicate(mut self, check: Predicate) -> Self {
        self.predicate = Some(check);
        self
    }

    /// Set the number of assign/update rounds.
    #[inline]
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set dense sampling mode.
    #[inline]
    pub fn dense_sampling(mut self, enabled: bool) -> Self {
        self.dense_sampling = enabled;
        self
    }

    /// Fix the random seed, making runs reproducible.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whether a predicate is set.
    #[inline]
    pub fn has_predicate(&self) -> bool {
        self.predicate.is_some()
    }

    /// Full admissibility test: in the sRGB gamut AND accepted by the
    /// predicate (if any).
    #[inline]
    pub fn admits(&self, lab: Lab) -> bool {
        lab.is_in_gamut() && self.predicate.as_ref().map_or(true, |check| check(lab))
    }
}
