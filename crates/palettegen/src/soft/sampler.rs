//! Regular-grid sampling of the admissible Lab space.
//!
//! The grid spans L in `0.0..=1.0` and a/b in `-1.0..=1.0`. Grid coordinates
//! are computed as `origin + index * step` rather than by repeated addition,
//! so the candidate set is identical from run to run.

use crate::color::Lab;

use super::settings::SoftPaletteSettings;

/// Grid resolution along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GridSpec {
    /// Lightness step
    pub dl: f64,
    /// Step for both opponent axes
    pub dab: f64,
}

impl GridSpec {
    pub const SPARSE: GridSpec = GridSpec { dl: 0.05, dab: 0.1 };
    pub const DENSE: GridSpec = GridSpec { dl: 0.01, dab: 0.05 };

    pub fn for_settings(settings: &SoftPaletteSettings) -> Self {
        if settings.dense_sampling {
            Self::DENSE
        } else {
            Self::SPARSE
        }
    }

    /// Number of grid points on the lightness axis (both ends included).
    fn l_steps(self) -> usize {
        (1.0 / self.dl).round() as usize + 1
    }

    /// Number of grid points on each opponent axis (both ends included).
    fn ab_steps(self) -> usize {
        (2.0 / self.dab).round() as usize + 1
    }

    /// Total number of grid points, admissible or not.
    pub fn len(self) -> usize {
        self.l_steps() * self.ab_steps() * self.ab_steps()
    }

    /// Every grid point in lightness-major order.
    pub fn points(self) -> impl Iterator<Item = Lab> {
        let ab = self.ab_steps();
        (0..self.l_steps()).flat_map(move |il| {
            let l = il as f64 * self.dl;
            (0..ab).flat_map(move |ia| {
                let a = -1.0 + ia as f64 * self.dab;
                (0..ab).map(move |ib| Lab::new(l, a, -1.0 + ib as f64 * self.dab))
            })
        })
    }
}

/// Build the candidate set: every grid point that is in gamut and accepted
/// by the predicate.
///
/// The result is ordered and never mutated afterwards. Grid points are
/// pairwise distinct, so candidates are too.
pub(crate) fn sample(settings: &SoftPaletteSettings) -> Vec<Lab> {
    let grid = GridSpec::for_settings(settings);
    let candidates: Vec<Lab> = grid.points().filter(|&lab| settings.admits(lab)).collect();

    tracing::debug!(
        grid_points = grid.len(),
        candidates = candidates.len(),
        dense = settings.dense_sampling,
        "Sampled Lab space"
    );

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_sizes() {
        assert_eq!(GridSpec::SPARSE.len(), 21 * 21 * 21);
        assert_eq!(GridSpec::DENSE.len(), 101 * 41 * 41);
        assert_eq!(GridSpec::SPARSE.points().count(), GridSpec::SPARSE.len());
    }

    #[test]
    fn test_grid_bounds_inclusive() {
        let points: Vec<Lab> = GridSpec::SPARSE.points().collect();
        let first = points[0];
        let last = points[points.len() - 1];
        assert_eq!(first, Lab::new(0.0, -1.0, -1.0));
        assert!((last.l - 1.0).abs() < 1e-12);
        assert!((last.a - 1.0).abs() < 1e-12);
        assert!((last.b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_candidates_admissible() {
        let settings = SoftPaletteSettings::new();
        let candidates = sample(&settings);
        assert!(!candidates.is_empty());
        assert!(candidates.len() < GridSpec::SPARSE.len());
        for lab in &candidates {
            assert!(lab.is_in_gamut(), "{lab:?} is out of gamut");
        }
    }

    #[test]
    fn test_predicate_filters_candidates() {
        let all = sample(&SoftPaletteSettings::new());
        let dark = sample(&SoftPaletteSettings::new().predicate(|lab| lab.l <= 0.3));
        assert!(dark.len() < all.len());
        assert!(dark.iter().all(|lab| lab.l <= 0.3));
    }

    #[test]
    fn test_rejecting_predicate_yields_nothing() {
        assert!(sample(&SoftPaletteSettings::new().predicate(|_| false)).is_empty());
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let settings = SoftPaletteSettings::new().seed(1);
        let other = SoftPaletteSettings::new().seed(2);
        assert_eq!(sample(&settings), sample(&other));
    }

    #[test]
    fn test_dense_sampling_finds_more() {
        let sparse = sample(&SoftPaletteSettings::new());
        let dense = sample(&SoftPaletteSettings::new().dense_sampling(true));
        assert!(dense.len() > sparse.len() * 10);
    }
}
