//! Representative update: centroid where possible, medoid where not.
//!
//! Each cluster's new representative is the mean of its assigned samples.
//! Two situations force a fallback to an actual candidate (a medoid):
//!
//! - **Empty cluster**: no samples were assigned, so there is no mean. A
//!   random unused candidate takes its place.
//! - **Inadmissible centroid**: the mean fell outside the gamut or was
//!   rejected by the predicate. This happens when the predicate carves out
//!   a non-convex region. The unused candidate nearest to the mean takes
//!   its place.
//!
//! Either pick is marked used at once, so a later cluster in the same round
//! cannot claim the same candidate. Every representative leaving this phase
//! is admissible.

use rand::Rng;

use crate::color::Lab;

use super::assign::Assignment;
use super::settings::SoftPaletteSettings;

/// Per-round counters, reported through tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct UpdateStats {
    pub centroids: usize,
    pub empty_clusters: usize,
    pub inadmissible_centroids: usize,
}

/// Compute the next set of representatives.
///
/// `previous` supplies the fallback of last resort: when every candidate is
/// already in use, the cluster keeps its current (admissible) representative.
pub(crate) fn update<R: Rng + ?Sized>(
    candidates: &[Lab],
    previous: &[Lab],
    assignment: Assignment,
    settings: &SoftPaletteSettings,
    rng: &mut R,
) -> (Vec<Lab>, UpdateStats) {
    let Assignment { clusters, mut used } = assignment;
    let count = previous.len();

    // Component-wise sums in candidate order
    let mut sums = vec![(0.0f64, 0.0f64, 0.0f64); count];
    let mut sizes = vec![0usize; count];
    for (sample, &k) in candidates.iter().zip(&clusters) {
        let (l, a, b) = &mut sums[k];
        *l += sample.l;
        *a += sample.a;
        *b += sample.b;
        sizes[k] += 1;
    }

    let mut stats = UpdateStats::default();
    let mut next = Vec::with_capacity(count);

    for k in 0..count {
        if sizes[k] == 0 {
            stats.empty_clusters += 1;
            let pick = random_unused(&used, rng);
            next.push(claim(candidates, &mut used, pick).unwrap_or(previous[k]));
            continue;
        }

        let n = sizes[k] as f64;
        let (l, a, b) = sums[k];
        let mean = Lab::new(l / n, a / n, b / n);

        if settings.admits(mean) {
            stats.centroids += 1;
            next.push(mean);
        } else {
            stats.inadmissible_centroids += 1;
            let pick = nearest_unused(candidates, &used, mean);
            next.push(claim(candidates, &mut used, pick).unwrap_or(previous[k]));
        }
    }

    (next, stats)
}

/// Mark candidate `pick` used and return it.
fn claim(candidates: &[Lab], used: &mut [bool], pick: Option<usize>) -> Option<Lab> {
    pick.map(|i| {
        used[i] = true;
        candidates[i]
    })
}

/// Uniformly random index among the unused candidates.
fn random_unused<R: Rng + ?Sized>(used: &[bool], rng: &mut R) -> Option<usize> {
    let free = used.iter().filter(|&&u| !u).count();
    if free == 0 {
        return None;
    }
    let nth = rng.gen_range(0..free);
    used.iter()
        .enumerate()
        .filter(|(_, &u)| !u)
        .nth(nth)
        .map(|(i, _)| i)
}

/// Index of the unused candidate closest to `target`; first wins on ties.
fn nearest_unused(candidates: &[Lab], used: &[bool], target: Lab) -> Option<usize> {
    let mut best = None;
    let mut min_dist = f64::INFINITY;
    for (i, (&sample, &is_used)) in candidates.iter().zip(used).enumerate() {
        if is_used {
            continue;
        }
        let dist = sample.distance_squared(target);
        if dist < min_dist {
            min_dist = dist;
            best = Some(i);
        }
    }
    best
}
