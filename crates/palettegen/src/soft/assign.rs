//! Nearest-representative assignment.

use crate::color::Lab;

/// Result of one assignment pass.
///
/// `used` is handed to the update phase by value; that phase owns it for the
/// rest of the round and marks the medoids it picks.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Assignment {
    /// `clusters[i]` is the index of the representative nearest to candidate `i`
    pub clusters: Vec<usize>,
    /// `used[i]` is true iff candidate `i` exactly equals a representative
    pub used: Vec<bool>,
}

/// Assign every candidate to its nearest representative.
///
/// Distance comparison is strict, so on an exact tie the representative
/// with the lowest index wins. O(candidates × representatives); the grid
/// bounds the candidate count and palettes are small, so a flat scan beats
/// building a spatial index.
pub(crate) fn assign(candidates: &[Lab], representatives: &[Lab]) -> Assignment {
    let mut clusters = Vec::with_capacity(candidates.len());
    let mut used = Vec::with_capacity(candidates.len());

    for &sample in candidates {
        let mut nearest = 0;
        let mut min_dist = f64::INFINITY;
        let mut is_used = false;

        for (k, &rep) in representatives.iter().enumerate() {
            let dist = sample.distance_squared(rep);
            if dist < min_dist {
                min_dist = dist;
                nearest = k;
            }
            if sample == rep {
                is_used = true;
            }
        }

        clusters.push(nearest);
        used.push(is_used);
    }

    Assignment { clusters, used }
}
