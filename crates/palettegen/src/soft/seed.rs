//! Initial representative selection.
//!
//! Seeds are drawn from the candidate set itself, so every representative
//! starts out as an admissible medoid.

use rand::Rng;

use crate::color::Lab;

/// Draw `count` pairwise-distinct candidates uniformly at random.
///
/// A draw is rejected when its *value* equals a seed already chosen.
/// Candidates are distinct grid points and the caller guarantees
/// `count <= candidates.len()`, so the loop for each seed ends once an
/// unchosen candidate is hit. After `candidates.len()` rejected draws in a
/// row the first unchosen candidate is taken instead, which bounds the work
/// for adversarial inputs (e.g. a candidate set full of duplicates).
pub(crate) fn seed<R: Rng + ?Sized>(candidates: &[Lab], count: usize, rng: &mut R) -> Vec<Lab> {
    debug_assert!(count <= candidates.len());

    let mut seeds: Vec<Lab> = Vec::with_capacity(count);
    while seeds.len() < count {
        let mut pick = None;
        for _ in 0..candidates.len() {
            let candidate = candidates[rng.gen_range(0..candidates.len())];
            if !seeds.contains(&candidate) {
                pick = Some(candidate);
                break;
            }
        }

        match pick.or_else(|| candidates.iter().copied().find(|c| !seeds.contains(c))) {
            Some(candidate) => seeds.push(candidate),
            // Fewer distinct values than requested; nothing left to draw.
            None => break,
        }
    }

    seeds
}
