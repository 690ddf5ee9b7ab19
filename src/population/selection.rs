//! Member selection helpers.
//!
//! Only uniform sampling and best-member lookup live here. Parent selection
//! is uniform with replacement: the same member may be drawn as both
//! parents.

use super::ranking::Ranking;
use super::types::Chromosome;
use rand::Rng;

/// Picks an index uniformly at random from `0..len`.
///
/// Returns `None` if `len` is zero.
pub fn random_index<R: Rng>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.random_range(0..len))
}

/// Returns the fittest member under `ranking`, skipping members without a
/// fitness.
///
/// Ties resolve to the earliest member. Returns `None` if no member has been
/// evaluated.
pub fn fittest<'a, C: Chromosome>(members: &'a [C], ranking: &Ranking) -> Option<&'a C> {
    members
        .iter()
        .filter_map(|member| member.fitness().map(|f| (member, f)))
        .reduce(|best, candidate| {
            if ranking.is_better(&candidate.1, &best.1) {
                candidate
            } else {
                best
            }
        })
        .map(|(member, _)| member)
}
