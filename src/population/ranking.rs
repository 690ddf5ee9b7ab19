//! Direction-aware fitness ordering.

use super::config::PopulationConfig;
use super::types::{Chromosome, Fitness};
use std::cmp::Ordering;

/// Total order over fitness values that puts the fitter value first.
///
/// Derived once from [`PopulationConfig::minimize_fitness`]. `Less` from
/// [`compare`](Ranking::compare) means the left value ranks ahead of the
/// right one, so an ascending sort yields best-first order in either
/// direction.
///
/// ```
/// use std::cmp::Ordering;
/// use u_species::population::Ranking;
///
/// assert_eq!(Ranking::maximize().compare(&9.0, &1.0), Ordering::Less);
/// assert_eq!(Ranking::minimize().compare(&9.0, &1.0), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranking {
    minimize: bool,
}

impl Ranking {
    /// Higher fitness is better.
    pub fn maximize() -> Self {
        Self { minimize: false }
    }

    /// Lower fitness is better.
    pub fn minimize() -> Self {
        Self { minimize: true }
    }

    pub fn from_config(config: &PopulationConfig) -> Self {
        Self {
            minimize: config.minimize_fitness,
        }
    }

    /// Whether lower fitness ranks first.
    pub fn is_minimizing(&self) -> bool {
        self.minimize
    }

    /// Compares two fitness values, fitter first.
    pub fn compare<F: Fitness>(&self, a: &F, b: &F) -> Ordering {
        let ascending = a.total_order(b);
        if self.minimize {
            ascending
        } else {
            ascending.reverse()
        }
    }

    /// Returns `true` if `a` is strictly fitter than `b`.
    pub fn is_better<F: Fitness>(&self, a: &F, b: &F) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Compares two members, fitter first.
    ///
    /// Members without a fitness rank after every evaluated member, whatever
    /// the direction; two unevaluated members compare equal.
    pub fn compare_members<C: Chromosome>(&self, a: &C, b: &C) -> Ordering {
        match (a.fitness(), b.fitness()) {
            (Some(fa), Some(fb)) => self.compare(&fa, &fb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl Default for Ranking {
    fn default() -> Self {
        Self::maximize()
    }
}
