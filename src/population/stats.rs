//! Population summary statistics.

use super::ranking::Ranking;
use super::types::{Chromosome, Fitness};

/// Snapshot of a population's fitness distribution.
///
/// Only evaluated members contribute to `best`, `worst` and `mean`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationStats {
    /// Generation counter at the time of the snapshot.
    pub generation: usize,

    /// Number of members.
    pub size: usize,

    /// Number of members with a fitness.
    pub evaluated: usize,

    /// Fittest value under the population's ranking.
    pub best: Option<f64>,

    /// Least fit value under the population's ranking.
    pub worst: Option<f64>,

    /// Arithmetic mean of all fitness values.
    pub mean: Option<f64>,
}

impl PopulationStats {
    pub(crate) fn collect<C: Chromosome>(
        members: &[C],
        ranking: &Ranking,
        generation: usize,
    ) -> Self {
        let mut best: Option<C::Fitness> = None;
        let mut worst: Option<C::Fitness> = None;
        let mut sum = 0.0;
        let mut evaluated = 0usize;

        for fitness in members.iter().filter_map(|member| member.fitness()) {
            evaluated += 1;
            sum += fitness.to_f64();
            if best.map_or(true, |b| ranking.is_better(&fitness, &b)) {
                best = Some(fitness);
            }
            if worst.map_or(true, |w| ranking.is_better(&w, &fitness)) {
                worst = Some(fitness);
            }
        }

        Self {
            generation,
            size: members.len(),
            evaluated,
            best: best.map(Fitness::to_f64),
            worst: worst.map(Fitness::to_f64),
            mean: (evaluated > 0).then(|| sum / evaluated as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scored(Option<i64>);

    impl Chromosome for Scored {
        type Fitness = i64;
        fn fitness(&self) -> Option<i64> {
            self.0
        }
        fn set_fitness(&mut self, f: i64) {
            self.0 = Some(f);
        }
    }

    #[test]
    fn test_collect_maximize() {
        let members = vec![Scored(Some(4)), Scored(None), Scored(Some(10)), Scored(Some(1))];
        let stats = PopulationStats::collect(&members, &Ranking::maximize(), 3);
        assert_eq!(stats.generation, 3);
        assert_eq!(stats.size, 4);
        assert_eq!(stats.evaluated, 3);
        assert_eq!(stats.best, Some(10.0));
        assert_eq!(stats.worst, Some(1.0));
        assert_eq!(stats.mean, Some(5.0));
    }

    #[test]
    fn test_collect_minimize_swaps_best_and_worst() {
        let members = vec![Scored(Some(4)), Scored(Some(10)), Scored(Some(1))];
        let stats = PopulationStats::collect(&members, &Ranking::minimize(), 0);
        assert_eq!(stats.best, Some(1.0));
        assert_eq!(stats.worst, Some(10.0));
    }

    #[test]
    fn test_collect_unevaluated() {
        let members = vec![Scored(None), Scored(None)];
        let stats = PopulationStats::collect(&members, &Ranking::maximize(), 0);
        assert_eq!(stats.size, 2);
        assert_eq!(stats.evaluated, 0);
        assert!(stats.best.is_none());
        assert!(stats.worst.is_none());
        assert!(stats.mean.is_none());
    }
}
