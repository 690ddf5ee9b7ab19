//! Population state and the evolutionary operations over it.
//!
//! [`Population`] holds one generation of chromosomes and drives them
//! through seed → evaluate → cull → breed → mutate. The caller decides the
//! order and when to stop.

use super::config::PopulationConfig;
use super::error::{PopulationError, Result};
use super::ranking::Ranking;
use super::selection;
use super::stats::PopulationStats;
use super::strategy::{Breeder, Evaluator, Mutator, Seeder};
use super::types::Chromosome;
use futures::future::try_join_all;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument, warn};

/// A managed generation of chromosomes.
///
/// Operations that replace the member sequence (`seed`, `cull`, `mutate`)
/// build the next sequence in full before publishing it, so a failed
/// operation never leaves a half-built sequence behind.
/// `calculate_fitness` and `fill_by_breeding` keep whatever progress they
/// made before a strategy failed.
///
/// # Usage
///
/// ```ignore
/// let mut population = Population::new(PopulationConfig::default())?;
/// population.seed(random_route).await?;
/// loop {
///     population.calculate_fitness(route_length).await?;
///     population.cull();
///     population.fill_by_breeding(order_crossover).await?;
///     population.mutate(swap_stops, 0.05).await?;
///     population.increment_generation();
/// }
/// ```
#[derive(Debug)]
pub struct Population<C: Chromosome> {
    config: PopulationConfig,
    ranking: Ranking,
    generation: usize,
    members: Vec<C>,
    rng: StdRng,
}

impl<C: Chromosome> Population<C> {
    /// Creates an empty population at generation 0.
    ///
    /// # Errors
    /// Returns [`PopulationError::InvalidConfig`] if
    /// [`PopulationConfig::validate`] fails.
    pub fn new(config: PopulationConfig) -> Result<Self> {
        config.validate().map_err(PopulationError::InvalidConfig)?;

        let rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));

        Ok(Self {
            ranking: Ranking::from_config(&config),
            config,
            generation: 0,
            members: Vec::new(),
            rng,
        })
    }

    pub fn config(&self) -> &PopulationConfig {
        &self.config
    }

    pub fn ranking(&self) -> Ranking {
        self.ranking
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current members in insertion order.
    pub fn members(&self) -> &[C] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Consumes the population, returning its members.
    pub fn into_members(self) -> Vec<C> {
        self.members
    }

    /// Seeds the population with `population_size` new chromosomes.
    ///
    /// All seeder calls are issued at once and awaited together. The batch is
    /// appended only if every call succeeds; existing members are kept, so
    /// seed an empty population to get exactly `population_size` members.
    #[instrument(level = "debug", skip_all, fields(generation = self.generation))]
    pub async fn seed<S: Seeder<C>>(&mut self, seeder: S) -> Result<()> {
        let pending = (0..self.config.population_size).map(|_| seeder.seed());

        let seeded = try_join_all(pending).await.map_err(|err| {
            warn!(error = %err, "seed strategy failed, nothing committed");
            PopulationError::Seed(err)
        })?;

        let count = seeded.len();
        self.members.extend(seeded);
        debug!(seeded = count, size = self.members.len(), "population seeded");
        Ok(())
    }

    /// Evaluates every member concurrently and stores the result in place.
    ///
    /// On failure, members whose evaluation already settled keep their new
    /// fitness.
    #[instrument(level = "debug", skip_all, fields(generation = self.generation))]
    pub async fn calculate_fitness<E: Evaluator<C>>(&mut self, evaluator: E) -> Result<()> {
        let evaluator = &evaluator;
        let evaluations = self.members.iter_mut().map(|member| async move {
            let fitness = evaluator.evaluate(&*member).await?;
            member.set_fitness(fitness);
            anyhow::Ok(())
        });

        let evaluated = try_join_all(evaluations).await.map_err(|err| {
            warn!(error = %err, "fitness strategy failed");
            PopulationError::Fitness(err)
        })?;

        debug!(evaluated = evaluated.len(), "fitness calculated");
        Ok(())
    }

    /// Synchronous counterpart of [`calculate_fitness`](Self::calculate_fitness)
    /// for CPU-bound objective functions.
    ///
    /// Runs on rayon's pool when the `parallel` feature is enabled and
    /// [`PopulationConfig::parallel`] is set.
    pub fn calculate_fitness_sync<F>(&mut self, fitness: F)
    where
        F: Fn(&C) -> C::Fitness + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            self.members.par_iter_mut().for_each(|member| {
                let f = fitness(&*member);
                member.set_fitness(f);
            });
            return;
        }

        for member in self.members.iter_mut() {
            let f = fitness(&*member);
            member.set_fitness(f);
        }
    }

    /// Discards the least fit members.
    ///
    /// Members are stably sorted best-first (unevaluated members last) and
    /// the first [`PopulationConfig::survivor_count`] are kept. Returns the
    /// number of members removed.
    #[instrument(level = "debug", skip_all, fields(generation = self.generation))]
    pub fn cull(&mut self) -> usize {
        let before = self.members.len();
        let survivors = self.config.survivor_count(before);
        let ranking = self.ranking;

        let mut ranked = std::mem::take(&mut self.members);
        ranked.sort_by(|a, b| ranking.compare_members(a, b));
        ranked.truncate(survivors);
        self.members = ranked;

        debug!(before, survivors, "population culled");
        before - survivors
    }

    /// Breeds offspring until the population reaches `population_size`.
    ///
    /// Parents are drawn uniformly with replacement from the current members,
    /// including offspring bred earlier in the same call. Breeding is
    /// sequential: each child is appended before the next pair is drawn.
    /// Returns the number of offspring added.
    ///
    /// # Errors
    /// [`PopulationError::Empty`] if breeding is needed but there are no
    /// members. On [`PopulationError::Breed`], offspring from completed
    /// iterations remain.
    #[instrument(level = "debug", skip_all, fields(generation = self.generation))]
    pub async fn fill_by_breeding<B: Breeder<C>>(&mut self, breeder: B) -> Result<usize> {
        let target = self.config.population_size;
        if self.members.len() >= target {
            return Ok(0);
        }
        if self.members.is_empty() {
            return Err(PopulationError::Empty);
        }

        let mut bred = 0usize;
        while self.members.len() < target {
            let first = self.random_index()?;
            let second = self.random_index()?;

            let child = breeder
                .breed(&self.members[first], &self.members[second])
                .await
                .map_err(|err| {
                    warn!(error = %err, bred, "breed strategy failed");
                    PopulationError::Breed(err)
                })?;

            self.members.push(child);
            bred += 1;
        }

        debug!(bred, size = self.members.len(), "population refilled");
        Ok(bred)
    }

    /// Replaces each member with probability `mutate_chance`.
    ///
    /// Draws one uniform value in `[0, 1)` per member; members whose draw is
    /// below `mutate_chance` are handed to `mutator`, all concurrently. The
    /// new sequence keeps positional order and is committed only if every
    /// call succeeds. Returns the number of members replaced.
    ///
    /// # Errors
    /// [`PopulationError::InvalidMutationChance`] if `mutate_chance` is not
    /// within `0.0..=1.0`.
    #[instrument(level = "debug", skip_all, fields(generation = self.generation))]
    pub async fn mutate<M: Mutator<C>>(&mut self, mutator: M, mutate_chance: f64) -> Result<usize> {
        if !(0.0..=1.0).contains(&mutate_chance) {
            return Err(PopulationError::InvalidMutationChance(mutate_chance));
        }

        let draws: Vec<bool> = (0..self.members.len())
            .map(|_| self.rng.random::<f64>() < mutate_chance)
            .collect();

        let mutator = &mutator;
        let pending = self
            .members
            .iter()
            .zip(&draws)
            .map(|(member, &hit)| async move {
                if hit {
                    mutator.mutate(member).await.map(Some)
                } else {
                    anyhow::Ok(None)
                }
            });

        let replacements = try_join_all(pending).await.map_err(|err| {
            warn!(error = %err, "mutate strategy failed, members unchanged");
            PopulationError::Mutate(err)
        })?;

        let mutated = replacements.iter().filter(|r| r.is_some()).count();
        let previous = std::mem::take(&mut self.members);
        self.members = previous
            .into_iter()
            .zip(replacements)
            .map(|(original, replacement)| replacement.unwrap_or(original))
            .collect();

        debug!(mutated, size = self.members.len(), "population mutated");
        Ok(mutated)
    }

    /// Appends one member.
    pub fn add_member(&mut self, chromosome: C) {
        self.members.push(chromosome);
    }

    /// Returns a member chosen uniformly at random.
    ///
    /// # Errors
    /// [`PopulationError::Empty`] if there are no members.
    pub fn random_chromosome(&mut self) -> Result<&C> {
        let index = self.random_index()?;
        Ok(&self.members[index])
    }

    /// Returns the fittest evaluated member, or `None` if no member has a
    /// fitness yet.
    pub fn fittest_chromosome(&self) -> Option<&C> {
        selection::fittest(&self.members, &self.ranking)
    }

    /// Summary of the current fitness distribution.
    pub fn stats(&self) -> PopulationStats {
        PopulationStats::collect(&self.members, &self.ranking, self.generation)
    }

    /// Advances the generation counter and returns the new value.
    pub fn increment_generation(&mut self) -> usize {
        self.generation += 1;

        if tracing::enabled!(tracing::Level::DEBUG) {
            let stats = self.stats();
            debug!(
                generation = stats.generation,
                size = stats.size,
                evaluated = stats.evaluated,
                best = ?stats.best,
                mean = ?stats.mean,
                "generation advanced"
            );
        }

        self.generation
    }

    fn random_index(&mut self) -> Result<usize> {
        selection::random_index(self.members.len(), &mut self.rng).ok_or(PopulationError::Empty)
    }
}

// ============================================================================
// Tests
// ============================================================================
