//! Population configuration.
//!
//! [`PopulationConfig`] holds the parameters a [`Population`](super::Population)
//! is created with. It is fixed for the population's lifetime.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`Population`](super::Population).
///
/// # Defaults
///
/// ```
/// use u_species::population::PopulationConfig;
///
/// let config = PopulationConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.cull_percentage, 10.0);
/// assert!(!config.minimize_fitness);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_species::population::PopulationConfig;
///
/// let config = PopulationConfig::default()
///     .with_population_size(200)
///     .with_cull_percentage(25.0)
///     .with_minimize_fitness(true)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PopulationConfig {
    /// Target number of members.
    ///
    /// `seed` produces exactly this many chromosomes and `fill_by_breeding`
    /// refills up to it.
    pub population_size: usize,

    /// Percentage (0–100) of members discarded by each cull.
    ///
    /// The survivor count is rounded to the nearest integer, see
    /// [`survivor_count`](Self::survivor_count).
    pub cull_percentage: f64,

    /// Whether lower fitness is better.
    ///
    /// `false` (the default) means higher fitness is better.
    pub minimize_fitness: bool,

    /// Random seed for parent selection and mutation draws.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether [`calculate_fitness_sync`](super::Population::calculate_fitness_sync)
    /// evaluates members in parallel using rayon.
    ///
    /// Has no effect without the `parallel` feature.
    pub parallel: bool,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            cull_percentage: 10.0,
            minimize_fitness: false,
            seed: None,
            parallel: true,
        }
    }
}

impl PopulationConfig {
    /// Sets the target population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the cull percentage, clamped to `0.0..=100.0`.
    pub fn with_cull_percentage(mut self, percentage: f64) -> Self {
        self.cull_percentage = percentage.clamp(0.0, 100.0);
        self
    }

    /// Sets the fitness direction.
    pub fn with_minimize_fitness(mut self, minimize: bool) -> Self {
        self.minimize_fitness = minimize;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel synchronous evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Preset for small, fast-turnover populations.
    ///
    /// - Population: 20, Cull: 50%
    pub fn small() -> Self {
        Self {
            population_size: 20,
            cull_percentage: 50.0,
            ..Self::default()
        }
    }

    /// Preset with strong selection pressure: half the population is
    /// replaced by offspring of the surviving half every generation.
    ///
    /// - Population: 100, Cull: 50%
    pub fn elitist() -> Self {
        Self {
            cull_percentage: 50.0,
            ..Self::default()
        }
    }

    /// Number of members that survive a cull of `len` members.
    ///
    /// `round(len × (1 − cull_percentage / 100))`, never more than `len`.
    ///
    /// ```
    /// use u_species::population::PopulationConfig;
    ///
    /// let config = PopulationConfig::default().with_cull_percentage(80.0);
    /// assert_eq!(config.survivor_count(100), 20);
    /// assert_eq!(config.survivor_count(0), 0);
    /// ```
    pub fn survivor_count(&self, len: usize) -> usize {
        let keep_ratio = 1.0 - self.cull_percentage / 100.0;
        let survivors = (len as f64 * keep_ratio).round();
        (survivors.max(0.0) as usize).min(len)
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if !self.cull_percentage.is_finite() {
            return Err("cull_percentage must be finite".into());
        }
        if !(0.0..=100.0).contains(&self.cull_percentage) {
            return Err(format!(
                "cull_percentage must be within 0..=100, got {}",
                self.cull_percentage
            ));
        }
        Ok(())
    }
}
