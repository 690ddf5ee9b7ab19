//! Evolutionary population management.
//!
//! A generic, domain-agnostic population engine built on trait-based
//! abstractions. Users describe their chromosome by implementing
//! [`Chromosome`] and supply async strategy functions for every
//! domain-specific step; the engine owns the member sequence and the
//! invariants around it.
//!
//! # Core Traits
//!
//! - [`Chromosome`]: A candidate solution with an optional fitness slot
//! - [`Seeder`], [`Evaluator`], [`Breeder`], [`Mutator`]: Strategy functions
//!
//! # Key Types
//!
//! - [`PopulationConfig`]: Population size, cull percentage, fitness direction
//! - [`Population`]: Seeds, evaluates, culls, breeds and mutates its members
//! - [`Ranking`]: Direction-aware fitness order shared by cull and selection
//! - [`PopulationStats`]: Fitness summary of the current members
//!
//! # Example
//!
//! ```
//! use u_species::population::{Chromosome, Population, PopulationConfig};
//!
//! #[derive(Clone)]
//! struct Bits { genes: Vec<bool>, fitness: Option<f64> }
//!
//! impl Chromosome for Bits {
//!     type Fitness = f64;
//!     fn fitness(&self) -> Option<f64> { self.fitness }
//!     fn set_fitness(&mut self, f: f64) { self.fitness = Some(f); }
//! }
//!
//! # futures::executor::block_on(async {
//! let config = PopulationConfig::default().with_population_size(16).with_seed(1);
//! let mut population: Population<Bits> = Population::new(config)?;
//!
//! population
//!     .seed(|| async { anyhow::Ok(Bits { genes: vec![false; 8], fitness: None }) })
//!     .await?;
//! population
//!     .calculate_fitness(|b: &Bits| {
//!         let ones = b.genes.iter().filter(|&&g| g).count() as f64;
//!         async move { anyhow::Ok(ones) }
//!     })
//!     .await?;
//! population.cull();
//! population
//!     .fill_by_breeding(|a: &Bits, b: &Bits| {
//!         let mut genes = a.genes[..4].to_vec();
//!         genes.extend_from_slice(&b.genes[4..]);
//!         async move { anyhow::Ok(Bits { genes, fitness: None }) }
//!     })
//!     .await?;
//! population.increment_generation();
//!
//! assert_eq!(population.len(), 16);
//! # Ok::<(), u_species::population::PopulationError>(())
//! # }).unwrap();
//! ```

mod config;
mod engine;
mod error;
mod ranking;
mod selection;
mod stats;
mod strategy;
mod types;

pub use config::PopulationConfig;
pub use engine::Population;
pub use error::{PopulationError, Result};
pub use ranking::Ranking;
pub use stats::PopulationStats;
pub use strategy::{Breeder, Evaluator, Mutator, Seeder};
pub use types::{Chromosome, Fitness};
