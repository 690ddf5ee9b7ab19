//! Caller-supplied strategy functions.
//!
//! Every domain-specific step (creating, scoring, recombining and perturbing
//! chromosomes) is delegated to one of the traits below. Each returns a boxed
//! future so implementations are free to do I/O, call out to other services,
//! or just compute inline.
//!
//! Closures returning a future implement the traits directly:
//!
//! ```
//! use u_species::population::{Chromosome, Evaluator};
//!
//! struct Bits { genes: Vec<bool>, fitness: Option<f64> }
//!
//! impl Chromosome for Bits {
//!     type Fitness = f64;
//!     fn fitness(&self) -> Option<f64> { self.fitness }
//!     fn set_fitness(&mut self, f: f64) { self.fitness = Some(f); }
//! }
//!
//! fn takes_evaluator<E: Evaluator<Bits>>(_: E) {}
//!
//! takes_evaluator(|bits: &Bits| {
//!     let ones = bits.genes.iter().filter(|&&b| b).count() as f64;
//!     async move { anyhow::Ok(ones) }
//! });
//! ```
//!
//! Closure futures must be `'static`: copy what is needed out of the borrowed
//! chromosome before the `async move` block. Implement the trait on a type
//! when the future has to borrow.

use super::types::Chromosome;
use futures::future::BoxFuture;
use std::future::Future;

/// Produces one freshly initialized chromosome.
///
/// Called `population_size` times concurrently by
/// [`Population::seed`](super::Population::seed); calls must not share
/// mutable state.
pub trait Seeder<C>: Send + Sync {
    fn seed(&self) -> BoxFuture<'_, anyhow::Result<C>>;
}

/// Objective function returning the fitness of a chromosome.
///
/// Must not mutate gene data. May read, but not rely on, an existing
/// fitness value.
pub trait Evaluator<C: Chromosome>: Send + Sync {
    fn evaluate<'a>(&'a self, chromosome: &'a C) -> BoxFuture<'a, anyhow::Result<C::Fitness>>;
}

/// Produces one offspring from two parents without mutating them.
///
/// Both parents may be the same member.
pub trait Breeder<C>: Send + Sync {
    fn breed<'a>(&'a self, first: &'a C, second: &'a C) -> BoxFuture<'a, anyhow::Result<C>>;
}

/// Produces the mutated replacement for a chromosome.
pub trait Mutator<C>: Send + Sync {
    fn mutate<'a>(&'a self, chromosome: &'a C) -> BoxFuture<'a, anyhow::Result<C>>;
}

impl<C, F, Fut> Seeder<C> for F
where
    C: 'static,
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<C>> + Send + 'static,
{
    fn seed(&self) -> BoxFuture<'_, anyhow::Result<C>> {
        Box::pin(self())
    }
}

impl<C, F, Fut> Evaluator<C> for F
where
    C: Chromosome,
    F: Fn(&C) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<C::Fitness>> + Send + 'static,
{
    fn evaluate<'a>(&'a self, chromosome: &'a C) -> BoxFuture<'a, anyhow::Result<C::Fitness>> {
        Box::pin(self(chromosome))
    }
}

impl<C, F, Fut> Breeder<C> for F
where
    C: 'static,
    F: Fn(&C, &C) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<C>> + Send + 'static,
{
    fn breed<'a>(&'a self, first: &'a C, second: &'a C) -> BoxFuture<'a, anyhow::Result<C>> {
        Box::pin(self(first, second))
    }
}

impl<C, F, Fut> Mutator<C> for F
where
    C: 'static,
    F: Fn(&C) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<C>> + Send + 'static,
{
    fn mutate<'a>(&'a self, chromosome: &'a C) -> BoxFuture<'a, anyhow::Result<C>> {
        Box::pin(self(chromosome))
    }
}
