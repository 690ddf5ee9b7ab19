//! Domain-agnostic evolutionary population manager.
//!
//! Holds a generation of candidate solutions and drives it through fitness
//! evaluation, culling, breeding and mutation, delegating every
//! domain-specific step to caller-supplied async strategy functions.
//!
//! - **Population**: seeding to a target size, concurrent fitness scoring,
//!   culling by a direction-aware ranking, breeding back to size, and
//!   probabilistic mutation with atomic replacement.
//!
//! # Architecture
//!
//! The crate contains no chromosome representation and no generational
//! loop. Gene encoding, crossover and mutation mechanics, stopping criteria
//! and logging setup all belong to the consumer driving the population.
//! Futures are awaited in place, so any async executor can drive it.

pub mod population;
