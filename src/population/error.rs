//! Population error types.

use thiserror::Error;

/// Errors surfaced by [`Population`](super::Population) operations.
///
/// Strategy failures carry the caller's error as their `source`. The engine
/// never retries.
#[derive(Error, Debug)]
pub enum PopulationError {
    #[error("invalid population config: {0}")]
    InvalidConfig(String),

    #[error("mutation chance must be within 0..=1, got {0}")]
    InvalidMutationChance(f64),

    #[error("population has no members to select from")]
    Empty,

    #[error("seed strategy failed: {0}")]
    Seed(#[source] anyhow::Error),

    #[error("fitness strategy failed: {0}")]
    Fitness(#[source] anyhow::Error),

    #[error("breed strategy failed: {0}")]
    Breed(#[source] anyhow::Error),

    #[error("mutate strategy failed: {0}")]
    Mutate(#[source] anyhow::Error),
}

/// Result alias for population operations.
pub type Result<T> = std::result::Result<T, PopulationError>;
