//! Core trait definitions for the population engine.
//!
//! [`Fitness`] and [`Chromosome`] define the contract between the generic
//! [`Population`](super::Population) and the caller's solution
//! representation. The engine only ever reads and writes the fitness slot;
//! gene data stays opaque.

use std::cmp::Ordering;

/// Marker trait for fitness values.
///
/// Fitness must be cheaply copyable and totally ordered through
/// [`total_order`](Fitness::total_order). Whether lower or higher values are
/// better is decided by the population's
/// [`Ranking`](super::Ranking), not by the fitness type.
///
/// Built-in implementations exist for `f64`, `f32` and the common integer
/// types.
pub trait Fitness: Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Total order over fitness values.
    ///
    /// Floats use IEEE 754 `totalOrder`, so a NaN score never breaks a sort.
    fn total_order(&self, other: &Self) -> Ordering;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

macro_rules! impl_integer_fitness {
    ($($t:ty),*) => {
        $(
            impl Fitness for $t {
                fn total_order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer_fitness!(i32, i64, u32, u64, usize);

/// A candidate solution held by a [`Population`](super::Population).
///
/// A chromosome starts out without a fitness. The engine stores one via
/// [`set_fitness`](Chromosome::set_fitness) after evaluation, and never
/// touches anything else.
///
/// # Implementing
///
/// ```
/// use u_species::population::Chromosome;
///
/// struct Route {
///     stops: Vec<usize>,
///     fitness: Option<f64>,
/// }
///
/// impl Chromosome for Route {
///     type Fitness = f64;
///     fn fitness(&self) -> Option<f64> { self.fitness }
///     fn set_fitness(&mut self, f: f64) { self.fitness = Some(f); }
/// }
/// ```
pub trait Chromosome: Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness, or `None` if it was never evaluated.
    fn fitness(&self) -> Option<Self::Fitness>;

    /// Sets the fitness of this chromosome.
    ///
    /// Called by the engine after an evaluator settles.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_total_order_handles_nan() {
        assert_eq!(1.0f64.total_order(&2.0), Ordering::Less);
        assert_eq!(f64::NAN.total_order(&f64::NAN), Ordering::Equal);
        assert_eq!(1.0f64.total_order(&f64::NAN), Ordering::Less);
        assert_eq!(2.5f32.total_order(&2.5), Ordering::Equal);
    }

    /// Fitness type ordered only through `total_order`.
    #[derive(Clone, Copy, Debug)]
    struct Rank(u8);

    impl Fitness for Rank {
        fn total_order(&self, other: &Self) -> Ordering {
            self.0.cmp(&other.0)
        }

        fn to_f64(self) -> f64 {
            self.0 as f64
        }
    }

    #[test]
    fn test_fitness_without_partial_ord() {
        let ranking = super::super::Ranking::minimize();
        assert!(ranking.is_better(&Rank(1), &Rank(4)));
        assert_eq!(ranking.compare(&Rank(2), &Rank(2)), Ordering::Equal);
        assert_eq!(Rank(9).to_f64(), 9.0);
    }

    #[test]
    fn test_integer_fitness() {
        assert_eq!(3i64.total_order(&-1), Ordering::Greater);
        assert_eq!(7usize.to_f64(), 7.0);
        assert_eq!(u32::MAX.to_f64(), u32::MAX as f64);
    }
}
