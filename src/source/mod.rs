//! Random source abstraction for the simulation.
//!
//! The reading model never calls a generator directly. It draws every
//! delta through a [`RandomSource`], so production code can use a real
//! generator while tests substitute a fixed sequence and assert exact
//! clamped outputs.

mod rng;
mod sequence;

pub use rng::RngSource;
pub use sequence::SequenceSource;

use std::fmt::Debug;

/// A source of uniformly distributed samples.
///
/// # Example
///
/// ```
/// use fieldwatch::{RandomSource, SequenceSource};
///
/// let mut source = SequenceSource::new([0.5]);
/// assert_eq!(source.uniform(-1.0, 1.0), 0.0);
/// ```
pub trait RandomSource: Send + Debug {
    /// Return the next sample from `[0, 1]`.
    fn next_unit(&mut self) -> f64;

    /// Return a sample uniformly distributed over `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
