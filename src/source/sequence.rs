//! Deterministic random source.

use super::RandomSource;

/// A [`RandomSource`] that replays a fixed list of unit samples.
///
/// Samples are clamped into `[0, 1]` and cycled once exhausted. An empty
/// list yields `0.5` (a zero delta for symmetric ranges).
#[derive(Debug, Clone)]
pub struct SequenceSource {
    samples: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    /// Create a source replaying `samples` in order.
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        Self {
            samples: samples.into_iter().map(|s| s.clamp(0.0, 1.0)).collect(),
            position: 0,
        }
    }

    /// A source that always returns the same sample.
    pub fn constant(sample: f64) -> Self {
        Self::new([sample])
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.5;
        }
        let sample = self.samples[self.position % self.samples.len()];
        self.position += 1;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_samples() {
        let mut source = SequenceSource::new([0.0, 1.0]);
        assert_eq!(source.uniform(-1.0, 1.0), -1.0);
        assert_eq!(source.uniform(-1.0, 1.0), 1.0);
        assert_eq!(source.uniform(-1.0, 1.0), -1.0);
    }

    #[test]
    fn test_out_of_range_samples_clamped() {
        let mut source = SequenceSource::new([4.0, -2.0]);
        assert_eq!(source.next_unit(), 1.0);
        assert_eq!(source.next_unit(), 0.0);
    }

    #[test]
    fn test_empty_is_midpoint() {
        let mut source = SequenceSource::new(Vec::new());
        assert_eq!(source.uniform(-20.0, 20.0), 0.0);
    }
}
