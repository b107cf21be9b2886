//! Current sensor readings and their bounded random walk.

use super::metric::{round_to, Metric};
use crate::source::RandomSource;

/// The latest value of every metric.
///
/// Each value always lies within [`Metric::range`]: every mutation clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentReadings {
    pub temperature: f64,
    pub moisture: f64,
    pub humidity: f64,
    pub light: f64,
    pub ph: f64,
    pub wind: f64,
}

impl Default for CurrentReadings {
    fn default() -> Self {
        Self::seeded()
    }
}

impl CurrentReadings {
    /// Readings at their fixed start values.
    pub fn seeded() -> Self {
        Self::from_fn(Metric::seed)
    }

    /// Readings drawn uniformly inside each metric's range.
    ///
    /// Used for synthetic history at startup.
    pub fn random_within_ranges(rng: &mut dyn RandomSource) -> Self {
        Self::from_fn(|metric| {
            let range = metric.range();
            rng.uniform(*range.start(), *range.end())
        })
    }

    fn from_fn(mut f: impl FnMut(Metric) -> f64) -> Self {
        let mut readings = Self {
            temperature: 0.0,
            moisture: 0.0,
            humidity: 0.0,
            light: 0.0,
            ph: 0.0,
            wind: 0.0,
        };
        for metric in Metric::ALL {
            readings.set(metric, f(metric));
        }
        readings
    }

    /// Value of a single metric.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Moisture => self.moisture,
            Metric::Humidity => self.humidity,
            Metric::Light => self.light,
            Metric::Ph => self.ph,
            Metric::Wind => self.wind,
        }
    }

    /// Set a metric, clamped into its range.
    pub fn set(&mut self, metric: Metric, value: f64) {
        let value = metric.clamp(value);
        match metric {
            Metric::Temperature => self.temperature = value,
            Metric::Moisture => self.moisture = value,
            Metric::Humidity => self.humidity = value,
            Metric::Light => self.light = value,
            Metric::Ph => self.ph = value,
            Metric::Wind => self.wind = value,
        }
    }

    /// Advance every metric by one step of the bounded random walk.
    ///
    /// Metrics are drawn in [`Metric::ALL`] order, one sample each.
    pub fn advance(&mut self, rng: &mut dyn RandomSource) {
        for metric in Metric::ALL {
            let step = metric.step();
            let delta = rng.uniform(-step, step);
            self.set(metric, self.get(metric) + delta);
        }
    }

    /// Copy with charted metrics rounded to their history precision.
    pub fn snapshot(&self) -> Self {
        let mut rounded = *self;
        for metric in Metric::ALL {
            if let Some(decimals) = metric.chart_precision() {
                rounded.set(metric, round_to(self.get(metric), decimals));
            }
        }
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RngSource, SequenceSource};

    #[test]
    fn test_seeded_values() {
        let r = CurrentReadings::seeded();
        assert_eq!(r.temperature, 24.0);
        assert_eq!(r.moisture, 65.0);
        assert_eq!(r.humidity, 72.0);
        assert_eq!(r.light, 850.0);
        assert_eq!(r.ph, 6.8);
        assert_eq!(r.wind, 12.0);
    }

    #[test]
    fn test_advance_applies_full_step() {
        let mut r = CurrentReadings::seeded();
        // 1.0 maps to +step for every metric
        r.advance(&mut SequenceSource::constant(1.0));
        assert_eq!(r.temperature, 24.5);
        assert_eq!(r.moisture, 66.0);
        assert_eq!(r.humidity, 72.5);
        assert_eq!(r.light, 870.0);
        assert!((r.ph - 6.85).abs() < 1e-9);
        assert_eq!(r.wind, 13.0);
    }

    #[test]
    fn test_advance_clamps_at_maximum() {
        let mut r = CurrentReadings::seeded();
        r.temperature = 30.0;
        r.light = 1195.0;
        r.advance(&mut SequenceSource::constant(1.0));
        assert_eq!(r.temperature, 30.0);
        assert_eq!(r.light, 1200.0);
    }

    #[test]
    fn test_advance_clamps_at_minimum() {
        let mut r = CurrentReadings::seeded();
        r.ph = 6.0;
        r.wind = 5.2;
        r.advance(&mut SequenceSource::constant(0.0));
        assert_eq!(r.ph, 6.0);
        assert_eq!(r.wind, 5.0);
    }

    #[test]
    fn test_range_invariant_over_many_ticks() {
        let mut rng = RngSource::seeded(1234);
        let mut r = CurrentReadings::seeded();
        for _ in 0..5_000 {
            r.advance(&mut rng);
            for metric in Metric::ALL {
                assert!(metric.range().contains(&r.get(metric)), "{metric} escaped range");
            }
        }
    }

    #[test]
    fn test_snapshot_rounds_charted_metrics_only() {
        let r = CurrentReadings {
            temperature: 24.26,
            moisture: 65.44,
            humidity: 72.45,
            light: 850.4,
            ph: 6.834,
            wind: 12.7,
        };
        let s = r.snapshot();
        assert_eq!(s.temperature, 24.3);
        assert_eq!(s.moisture, 65.4);
        assert_eq!(s.ph, 6.83);
        assert_eq!(s.light, 850.4);
        assert_eq!(s.wind, 12.7);
    }

    #[test]
    fn test_random_within_ranges() {
        let low = CurrentReadings::random_within_ranges(&mut SequenceSource::constant(0.0));
        let high = CurrentReadings::random_within_ranges(&mut SequenceSource::constant(1.0));
        for metric in Metric::ALL {
            assert_eq!(low.get(metric), *metric.range().start());
            assert_eq!(high.get(metric), *metric.range().end());
        }
    }
}
