//! The six simulated metrics and their static properties.

use std::fmt;
use std::ops::RangeInclusive;

/// A sensor metric shown on the dashboard.
///
/// Variants are listed in display order (cards and table columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    /// Air temperature in °C.
    Temperature,
    /// Soil moisture in %.
    Moisture,
    /// Relative humidity in %.
    Humidity,
    /// Light intensity in lux.
    Light,
    /// Soil pH.
    Ph,
    /// Wind speed in km/h.
    Wind,
}

impl Metric {
    /// All metrics in display order.
    pub const ALL: [Metric; 6] = [
        Metric::Temperature,
        Metric::Moisture,
        Metric::Humidity,
        Metric::Light,
        Metric::Ph,
        Metric::Wind,
    ];

    /// The closed interval a reading is clamped into.
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Metric::Temperature => 20.0..=30.0,
            Metric::Moisture => 50.0..=80.0,
            Metric::Humidity => 60.0..=85.0,
            Metric::Light => 500.0..=1200.0,
            Metric::Ph => 6.0..=7.5,
            Metric::Wind => 5.0..=20.0,
        }
    }

    /// Half-width of the symmetric random walk step.
    pub fn step(self) -> f64 {
        match self {
            Metric::Temperature => 0.5,
            Metric::Moisture => 1.0,
            Metric::Humidity => 0.5,
            Metric::Light => 20.0,
            Metric::Ph => 0.05,
            Metric::Wind => 1.0,
        }
    }

    /// Value the live readings start from.
    pub fn seed(self) -> f64 {
        match self {
            Metric::Temperature => 24.0,
            Metric::Moisture => 65.0,
            Metric::Humidity => 72.0,
            Metric::Light => 850.0,
            Metric::Ph => 6.8,
            Metric::Wind => 12.0,
        }
    }

    /// Decimal places kept when a value is stored in chart history.
    ///
    /// `None` for metrics that are not charted.
    pub fn chart_precision(self) -> Option<u32> {
        match self {
            Metric::Temperature | Metric::Moisture | Metric::Humidity => Some(1),
            Metric::Ph => Some(2),
            Metric::Light | Metric::Wind => None,
        }
    }

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::Moisture => "Soil Moisture",
            Metric::Humidity => "Humidity",
            Metric::Light => "Light",
            Metric::Ph => "pH Level",
            Metric::Wind => "Wind Speed",
        }
    }

    /// Clamp a value into this metric's range.
    pub fn clamp(self, value: f64) -> f64 {
        let range = self.range();
        value.clamp(*range.start(), *range.end())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fractional digits needed to print any `f64` exactly.
const EXACT_DIGITS: usize = 1074;

/// Format `value` with `decimals` fractional digits.
///
/// Rounding works on the exact binary value, so `6.85` (stored as
/// `6.8499…`) gives `"6.8"`. Only exact ties such as `2.5` round away from
/// zero, where `format!` alone would round them to even.
pub fn to_fixed(value: f64, decimals: u32) -> String {
    let decimals = decimals as usize;
    if is_exact_tie(value, decimals) {
        // The next float away from zero sits just past the tie.
        let nudged = f64::from_bits(value.to_bits() + 1);
        return format!("{:.*}", decimals, nudged);
    }
    format!("{:.*}", decimals, value)
}

/// Round to `decimals` places, consistent with [`to_fixed`].
pub fn round_to(value: f64, decimals: u32) -> f64 {
    to_fixed(value, decimals).parse().unwrap_or(value)
}

fn is_exact_tie(value: f64, decimals: usize) -> bool {
    if !value.is_finite() || value == 0.0 {
        return false;
    }
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let Some(rest) = exact.split_once('.').and_then(|(_, fraction)| fraction.get(decimals..)) else {
        return false;
    };
    let mut rest = rest.chars();
    rest.next() == Some('5') && rest.all(|c| c == '0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_within_range() {
        for metric in Metric::ALL {
            assert!(metric.range().contains(&metric.seed()), "{metric}");
        }
    }

    #[test]
    fn test_clamp_never_wraps() {
        assert_eq!(Metric::Temperature.clamp(31.2), 30.0);
        assert_eq!(Metric::Temperature.clamp(19.0), 20.0);
        assert_eq!(Metric::Ph.clamp(6.5), 6.5);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(6.8349, 2), 6.83);
        assert_eq!(round_to(24.06, 1), 24.1);
        assert_eq!(round_to(850.5, 0), 851.0);
        assert_eq!(round_to(6.85, 1), 6.8);
    }

    #[test]
    fn test_to_fixed_uses_exact_binary_value() {
        // 6.85 and 1.005 are stored just below the written decimal.
        assert_eq!(to_fixed(6.85, 1), "6.8");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(6.8349, 2), "6.83");
    }

    #[test]
    fn test_to_fixed_exact_ties_round_away_from_zero() {
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(7.25, 1), "7.3");
        assert_eq!(to_fixed(6.75, 1), "6.8");
        assert_eq!(to_fixed(24.0, 1), "24.0");
    }
}
