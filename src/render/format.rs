//! Display formatting for metric values.

use crate::data::metric::to_fixed;
use crate::data::Metric;

/// Format a value with its metric's display precision and unit.
///
/// Rounds the exact stored value; exact ties go away from zero.
///
/// ```
/// use fieldwatch::render::format_value;
/// use fieldwatch::Metric;
///
/// assert_eq!(format_value(Metric::Temperature, 24.0), "24.0°C");
/// assert_eq!(format_value(Metric::Light, 850.4), "850 lux");
/// ```
pub fn format_value(metric: Metric, value: f64) -> String {
    match metric {
        Metric::Temperature => format!("{}°C", fixed(value, 1)),
        Metric::Moisture | Metric::Humidity => format!("{}%", fixed(value, 0)),
        Metric::Light => format!("{} lux", fixed(value, 0)),
        Metric::Ph => fixed(value, 1),
        Metric::Wind => format!("{} km/h", fixed(value, 0)),
    }
}

/// Fixed-point formatting, see [`to_fixed`].
pub fn fixed(value: f64, decimals: u32) -> String {
    to_fixed(value, decimals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_each_metric() {
        assert_eq!(format_value(Metric::Temperature, 24.0), "24.0°C");
        assert_eq!(format_value(Metric::Temperature, 24.46), "24.5°C");
        assert_eq!(format_value(Metric::Moisture, 65.4), "65%");
        assert_eq!(format_value(Metric::Humidity, 72.5), "73%");
        assert_eq!(format_value(Metric::Light, 850.4), "850 lux");
        assert_eq!(format_value(Metric::Ph, 6.83), "6.8");
        assert_eq!(format_value(Metric::Ph, 6.85), "6.8");
        assert_eq!(format_value(Metric::Wind, 12.0), "12 km/h");
    }

    #[test]
    fn test_format_is_idempotent() {
        for metric in Metric::ALL {
            let value = metric.seed() + metric.step() / 3.0;
            assert_eq!(format_value(metric, value), format_value(metric, value));
        }
    }

    #[test]
    fn test_fixed_rounds_half_up() {
        assert_eq!(fixed(0.5, 0), "1");
        assert_eq!(fixed(2.5, 0), "3");
        assert_eq!(fixed(7.25, 1), "7.3");
    }
}
