//! Sliding-window history feeding the charts.

use std::collections::VecDeque;

use super::metric::Metric;
use super::readings::CurrentReadings;

/// Maximum number of samples kept per series.
pub const HISTORY_CAPACITY: usize = 20;

/// Fixed-capacity history of the charted metrics.
///
/// Holds five parallel sequences (timestamp labels, temperature, humidity,
/// moisture, pH) that share one index. They are only mutated together, so
/// their lengths are always equal. Light and wind are not charted and are
/// not recorded here.
#[derive(Debug, Clone, Default)]
pub struct History {
    labels: VecDeque<String>,
    temperature: VecDeque<f64>,
    humidity: VecDeque<f64>,
    moisture: VecDeque<f64>,
    ph: VecDeque<f64>,
}

/// Borrowed view of the history, as consumed by chart rendering.
#[derive(Debug, Clone, Copy)]
pub struct ChartSeries<'a> {
    pub labels: &'a VecDeque<String>,
    pub temperature: &'a VecDeque<f64>,
    pub humidity: &'a VecDeque<f64>,
    pub moisture: &'a VecDeque<f64>,
    pub ph: &'a VecDeque<f64>,
}

impl<'a> ChartSeries<'a> {
    /// Number of samples in every series.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The series recorded for `metric`, or `None` if it is not charted.
    pub fn get(&self, metric: Metric) -> Option<&'a VecDeque<f64>> {
        match metric {
            Metric::Temperature => Some(self.temperature),
            Metric::Humidity => Some(self.humidity),
            Metric::Moisture => Some(self.moisture),
            Metric::Ph => Some(self.ph),
            Metric::Light | Metric::Wind => None,
        }
    }
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one sample and drop the oldest once over capacity.
    ///
    /// Values are stored at chart precision (see [`CurrentReadings::snapshot`]).
    pub fn append(&mut self, label: impl Into<String>, readings: &CurrentReadings) {
        let sample = readings.snapshot();

        self.labels.push_back(label.into());
        self.temperature.push_back(sample.temperature);
        self.humidity.push_back(sample.humidity);
        self.moisture.push_back(sample.moisture);
        self.ph.push_back(sample.ph);

        if self.labels.len() > HISTORY_CAPACITY {
            self.labels.pop_front();
            self.temperature.pop_front();
            self.humidity.pop_front();
            self.moisture.pop_front();
            self.ph.pop_front();
        }
    }

    /// View all series for chart rendering.
    pub fn as_chart_series(&self) -> ChartSeries<'_> {
        ChartSeries {
            labels: &self.labels,
            temperature: &self.temperature,
            humidity: &self.humidity,
            moisture: &self.moisture,
            ph: &self.ph,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }

    /// Most recent timestamp label, if any.
    pub fn latest_label(&self) -> Option<&str> {
        self.labels.back().map(String::as_str)
    }
}
