//! Chart descriptions shared by the renderer and the terminal UI.

use std::collections::VecDeque;
use std::fmt;

use crate::data::{ChartSeries, Metric};

/// Identifies one of the two dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartId {
    /// Temperature (left) and humidity (right).
    TempHumidity,
    /// Soil moisture (left) and pH (right).
    MoisturePh,
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartId::TempHumidity => f.write_str("temperature/humidity chart"),
            ChartId::MoisturePh => f.write_str("moisture/pH chart"),
        }
    }
}

/// Which y axis a series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

/// Colour identity of a series. The surface picks the exact hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Red,
    Blue,
    Green,
    Purple,
}

/// One plotted series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSpec {
    pub metric: Metric,
    /// Legend and axis title.
    pub label: &'static str,
    pub side: AxisSide,
    pub color: SeriesColor,
}

/// A dual-axis line chart over the shared timestamp axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSpec {
    pub id: ChartId,
    pub title: &'static str,
    pub left: SeriesSpec,
    pub right: SeriesSpec,
}

/// The two dashboard charts. Constant, so axis labels and colours never
/// change between redraws.
pub const CHARTS: [ChartSpec; 2] = [
    ChartSpec {
        id: ChartId::TempHumidity,
        title: "Temperature & Humidity",
        left: SeriesSpec {
            metric: Metric::Temperature,
            label: "Temperature (°C)",
            side: AxisSide::Left,
            color: SeriesColor::Red,
        },
        right: SeriesSpec {
            metric: Metric::Humidity,
            label: "Humidity (%)",
            side: AxisSide::Right,
            color: SeriesColor::Blue,
        },
    },
    ChartSpec {
        id: ChartId::MoisturePh,
        title: "Soil Moisture & pH",
        left: SeriesSpec {
            metric: Metric::Moisture,
            label: "Moisture (%)",
            side: AxisSide::Left,
            color: SeriesColor::Green,
        },
        right: SeriesSpec {
            metric: Metric::Ph,
            label: "pH Level",
            side: AxisSide::Right,
            color: SeriesColor::Purple,
        },
    },
];

impl ChartSpec {
    /// Look up a chart by id.
    pub fn get(id: ChartId) -> &'static ChartSpec {
        match id {
            ChartId::TempHumidity => &CHARTS[0],
            ChartId::MoisturePh => &CHARTS[1],
        }
    }
}

/// Data for a single chart redraw, borrowed from the history.
#[derive(Debug, Clone, Copy)]
pub struct ChartFrame<'a> {
    pub labels: &'a VecDeque<String>,
    pub left: &'a VecDeque<f64>,
    pub right: &'a VecDeque<f64>,
}

impl<'a> ChartFrame<'a> {
    /// Select the series a chart plots. `None` if a series is not charted.
    pub fn from_series(spec: &ChartSpec, series: ChartSeries<'a>) -> Option<Self> {
        Some(Self {
            labels: series.labels,
            left: series.get(spec.left.metric)?,
            right: series.get(spec.right.metric)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CurrentReadings, History};

    #[test]
    fn test_chart_specs_are_stable() {
        let a = ChartSpec::get(ChartId::TempHumidity);
        assert_eq!(a.left.metric, Metric::Temperature);
        assert_eq!(a.left.color, SeriesColor::Red);
        assert_eq!(a.right.metric, Metric::Humidity);
        assert_eq!(a.right.side, AxisSide::Right);

        let b = ChartSpec::get(ChartId::MoisturePh);
        assert_eq!(b.left.color, SeriesColor::Green);
        assert_eq!(b.right.metric, Metric::Ph);
        assert_eq!(b.right.color, SeriesColor::Purple);
    }

    #[test]
    fn test_frame_from_series() {
        let mut history = History::new();
        history.append("12:00:00", &CurrentReadings::seeded());
        let frame =
            ChartFrame::from_series(ChartSpec::get(ChartId::MoisturePh), history.as_chart_series())
                .unwrap();
        assert_eq!(frame.labels.len(), 1);
        assert_eq!(frame.left[0], 65.0);
        assert_eq!(frame.right[0], 6.8);
    }
}
