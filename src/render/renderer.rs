//! Projection of readings and history onto a [`Surface`].

use super::chart::{ChartFrame, CHARTS};
use super::format::format_value;
use super::{Surface, TableRow};
use crate::data::{CurrentReadings, History, Metric};

/// Maximum number of rows visible in the history table.
pub const TABLE_CAPACITY: usize = 10;

impl TableRow {
    /// Format a snapshot of all six metrics.
    pub fn new(time: impl Into<String>, readings: &CurrentReadings) -> Self {
        Self {
            time: time.into(),
            cells: Metric::ALL.map(|m| format_value(m, readings.get(m))),
        }
    }
}

/// Write every metric's formatted value and the shared timestamp.
pub fn render_current_values<S: Surface + ?Sized>(
    surface: &mut S,
    readings: &CurrentReadings,
    timestamp: &str,
) {
    for metric in Metric::ALL {
        surface.write_value(metric, format_value(metric, readings.get(metric)));
        surface.write_updated(metric, timestamp.to_string());
    }
}

/// Insert a row at the top of the table, then trim from the bottom.
pub fn render_table_row<S: Surface + ?Sized>(
    surface: &mut S,
    timestamp: &str,
    readings: &CurrentReadings,
) {
    surface.insert_row_top(TableRow::new(timestamp, readings));
    while surface.row_count() > TABLE_CAPACITY {
        surface.remove_bottom_row();
    }
}

/// Redraw both charts from the history.
pub fn render_charts<S: Surface + ?Sized>(surface: &mut S, history: &History) {
    let series = history.as_chart_series();
    for spec in &CHARTS {
        if let Some(frame) = ChartFrame::from_series(spec, series) {
            surface.draw_chart(spec, frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ChartId, DashboardSurface};

    #[test]
    fn test_render_current_values() {
        let mut surface = DashboardSurface::new();
        render_current_values(&mut surface, &CurrentReadings::seeded(), "12:00:00");

        assert_eq!(surface.value(Metric::Temperature), Some("24.0°C"));
        assert_eq!(surface.value(Metric::Moisture), Some("65%"));
        assert_eq!(surface.value(Metric::Humidity), Some("72%"));
        assert_eq!(surface.value(Metric::Light), Some("850 lux"));
        assert_eq!(surface.value(Metric::Ph), Some("6.8"));
        assert_eq!(surface.value(Metric::Wind), Some("12 km/h"));
        for metric in Metric::ALL {
            assert_eq!(surface.updated(metric), Some("12:00:00"));
        }
    }

    #[test]
    fn test_table_row_formatting() {
        let readings = CurrentReadings {
            ph: 6.83,
            light: 850.4,
            ..CurrentReadings::seeded()
        };
        let row = TableRow::new("09:15:00", &readings);
        assert_eq!(row.time, "09:15:00");
        assert_eq!(row.cells, ["24.0°C", "65%", "72%", "850 lux", "6.8", "12 km/h"]);
    }

    #[test]
    fn test_table_capped_newest_first() {
        let mut surface = DashboardSurface::new();
        for i in 0..25 {
            render_table_row(&mut surface, &format!("t{i}"), &CurrentReadings::seeded());
            assert!(surface.row_count() <= TABLE_CAPACITY);
            assert_eq!(surface.rows().front().map(|r| r.time.as_str()), Some(format!("t{i}").as_str()));
        }

        let times: Vec<&str> = surface.rows().iter().map(|r| r.time.as_str()).collect();
        assert_eq!(
            times,
            ["t24", "t23", "t22", "t21", "t20", "t19", "t18", "t17", "t16", "t15"]
        );
    }

    #[test]
    fn test_render_charts_shares_labels() {
        let mut history = History::new();
        history.append("a", &CurrentReadings::seeded());
        history.append("b", &CurrentReadings::seeded());

        let mut surface = DashboardSurface::new();
        render_charts(&mut surface, &history);

        let a = surface.chart(ChartId::TempHumidity).unwrap();
        let b = surface.chart(ChartId::MoisturePh).unwrap();
        assert_eq!(a.labels, ["a", "b"]);
        assert_eq!(a.labels, b.labels);
        assert_eq!(a.left, [24.0, 24.0]);
        assert_eq!(a.right, [72.0, 72.0]);
        assert_eq!(b.left, [65.0, 65.0]);
        assert_eq!(b.right, [6.8, 6.8]);
    }
}
