//! Write-only projection of the simulation onto a display surface.
//!
//! The renderer formats values and enforces table ordering, but never
//! draws anything itself. It writes through the [`Surface`] trait, which
//! the terminal UI implements with [`DashboardSurface`] and tests
//! implement with whatever recording surface they need.
//!
//! ```text
//! Simulation ──▶ renderer ──▶ Surface ──▶ ui (ratatui)
//! ```

mod chart;
mod format;
mod renderer;
mod surface;

pub use chart::{AxisSide, ChartFrame, ChartId, ChartSpec, SeriesColor, SeriesSpec, CHARTS};
pub use format::{fixed, format_value};
pub use renderer::{render_charts, render_current_values, render_table_row, TABLE_CAPACITY};
pub use surface::{ChartState, DashboardSurface};

use std::fmt;

use crate::data::Metric;

/// An addressable element of the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Target {
    /// Current value of a metric.
    Value(Metric),
    /// "Last updated" timestamp of a metric.
    Updated(Metric),
    /// The scrolling history table.
    Table,
    /// One of the line charts.
    Chart(ChartId),
}

impl Target {
    /// Every target the dashboard writes to.
    pub fn all() -> Vec<Target> {
        let mut targets = Vec::with_capacity(2 * Metric::ALL.len() + 1 + CHARTS.len());
        targets.extend(Metric::ALL.iter().map(|&m| Target::Value(m)));
        targets.extend(Metric::ALL.iter().map(|&m| Target::Updated(m)));
        targets.push(Target::Table);
        targets.extend(CHARTS.iter().map(|c| Target::Chart(c.id)));
        targets
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Value(m) => write!(f, "{} value", m),
            Target::Updated(m) => write!(f, "{} timestamp", m),
            Target::Table => f.write_str("history table"),
            Target::Chart(id) => write!(f, "{}", id),
        }
    }
}

/// One formatted table row: a timestamp and the six metrics in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub time: String,
    pub cells: [String; 6],
}

/// The narrow interface the renderer writes through.
///
/// Implementations own layout and styling. Row content and ordering
/// policy belong to the renderer.
pub trait Surface {
    /// Whether the surface can address `target`.
    fn has_target(&self, target: Target) -> bool;

    /// Write a formatted current value.
    fn write_value(&mut self, metric: Metric, text: String);

    /// Write a "last updated" timestamp.
    fn write_updated(&mut self, metric: Metric, text: String);

    /// Insert a row above all existing rows.
    fn insert_row_top(&mut self, row: TableRow);

    /// Remove the bottom-most row, if any.
    fn remove_bottom_row(&mut self);

    /// Number of rows currently in the table.
    fn row_count(&self) -> usize;

    /// Redraw a chart from the given data.
    fn draw_chart(&mut self, spec: &ChartSpec, frame: ChartFrame<'_>);
}
