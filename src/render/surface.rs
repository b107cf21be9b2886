//! In-memory surface drawn by the terminal UI.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::chart::{ChartFrame, ChartId, ChartSpec};
use super::{Surface, TableRow, Target};
use crate::data::Metric;

/// Last data drawn into a chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartState {
    pub labels: Vec<String>,
    pub left: Vec<f64>,
    pub right: Vec<f64>,
    /// Number of redraws since startup.
    pub redraws: u64,
}

/// The dashboard's display state.
///
/// Holds the text slots, table rows and chart data the ratatui views
/// render from. Only targets registered at construction are addressable;
/// writes to anything else are dropped.
#[derive(Debug, Clone)]
pub struct DashboardSurface {
    targets: BTreeSet<Target>,
    values: BTreeMap<Metric, String>,
    updated: BTreeMap<Metric, String>,
    rows: VecDeque<TableRow>,
    charts: BTreeMap<ChartId, ChartState>,
}

impl Default for DashboardSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardSurface {
    /// A surface exposing every dashboard target.
    pub fn new() -> Self {
        Self::with_targets(Target::all())
    }

    /// A surface exposing only the given targets.
    pub fn with_targets(targets: impl IntoIterator<Item = Target>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            values: BTreeMap::new(),
            updated: BTreeMap::new(),
            rows: VecDeque::new(),
            charts: BTreeMap::new(),
        }
    }

    /// Formatted current value of a metric.
    pub fn value(&self, metric: Metric) -> Option<&str> {
        self.values.get(&metric).map(String::as_str)
    }

    /// "Last updated" text of a metric.
    pub fn updated(&self, metric: Metric) -> Option<&str> {
        self.updated.get(&metric).map(String::as_str)
    }

    /// Table rows, top first.
    pub fn rows(&self) -> &VecDeque<TableRow> {
        &self.rows
    }

    pub fn chart(&self, id: ChartId) -> Option<&ChartState> {
        self.charts.get(&id)
    }
}

impl Surface for DashboardSurface {
    fn has_target(&self, target: Target) -> bool {
        self.targets.contains(&target)
    }

    fn write_value(&mut self, metric: Metric, text: String) {
        if self.has_target(Target::Value(metric)) {
            self.values.insert(metric, text);
        }
    }

    fn write_updated(&mut self, metric: Metric, text: String) {
        if self.has_target(Target::Updated(metric)) {
            self.updated.insert(metric, text);
        }
    }

    fn insert_row_top(&mut self, row: TableRow) {
        if self.has_target(Target::Table) {
            self.rows.push_front(row);
        }
    }

    fn remove_bottom_row(&mut self) {
        self.rows.pop_back();
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn draw_chart(&mut self, spec: &ChartSpec, frame: ChartFrame<'_>) {
        if !self.has_target(Target::Chart(spec.id)) {
            return;
        }
        let state = self.charts.entry(spec.id).or_default();
        state.labels.clear();
        state.labels.extend(frame.labels.iter().cloned());
        state.left.clear();
        state.left.extend(frame.left.iter().copied());
        state.right.clear();
        state.right.extend(frame.right.iter().copied());
        state.redraws += 1;
    }
}
