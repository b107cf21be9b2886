//! Simulation state: current readings and chart history.
//!
//! ## Submodules
//!
//! - [`metric`]: The six metrics with their ranges, walk steps and seeds
//! - [`readings`]: [`CurrentReadings`] and the bounded random walk
//! - [`history`]: Fixed-capacity [`History`] feeding the charts
//!
//! ## Data Flow
//!
//! ```text
//! RandomSource
//!        │
//!        ▼
//! CurrentReadings::advance()
//!        │
//!        ├──▶ Renderer (value cards, table row)
//!        │
//!        └──▶ History::append() (for charts)
//! ```

pub mod history;
pub mod metric;
pub mod readings;

pub use history::{ChartSeries, History, HISTORY_CAPACITY};
pub use metric::Metric;
pub use readings::CurrentReadings;

/// Process-wide simulation state.
///
/// Owned by the application and passed explicitly to the scheduler and
/// renderer. Nothing else mutates it.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    pub readings: CurrentReadings,
    pub history: History,
    /// Number of live ticks completed since startup.
    pub ticks: u64,
}

impl Simulation {
    /// Fresh state with seed readings and an empty history.
    pub fn new() -> Self {
        Self::default()
    }
}
