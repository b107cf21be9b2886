//! Startup seeding and the periodic update cycle.
//!
//! ## Submodules
//!
//! - [`clock`]: [`Clock`] abstraction for timestamp labels
//! - [`interval`]: [`RecurringTimer`] deciding when a tick is due
//! - [`headless`]: async runner driving ticks without a terminal UI
//!
//! ## Cycle
//!
//! ```text
//! Interval::poll() ──▶ CurrentReadings::advance()
//!                            │
//!                            ├──▶ render_current_values()
//!                            ├──▶ History::append()
//!                            ├──▶ render_table_row()
//!                            └──▶ render_charts()
//! ```

pub mod clock;
pub mod headless;
pub mod interval;

pub use clock::{format_label, Clock, ManualClock, SystemClock};
pub use interval::{Interval, RecurringTimer, DEFAULT_PERIOD};

use std::time::{Duration, Instant};

use chrono::{DateTime, Local, TimeDelta};
use tracing::{debug, info};

use crate::data::{CurrentReadings, Simulation};
use crate::error::{DashboardError, Result};
use crate::render::{render_charts, render_current_values, render_table_row, Surface, Target};
use crate::source::RandomSource;

/// Number of synthetic samples created at startup.
pub const SEED_POINTS: usize = 10;

/// Spacing between synthetic samples, in seconds.
pub const SEED_SPACING_SECS: i64 = 60;

/// Drives the simulation: seeds it once, then runs a cycle per timer tick.
///
/// The scheduler owns the random source, clock and timer. The simulation
/// state and surface are passed in on every call.
#[derive(Debug)]
pub struct Scheduler {
    rng: Box<dyn RandomSource>,
    clock: Box<dyn Clock>,
    timer: Interval,
    time_format: String,
}

impl Scheduler {
    /// Create a scheduler ticking every `period`.
    pub fn new(
        rng: Box<dyn RandomSource>,
        clock: Box<dyn Clock>,
        period: Duration,
        time_format: impl Into<String>,
    ) -> Self {
        Self {
            rng,
            clock,
            timer: Interval::new(period),
            time_format: time_format.into(),
        }
    }

    /// Period between ticks.
    pub fn period(&self) -> Duration {
        self.timer.period()
    }

    /// Time until the next tick is due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.timer.remaining(now)
    }

    fn label(&self, time: &DateTime<Local>) -> String {
        format_label(time, &self.time_format)
    }

    /// Seed history and table with synthetic samples and show the live readings.
    ///
    /// Fails without writing anything if the surface is missing a target.
    /// Each synthetic sample feeds both the chart history and the table, so
    /// the two agree at startup.
    pub fn initialize<S: Surface + ?Sized>(
        &mut self,
        sim: &mut Simulation,
        surface: &mut S,
    ) -> Result<()> {
        verify_surface(surface)?;

        let now = self.clock.now();
        for i in (0..SEED_POINTS).rev() {
            let time = now - TimeDelta::seconds(SEED_SPACING_SECS * i as i64);
            let label = self.label(&time);
            let sample = CurrentReadings::random_within_ranges(self.rng.as_mut());

            sim.history.append(label.clone(), &sample);
            render_table_row(surface, &label, &sample);
        }

        render_charts(surface, &sim.history);
        render_current_values(surface, &sim.readings, &self.label(&now));

        info!(
            points = sim.history.len(),
            rows = surface.row_count(),
            "Seeded dashboard history"
        );
        Ok(())
    }

    /// Run one full update cycle.
    pub fn run_cycle<S: Surface + ?Sized>(&mut self, sim: &mut Simulation, surface: &mut S) {
        sim.readings.advance(self.rng.as_mut());

        let label = self.label(&self.clock.now());
        render_current_values(surface, &sim.readings, &label);
        sim.history.append(label.clone(), &sim.readings);
        render_table_row(surface, &label, &sim.readings);
        render_charts(surface, &sim.history);

        sim.ticks += 1;
        let r = &sim.readings;
        debug!(
            tick = sim.ticks,
            temperature = r.temperature,
            moisture = r.moisture,
            humidity = r.humidity,
            light = r.light,
            ph = r.ph,
            wind = r.wind,
            "Simulation tick"
        );
    }

    /// Run a cycle if the timer is due at `now`. Returns whether one ran.
    pub fn poll<S: Surface + ?Sized>(
        &mut self,
        now: Instant,
        sim: &mut Simulation,
        surface: &mut S,
    ) -> bool {
        if self.timer.poll(now) {
            self.run_cycle(sim, surface);
            true
        } else {
            false
        }
    }
}

/// Check that the surface can address every dashboard target.
pub fn verify_surface<S: Surface + ?Sized>(surface: &S) -> Result<()> {
    match Target::all().into_iter().find(|t| !surface.has_target(*t)) {
        Some(missing) => Err(DashboardError::MissingTarget(missing)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Metric, HISTORY_CAPACITY};
    use crate::render::{ChartId, DashboardSurface, TableRow, TABLE_CAPACITY};
    use crate::source::{RngSource, SequenceSource};
    use chrono::TimeZone;
    use std::sync::Arc;

    fn start_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn scheduler(rng: Box<dyn RandomSource>) -> (Scheduler, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(start_time()));
        let scheduler = Scheduler::new(rng, Box::new(clock.clone()), DEFAULT_PERIOD, "%H:%M:%S");
        (scheduler, clock)
    }

    #[test]
    fn test_startup_scenario() {
        let (mut scheduler, _) = scheduler(Box::new(RngSource::seeded(3)));
        let mut sim = Simulation::new();
        let mut surface = DashboardSurface::new();

        scheduler.initialize(&mut sim, &mut surface).unwrap();

        assert_eq!(surface.row_count(), 10);
        assert_eq!(sim.history.len(), 10);
        for id in [ChartId::TempHumidity, ChartId::MoisturePh] {
            let chart = surface.chart(id).unwrap();
            assert_eq!(chart.labels.len(), 10);
            assert_eq!(chart.left.len(), 10);
            assert_eq!(chart.right.len(), 10);
            assert!(chart.labels.windows(2).all(|w| w[0] <= w[1]));
        }

        let labels = surface.chart(ChartId::TempHumidity).unwrap().labels.clone();
        assert_eq!(labels.first().map(String::as_str), Some("11:51:00"));
        assert_eq!(labels.last().map(String::as_str), Some("12:00:00"));

        // newest first in the table
        assert_eq!(surface.rows()[0].time, "12:00:00");
        assert_eq!(surface.rows()[9].time, "11:51:00");

        // current values show the live seed, not the synthetic history
        assert_eq!(surface.value(Metric::Temperature), Some("24.0°C"));
        assert_eq!(surface.value(Metric::Light), Some("850 lux"));
        assert_eq!(surface.updated(Metric::Wind), Some("12:00:00"));
        assert_eq!(sim.ticks, 0);
    }

    #[test]
    fn test_seed_table_matches_history() {
        // constant 1.0 puts every synthetic sample at the top of its range
        let (mut scheduler, _) = scheduler(Box::new(SequenceSource::constant(1.0)));
        let mut sim = Simulation::new();
        let mut surface = DashboardSurface::new();
        scheduler.initialize(&mut sim, &mut surface).unwrap();

        let expected = TableRow {
            time: "12:00:00".to_string(),
            cells: [
                "30.0°C".to_string(),
                "80%".to_string(),
                "85%".to_string(),
                "1200 lux".to_string(),
                "7.5".to_string(),
                "20 km/h".to_string(),
            ],
        };
        assert_eq!(surface.rows()[0], expected);
        let chart = surface.chart(ChartId::TempHumidity).unwrap();
        assert_eq!(chart.left.last(), Some(&30.0));
        assert_eq!(chart.right.last(), Some(&85.0));
    }

    #[test]
    fn test_steady_state_after_25_ticks() {
        let (mut scheduler, clock) = scheduler(Box::new(RngSource::seeded(11)));
        let mut sim = Simulation::new();
        let mut surface = DashboardSurface::new();
        scheduler.initialize(&mut sim, &mut surface).unwrap();

        for _ in 0..25 {
            clock.advance(TimeDelta::seconds(5));
            scheduler.run_cycle(&mut sim, &mut surface);

            let series = sim.history.as_chart_series();
            assert_eq!(series.temperature.len(), series.len());
            assert_eq!(series.ph.len(), series.len());
            assert!(series.len() <= HISTORY_CAPACITY);
            assert!(surface.row_count() <= TABLE_CAPACITY);
        }

        assert_eq!(sim.ticks, 25);
        assert_eq!(sim.history.len(), 20);
        assert_eq!(surface.row_count(), 10);
        // 25 ticks * 5s after 12:00:00
        assert_eq!(surface.rows()[0].time, "12:02:05");
        assert_eq!(surface.rows()[9].time, "12:01:20");
        assert_eq!(sim.history.latest_label(), Some("12:02:05"));
        assert_eq!(surface.chart(ChartId::MoisturePh).unwrap().labels.len(), 20);
    }

    #[test]
    fn test_cycle_order_and_clamp() {
        let (mut scheduler, _) = scheduler(Box::new(SequenceSource::constant(1.0)));
        let mut sim = Simulation::new();
        sim.readings.temperature = 30.0;
        let mut surface = DashboardSurface::new();

        scheduler.run_cycle(&mut sim, &mut surface);

        assert_eq!(sim.readings.temperature, 30.0);
        assert_eq!(surface.value(Metric::Temperature), Some("30.0°C"));
        assert_eq!(surface.rows()[0].cells[0], "30.0°C");
        assert_eq!(sim.history.as_chart_series().temperature.back(), Some(&30.0));
    }

    #[test]
    fn test_missing_target_is_fatal() {
        let targets = Target::all()
            .into_iter()
            .filter(|t| *t != Target::Chart(ChartId::MoisturePh));
        let mut surface = DashboardSurface::with_targets(targets);
        let (mut scheduler, _) = scheduler(Box::new(RngSource::seeded(5)));
        let mut sim = Simulation::new();

        let err = scheduler.initialize(&mut sim, &mut surface).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::MissingTarget(Target::Chart(ChartId::MoisturePh))
        ));
        assert!(sim.history.is_empty());
        assert_eq!(surface.row_count(), 0);
        assert_eq!(surface.value(Metric::Temperature), None);
    }

    #[test]
    fn test_poll_runs_on_schedule() {
        let (mut scheduler, _) = scheduler(Box::new(SequenceSource::constant(0.5)));
        let mut sim = Simulation::new();
        let mut surface = DashboardSurface::new();
        let start = Instant::now();

        assert!(scheduler.poll(start, &mut sim, &mut surface));
        assert!(!scheduler.poll(start + Duration::from_secs(4), &mut sim, &mut surface));
        assert!(scheduler.poll(start + Duration::from_secs(5), &mut sim, &mut surface));
        assert_eq!(sim.ticks, 2);
        assert_eq!(surface.row_count(), 2);
    }
}
