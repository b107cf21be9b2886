//! Runs the update cycle on a tokio interval without a terminal UI.
//!
//! Every tick is logged through `tracing`, which makes this mode useful
//! for watching the simulation from a log stream.

use tokio::time::{self, MissedTickBehavior};
use tracing::info;

use super::Scheduler;
use crate::data::{Metric, Simulation};
use crate::render::DashboardSurface;

/// Tick until `max_ticks` cycles have run, or forever when `None`.
///
/// The first cycle runs immediately, then one per scheduler period.
///
/// ```no_run
/// use fieldwatch::schedule::{headless, Scheduler, SystemClock, DEFAULT_PERIOD};
/// use fieldwatch::{DashboardSurface, RngSource, Simulation};
///
/// # tokio_test::block_on(async {
/// let mut scheduler = Scheduler::new(
///     Box::new(RngSource::seeded(1)),
///     Box::new(SystemClock),
///     DEFAULT_PERIOD,
///     "%H:%M:%S",
/// );
/// let mut sim = Simulation::new();
/// let mut surface = DashboardSurface::new();
/// scheduler.initialize(&mut sim, &mut surface).unwrap();
/// headless::run(&mut scheduler, &mut sim, &mut surface, Some(3)).await;
/// # });
/// ```
pub async fn run(
    scheduler: &mut Scheduler,
    sim: &mut Simulation,
    surface: &mut DashboardSurface,
    max_ticks: Option<u64>,
) {
    let mut interval = time::interval(scheduler.period());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let start = sim.ticks;
    while max_ticks.map_or(true, |max| sim.ticks - start < max) {
        interval.tick().await;
        scheduler.run_cycle(sim, surface);

        let value = |metric| surface.value(metric).unwrap_or("-");
        info!(
            tick = sim.ticks,
            at = sim.history.latest_label().unwrap_or("-"),
            temperature = value(Metric::Temperature),
            moisture = value(Metric::Moisture),
            humidity = value(Metric::Humidity),
            light = value(Metric::Light),
            ph = value(Metric::Ph),
            wind = value(Metric::Wind),
            "Readings updated"
        );
    }
}
