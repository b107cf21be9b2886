//! Application state for the interactive dashboard.

use std::time::{Duration, Instant};

use tracing::info;

use crate::data::Simulation;
use crate::error::Result;
use crate::render::DashboardSurface;
use crate::schedule::Scheduler;
use crate::ui::Theme;

/// How long a status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Simulation
    scheduler: Scheduler,
    pub simulation: Simulation,
    pub surface: DashboardSurface,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create the app and seed the dashboard.
    ///
    /// Fails if the surface cannot address every dashboard target.
    pub fn new(scheduler: Scheduler, theme: Theme) -> Result<Self> {
        Self::with_surface(scheduler, DashboardSurface::new(), theme)
    }

    /// Create the app on a specific surface.
    pub fn with_surface(
        mut scheduler: Scheduler,
        mut surface: DashboardSurface,
        theme: Theme,
    ) -> Result<Self> {
        let mut simulation = Simulation::new();
        scheduler.initialize(&mut simulation, &mut surface)?;

        let period = scheduler.period();
        let mut app = Self {
            running: true,
            show_help: false,
            scheduler,
            simulation,
            surface,
            theme,
            status_message: None,
        };
        app.set_status_message(format!("Updating every {:.1}s", period.as_secs_f64()));
        Ok(app)
    }

    /// Run a simulation tick if one is due. Returns whether one ran.
    pub fn update(&mut self, now: Instant) -> bool {
        let ticked = self.scheduler.poll(now, &mut self.simulation, &mut self.surface);
        if ticked && self.simulation.ticks == 1 {
            info!("First live reading rendered");
        }
        ticked
    }

    /// Time until the next tick.
    pub fn next_update_in(&self, now: Instant) -> Duration {
        self.scheduler.remaining(now)
    }

    /// Period between ticks.
    pub fn period(&self) -> Duration {
        self.scheduler.period()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_MESSAGE_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        info!(ticks = self.simulation.ticks, "Quitting dashboard");
        self.running = false;
    }
}
