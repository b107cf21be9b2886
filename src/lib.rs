//! # fieldwatch
//!
//! A terminal dashboard that simulates agricultural sensor telemetry.
//!
//! Six metrics (temperature, soil moisture, humidity, light, pH, wind) drift
//! by bounded random walk. Every tick the dashboard shows the latest values,
//! adds a row to a scrolling table of recent readings and redraws two
//! time-series charts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌─────────┐  │
//! │  │ schedule │──▶│   data   │──▶│  render  │──▶│   ui    │  │
//! │  │ (timer)  │   │ (state)  │   │(surface) │   │(ratatui)│  │
//! │  └────┬─────┘   └──────────┘   └──────────┘   └─────────┘  │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── RngSource | SequenceSource                  │
//! │  │ (rand)  │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`data`]**: Current readings, their ranges, and the chart history
//! - **[`source`]**: Random source abstraction ([`RandomSource`] trait)
//! - **[`render`]**: Formatting and the [`Surface`] the renderer writes through
//! - **[`schedule`]**: Startup seeding, the update cycle, timer and clock
//! - **[`ui`]**: Terminal rendering of the dashboard surface
//! - **[`app`]** / **[`events`]**: Interactive state and keyboard handling
//! - **[`config`]**: Layered settings from file and environment
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Interactive dashboard, one update every 5 seconds
//! fieldwatch
//!
//! # Faster updates with a fixed seed
//! fieldwatch --refresh 1 --seed 42
//!
//! # No terminal UI: log 10 ticks to stderr
//! fieldwatch --headless --ticks 10
//! ```
//!
//! ### As a library
//!
//! ```
//! use fieldwatch::schedule::{ManualClock, Scheduler, DEFAULT_PERIOD};
//! use fieldwatch::{DashboardSurface, Metric, SequenceSource, Simulation};
//! use chrono::Local;
//!
//! let mut scheduler = Scheduler::new(
//!     Box::new(SequenceSource::constant(0.5)),
//!     Box::new(ManualClock::new(Local::now())),
//!     DEFAULT_PERIOD,
//!     "%H:%M:%S",
//! );
//! let mut sim = Simulation::new();
//! let mut surface = DashboardSurface::new();
//!
//! scheduler.initialize(&mut sim, &mut surface).unwrap();
//! scheduler.run_cycle(&mut sim, &mut surface);
//!
//! assert_eq!(surface.value(Metric::Temperature), Some("24.0°C"));
//! assert_eq!(sim.history.len(), 11);
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod render;
pub mod schedule;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use config::{Settings, ThemeChoice};
pub use data::{CurrentReadings, History, Metric, Simulation};
pub use error::DashboardError;
pub use render::{DashboardSurface, Surface, TableRow, Target};
pub use schedule::Scheduler;
pub use source::{RandomSource, RngSource, SequenceSource};
