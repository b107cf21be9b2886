use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fieldwatch::config::Overrides;
use fieldwatch::schedule::{headless, SystemClock};
use fieldwatch::ui::{self, Theme};
use fieldwatch::{events, App, DashboardSurface, RngSource, Scheduler, Settings, Simulation, ThemeChoice};

#[derive(Parser, Debug)]
#[command(name = "fieldwatch")]
#[command(about = "Terminal dashboard simulating agricultural sensor telemetry")]
struct Args {
    /// Path to a TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seconds between updates
    #[arg(short, long)]
    refresh: Option<f64>,

    /// Seed for a reproducible simulation
    #[arg(short, long)]
    seed: Option<u64>,

    /// strftime pattern for timestamps (e.g. "%H:%M:%S")
    #[arg(long)]
    time_format: Option<String>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Run without the terminal UI, logging each update to stderr
    #[arg(long)]
    headless: bool,

    /// Stop after this many updates (only used with --headless)
    #[arg(long, requires = "headless")]
    ticks: Option<u64>,

    /// Write logs to this file (interactive mode logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args)?;

    if args.headless {
        init_logging(settings.log_file.as_deref(), true)?;
        return run_headless(&settings, args.ticks);
    }

    init_logging(settings.log_file.as_deref(), false)?;
    run_tui(&settings)
}

/// Merge file/environment settings with command-line overrides.
fn load_settings(args: &Args) -> Result<Settings> {
    let settings = Settings::load(args.config.as_deref())?.with_overrides(Overrides {
        refresh_secs: args.refresh,
        seed: args.seed,
        time_format: args.time_format.clone(),
        theme: args.theme,
        log_file: args.log_file.clone(),
    })?;
    Ok(settings)
}

/// Install the tracing subscriber.
///
/// Stdout belongs to the TUI, so interactive mode only logs to a file.
fn init_logging(log_file: Option<&Path>, stderr_fallback: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if stderr_fallback {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
    }
    Ok(())
}

fn build_scheduler(settings: &Settings) -> Scheduler {
    Scheduler::new(
        Box::new(RngSource::new(settings.seed)),
        Box::new(SystemClock),
        settings.refresh_interval(),
        settings.time_format.clone(),
    )
}

/// Run the simulation without a terminal UI
fn run_headless(settings: &Settings, ticks: Option<u64>) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async {
        let mut scheduler = build_scheduler(settings);
        let mut sim = Simulation::new();
        let mut surface = DashboardSurface::new();
        scheduler.initialize(&mut sim, &mut surface)?;

        info!(period = ?scheduler.period(), seed = ?settings.seed, "Starting headless simulation");

        tokio::select! {
            _ = headless::run(&mut scheduler, &mut sim, &mut surface, ticks) => {}
            _ = tokio::signal::ctrl_c() => info!("Interrupted"),
        }

        info!(ticks = sim.ticks, "Headless simulation stopped");
        Ok::<_, anyhow::Error>(())
    })
}

/// Run the interactive dashboard
fn run_tui(settings: &Settings) -> Result<()> {
    // Build the app before touching the terminal so setup errors print normally
    let theme = Theme::from_choice(settings.theme);
    let mut app = App::new(build_scheduler(settings), theme)?;
    info!(period = ?app.period(), seed = ?settings.seed, "Starting dashboard");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // First call ticks immediately, then once per period
        app.update(Instant::now());
    }

    Ok(())
}
