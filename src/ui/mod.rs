//! Terminal UI rendering using ratatui.
//!
//! Draws the [`DashboardSurface`](crate::render::DashboardSurface) held by
//! the [`App`]. Each panel is implemented in its own submodule with a
//! `render` function.
//!
//! ## Submodules
//!
//! - [`cards`]: Current value and last-updated time per metric
//! - [`charts`]: Temperature/humidity and moisture/pH line charts
//! - [`table`]: The ten most recent readings, newest first
//! - [`common`]: Shared components (header, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Cards (cards::render)                │
//! ├──────────────────────────────────────┤
//! │ Charts (charts::render)              │
//! ├──────────────────────────────────────┤
//! │ Table (table::render)                │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top:
//!    - common::render_help
//! ```

pub mod cards;
pub mod charts;
pub mod common;
pub mod table;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::render::TABLE_CAPACITY;

/// Minimum terminal size for a usable display.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 30;

/// Draw the whole dashboard.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Check for minimum terminal size
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5.min(area.height));
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1),                         // Header bar
        Constraint::Length(4),                         // Metric cards
        Constraint::Min(10),                           // Charts
        Constraint::Length(TABLE_CAPACITY as u16 + 3), // Table: rows + header + borders
        Constraint::Length(1),                         // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    cards::render(frame, app, chunks[1]);
    charts::render(frame, app, chunks[2]);
    table::render(frame, app, chunks[3]);
    common::render_status_bar(frame, app, chunks[4]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::scheduler;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_draw_dashboard() {
        let mut app = App::new(scheduler(), Theme::dark()).unwrap();
        app.update(std::time::Instant::now());

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("FIELDWATCH"));
        assert!(text.contains("Temperature & Humidity"));
        assert!(text.contains("Soil Moisture & pH"));
        assert!(text.contains("Recent Readings (10/10)"));
        assert!(text.contains("12:00:00"));
    }

    #[test]
    fn test_draw_too_small() {
        let app = App::new(scheduler(), Theme::dark()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("Terminal too small"));
    }

    #[test]
    fn test_draw_help_overlay() {
        let mut app = App::new(scheduler(), Theme::light()).unwrap();
        app.toggle_help();
        let mut terminal = Terminal::new(TestBackend::new(100, 36)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("Keyboard Shortcuts"));
    }
}
