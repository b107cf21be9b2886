//! Common UI components shared across panels.
//!
//! This module contains the header bar, status bar, and help overlay.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::Metric;

/// Render the header bar.
///
/// Displays: title, sensor count, tick count, last update time.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let updated = app.surface.updated(Metric::Temperature).unwrap_or("--:--:--");

    let line = Line::from(vec![
        Span::styled(" ● ", Style::default().fg(app.theme.green)),
        Span::styled("FIELDWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(
            format!("{}", Metric::ALL.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" sensors │ tick "),
        Span::styled(
            format!("{}", app.simulation.ticks),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ updated "),
        Span::styled(updated.to_string(), Style::default().fg(app.theme.highlight)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows time to the next update and available controls, or a temporary
/// status message while one is active.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let next = app.next_update_in(Instant::now());
    let status = format!(
        " Next update in {:.1}s | Period {:.1}s | ?:help q:quit",
        next.as_secs_f64(),
        app.period().as_secs_f64(),
    );

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the dashboard.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from("  ?         Toggle this help"),
        Line::from("  q / Esc   Quit"),
        Line::from("  Ctrl-C    Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Charts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Left axis series are drawn as-is;"),
        Line::from("  right axis series are scaled to"),
        Line::from("  the labels on the right edge."),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 15u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
