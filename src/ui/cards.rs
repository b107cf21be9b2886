//! Current-value cards, one per metric.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::Metric;

/// Render the six metric cards side by side.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::horizontal([Constraint::Ratio(1, Metric::ALL.len() as u32); 6]).split(area);

    for (metric, column) in Metric::ALL.into_iter().zip(columns.iter()) {
        let value = app.surface.value(metric).unwrap_or("--");
        let updated = app.surface.updated(metric).unwrap_or("--:--:--");

        let lines = vec![
            Line::styled(value.to_string(), app.theme.value),
            Line::styled(format!("Updated {}", updated), app.theme.muted),
        ];

        let block = Block::default()
            .title(format!(" {} ", metric.label()))
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border));

        frame.render_widget(Paragraph::new(lines).block(block), *column);
    }
}
