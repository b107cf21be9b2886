//! Recent readings table, newest first.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::render::{Surface, TABLE_CAPACITY};

const HEADERS: [&str; 7] = ["Time", "Temperature", "Moisture", "Humidity", "Light", "pH", "Wind"];

/// Render the recent readings table.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
        .height(1)
        .style(app.theme.header);

    let rows: Vec<Row> = app
        .surface
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cells = std::iter::once(Cell::from(row.time.clone()))
                .chain(row.cells.iter().map(|c| Cell::from(c.clone())));
            let style = if i == 0 {
                app.theme.newest
            } else {
                Style::default()
            };
            Row::new(cells).style(style)
        })
        .collect();

    let widths = [
        Constraint::Fill(2), // Time
        Constraint::Fill(2), // Temperature
        Constraint::Fill(1), // Moisture
        Constraint::Fill(1), // Humidity
        Constraint::Fill(2), // Light
        Constraint::Fill(1), // pH
        Constraint::Fill(2), // Wind
    ];

    let title = format!(
        " Recent Readings ({}/{}) ",
        app.surface.row_count(),
        TABLE_CAPACITY
    );

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(table, area);
}
