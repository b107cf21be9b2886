//! Dual-axis line charts.
//!
//! ratatui charts have a single y axis. The left series is plotted against
//! it directly; the right series is mapped from its own range onto the
//! left bounds and its scale is printed in a column on the right edge.

use std::ops::RangeInclusive;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    symbols,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::Metric;
use crate::render::{fixed, ChartSpec, ChartState, CHARTS};
use crate::ui::Theme;

/// Render both charts side by side.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(area);
    for (spec, column) in CHARTS.iter().zip(columns.iter()) {
        render_chart(frame, &app.theme, spec, app.surface.chart(spec.id), *column);
    }
}

fn render_chart(
    frame: &mut Frame,
    theme: &Theme,
    spec: &ChartSpec,
    state: Option<&ChartState>,
    area: Rect,
) {
    let block = Block::default()
        .title(format!(" {} ", spec.title))
        .title(Line::from(format!(" {} → ", spec.right.label)).right_aligned())
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(state) = state.filter(|s| !s.labels.is_empty()) else {
        frame.render_widget(
            Paragraph::new("Waiting for data...")
                .style(theme.muted)
                .alignment(Alignment::Center),
            inner,
        );
        return;
    };

    let left_range = spec.left.metric.range();
    let right_range = spec.right.metric.range();

    let right_labels = axis_labels(spec.right.metric);
    let right_width = right_labels.iter().map(|l| l.len()).max().unwrap_or(0) as u16 + 1;
    let [plot_area, axis_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(right_width)]).areas(inner);

    let left_points: Vec<(f64, f64)> =
        state.left.iter().enumerate().map(|(i, v)| (i as f64, *v)).collect();
    let right_points: Vec<(f64, f64)> = state
        .right
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, rescale(*v, &right_range, &left_range)))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name(spec.left.label)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.series_color(spec.left.color)))
            .data(&left_points),
        Dataset::default()
            .name(spec.right.label)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.series_color(spec.right.color)))
            .data(&right_points),
    ];

    let x_max = (state.labels.len().saturating_sub(1)).max(1) as f64;
    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(theme.muted)
                .bounds([0.0, x_max])
                .labels(time_labels(&state.labels)),
        )
        .y_axis(
            Axis::default()
                .title(spec.left.label)
                .style(theme.muted)
                .bounds([*left_range.start(), *left_range.end()])
                .labels(axis_labels(spec.left.metric)),
        )
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));
    frame.render_widget(chart, plot_area);

    // The bottom two rows of the plot hold the x axis line and its labels.
    let scale_height = axis_area.height.saturating_sub(2);
    let mut lines = vec![Line::from(""); scale_height as usize];
    if let (Some(first), Some(last)) = (right_labels.first(), right_labels.last()) {
        if let Some(line) = lines.last_mut() {
            *line = Line::from(first.clone());
        }
        if let Some(line) = lines.first_mut() {
            *line = Line::from(last.clone());
        }
        if lines.len() > 2 {
            let mid = lines.len() / 2;
            lines[mid] = Line::from(right_labels[right_labels.len() / 2].clone());
        }
    }
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(theme.series_color(spec.right.color))),
        axis_area,
    );
}

/// Map `value` linearly from one range onto another.
pub fn rescale(value: f64, from: &RangeInclusive<f64>, to: &RangeInclusive<f64>) -> f64 {
    let span = from.end() - from.start();
    if span == 0.0 {
        return *to.start();
    }
    let t = (value - from.start()) / span;
    to.start() + t * (to.end() - to.start())
}

/// Min, mid and max labels for a metric's axis.
fn axis_labels(metric: Metric) -> Vec<String> {
    let range = metric.range();
    let decimals = if range.end() - range.start() <= 10.0 { 1 } else { 0 };
    let mid = (range.start() + range.end()) / 2.0;
    vec![
        fixed(*range.start(), decimals),
        fixed(mid, decimals),
        fixed(*range.end(), decimals),
    ]
}

/// First, middle and last timestamp labels for the x axis.
fn time_labels(labels: &[String]) -> Vec<String> {
    match labels {
        [] => Vec::new(),
        [only] => vec![only.clone()],
        [first, .., last] => {
            let mid = &labels[labels.len() / 2];
            vec![first.clone(), mid.clone(), last.clone()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_maps_endpoints() {
        let ph = Metric::Ph.range();
        let moisture = Metric::Moisture.range();
        assert_eq!(rescale(6.0, &ph, &moisture), 50.0);
        assert_eq!(rescale(7.5, &ph, &moisture), 80.0);
        assert!((rescale(6.75, &ph, &moisture) - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(axis_labels(Metric::Temperature), ["20.0", "25.0", "30.0"]);
        assert_eq!(axis_labels(Metric::Humidity), ["60", "73", "85"]);
        assert_eq!(axis_labels(Metric::Ph), ["6.0", "6.8", "7.5"]);
    }

    #[test]
    fn test_time_labels() {
        let labels: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(time_labels(&labels), ["a", "c", "d"]);
        assert_eq!(time_labels(&labels[..1]), ["a"]);
        assert!(time_labels(&[]).is_empty());
    }
}
