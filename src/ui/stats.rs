//! Metric tile rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::MetricCategory;
use crate::summary::SummaryMetric;
use crate::theme::{AMBER_ACCENT, BG_SECONDARY, BORDER_SUBTLE, GREEN_PRIMARY, SKY_BLUE, TEXT_MUTED};

/// Accent color for a metric tile's value.
fn category_color(category: MetricCategory) -> Color {
    match category {
        MetricCategory::Predictions => GREEN_PRIMARY,
        MetricCategory::Finance => AMBER_ACCENT,
        MetricCategory::Environment => SKY_BLUE,
    }
}

/// Render a row of metric tiles in a given area, one equal-width card per
/// metric: value on top, title and trend caption below.
pub fn render_metric_cards(area: Rect, metrics: &[SummaryMetric], frame: &mut Frame) {
    if metrics.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = metrics
        .iter()
        .map(|_| Constraint::Ratio(1, metrics.len() as u32))
        .collect();
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (metric, cell) in metrics.iter().zip(card_layout.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_SUBTLE))
            .style(Style::default().bg(BG_SECONDARY));

        let value_color = category_color(metric.category);
        let content = vec![
            Line::from(Span::styled(
                metric.value.clone(),
                Style::default().fg(value_color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                metric.title.to_uppercase(),
                Style::default().fg(TEXT_MUTED),
            )),
            Line::from(Span::styled(
                metric.trend.clone(),
                Style::default().fg(TEXT_MUTED),
            )),
        ];

        let paragraph = Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, *cell);
    }
}
