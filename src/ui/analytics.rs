//! Analytics page rendering: metric tiles, field performance table, and
//! monthly trend tiles

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{FarmData, FieldPerformance, MonthlyTrend};
use crate::summary::analytics_metrics;
use crate::theme::{
    AMBER_ACCENT, BG_SECONDARY, BORDER_SUBTLE, GREEN_PRIMARY, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::ui::stats::render_metric_cards;

/// One table row: field, crop, predicted, actual, derived accuracy.
fn performance_row(perf: &FieldPerformance) -> Line<'static> {
    let accuracy = perf.accuracy();
    // Strong predictions in green, the rest in wheat gold.
    let accuracy_color = if accuracy > 96.0 { GREEN_PRIMARY } else { AMBER_ACCENT };

    Line::from(vec![
        Span::styled(
            format!("{:<18}", perf.field),
            Style::default().fg(TEXT_PRIMARY),
        ),
        Span::styled(
            format!("{:<14}", format!("{} {}", perf.crop.glyph(), perf.crop.label())),
            Style::default().fg(TEXT_SECONDARY),
        ),
        Span::styled(
            format!("{:>10.1}", perf.predicted),
            Style::default().fg(TEXT_PRIMARY),
        ),
        Span::styled(
            format!("{:>10.1}", perf.actual),
            Style::default().fg(TEXT_PRIMARY),
        ),
        Span::styled(
            format!("{:>10.1}%", accuracy),
            Style::default().fg(accuracy_color),
        ),
    ])
}

/// Render the field performance table (predicted vs actual yields).
pub fn render_performance_table(area: Rect, rows: &[FieldPerformance], frame: &mut Frame) {
    let block = Block::default()
        .title(" Field Performance ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let header = Line::from(Span::styled(
        format!(
            "{:<18}{:<14}{:>10}{:>10}{:>11}",
            "Field", "Crop", "Predicted", "Actual", "Accuracy"
        ),
        Style::default().fg(TEXT_MUTED),
    ));

    let mut content = vec![header];
    content.extend(rows.iter().map(performance_row));

    let paragraph = Paragraph::new(content).block(block);
    frame.render_widget(paragraph, area);
}

/// Render one tile per month: volume and the derived verification rate.
pub fn render_trend_cards(area: Rect, trends: &[MonthlyTrend], frame: &mut Frame) {
    if trends.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = trends
        .iter()
        .map(|_| Constraint::Ratio(1, trends.len() as u32))
        .collect();
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (trend, cell) in trends.iter().zip(card_layout.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_SUBTLE))
            .style(Style::default().bg(BG_SECONDARY));

        let content = vec![
            Line::from(Span::styled(
                trend.month.clone(),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} predictions", trend.predictions),
                Style::default().fg(TEXT_MUTED),
            )),
            Line::from(Span::styled(
                format!("{} verified", trend.verifications),
                Style::default().fg(TEXT_MUTED),
            )),
            Line::from(Span::styled(
                format!("{:.1}%", trend.accuracy()),
                Style::default().fg(GREEN_PRIMARY),
            )),
        ];

        let paragraph = Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, *cell);
    }
}

/// Render the analytics page: derived tiles, performance table, trend tiles.
pub fn render_analytics_page(area: Rect, farm: &FarmData, frame: &mut Frame) {
    let table_height = farm.field_performance.len() as u16 + 3;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(table_height),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    render_metric_cards(layout[0], &analytics_metrics(farm), frame);
    render_performance_table(layout[1], &farm.field_performance, frame);
    render_trend_cards(layout[2], &farm.monthly_trends, frame);
}
