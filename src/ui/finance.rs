//! Finance page rendering: credit tiles and loan application cards

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{FarmData, LoanApplication, MetricCategory};
use crate::summary::SummaryMetric;
use crate::theme::{loan_color, BG_SECONDARY, BORDER_SUBTLE, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::stats::render_metric_cards;
use crate::utils::format_usd;

/// Height of one loan card including its borders.
pub const LOAN_CARD_HEIGHT: u16 = 5;

/// Credit standing tiles for the top of the finance page.
pub fn credit_metrics(farm: &FarmData) -> Vec<SummaryMetric> {
    vec![
        SummaryMetric {
            title: "Available Credit".to_string(),
            value: format_usd(farm.credit.available_usd),
            trend: "Based on predictions".to_string(),
            category: MetricCategory::Finance,
        },
        SummaryMetric {
            title: "Credit Score".to_string(),
            value: farm.credit.score.to_string(),
            trend: "Confidential assessment".to_string(),
            category: MetricCategory::Finance,
        },
        SummaryMetric {
            title: "Active Loans".to_string(),
            value: farm.loans.len().to_string(),
            trend: "On-time payments".to_string(),
            category: MetricCategory::Finance,
        },
    ]
}

/// Render a single loan application card
pub fn render_loan_card(area: Rect, loan: &LoanApplication, frame: &mut Frame) {
    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let status_color = loan_color(loan.status);

    let content = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", loan.id),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled("● ", Style::default().fg(status_color)),
            Span::styled(loan.status.label(), Style::default().fg(status_color)),
        ]),
        Line::from(Span::styled(
            loan.purpose.clone(),
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(vec![
            Span::styled("Amount ", Style::default().fg(TEXT_MUTED)),
            Span::styled(format_usd(loan.amount_usd), Style::default().fg(TEXT_PRIMARY)),
            Span::styled("   APR ", Style::default().fg(TEXT_MUTED)),
            Span::styled(
                format!("{:.1}%", loan.apr_percent),
                Style::default().fg(TEXT_PRIMARY),
            ),
            Span::styled("   Term ", Style::default().fg(TEXT_MUTED)),
            Span::styled(
                format!("{} months", loan.term_months),
                Style::default().fg(TEXT_PRIMARY),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(card_block);
    frame.render_widget(paragraph, area);
}

/// Render the finance page: credit tiles on top, loan cards below.
pub fn render_finance_page(area: Rect, farm: &FarmData, frame: &mut Frame) {
    let mut constraints = vec![Constraint::Length(5)];
    constraints.extend(vec![Constraint::Length(LOAN_CARD_HEIGHT); farm.loans.len()]);
    constraints.push(Constraint::Min(0));

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_metric_cards(layout[0], &credit_metrics(farm), frame);

    for (i, loan) in farm.loans.iter().enumerate() {
        render_loan_card(layout[i + 1], loan, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_metrics_derive_loan_count() {
        let farm = FarmData::from_json(include_str!("../../data/farm.json")).unwrap();
        let metrics = credit_metrics(&farm);
        assert_eq!(metrics[0].value, "$245,000");
        assert_eq!(metrics[1].value, "847");
        assert_eq!(metrics[2].value, "3");
    }
}
