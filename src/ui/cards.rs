//! Prediction card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::disclosure::{format_confidence, format_yield, DisclosureState};
use crate::models::YieldPrediction;
use crate::theme::{
    badge_color, AMBER_ACCENT, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, GREEN_PRIMARY,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::truncate;

/// Height of one prediction card including its borders.
pub const CARD_HEIGHT: u16 = 7;

/// Render a single yield prediction card
pub fn render_prediction_card(
    area: Rect,
    record: &YieldPrediction,
    state: &DisclosureState,
    selected: bool,
    frame: &mut Frame,
) {
    let border_color = if selected { GREEN_PRIMARY } else { BORDER_SUBTLE };
    let bg_color = if selected { BG_TERTIARY } else { BG_SECONDARY };

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color));

    let inner_width = area.width.saturating_sub(4) as usize;

    let mut title_spans = vec![Span::styled(
        format!("{} {} ", record.crop.glyph(), record.crop.label()),
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    )];
    if record.is_encrypted {
        title_spans.push(Span::styled("🛡 ", Style::default().fg(AMBER_ACCENT)));
    }
    title_spans.push(Span::styled(
        format!("[{}]", record.status.label()),
        Style::default().fg(badge_color(record.status.badge())),
    ));

    let value_color = if state.revealed() { GREEN_PRIMARY } else { TEXT_MUTED };

    let mut content = vec![
        Line::from(title_spans),
        Line::from(Span::styled(
            truncate(&record.field, inner_width),
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(vec![
            Span::styled("Yield      ", Style::default().fg(TEXT_MUTED)),
            Span::styled(
                format_yield(record, state),
                Style::default().fg(value_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Confidence ", Style::default().fg(TEXT_MUTED)),
            Span::styled(
                format_confidence(record, state),
                Style::default().fg(value_color).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    // Toggle affordance only exists for encrypted records.
    if state.has_toggle() {
        let hint = if state.revealed() {
            "enter: hide data"
        } else {
            "enter: decrypt preview"
        };
        content.push(Line::from(Span::styled(
            hint,
            Style::default().fg(AMBER_ACCENT),
        )));
    } else {
        content.push(Line::from(""));
    }

    let paragraph = Paragraph::new(content).block(card_block);
    frame.render_widget(paragraph, area);
}

/// Render prediction cards in a grid of up to `columns` cards per row.
pub fn render_prediction_grid(
    area: Rect,
    records: &[YieldPrediction],
    disclosure: &[DisclosureState],
    selected: usize,
    columns: usize,
    frame: &mut Frame,
) {
    if records.is_empty() || columns == 0 {
        let empty = Paragraph::new("No prediction records to display")
            .style(Style::default().fg(TEXT_MUTED));
        frame.render_widget(empty, area);
        return;
    }

    let rows = records.chunks(columns).count();
    let row_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); rows])
        .split(area);

    for (row_index, chunk) in records.chunks(columns).enumerate() {
        if row_layout[row_index].height == 0 {
            continue;
        }
        let col_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_layout[row_index]);

        for (col_index, record) in chunk.iter().enumerate() {
            let index = row_index * columns + col_index;
            render_prediction_card(
                col_layout[col_index],
                record,
                &disclosure[index],
                index == selected,
                frame,
            );
        }
    }
}
