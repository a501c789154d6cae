//! UI module for agrovault-tui
//!
//! Rendering functions for the TUI: the page chrome (tab bar, bottom bar),
//! metric tiles, prediction cards, loan cards, and analytics views.

pub mod analytics;
pub mod cards;
pub mod finance;
pub mod helpers;
pub mod stats;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::Page;
use crate::summary::{dashboard_metrics, summarize};
use crate::theme::{
    AMBER_ACCENT, BG_PRIMARY, BG_SECONDARY, BORDER_SUBTLE, GREEN_PRIMARY, RED_ERROR,
    TEXT_MUTED, TEXT_PRIMARY,
};

use analytics::render_analytics_page;
use cards::render_prediction_grid;
use finance::render_finance_page;
use helpers::wrap_text;

const PRIVACY_NOTICE: &str = "Your crop data is encrypted and processed securely. \
Predictions are verified by our oracle network before being revealed to prevent \
market speculation.";

/// Top-level draw: tab bar, current page, bottom keybinding bar.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(BG_PRIMARY)),
        area,
    );

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(3),    // Page content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_tab_bar(main_layout[0], app.page, frame);

    match app.page {
        Page::Dashboard => render_dashboard_page(main_layout[1], app, frame),
        Page::Predictions => render_predictions_page(main_layout[1], app, frame),
        Page::Finance => render_finance_page(main_layout[1], &app.farm, frame),
        Page::Analytics => render_analytics_page(main_layout[1], &app.farm, frame),
    }

    render_bottom_bar(main_layout[2], app, frame);
}

fn render_tab_bar(area: Rect, current: Page, frame: &mut Frame) {
    let mut spans = vec![Span::styled(
        " AgroVault ",
        Style::default().fg(GREEN_PRIMARY).add_modifier(Modifier::BOLD),
    )];
    for (i, page) in Page::ALL.iter().enumerate() {
        let style = if *page == current {
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MUTED)
        };
        spans.push(Span::styled(format!(" {}:{} ", i + 1, page.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_dashboard_page(area: Rect, app: &App, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Metric tiles
            Constraint::Min(cards::CARD_HEIGHT), // Prediction cards
            Constraint::Length(4), // Privacy notice
        ])
        .split(area);

    render_metric_header(layout[0], app, frame);
    render_prediction_grid(
        layout[1],
        &app.farm.predictions,
        &app.disclosure,
        app.selected,
        3,
        frame,
    );
    render_privacy_notice(layout[2], frame);
}

fn render_metric_header(area: Rect, app: &App, frame: &mut Frame) {
    stats::render_metric_cards(area, &dashboard_metrics(&app.farm), frame);
}

fn render_predictions_page(area: Rect, app: &App, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Page heading
            Constraint::Min(cards::CARD_HEIGHT),
        ])
        .split(area);

    let summary = summarize(&app.farm.predictions);
    let heading = Paragraph::new(Line::from(vec![
        Span::styled(
            " Yield Predictions ",
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "avg {:.1} t/ha · {} encrypted · oracle network active",
                summary.average_yield, summary.encrypted
            ),
            Style::default().fg(AMBER_ACCENT),
        ),
    ]));
    frame.render_widget(heading, layout[0]);

    render_prediction_grid(
        layout[1],
        &app.farm.predictions,
        &app.disclosure,
        app.selected,
        2,
        frame,
    );
}

fn render_privacy_notice(area: Rect, frame: &mut Frame) {
    let block = Block::default()
        .title(" Confidential Computing Active ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let inner_width = area.width.saturating_sub(4) as usize;
    let content: Vec<Line> = wrap_text(PRIVACY_NOTICE, inner_width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(TEXT_MUTED))))
        .collect();

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_bottom_bar(area: Rect, app: &App, frame: &mut Frame) {
    let mut spans = vec![Span::styled(
        " q: Quit | Tab: Next Page | 1-4: Jump | ↑/↓: Select | Enter: Toggle Reveal ",
        Style::default().fg(BG_PRIMARY).bg(GREEN_PRIMARY),
    )];
    if app.skipped > 0 {
        spans.push(Span::styled(
            format!(" {} record(s) skipped ", app.skipped),
            Style::default().fg(TEXT_PRIMARY).bg(RED_ERROR),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
