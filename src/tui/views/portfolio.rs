//! Portfolio view
//!
//! Headline totals, the performance history, allocation bars and the
//! holdings table.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Sparkline, Table},
    Frame,
};

use crate::display::format::{direction_arrow, format_bar};
use crate::models::{format_percent, Timeframe};
use crate::services::{PortfolioService, HIDDEN_BALANCE};
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::MainPanelLayout;

/// Render the portfolio section
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let symbol = app.settings.currency_symbol.as_str();
    let show = app.portfolio.show_balance;

    let service = PortfolioService::new(&app.portfolio.holdings);
    let summary = service.summary();
    let gain_color = if summary.total_gain.is_negative() { Color::Red } else { Color::Green };

    let mut spans = vec![
        Span::styled(" Total Value: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            service.balance_label(show, symbol),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Gain: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(
                "{} ({})",
                masked(summary.total_gain.format_signed(symbol), show),
                format_percent(summary.total_gain_percent)
            ),
            Style::default().fg(gain_color),
        ),
        Span::raw("   "),
    ];
    for period in Timeframe::ALL {
        let style = if period == app.portfolio.period {
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", period.label()), style));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Your Investment Portfolio ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if is_focused { Color::Cyan } else { Color::DarkGray })),
    );
    frame.render_widget(header, layout.header);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(6)])
        .split(layout.content);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let values: Vec<u64> = app
        .portfolio
        .history
        .iter()
        .map(|p| p.value.dollars().max(0) as u64)
        .collect();
    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .title(format!(" Performance ({}) ", app.portfolio.period))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .data(&values)
        .style(Style::default().fg(Color::Green));
    frame.render_widget(sparkline, top[0]);

    let allocation: Vec<Line> = service
        .allocation()
        .iter()
        .map(|slice| {
            Line::from(vec![
                Span::styled(format!(" {:<6}", slice.symbol), Style::default().fg(Color::White)),
                Span::styled(format_bar(slice.percent, 100.0, 16), Style::default().fg(Color::Green)),
                Span::raw(format!(" {:>5.1}%", slice.percent)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(allocation).block(
            Block::default()
                .title(" Allocation ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        top[1],
    );

    let rows: Vec<Row> = app
        .portfolio
        .holdings
        .iter()
        .map(|h| {
            let color = if h.is_up() { Color::Green } else { Color::Red };
            Row::new(vec![
                Span::styled(h.symbol.clone(), Style::default().fg(Color::Cyan)),
                Span::raw(h.name.clone()),
                Span::raw(format!("{} shares", h.shares)),
                Span::raw(masked(h.value.format_grouped(symbol), show)),
                Span::styled(
                    format!(
                        "{} {} ({})",
                        direction_arrow(h.is_up()),
                        masked(h.change.format_signed(symbol), show),
                        format_percent(h.change_percent)
                    ),
                    Style::default().fg(color),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(24),
        ],
    )
    .header(
        Row::new(vec!["Symbol", "Name", "Shares", "Value", "Gain"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .title(" Holdings  [b] show/hide balance ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(table, chunks[1]);
}

fn masked(text: String, show: bool) -> String {
    if show {
        text
    } else {
        HIDDEN_BALANCE.to_string()
    }
}
