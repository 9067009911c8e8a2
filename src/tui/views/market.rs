//! Market view
//!
//! Six quote cards in a grid, the timeframe tabs and the summary strip.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format::direction_arrow;
use crate::models::{format_percent, Quote, Timeframe};
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::MainPanelLayout;

/// Render the market section
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);
    let is_focused = app.focused_panel == FocusedPanel::Main;

    render_header(frame, app, is_focused, layout.header);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(layout.content);

    render_grid(frame, &app.market.quotes, &app.settings.currency_symbol, chunks[0]);

    let mut stats = Vec::new();
    for stat in &app.market.stats {
        let color = if stat.positive { Color::Green } else { Color::Red };
        stats.push(Span::styled(format!(" {}: ", stat.label), Style::default().fg(Color::DarkGray)));
        stats.push(Span::styled(stat.value.clone(), Style::default().fg(Color::White)));
        stats.push(Span::styled(format!(" {}  ", stat.change), Style::default().fg(color)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(stats)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        chunks[1],
    );
}

fn render_header(frame: &mut Frame, app: &App, is_focused: bool, area: Rect) {
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let mut spans = vec![Span::raw(" ")];
    for timeframe in Timeframe::ALL {
        let style = if timeframe == app.market.timeframe {
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", timeframe.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!("  updated {}", app.market.updated_at.format("%H:%M:%S")),
        Style::default().fg(Color::DarkGray),
    ));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Market Overview ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(header, area);
}

fn render_grid(frame: &mut Frame, quotes: &[Quote], symbol: &str, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    for (row_index, row) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(*row);

        for (col_index, cell) in cells.iter().enumerate() {
            if let Some(quote) = quotes.get(row_index * 3 + col_index) {
                render_card(frame, quote, symbol, *cell);
            }
        }
    }
}

fn render_card(frame: &mut Frame, quote: &Quote, symbol: &str, area: Rect) {
    let color = if quote.is_up() { Color::Green } else { Color::Red };

    let lines = vec![
        Line::from(Span::styled(quote.name.clone(), Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            quote.price.format_with_symbol(symbol),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} {} ", direction_arrow(quote.is_up()), quote.change.format_signed(symbol)),
                Style::default().fg(color),
            ),
            Span::styled(format!("({})", format_percent(quote.change_percent)), Style::default().fg(color)),
        ]),
        Line::from(Span::styled(
            format!("Vol {}", quote.volume),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", quote.symbol))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(card, area);
}
