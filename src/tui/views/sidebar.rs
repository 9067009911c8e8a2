//! Sidebar view
//!
//! Brand header and the section switcher

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::{App, FocusedPanel, Section};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_sections(frame, app, layout.sections);
    render_market_ticker(frame, app, layout.ticker);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" InvestPro ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

fn render_sections(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Sections ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", section.key()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(section.title(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.active_section.index()));

    frame.render_stateful_widget(list, area, &mut state);
}

/// First few quotes, so prices stay visible from every section
fn render_market_ticker(frame: &mut Frame, app: &mut App, area: Rect) {
    let symbol = &app.settings.currency_symbol;
    let lines: Vec<Line> = app
        .market
        .quotes
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|quote| {
            let color = if quote.is_up() { Color::Green } else { Color::Red };
            Line::from(vec![
                Span::styled(format!("{:<6}", quote.symbol), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{:>12}", quote.price.format_with_symbol(symbol)),
                    Style::default().fg(color),
                ),
            ])
        })
        .collect();

    let ticker = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Live ({}) ", app.market.timeframe))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(ticker, area);
}
