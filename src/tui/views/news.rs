//! News view
//!
//! Filter tabs, the headline list and the selected story's summary.

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::models::{NewsFilter, Sentiment};
use crate::services::NewsService;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::MainPanelLayout;

fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => Color::Green,
        Sentiment::Negative => Color::Red,
        Sentiment::Neutral => Color::Yellow,
    }
}

/// Render the news section
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };
    let now = Utc::now();

    let service = NewsService::new(&app.news.items);
    let mut tabs = vec![Span::raw(" ")];
    for tab in NewsFilter::tabs() {
        let count = match tab {
            NewsFilter::All => app.news.items.len(),
            NewsFilter::Only(category) => service.count(category),
        };
        let style = if tab == app.news.filter {
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        tabs.push(Span::styled(format!(" {} ({}) ", tab.label(), count), style));
        tabs.push(Span::raw(" "));
    }

    let header = Paragraph::new(Line::from(tabs)).block(
        Block::default()
            .title(" Financial News & Analysis ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(header, layout.header);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(6)])
        .split(layout.content);

    let visible = app.news.visible();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(sentiment_color(item.sentiment))),
                Span::styled(item.title.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {} • {}", item.source, item.age_label(now)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !visible.is_empty() {
        state.select(Some(app.news.selected.min(visible.len() - 1)));
    }
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let detail = match visible.get(app.news.selected) {
        Some(item) => Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} • {}", item.category.label(), item.sentiment),
                Style::default().fg(sentiment_color(item.sentiment)),
            )),
            Line::from(item.summary.clone()),
        ]),
        None => Paragraph::new(Span::styled(
            "No headlines in this category",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(
        detail.wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Summary ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        chunks[1],
    );
}
