//! Hero view
//!
//! Product banner, feature pills and the footer blurb.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};

const FEATURES: [&str; 3] = ["Advanced Analytics", "Real-time Data", "Bank-level Security"];

const DISCLAIMER: &str = "Investment Disclaimer: All investments involve risk, including the \
    potential loss of principal. Past performance does not guarantee future results. Market \
    data shown here is simulated.";

/// Render the hero section with the footer underneath
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let border_color = if app.focused_panel == FocusedPanel::Main {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(8)])
        .split(area);

    let mut pills = Vec::new();
    for (i, feature) in FEATURES.iter().enumerate() {
        if i > 0 {
            pills.push(Span::raw("   "));
        }
        pills.push(Span::styled(
            format!("◆ {}", feature),
            Style::default().fg(Color::Green),
        ));
    }

    let hero = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Invest", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled("Pro", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from("Advanced analytics, real-time data, and institutional-grade tools"),
        Line::from("to maximize your investment potential in today's markets."),
        Line::from(""),
        Line::from(pills),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Start Trading Now",
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(hero, chunks[0]);

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            "Empowering investors with advanced analytics, real-time data, and institutional-grade tools.",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "123 Financial District, New York, NY 10005 • 1-800-INVEST-1 • support@investpro.com",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(DISCLAIMER, Style::default().fg(Color::DarkGray))),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" About ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(footer, chunks[1]);
}
