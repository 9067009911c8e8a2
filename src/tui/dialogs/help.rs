//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Section};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_section))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Help lines for the given section
pub fn help_lines(section: Section) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("Tab", "Switch panel focus"),
        key_line("h/l", "Move focus left/right"),
        key_line("1-6", "Jump to section"),
        key_line("j/k", "Move selection up/down"),
        Line::from(""),
    ];

    match section {
        Section::Hero => {
            lines.push(heading("Home"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "Open an account"));
        }
        Section::Market => {
            lines.push(heading("Market Overview"));
            lines.push(Line::from(""));
            lines.push(key_line("[/]", "Previous/next timeframe"));
            lines.push(key_line("r", "Refresh quotes now"));
        }
        Section::Portfolio => {
            lines.push(heading("Portfolio"));
            lines.push(Line::from(""));
            lines.push(key_line("[/]", "Previous/next chart period"));
            lines.push(key_line("b", "Show/hide balances"));
        }
        Section::News => {
            lines.push(heading("News"));
            lines.push(Line::from(""));
            lines.push(key_line("[/]", "Previous/next category"));
            lines.push(key_line("j/k", "Select headline"));
        }
        Section::Newsletter => {
            lines.push(heading("Newsletter"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab/↓", "Next field"));
            lines.push(key_line("Space", "Toggle topic"));
            lines.push(key_line("Enter", "Subscribe"));
            lines.push(key_line("Esc", "Back to sidebar"));
        }
        Section::Registration => {
            lines.push(heading("Open Account"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab/↓", "Next field"));
            lines.push(key_line("←/→", "Change selection"));
            lines.push(key_line("Space", "Toggle checkbox"));
            lines.push(key_line("Enter", "Continue"));
            lines.push(key_line("Esc", "Previous step"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect()
    }

    #[test]
    fn test_help_is_contextual() {
        assert!(text(&help_lines(Section::Market)).contains("timeframe"));
        assert!(text(&help_lines(Section::Portfolio)).contains("balances"));
        assert!(!text(&help_lines(Section::Hero)).contains("timeframe"));
    }
}
