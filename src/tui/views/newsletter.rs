//! Newsletter view
//!
//! Email field, topic checkboxes and the subscribe button; after a
//! successful submit, a confirmation listing the chosen topics.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Preference;
use crate::services::NewsletterSignup;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::widgets::input::TextInput;

/// Row under the cursor: the email field or one of the topics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewsletterFocus {
    #[default]
    Email,
    Topic(usize),
}

/// Signup plus its email input
#[derive(Debug, Clone, Default)]
pub struct NewsletterFormState {
    pub signup: NewsletterSignup,
    pub email: TextInput,
    pub focus: NewsletterFocus,
}

impl NewsletterFormState {
    pub fn new() -> Self {
        Self {
            signup: NewsletterSignup::new(),
            email: TextInput::new().placeholder("Enter your email address"),
            focus: NewsletterFocus::Email,
        }
    }

    fn rows() -> usize {
        Preference::ALL.len() + 1
    }

    fn row(&self) -> usize {
        match self.focus {
            NewsletterFocus::Email => 0,
            NewsletterFocus::Topic(i) => i + 1,
        }
    }

    fn set_row(&mut self, row: usize) {
        self.focus = match row {
            0 => NewsletterFocus::Email,
            n => NewsletterFocus::Topic(n - 1),
        };
    }

    pub fn next_row(&mut self) {
        self.set_row((self.row() + 1) % Self::rows());
    }

    pub fn prev_row(&mut self) {
        self.set_row((self.row() + Self::rows() - 1) % Self::rows());
    }

    /// Toggle the topic under the cursor
    pub fn toggle_focused(&mut self) {
        if let NewsletterFocus::Topic(i) = self.focus {
            if let Some(preference) = Preference::ALL.get(i) {
                self.signup.toggle(*preference);
            }
        }
    }

    fn edit_email(&mut self, edit: impl FnOnce(&mut TextInput)) {
        edit(&mut self.email);
        self.signup.set_email(self.email.value());
    }
}

/// Handle a key while the form has focus. Returns whether it was consumed.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.newsletter;

    if key.code == KeyCode::Esc {
        app.focused_panel = FocusedPanel::Sidebar;
        return true;
    }
    if form.signup.is_subscribed() {
        return false;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => form.next_row(),
        KeyCode::BackTab | KeyCode::Up => form.prev_row(),
        KeyCode::Enter => match form.signup.submit() {
            Ok(()) => app.set_status("Subscribed to the newsletter"),
            Err(e) => app.set_status(e.to_string()),
        },
        KeyCode::Char(' ') if form.focus != NewsletterFocus::Email => form.toggle_focused(),
        _ if form.focus != NewsletterFocus::Email => return false,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.edit_email(|input| input.insert(c))
        }
        KeyCode::Backspace => form.edit_email(TextInput::backspace),
        KeyCode::Delete => form.edit_email(TextInput::delete),
        KeyCode::Left => form.email.move_left(),
        KeyCode::Right => form.email.move_right(),
        KeyCode::Home => form.email.move_start(),
        KeyCode::End => form.email.move_end(),
        _ => return false,
    }
    true
}

/// Render the newsletter section
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Never Miss a Market Move ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &app.newsletter;
    if form.signup.is_subscribed() {
        render_confirmation(frame, &form.signup, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Blurb
            Constraint::Length(2), // Email
            Constraint::Min(4),    // Topics
            Constraint::Length(2), // Button
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(
            "Get personalized investment insights, market analysis, and exclusive tips \
             delivered to your inbox.",
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let email = form
        .email
        .clone()
        .label("Email")
        .focused(is_focused && form.focus == NewsletterFocus::Email);
    frame.render_widget(email, chunks[1]);

    let topics: Vec<Line> = Preference::ALL
        .iter()
        .enumerate()
        .map(|(i, preference)| {
            let focused = is_focused && form.focus == NewsletterFocus::Topic(i);
            let checked = form.signup.is_selected(*preference);
            let style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::raw(if focused { "▶ " } else { "  " }),
                Span::styled(if checked { "[x] " } else { "[ ] " }, style),
                Span::styled(format!("{:<18}", preference.label()), style),
                Span::styled(preference.description(), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(topics), chunks[2]);

    let button_style = if form.signup.can_submit() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(" [Enter] Subscribe Now ", button_style)),
            Line::from(Span::styled(
                "Free to subscribe • Unsubscribe anytime • No spam, ever",
                Style::default().fg(Color::DarkGray),
            )),
        ]),
        chunks[3],
    );
}

fn render_confirmation(frame: &mut Frame, signup: &NewsletterSignup, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "✓ Welcome to InvestPro Insights!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Thank you for subscribing to our newsletter. You'll receive your first"),
        Line::from("update within 24 hours."),
        Line::from(""),
    ];
    for preference in signup.preferences() {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(Color::Green)),
            Span::raw(preference.label()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::tui::app::Section;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn newsletter_app(settings: &Settings) -> App<'_> {
        let mut app = App::new(settings);
        app.switch_section(Section::Newsletter);
        app.focused_panel = FocusedPanel::Main;
        app
    }

    #[test]
    fn test_subscribe_flow() {
        let settings = Settings::default();
        let mut app = newsletter_app(&settings);

        for c in "reader@example.com".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.newsletter.signup.preferences(), &[Preference::InvestmentTips]);

        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.newsletter.signup.is_subscribed());
        assert_eq!(app.newsletter.signup.email(), "reader@example.com");
    }

    #[test]
    fn test_submit_without_topics_is_refused() {
        let settings = Settings::default();
        let mut app = newsletter_app(&settings);

        for c in "a@b.c".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(!app.newsletter.signup.is_subscribed());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_space_in_email_is_text() {
        let settings = Settings::default();
        let mut app = newsletter_app(&settings);
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.newsletter.email.value(), " ");
        assert!(app.newsletter.signup.preferences().is_empty());
    }

    #[test]
    fn test_row_navigation_wraps() {
        let mut form = NewsletterFormState::new();
        form.prev_row();
        assert_eq!(form.focus, NewsletterFocus::Topic(3));
        form.next_row();
        assert_eq!(form.focus, NewsletterFocus::Email);
    }
}
