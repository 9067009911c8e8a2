//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog, the focused form, or the
//! section under the cursor.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, FocusedPanel, Section};
use super::event::Event;
use super::views::{newsletter, registration};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) | Event::Resize(_, _) => {}
        Event::Tick => app.on_tick(Instant::now()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // Any key closes the help overlay
    if app.has_dialog() {
        app.close_dialog();
        return;
    }

    if app.focused_panel == FocusedPanel::Main && app.active_section.is_form() {
        let consumed = match app.active_section {
            Section::Newsletter => newsletter::handle_key(app, key),
            _ => registration::handle_key(app, key),
        };
        if consumed {
            return;
        }
    }

    if handle_global_key(app, key) {
        return;
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_section_key(app, key),
    }
}

/// Keys that work from anywhere outside a form. Returns whether consumed.
fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab => app.toggle_panel_focus(),
        KeyCode::Char('h') | KeyCode::Left if app.focused_panel == FocusedPanel::Main => {
            app.focused_panel = FocusedPanel::Sidebar;
        }
        KeyCode::Char('l') | KeyCode::Right if app.focused_panel == FocusedPanel::Sidebar => {
            app.focused_panel = FocusedPanel::Main;
        }
        KeyCode::Char(c) => match Section::from_key(c) {
            Some(section) => app.switch_section(section),
            None => return false,
        },
        _ => return false,
    }
    true
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.cycle_section(true),
        KeyCode::Char('k') | KeyCode::Up => app.cycle_section(false),
        KeyCode::Enter => app.focused_panel = FocusedPanel::Main,
        _ => {}
    }
}

fn handle_section_key(app: &mut App, key: KeyEvent) {
    let now = Instant::now();
    match app.active_section {
        Section::Hero => {
            if key.code == KeyCode::Enter {
                app.switch_section(Section::Registration);
            }
        }
        Section::Market => match key.code {
            KeyCode::Char(']') => {
                let next = app.market.timeframe.next();
                app.market.set_timeframe(next, now);
            }
            KeyCode::Char('[') => {
                let prev = app.market.timeframe.prev();
                app.market.set_timeframe(prev, now);
            }
            KeyCode::Char('r') => {
                app.market.refresh_at(now);
                app.set_status("Quotes refreshed");
            }
            _ => {}
        },
        Section::Portfolio => match key.code {
            KeyCode::Char('b') => app.portfolio.toggle_balance(),
            KeyCode::Char(']') => app.portfolio.cycle_period(true),
            KeyCode::Char('[') => app.portfolio.cycle_period(false),
            _ => {}
        },
        Section::News => match key.code {
            KeyCode::Char(']') => app.news.cycle_filter(true),
            KeyCode::Char('[') => app.news.cycle_filter(false),
            KeyCode::Char('j') | KeyCode::Down => app.news.move_down(),
            KeyCode::Char('k') | KeyCode::Up => app.news.move_up(),
            _ => {}
        },
        // Forms that declined a key (e.g. after subscribing)
        Section::Newsletter | Section::Registration => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Timeframe;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_number_keys_switch_section() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.active_section, Section::News);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_section, Section::Market);
    }

    #[test]
    fn test_quit_and_help() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('?'));
        assert!(app.has_dialog());
        // The key that closes help is swallowed
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_form_captures_letters() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.switch_section(Section::Newsletter);
        app.focused_panel = FocusedPanel::Main;

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.newsletter.email.value(), "q");

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_market_timeframe_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.switch_section(Section::Market);
        app.focused_panel = FocusedPanel::Main;

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.market.timeframe, Timeframe::OneWeek);
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.market.timeframe, Timeframe::OneYear);
    }

    #[test]
    fn test_sidebar_navigation_and_hero_cta() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.active_section, Section::Market);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.active_section, Section::Hero);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focused_panel, FocusedPanel::Main);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.active_section, Section::Registration);
    }

    #[test]
    fn test_portfolio_balance_toggle() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        let before = app.portfolio.show_balance;
        app.switch_section(Section::Portfolio);
        app.focused_panel = FocusedPanel::Main;
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.portfolio.show_balance, !before);
    }

    #[test]
    fn test_portfolio_period_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.switch_section(Section::Portfolio);
        app.focused_panel = FocusedPanel::Main;
        assert_eq!(app.portfolio.period, Timeframe::OneMonth);

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.portfolio.period, Timeframe::ThreeMonths);
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.portfolio.period, Timeframe::OneWeek);
        // The market selector is independent
        assert_eq!(app.market.timeframe, Timeframe::OneDay);
    }
}
