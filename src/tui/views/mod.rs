//! TUI Views module
//!
//! One view per landing-page section, plus the sidebar and status bar.

pub mod hero;
pub mod market;
pub mod news;
pub mod newsletter;
pub mod portfolio;
pub mod registration;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App, Section};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.active_section {
        Section::Hero => hero::render(frame, app, layout.main),
        Section::Market => market::render(frame, app, layout.main),
        Section::Portfolio => portfolio::render(frame, app, layout.main),
        Section::News => news::render(frame, app, layout.main),
        Section::Newsletter => newsletter::render(frame, app, layout.main),
        Section::Registration => registration::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}
