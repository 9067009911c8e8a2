//! Terminal User Interface module
//!
//! This module provides the interactive landing page for InvestPro using
//! ratatui: a sidebar of sections, one view per section, the registration
//! wizard and the newsletter form, and a help overlay.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
