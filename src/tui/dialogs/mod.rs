//! Dialog modules for the TUI
//!
//! Modal overlays drawn above the main panel

pub mod help;
