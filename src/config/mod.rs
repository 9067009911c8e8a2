//! Configuration module for InvestPro
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - Display and refresh preferences

pub mod paths;
pub mod settings;

pub use paths::InvestPaths;
pub use settings::Settings;
