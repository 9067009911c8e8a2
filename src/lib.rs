//! InvestPro - terminal investment platform front end
//!
//! This library provides the pieces behind the InvestPro terminal app: a
//! multi-step account registration wizard plus the landing sections around
//! it (simulated market grid, demo portfolio, news feed and newsletter
//! opt-in). All market, portfolio and news data is simulated.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (form, quotes, holdings, headlines, topics)
//! - `registration`: The registration wizard, its validation and collaborators
//! - `feed`: Simulated market, news and portfolio data
//! - `services`: Business logic layer
//! - `display`: Table formatting for the CLI
//! - `export`: JSON and YAML snapshots
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use investpro::registration::{RegistrationWizard, StepOutcome, WizardStep};
//!
//! let mut wizard = RegistrationWizard::new();
//! wizard.set_full_name("Ada Lovelace");
//! wizard.set_email("ada@example.com");
//! wizard.set_phone("555-0100");
//!
//! assert!(matches!(wizard.next(), StepOutcome::Moved { .. }));
//! assert_eq!(wizard.step(), WizardStep::InvestmentProfile);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod feed;
pub mod logging;
pub mod models;
pub mod registration;
pub mod services;
pub mod tui;

pub use error::{InvestError, InvestResult};
