//! Registration step-wizard
//!
//! A linear four-step flow (personal info, investment profile, security,
//! verification) gated by per-step validation. The wizard is a plain value
//! owned by whoever drives the flow; account creation and navigation are
//! collaborators passed in explicitly.

pub mod account;
pub mod navigation;
pub mod steps;
pub mod validation;
pub mod wizard;

pub use account::{AccountCreator, LocalAccountCreator, ProvisionedAccount};
pub use navigation::Navigator;
pub use steps::{StepStatus, WizardStep};
pub use validation::FieldErrors;
pub use wizard::{RegistrationWizard, StepOutcome, SubmitOutcome};
