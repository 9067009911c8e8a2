//! Wizard steps
//!
//! The four screens of the registration flow and their progress display.

use std::fmt;

use crate::models::FormField;

/// A screen of the registration wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum WizardStep {
    #[default]
    PersonalInfo,
    InvestmentProfile,
    Security,
    /// Terminal success screen; collects nothing
    Verification,
}

/// How a step is drawn in the progress strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Complete,
    Current,
    Upcoming,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        Self::PersonalInfo,
        Self::InvestmentProfile,
        Self::Security,
        Self::Verification,
    ];

    /// 1-based step number
    pub fn number(&self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::InvestmentProfile => 2,
            Self::Security => 3,
            Self::Verification => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::InvestmentProfile => "Investment Profile",
            Self::Security => "Security",
            Self::Verification => "Verification",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Basic information",
            Self::InvestmentProfile => "Your investment goals",
            Self::Security => "Account protection",
            Self::Verification => "Complete setup",
        }
    }

    /// Following step, capped at the terminal step
    pub fn next(self) -> Self {
        match self {
            Self::PersonalInfo => Self::InvestmentProfile,
            Self::InvestmentProfile => Self::Security,
            Self::Security | Self::Verification => Self::Verification,
        }
    }

    /// Preceding step, floored at the first step
    pub fn prev(self) -> Self {
        match self {
            Self::PersonalInfo | Self::InvestmentProfile => Self::PersonalInfo,
            Self::Security => Self::InvestmentProfile,
            Self::Verification => Self::Security,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Verification)
    }

    /// Fields collected on this step, in input order
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            Self::PersonalInfo => &[FormField::FullName, FormField::Email, FormField::Phone],
            Self::InvestmentProfile => &[
                FormField::InvestmentExperience,
                FormField::RiskTolerance,
                FormField::InitialInvestment,
            ],
            Self::Security => &[
                FormField::Password,
                FormField::ConfirmPassword,
                FormField::AgreeToTerms,
                FormField::SubscribeNewsletter,
            ],
            Self::Verification => &[],
        }
    }

    /// Status of `self` when the wizard is on `current`
    pub fn status(&self, current: WizardStep) -> StepStatus {
        if *self < current {
            StepStatus::Complete
        } else if *self == current {
            StepStatus::Current
        } else {
            StepStatus::Upcoming
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_is_capped() {
        assert_eq!(WizardStep::PersonalInfo.next(), WizardStep::InvestmentProfile);
        assert_eq!(WizardStep::Security.next(), WizardStep::Verification);
        assert_eq!(WizardStep::Verification.next(), WizardStep::Verification);
    }

    #[test]
    fn test_prev_is_floored() {
        assert_eq!(WizardStep::PersonalInfo.prev(), WizardStep::PersonalInfo);
        assert_eq!(WizardStep::Verification.prev(), WizardStep::Security);
    }

    #[test]
    fn test_numbers_and_titles() {
        let numbers: Vec<u8> = WizardStep::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(WizardStep::Security.to_string(), "Step 3: Security");
    }

    #[test]
    fn test_progress_status() {
        let current = WizardStep::Security;
        assert_eq!(WizardStep::PersonalInfo.status(current), StepStatus::Complete);
        assert_eq!(WizardStep::Security.status(current), StepStatus::Current);
        assert_eq!(WizardStep::Verification.status(current), StepStatus::Upcoming);
    }

    #[test]
    fn test_terminal_step_collects_nothing() {
        assert!(WizardStep::Verification.is_terminal());
        assert!(WizardStep::Verification.fields().is_empty());
        assert_eq!(WizardStep::Security.fields().len(), 4);
    }
}
