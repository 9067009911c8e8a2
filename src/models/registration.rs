//! Registration form model
//!
//! The record collected by the registration wizard, the choice enums used on
//! the investment-profile step, and the field names errors are keyed by.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroizing;

/// Declares a choice enum with a display label and a loose parser.
macro_rules! define_choice {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal [$($alias:literal),*]),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every option, in display order
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            /// Human-readable label
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Parse from a label, variant name or alias (case-insensitive)
            pub fn parse(s: &str) -> Option<Self> {
                let needle = s.trim().to_lowercase();
                $(
                    if needle == $label.to_lowercase()
                        || needle == stringify!($variant).to_lowercase()
                        $(|| needle == $alias)*
                    {
                        return Some(Self::$variant);
                    }
                )+
                None
            }

            /// Name used in error messages for unknown values
            pub const KIND: &'static str = $kind;
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

define_choice! {
    /// Self-declared investing experience
    InvestmentExperience, "experience level" {
        Beginner => "Beginner" [],
        Intermediate => "Intermediate" [],
        Advanced => "Advanced" [],
        Professional => "Professional" ["pro"],
    }
}

define_choice! {
    /// Appetite for risk
    RiskTolerance, "risk tolerance" {
        Conservative => "Conservative" [],
        Moderate => "Moderate" [],
        Aggressive => "Aggressive" [],
        VeryAggressive => "Very Aggressive" ["very-aggressive", "very_aggressive"],
    }
}

define_choice! {
    /// Initial investment band
    InitialInvestment, "investment amount" {
        Band1 => "$1,000 - $5,000" ["1", "1k-5k"],
        Band2 => "$5,000 - $10,000" ["2", "5k-10k"],
        Band3 => "$10,000 - $25,000" ["3", "10k-25k"],
        Band4 => "$25,000+" ["4", "25k+"],
    }
}

/// Fields of the registration form, used as error keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FullName,
    Email,
    Phone,
    InvestmentExperience,
    RiskTolerance,
    InitialInvestment,
    Password,
    ConfirmPassword,
    AgreeToTerms,
    SubscribeNewsletter,
}

impl FormField {
    /// Stable field name
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::InvestmentExperience => "investment_experience",
            Self::RiskTolerance => "risk_tolerance",
            Self::InitialInvestment => "initial_investment",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
            Self::AgreeToTerms => "agree_to_terms",
            Self::SubscribeNewsletter => "subscribe_newsletter",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::InvestmentExperience => "Investment Experience",
            Self::RiskTolerance => "Risk Tolerance",
            Self::InitialInvestment => "Initial Investment Amount",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::AgreeToTerms => "Terms of Service and Privacy Policy",
            Self::SubscribeNewsletter => "Newsletter",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The record collected across the wizard steps
///
/// Password fields are wiped from memory when the form is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub investment_experience: Option<InvestmentExperience>,
    pub risk_tolerance: Option<RiskTolerance>,
    pub initial_investment: Option<InitialInvestment>,
    pub password: Zeroizing<String>,
    pub confirm_password: Zeroizing<String>,
    pub agree_to_terms: bool,
    pub subscribe_newsletter: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            investment_experience: None,
            risk_tolerance: None,
            initial_investment: None,
            password: Zeroizing::new(String::new()),
            confirm_password: Zeroizing::new(String::new()),
            agree_to_terms: false,
            subscribe_newsletter: true,
        }
    }
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("investment_experience", &self.investment_experience)
            .field("risk_tolerance", &self.risk_tolerance)
            .field("initial_investment", &self.initial_investment)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .field("agree_to_terms", &self.agree_to_terms)
            .field("subscribe_newsletter", &self.subscribe_newsletter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults() {
        let form = RegistrationForm::default();
        assert!(form.full_name.is_empty());
        assert!(form.investment_experience.is_none());
        assert!(!form.agree_to_terms);
        assert!(form.subscribe_newsletter);
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let form = RegistrationForm {
            password: Zeroizing::new("hunter2hunter2".into()),
            ..Default::default()
        };
        let shown = format!("{:?}", form);
        assert!(!shown.contains("hunter2"));
        assert!(shown.contains("<redacted>"));
    }

    #[test]
    fn test_choice_labels() {
        assert_eq!(RiskTolerance::VeryAggressive.to_string(), "Very Aggressive");
        assert_eq!(InitialInvestment::Band4.label(), "$25,000+");
        assert_eq!(InvestmentExperience::ALL.len(), 4);
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(
            InvestmentExperience::parse("advanced"),
            Some(InvestmentExperience::Advanced)
        );
        assert_eq!(
            RiskTolerance::parse("Very Aggressive"),
            Some(RiskTolerance::VeryAggressive)
        );
        assert_eq!(
            RiskTolerance::parse("veryaggressive"),
            Some(RiskTolerance::VeryAggressive)
        );
        assert_eq!(InitialInvestment::parse("3"), Some(InitialInvestment::Band3));
        assert_eq!(
            InitialInvestment::parse("$5,000 - $10,000"),
            Some(InitialInvestment::Band2)
        );
        assert_eq!(InvestmentExperience::parse("guru"), None);
    }

    #[test]
    fn test_field_names() {
        assert_eq!(FormField::ConfirmPassword.name(), "confirm_password");
        assert_eq!(FormField::AgreeToTerms.to_string(), "agree_to_terms");
    }
}
