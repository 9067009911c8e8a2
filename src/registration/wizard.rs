//! Registration wizard state machine
//!
//! Owns the form record, the current step and the error set. Transition
//! logic lives here; what counts as valid lives in [`super::validation`].

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::error::{InvestError, InvestResult};
use crate::models::{
    FormField, InitialInvestment, InvestmentExperience, RegistrationForm, RiskTolerance,
};

use super::navigation::Navigator;
use super::steps::WizardStep;
use super::validation::{validate_step, FieldErrors};

/// Result of a `next()` or `previous()` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The wizard moved between steps
    Moved { from: WizardStep, to: WizardStep },
    /// Validation failed; the wizard stayed put
    Rejected { step: WizardStep, failed: usize },
    /// Nothing to do (floor or terminal step)
    Unchanged(WizardStep),
}

/// Result of a `submit()` call from the security step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the wizard is on the terminal step and this is the
    /// record to hand to the account-creation collaborator
    Completed(RegistrationForm),
    /// Validation failed; the wizard stayed on the security step
    Rejected { failed: usize },
}

/// The registration step-wizard
#[derive(Debug, Clone, Default)]
pub struct RegistrationWizard {
    step: WizardStep,
    form: RegistrationForm,
    errors: FieldErrors,
    dismissed: bool,
}

impl RegistrationWizard {
    /// Start a fresh registration session on step 1
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error message for a field, if it currently has one
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Whether the success screen has been dismissed
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Validate the current step and advance on success
    pub fn next(&mut self) -> StepOutcome {
        let from = self.step;
        if from.is_terminal() {
            return StepOutcome::Unchanged(from);
        }

        if !self.run_validation() {
            debug!(step = from.number(), failed = self.errors.len(), "step rejected");
            return StepOutcome::Rejected {
                step: from,
                failed: self.errors.len(),
            };
        }

        self.step = from.next();
        debug!(from = from.number(), to = self.step.number(), "step advanced");
        StepOutcome::Moved {
            from,
            to: self.step,
        }
    }

    /// Go back one step without validating
    pub fn previous(&mut self) -> StepOutcome {
        let from = self.step;
        let to = from.prev();
        if to == from {
            return StepOutcome::Unchanged(from);
        }
        self.step = to;
        debug!(from = from.number(), to = to.number(), "step retreated");
        StepOutcome::Moved { from, to }
    }

    /// Finish the flow from the security step
    ///
    /// On success the wizard moves to the terminal step and returns a copy
    /// of the completed form for the caller to pass to an
    /// [`AccountCreator`](super::account::AccountCreator).
    ///
    /// # Errors
    ///
    /// Returns [`InvestError::WrongStep`] when called from any other step;
    /// the wizard is left untouched.
    pub fn submit(&mut self) -> InvestResult<SubmitOutcome> {
        if self.step != WizardStep::Security {
            return Err(InvestError::WrongStep {
                action: "submit",
                step: self.step.number(),
            });
        }

        if !self.run_validation() {
            debug!(failed = self.errors.len(), "submission rejected");
            return Ok(SubmitOutcome::Rejected {
                failed: self.errors.len(),
            });
        }

        self.step = WizardStep::Verification;
        info!(newsletter = self.form.subscribe_newsletter, "registration completed");
        Ok(SubmitOutcome::Completed(self.form.clone()))
    }

    /// Leave the success screen for the dashboard
    ///
    /// The navigator is called at most once per session.
    pub fn go_to_dashboard(&mut self, navigator: &mut dyn Navigator) -> InvestResult<()> {
        if !self.step.is_terminal() {
            return Err(InvestError::WrongStep {
                action: "go to dashboard",
                step: self.step.number(),
            });
        }
        if !self.dismissed {
            self.dismissed = true;
            navigator.go_to_dashboard();
        }
        Ok(())
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.form.full_name = value.into();
        self.field_changed(FormField::FullName);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
        self.field_changed(FormField::Email);
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.form.phone = value.into();
        self.field_changed(FormField::Phone);
    }

    pub fn set_investment_experience(&mut self, value: InvestmentExperience) {
        self.form.investment_experience = Some(value);
        self.field_changed(FormField::InvestmentExperience);
    }

    pub fn set_risk_tolerance(&mut self, value: RiskTolerance) {
        self.form.risk_tolerance = Some(value);
        self.field_changed(FormField::RiskTolerance);
    }

    pub fn set_initial_investment(&mut self, value: InitialInvestment) {
        self.form.initial_investment = Some(value);
        self.field_changed(FormField::InitialInvestment);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.password = Zeroizing::new(value.into());
        self.field_changed(FormField::Password);
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.form.confirm_password = Zeroizing::new(value.into());
        self.field_changed(FormField::ConfirmPassword);
    }

    pub fn set_agree_to_terms(&mut self, value: bool) {
        self.form.agree_to_terms = value;
        self.field_changed(FormField::AgreeToTerms);
    }

    pub fn set_subscribe_newsletter(&mut self, value: bool) {
        self.form.subscribe_newsletter = value;
        self.field_changed(FormField::SubscribeNewsletter);
    }

    /// Only the edited field's error goes away; nothing is revalidated.
    fn field_changed(&mut self, field: FormField) {
        self.errors.clear_field(field);
    }

    /// Replace the error set with the current step's failures
    fn run_validation(&mut self) -> bool {
        self.errors = validate_step(self.step, &self.form);
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::validation::{
        EMAIL_INVALID, FULL_NAME_REQUIRED, PASSWORDS_DIFFER, PASSWORD_TOO_SHORT, PHONE_REQUIRED,
    };

    fn fill_personal(wizard: &mut RegistrationWizard) {
        wizard.set_full_name("Ada Lovelace");
        wizard.set_email("ada@example.com");
        wizard.set_phone("+44 20 7946 0000");
    }

    fn fill_profile(wizard: &mut RegistrationWizard) {
        wizard.set_investment_experience(InvestmentExperience::Intermediate);
        wizard.set_risk_tolerance(RiskTolerance::Aggressive);
        wizard.set_initial_investment(InitialInvestment::Band2);
    }

    fn fill_security(wizard: &mut RegistrationWizard) {
        wizard.set_password("longenough1");
        wizard.set_confirm_password("longenough1");
        wizard.set_agree_to_terms(true);
    }

    fn wizard_on_security() -> RegistrationWizard {
        let mut wizard = RegistrationWizard::new();
        fill_personal(&mut wizard);
        wizard.next();
        fill_profile(&mut wizard);
        wizard.next();
        assert_eq!(wizard.step(), WizardStep::Security);
        wizard
    }

    #[test]
    fn test_starts_on_first_step() {
        let wizard = RegistrationWizard::new();
        assert_eq!(wizard.step(), WizardStep::PersonalInfo);
        assert!(wizard.errors().is_empty());
        assert!(wizard.form().subscribe_newsletter);
    }

    #[test]
    fn test_missing_personal_fields_block_advance() {
        let cases: [(&str, &str, &str, FormField); 3] = [
            ("", "a@b.c", "555", FormField::FullName),
            ("Ada", "", "555", FormField::Email),
            ("Ada", "a@b.c", "", FormField::Phone),
        ];

        for (name, email, phone, failing) in cases {
            let mut wizard = RegistrationWizard::new();
            wizard.set_full_name(name);
            wizard.set_email(email);
            wizard.set_phone(phone);

            let outcome = wizard.next();
            assert_eq!(
                outcome,
                StepOutcome::Rejected {
                    step: WizardStep::PersonalInfo,
                    failed: 1
                }
            );
            assert_eq!(wizard.step(), WizardStep::PersonalInfo);
            assert!(wizard.error(failing).is_some());
        }
    }

    #[test]
    fn test_email_format_gate() {
        let mut wizard = RegistrationWizard::new();
        wizard.set_full_name("Ada");
        wizard.set_phone("555");
        wizard.set_email("not-an-email");
        wizard.next();
        assert_eq!(wizard.error(FormField::Email), Some(EMAIL_INVALID));
        assert_eq!(wizard.step(), WizardStep::PersonalInfo);

        wizard.set_email("a@b.c");
        assert_eq!(
            wizard.next(),
            StepOutcome::Moved {
                from: WizardStep::PersonalInfo,
                to: WizardStep::InvestmentProfile
            }
        );
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_submit_rejects_short_password() {
        let mut wizard = wizard_on_security();
        wizard.set_password("short");
        wizard.set_confirm_password("short");
        wizard.set_agree_to_terms(true);

        let outcome = wizard.submit().unwrap();
        assert_eq!(outcome, SubmitOutcome::Rejected { failed: 1 });
        assert_eq!(wizard.error(FormField::Password), Some(PASSWORD_TOO_SHORT));
        assert_eq!(wizard.step(), WizardStep::Security);
    }

    #[test]
    fn test_submit_mismatch_only_on_confirm() {
        let mut wizard = wizard_on_security();
        wizard.set_password("longenough1");
        wizard.set_confirm_password("different");
        wizard.set_agree_to_terms(true);

        wizard.submit().unwrap();
        assert_eq!(wizard.errors().len(), 1);
        assert_eq!(wizard.error(FormField::ConfirmPassword), Some(PASSWORDS_DIFFER));
        assert!(wizard.error(FormField::Password).is_none());
    }

    #[test]
    fn test_submit_success_hands_off_form() {
        let mut wizard = wizard_on_security();
        fill_security(&mut wizard);
        wizard.set_subscribe_newsletter(false);

        match wizard.submit().unwrap() {
            SubmitOutcome::Completed(form) => {
                assert_eq!(form.full_name, "Ada Lovelace");
                assert_eq!(form.risk_tolerance, Some(RiskTolerance::Aggressive));
                assert!(!form.subscribe_newsletter);
            }
            other => panic!("expected completion, got {:?}", other),
        }
        assert_eq!(wizard.step(), WizardStep::Verification);
    }

    #[test]
    fn test_submit_only_from_security() {
        let mut wizard = RegistrationWizard::new();
        fill_personal(&mut wizard);
        let err = wizard.submit().unwrap_err();
        assert!(matches!(err, InvestError::WrongStep { step: 1, .. }));
        assert_eq!(wizard.step(), WizardStep::PersonalInfo);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_previous_floors_at_first_step() {
        let mut wizard = RegistrationWizard::new();
        assert_eq!(
            wizard.previous(),
            StepOutcome::Unchanged(WizardStep::PersonalInfo)
        );
        assert_eq!(wizard.step(), WizardStep::PersonalInfo);
    }

    #[test]
    fn test_next_on_terminal_step_is_noop() {
        let mut wizard = wizard_on_security();
        fill_security(&mut wizard);
        wizard.next();
        assert_eq!(wizard.step(), WizardStep::Verification);

        assert_eq!(
            wizard.next(),
            StepOutcome::Unchanged(WizardStep::Verification)
        );
        assert_eq!(wizard.step(), WizardStep::Verification);
    }

    #[test]
    fn test_previous_keeps_data_and_skips_validation() {
        let mut wizard = wizard_on_security();
        wizard.previous();
        assert_eq!(wizard.step(), WizardStep::InvestmentProfile);
        assert_eq!(wizard.form().full_name, "Ada Lovelace");
        assert_eq!(
            wizard.form().initial_investment,
            Some(InitialInvestment::Band2)
        );
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_editing_clears_only_that_field() {
        let mut wizard = RegistrationWizard::new();
        wizard.set_email("a@b.c");
        wizard.next();
        assert_eq!(wizard.error(FormField::FullName), Some(FULL_NAME_REQUIRED));
        assert_eq!(wizard.error(FormField::Phone), Some(PHONE_REQUIRED));

        wizard.set_full_name("Ada");
        assert!(wizard.error(FormField::FullName).is_none());
        assert_eq!(wizard.error(FormField::Phone), Some(PHONE_REQUIRED));
    }

    #[test]
    fn test_editing_does_not_revalidate() {
        let mut wizard = RegistrationWizard::new();
        wizard.next();
        wizard.set_email("still wrong");
        assert!(wizard.error(FormField::Email).is_none());
    }

    #[test]
    fn test_errors_recomputed_wholesale() {
        let mut wizard = RegistrationWizard::new();
        wizard.next();
        assert_eq!(wizard.errors().len(), 3);

        wizard.set_full_name("Ada");
        wizard.set_email("a@b.c");
        wizard.next();
        assert_eq!(wizard.errors().len(), 1);
        assert!(wizard.error(FormField::Phone).is_some());
    }

    #[test]
    fn test_dashboard_only_from_terminal_step() {
        let mut wizard = RegistrationWizard::new();
        let mut calls = 0;
        let mut nav = || calls += 1;
        assert!(wizard.go_to_dashboard(&mut nav).is_err());
        drop(nav);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_dashboard_navigates_once() {
        let mut wizard = wizard_on_security();
        fill_security(&mut wizard);
        wizard.submit().unwrap();

        let mut calls = 0;
        {
            let mut nav = || calls += 1;
            wizard.go_to_dashboard(&mut nav).unwrap();
            wizard.go_to_dashboard(&mut nav).unwrap();
        }
        assert_eq!(calls, 1);
        assert!(wizard.is_dismissed());
    }
}
