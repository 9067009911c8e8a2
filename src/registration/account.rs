//! Account-creation collaborator
//!
//! Receives the completed registration form. Persistence, email
//! verification and identity checks belong to whatever implements
//! [`AccountCreator`]; [`LocalAccountCreator`] only provisions an in-memory
//! record so the flow can be exercised end to end.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{InvestError, InvestResult};
use crate::models::{AccountId, RegistrationForm};

use super::steps::WizardStep;
use super::validation::{validate_step, FieldErrors};

/// What the platform hands back for a newly registered user
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionedAccount {
    pub id: AccountId,
    pub full_name: String,
    pub email: String,
    pub subscribe_newsletter: bool,
    pub created_at: DateTime<Utc>,
    /// Argon2id PHC string; the plaintext never leaves the form
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Creates an account from a completed registration form
pub trait AccountCreator {
    fn create_account(&self, form: &RegistrationForm) -> InvestResult<ProvisionedAccount>;
}

/// In-memory account creator
///
/// Re-checks the form, hashes the password and returns a fresh account id.
/// Nothing is stored.
#[derive(Default)]
pub struct LocalAccountCreator {
    hasher: Argon2<'static>,
}

impl LocalAccountCreator {
    pub fn new() -> Self {
        Self::default()
    }

    fn hash_password(&self, password: &str) -> InvestResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .hasher
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| InvestError::Account(format!("Password hashing failed: {}", e)))?;
        Ok(hash.to_string())
    }
}

impl AccountCreator for LocalAccountCreator {
    fn create_account(&self, form: &RegistrationForm) -> InvestResult<ProvisionedAccount> {
        let problems = incomplete_fields(form);
        if !problems.is_empty() {
            let fields: Vec<&str> = problems.iter().map(|(field, _)| field.name()).collect();
            warn!(fields = ?fields, "refusing incomplete registration");
            return Err(InvestError::Account(format!(
                "Registration is incomplete: {}",
                fields.join(", ")
            )));
        }

        let account = ProvisionedAccount {
            id: AccountId::new(),
            full_name: form.full_name.trim().to_string(),
            email: form.email.trim().to_string(),
            subscribe_newsletter: form.subscribe_newsletter,
            created_at: Utc::now(),
            password_hash: self.hash_password(&form.password)?,
        };

        info!(account = %account.id, newsletter = account.subscribe_newsletter, "account provisioned");
        Ok(account)
    }
}

/// Every data-entry step's failures, merged
fn incomplete_fields(form: &RegistrationForm) -> FieldErrors {
    let mut merged = FieldErrors::new();
    for step in [
        WizardStep::PersonalInfo,
        WizardStep::InvestmentProfile,
        WizardStep::Security,
    ] {
        for (field, message) in validate_step(step, form).iter() {
            merged.set(field, message);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InitialInvestment, InvestmentExperience, RiskTolerance};
    use argon2::{PasswordHash, PasswordVerifier};
    use zeroize::Zeroizing;

    fn complete_form() -> RegistrationForm {
        RegistrationForm {
            full_name: "  Grace Hopper ".into(),
            email: "grace@example.com".into(),
            phone: "555-0199".into(),
            investment_experience: Some(InvestmentExperience::Professional),
            risk_tolerance: Some(RiskTolerance::Conservative),
            initial_investment: Some(InitialInvestment::Band4),
            password: Zeroizing::new("correct horse".into()),
            confirm_password: Zeroizing::new("correct horse".into()),
            agree_to_terms: true,
            subscribe_newsletter: true,
        }
    }

    #[test]
    fn test_provisions_account() {
        let creator = LocalAccountCreator::new();
        let account = creator.create_account(&complete_form()).unwrap();

        assert_eq!(account.full_name, "Grace Hopper");
        assert_eq!(account.email, "grace@example.com");
        assert!(account.subscribe_newsletter);
        assert!(account.password_hash.starts_with("$argon2"));
    }

    #[test]
    fn test_hash_verifies_against_password() {
        let creator = LocalAccountCreator::new();
        let account = creator.create_account(&complete_form()).unwrap();

        let parsed = PasswordHash::new(&account.password_hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"correct horse", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"wrong horse", &parsed)
            .is_err());
    }

    #[test]
    fn test_hash_not_serialized() {
        let creator = LocalAccountCreator::new();
        let account = creator.create_account(&complete_form()).unwrap();
        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2"));
    }

    #[test]
    fn test_rejects_incomplete_form() {
        let creator = LocalAccountCreator::new();
        let mut form = complete_form();
        form.agree_to_terms = false;
        form.phone.clear();

        let err = creator.create_account(&form).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("phone"));
        assert!(msg.contains("agree_to_terms"));
    }
}
