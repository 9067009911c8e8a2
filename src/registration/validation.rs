//! Per-step validation
//!
//! Each step has a pure validator from the form to the set of failing
//! fields. Checks on the same field run in order and the last failing one
//! decides the message.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::models::{FormField, RegistrationForm};

use super::steps::WizardStep;

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const EXPERIENCE_REQUIRED: &str = "Please select your experience level";
pub const RISK_REQUIRED: &str = "Please select your risk tolerance";
pub const INVESTMENT_REQUIRED: &str = "Please select initial investment amount";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";
pub const TERMS_REQUIRED: &str = "You must agree to the terms and conditions";

/// Minimum password length, counted in UTF-16 code units
pub const MIN_PASSWORD_LEN: usize = 8;

/// Field name to message mapping for one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Record a failure, replacing any earlier message for the field
    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop one field's error. Returns whether there was one.
    pub fn clear_field(&mut self, field: FormField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Failing fields and messages, in field order
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Validate the fields collected on `step`
pub fn validate_step(step: WizardStep, form: &RegistrationForm) -> FieldErrors {
    match step {
        WizardStep::PersonalInfo => validate_personal_info(form),
        WizardStep::InvestmentProfile => validate_investment_profile(form),
        WizardStep::Security => validate_security(form),
        WizardStep::Verification => FieldErrors::new(),
    }
}

/// Step 1: name, email, phone
pub fn validate_personal_info(form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.full_name.trim().is_empty() {
        errors.set(FormField::FullName, FULL_NAME_REQUIRED);
    }
    if form.email.trim().is_empty() {
        errors.set(FormField::Email, EMAIL_REQUIRED);
    }
    if !is_valid_email(&form.email) {
        errors.set(FormField::Email, EMAIL_INVALID);
    }
    if form.phone.trim().is_empty() {
        errors.set(FormField::Phone, PHONE_REQUIRED);
    }

    errors
}

/// Step 2: the three profile choices
pub fn validate_investment_profile(form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.investment_experience.is_none() {
        errors.set(FormField::InvestmentExperience, EXPERIENCE_REQUIRED);
    }
    if form.risk_tolerance.is_none() {
        errors.set(FormField::RiskTolerance, RISK_REQUIRED);
    }
    if form.initial_investment.is_none() {
        errors.set(FormField::InitialInvestment, INVESTMENT_REQUIRED);
    }

    errors
}

/// Step 3: password, confirmation, terms
pub fn validate_security(form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.password.trim().is_empty() {
        errors.set(FormField::Password, PASSWORD_REQUIRED);
    }
    if utf16_len(&form.password) < MIN_PASSWORD_LEN {
        errors.set(FormField::Password, PASSWORD_TOO_SHORT);
    }
    if *form.password != *form.confirm_password {
        errors.set(FormField::ConfirmPassword, PASSWORDS_DIFFER);
    }
    if !form.agree_to_terms {
        errors.set(FormField::AgreeToTerms, TERMS_REQUIRED);
    }

    errors
}

/// Loose email shape check: something@something.something, anywhere in
/// the string.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
        .is_match(email)
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}
