//! Newsletter service
//!
//! Opt-in form state: an email, a set of topics and a one-way switch to
//! the subscribed state.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{InvestError, InvestResult};
use crate::models::Preference;

/// Newsletter opt-in form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewsletterSignup {
    email: String,
    preferences: Vec<Preference>,
    subscribed: bool,
}

impl NewsletterSignup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Selected topics, in the order they were picked
    pub fn preferences(&self) -> &[Preference] {
        &self.preferences
    }

    pub fn is_selected(&self, preference: Preference) -> bool {
        self.preferences.contains(&preference)
    }

    /// Add the topic if absent, remove it if present
    pub fn toggle(&mut self, preference: Preference) {
        if let Some(pos) = self.preferences.iter().position(|p| *p == preference) {
            self.preferences.remove(pos);
        } else {
            self.preferences.push(preference);
        }
        debug!(topic = preference.id(), selected = self.is_selected(preference), "newsletter topic toggled");
    }

    pub fn can_submit(&self) -> bool {
        !self.subscribed && !self.email.is_empty() && !self.preferences.is_empty()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Subscribe with the current email and topics
    pub fn submit(&mut self) -> InvestResult<()> {
        if self.subscribed {
            return Err(InvestError::Validation("Already subscribed".into()));
        }
        if self.email.is_empty() {
            return Err(InvestError::Validation("Email is required".into()));
        }
        if self.preferences.is_empty() {
            return Err(InvestError::Validation(
                "Select at least one newsletter topic".into(),
            ));
        }

        self.subscribed = true;
        let topics: Vec<&str> = self.preferences.iter().map(|p| p.id()).collect();
        info!(topics = ?topics, "newsletter subscription accepted");
        Ok(())
    }
}
