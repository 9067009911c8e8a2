//! Newsletter CLI command

use clap::Args;

use crate::error::{InvestError, InvestResult};
use crate::models::Preference;
use crate::services::NewsletterSignup;

/// Arguments for `investpro newsletter`
#[derive(Args, Debug)]
pub struct NewsletterArgs {
    /// Address to subscribe
    pub email: String,
    /// Topic to subscribe to (market-updates, investment-tips,
    /// portfolio-alerts, security-updates); repeat for several
    #[arg(short, long = "pref")]
    pub preferences: Vec<String>,
}

/// Subscribe an address to newsletter topics
pub fn handle_newsletter_command(args: NewsletterArgs) -> InvestResult<()> {
    let mut signup = NewsletterSignup::new();
    signup.set_email(args.email);

    for raw in &args.preferences {
        let preference =
            Preference::parse(raw).ok_or_else(|| InvestError::unknown("newsletter topic", raw))?;
        if !signup.is_selected(preference) {
            signup.toggle(preference);
        }
    }

    signup.submit()?;

    println!("Subscribed {} to:", signup.email());
    for preference in signup.preferences() {
        println!("  ✓ {} - {}", preference.label(), preference.description());
    }
    Ok(())
}
