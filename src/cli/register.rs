//! Interactive registration
//!
//! Walks the registration wizard from the terminal. Text fields are read
//! line by line; passwords are read without echo.

use std::io::{self, BufRead, Write};

use crate::error::{InvestError, InvestResult};
use crate::models::{InitialInvestment, InvestmentExperience, RiskTolerance};
use crate::registration::{
    AccountCreator, LocalAccountCreator, ProvisionedAccount, RegistrationWizard, StepOutcome,
    SubmitOutcome, WizardStep,
};

/// Reads a secret without echoing it
pub type SecretReader<'a> = dyn FnMut(&str) -> io::Result<String> + 'a;

/// Run the registration prompts against the real terminal
pub fn handle_register_command() -> InvestResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut read_secret = |prompt: &str| rpassword::prompt_password(prompt);

    let creator = LocalAccountCreator::new();
    match run_registration(&mut input, &mut out, &mut read_secret, &creator)? {
        Some(account) => {
            println!("Account {} is ready.", account.id);
            Ok(())
        }
        None => {
            println!("No account was created.");
            Ok(())
        }
    }
}

/// Drive a wizard to completion
///
/// Returns `None` when input ends before the flow is finished.
pub fn run_registration<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    read_secret: &mut SecretReader<'_>,
    creator: &dyn AccountCreator,
) -> InvestResult<Option<ProvisionedAccount>> {
    let mut wizard = RegistrationWizard::new();
    let mut account = None;

    writeln!(out)?;
    writeln!(out, "===========================================")?;
    writeln!(out, "  Create Your Investment Account")?;
    writeln!(out, "===========================================")?;
    writeln!(out, "Press Ctrl+C at any time to cancel.")?;

    loop {
        let step = wizard.step();
        writeln!(out)?;
        writeln!(out, "{}", step)?;
        writeln!(out, "{}", step.description())?;

        let finished_prompts = match step {
            WizardStep::PersonalInfo => personal_info(&mut wizard, input, out)?,
            WizardStep::InvestmentProfile => investment_profile(&mut wizard, input, out)?,
            WizardStep::Security => security(&mut wizard, input, out, read_secret)?,
            WizardStep::Verification => {
                return verification(&mut wizard, input, out, account);
            }
        };
        if !finished_prompts {
            return Ok(None);
        }
        if wizard.step() != step {
            continue;
        }

        if step == WizardStep::Security {
            match wizard.submit()? {
                SubmitOutcome::Completed(form) => match creator.create_account(&form) {
                    Ok(created) => account = Some(created),
                    Err(e) => {
                        tracing::warn!(error = %e, "account creation failed");
                        writeln!(out, "We could not create your account: {}", e)?;
                    }
                },
                SubmitOutcome::Rejected { .. } => print_errors(&wizard, out)?,
            }
            continue;
        }

        match wizard.next() {
            StepOutcome::Rejected { .. } => print_errors(&wizard, out)?,
            StepOutcome::Moved { .. } | StepOutcome::Unchanged(_) => {}
        }
    }
}

fn personal_info<R: BufRead, W: Write>(
    wizard: &mut RegistrationWizard,
    input: &mut R,
    out: &mut W,
) -> InvestResult<bool> {
    let Some(name) = prompt(input, out, "Full name", &wizard.form().full_name)? else {
        return Ok(false);
    };
    wizard.set_full_name(name);

    let Some(email) = prompt(input, out, "Email address", &wizard.form().email)? else {
        return Ok(false);
    };
    wizard.set_email(email);

    let Some(phone) = prompt(input, out, "Phone number", &wizard.form().phone)? else {
        return Ok(false);
    };
    wizard.set_phone(phone);

    Ok(true)
}

fn investment_profile<R: BufRead, W: Write>(
    wizard: &mut RegistrationWizard,
    input: &mut R,
    out: &mut W,
) -> InvestResult<bool> {
    writeln!(out, "Enter < at any question to return to the previous step.")?;

    match choose(
        input,
        out,
        "Investment experience",
        InvestmentExperience::ALL,
        InvestmentExperience::label,
        InvestmentExperience::parse,
        InvestmentExperience::KIND,
    )? {
        None => return Ok(false),
        Some(Choice::Back) => return Ok(retreat(wizard)),
        Some(Choice::Picked(value)) => wizard.set_investment_experience(value),
        Some(Choice::Skipped) => {}
    }

    match choose(
        input,
        out,
        "Risk tolerance",
        RiskTolerance::ALL,
        RiskTolerance::label,
        RiskTolerance::parse,
        RiskTolerance::KIND,
    )? {
        None => return Ok(false),
        Some(Choice::Back) => return Ok(retreat(wizard)),
        Some(Choice::Picked(value)) => wizard.set_risk_tolerance(value),
        Some(Choice::Skipped) => {}
    }

    match choose(
        input,
        out,
        "Initial investment amount",
        InitialInvestment::ALL,
        InitialInvestment::label,
        InitialInvestment::parse,
        InitialInvestment::KIND,
    )? {
        None => return Ok(false),
        Some(Choice::Back) => return Ok(retreat(wizard)),
        Some(Choice::Picked(value)) => wizard.set_initial_investment(value),
        Some(Choice::Skipped) => {}
    }

    Ok(true)
}

fn security<R: BufRead, W: Write>(
    wizard: &mut RegistrationWizard,
    input: &mut R,
    out: &mut W,
    read_secret: &mut SecretReader<'_>,
) -> InvestResult<bool> {
    writeln!(out, "Enter < at either yes/no question to return to the previous step.")?;

    let password = read_secret("Password (min 8 characters): ")
        .map_err(|e| InvestError::Io(format!("Failed to read password: {}", e)))?;
    wizard.set_password(password);

    let confirm = read_secret("Confirm password: ")
        .map_err(|e| InvestError::Io(format!("Failed to read password: {}", e)))?;
    wizard.set_confirm_password(confirm);

    let Some(terms) = prompt(input, out, "Agree to the Terms of Service and Privacy Policy? (yes/no)", "no")? else {
        return Ok(false);
    };
    if is_back(&terms) {
        return Ok(retreat(wizard));
    }
    wizard.set_agree_to_terms(is_yes(&terms));

    let Some(newsletter) = prompt(input, out, "Subscribe to the newsletter? (yes/no)", "yes")? else {
        return Ok(false);
    };
    if is_back(&newsletter) {
        return Ok(retreat(wizard));
    }
    wizard.set_subscribe_newsletter(is_yes(&newsletter));

    Ok(true)
}

/// Step back; the prompts for the earlier step run next
fn retreat(wizard: &mut RegistrationWizard) -> bool {
    wizard.previous();
    true
}

fn verification<R: BufRead, W: Write>(
    wizard: &mut RegistrationWizard,
    input: &mut R,
    out: &mut W,
    account: Option<ProvisionedAccount>,
) -> InvestResult<Option<ProvisionedAccount>> {
    let Some(account) = account else {
        writeln!(out, "Your details were accepted but no account was created.")?;
        return Ok(None);
    };

    writeln!(out, "Welcome to InvestPro, {}!", account.full_name)?;
    writeln!(out, "We've sent a verification email to {}.", account.email)?;
    writeln!(out, "Please check your inbox to activate your account.")?;

    if prompt(input, out, "Press Enter to go to your dashboard", "")?.is_none() {
        return Ok(Some(account));
    }
    let mut opened = false;
    wizard.go_to_dashboard(&mut || opened = true)?;
    if opened {
        writeln!(out, "Run 'investpro portfolio' to see your dashboard.")?;
    }

    Ok(Some(account))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice<T> {
    Picked(T),
    Skipped,
    Back,
}

/// Numbered menu; accepts a number, a label or an alias, "<" to go back.
/// A blank answer keeps the current selection.
fn choose<R: BufRead, W: Write, T: Copy>(
    input: &mut R,
    out: &mut W,
    title: &str,
    options: &[T],
    label: fn(&T) -> &'static str,
    parse: fn(&str) -> Option<T>,
    kind: &'static str,
) -> InvestResult<Option<Choice<T>>> {
    writeln!(out, "{}:", title)?;
    for (i, option) in options.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, label(option))?;
    }
    let Some(answer) = prompt(input, out, "Select", "")? else {
        return Ok(None);
    };

    let answer = answer.trim();
    if is_back(answer) {
        return Ok(Some(Choice::Back));
    }
    if answer.is_empty() {
        return Ok(Some(Choice::Skipped));
    }

    let picked = answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i).copied())
        .or_else(|| parse(answer));

    match picked {
        Some(value) => Ok(Some(Choice::Picked(value))),
        None => {
            writeln!(out, "  {}", InvestError::unknown(kind, answer))?;
            Ok(Some(Choice::Skipped))
        }
    }
}

/// Read one line; blank keeps `current`. `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    current: &str,
) -> InvestResult<Option<String>> {
    if current.is_empty() {
        write!(out, "{}: ", label)?;
    } else {
        write!(out, "{} [{}]: ", label, current)?;
    }
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim_end_matches(['\r', '\n']);
    Ok(Some(if line.is_empty() {
        current.to_string()
    } else {
        line.to_string()
    }))
}

fn is_back(answer: &str) -> bool {
    answer.trim() == "<"
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn print_errors<W: Write>(wizard: &RegistrationWizard, out: &mut W) -> InvestResult<()> {
    writeln!(out, "Please fix the following:")?;
    for (field, message) in wizard.errors().iter() {
        writeln!(out, "  ✗ {}: {}", field.label(), message)?;
    }
    Ok(())
}
