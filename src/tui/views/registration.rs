//! Registration view
//!
//! The account-opening wizard: progress indicator, the current step's
//! fields with inline errors, and the success screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::{FormField, InitialInvestment, InvestmentExperience, RiskTolerance};
use crate::registration::{
    ProvisionedAccount, RegistrationWizard, StepOutcome, StepStatus, SubmitOutcome, WizardStep,
};
use crate::tui::app::{App, FocusedPanel, SectionNavigator};
use crate::tui::widgets::input::TextInput;

/// Wizard plus the text inputs that feed it
#[derive(Debug, Clone)]
pub struct RegistrationFormState {
    pub wizard: RegistrationWizard,
    pub focus: FormField,
    pub full_name: TextInput,
    pub email: TextInput,
    pub phone: TextInput,
    pub password: TextInput,
    pub confirm_password: TextInput,
    /// Set once the account creator accepted the form
    pub account: Option<ProvisionedAccount>,
    /// Set when the account creator refused the form
    pub creation_error: Option<String>,
}

impl Default for RegistrationFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationFormState {
    pub fn new() -> Self {
        Self {
            wizard: RegistrationWizard::new(),
            focus: FormField::FullName,
            full_name: TextInput::new().placeholder("Enter your full name"),
            email: TextInput::new().placeholder("Enter your email"),
            phone: TextInput::new().placeholder("Enter your phone number"),
            password: TextInput::new().placeholder("Create a strong password").masked(),
            confirm_password: TextInput::new()
                .placeholder("Confirm your password")
                .masked(),
            account: None,
            creation_error: None,
        }
    }

    fn fields(&self) -> &'static [FormField] {
        self.wizard.step().fields()
    }

    /// Focus the first field of the current step
    pub fn focus_first(&mut self) {
        if let Some(first) = self.fields().first() {
            self.focus = *first;
        }
    }

    /// Focus the first field that failed validation
    fn focus_first_error(&mut self) {
        if let Some((field, _)) = self.wizard.errors().iter().next() {
            self.focus = field;
        }
    }

    pub fn next_field(&mut self) {
        self.shift_focus(1);
    }

    pub fn prev_field(&mut self) {
        self.shift_focus(-1);
    }

    fn shift_focus(&mut self, delta: isize) {
        let fields = self.fields();
        if fields.is_empty() {
            return;
        }
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let len = fields.len() as isize;
        self.focus = fields[((pos + delta).rem_euclid(len)) as usize];
    }

    pub fn input_mut(&mut self, field: FormField) -> Option<&mut TextInput> {
        match field {
            FormField::FullName => Some(&mut self.full_name),
            FormField::Email => Some(&mut self.email),
            FormField::Phone => Some(&mut self.phone),
            FormField::Password => Some(&mut self.password),
            FormField::ConfirmPassword => Some(&mut self.confirm_password),
            _ => None,
        }
    }

    fn input(&self, field: FormField) -> Option<&TextInput> {
        match field {
            FormField::FullName => Some(&self.full_name),
            FormField::Email => Some(&self.email),
            FormField::Phone => Some(&self.phone),
            FormField::Password => Some(&self.password),
            FormField::ConfirmPassword => Some(&self.confirm_password),
            _ => None,
        }
    }

    /// Push a text input's content into the wizard
    fn sync(&mut self, field: FormField) {
        let Some(value) = self.input(field).map(|i| i.value().to_string()) else {
            return;
        };
        match field {
            FormField::FullName => self.wizard.set_full_name(value),
            FormField::Email => self.wizard.set_email(value),
            FormField::Phone => self.wizard.set_phone(value),
            FormField::Password => self.wizard.set_password(value),
            FormField::ConfirmPassword => self.wizard.set_confirm_password(value),
            _ => {}
        }
    }

    /// Type into the focused text field
    pub fn insert_char(&mut self, c: char) {
        let field = self.focus;
        if let Some(input) = self.input_mut(field) {
            input.insert(c);
            self.sync(field);
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focus;
        if let Some(input) = self.input_mut(field) {
            input.backspace();
            self.sync(field);
        }
    }

    /// Step a choice field through its options, wrapping; unset starts at the first
    pub fn cycle_choice(&mut self, forward: bool) {
        let form = self.wizard.form();
        match self.focus {
            FormField::InvestmentExperience => {
                let next = cycle(InvestmentExperience::ALL, form.investment_experience, forward);
                self.wizard.set_investment_experience(next);
            }
            FormField::RiskTolerance => {
                let next = cycle(RiskTolerance::ALL, form.risk_tolerance, forward);
                self.wizard.set_risk_tolerance(next);
            }
            FormField::InitialInvestment => {
                let next = cycle(InitialInvestment::ALL, form.initial_investment, forward);
                self.wizard.set_initial_investment(next);
            }
            _ => {}
        }
    }

    /// Flip the focused checkbox
    pub fn toggle_checkbox(&mut self) {
        let form = self.wizard.form();
        match self.focus {
            FormField::AgreeToTerms => {
                let value = !form.agree_to_terms;
                self.wizard.set_agree_to_terms(value);
            }
            FormField::SubscribeNewsletter => {
                let value = !form.subscribe_newsletter;
                self.wizard.set_subscribe_newsletter(value);
            }
            _ => {}
        }
    }

    fn clear_secrets(&mut self) {
        self.password.clear();
        self.confirm_password.clear();
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: Option<T>, forward: bool) -> T {
    let len = options.len();
    let next = match current.and_then(|c| options.iter().position(|o| *o == c)) {
        None => 0,
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
    };
    options[next]
}

/// Handle a key while the form has focus. Returns whether it was consumed.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.registration;

    match key.code {
        KeyCode::Esc => {
            match form.wizard.step() {
                WizardStep::InvestmentProfile | WizardStep::Security => {
                    form.wizard.previous();
                    form.focus_first();
                }
                _ => app.focused_panel = FocusedPanel::Sidebar,
            }
            true
        }
        KeyCode::Tab | KeyCode::Down => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
            true
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
            true
        }
        KeyCode::Left => {
            match form.input_mut(form.focus) {
                Some(input) => input.move_left(),
                None => form.cycle_choice(false),
            }
            true
        }
        KeyCode::Right => {
            match form.input_mut(form.focus) {
                Some(input) => input.move_right(),
                None => form.cycle_choice(true),
            }
            true
        }
        KeyCode::Home => {
            if let Some(input) = form.input_mut(form.focus) {
                input.move_start();
            }
            true
        }
        KeyCode::End => {
            if let Some(input) = form.input_mut(form.focus) {
                input.move_end();
            }
            true
        }
        KeyCode::Backspace => {
            form.backspace();
            true
        }
        KeyCode::Char(' ')
            if matches!(
                form.focus,
                FormField::AgreeToTerms | FormField::SubscribeNewsletter
            ) =>
        {
            form.toggle_checkbox();
            true
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.insert_char(c);
            true
        }
        KeyCode::Enter => {
            advance(app);
            true
        }
        _ => false,
    }
}

/// The Continue / Create Account / Go to Dashboard button
fn advance(app: &mut App) {
    match app.registration.wizard.step() {
        WizardStep::PersonalInfo | WizardStep::InvestmentProfile => {
            let form = &mut app.registration;
            match form.wizard.next() {
                StepOutcome::Moved { .. } => {
                    form.focus_first();
                    app.clear_status();
                }
                StepOutcome::Rejected { failed, .. } => {
                    form.focus_first_error();
                    app.set_status(format!("{} field(s) need attention", failed));
                }
                StepOutcome::Unchanged(_) => {}
            }
        }
        WizardStep::Security => submit(app),
        WizardStep::Verification => {
            let result = app.registration.wizard.go_to_dashboard(&mut SectionNavigator {
                section: &mut app.active_section,
            });
            if let Err(e) = result {
                app.set_status(e.to_string());
            }
        }
    }
}

fn submit(app: &mut App) {
    let outcome = match app.registration.wizard.submit() {
        Ok(outcome) => outcome,
        Err(e) => {
            app.set_status(e.to_string());
            return;
        }
    };

    match outcome {
        SubmitOutcome::Completed(form) => {
            app.registration.clear_secrets();
            match app.creator.create_account(&form) {
                Ok(account) => {
                    app.set_status(format!("Account {} created", account.id));
                    app.registration.account = Some(account);
                    app.registration.creation_error = None;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "account creation failed");
                    app.set_status(format!("Account creation failed: {}", e));
                    app.registration.creation_error = Some(e.to_string());
                }
            }
        }
        SubmitOutcome::Rejected { failed } => {
            app.registration.focus_first_error();
            app.set_status(format!("{} field(s) need attention", failed));
        }
    }
}

/// Render the registration section
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Create Your Investment Account ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Progress
            Constraint::Length(2), // Step heading
            Constraint::Min(4),    // Fields
            Constraint::Length(1), // Buttons
        ])
        .split(inner);

    let form = &app.registration;
    render_progress(frame, form.wizard.step(), chunks[0]);

    let step = form.wizard.step();
    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            step.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(step.description(), Style::default().fg(Color::DarkGray))),
    ]);
    frame.render_widget(heading, chunks[1]);

    if step.is_terminal() {
        render_success(frame, form, chunks[2]);
    } else {
        render_fields(frame, form, is_focused, chunks[2]);
    }

    frame.render_widget(
        Paragraph::new(button_hint(&form.wizard)).style(Style::default().fg(Color::Green)),
        chunks[3],
    );
}

fn button_hint(wizard: &RegistrationWizard) -> &'static str {
    match wizard.step() {
        WizardStep::PersonalInfo => " [Enter] Continue ",
        WizardStep::InvestmentProfile => " [Esc] Previous   [Enter] Continue ",
        WizardStep::Security => " [Esc] Previous   [Enter] Create Account ",
        WizardStep::Verification if wizard.is_dismissed() => " Opening your dashboard... ",
        WizardStep::Verification => " [Enter] Go to Dashboard ",
    }
}

fn render_progress(frame: &mut Frame, current: WizardStep, area: Rect) {
    let mut spans = Vec::new();
    for (i, step) in WizardStep::ALL.iter().enumerate() {
        if i > 0 {
            let connector_color = if *step <= current { Color::Green } else { Color::DarkGray };
            spans.push(Span::styled(" ── ", Style::default().fg(connector_color)));
        }
        let (marker, style) = match step.status(current) {
            StepStatus::Complete => ("✓", Style::default().fg(Color::Green)),
            StepStatus::Current => (
                "●",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            StepStatus::Upcoming => ("○", Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(format!("{} {}", marker, step.title()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_fields(frame: &mut Frame, form: &RegistrationFormState, is_focused: bool, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    let mut input_rows: Vec<(FormField, u16)> = Vec::new();

    for field in form.wizard.step().fields() {
        let focused = is_focused && form.focus == *field;
        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        match field {
            FormField::AgreeToTerms | FormField::SubscribeNewsletter => {
                let checked = match field {
                    FormField::AgreeToTerms => form.wizard.form().agree_to_terms,
                    _ => form.wizard.form().subscribe_newsletter,
                };
                let text = match field {
                    FormField::AgreeToTerms => "I agree to the Terms of Service and Privacy Policy",
                    _ => "Subscribe to market insights and investment tips",
                };
                lines.push(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(if checked { "[x] " } else { "[ ] " }, label_style),
                    Span::styled(text, label_style),
                ]));
            }
            FormField::InvestmentExperience
            | FormField::RiskTolerance
            | FormField::InitialInvestment => {
                let value = choice_label(form, *field);
                lines.push(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("{}: ", field.label()), label_style),
                    Span::styled(
                        format!("◀ {} ▶", value.unwrap_or("Select an option")),
                        Style::default().fg(if value.is_some() { Color::Yellow } else { Color::DarkGray }),
                    ),
                ]));
            }
            _ => {
                lines.push(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("{}:", field.label()), label_style),
                ]));
                input_rows.push((*field, lines.len() as u16));
                lines.push(Line::from(""));
            }
        }

        if let Some(message) = form.wizard.error(*field) {
            lines.push(Line::from(Span::styled(
                format!("    {}", message),
                Style::default().fg(Color::Red),
            )));
        }
    }

    if let Some(ref error) = form.creation_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red))));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);

    for (field, row) in input_rows {
        if row >= area.height {
            continue;
        }
        if let Some(input) = form.input(field) {
            let rect = Rect::new(area.x + 4, area.y + row, area.width.saturating_sub(4), 1);
            let widget = input.clone().focused(is_focused && form.focus == field);
            frame.render_widget(widget, rect);
        }
    }
}

fn choice_label(form: &RegistrationFormState, field: FormField) -> Option<&'static str> {
    let data = form.wizard.form();
    match field {
        FormField::InvestmentExperience => data.investment_experience.map(|c| c.label()),
        FormField::RiskTolerance => data.risk_tolerance.map(|c| c.label()),
        FormField::InitialInvestment => data.initial_investment.map(|c| c.label()),
        _ => None,
    }
}

fn render_success(frame: &mut Frame, form: &RegistrationFormState, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "✓ Welcome to InvestPro!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Your account has been created successfully. We've sent a verification"),
        Line::from("email to your inbox. Please check your email to activate your account."),
    ];

    match (&form.account, &form.creation_error) {
        (Some(account), _) => {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Account: ", Style::default().fg(Color::DarkGray)),
                Span::raw(account.id.to_string()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Email:   ", Style::default().fg(Color::DarkGray)),
                Span::raw(account.email.clone()),
            ]));
        }
        (None, Some(error)) => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Account creation failed: {}", error),
                Style::default().fg(Color::Red),
            )));
        }
        (None, None) => {}
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::error::{InvestError, InvestResult};
    use crate::feed::SimulatedMarket;
    use crate::models::RegistrationForm;
    use crate::registration::{AccountCreator, LocalAccountCreator};
    use crate::tui::app::Section;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    fn app_with(settings: &Settings, creator: Box<dyn AccountCreator>) -> App<'_> {
        let mut app =
            App::with_collaborators(settings, Box::new(SimulatedMarket::with_seed(1)), creator);
        app.switch_section(Section::Registration);
        app.focused_panel = FocusedPanel::Main;
        app
    }

    fn fill_to_security(app: &mut App) {
        type_text(app, "Ada Lovelace");
        handle_key(app, key(KeyCode::Tab));
        type_text(app, "ada@example.com");
        handle_key(app, key(KeyCode::Tab));
        type_text(app, "555-0100");
        handle_key(app, key(KeyCode::Enter));
        assert_eq!(app.registration.wizard.step(), WizardStep::InvestmentProfile);

        for _ in 0..3 {
            handle_key(app, key(KeyCode::Right));
            handle_key(app, key(KeyCode::Tab));
        }
        handle_key(app, key(KeyCode::Enter));
        assert_eq!(app.registration.wizard.step(), WizardStep::Security);
    }

    struct RefusingCreator;

    impl AccountCreator for RefusingCreator {
        fn create_account(&self, _form: &RegistrationForm) -> InvestResult<crate::registration::ProvisionedAccount> {
            Err(InvestError::Account("service unavailable".into()))
        }
    }

    #[test]
    fn test_empty_step_one_shows_errors() {
        let settings = Settings::default();
        let mut app = app_with(&settings, Box::new(LocalAccountCreator::new()));

        handle_key(&mut app, key(KeyCode::Enter));
        let form = &app.registration;
        assert_eq!(form.wizard.step(), WizardStep::PersonalInfo);
        assert_eq!(form.wizard.errors().len(), 3);
        assert_eq!(form.focus, FormField::FullName);
    }

    #[test]
    fn test_typing_clears_that_fields_error() {
        let settings = Settings::default();
        let mut app = app_with(&settings, Box::new(LocalAccountCreator::new()));

        handle_key(&mut app, key(KeyCode::Enter));
        type_text(&mut app, "A");
        assert!(app.registration.wizard.error(FormField::FullName).is_none());
        assert!(app.registration.wizard.error(FormField::Email).is_some());
    }

    #[test]
    fn test_full_flow_to_dashboard() {
        let settings = Settings::default();
        let mut app = app_with(&settings, Box::new(LocalAccountCreator::new()));
        fill_to_security(&mut app);

        type_text(&mut app, "longenough");
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "longenough");
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Char(' ')));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.registration.wizard.step(), WizardStep::Verification);
        assert!(app.registration.account.is_some());
        assert!(app.registration.password.value().is_empty());
        assert!(app.registration.confirm_password.value().is_empty());
        assert_eq!(button_hint(&app.registration.wizard), " [Enter] Go to Dashboard ");

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.active_section, Section::Portfolio);
        assert_eq!(button_hint(&app.registration.wizard), " Opening your dashboard... ");
    }

    #[test]
    fn test_creator_failure_stays_on_verification() {
        let settings = Settings::default();
        let mut app = app_with(&settings, Box::new(RefusingCreator));
        fill_to_security(&mut app);

        type_text(&mut app, "longenough");
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "longenough");
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Char(' ')));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.registration.wizard.step(), WizardStep::Verification);
        assert!(app.registration.account.is_none());
        assert!(app
            .status_message
            .as_deref()
            .unwrap_or_default()
            .contains("service unavailable"));
    }

    #[test]
    fn test_escape_goes_back_keeping_data() {
        let settings = Settings::default();
        let mut app = app_with(&settings, Box::new(LocalAccountCreator::new()));
        fill_to_security(&mut app);

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.registration.wizard.step(), WizardStep::InvestmentProfile);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.registration.wizard.step(), WizardStep::PersonalInfo);
        assert_eq!(app.registration.wizard.form().full_name, "Ada Lovelace");

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.focused_panel, FocusedPanel::Sidebar);
    }

    #[test]
    fn test_choice_cycling_wraps() {
        let mut form = RegistrationFormState::new();
        form.wizard.set_full_name("A");
        form.focus = FormField::RiskTolerance;

        form.cycle_choice(false);
        assert_eq!(form.wizard.form().risk_tolerance, Some(RiskTolerance::Conservative));
        form.cycle_choice(false);
        assert_eq!(form.wizard.form().risk_tolerance, Some(RiskTolerance::VeryAggressive));
        form.cycle_choice(true);
        assert_eq!(form.wizard.form().risk_tolerance, Some(RiskTolerance::Conservative));
    }
}
