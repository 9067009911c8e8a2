//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::config::Settings;
use crate::feed::{
    headlines, market_summary, performance_history, sample_holdings, QuoteSource,
    SimulatedMarket,
};
use crate::models::{Holding, MarketStat, NewsFilter, NewsItem, PerformancePoint, Quote, Timeframe};
use crate::registration::{AccountCreator, LocalAccountCreator, Navigator};
use crate::services::NewsService;

use super::views::newsletter::NewsletterFormState;
use super::views::registration::RegistrationFormState;

/// Landing-page section shown in the main panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Hero,
    Market,
    Portfolio,
    News,
    Newsletter,
    Registration,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::Hero,
        Self::Market,
        Self::Portfolio,
        Self::News,
        Self::Newsletter,
        Self::Registration,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Market => "Market Overview",
            Self::Portfolio => "Portfolio",
            Self::News => "News",
            Self::Newsletter => "Newsletter",
            Self::Registration => "Open Account",
        }
    }

    /// Shortcut key ('1'..'6')
    pub fn key(&self) -> char {
        match self {
            Self::Hero => '1',
            Self::Market => '2',
            Self::Portfolio => '3',
            Self::News => '4',
            Self::Newsletter => '5',
            Self::Registration => '6',
        }
    }

    pub fn from_key(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == c)
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Sections whose main panel takes typed input
    pub fn is_form(&self) -> bool {
        matches!(self, Self::Newsletter | Self::Registration)
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Simulated market grid with its refresh clock
pub struct MarketState {
    source: Box<dyn QuoteSource>,
    pub quotes: Vec<Quote>,
    pub stats: Vec<MarketStat>,
    pub timeframe: Timeframe,
    pub updated_at: DateTime<Local>,
    refresh_interval: Duration,
    last_refresh: Instant,
}

impl MarketState {
    pub fn new(source: Box<dyn QuoteSource>, timeframe: Timeframe, refresh_interval: Duration) -> Self {
        let mut state = Self {
            source,
            quotes: Vec::new(),
            stats: market_summary(),
            timeframe,
            updated_at: Local::now(),
            refresh_interval,
            last_refresh: Instant::now(),
        };
        state.refresh_at(Instant::now());
        state
    }

    /// Regenerate every quote and restart the refresh clock
    pub fn refresh_at(&mut self, now: Instant) {
        self.quotes = self.source.snapshot();
        self.last_refresh = now;
        self.updated_at = Local::now();
    }

    /// Switch timeframe; a change regenerates the grid immediately
    pub fn set_timeframe(&mut self, timeframe: Timeframe, now: Instant) {
        if timeframe != self.timeframe {
            self.timeframe = timeframe;
            self.refresh_at(now);
        }
    }

    /// Refresh if the interval has elapsed. Returns whether it did.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_refresh) >= self.refresh_interval {
            self.refresh_at(now);
            true
        } else {
            false
        }
    }
}

/// Demo portfolio, the chart period and the balance visibility toggle
pub struct PortfolioState {
    pub holdings: Vec<Holding>,
    pub history: Vec<PerformancePoint>,
    pub period: Timeframe,
    pub show_balance: bool,
}

impl PortfolioState {
    /// Chart period shown when the dashboard opens
    pub const DEFAULT_PERIOD: Timeframe = Timeframe::OneMonth;

    pub fn new(show_balance: bool) -> Self {
        Self {
            holdings: sample_holdings(),
            history: performance_history(),
            period: Self::DEFAULT_PERIOD,
            show_balance,
        }
    }

    pub fn toggle_balance(&mut self) {
        self.show_balance = !self.show_balance;
    }

    /// Step the period selector, wrapping
    pub fn cycle_period(&mut self, forward: bool) {
        self.period = if forward {
            self.period.next()
        } else {
            self.period.prev()
        };
    }
}

/// News feed with the active filter tab and highlighted headline
pub struct NewsState {
    pub items: Vec<NewsItem>,
    pub filter: NewsFilter,
    pub selected: usize,
}

impl NewsState {
    pub fn new() -> Self {
        Self {
            items: headlines(chrono::Utc::now()),
            filter: NewsFilter::All,
            selected: 0,
        }
    }

    pub fn visible(&self) -> Vec<&NewsItem> {
        NewsService::new(&self.items).filtered(self.filter)
    }

    /// Move to the next (or previous) filter tab, wrapping
    pub fn cycle_filter(&mut self, forward: bool) {
        let tabs = NewsFilter::tabs();
        let pos = tabs.iter().position(|t| *t == self.filter).unwrap_or(0);
        let next = if forward {
            (pos + 1) % tabs.len()
        } else {
            (pos + tabs.len() - 1) % tabs.len()
        };
        self.filter = tabs[next];
        self.selected = 0;
    }

    pub fn move_down(&mut self) {
        let count = self.visible().len();
        if self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

impl Default for NewsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Sends "go to dashboard" to the portfolio section
pub struct SectionNavigator<'s> {
    pub section: &'s mut Section,
}

impl Navigator for SectionNavigator<'_> {
    fn go_to_dashboard(&mut self) {
        *self.section = Section::Portfolio;
    }
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Receives completed registrations
    pub creator: Box<dyn AccountCreator>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Section in the main panel
    pub active_section: Section,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,

    pub market: MarketState,
    pub portfolio: PortfolioState,
    pub news: NewsState,
    pub newsletter: NewsletterFormState,
    pub registration: RegistrationFormState,
}

impl<'a> App<'a> {
    /// Create an App with the simulated market and the in-memory account creator
    pub fn new(settings: &'a Settings) -> Self {
        Self::with_collaborators(
            settings,
            Box::new(SimulatedMarket::new()),
            Box::new(LocalAccountCreator::new()),
        )
    }

    pub fn with_collaborators(
        settings: &'a Settings,
        quotes: Box<dyn QuoteSource>,
        creator: Box<dyn AccountCreator>,
    ) -> Self {
        Self {
            settings,
            creator,
            should_quit: false,
            active_section: Section::default(),
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            status_message: None,
            market: MarketState::new(
                quotes,
                settings.default_timeframe,
                settings.refresh_interval(),
            ),
            portfolio: PortfolioState::new(settings.show_balance),
            news: NewsState::new(),
            newsletter: NewsletterFormState::new(),
            registration: RegistrationFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different section
    pub fn switch_section(&mut self, section: Section) {
        if section != self.active_section {
            tracing::debug!(section = section.title(), "section switched");
        }
        self.active_section = section;
        self.clear_status();
    }

    /// Step the sidebar selection up or down
    pub fn cycle_section(&mut self, forward: bool) {
        let len = Section::ALL.len();
        let pos = self.active_section.index();
        let next = if forward {
            (pos + 1).min(len - 1)
        } else {
            pos.saturating_sub(1)
        };
        self.switch_section(Section::ALL[next]);
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Periodic work driven by the event loop
    pub fn on_tick(&mut self, now: Instant) {
        if self.market.tick(now) {
            tracing::trace!(timeframe = %self.market.timeframe, "market refreshed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingSource {
        calls: usize,
    }

    impl QuoteSource for CountingSource {
        fn snapshot(&mut self) -> Vec<Quote> {
            self.calls += 1;
            SimulatedMarket::with_seed(self.calls as u64).snapshot()
        }
    }

    fn market(interval_ms: u64) -> MarketState {
        MarketState::new(
            Box::new(CountingSource { calls: 0 }),
            Timeframe::OneDay,
            Duration::from_millis(interval_ms),
        )
    }

    #[test]
    fn test_market_refreshes_on_interval() {
        let mut state = market(3000);
        let start = Instant::now();
        state.refresh_at(start);
        let before = state.quotes.clone();

        assert!(!state.tick(start + Duration::from_millis(2999)));
        assert_eq!(state.quotes, before);
        assert!(state.tick(start + Duration::from_millis(3000)));
        assert_ne!(state.quotes, before);
    }

    #[test]
    fn test_timeframe_change_regenerates() {
        let mut state = market(3000);
        let start = Instant::now();
        state.refresh_at(start);
        let before = state.quotes.clone();

        state.set_timeframe(Timeframe::OneDay, start);
        assert_eq!(state.quotes, before);

        state.set_timeframe(Timeframe::OneYear, start + Duration::from_millis(10));
        assert_eq!(state.timeframe, Timeframe::OneYear);
        assert_ne!(state.quotes, before);
        // The clock restarts from the change
        assert!(!state.tick(start + Duration::from_millis(3005)));
    }

    #[test]
    fn test_news_filter_cycle() {
        let mut news = NewsState::new();
        assert_eq!(news.visible().len(), 6);

        news.cycle_filter(true);
        assert_eq!(news.filter.label(), "Markets");
        assert_eq!(news.visible().len(), 2);

        news.cycle_filter(false);
        news.cycle_filter(false);
        assert_eq!(news.filter.label(), "Global");
    }

    #[test]
    fn test_portfolio_period_defaults_to_one_month() {
        let mut portfolio = PortfolioState::new(true);
        assert_eq!(portfolio.period, Timeframe::OneMonth);

        portfolio.cycle_period(true);
        assert_eq!(portfolio.period, Timeframe::ThreeMonths);
        portfolio.cycle_period(true);
        portfolio.cycle_period(true);
        assert_eq!(portfolio.period, Timeframe::OneDay);
        portfolio.cycle_period(false);
        assert_eq!(portfolio.period, Timeframe::OneYear);
    }

    #[test]
    fn test_section_keys() {
        assert_eq!(Section::from_key('6'), Some(Section::Registration));
        assert_eq!(Section::from_key('9'), None);
        assert!(Section::Newsletter.is_form());
        assert!(!Section::Market.is_form());
    }

    #[test]
    fn test_navigator_opens_portfolio() {
        let mut section = Section::Registration;
        SectionNavigator {
            section: &mut section,
        }
        .go_to_dashboard();
        assert_eq!(section, Section::Portfolio);
    }
}
