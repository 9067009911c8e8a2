//! Service layer for InvestPro
//!
//! Business logic on top of the models and feeds: derived portfolio
//! figures, news filtering and the newsletter opt-in.

pub mod news;
pub mod newsletter;
pub mod portfolio;

pub use news::NewsService;
pub use newsletter::NewsletterSignup;
pub use portfolio::{PortfolioService, PortfolioSummary, HIDDEN_BALANCE};
