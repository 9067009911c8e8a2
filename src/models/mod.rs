//! Core data models for InvestPro
//!
//! This module contains the data structures behind every landing-page
//! section: the registration form, market quotes, portfolio holdings,
//! news headlines and newsletter topics.

pub mod ids;
pub mod market;
pub mod money;
pub mod news;
pub mod newsletter;
pub mod portfolio;
pub mod registration;

pub use ids::{AccountId, NewsId};
pub use market::{MarketStat, Quote, Timeframe};
pub use money::{format_percent, Money};
pub use news::{NewsCategory, NewsFilter, NewsItem, Sentiment};
pub use newsletter::Preference;
pub use portfolio::{AllocationSlice, Holding, PerformancePoint};
pub use registration::{
    FormField, InitialInvestment, InvestmentExperience, RegistrationForm, RiskTolerance,
};
