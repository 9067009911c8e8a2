//! Simulated data feeds
//!
//! Stand-ins for the market-data, news and portfolio backends. Every source
//! returns a finite, freshly built record set on demand; nothing is fetched
//! over the network.

pub mod market;
pub mod news;
pub mod portfolio;

pub use market::{market_summary, QuoteSource, SimulatedMarket};
pub use news::headlines;
pub use portfolio::{performance_history, sample_holdings};
