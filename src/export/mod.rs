//! Export module for InvestPro
//!
//! Section snapshots in machine-readable formats:
//! - JSON: for scripts and other tools
//! - YAML: for reading by eye

pub mod json;
pub mod snapshot;
pub mod yaml;

pub use json::export_json;
pub use snapshot::{
    MarketSnapshot, NewsSnapshot, PortfolioSnapshot, Snapshot, EXPORT_SCHEMA_VERSION,
};
pub use yaml::export_yaml;
