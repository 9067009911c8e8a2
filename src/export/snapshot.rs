//! Snapshot payloads
//!
//! What each section exports: the same data its table shows, plus the
//! derived figures.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{
    AllocationSlice, Holding, MarketStat, NewsItem, PerformancePoint, Quote, Timeframe,
};
use crate::services::{PortfolioService, PortfolioSummary};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Wrapper around any section payload
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<T: Serialize> {
    /// Schema version for compatibility checking
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Application version that produced the snapshot
    pub app_version: String,
    /// Section name ("market", "portfolio", "news")
    pub section: &'static str,
    pub data: T,
}

impl<T: Serialize> Snapshot<T> {
    pub fn new(section: &'static str, data: T) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            section,
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketSnapshot {
    pub timeframe: Timeframe,
    pub quotes: Vec<Quote>,
    pub stats: Vec<MarketStat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSnapshot {
    pub summary: PortfolioSummary,
    pub holdings: Vec<Holding>,
    pub allocation: Vec<AllocationSlice>,
    pub performance: Vec<PerformancePoint>,
}

impl PortfolioSnapshot {
    /// Gather holdings and their derived figures
    pub fn new(holdings: Vec<Holding>, performance: Vec<PerformancePoint>) -> Self {
        let service = PortfolioService::new(&holdings);
        let summary = service.summary();
        let allocation = service.allocation();
        Self {
            summary,
            holdings,
            allocation,
            performance,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsSnapshot {
    /// Filter tab the items were selected with ("All News", "Crypto")
    pub filter: String,
    pub items: Vec<NewsItem>,
}
