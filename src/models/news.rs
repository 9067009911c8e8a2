//! News model
//!
//! Headlines for the news feed, their categories and sentiment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::NewsId;

/// Topic of a headline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Market,
    Crypto,
    Commodities,
    Global,
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 4] = [
        Self::Market,
        Self::Crypto,
        Self::Commodities,
        Self::Global,
    ];

    /// Filter tab label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Market => "Markets",
            Self::Crypto => "Crypto",
            Self::Commodities => "Commodities",
            Self::Global => "Global",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "market" | "markets" => Some(Self::Market),
            "crypto" => Some(Self::Crypto),
            "commodities" | "commodity" => Some(Self::Commodities),
            "global" => Some(Self::Global),
            _ => None,
        }
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category filter for the feed ("All News" or one category)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewsFilter {
    #[default]
    All,
    Only(NewsCategory),
}

impl NewsFilter {
    /// Filter tabs, in display order
    pub fn tabs() -> Vec<NewsFilter> {
        std::iter::once(Self::All)
            .chain(NewsCategory::ALL.into_iter().map(Self::Only))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All News",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, item: &NewsItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == *category,
        }
    }

    /// Parse "all" or a category name
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Some(Self::All)
        } else {
            NewsCategory::parse(s).map(Self::Only)
        }
    }
}

/// Tone of a headline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// A single headline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    pub summary: String,
    pub category: NewsCategory,
    pub sentiment: Sentiment,
    pub source: String,
    pub published_at: DateTime<Utc>,
}

impl NewsItem {
    /// Relative age label ("2 hours ago", "1 day ago")
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(self.published_at);
        let (amount, unit) = if elapsed.num_days() >= 1 {
            (elapsed.num_days(), "day")
        } else if elapsed.num_hours() >= 1 {
            (elapsed.num_hours(), "hour")
        } else {
            (elapsed.num_minutes().max(0), "minute")
        };
        if amount == 1 {
            format!("1 {} ago", unit)
        } else {
            format!("{} {}s ago", amount, unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn item_published(ago: Duration, now: DateTime<Utc>) -> NewsItem {
        NewsItem {
            id: NewsId::new(),
            title: "Gold Reaches New Monthly High".into(),
            summary: String::new(),
            category: NewsCategory::Commodities,
            sentiment: Sentiment::Neutral,
            source: "MarketWatch".into(),
            published_at: now - ago,
        }
    }

    #[test]
    fn test_age_labels() {
        let now = Utc::now();
        assert_eq!(item_published(Duration::hours(2), now).age_label(now), "2 hours ago");
        assert_eq!(item_published(Duration::hours(1), now).age_label(now), "1 hour ago");
        assert_eq!(item_published(Duration::hours(24), now).age_label(now), "1 day ago");
        assert_eq!(item_published(Duration::minutes(5), now).age_label(now), "5 minutes ago");
    }

    #[test]
    fn test_filter_matches() {
        let now = Utc::now();
        let item = item_published(Duration::hours(1), now);
        assert!(NewsFilter::All.matches(&item));
        assert!(NewsFilter::Only(NewsCategory::Commodities).matches(&item));
        assert!(!NewsFilter::Only(NewsCategory::Crypto).matches(&item));
    }

    #[test]
    fn test_filter_tabs_and_parse() {
        let tabs = NewsFilter::tabs();
        assert_eq!(tabs.len(), 5);
        assert_eq!(tabs[0].label(), "All News");
        assert_eq!(NewsFilter::parse("ALL"), Some(NewsFilter::All));
        assert_eq!(
            NewsFilter::parse("markets"),
            Some(NewsFilter::Only(NewsCategory::Market))
        );
        assert_eq!(NewsFilter::parse("sports"), None);
    }
}
