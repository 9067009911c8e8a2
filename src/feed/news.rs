//! Simulated news feed
//!
//! Six canned headlines, dated relative to the moment they are requested.

use chrono::{DateTime, Duration, Utc};

use crate::models::{NewsCategory, NewsId, NewsItem, Sentiment};

struct Headline {
    title: &'static str,
    summary: &'static str,
    category: NewsCategory,
    sentiment: Sentiment,
    source: &'static str,
    hours_ago: i64,
}

const HEADLINES: [Headline; 6] = [
    Headline {
        title: "Federal Reserve Signals Potential Rate Cut in Q2",
        summary: "Fed officials hint at monetary policy shifts as inflation shows signs of cooling across multiple sectors.",
        category: NewsCategory::Market,
        sentiment: Sentiment::Positive,
        source: "Financial Times",
        hours_ago: 2,
    },
    Headline {
        title: "Bitcoin Surges Past $65K on Institutional Adoption",
        summary: "Major corporations continue to add cryptocurrency to their treasury reserves, driving price momentum.",
        category: NewsCategory::Crypto,
        sentiment: Sentiment::Positive,
        source: "CoinDesk",
        hours_ago: 4,
    },
    Headline {
        title: "Oil Prices Decline Amid Supply Concerns",
        summary: "Crude oil futures drop 3% as geopolitical tensions ease and production capacity increases.",
        category: NewsCategory::Commodities,
        sentiment: Sentiment::Negative,
        source: "Reuters",
        hours_ago: 6,
    },
    Headline {
        title: "European Markets Rally on GDP Growth Data",
        summary: "Strong economic indicators from major EU economies boost investor confidence across the continent.",
        category: NewsCategory::Global,
        sentiment: Sentiment::Positive,
        source: "Bloomberg",
        hours_ago: 8,
    },
    Headline {
        title: "Tech Stocks Lead Market Recovery",
        summary: "FAANG stocks post significant gains as quarterly earnings exceed analyst expectations.",
        category: NewsCategory::Market,
        sentiment: Sentiment::Positive,
        source: "CNBC",
        hours_ago: 12,
    },
    Headline {
        title: "Gold Reaches New Monthly High",
        summary: "Precious metals gain momentum as hedge against market volatility and currency fluctuations.",
        category: NewsCategory::Commodities,
        sentiment: Sentiment::Neutral,
        source: "MarketWatch",
        hours_ago: 24,
    },
];

/// Build the feed as of `now`, newest first
pub fn headlines(now: DateTime<Utc>) -> Vec<NewsItem> {
    HEADLINES
        .iter()
        .map(|h| NewsItem {
            id: NewsId::new(),
            title: h.title.to_string(),
            summary: h.summary.to_string(),
            category: h.category,
            sentiment: h.sentiment,
            source: h.source.to_string(),
            published_at: now - Duration::hours(h.hours_ago),
        })
        .collect()
}
