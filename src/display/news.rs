//! News display formatting

use chrono::{DateTime, Utc};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{NewsFilter, NewsItem};

use super::format::truncate;

#[derive(Tabled)]
struct NewsRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Headline")]
    title: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Published")]
    age: String,
    #[tabled(rename = "Tone")]
    sentiment: String,
}

/// Format the filtered feed as a table
pub fn format_news_table(items: &[&NewsItem], filter: NewsFilter, now: DateTime<Utc>) -> String {
    if items.is_empty() {
        return format!("No headlines in {}.", filter.label());
    }

    let rows = items.iter().map(|item| NewsRow {
        category: item.category.label().to_string(),
        title: truncate(&item.title, 52),
        source: item.source.clone(),
        age: item.age_label(now),
        sentiment: item.sentiment.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n{}", filter.label(), table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::headlines;
    use crate::models::NewsCategory;
    use crate::services::NewsService;

    #[test]
    fn test_filtered_table() {
        let now = Utc::now();
        let items = headlines(now);
        let crypto = NewsService::new(&items).filtered(NewsFilter::Only(NewsCategory::Crypto));
        let output = format_news_table(&crypto, NewsFilter::Only(NewsCategory::Crypto), now);

        assert!(output.starts_with("Crypto"));
        assert!(output.contains("CoinDesk"));
        assert!(output.contains("4 hours ago"));
        assert!(!output.contains("Reuters"));
    }

    #[test]
    fn test_empty_filter() {
        let output = format_news_table(&[], NewsFilter::All, Utc::now());
        assert_eq!(output, "No headlines in All News.");
    }
}
