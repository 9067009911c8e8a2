//! News service
//!
//! Category filtering over the feed.

use crate::models::{NewsCategory, NewsFilter, NewsItem};

/// Service for the news section
pub struct NewsService<'a> {
    items: &'a [NewsItem],
}

impl<'a> NewsService<'a> {
    pub fn new(items: &'a [NewsItem]) -> Self {
        Self { items }
    }

    /// Items passing the filter, in feed order
    pub fn filtered(&self, filter: NewsFilter) -> Vec<&'a NewsItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    /// Number of items in a category
    pub fn count(&self, category: NewsCategory) -> usize {
        self.items.iter().filter(|i| i.category == category).count()
    }
}
