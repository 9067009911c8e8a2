//! News CLI command

use chrono::Utc;
use clap::Args;

use crate::display::format_news_table;
use crate::error::{InvestError, InvestResult};
use crate::export::{NewsSnapshot, Snapshot};
use crate::feed::headlines;
use crate::models::NewsFilter;
use crate::services::NewsService;

use super::{write_snapshot, OutputFormat};

/// Arguments for `investpro news`
#[derive(Args, Debug)]
pub struct NewsArgs {
    /// Category (all, markets, crypto, commodities, global)
    #[arg(short, long, default_value = "all")]
    pub category: String,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Print the news feed, filtered by category
pub fn handle_news_command(args: NewsArgs) -> InvestResult<()> {
    let filter = NewsFilter::parse(&args.category)
        .ok_or_else(|| InvestError::unknown("news category", &args.category))?;

    let now = Utc::now();
    let items = headlines(now);
    let selected = NewsService::new(&items).filtered(filter);

    match args.format {
        OutputFormat::Table => {
            println!("{}", format_news_table(&selected, filter, now));
            Ok(())
        }
        format => write_snapshot(
            format,
            &Snapshot::new(
                "news",
                NewsSnapshot {
                    filter: filter.label().to_string(),
                    items: selected.into_iter().cloned().collect(),
                },
            ),
        ),
    }
}
