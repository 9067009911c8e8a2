//! Portfolio CLI command

use clap::Args;

use crate::config::Settings;
use crate::display::format_portfolio;
use crate::error::InvestResult;
use crate::export::{PortfolioSnapshot, Snapshot};
use crate::feed::{performance_history, sample_holdings};

use super::{write_snapshot, OutputFormat};

/// Arguments for `investpro portfolio`
#[derive(Args, Debug)]
pub struct PortfolioArgs {
    /// Mask monetary amounts in table output
    #[arg(long)]
    pub hide_balance: bool,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Print the demo portfolio
pub fn handle_portfolio_command(settings: &Settings, args: PortfolioArgs) -> InvestResult<()> {
    let holdings = sample_holdings();

    match args.format {
        OutputFormat::Table => {
            let show_balance = settings.show_balance && !args.hide_balance;
            print!(
                "{}",
                format_portfolio(&holdings, show_balance, &settings.currency_symbol)
            );
            Ok(())
        }
        format => write_snapshot(
            format,
            &Snapshot::new(
                "portfolio",
                PortfolioSnapshot::new(holdings, performance_history()),
            ),
        ),
    }
}
