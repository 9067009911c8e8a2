use anyhow::Result;
use clap::{Parser, Subcommand};

use investpro::cli::{
    handle_config_command, handle_market_command, handle_news_command,
    handle_newsletter_command, handle_portfolio_command, handle_register_command, MarketArgs,
    NewsArgs, NewsletterArgs, PortfolioArgs,
};
use investpro::config::{InvestPaths, Settings};

#[derive(Parser)]
#[command(
    name = "investpro",
    version,
    about = "Terminal investment platform with simulated market data",
    long_about = "InvestPro is a terminal front end for an investment platform: \
                  open an account through a guided registration wizard, browse a \
                  simulated market grid, a demo portfolio and a news feed, and \
                  sign up for the newsletter."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Show a snapshot of the simulated market
    Market(MarketArgs),

    /// Show the demo portfolio
    Portfolio(PortfolioArgs),

    /// Show the news feed
    News(NewsArgs),

    /// Subscribe to the newsletter
    Newsletter(NewsletterArgs),

    /// Create an account interactively
    Register,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = InvestPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    investpro::logging::init(&paths, &settings)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => investpro::tui::run_tui(&paths, &settings)?,
        Commands::Market(args) => handle_market_command(&settings, args)?,
        Commands::Portfolio(args) => handle_portfolio_command(&settings, args)?,
        Commands::News(args) => handle_news_command(args)?,
        Commands::Newsletter(args) => handle_newsletter_command(args)?,
        Commands::Register => handle_register_command()?,
        Commands::Config => handle_config_command(&paths, &settings)?,
    }

    Ok(())
}
