use anyhow::Result;
use clap::{Parser, Subcommand};

use tandem_budget::cli::{
    handle_methodology_command, handle_period_command, handle_summarize_command,
    MethodologyCommands, PeriodCommands, SummarizeArgs,
};
use tandem_budget::config::{Settings, TandemPaths};

#[derive(Parser)]
#[command(
    name = "tandem",
    version,
    about = "Budget summary calculation engine for shared household budgets",
    long_about = "Tandem computes a deterministic budget summary for a period from a \
                  snapshot of raw records: income sources, assignments, transactions, \
                  recurring expenses, ownership splits, and category mappings. The same \
                  snapshot always produces the same summary."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a budget summary from a snapshot file
    Summarize(SummarizeArgs),

    /// Inspect and step budgeting periods
    #[command(subcommand)]
    Period(PeriodCommands),

    /// List, show, and validate budgeting methodologies
    #[command(subcommand)]
    Methodology(MethodologyCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TandemPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Summarize(args) => {
            handle_summarize_command(&settings, args)?;
        }
        Commands::Period(cmd) => {
            handle_period_command(&settings, cmd)?;
        }
        Commands::Methodology(cmd) => {
            handle_methodology_command(cmd)?;
        }
        Commands::Config => {
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Period type:      {}", settings.period_type);
            println!("Carryover:        {:?}", settings.carryover_mode);
            println!("Methodology:      {}", settings.methodology);
            println!("Currency symbol:  {}", settings.currency_symbol);
        }
    }

    Ok(())
}
