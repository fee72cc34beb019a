use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use financemaster::cli::{
    handle_budget_command, handle_export_command, handle_goal_command, handle_import_command,
    handle_transaction_command, handle_trip_command, BudgetCommands, ExportCommands, GoalCommands,
    TransactionCommands, TripCommands,
};
use financemaster::config::{FinancePaths, Settings};
use financemaster::display::format_dashboard;
use financemaster::logging::init_tracing;
use financemaster::services::SummaryService;
use financemaster::storage::open_file_slot;
use financemaster::store::{FinanceContext, FinanceStore};

#[derive(Parser)]
#[command(
    name = "financemaster",
    version,
    about = "Personal finance tracker: transactions, budgets, savings goals and trips",
    long_about = "FinanceMaster keeps your income and expenses, per-category budgets, \
                  savings goals and trip budgets in one place and shows where the \
                  money goes, from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Trip commands
    #[command(subcommand)]
    Trip(TripCommands),

    /// Show the dashboard: balance, top categories, recent activity, goals
    Summary,

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Replace all data with a JSON or YAML export
    Import {
        /// Export file (.json, .yaml or .yml)
        file: PathBuf,
        /// Confirm replacing existing data
        #[arg(long)]
        replace: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let slot = open_file_slot(&paths, &settings.storage_key)?;
    let mut ctx = FinanceContext::with_store(FinanceStore::open(slot));

    match cli.command {
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&mut ctx, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut ctx, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&mut ctx, &settings, cmd)?,
        Some(Commands::Trip(cmd)) => handle_trip_command(&mut ctx, &settings, cmd)?,
        Some(Commands::Summary) => {
            let snapshot = ctx.store()?.snapshot();
            let summary = SummaryService::new(&snapshot)
                .dashboard(chrono::Local::now().date_naive(), settings.recent_limit);
            print!("{}", format_dashboard(&summary, &settings));
        }
        Some(Commands::Export(cmd)) => handle_export_command(&ctx, &settings, cmd)?,
        Some(Commands::Import { file, replace }) => handle_import_command(&mut ctx, &file, replace)?,
        Some(Commands::Config) => {
            println!("FinanceMaster Configuration");
            println!("===========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Storage key:      {}", settings.storage_key);
            println!("  Recent limit:     {}", settings.recent_limit);
            println!("  Budget warning:   {}%", settings.budget_warning_percent);
        }
        None => {
            println!("FinanceMaster - personal finance tracking");
            println!();
            println!("Run 'financemaster --help' for usage information.");
            println!("Run 'financemaster summary' for an overview of your finances.");
        }
    }

    let final_state = ctx.dispose()?;
    debug!(
        transactions = final_state.transactions.len(),
        goals = final_state.goals.len(),
        "session closed"
    );

    Ok(())
}
