//! CLI commands for data export and import

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};
use tracing::info;

use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::export::{csv, import_from_str, json, yaml, FullExport};
use crate::store::FinanceContext;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transactions only)
    Csv,
    /// JSON format (full export)
    Json,
    /// YAML format (full export, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all data to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export transactions to CSV
    Transactions {
        /// Output file path
        output: PathBuf,
    },

    /// Export budgets with their spending to CSV
    Budgets {
        /// Output file path
        output: PathBuf,
    },

    /// Show export information without writing files
    Info,
}

fn create_output(output: &Path) -> FinanceResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        FinanceError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

fn finish(mut writer: BufWriter<File>) -> FinanceResult<()> {
    writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))
}

/// Handle export commands
pub fn handle_export_command(
    ctx: &FinanceContext,
    settings: &Settings,
    cmd: ExportCommands,
) -> FinanceResult<()> {
    let snapshot = ctx.store()?.snapshot();

    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let mut writer = create_output(&output)?;
            match format {
                ExportFormat::Csv => {
                    csv::export_transactions_csv(&snapshot, &mut writer)?;
                    println!("Transactions exported to: {}", output.display());
                    println!("Note: CSV format exports transactions only. Use JSON or YAML for a full export.");
                }
                ExportFormat::Json => {
                    json::export_full_json(&snapshot, &mut writer, pretty)?;
                    println!("Full export written to: {}", output.display());
                }
                ExportFormat::Yaml => {
                    yaml::export_full_yaml(&snapshot, &mut writer)?;
                    println!("Full export written to: {}", output.display());
                }
            }
            finish(writer)?;
            info!(path = %output.display(), ?format, "export written");
        }

        ExportCommands::Transactions { output } => {
            let mut writer = create_output(&output)?;
            csv::export_transactions_csv(&snapshot, &mut writer)?;
            finish(writer)?;
            println!(
                "Exported {} transactions to: {}",
                snapshot.transactions.len(),
                output.display()
            );
        }

        ExportCommands::Budgets { output } => {
            let mut writer = create_output(&output)?;
            csv::export_budgets_csv(&snapshot, &mut writer, settings.budget_warning_percent)?;
            finish(writer)?;
            println!(
                "Exported {} budgets to: {}",
                snapshot.budgets.len(),
                output.display()
            );
        }

        ExportCommands::Info => {
            let export = FullExport::from_snapshot(&snapshot);
            let meta = &export.metadata;
            println!("Export Information");
            println!("==================");
            println!("Schema version: {}", export.schema_version);
            println!("App version:    {}", export.app_version);
            println!();
            println!("Transactions: {}", meta.transaction_count);
            println!("Budgets:      {}", meta.budget_count);
            println!("Trips:        {}", meta.trip_count);
            println!("Goals:        {}", meta.goal_count);
            if let (Some(earliest), Some(latest)) =
                (&meta.earliest_transaction, &meta.latest_transaction)
            {
                println!("Date range:   {} to {}", earliest, latest);
            }
            println!("Income:       {}", settings.format_money(meta.total_income));
            println!("Expenses:     {}", settings.format_money(meta.total_expenses));
        }
    }

    Ok(())
}

/// Replace all data with the contents of a JSON or YAML export
///
/// Refuses to overwrite existing data unless `replace` is set.
pub fn handle_import_command(ctx: &mut FinanceContext, file: &Path, replace: bool) -> FinanceResult<()> {
    let contents = std::fs::read_to_string(file).map_err(|e| {
        FinanceError::Import(format!("Failed to read {}: {}", file.display(), e))
    })?;
    let export = import_from_str(file, &contents)?;

    let store = ctx.store_mut()?;
    if !store.snapshot().is_empty() && !replace {
        return Err(FinanceError::Import(
            "Existing data would be replaced; rerun with --replace to confirm".into(),
        ));
    }

    let imported = export.into_snapshot();
    println!("Imported from {}:", file.display());
    println!("  Transactions: {}", imported.transactions.len());
    println!("  Budgets:      {}", imported.budgets.len());
    println!("  Trips:        {}", imported.trips.len());
    println!("  Goals:        {}", imported.goals.len());

    store.replace_snapshot(imported);
    info!(path = %file.display(), "import applied");

    Ok(())
}
