//! Transaction CLI commands

use clap::Subcommand;
use tracing::info;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    is_default_expense_category, is_default_income_category, NewTransaction, TransactionId,
    TransactionType, TransactionUpdate,
};
use crate::services::{TransactionFilter, TransactionService};
use crate::store::FinanceContext;

use super::{invalid, parse_date, parse_date_or_today, parse_money};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// What the money was for
        description: String,
        /// Amount (always positive, e.g. "50.00")
        amount: String,
        /// income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionType,
        /// Category name
        #[arg(short, long, default_value = "Outros")]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form tag
        #[arg(long)]
        tag: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Search description or category
        #[arg(short, long)]
        search: Option<String>,
        /// Only income or only expenses
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Filter by exact category name
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Only expenses recorded against a trip
        #[arg(long)]
        trips: bool,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (or unambiguous prefix)
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID (or unambiguous prefix)
        id: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(long, conflicts_with = "clear_tag")]
        tag: Option<String>,
        /// Remove the tag
        #[arg(long)]
        clear_tag: bool,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (or unambiguous prefix)
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    ctx: &mut FinanceContext,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            kind,
            category,
            date,
            tag,
        } => {
            let mut input = NewTransaction::new(
                description.trim(),
                parse_money(&amount)?,
                kind,
                category.trim(),
                parse_date_or_today(date.as_deref())?,
            );
            input.tag = tag.filter(|t| !t.trim().is_empty());
            input.validate().map_err(invalid)?;

            let known = match input.kind {
                TransactionType::Income => is_default_income_category(&input.category),
                TransactionType::Expense => is_default_expense_category(&input.category),
            };
            if !known {
                println!(
                    "Note: '{}' is not a default {} category.",
                    input.category,
                    input.kind.to_string().to_lowercase()
                );
            }

            let store = ctx.store_mut()?;
            let id = store.add_transaction(input);
            info!(%id, "transaction added");

            let txn = store
                .transaction(id)
                .ok_or_else(|| FinanceError::not_found::<TransactionId>(id.to_string()))?;
            println!("Created transaction:");
            print!("{}", format_transaction_details(txn, settings));
            println!("Balance:     {}", settings.format_money(store.balance()));
        }

        TransactionCommands::List {
            search,
            kind,
            category,
            trips,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            filter.query = search;
            filter.kind = kind;
            filter.category = category;
            filter.trips_only = trips;

            let snapshot = ctx.store()?.snapshot();
            let transactions = TransactionService::new(&snapshot).list(&filter);

            print!("{}", format_transaction_list(&transactions, settings));
            println!("\nShowing {} transactions", transactions.len());
        }

        TransactionCommands::Show { id } => {
            let snapshot = ctx.store()?.snapshot();
            let txn = TransactionService::new(&snapshot).find(&id)?;
            print!("{}", format_transaction_details(txn, settings));
        }

        TransactionCommands::Edit {
            id,
            description,
            amount,
            kind,
            category,
            date,
            tag,
            clear_tag,
        } => {
            let store = ctx.store_mut()?;
            let snapshot = store.snapshot();
            let existing = TransactionService::new(&snapshot).find(&id)?;

            let update = TransactionUpdate {
                description: description.map(|d| d.trim().to_string()),
                amount: amount.as_deref().map(parse_money).transpose()?,
                kind,
                category: category.map(|c| c.trim().to_string()),
                date: date.as_deref().map(parse_date).transpose()?,
                tag: if clear_tag { Some(None) } else { tag.map(Some) },
                trip_id: None,
            };
            if update.is_empty() {
                println!("Nothing to change.");
                return Ok(());
            }

            let mut edited = existing.clone();
            update.apply(&mut edited);
            edited.validate().map_err(invalid)?;

            store.update_transaction(existing.id, update);
            info!(id = %existing.id, "transaction updated");
            println!("Updated transaction:");
            print!("{}", format_transaction_details(&edited, settings));
        }

        TransactionCommands::Delete { id } => {
            let store = ctx.store_mut()?;
            let snapshot = store.snapshot();
            let txn = TransactionService::new(&snapshot).find(&id)?;

            store.delete_transaction(txn.id);
            info!(id = %txn.id, "transaction deleted");
            println!("Deleted transaction: {} ({})", txn.description, txn.id);
            if let Some(trip_id) = txn.trip_id {
                println!("Note: the copy recorded on trip {} is kept.", trip_id);
            }
        }
    }

    Ok(())
}
