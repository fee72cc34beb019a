//! Trip CLI commands

use clap::Subcommand;
use tracing::info;

use crate::config::Settings;
use crate::display::{format_trip_details, format_trip_list};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{NewTrip, TripExpense, TripId, TripUpdate};
use crate::services::{TripProgress, TripService};
use crate::store::FinanceContext;

use super::{invalid, parse_date, parse_date_or_today, parse_money};

/// Trip subcommands
#[derive(Subcommand, Debug)]
pub enum TripCommands {
    /// Plan a trip
    Add {
        /// Where to
        destination: String,
        /// Trip budget
        budget: String,
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end: String,
    },
    /// List trips with spending
    List,
    /// Show a trip and its expenses
    Show {
        /// Trip ID prefix or destination
        id: String,
    },
    /// Edit a trip
    Edit {
        /// Trip ID prefix or destination
        id: String,
        #[arg(long)]
        destination: Option<String>,
        #[arg(long)]
        budget: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    /// Delete a trip (its expenses stay in the transaction list)
    Delete {
        /// Trip ID prefix or destination
        id: String,
    },
    /// Record an expense on a trip
    Expense {
        /// Trip ID prefix or destination
        id: String,
        /// What the money was for
        description: String,
        /// Amount spent
        amount: String,
        #[arg(short, long, default_value = "Viagem")]
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        #[arg(long)]
        tag: Option<String>,
    },
}

/// Handle a trip command
pub fn handle_trip_command(
    ctx: &mut FinanceContext,
    settings: &Settings,
    cmd: TripCommands,
) -> FinanceResult<()> {
    match cmd {
        TripCommands::Add {
            destination,
            budget,
            start,
            end,
        } => {
            let input = NewTrip::new(
                destination.trim(),
                parse_money(&budget)?,
                parse_date(&start)?,
                parse_date(&end)?,
            );
            input.validate().map_err(invalid)?;

            let store = ctx.store_mut()?;
            let id = store.add_trip(input);
            info!(%id, "trip added");

            let trip = store
                .trip(id)
                .ok_or_else(|| FinanceError::not_found::<TripId>(id.to_string()))?;
            println!("Created trip:");
            print!("{}", format_trip_details(&TripProgress::compute(trip), settings));
        }

        TripCommands::List => {
            let snapshot = ctx.store()?.snapshot();
            let trips = TripService::new(&snapshot).progress_all();
            print!("{}", format_trip_list(&trips, settings));
        }

        TripCommands::Show { id } => {
            let snapshot = ctx.store()?.snapshot();
            let trip = TripService::new(&snapshot).find(&id)?;
            print!("{}", format_trip_details(&TripProgress::compute(trip), settings));
        }

        TripCommands::Edit {
            id,
            destination,
            budget,
            start,
            end,
        } => {
            let store = ctx.store_mut()?;
            let snapshot = store.snapshot();
            let existing = TripService::new(&snapshot).find(&id)?;

            let update = TripUpdate {
                destination: destination.map(|d| d.trim().to_string()),
                budget: budget.as_deref().map(parse_money).transpose()?,
                expenses: None,
                start_date: start.as_deref().map(parse_date).transpose()?,
                end_date: end.as_deref().map(parse_date).transpose()?,
            };
            if update.is_empty() {
                println!("Nothing to change.");
                return Ok(());
            }

            let mut edited = existing.clone();
            update.apply(&mut edited);
            edited.validate().map_err(invalid)?;

            store.update_trip(existing.id, update);
            info!(id = %existing.id, "trip updated");
            println!("Updated trip:");
            print!("{}", format_trip_details(&TripProgress::compute(&edited), settings));
        }

        TripCommands::Delete { id } => {
            let store = ctx.store_mut()?;
            let snapshot = store.snapshot();
            let trip = TripService::new(&snapshot).find(&id)?;

            store.delete_trip(trip.id);
            info!(id = %trip.id, "trip deleted");
            println!("Deleted trip: {} ({})", trip.destination, trip.id);
            if !trip.expenses.is_empty() {
                println!(
                    "Its {} expense(s) remain in the transaction list.",
                    trip.expenses.len()
                );
            }
        }

        TripCommands::Expense {
            id,
            description,
            amount,
            category,
            date,
            tag,
        } => {
            let mut expense = TripExpense::new(
                description.trim(),
                parse_money(&amount)?,
                category.trim(),
                parse_date_or_today(date.as_deref())?,
            );
            expense.tag = tag.filter(|t| !t.trim().is_empty());
            expense.validate().map_err(invalid)?;

            let store = ctx.store_mut()?;
            let snapshot = store.snapshot();
            let trip_id = TripService::new(&snapshot).find(&id)?.id;

            let txn_id = store.add_expense_to_trip(trip_id, expense);
            info!(trip = %trip_id, transaction = %txn_id, "trip expense added");

            let trip = store
                .trip(trip_id)
                .ok_or_else(|| FinanceError::not_found::<TripId>(trip_id.to_string()))?;
            println!("Recorded expense {} on {}", txn_id, trip.destination);
            print!("{}", format_trip_details(&TripProgress::compute(trip), settings));
        }
    }

    Ok(())
}
