//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the finance store and the service layer.
//! Input is validated here, before anything reaches the store.

pub mod budget;
pub mod export;
pub mod goal;
pub mod transaction;
pub mod trip;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, handle_import_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use trip::{handle_trip_command, TripCommands};

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Money;

pub(crate) fn parse_money(input: &str) -> FinanceResult<Money> {
    Money::parse(input).map_err(|e| {
        FinanceError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '50.00' or '1,500.25' ({})",
            input, e
        ))
    })
}

pub(crate) fn parse_date(input: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        FinanceError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })
}

pub(crate) fn parse_date_or_today(input: Option<&str>) -> FinanceResult<NaiveDate> {
    match input {
        Some(s) => parse_date(s),
        None => Ok(today()),
    }
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Map a form validation failure into the CLI error
pub(crate) fn invalid(e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Validation(e.to_string())
}
