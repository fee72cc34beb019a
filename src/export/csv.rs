//! CSV export
//!
//! Spreadsheet-friendly dumps of transactions and budget progress.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::FinanceSnapshot;
use crate::services::BudgetService;

fn export_err(e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// Export all transactions, one row each, in stored order
///
/// Amounts are signed decimals: expenses negative.
pub fn export_transactions_csv<W: Write>(snapshot: &FinanceSnapshot, writer: W) -> FinanceResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["ID", "Date", "Description", "Type", "Category", "Amount", "Tag", "Trip"])
        .map_err(export_err)?;

    for txn in &snapshot.transactions {
        let signed = if txn.is_expense() { -txn.amount } else { txn.amount };
        csv.write_record([
            txn.id.as_uuid().to_string(),
            txn.date.to_string(),
            txn.description.clone(),
            txn.kind.to_string(),
            txn.category.clone(),
            signed.to_string(),
            txn.tag.clone().unwrap_or_default(),
            txn.trip_id.map(|id| id.as_uuid().to_string()).unwrap_or_default(),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

/// Export every budget with its computed spending
pub fn export_budgets_csv<W: Write>(
    snapshot: &FinanceSnapshot,
    writer: W,
    warning_percent: u8,
) -> FinanceResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["ID", "Category", "Limit", "Spent", "Remaining", "Status"])
        .map_err(export_err)?;

    let service = BudgetService::new(snapshot).with_warning_percent(warning_percent);
    for p in service.progress_all() {
        csv.write_record([
            p.budget.id.as_uuid().to_string(),
            p.budget.category.clone(),
            p.budget.limit.to_string(),
            p.spent.to_string(),
            p.remaining.to_string(),
            p.status.to_string(),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}
