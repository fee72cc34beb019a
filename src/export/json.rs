//! JSON export and import
//!
//! A full export wraps the snapshot collections with a schema version, a
//! timestamp and summary metadata.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, FinanceSnapshot, Goal, Money, Transaction, Trip};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub trips: Vec<Trip>,
    pub goals: Vec<Goal>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub budget_count: usize,
    pub trip_count: usize,
    pub goal_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,

    pub total_income: Money,
    pub total_expenses: Money,
}

impl FullExport {
    pub fn from_snapshot(snapshot: &FinanceSnapshot) -> Self {
        let dates = snapshot.transactions.iter().map(|t| t.date);
        let metadata = ExportMetadata {
            transaction_count: snapshot.transactions.len(),
            budget_count: snapshot.budgets.len(),
            trip_count: snapshot.trips.len(),
            goal_count: snapshot.goals.len(),
            earliest_transaction: dates.clone().min().map(|d| d.to_string()),
            latest_transaction: dates.max().map(|d| d.to_string()),
            total_income: snapshot.total_income(),
            total_expenses: snapshot.total_expenses(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions: snapshot.transactions.clone(),
            budgets: snapshot.budgets.clone(),
            trips: snapshot.trips.clone(),
            goals: snapshot.goals.clone(),
            metadata,
        }
    }

    /// Check schema version and id uniqueness
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        fn unique<T: Eq + std::hash::Hash + std::fmt::Display>(
            ids: impl Iterator<Item = T>,
            what: &str,
        ) -> Result<(), String> {
            let mut seen = HashSet::new();
            for id in ids {
                if let Some(dup) = seen.replace(id) {
                    return Err(format!("Duplicate {} id {}", what, dup));
                }
            }
            Ok(())
        }

        unique(self.transactions.iter().map(|t| t.id), "transaction")?;
        unique(self.budgets.iter().map(|b| b.id), "budget")?;
        unique(self.trips.iter().map(|t| t.id), "trip")?;
        unique(self.goals.iter().map(|g| g.id), "goal")?;

        for trip in &self.trips {
            if let Some(stray) = trip
                .expenses
                .iter()
                .find(|e| e.trip_id.is_some_and(|id| id != trip.id))
            {
                return Err(format!(
                    "Expense {} in trip {} belongs to another trip",
                    stray.id, trip.id
                ));
            }
        }

        Ok(())
    }

    pub fn into_snapshot(self) -> FinanceSnapshot {
        FinanceSnapshot {
            transactions: self.transactions,
            budgets: self.budgets,
            trips: self.trips,
            goals: self.goals,
        }
    }
}

/// Export the full snapshot to JSON
pub fn export_full_json<W: Write>(
    snapshot: &FinanceSnapshot,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let export = FullExport::from_snapshot(snapshot);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a JSON export
pub fn import_from_json(json_str: &str) -> FinanceResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| FinanceError::Import(e.to_string()))?;

    export.validate().map_err(FinanceError::Import)?;

    Ok(export)
}
