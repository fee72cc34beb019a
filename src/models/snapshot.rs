//! The complete in-memory state: all four entity collections

use serde::{Deserialize, Serialize};

use super::budget::Budget;
use super::goal::Goal;
use super::transaction::Transaction;
use super::trip::Trip;

/// All collections at one instant. This is exactly what gets persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinanceSnapshot {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub trips: Vec<Trip>,
    pub goals: Vec<Goal>,
}

impl FinanceSnapshot {
    /// The empty snapshot used when nothing (valid) is persisted
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
            && self.budgets.is_empty()
            && self.trips.is_empty()
            && self.goals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_shape() {
        let json = serde_json::to_string(&FinanceSnapshot::empty()).unwrap();
        assert_eq!(
            json,
            r#"{"transactions":[],"budgets":[],"trips":[],"goals":[]}"#
        );
        assert!(FinanceSnapshot::empty().is_empty());
    }

    #[test]
    fn test_missing_collection_is_rejected() {
        let result = serde_json::from_str::<FinanceSnapshot>(
            r#"{"transactions":[],"budgets":[],"trips":[]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_collection_is_rejected() {
        let result = serde_json::from_str::<FinanceSnapshot>(
            r#"{"transactions":[],"budgets":[],"trips":[],"goals":[],"accounts":[]}"#,
        );
        assert!(result.is_err());
    }
}
