//! Transaction service
//!
//! Listing, searching and id resolution over the transaction collection.

use crate::error::FinanceResult;
use crate::models::{FinanceSnapshot, Transaction, TransactionType};

use super::resolve_by_id;

/// Service for transaction queries
pub struct TransactionService<'a> {
    snapshot: &'a FinanceSnapshot,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive text matched against description or category
    pub query: Option<String>,
    /// Only income or only expenses
    pub kind: Option<TransactionType>,
    /// Only transactions in this category (exact match)
    pub category: Option<String>,
    /// Only expenses recorded against a trip
    pub trips_only: bool,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn trips_only(mut self) -> Self {
        self.trips_only = true;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        if let Some(query) = self.query.as_deref() {
            if !query.trim().is_empty() && !txn.matches_query(query.trim()) {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref() {
            if txn.category != category {
                return false;
            }
        }
        !self.trips_only || txn.is_trip_expense()
    }
}

impl<'a> TransactionService<'a> {
    pub fn new(snapshot: &'a FinanceSnapshot) -> Self {
        Self { snapshot }
    }

    /// Transactions matching `filter`, newest date first
    ///
    /// Transactions sharing a date keep their insertion order.
    pub fn list(&self, filter: &TransactionFilter) -> Vec<&'a Transaction> {
        let mut matching: Vec<&Transaction> = self
            .snapshot
            .transactions
            .iter()
            .filter(|t| filter.matches(t))
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date));
        if let Some(limit) = filter.limit {
            matching.truncate(limit);
        }
        matching
    }

    /// The `limit` most recent transactions
    pub fn recent(&self, limit: usize) -> Vec<&'a Transaction> {
        self.list(&TransactionFilter::new().limit(limit))
    }

    /// Resolve an id or unambiguous id prefix
    pub fn find(&self, identifier: &str) -> FinanceResult<&'a Transaction> {
        resolve_by_id(&self.snapshot.transactions, identifier, |t| t.id)
    }
}
