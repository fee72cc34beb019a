//! Transaction model
//!
//! Represents a single income or expense entry. Trip expenses are ordinary
//! transactions carrying a back-reference to their trip.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{TransactionId, TripId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "Invalid transaction type '{}'. Use 'income' or 'expense'",
                other
            )),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    pub description: String,

    /// Always positive; direction is carried by `kind`
    pub amount: Money,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Free-form category name
    pub category: String,

    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Set when the transaction was recorded through a trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<TripId>,
}

impl Transaction {
    /// Build a transaction from its input fields with a freshly generated id
    pub fn from_new(input: NewTransaction) -> Self {
        Self {
            id: TransactionId::new(),
            description: input.description,
            amount: input.amount,
            kind: input.kind,
            category: input.category,
            date: input.date,
            tag: input.tag,
            trip_id: input.trip_id,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Check if this transaction was recorded against a trip
    pub fn is_trip_expense(&self) -> bool {
        self.trip_id.is_some()
    }

    /// Case-insensitive match against description or category
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.description.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
    }

    /// Same checks as the creation form, for an edited record
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_fields(&self.description, self.amount, &self.category)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_expense() { "-" } else { "+" };
        write!(
            f,
            "{} {} {}{} ({})",
            self.date, self.description, sign, self.amount, self.category
        )
    }
}

/// Fields for creating a transaction (everything but the id)
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Money,
    pub kind: TransactionType,
    pub category: String,
    pub date: NaiveDate,
    pub tag: Option<String>,
    pub trip_id: Option<TripId>,
}

impl NewTransaction {
    /// Create an input with the required fields
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        kind: TransactionType,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            kind,
            category: category.into(),
            date,
            tag: None,
            trip_id: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Form-level validation; the store itself accepts anything
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_fields(&self.description, self.amount, &self.category)
    }
}

/// Fields for an expense recorded through a trip (no id, trip id or type)
#[derive(Debug, Clone, PartialEq)]
pub struct TripExpense {
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub tag: Option<String>,
}

impl TripExpense {
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            date,
            tag: None,
        }
    }

    /// Turn into a full expense transaction tagged with `trip_id`
    pub fn into_transaction(self, trip_id: TripId) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            description: self.description,
            amount: self.amount,
            kind: TransactionType::Expense,
            category: self.category,
            date: self.date,
            tag: self.tag,
            trip_id: Some(trip_id),
        }
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_fields(&self.description, self.amount, &self.category)
    }
}

/// Partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionUpdate {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    /// `Some(None)` clears the tag
    pub tag: Option<Option<String>>,
    /// `Some(None)` detaches the transaction from its trip
    pub trip_id: Option<Option<TripId>>,
}

impl TransactionUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merge the set fields into `txn`
    pub fn apply(&self, txn: &mut Transaction) {
        if let Some(description) = &self.description {
            txn.description = description.clone();
        }
        if let Some(amount) = self.amount {
            txn.amount = amount;
        }
        if let Some(kind) = self.kind {
            txn.kind = kind;
        }
        if let Some(category) = &self.category {
            txn.category = category.clone();
        }
        if let Some(date) = self.date {
            txn.date = date;
        }
        if let Some(tag) = &self.tag {
            txn.tag = tag.clone();
        }
        if let Some(trip_id) = self.trip_id {
            txn.trip_id = trip_id;
        }
    }
}

fn validate_fields(
    description: &str,
    amount: Money,
    category: &str,
) -> Result<(), TransactionValidationError> {
    if description.trim().is_empty() {
        return Err(TransactionValidationError::MissingDescription);
    }
    if amount < Money::from_cents(1) {
        return Err(TransactionValidationError::NonPositiveAmount(amount));
    }
    if category.trim().is_empty() {
        return Err(TransactionValidationError::MissingCategory);
    }
    Ok(())
}

/// Validation errors for transaction forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    MissingDescription,
    NonPositiveAmount(Money),
    MissingCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDescription => write!(f, "Description is required"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be at least 0.01 (got {})", amount)
            }
            Self::MissingCategory => write!(f, "Category is required"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
