//! Budget model
//!
//! A spending limit for one category. `current_amount` is whatever the
//! caller supplied at creation; actual spend is derived from transactions
//! by the budget service.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// A per-category spending limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Budget {
    pub id: BudgetId,

    /// Category this limit applies to (one budget per category is intended)
    pub category: String,

    pub limit: Money,

    /// Snapshot taken at creation, not kept in sync
    pub current_amount: Money,
}

impl Budget {
    pub fn from_new(input: NewBudget) -> Self {
        Self {
            id: BudgetId::new(),
            category: input.category,
            limit: input.limit,
            current_amount: input.current_amount,
        }
    }

    /// Same checks as the creation form, for an edited record
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        NewBudget::new(self.category.clone(), self.limit).validate()
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: limit {}", self.category, self.limit)
    }
}

/// Fields for creating a budget
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub category: String,
    pub limit: Money,
    pub current_amount: Money,
}

impl NewBudget {
    pub fn new(category: impl Into<String>, limit: Money) -> Self {
        Self {
            category: category.into(),
            limit,
            current_amount: Money::zero(),
        }
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::MissingCategory);
        }
        if !self.limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.limit));
        }
        Ok(())
    }
}

/// Partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetUpdate {
    pub category: Option<String>,
    pub limit: Option<Money>,
    pub current_amount: Option<Money>,
}

impl BudgetUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply(&self, budget: &mut Budget) {
        if let Some(category) = &self.category {
            budget.category = category.clone();
        }
        if let Some(limit) = self.limit {
            budget.limit = limit;
        }
        if let Some(current) = self.current_amount {
            budget.current_amount = current;
        }
    }
}

/// Validation errors for budget forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    MissingCategory,
    NonPositiveLimit(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "Category is required"),
            Self::NonPositiveLimit(limit) => {
                write!(f, "Budget limit must be greater than zero (got {})", limit)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
