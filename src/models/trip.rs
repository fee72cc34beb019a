//! Trip model
//!
//! A trip owns copies of the expense transactions recorded against it.
//! The same transactions also live in the global transaction list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TripId;
use super::money::Money;
use super::transaction::Transaction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Trip {
    pub id: TripId,

    pub destination: String,

    /// Planned spend for the whole trip
    pub budget: Money,

    /// Expenses recorded through this trip
    pub expenses: Vec<Transaction>,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,
}

impl Trip {
    /// Build a trip with a fresh id and no expenses
    pub fn from_new(input: NewTrip) -> Self {
        Self {
            id: TripId::new(),
            destination: input.destination,
            budget: input.budget,
            expenses: Vec::new(),
            start_date: input.start_date,
            end_date: input.end_date,
        }
    }

    /// Sum of the trip's own expense list
    pub fn total_spent(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Inclusive length in days
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Same checks as the creation form, for an edited record
    pub fn validate(&self) -> Result<(), TripValidationError> {
        NewTrip::new(
            self.destination.clone(),
            self.budget,
            self.start_date,
            self.end_date,
        )
        .validate()
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} to {})",
            self.destination, self.start_date, self.end_date
        )
    }
}

/// Fields for creating a trip (no id, no expenses)
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    pub destination: String,
    pub budget: Money,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewTrip {
    pub fn new(
        destination: impl Into<String>,
        budget: Money,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            destination: destination.into(),
            budget,
            start_date,
            end_date,
        }
    }

    pub fn validate(&self) -> Result<(), TripValidationError> {
        if self.destination.trim().is_empty() {
            return Err(TripValidationError::MissingDestination);
        }
        if self.budget < Money::from_units(1) {
            return Err(TripValidationError::BudgetTooSmall(self.budget));
        }
        if self.end_date < self.start_date {
            return Err(TripValidationError::EndBeforeStart);
        }
        Ok(())
    }
}

/// Partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripUpdate {
    pub destination: Option<String>,
    pub budget: Option<Money>,
    /// Replaces the whole expense list
    pub expenses: Option<Vec<Transaction>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TripUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply(&self, trip: &mut Trip) {
        if let Some(destination) = &self.destination {
            trip.destination = destination.clone();
        }
        if let Some(budget) = self.budget {
            trip.budget = budget;
        }
        if let Some(expenses) = &self.expenses {
            trip.expenses = expenses.clone();
        }
        if let Some(start) = self.start_date {
            trip.start_date = start;
        }
        if let Some(end) = self.end_date {
            trip.end_date = end;
        }
    }
}

/// Validation errors for trip forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripValidationError {
    MissingDestination,
    BudgetTooSmall(Money),
    EndBeforeStart,
}

impl fmt::Display for TripValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDestination => write!(f, "Destination is required"),
            Self::BudgetTooSmall(budget) => {
                write!(f, "Trip budget must be at least 1.00 (got {})", budget)
            }
            Self::EndBeforeStart => write!(f, "End date must not be before start date"),
        }
    }
}

impl std::error::Error for TripValidationError {}
