//! Core data models for FinanceMaster
//!
//! This module contains the data structures of the personal-finance domain:
//! transactions, budgets, trips, savings goals and the money and id types
//! they are built from.

pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod snapshot;
pub mod transaction;
pub mod trip;

pub use budget::{Budget, BudgetUpdate, BudgetValidationError, NewBudget};
pub use category::{
    is_default_expense_category, is_default_income_category, EXPENSE_CATEGORIES, INCOME_CATEGORIES,
};
pub use goal::{next_goal_color, Goal, GoalUpdate, GoalValidationError, NewGoal, GOAL_COLORS};
pub use ids::{BudgetId, EntityId, GoalId, TransactionId, TripId};
pub use money::{Money, MoneyParseError};
pub use snapshot::FinanceSnapshot;
pub use transaction::{
    NewTransaction, Transaction, TransactionType, TransactionUpdate, TransactionValidationError,
    TripExpense,
};
pub use trip::{NewTrip, Trip, TripUpdate, TripValidationError};
