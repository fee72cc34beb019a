//! Service layer for FinanceMaster
//!
//! Read-side views computed from a [`FinanceSnapshot`](crate::models::FinanceSnapshot):
//! filtering, progress figures and the dashboard summary. Services borrow the
//! snapshot and never mutate it.

pub mod budget;
pub mod goal;
pub mod summary;
pub mod transaction;
pub mod trip;

pub use budget::{BudgetOverview, BudgetProgress, BudgetService, BudgetStatus};
pub use goal::{GoalProgress, GoalService, GoalTotals};
pub use summary::{DashboardSummary, SummaryService};
pub use transaction::{TransactionFilter, TransactionService};
pub use trip::{TripProgress, TripService};

use crate::error::{FinanceError, FinanceResult};
use crate::models::EntityId;

/// Find the single item whose id starts with `identifier`
///
/// Zero matches is `NotFound`, several is `Ambiguous`.
pub(crate) fn resolve_by_id<'a, T, I: EntityId>(
    items: &'a [T],
    identifier: &str,
    id_of: impl Fn(&T) -> I,
) -> FinanceResult<&'a T> {
    let mut found = items.iter().filter(|item| id_of(*item).matches_prefix(identifier));
    match (found.next(), found.next()) {
        (Some(item), None) => Ok(item),
        (Some(_), Some(_)) => Err(FinanceError::ambiguous::<I>(identifier.trim())),
        (None, _) => Err(FinanceError::not_found::<I>(identifier.trim())),
    }
}
