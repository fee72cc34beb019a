//! Budget service
//!
//! Spending against each category limit. Spent amounts always come from the
//! transaction list; the stored `current_amount` is not consulted.

use std::fmt;

use serde::Serialize;

use crate::error::FinanceResult;
use crate::models::{Budget, FinanceSnapshot, Money, EXPENSE_CATEGORIES};
use crate::store::CategoryTotals;

use super::resolve_by_id;

/// Spend percentage at which a budget is flagged when no setting says otherwise
pub const DEFAULT_WARNING_PERCENT: u8 = 80;

/// How close a budget is to its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Ok,
    Warning,
    Exceeded,
}

impl BudgetStatus {
    fn classify(raw_percent: f64, warning_percent: u8) -> Self {
        if raw_percent >= 100.0 {
            Self::Exceeded
        } else if raw_percent >= f64::from(warning_percent) {
            Self::Warning
        } else {
            Self::Ok
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Warning => write!(f, "warning"),
            Self::Exceeded => write!(f, "exceeded"),
        }
    }
}

/// One budget with its computed spending
#[derive(Debug, Clone, Serialize)]
pub struct BudgetProgress<'a> {
    pub budget: &'a Budget,
    pub spent: Money,
    /// Spent as a percentage of the limit, capped at 100
    pub percentage: f64,
    /// `limit - spent`; negative when over budget
    pub remaining: Money,
    pub status: BudgetStatus,
}

/// Totals across every budget
#[derive(Debug, Clone, Serialize)]
pub struct BudgetOverview<'a> {
    pub total_limit: Money,
    pub total_spent: Money,
    /// `total_limit - total_spent`, never below zero
    pub available: Money,
    pub budgets: Vec<BudgetProgress<'a>>,
}

/// Service for budget progress
pub struct BudgetService<'a> {
    snapshot: &'a FinanceSnapshot,
    warning_percent: u8,
}

impl<'a> BudgetService<'a> {
    pub fn new(snapshot: &'a FinanceSnapshot) -> Self {
        Self {
            snapshot,
            warning_percent: DEFAULT_WARNING_PERCENT,
        }
    }

    pub fn with_warning_percent(mut self, warning_percent: u8) -> Self {
        self.warning_percent = warning_percent;
        self
    }

    /// Progress of every budget, in collection order
    pub fn progress_all(&self) -> Vec<BudgetProgress<'a>> {
        let spent = self.snapshot.expenses_by_category();
        self.snapshot
            .budgets
            .iter()
            .map(|b| self.progress_with(b, &spent))
            .collect()
    }

    pub fn progress(&self, budget: &'a Budget) -> BudgetProgress<'a> {
        self.progress_with(budget, &self.snapshot.expenses_by_category())
    }

    fn progress_with(&self, budget: &'a Budget, spent_by_category: &CategoryTotals) -> BudgetProgress<'a> {
        let spent = spent_by_category.get_or_zero(&budget.category);
        let raw = spent.percent_of(budget.limit);
        BudgetProgress {
            budget,
            spent,
            percentage: raw.min(100.0),
            remaining: budget.limit - spent,
            status: BudgetStatus::classify(raw, self.warning_percent),
        }
    }

    pub fn overview(&self) -> BudgetOverview<'a> {
        let budgets = self.progress_all();
        let total_limit: Money = budgets.iter().map(|p| p.budget.limit).sum();
        let total_spent: Money = budgets.iter().map(|p| p.spent).sum();
        let available = (total_limit - total_spent).max(Money::zero());
        BudgetOverview {
            total_limit,
            total_spent,
            available,
            budgets,
        }
    }

    /// Default expense categories that have no budget yet
    pub fn categories_without_budget(&self) -> Vec<&'static str> {
        EXPENSE_CATEGORIES
            .iter()
            .copied()
            .filter(|cat| !self.snapshot.budgets.iter().any(|b| b.category == *cat))
            .collect()
    }

    /// Resolve an id prefix or an exact category name
    pub fn find(&self, identifier: &str) -> FinanceResult<&'a Budget> {
        let by_category = self
            .snapshot
            .budgets
            .iter()
            .filter(|b| b.category.eq_ignore_ascii_case(identifier.trim()))
            .collect::<Vec<_>>();
        if let [only] = by_category.as_slice() {
            return Ok(*only);
        }
        resolve_by_id(&self.snapshot.budgets, identifier, |b| b.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewBudget, NewTransaction, Transaction, TransactionType};
    use chrono::NaiveDate;

    fn spend(category: &str, units: i64) -> Transaction {
        Transaction::from_new(NewTransaction::new(
            "x",
            Money::from_units(units),
            TransactionType::Expense,
            category,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        ))
    }

    fn snapshot() -> FinanceSnapshot {
        let mut s = FinanceSnapshot::empty();
        s.budgets = vec![
            Budget::from_new(NewBudget::new("Lazer", Money::from_units(200))),
            Budget::from_new(NewBudget::new("Alimentação", Money::from_units(1000))),
            Budget::from_new(NewBudget::new("Transporte", Money::from_units(100))),
        ];
        s.transactions = vec![
            spend("Lazer", 170),
            spend("Alimentação", 300),
            spend("Transporte", 150),
        ];
        s
    }

    #[test]
    fn test_progress_and_status() {
        let s = snapshot();
        let progress = BudgetService::new(&s).progress_all();

        assert_eq!(progress[0].spent, Money::from_units(170));
        assert_eq!(progress[0].status, BudgetStatus::Warning);
        assert_eq!(progress[1].status, BudgetStatus::Ok);
        assert!((progress[1].percentage - 30.0).abs() < 1e-9);
        assert_eq!(progress[2].status, BudgetStatus::Exceeded);
        assert_eq!(progress[2].percentage, 100.0);
        assert_eq!(progress[2].remaining, Money::from_units(-50));
    }

    #[test]
    fn test_custom_warning_threshold() {
        let s = snapshot();
        let progress = BudgetService::new(&s).with_warning_percent(90).progress_all();
        assert_eq!(progress[0].status, BudgetStatus::Ok);
    }

    #[test]
    fn test_spent_ignores_stored_current_amount() {
        let mut s = snapshot();
        s.budgets[1].current_amount = Money::from_units(999);
        let progress = BudgetService::new(&s).progress(&s.budgets[1]);
        assert_eq!(progress.spent, Money::from_units(300));
    }

    #[test]
    fn test_overview_totals() {
        let s = snapshot();
        let overview = BudgetService::new(&s).overview();
        assert_eq!(overview.total_limit, Money::from_units(1300));
        assert_eq!(overview.total_spent, Money::from_units(620));
        assert_eq!(overview.available, Money::from_units(680));
    }

    #[test]
    fn test_overview_available_never_negative() {
        let mut s = FinanceSnapshot::empty();
        s.budgets = vec![Budget::from_new(NewBudget::new("Lazer", Money::from_units(10)))];
        s.transactions = vec![spend("Lazer", 50)];
        assert_eq!(BudgetService::new(&s).overview().available, Money::zero());
    }

    #[test]
    fn test_categories_without_budget() {
        let s = snapshot();
        let missing = BudgetService::new(&s).categories_without_budget();
        assert!(!missing.contains(&"Lazer"));
        assert!(missing.contains(&"Moradia"));
        assert_eq!(missing.len(), EXPENSE_CATEGORIES.len() - 3);
    }

    #[test]
    fn test_find_by_category_name() {
        let s = snapshot();
        let service = BudgetService::new(&s);
        assert_eq!(service.find("lazer").unwrap().id, s.budgets[0].id);
        assert!(service.find("Moradia").is_err());
    }
}
