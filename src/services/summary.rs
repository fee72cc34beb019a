//! Dashboard summary

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{FinanceSnapshot, Money, Transaction};

use super::goal::{GoalProgress, GoalService};
use super::transaction::TransactionService;

/// Categories shown on the dashboard
pub const TOP_CATEGORY_COUNT: usize = 5;
/// Goals shown on the dashboard
pub const DASHBOARD_GOAL_COUNT: usize = 3;

/// One expense category with its share of total expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary<'a> {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    /// Largest expense categories, descending
    pub top_categories: Vec<CategoryShare>,
    pub recent_transactions: Vec<&'a Transaction>,
    pub goals: Vec<GoalProgress<'a>>,
}

pub struct SummaryService<'a> {
    snapshot: &'a FinanceSnapshot,
}

impl<'a> SummaryService<'a> {
    pub fn new(snapshot: &'a FinanceSnapshot) -> Self {
        Self { snapshot }
    }

    /// Expense categories ordered by amount with their share of all expenses
    pub fn category_shares(&self) -> Vec<CategoryShare> {
        let total = self.snapshot.total_expenses();
        self.snapshot
            .expenses_by_category()
            .sorted_desc()
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                percentage: amount.percent_of(total),
                category,
                amount,
            })
            .collect()
    }

    pub fn dashboard(&self, today: NaiveDate, recent_limit: usize) -> DashboardSummary<'a> {
        let mut top_categories = self.category_shares();
        top_categories.truncate(TOP_CATEGORY_COUNT);

        let mut goals = GoalService::new(self.snapshot, today).progress_all();
        goals.truncate(DASHBOARD_GOAL_COUNT);

        DashboardSummary {
            total_income: self.snapshot.total_income(),
            total_expenses: self.snapshot.total_expenses(),
            balance: self.snapshot.balance(),
            top_categories,
            recent_transactions: TransactionService::new(self.snapshot).recent(recent_limit),
            goals,
        }
    }
}
