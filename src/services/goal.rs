//! Goal service

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::FinanceResult;
use crate::models::{FinanceSnapshot, Goal, Money};

use super::resolve_by_id;

/// Computed figures for one goal as of a given day
#[derive(Debug, Clone, Serialize)]
pub struct GoalProgress<'a> {
    pub goal: &'a Goal,
    /// Saved as a percentage of the target
    pub percentage: f64,
    pub remaining: Money,
    /// Days from today to the deadline; negative once overdue
    pub days_left: i64,
    /// Amount to save per day to reach the target by the deadline
    pub daily_needed: Money,
    pub completed: bool,
}

impl<'a> GoalProgress<'a> {
    pub fn compute(goal: &'a Goal, today: NaiveDate) -> Self {
        let remaining = goal.remaining();
        let days_left = (goal.deadline - today).num_days();
        let daily_needed = if days_left > 0 {
            remaining.divide(days_left)
        } else {
            remaining
        };
        Self {
            goal,
            percentage: goal.current_amount.percent_of(goal.target_amount),
            remaining,
            days_left,
            daily_needed,
            completed: goal.is_completed(),
        }
    }

    pub fn is_overdue(&self) -> bool {
        self.days_left < 0 && !self.completed
    }
}

/// Totals across all goals
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoalTotals {
    pub total_target: Money,
    pub total_saved: Money,
    pub completed: usize,
    pub count: usize,
}

impl GoalTotals {
    /// Overall saved percentage across every goal
    pub fn percentage(&self) -> f64 {
        self.total_saved.percent_of(self.total_target)
    }
}

/// Service for savings goal progress
pub struct GoalService<'a> {
    snapshot: &'a FinanceSnapshot,
    today: NaiveDate,
}

impl<'a> GoalService<'a> {
    pub fn new(snapshot: &'a FinanceSnapshot, today: NaiveDate) -> Self {
        Self { snapshot, today }
    }

    pub fn progress_all(&self) -> Vec<GoalProgress<'a>> {
        self.snapshot
            .goals
            .iter()
            .map(|g| GoalProgress::compute(g, self.today))
            .collect()
    }

    pub fn totals(&self) -> GoalTotals {
        self.snapshot
            .goals
            .iter()
            .fold(GoalTotals::default(), |mut totals, goal| {
                totals.total_target += goal.target_amount;
                totals.total_saved += goal.current_amount;
                totals.count += 1;
                if goal.is_completed() {
                    totals.completed += 1;
                }
                totals
            })
    }

    /// Resolve an id prefix or an exact (case-insensitive) title
    pub fn find(&self, identifier: &str) -> FinanceResult<&'a Goal> {
        let titled: Vec<&Goal> = self
            .snapshot
            .goals
            .iter()
            .filter(|g| g.title.eq_ignore_ascii_case(identifier.trim()))
            .collect();
        if let [only] = titled.as_slice() {
            return Ok(*only);
        }
        resolve_by_id(&self.snapshot.goals, identifier, |g| g.id)
    }
}
