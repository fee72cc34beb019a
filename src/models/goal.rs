//! Savings goal model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// Colors handed out to new goals, cycling by how many goals exist
pub const GOAL_COLORS: [&str; 6] = ["primary", "accent", "warning", "income", "purple", "pink"];

/// Pick the palette color for the goal created after `existing` others
pub fn next_goal_color(existing: usize) -> &'static str {
    GOAL_COLORS[existing % GOAL_COLORS.len()]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Goal {
    pub id: GoalId,

    pub title: String,

    pub target_amount: Money,

    /// Saved so far; `add_amount` never pushes this past `target_amount`
    pub current_amount: Money,

    pub deadline: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Goal {
    pub fn from_new(input: NewGoal) -> Self {
        Self {
            id: GoalId::new(),
            title: input.title,
            target_amount: input.target_amount,
            current_amount: input.current_amount,
            deadline: input.deadline,
            color: input.color,
        }
    }

    /// Contribute `amount`, clamping the result to the target
    pub fn add_amount(&mut self, amount: Money) {
        self.current_amount = std::cmp::min(self.current_amount + amount, self.target_amount);
    }

    pub fn is_completed(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    pub fn remaining(&self) -> Money {
        self.target_amount - self.current_amount
    }

    /// Same checks as the creation form, for an edited record
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        NewGoal::new(self.title.clone(), self.target_amount, self.deadline)
            .with_current(self.current_amount)
            .validate()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} by {}",
            self.title, self.current_amount, self.target_amount, self.deadline
        )
    }
}

/// Fields for creating a goal
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub title: String,
    pub target_amount: Money,
    pub current_amount: Money,
    pub deadline: NaiveDate,
    pub color: Option<String>,
}

impl NewGoal {
    pub fn new(title: impl Into<String>, target_amount: Money, deadline: NaiveDate) -> Self {
        Self {
            title: title.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline,
            color: None,
        }
    }

    pub fn with_current(mut self, current_amount: Money) -> Self {
        self.current_amount = current_amount;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.title.trim().is_empty() {
            return Err(GoalValidationError::MissingTitle);
        }
        if self.target_amount < Money::from_units(1) {
            return Err(GoalValidationError::TargetTooSmall(self.target_amount));
        }
        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent(self.current_amount));
        }
        Ok(())
    }
}

/// Partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub target_amount: Option<Money>,
    /// Written as given; only `add_amount` clamps
    pub current_amount: Option<Money>,
    pub deadline: Option<NaiveDate>,
    /// `Some(None)` clears the color
    pub color: Option<Option<String>>,
}

impl GoalUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply(&self, goal: &mut Goal) {
        if let Some(title) = &self.title {
            goal.title = title.clone();
        }
        if let Some(target) = self.target_amount {
            goal.target_amount = target;
        }
        if let Some(current) = self.current_amount {
            goal.current_amount = current;
        }
        if let Some(deadline) = self.deadline {
            goal.deadline = deadline;
        }
        if let Some(color) = &self.color {
            goal.color = color.clone();
        }
    }
}

/// Validation errors for goal forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    MissingTitle,
    TargetTooSmall(Money),
    NegativeCurrent(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Title is required"),
            Self::TargetTooSmall(target) => {
                write!(f, "Target amount must be at least 1.00 (got {})", target)
            }
            Self::NegativeCurrent(current) => {
                write!(f, "Current amount cannot be negative (got {})", current)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
