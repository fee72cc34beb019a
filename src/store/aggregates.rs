//! Aggregates derived from the transaction collection
//!
//! Nothing here is cached or persisted; every call rescans the transactions.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::{FinanceSnapshot, Money, Transaction};

/// Per-category sums, iterated in first-seen category order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<(String, Money)>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `category`, appending the category if unseen
    pub fn add(&mut self, category: &str, amount: Money) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category.to_string(), amount)),
        }
    }

    /// Sum for `category`, `None` if it never appeared
    pub fn get(&self, category: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    /// Sum for `category`, zero if it never appeared
    pub fn get_or_zero(&self, category: &str) -> Money {
        self.get(category).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.entries.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum across all categories
    pub fn total(&self) -> Money {
        self.entries.iter().map(|(_, total)| *total).sum()
    }

    /// Entries ordered by amount, largest first; ties keep first-seen order
    pub fn sorted_desc(&self) -> Vec<(String, Money)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl<'a> FromIterator<&'a Transaction> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = &'a Transaction>>(iter: I) -> Self {
        let mut totals = Self::new();
        for txn in iter {
            totals.add(&txn.category, txn.amount);
        }
        totals
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, total) in &self.entries {
            map.serialize_entry(name, total)?;
        }
        map.end()
    }
}

impl FinanceSnapshot {
    /// Sum of all income transactions
    pub fn total_income(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of all expense transactions (trip expenses included)
    pub fn total_expenses(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum()
    }

    /// `total_income - total_expenses`
    pub fn balance(&self) -> Money {
        self.total_income() - self.total_expenses()
    }

    /// Expense sums per category
    pub fn expenses_by_category(&self) -> CategoryTotals {
        self.transactions.iter().filter(|t| t.is_expense()).collect()
    }
}
