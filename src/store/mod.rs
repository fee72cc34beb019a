//! The finance store
//!
//! Holds the current [`FinanceSnapshot`], applies mutations copy-on-write,
//! and runs the registered [`CommitHook`]s (persistence among them) after
//! every mutation. Aggregates are recomputed from the snapshot on each read.
//!
//! Mutations never validate their input and never fail: an unknown id is a
//! no-op, and a persistence error is logged by the hook while the in-memory
//! change stands.
//!
//! Trip expenses are written twice on purpose: once into the trip's own
//! expense list and once into the global transaction list. Deleting either
//! side does not touch the other.

pub mod aggregates;
pub mod context;
pub mod hooks;

pub use aggregates::CategoryTotals;
pub use context::FinanceContext;
pub use hooks::{CommitHook, FnHook};

use std::sync::Arc;

use tracing::debug;

use crate::models::{
    Budget, BudgetId, BudgetUpdate, FinanceSnapshot, Goal, GoalId, GoalUpdate, Money, NewBudget,
    NewGoal, NewTransaction, NewTrip, Transaction, TransactionId, TransactionUpdate, Trip,
    TripExpense, TripId, TripUpdate,
};
use crate::storage::{KeyValueStore, SnapshotSlot};

/// In-memory finance state plus its commit hooks
pub struct FinanceStore {
    snapshot: Arc<FinanceSnapshot>,
    hooks: Vec<Box<dyn CommitHook>>,
}

impl FinanceStore {
    /// Create a store over `initial`, with no hooks
    pub fn create(initial: FinanceSnapshot) -> Self {
        Self {
            snapshot: Arc::new(initial),
            hooks: Vec::new(),
        }
    }

    /// Load from `slot` (empty on any failure) and persist back to it on commit
    pub fn open<K>(slot: SnapshotSlot<K>) -> Self
    where
        K: KeyValueStore + 'static,
    {
        let mut store = Self::create(slot.load());
        store.add_hook(slot);
        store
    }

    /// Register a hook to run after every subsequent mutation
    pub fn add_hook(&mut self, hook: impl CommitHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// End the store's lifetime, handing back the final state
    pub fn dispose(self) -> FinanceSnapshot {
        debug!("finance store disposed");
        Arc::try_unwrap(self.snapshot).unwrap_or_else(|shared| (*shared).clone())
    }

    /// The current snapshot; later mutations never change a returned value
    pub fn snapshot(&self) -> Arc<FinanceSnapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.snapshot.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.snapshot.budgets
    }

    pub fn trips(&self) -> &[Trip] {
        &self.snapshot.trips
    }

    pub fn goals(&self) -> &[Goal] {
        &self.snapshot.goals
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.snapshot.transactions.iter().find(|t| t.id == id)
    }

    pub fn budget(&self, id: BudgetId) -> Option<&Budget> {
        self.snapshot.budgets.iter().find(|b| b.id == id)
    }

    pub fn trip(&self, id: TripId) -> Option<&Trip> {
        self.snapshot.trips.iter().find(|t| t.id == id)
    }

    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.snapshot.goals.iter().find(|g| g.id == id)
    }

    pub fn total_income(&self) -> Money {
        self.snapshot.total_income()
    }

    pub fn total_expenses(&self) -> Money {
        self.snapshot.total_expenses()
    }

    pub fn balance(&self) -> Money {
        self.snapshot.balance()
    }

    pub fn expenses_by_category(&self) -> CategoryTotals {
        self.snapshot.expenses_by_category()
    }

    // Transactions

    pub fn add_transaction(&mut self, input: NewTransaction) -> TransactionId {
        let txn = Transaction::from_new(input);
        let id = txn.id;
        self.commit("add_transaction", |s| s.transactions.push(txn));
        id
    }

    /// Merge `update` into the matching transaction; returns whether one matched
    pub fn update_transaction(&mut self, id: TransactionId, update: TransactionUpdate) -> bool {
        self.commit("update_transaction", |s| {
            match s.transactions.iter_mut().find(|t| t.id == id) {
                Some(txn) => {
                    update.apply(txn);
                    true
                }
                None => false,
            }
        })
    }

    pub fn delete_transaction(&mut self, id: TransactionId) -> bool {
        self.commit("delete_transaction", |s| {
            let before = s.transactions.len();
            s.transactions.retain(|t| t.id != id);
            s.transactions.len() != before
        })
    }

    // Trips

    pub fn add_trip(&mut self, input: NewTrip) -> TripId {
        let trip = Trip::from_new(input);
        let id = trip.id;
        self.commit("add_trip", |s| s.trips.push(trip));
        id
    }

    pub fn update_trip(&mut self, id: TripId, update: TripUpdate) -> bool {
        self.commit("update_trip", |s| match s.trips.iter_mut().find(|t| t.id == id) {
            Some(trip) => {
                update.apply(trip);
                true
            }
            None => false,
        })
    }

    /// Remove the trip only; its expenses stay in the global list
    pub fn delete_trip(&mut self, id: TripId) -> bool {
        self.commit("delete_trip", |s| {
            let before = s.trips.len();
            s.trips.retain(|t| t.id != id);
            s.trips.len() != before
        })
    }

    /// Record an expense against a trip
    ///
    /// The expense lands in the trip's list and in the global transaction list
    /// within one commit. With an unknown trip id only the global list grows.
    pub fn add_expense_to_trip(&mut self, trip_id: TripId, expense: TripExpense) -> TransactionId {
        let txn = expense.into_transaction(trip_id);
        let id = txn.id;
        self.commit("add_expense_to_trip", |s| {
            if let Some(trip) = s.trips.iter_mut().find(|t| t.id == trip_id) {
                trip.expenses.push(txn.clone());
            }
            s.transactions.push(txn);
        });
        id
    }

    // Goals

    pub fn add_goal(&mut self, input: NewGoal) -> GoalId {
        let goal = Goal::from_new(input);
        let id = goal.id;
        self.commit("add_goal", |s| s.goals.push(goal));
        id
    }

    pub fn update_goal(&mut self, id: GoalId, update: GoalUpdate) -> bool {
        self.commit("update_goal", |s| match s.goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                update.apply(goal);
                true
            }
            None => false,
        })
    }

    pub fn delete_goal(&mut self, id: GoalId) -> bool {
        self.commit("delete_goal", |s| {
            let before = s.goals.len();
            s.goals.retain(|g| g.id != id);
            s.goals.len() != before
        })
    }

    /// Contribute to a goal; the saved amount is clamped to the target
    pub fn add_to_goal(&mut self, id: GoalId, amount: Money) -> bool {
        self.commit("add_to_goal", |s| match s.goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                goal.add_amount(amount);
                true
            }
            None => false,
        })
    }

    // Budgets

    pub fn add_budget(&mut self, input: NewBudget) -> BudgetId {
        let budget = Budget::from_new(input);
        let id = budget.id;
        self.commit("add_budget", |s| s.budgets.push(budget));
        id
    }

    pub fn update_budget(&mut self, id: BudgetId, update: BudgetUpdate) -> bool {
        self.commit("update_budget", |s| {
            match s.budgets.iter_mut().find(|b| b.id == id) {
                Some(budget) => {
                    update.apply(budget);
                    true
                }
                None => false,
            }
        })
    }

    pub fn delete_budget(&mut self, id: BudgetId) -> bool {
        self.commit("delete_budget", |s| {
            let before = s.budgets.len();
            s.budgets.retain(|b| b.id != id);
            s.budgets.len() != before
        })
    }

    /// Replace every collection at once (used by import)
    pub fn replace_snapshot(&mut self, snapshot: FinanceSnapshot) {
        self.commit("replace_snapshot", |s| *s = snapshot);
    }

    /// Apply `mutate` to a private copy of the state, publish it, run hooks
    fn commit<R>(&mut self, operation: &'static str, mutate: impl FnOnce(&mut FinanceSnapshot) -> R) -> R {
        let result = mutate(Arc::make_mut(&mut self.snapshot));
        debug!(
            operation,
            transactions = self.snapshot.transactions.len(),
            budgets = self.snapshot.budgets.len(),
            trips = self.snapshot.trips.len(),
            goals = self.snapshot.goals.len(),
            "committed"
        );
        for hook in &self.hooks {
            hook.on_commit(&self.snapshot);
        }
        result
    }
}

impl Default for FinanceStore {
    fn default() -> Self {
        Self::create(FinanceSnapshot::empty())
    }
}

impl std::fmt::Debug for FinanceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceStore")
            .field("snapshot", &self.snapshot)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FinanceError, FinanceResult};
    use crate::models::TransactionType;
    use crate::storage::MemoryKeyValueStore;
    use chrono::NaiveDate;
    use std::cell::Cell;
    use std::rc::Rc;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn income(desc: &str, units: i64, category: &str) -> NewTransaction {
        NewTransaction::new(
            desc,
            Money::from_units(units),
            TransactionType::Income,
            category,
            date("2024-01-01"),
        )
    }

    fn expense(desc: &str, units: i64, category: &str) -> NewTransaction {
        NewTransaction::new(
            desc,
            Money::from_units(units),
            TransactionType::Expense,
            category,
            date("2024-01-02"),
        )
    }

    fn assert_balance_identity(store: &FinanceStore) {
        assert_eq!(store.balance(), store.total_income() - store.total_expenses());
        assert_eq!(store.expenses_by_category().total(), store.total_expenses());
    }

    #[test]
    fn test_salary_and_rent_scenario() {
        let mut store = FinanceStore::default();
        store.add_transaction(income("Salary", 5000, "Salário"));
        store.add_transaction(expense("Rent", 1500, "Moradia"));

        assert_eq!(store.total_income(), Money::from_units(5000));
        assert_eq!(store.total_expenses(), Money::from_units(1500));
        assert_eq!(store.balance(), Money::from_units(3500));

        let by_category = store.expenses_by_category();
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category.get("Moradia"), Some(Money::from_units(1500)));
    }

    #[test]
    fn test_totals_independent_of_insertion_order() {
        let inputs = vec![
            income("Salary", 5000, "Salário"),
            expense("Rent", 1500, "Moradia"),
            expense("Cinema", 40, "Lazer"),
            income("Gig", 800, "Freelance"),
            expense("Bus", 12, "Transporte"),
        ];

        let mut forward = FinanceStore::default();
        for input in inputs.iter().cloned() {
            forward.add_transaction(input);
            assert_balance_identity(&forward);
        }

        let mut backward = FinanceStore::default();
        for input in inputs.iter().rev().cloned() {
            backward.add_transaction(input);
        }

        assert_eq!(forward.total_income(), Money::from_units(5800));
        assert_eq!(forward.total_expenses(), Money::from_units(1552));
        assert_eq!(forward.total_income(), backward.total_income());
        assert_eq!(forward.total_expenses(), backward.total_expenses());
        assert_eq!(forward.balance(), backward.balance());
    }

    #[test]
    fn test_add_transaction_generates_unique_ids() {
        let mut store = FinanceStore::default();
        let a = store.add_transaction(expense("A", 1, "Outros"));
        let b = store.add_transaction(expense("A", 1, "Outros"));
        assert_ne!(a, b);
        assert_eq!(store.transactions().len(), 2);
        assert_eq!(store.transaction(a).unwrap().description, "A");
    }

    #[test]
    fn test_update_transaction_merges_fields() {
        let mut store = FinanceStore::default();
        let id = store.add_transaction(expense("Rent", 1500, "Moradia"));

        let matched = store.update_transaction(
            id,
            TransactionUpdate {
                amount: Some(Money::from_units(1600)),
                kind: Some(TransactionType::Income),
                ..Default::default()
            },
        );

        assert!(matched);
        let txn = store.transaction(id).unwrap();
        assert_eq!(txn.amount, Money::from_units(1600));
        assert_eq!(txn.description, "Rent");
        assert_eq!(store.total_income(), Money::from_units(1600));
        assert_eq!(store.total_expenses(), Money::zero());
        assert_balance_identity(&store);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = FinanceStore::default();
        store.add_transaction(expense("Rent", 1500, "Moradia"));
        let before = store.snapshot();

        let matched = store.update_transaction(
            TransactionId::new(),
            TransactionUpdate {
                description: Some("changed".into()),
                ..Default::default()
            },
        );

        assert!(!matched);
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_delete_transaction_removes_exactly_one() {
        let mut store = FinanceStore::default();
        let keep_a = store.add_transaction(income("Salary", 5000, "Salário"));
        let gone = store.add_transaction(expense("Rent", 1500, "Moradia"));
        let keep_b = store.add_transaction(expense("Bus", 12, "Transporte"));
        let before = store.snapshot();

        assert!(store.delete_transaction(gone));

        assert_eq!(store.transactions().len(), 2);
        assert!(store.transaction(gone).is_none());
        for id in [keep_a, keep_b] {
            let old = before.transactions.iter().find(|t| t.id == id).unwrap();
            assert_eq!(store.transaction(id), Some(old));
        }
        assert_balance_identity(&store);
    }

    #[test]
    fn test_delete_unknown_id_leaves_collection_identical() {
        let mut store = FinanceStore::default();
        store.add_transaction(income("Salary", 5000, "Salário"));
        store.add_transaction(expense("Rent", 1500, "Moradia"));
        let before = store.transactions().to_vec();

        assert!(!store.delete_transaction(TransactionId::new()));
        assert_eq!(store.transactions(), before.as_slice());
    }

    #[test]
    fn test_add_to_goal_clamps_at_target() {
        let mut store = FinanceStore::default();
        let id = store.add_goal(
            NewGoal::new("Car", Money::from_units(1000), date("2024-12-31"))
                .with_current(Money::from_units(900)),
        );

        assert!(store.add_to_goal(id, Money::from_units(500)));
        assert_eq!(store.goal(id).unwrap().current_amount, Money::from_units(1000));
    }

    #[test]
    fn test_add_to_goal_scenario_from_zero() {
        let mut store = FinanceStore::default();
        let id = store.add_goal(NewGoal::new("Trip", Money::from_units(2000), date("2024-12-31")));

        store.add_to_goal(id, Money::from_units(2500));
        assert_eq!(store.goal(id).unwrap().current_amount, Money::from_units(2000));
    }

    #[test]
    fn test_add_to_goal_accumulates_below_target() {
        let mut store = FinanceStore::default();
        let id = store.add_goal(NewGoal::new("Fund", Money::from_units(1000), date("2025-06-30")));

        for _ in 0..3 {
            store.add_to_goal(id, Money::from_units(200));
            assert!(store.goal(id).unwrap().current_amount <= Money::from_units(1000));
        }
        assert_eq!(store.goal(id).unwrap().current_amount, Money::from_units(600));
        assert!(!store.add_to_goal(GoalId::new(), Money::from_units(1)));
    }

    #[test]
    fn test_goal_update_and_delete() {
        let mut store = FinanceStore::default();
        let id = store.add_goal(NewGoal::new("Fund", Money::from_units(1000), date("2025-06-30")));
        store.update_goal(
            id,
            GoalUpdate {
                title: Some("Emergency fund".into()),
                ..Default::default()
            },
        );
        assert_eq!(store.goal(id).unwrap().title, "Emergency fund");
        assert!(store.delete_goal(id));
        assert!(store.goals().is_empty());
        assert!(!store.delete_goal(id));
    }

    #[test]
    fn test_add_trip_starts_with_no_expenses() {
        let mut store = FinanceStore::default();
        let id = store.add_trip(NewTrip::new(
            "Lisboa",
            Money::from_units(5000),
            date("2024-07-01"),
            date("2024-07-10"),
        ));
        assert!(store.trip(id).unwrap().expenses.is_empty());
    }

    #[test]
    fn test_trip_expense_is_written_to_both_lists() {
        let mut store = FinanceStore::default();
        let trip_id = store.add_trip(NewTrip::new(
            "Lisboa",
            Money::from_units(5000),
            date("2024-07-01"),
            date("2024-07-10"),
        ));

        let txn_id = store.add_expense_to_trip(
            trip_id,
            TripExpense::new("Hotel", Money::from_units(900), "Viagem", date("2024-07-01")),
        );

        let trip = store.trip(trip_id).unwrap();
        assert_eq!(trip.expenses.len(), 1);
        let global = store.transaction(txn_id).unwrap();
        assert_eq!(&trip.expenses[0], global);
        assert_eq!(global.kind, TransactionType::Expense);
        assert_eq!(global.trip_id, Some(trip_id));
        assert_eq!(store.total_expenses(), Money::from_units(900));
        assert_eq!(store.expenses_by_category().get("Viagem"), Some(Money::from_units(900)));
    }

    #[test]
    fn test_trip_expense_for_unknown_trip_only_hits_global_list() {
        let mut store = FinanceStore::default();
        let trip_id = TripId::new();
        let txn_id = store.add_expense_to_trip(
            trip_id,
            TripExpense::new("Taxi", Money::from_units(30), "Transporte", date("2024-07-01")),
        );
        assert!(store.trips().is_empty());
        assert_eq!(store.transaction(txn_id).unwrap().trip_id, Some(trip_id));
    }

    #[test]
    fn test_deleting_trip_keeps_duplicated_transactions() {
        let mut store = FinanceStore::default();
        let trip_id = store.add_trip(NewTrip::new(
            "Lisboa",
            Money::from_units(5000),
            date("2024-07-01"),
            date("2024-07-10"),
        ));
        let txn_id = store.add_expense_to_trip(
            trip_id,
            TripExpense::new("Hotel", Money::from_units(900), "Viagem", date("2024-07-01")),
        );

        assert!(store.delete_trip(trip_id));
        assert!(store.trips().is_empty());
        assert!(store.transaction(txn_id).is_some());
    }

    #[test]
    fn test_deleting_trip_transaction_keeps_trip_copy() {
        let mut store = FinanceStore::default();
        let trip_id = store.add_trip(NewTrip::new(
            "Lisboa",
            Money::from_units(5000),
            date("2024-07-01"),
            date("2024-07-10"),
        ));
        let txn_id = store.add_expense_to_trip(
            trip_id,
            TripExpense::new("Hotel", Money::from_units(900), "Viagem", date("2024-07-01")),
        );

        store.delete_transaction(txn_id);
        assert_eq!(store.trip(trip_id).unwrap().expenses.len(), 1);
        assert_eq!(store.total_expenses(), Money::zero());
    }

    #[test]
    fn test_update_trip() {
        let mut store = FinanceStore::default();
        let id = store.add_trip(NewTrip::new(
            "Lisboa",
            Money::from_units(5000),
            date("2024-07-01"),
            date("2024-07-10"),
        ));
        assert!(store.update_trip(
            id,
            TripUpdate {
                budget: Some(Money::from_units(6000)),
                ..Default::default()
            }
        ));
        assert_eq!(store.trip(id).unwrap().budget, Money::from_units(6000));
        assert!(!store.update_trip(TripId::new(), TripUpdate::default()));
    }

    #[test]
    fn test_budget_crud() {
        let mut store = FinanceStore::default();
        let id = store.add_budget(NewBudget::new("Lazer", Money::from_units(300)));
        assert_eq!(store.budgets().len(), 1);

        store.update_budget(
            id,
            BudgetUpdate {
                limit: Some(Money::from_units(350)),
                ..Default::default()
            },
        );
        assert_eq!(store.budget(id).unwrap().limit, Money::from_units(350));

        // Spending does not move the stored current amount
        store.add_transaction(expense("Show", 100, "Lazer"));
        assert_eq!(store.budget(id).unwrap().current_amount, Money::zero());

        assert!(store.delete_budget(id));
        assert!(store.budgets().is_empty());
    }

    #[test]
    fn test_store_does_not_validate() {
        let mut store = FinanceStore::default();
        let mut input = expense("", 0, "");
        input.amount = Money::from_cents(-500);
        store.add_transaction(input);
        assert_eq!(store.transactions().len(), 1);
        assert_balance_identity(&store);
    }

    #[test]
    fn test_snapshots_are_copy_on_write() {
        let mut store = FinanceStore::default();
        store.add_transaction(income("Salary", 5000, "Salário"));
        let old = store.snapshot();

        store.add_transaction(expense("Rent", 1500, "Moradia"));

        assert_eq!(old.transactions.len(), 1);
        assert_eq!(store.transactions().len(), 2);
        assert_eq!(old.total_expenses(), Money::zero());
    }

    #[test]
    fn test_hooks_run_after_every_mutation() {
        let commits = Rc::new(Cell::new(0));
        let last_len = Rc::new(Cell::new(0));
        let mut store = FinanceStore::default();
        {
            let commits = Rc::clone(&commits);
            let last_len = Rc::clone(&last_len);
            store.add_hook(FnHook(move |s: &FinanceSnapshot| {
                commits.set(commits.get() + 1);
                last_len.set(s.transactions.len());
            }));
        }

        let id = store.add_transaction(income("Salary", 5000, "Salário"));
        assert_eq!(last_len.get(), 1);
        store.delete_transaction(TransactionId::new());
        store.delete_transaction(id);
        assert_eq!(last_len.get(), 0);
        assert_eq!(commits.get(), 3);
    }

    #[test]
    fn test_open_persists_and_reloads() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let mut store = FinanceStore::open(SnapshotSlot::with_default_key(Arc::clone(&kv)));
        assert!(store.snapshot().is_empty());

        store.add_transaction(income("Salary", 5000, "Salário"));
        let goal = store.add_goal(NewGoal::new("Car", Money::from_units(1000), date("2024-12-31")));
        store.add_to_goal(goal, Money::from_units(250));
        store.add_budget(NewBudget::new("Lazer", Money::from_units(300)));
        let trip = store.add_trip(NewTrip::new(
            "Lisboa",
            Money::from_units(5000),
            date("2024-07-01"),
            date("2024-07-10"),
        ));
        store.add_expense_to_trip(
            trip,
            TripExpense::new("Hotel", Money::from_units(900), "Viagem", date("2024-07-01")),
        );
        let persisted = store.dispose();

        let reopened = FinanceStore::open(SnapshotSlot::with_default_key(kv));
        assert_eq!(*reopened.snapshot(), persisted);
        assert_eq!(reopened.balance(), Money::from_units(4100));
    }

    #[test]
    fn test_open_with_corrupt_slot_starts_empty() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        kv.set("financemaster_data", "[1, 2, 3]").unwrap();
        let store = FinanceStore::open(SnapshotSlot::with_default_key(kv));
        assert!(store.snapshot().is_empty());
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> FinanceResult<Option<String>> {
            Err(FinanceError::Storage("disk unavailable".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> FinanceResult<()> {
            Err(FinanceError::Storage("disk full".into()))
        }

        fn remove(&self, _key: &str) -> FinanceResult<bool> {
            Ok(false)
        }
    }

    #[test]
    fn test_persistence_failure_does_not_block_mutation() {
        let mut store = FinanceStore::open(SnapshotSlot::with_default_key(BrokenStore));
        assert!(store.snapshot().is_empty());

        store.add_transaction(income("Salary", 5000, "Salário"));
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.total_income(), Money::from_units(5000));
    }

    #[test]
    fn test_replace_snapshot() {
        let mut source = FinanceStore::default();
        source.add_transaction(income("Salary", 5000, "Salário"));
        let imported = source.dispose();

        let mut store = FinanceStore::default();
        store.add_transaction(expense("Rent", 1500, "Moradia"));
        store.replace_snapshot(imported.clone());
        assert_eq!(*store.snapshot(), imported);
    }

    #[test]
    fn test_dispose_returns_final_state_even_when_shared() {
        let mut store = FinanceStore::default();
        store.add_transaction(income("Salary", 5000, "Salário"));
        let shared = store.snapshot();
        let final_state = store.dispose();
        assert_eq!(final_state, *shared);
    }
}
