//! Scoped access to the finance store
//!
//! Consumers reach the store through a [`FinanceContext`]. Using the context
//! before a store is provided, or after it is disposed, is an error rather
//! than a silent empty store.

use tracing::debug;

use super::FinanceStore;
use crate::error::{FinanceError, FinanceResult};
use crate::models::FinanceSnapshot;

/// Holder for the store for the lifetime of the application session
#[derive(Debug, Default)]
pub struct FinanceContext {
    store: Option<FinanceStore>,
}

impl FinanceContext {
    /// A context with no store yet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: FinanceStore) -> Self {
        Self { store: Some(store) }
    }

    /// Install `store`, returning the previously provided one if any
    pub fn provide(&mut self, store: FinanceStore) -> Option<FinanceStore> {
        debug!("finance store provided");
        self.store.replace(store)
    }

    pub fn store(&self) -> FinanceResult<&FinanceStore> {
        self.store.as_ref().ok_or(FinanceError::MissingContext)
    }

    pub fn store_mut(&mut self) -> FinanceResult<&mut FinanceStore> {
        self.store.as_mut().ok_or(FinanceError::MissingContext)
    }

    /// Dispose the provided store and return its final state
    pub fn dispose(&mut self) -> FinanceResult<FinanceSnapshot> {
        self.store
            .take()
            .map(FinanceStore::dispose)
            .ok_or(FinanceError::MissingContext)
    }

    pub fn is_initialized(&self) -> bool {
        self.store.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewBudget};

    #[test]
    fn test_access_without_store_fails() {
        let mut ctx = FinanceContext::new();
        assert!(!ctx.is_initialized());
        assert!(matches!(ctx.store(), Err(FinanceError::MissingContext)));
        assert!(matches!(ctx.store_mut(), Err(FinanceError::MissingContext)));
        assert!(matches!(ctx.dispose(), Err(FinanceError::MissingContext)));
    }

    #[test]
    fn test_provided_store_is_reachable() {
        let mut ctx = FinanceContext::new();
        assert!(ctx.provide(FinanceStore::default()).is_none());

        ctx.store_mut()
            .unwrap()
            .add_budget(NewBudget::new("Lazer", Money::from_units(300)));
        assert_eq!(ctx.store().unwrap().budgets().len(), 1);
    }

    #[test]
    fn test_access_after_dispose_fails() {
        let mut store = FinanceStore::default();
        store.add_budget(NewBudget::new("Lazer", Money::from_units(300)));
        let mut ctx = FinanceContext::with_store(store);

        let final_state = ctx.dispose().unwrap();
        assert_eq!(final_state.budgets.len(), 1);
        assert!(ctx.store().is_err());
    }
}
