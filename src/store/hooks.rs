//! Commit hooks: side effects run synchronously after every mutation

use crate::models::FinanceSnapshot;

/// Called with the new snapshot after each store mutation
///
/// Hooks cannot fail the mutation; an implementation that can fail must
/// handle (log) its own errors.
pub trait CommitHook {
    fn on_commit(&self, snapshot: &FinanceSnapshot);
}

/// Adapts a closure into a [`CommitHook`]
pub struct FnHook<F>(pub F);

impl<F> CommitHook for FnHook<F>
where
    F: Fn(&FinanceSnapshot),
{
    fn on_commit(&self, snapshot: &FinanceSnapshot) {
        (self.0)(snapshot)
    }
}
