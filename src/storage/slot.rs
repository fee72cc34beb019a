//! The persistence slot: one named key holding the whole snapshot as JSON

use tracing::{debug, error, info, warn};

use crate::error::{FinanceError, FinanceResult};
use crate::models::FinanceSnapshot;
use crate::store::CommitHook;

use super::kv::KeyValueStore;

/// Default key the snapshot is stored under
pub const DEFAULT_STORAGE_KEY: &str = "financemaster_data";

/// Reads and writes a [`FinanceSnapshot`] under a single key
#[derive(Debug)]
pub struct SnapshotSlot<K> {
    kv: K,
    key: String,
}

impl<K: KeyValueStore> SnapshotSlot<K> {
    pub fn new(kv: K, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    /// Slot under [`DEFAULT_STORAGE_KEY`]
    pub fn with_default_key(kv: K) -> Self {
        Self::new(kv, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &K {
        &self.kv
    }

    /// Read the persisted snapshot, surfacing every failure
    ///
    /// `Ok(None)` means nothing is stored yet.
    pub fn try_load(&self) -> FinanceResult<Option<FinanceSnapshot>> {
        let Some(raw) = self.kv.get(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| {
            FinanceError::Storage(format!("Failed to parse slot '{}': {}", self.key, e))
        })
    }

    /// Read the persisted snapshot, falling back to the empty snapshot
    ///
    /// A missing or unparsable slot is logged, never returned as an error.
    pub fn load(&self) -> FinanceSnapshot {
        match self.try_load() {
            Ok(Some(snapshot)) => {
                debug!(
                    key = %self.key,
                    transactions = snapshot.transactions.len(),
                    budgets = snapshot.budgets.len(),
                    trips = snapshot.trips.len(),
                    goals = snapshot.goals.len(),
                    "loaded snapshot"
                );
                snapshot
            }
            Ok(None) => {
                info!(key = %self.key, "no saved data, starting with an empty snapshot");
                FinanceSnapshot::empty()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to load saved data, starting with an empty snapshot");
                FinanceSnapshot::empty()
            }
        }
    }

    /// Serialize and write the whole snapshot
    pub fn save(&self, snapshot: &FinanceSnapshot) -> FinanceResult<()> {
        let json = serde_json::to_string(snapshot)
            .map_err(|e| FinanceError::Storage(format!("Failed to serialize snapshot: {}", e)))?;
        self.kv.set(&self.key, &json)
    }

    /// Drop whatever is stored under the key
    pub fn clear(&self) -> FinanceResult<bool> {
        self.kv.remove(&self.key)
    }
}

impl<K: KeyValueStore> CommitHook for SnapshotSlot<K> {
    fn on_commit(&self, snapshot: &FinanceSnapshot) {
        if let Err(e) = self.save(snapshot) {
            error!(key = %self.key, error = %e, "failed to persist snapshot");
        }
    }
}
