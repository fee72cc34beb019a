//! FinanceMaster - personal finance tracking
//!
//! This library holds a single in-memory financial snapshot (transactions,
//! category budgets, trips and savings goals), applies mutations to it
//! copy-on-write, derives aggregate figures on demand, and persists the whole
//! snapshot to a key-value slot after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (transactions, budgets, trips, goals, money)
//! - `storage`: Key-value persistence of the snapshot
//! - `store`: The finance store, its commit hooks and scoped context
//! - `services`: Read-side views (filters, progress, dashboard)
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV export plus import
//! - `cli`: Command handlers for the `financemaster` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use financemaster::models::{Money, NewTransaction, TransactionType};
//! use financemaster::store::FinanceStore;
//!
//! let mut store = FinanceStore::default();
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! store.add_transaction(NewTransaction::new(
//!     "Salary", Money::from_units(5000), TransactionType::Income, "Salário", day,
//! ));
//! store.add_transaction(NewTransaction::new(
//!     "Rent", Money::from_units(1500), TransactionType::Expense, "Moradia", day,
//! ));
//! assert_eq!(store.balance(), Money::from_units(3500));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;

pub use error::{FinanceError, FinanceResult};
pub use store::{FinanceContext, FinanceStore};
