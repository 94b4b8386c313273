//! Pareja - shared expense ledger for two
//!
//! The ledger state engine behind a couple's household finances: a list of
//! signed income and expense entries, savings goals, monthly category
//! budgets, recurring templates and sub-account balances. Every mutation
//! recomputes the balance and the current month's totals from the full entry
//! list and persists both documents before returning.
//!
//! # Architecture
//!
//! - `models`: entries, goals, budgets, recurring templates, money
//! - `services`: entry store, aggregation, goal/budget manager, scheduler
//! - `storage`: document stores (JSON files or in-memory)
//! - `ledger`: the facade every front-end calls
//! - `reports`, `export`, `display`, `cli`: read-only views and the binary
//! - `audit`, `config`, `error`: ambient concerns
//!
//! # Example
//!
//! ```rust,ignore
//! use pareja_ledger::config::Settings;
//! use pareja_ledger::models::{Money, Participant};
//! use pareja_ledger::storage::MemoryStore;
//! use pareja_ledger::Ledger;
//!
//! let mut ledger = Ledger::open(MemoryStore::new(), Settings::default());
//! ledger.add_income(Money::from_cents(300000), "Sueldo", Participant::K)?;
//! ```

pub mod audit;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use ledger::{Ledger, LedgerSnapshot};
