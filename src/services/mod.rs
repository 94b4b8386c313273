//! Service layer for the ledger
//!
//! The pieces the [`Ledger`](crate::ledger::Ledger) facade composes: the
//! entry store, the aggregation engine, the goal/budget manager and the
//! recurring scheduler.

pub mod aggregation;
pub mod entries;
pub mod planning;
pub mod recurring;

pub use aggregation::Aggregates;
pub use entries::EntryStore;
pub use planning::{BudgetUpsert, PlanningManager};
pub use recurring::DueOccurrence;
