//! Core data models for the ledger
//!
//! This module contains the data structures of the shared household ledger:
//! entries, savings goals, budgets, recurring templates, sub-accounts and the
//! aggregate document.

pub mod account;
pub mod budget;
pub mod category;
pub mod entry;
pub mod financial_data;
pub mod goal;
pub mod ids;
pub mod money;
pub mod recurring;

pub use account::{Accounts, AccountsPatch};
pub use budget::Budget;
pub use category::{Category, PaymentMethod};
pub use entry::{Entry, EntryDraft, EntryValidationError, MonthKey, Participant};
pub use financial_data::{FinancialData, DEFAULT_INITIAL_BALANCE};
pub use goal::{GoalDraft, GoalPatch, GoalValidationError, Priority, SavingsGoal};
pub use ids::{BudgetId, EntryId, GoalId, RecordId, RecurringId};
pub use money::Money;
pub use recurring::{Frequency, RecurringDraft, RecurringTransaction};
