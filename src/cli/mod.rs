//! CLI command handlers
//!
//! Bridges clap argument parsing with the [`Ledger`] facade. User-facing
//! input checks (positive amounts, non-empty descriptions, categories on
//! expenses) happen here, before anything reaches the ledger.

pub mod accounts;
pub mod budget;
pub mod entry;
pub mod export;
pub mod goal;
pub mod history;
pub mod recurring;
pub mod report;

pub use accounts::{handle_accounts_command, AccountsCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use entry::{handle_entry_command, EntryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use history::handle_history;
pub use recurring::{handle_recurring_command, RecurringCommands};
pub use report::handle_summary;

use crate::audit::AuditLogger;
use crate::config::{LedgerPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{Money, RecordId};
use crate::storage::{open_file_store, JsonFileStore};

/// The ledger as the binary uses it: JSON files on the system clock
pub type FileLedger = Ledger<JsonFileStore>;

/// Open and hydrate the ledger under `paths`, auditing if enabled
pub fn open_ledger(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<FileLedger> {
    let store = open_file_store(paths)?;
    let ledger = Ledger::open(store, settings.clone());

    Ok(if settings.audit_enabled {
        ledger.with_audit(AuditLogger::new(paths.audit_log()))
    } else {
        ledger
    })
}

/// Parse an amount the user typed as a positive magnitude
pub(crate) fn parse_positive_amount(input: &str) -> LedgerResult<Money> {
    let amount = Money::parse(input).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount '{}'. Use a format like '125.50'. Error: {}",
            input, e
        ))
    })?;

    if !amount.is_positive() {
        return Err(LedgerError::Validation(format!(
            "Amount must be greater than zero, got '{}'",
            input
        )));
    }
    Ok(amount)
}

/// Resolve user input against known ids
///
/// Accepts a full uuid, the short display form (`ent-1a2b3c4d`) or any
/// unambiguous uuid prefix, with or without the display prefix.
pub(crate) fn resolve_id<T: RecordId>(
    input: &str,
    entity_type: &'static str,
    candidates: impl IntoIterator<Item = T>,
) -> LedgerResult<T> {
    let needle = input.trim();
    let needle = needle.strip_prefix(T::PREFIX).unwrap_or(needle).to_lowercase();
    let not_found = || LedgerError::NotFound {
        entity_type,
        identifier: input.to_string(),
    };

    if needle.is_empty() {
        return Err(not_found());
    }

    let matches: Vec<T> = candidates
        .into_iter()
        .filter(|id| id.uuid().to_string().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [] => Err(not_found()),
        [id] => Ok(*id),
        many => Err(LedgerError::Validation(format!(
            "'{}' matches {} records; use more characters",
            input,
            many.len()
        ))),
    }
}
