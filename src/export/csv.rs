//! CSV export

use std::io::Write;

use ::csv::Writer;

use crate::error::LedgerResult;
use crate::models::{Entry, Money, SavingsGoal};

const ENTRY_HEADER: [&str; 10] = [
    "ID",
    "Date",
    "Timestamp",
    "Description",
    "Category",
    "Amount",
    "User",
    "Payment Method",
    "Recurring",
    "Notes",
];

/// Write `entries` in the order given, with a header row
pub fn export_entries_csv<W: Write>(entries: &[Entry], writer: W) -> LedgerResult<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(ENTRY_HEADER)?;

    for entry in entries {
        csv.write_record([
            entry.id.as_uuid().to_string(),
            entry.date.clone(),
            entry.timestamp.to_string(),
            entry.description.clone(),
            entry.category.label().to_string(),
            decimal(entry.amount),
            entry.user.tag().to_string(),
            entry
                .payment_method
                .as_ref()
                .map(|m| m.label().to_string())
                .unwrap_or_default(),
            entry.is_recurring.unwrap_or(false).to_string(),
            entry.notes.clone().unwrap_or_default(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write savings goals with their progress
pub fn export_goals_csv<W: Write>(goals: &[SavingsGoal], writer: W) -> LedgerResult<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record([
        "ID", "Name", "Current", "Target", "Progress", "Deadline", "Priority", "Category",
    ])?;

    for goal in goals {
        csv.write_record([
            goal.id.as_uuid().to_string(),
            goal.name.clone(),
            decimal(goal.current),
            decimal(goal.target),
            format!("{:.1}", goal.progress_percent()),
            goal.deadline.map(|d| d.to_string()).unwrap_or_default(),
            goal.priority.to_string(),
            goal.category.label().to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Plain decimal without currency symbol, e.g. `-125.50`
fn decimal(amount: Money) -> String {
    amount.format_with_symbol("")
}
