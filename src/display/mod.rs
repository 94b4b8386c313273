//! Display formatting for terminal output
//!
//! Table and detail views for entries, goals, budgets, recurring templates
//! and sub-accounts. Amounts are rendered with the configured currency symbol.

pub mod entry;
pub mod planning;

pub use entry::{format_entry_details, format_entry_table};
pub use planning::{format_accounts, format_budget_table, format_goal_table, format_recurring_table};

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

/// Render rows with the shared table style, right-aligning `amount_columns`
pub(crate) fn render_table<T: Tabled>(rows: Vec<T>, amount_columns: &[usize]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::psql());
    for &column in amount_columns {
        table.modify(Columns::new(column..column + 1), Alignment::right());
    }
    table.to_string()
}

/// Cut `text` to `max` characters, marking the cut with "..."
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
