//! Summary command

use crate::clock::Clock;
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::reports::{BudgetProgress, GoalProgress, MonthlySummary};
use crate::storage::DocumentStore;

/// Print the month summary, budget progress and goal progress
pub fn handle_summary<S: DocumentStore, C: Clock>(ledger: &Ledger<S, C>) -> LedgerResult<()> {
    let settings = ledger.settings();

    print!("{}", MonthlySummary::generate(ledger).format_terminal(settings));
    println!();
    print!("{}", BudgetProgress::generate(ledger).format_terminal(settings));
    println!();
    print!(
        "{}",
        GoalProgress::generate(&ledger.financial_data().savings_goals).format_terminal(settings)
    );

    Ok(())
}
