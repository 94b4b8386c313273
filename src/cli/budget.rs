//! Budget CLI commands

use clap::Subcommand;

use crate::clock::Clock;
use crate::display::format_budget_table;
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::Category;
use crate::reports::BudgetProgress;
use crate::storage::DocumentStore;

use super::parse_positive_amount;

#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set this month's limit for a category
    Set {
        category: Category,
        /// Monthly limit
        limit: String,
    },
    /// Show this month's budgets against actual spending
    List,
}

pub fn handle_budget_command<S: DocumentStore, C: Clock>(
    ledger: &mut Ledger<S, C>,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    match cmd {
        BudgetCommands::Set { category, limit } => {
            let limit = parse_positive_amount(&limit)?;
            let budget = ledger.upsert_budget(category, limit)?;
            println!(
                "Presupuesto de {} para {}: {}",
                budget.category.label(),
                budget.period(),
                ledger.settings().format_money(budget.limit)
            );
        }

        BudgetCommands::List => {
            let progress = BudgetProgress::generate(ledger);
            println!("{}", format_budget_table(&progress, ledger.settings()));

            let over: Vec<_> = progress
                .over_budget()
                .map(|line| line.category.label().to_string())
                .collect();
            if !over.is_empty() {
                println!("Excedidos: {}", over.join(", "));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::Settings;
    use crate::storage::MemoryStore;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_set_twice_keeps_one_budget() {
        let store = MemoryStore::new();
        let clock = FixedClock(Local.with_ymd_and_hms(2025, 10, 12, 10, 30, 0).unwrap());
        let mut ledger = Ledger::with_clock(&store, Settings::default(), clock);
        ledger.hydrate();

        for limit in ["650", "700"] {
            handle_budget_command(
                &mut ledger,
                BudgetCommands::Set {
                    category: Category::Hogar,
                    limit: limit.into(),
                },
            )
            .unwrap();
        }

        let budgets = &ledger.financial_data().budgets;
        assert_eq!(budgets.len(), 4);
        assert_eq!(budgets[3].category, Category::Hogar);
        assert_eq!(budgets[3].limit.cents(), 70000);
    }
}
