//! Monthly Summary
//!
//! Income, expenses and the category and participant breakdown for the
//! ledger's current month.

use crate::clock::Clock;
use crate::config::Settings;
use crate::ledger::Ledger;
use crate::models::{Category, Money, MonthKey, Participant};
use crate::services::aggregation;
use crate::storage::DocumentStore;

/// One category line of the summary
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    /// Absolute amount spent
    pub total: Money,
    /// Share of the month's expenses
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub income: Money,
    pub expenses: Money,
    pub net: Money,
    pub balance: Money,
    /// Largest category first
    pub categories: Vec<CategoryTotal>,
    pub by_participant: Vec<(Participant, Money)>,
    pub entry_count: usize,
}

impl MonthlySummary {
    /// Totals are recomputed from the entries, not read from the stored document
    pub fn generate<S: DocumentStore, C: Clock>(ledger: &Ledger<S, C>) -> Self {
        let month = ledger.current_month();
        let totals = aggregation::compute(
            ledger.settings().initial_balance,
            ledger.entries(),
            month,
        );

        let mut categories: Vec<CategoryTotal> = ledger
            .monthly_by_category()
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                percentage: total.percent_of(totals.monthly_expenses).unwrap_or(0.0),
                category,
                total,
            })
            .collect();
        // Stable, so equal totals stay in category order
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        let by_participant = ledger.monthly_by_participant();

        Self {
            month,
            income: totals.monthly_income,
            expenses: totals.monthly_expenses,
            net: totals.monthly_net(),
            balance: totals.balance,
            categories,
            by_participant: Participant::ALL
                .iter()
                .map(|p| (*p, by_participant.get(p).copied().unwrap_or_default()))
                .collect(),
            entry_count: ledger
                .entries()
                .iter()
                .filter(|e| e.falls_in(month))
                .count(),
        }
    }

    pub fn format_terminal(&self, settings: &Settings) -> String {
        let money = |m: Money| settings.format_money(m);
        let mut output = String::new();

        output.push_str(&format!("Resumen {}\n", self.month));
        output.push_str(&"=".repeat(48));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>14}\n", "Balance", money(self.balance)));
        output.push_str(&format!("{:<20} {:>14}\n", "Ingresos", money(self.income)));
        output.push_str(&format!("{:<20} {:>14}\n", "Gastos", money(self.expenses)));
        output.push_str(&format!("{:<20} {:>14}\n", "Neto", money(self.net)));
        output.push_str(&format!("{:<20} {:>14}\n", "Movimientos", self.entry_count));

        if !self.categories.is_empty() {
            output.push_str("\nPor categoría\n");
            output.push_str(&"-".repeat(48));
            output.push('\n');
            for line in &self.categories {
                output.push_str(&format!(
                    "{:<20} {:>14} {:>8.1}%\n",
                    line.category.label(),
                    money(line.total),
                    line.percentage
                ));
            }
        }

        output.push_str("\nPor persona\n");
        output.push_str(&"-".repeat(48));
        output.push('\n');
        for (participant, total) in &self.by_participant {
            output.push_str(&format!(
                "{:<20} {:>14}\n",
                settings.participants.name_of(*participant),
                money(*total)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::EntryDraft;
    use crate::storage::MemoryStore;
    use chrono::{Local, TimeZone};

    fn ledger(store: &MemoryStore) -> Ledger<&MemoryStore, FixedClock> {
        let clock = FixedClock(Local.with_ymd_and_hms(2025, 10, 20, 10, 0, 0).unwrap());
        let mut ledger = Ledger::with_clock(store, Settings::default(), clock);
        ledger.hydrate();
        ledger
    }

    fn add(ledger: &mut Ledger<&MemoryStore, FixedClock>, cents: i64, category: Category, user: Participant) {
        ledger
            .add(EntryDraft::new("x", Money::from_cents(cents), category, "", user))
            .unwrap();
    }

    #[test]
    fn test_summary_orders_categories_by_total() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);
        add(&mut ledger, -2000, Category::Transporte, Participant::K);
        add(&mut ledger, -6000, Category::Comida, Participant::C);
        add(&mut ledger, 150000, Category::Ingreso, Participant::C);

        let summary = MonthlySummary::generate(&ledger);

        assert_eq!(summary.month, MonthKey { year: 2025, month0: 9 });
        assert_eq!(summary.income.cents(), 150000);
        assert_eq!(summary.expenses.cents(), 8000);
        assert_eq!(summary.net.cents(), 142000);
        assert_eq!(summary.entry_count, 3);
        assert_eq!(summary.categories[0].category, Category::Comida);
        assert_eq!(summary.categories[0].percentage, 75.0);
        assert_eq!(summary.categories[1].category, Category::Transporte);
        assert_eq!(
            summary.by_participant,
            vec![
                (Participant::K, Money::from_cents(2000)),
                (Participant::C, Money::from_cents(6000))
            ]
        );
    }

    #[test]
    fn test_empty_month() {
        let store = MemoryStore::new();
        let summary = MonthlySummary::generate(&ledger(&store));

        assert!(summary.categories.is_empty());
        assert!(summary.net.is_zero());
        assert_eq!(summary.balance.cents(), 524050);

        let text = summary.format_terminal(&Settings::default());
        assert!(text.contains("Resumen 2025-10"));
        assert!(text.contains("Kely"));
        assert!(!text.contains("Por categoría"));
    }
}
