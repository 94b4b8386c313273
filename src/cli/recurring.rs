//! Recurring transaction CLI commands

use clap::Subcommand;

use crate::clock::Clock;
use crate::display::{format_entry_table, format_recurring_table};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{Category, Frequency, Participant, RecurringDraft, RecurringId};
use crate::storage::DocumentStore;

use super::goal::parse_date;
use super::{parse_positive_amount, resolve_id};

#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Create a recurring template
    Add {
        description: String,
        /// Amount as a positive number
        amount: String,
        /// daily, weekly, monthly or yearly
        #[arg(short, long, default_value = "monthly")]
        frequency: Frequency,
        /// First occurrence (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,
        #[arg(short, long, default_value = "Otros")]
        category: Category,
        #[arg(short, long, env = "PAREJA_USER", default_value = "K")]
        user: Participant,
        /// Record as income instead of an expense
        #[arg(long)]
        income: bool,
    },
    /// List templates
    List,
    /// Record every occurrence that has come due
    Post,
    /// Stop posting a template
    Pause { id: String },
    /// Resume a paused template
    Resume { id: String },
    /// Delete a template
    Delete { id: String },
}

pub fn handle_recurring_command<S: DocumentStore, C: Clock>(
    ledger: &mut Ledger<S, C>,
    cmd: RecurringCommands,
) -> LedgerResult<()> {
    match cmd {
        RecurringCommands::Add {
            description,
            amount,
            frequency,
            start,
            category,
            user,
            income,
        } => {
            if description.trim().is_empty() {
                return Err(LedgerError::Validation("Description is required".into()));
            }
            let amount = parse_positive_amount(&amount)?;

            let template = ledger.add_recurring_transaction(RecurringDraft {
                description,
                amount: if income { amount } else { -amount },
                category: if income { Category::Ingreso } else { category },
                frequency,
                next_date: parse_date(&start)?,
                user,
                is_active: true,
            })?;
            println!(
                "Creada {} {} ({}), próxima el {}",
                template.frequency, template.description, template.id, template.next_date
            );
        }

        RecurringCommands::List => {
            println!(
                "{}",
                format_recurring_table(
                    &ledger.financial_data().recurring_transactions,
                    ledger.settings()
                )
            );
        }

        RecurringCommands::Post => {
            let posted = ledger.post_due_recurring()?;
            if posted.is_empty() {
                println!("Nada pendiente.");
            } else {
                println!("{}", format_entry_table(&posted, ledger.settings()));
                println!("Registrados {} movimientos", posted.len());
            }
        }

        RecurringCommands::Pause { id } => {
            let id = resolve_recurring(ledger, &id)?;
            ledger.set_recurring_active(id, false)?;
            println!("Pausada {}", id);
        }

        RecurringCommands::Resume { id } => {
            let id = resolve_recurring(ledger, &id)?;
            ledger.set_recurring_active(id, true)?;
            println!("Reanudada {}", id);
        }

        RecurringCommands::Delete { id } => {
            let id = resolve_recurring(ledger, &id)?;
            ledger.delete_recurring(id)?;
            println!("Eliminada {}", id);
        }
    }

    Ok(())
}

fn resolve_recurring<S: DocumentStore, C: Clock>(
    ledger: &Ledger<S, C>,
    input: &str,
) -> LedgerResult<RecurringId> {
    resolve_id(
        input,
        "Recurring transaction",
        ledger
            .financial_data()
            .recurring_transactions
            .iter()
            .map(|r| r.id),
    )
}
