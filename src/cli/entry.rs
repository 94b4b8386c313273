//! Entry CLI commands
//!
//! Adding, editing, deleting and listing income and expense entries.

use clap::Subcommand;

use crate::clock::Clock;
use crate::display::{format_entry_details, format_entry_table};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{Category, EntryDraft, EntryId, MonthKey, Participant, PaymentMethod};
use crate::storage::DocumentStore;

use super::{parse_positive_amount, resolve_id};

/// Entry subcommands (exposed at the top level of the binary)
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Record an expense
    Add {
        /// What the money went to
        description: String,
        /// Amount spent, as a positive number (e.g. "125.50")
        amount: String,
        /// Category (Comida, Transporte, Entretenimiento, Hogar, Salud, ...)
        #[arg(short, long)]
        category: Option<Category>,
        /// Who paid (K or C)
        #[arg(short, long, env = "PAREJA_USER", default_value = "K")]
        user: Participant,
        /// Display date, defaults to now
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text notes
        #[arg(short, long)]
        notes: Option<String>,
        /// Payment method (cash, card, transfer, yape, plin)
        #[arg(short, long)]
        method: Option<PaymentMethod>,
    },
    /// Record income
    Income {
        description: String,
        /// Amount received, as a positive number
        amount: String,
        /// Who received it (K or C)
        #[arg(short, long, env = "PAREJA_USER", default_value = "K")]
        user: Participant,
    },
    /// Edit an entry
    Edit {
        /// Entry ID (full, short or unique prefix)
        id: String,
        #[arg(long)]
        description: Option<String>,
        /// New amount as a positive number; the entry keeps its sign
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<Category>,
        #[arg(short, long)]
        user: Option<Participant>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
        #[arg(short, long)]
        method: Option<PaymentMethod>,
    },
    /// Delete an entry
    Delete {
        /// Entry ID (full, short or unique prefix)
        id: String,
    },
    /// Show the most recent entries
    Recent {
        /// How many, defaults to the configured count
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// List entries
    List {
        /// Only this month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
        #[arg(short, long)]
        category: Option<Category>,
        #[arg(short, long)]
        user: Option<Participant>,
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },
    /// Show entry details
    Show {
        id: String,
    },
}

/// Handle an entry command
pub fn handle_entry_command<S: DocumentStore, C: Clock>(
    ledger: &mut Ledger<S, C>,
    cmd: EntryCommands,
) -> LedgerResult<()> {
    match cmd {
        EntryCommands::Add {
            description,
            amount,
            category,
            user,
            date,
            notes,
            method,
        } => {
            let amount = parse_positive_amount(&amount)?;
            let date = date.unwrap_or_else(|| ledger.display_date_now());
            let category = category.unwrap_or_else(|| Category::Other(String::new()));

            let mut draft = EntryDraft::new(description, -amount, category, date, user);
            draft.notes = notes;
            draft.payment_method = method;
            check(&draft)?;

            let entry = ledger.add(draft)?;
            println!("Registrado {}", entry);
        }

        EntryCommands::Income {
            description,
            amount,
            user,
        } => {
            let amount = parse_positive_amount(&amount)?;
            if description.trim().is_empty() {
                return Err(LedgerError::Validation("Description is required".into()));
            }

            let entry = ledger.add_income(amount, description, user)?;
            println!("Registrado {}", entry);
        }

        EntryCommands::Edit {
            id,
            description,
            amount,
            category,
            user,
            date,
            notes,
            method,
        } => {
            let id = resolve_entry(ledger, &id)?;
            let current = ledger
                .entries()
                .iter()
                .find(|e| e.id == id)
                .ok_or_else(|| LedgerError::entry_not_found(id.to_string()))?;

            let mut draft = current.to_draft();
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(amount) = amount {
                let magnitude = parse_positive_amount(&amount)?;
                draft.amount = if current.is_income() {
                    magnitude
                } else {
                    -magnitude
                };
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(user) = user {
                draft.user = user;
            }
            if let Some(date) = date {
                draft.date = date;
            }
            if let Some(notes) = notes {
                draft.notes = Some(notes).filter(|n| !n.is_empty());
            }
            if let Some(method) = method {
                draft.payment_method = Some(method);
            }
            check(&draft)?;

            ledger.update(id, draft)?;
            println!("Actualizado {}", id);
        }

        EntryCommands::Delete { id } => {
            let id = resolve_entry(ledger, &id)?;
            ledger.delete(id)?;
            println!("Eliminado {}", id);
        }

        EntryCommands::Recent { count } => {
            let entries = ledger.recent(count);
            println!("{}", format_entry_table(&entries, ledger.settings()));
        }

        EntryCommands::List {
            month,
            category,
            user,
            limit,
        } => {
            let month = month.as_deref().map(parse_month).transpose()?;
            let entries: Vec<_> = ledger
                .entries()
                .iter()
                .filter(|e| month.map_or(true, |m| e.falls_in(m)))
                .filter(|e| category.as_ref().map_or(true, |c| &e.category == c))
                .filter(|e| user.map_or(true, |u| e.user == u))
                .take(limit)
                .cloned()
                .collect();

            println!("{}", format_entry_table(&entries, ledger.settings()));
            println!("{} movimientos", entries.len());
        }

        EntryCommands::Show { id } => {
            let id = resolve_entry(ledger, &id)?;
            if let Some(entry) = ledger.entries().iter().find(|e| e.id == id) {
                print!("{}", format_entry_details(entry, ledger.settings()));
            }
        }
    }

    Ok(())
}

fn resolve_entry<S: DocumentStore, C: Clock>(
    ledger: &Ledger<S, C>,
    input: &str,
) -> LedgerResult<EntryId> {
    resolve_id(
        input,
        "Entry",
        ledger.entries().iter().map(|e| e.id),
    )
}

fn check(draft: &EntryDraft) -> LedgerResult<()> {
    draft
        .validate()
        .map_err(|e| LedgerError::Validation(e.to_string()))
}

/// Parse `YYYY-MM`
pub(crate) fn parse_month(input: &str) -> LedgerResult<MonthKey> {
    let invalid = || LedgerError::Validation(format!("Invalid month '{}'. Use YYYY-MM", input));

    let (year, month) = input.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok(MonthKey {
        year,
        month0: month - 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::Settings;
    use crate::models::Money;
    use crate::storage::MemoryStore;
    use chrono::{Local, TimeZone};

    fn clock() -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2025, 10, 12, 10, 30, 0).unwrap())
    }

    fn ledger(store: &MemoryStore) -> Ledger<&MemoryStore, FixedClock> {
        let mut ledger = Ledger::with_clock(store, Settings::default(), clock());
        ledger.hydrate();
        ledger
    }

    fn add(description: &str, amount: &str, category: Option<Category>) -> EntryCommands {
        EntryCommands::Add {
            description: description.into(),
            amount: amount.into(),
            category,
            user: Participant::C,
            date: None,
            notes: None,
            method: None,
        }
    }

    #[test]
    fn test_add_stores_negative_amount() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);

        handle_entry_command(&mut ledger, add("Mercado", "125.50", Some(Category::Comida)))
            .unwrap();

        let entry = &ledger.entries()[0];
        assert_eq!(entry.amount, Money::from_cents(-12550));
        assert_eq!(entry.date, "12/10/2025 10:30");
        assert_eq!(entry.user, Participant::C);
    }

    #[test]
    fn test_add_rejects_bad_input_before_the_ledger() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);

        for cmd in [
            add("Mercado", "0", Some(Category::Comida)),
            add("   ", "10", Some(Category::Comida)),
            add("Mercado", "10", None),
        ] {
            let err = handle_entry_command(&mut ledger, cmd).unwrap_err();
            assert!(err.is_validation());
        }
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn test_edit_keeps_sign() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);
        handle_entry_command(&mut ledger, add("Taxi", "15", Some(Category::Transporte)))
            .unwrap();
        let id = ledger.entries()[0].id;

        handle_entry_command(
            &mut ledger,
            EntryCommands::Edit {
                id: id.to_string(),
                description: None,
                amount: Some("18".into()),
                category: None,
                user: None,
                date: None,
                notes: Some("aeropuerto".into()),
                method: None,
            },
        )
        .unwrap();

        let entry = &ledger.entries()[0];
        assert_eq!(entry.amount.cents(), -1800);
        assert_eq!(entry.notes.as_deref(), Some("aeropuerto"));
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);

        let err = handle_entry_command(
            &mut ledger,
            EntryCommands::Delete {
                id: "ent-deadbeef".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2025-10").unwrap(),
            MonthKey {
                year: 2025,
                month0: 9
            }
        );
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("octubre").is_err());
    }
}
