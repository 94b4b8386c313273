//! Savings goal CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::clock::Clock;
use crate::display::format_goal_table;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{Category, GoalDraft, GoalId, GoalPatch, Money, Priority};
use crate::reports::GoalProgress;
use crate::storage::DocumentStore;

use super::{parse_positive_amount, resolve_id};

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        name: String,
        /// Target amount
        target: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
        /// high, medium or low
        #[arg(short, long, default_value = "medium")]
        priority: Priority,
        #[arg(short, long, default_value = "Otros")]
        category: Category,
    },
    /// Change a goal
    Update {
        /// Goal ID (full, short or unique prefix)
        id: String,
        #[arg(long)]
        name: Option<String>,
        /// New saved amount
        #[arg(long)]
        current: Option<String>,
        /// Add to the saved amount
        #[arg(long, conflicts_with = "current")]
        deposit: Option<String>,
        #[arg(long)]
        target: Option<String>,
        /// New deadline (YYYY-MM-DD), or "none" to clear it
        #[arg(short, long)]
        deadline: Option<String>,
        #[arg(short, long)]
        priority: Option<Priority>,
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Delete a goal
    Delete { id: String },
    /// List goals with progress
    List,
}

pub fn handle_goal_command<S: DocumentStore, C: Clock>(
    ledger: &mut Ledger<S, C>,
    cmd: GoalCommands,
) -> LedgerResult<()> {
    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
            priority,
            category,
        } => {
            if name.trim().is_empty() {
                return Err(LedgerError::Validation("Goal name is required".into()));
            }

            let goal = ledger.add_goal(GoalDraft {
                name,
                target: parse_positive_amount(&target)?,
                deadline: deadline.as_deref().map(parse_date).transpose()?,
                priority,
                category,
            })?;
            println!("Meta creada: {} ({})", goal.name, goal.id);
        }

        GoalCommands::Update {
            id,
            name,
            current,
            deposit,
            target,
            deadline,
            priority,
            category,
        } => {
            let id = resolve_goal(ledger, &id)?;
            let saved = ledger
                .financial_data()
                .savings_goals
                .iter()
                .find(|g| g.id == id)
                .map(|g| g.current)
                .ok_or_else(|| LedgerError::goal_not_found(id.to_string()))?;

            let current = match (current, deposit) {
                (Some(value), _) => Some(parse_amount(&value)?),
                (None, Some(value)) => Some(saved + parse_positive_amount(&value)?),
                (None, None) => None,
            };
            let deadline = match deadline.as_deref() {
                Some("none") | Some("") => Some(None),
                Some(text) => Some(Some(parse_date(text)?)),
                None => None,
            };

            let patch = GoalPatch {
                name,
                current,
                target: target.as_deref().map(parse_amount).transpose()?,
                deadline,
                priority,
                category,
            };
            ledger.update_goal(id, patch)?;
            println!("Meta actualizada {}", id);
        }

        GoalCommands::Delete { id } => {
            let id = resolve_goal(ledger, &id)?;
            ledger.delete_goal(id)?;
            println!("Meta eliminada {}", id);
        }

        GoalCommands::List => {
            let goals = &ledger.financial_data().savings_goals;
            println!("{}", format_goal_table(goals, ledger.settings()));

            let progress = GoalProgress::generate(goals);
            println!(
                "Ahorrado {} de {} ({:.1}%)",
                ledger.settings().format_money(progress.total_saved),
                ledger.settings().format_money(progress.total_target),
                progress.overall_percent()
            );
        }
    }

    Ok(())
}

fn resolve_goal<S: DocumentStore, C: Clock>(
    ledger: &Ledger<S, C>,
    input: &str,
) -> LedgerResult<GoalId> {
    resolve_id(
        input,
        "Savings goal",
        ledger
            .financial_data()
            .savings_goals
            .iter()
            .map(|g| g.id),
    )
}

/// Any amount, zero included; the goal model rejects negatives
fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input)
        .map_err(|e| LedgerError::Validation(format!("Invalid amount '{}': {}", input, e)))
}

pub(crate) fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", input))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::Settings;
    use crate::storage::MemoryStore;
    use chrono::{Local, TimeZone};

    fn ledger(store: &MemoryStore) -> Ledger<&MemoryStore, FixedClock> {
        let clock = FixedClock(Local.with_ymd_and_hms(2025, 10, 12, 10, 30, 0).unwrap());
        let mut ledger = Ledger::with_clock(store, Settings::default(), clock);
        ledger.hydrate();
        ledger
    }

    fn update(id: String) -> GoalCommands {
        GoalCommands::Update {
            id,
            name: None,
            current: None,
            deposit: None,
            target: None,
            deadline: None,
            priority: None,
            category: None,
        }
    }

    #[test]
    fn test_add_goal() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);

        handle_goal_command(
            &mut ledger,
            GoalCommands::Add {
                name: "Laptop".into(),
                target: "3500".into(),
                deadline: Some("2026-03-01".into()),
                priority: Priority::Low,
                category: Category::Otros,
            },
        )
        .unwrap();

        let goal = &ledger.financial_data().savings_goals[2];
        assert_eq!(goal.target.cents(), 350000);
        assert!(goal.current.is_zero());
        assert_eq!(goal.deadline, NaiveDate::from_ymd_opt(2026, 3, 1));
    }

    #[test]
    fn test_deposit_and_clear_deadline() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);
        let id = ledger.financial_data().savings_goals[0].id;

        let mut cmd = update(id.to_string());
        if let GoalCommands::Update {
            deposit, deadline, ..
        } = &mut cmd
        {
            *deposit = Some("300".into());
            *deadline = Some("none".into());
        }
        handle_goal_command(&mut ledger, cmd).unwrap();

        let goal = &ledger.financial_data().savings_goals[0];
        assert_eq!(goal.current.cents(), 250000);
        assert!(goal.deadline.is_none());
    }

    #[test]
    fn test_negative_current_is_rejected() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);
        let id = ledger.financial_data().savings_goals[1].id;

        let mut cmd = update(id.to_string());
        if let GoalCommands::Update { current, .. } = &mut cmd {
            *current = Some("-5".into());
        }

        let err = handle_goal_command(&mut ledger, cmd).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ledger.financial_data().savings_goals[1].current.cents(), 150000);
    }
}
