//! Sub-account CLI commands

use clap::Subcommand;

use crate::clock::Clock;
use crate::display::format_accounts;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{AccountsPatch, Money};
use crate::storage::DocumentStore;

#[derive(Subcommand)]
pub enum AccountsCommands {
    /// Show cash, savings and checking balances
    Show,
    /// Overwrite one or more balances
    Set {
        #[arg(long)]
        cash: Option<String>,
        #[arg(long)]
        savings: Option<String>,
        #[arg(long)]
        checking: Option<String>,
    },
}

pub fn handle_accounts_command<S: DocumentStore, C: Clock>(
    ledger: &mut Ledger<S, C>,
    cmd: AccountsCommands,
) -> LedgerResult<()> {
    match cmd {
        AccountsCommands::Show => {
            print!(
                "{}",
                format_accounts(&ledger.financial_data().accounts, ledger.settings())
            );
        }

        AccountsCommands::Set {
            cash,
            savings,
            checking,
        } => {
            let patch = AccountsPatch {
                cash: cash.as_deref().map(parse_balance).transpose()?,
                savings: savings.as_deref().map(parse_balance).transpose()?,
                checking: checking.as_deref().map(parse_balance).transpose()?,
            };
            if patch.is_empty() {
                return Err(LedgerError::Validation(
                    "Give at least one of --cash, --savings or --checking".into(),
                ));
            }

            let accounts = ledger.update_accounts(patch)?;
            print!("{}", format_accounts(&accounts, ledger.settings()));
        }
    }

    Ok(())
}

/// Balances may be zero or negative (an overdrawn account)
fn parse_balance(input: &str) -> LedgerResult<Money> {
    Money::parse(input)
        .map_err(|e| LedgerError::Validation(format!("Invalid amount '{}': {}", input, e)))
}
