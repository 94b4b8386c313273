use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pareja_ledger::cli::{
    handle_accounts_command, handle_budget_command, handle_entry_command, handle_export_command,
    handle_goal_command, handle_history, handle_recurring_command, handle_summary, open_ledger,
    AccountsCommands, BudgetCommands, EntryCommands, ExportCommands, GoalCommands,
    RecurringCommands,
};
use pareja_ledger::audit::AuditLogger;
use pareja_ledger::config::{LedgerPaths, Settings};
use pareja_ledger::storage::{ENTRIES_KEY, FINANCIAL_DATA_KEY};

#[derive(Parser)]
#[command(
    name = "pareja",
    version,
    about = "Shared expense ledger for two",
    long_about = "Pareja keeps a couple's shared income and expenses, savings goals \
                  and monthly budgets in one ledger, with the balance and monthly \
                  totals always recomputed from the entries."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Entry(EntryCommands),

    /// Month summary with budgets and goals
    Summary,

    /// Savings goals
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Monthly category budgets
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Cash, savings and checking balances
    #[command(subcommand)]
    Accounts(AccountsCommands),

    /// Recurring income and expenses
    #[command(subcommand)]
    Recurring(RecurringCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show the audit log
    History {
        /// Number of records to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PAREJA_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    let Some(command) = cli.command else {
        println!("Pareja - finanzas compartidas");
        println!();
        println!("Ejecuta 'pareja --help' para ver los comandos.");
        return Ok(());
    };

    if let Commands::Config = command {
        let store_dir = paths.data_dir();
        println!("Configuración de Pareja");
        println!("=======================");
        println!("Directorio base:      {}", paths.base_dir().display());
        println!("Movimientos:          {}", store_dir.join(format!("{}.json", ENTRIES_KEY)).display());
        println!(
            "Datos financieros:    {}",
            store_dir.join(format!("{}.json", FINANCIAL_DATA_KEY)).display()
        );
        println!("Archivo de ajustes:   {}", paths.settings_file().display());
        println!("Registro de cambios:  {}", paths.audit_log().display());
        println!();
        println!("Ajustes:");
        println!("  Moneda:             {}", settings.currency_symbol);
        println!("  Saldo inicial:      {}", settings.format_money(settings.initial_balance));
        println!("  Recientes:          {}", settings.recent_count);
        println!("  Formato de fecha:   {}", settings.entry_date_format);
        println!("  Registro activo:    {}", settings.audit_enabled);
        println!(
            "  Participantes:      K = {}, C = {}",
            settings.participants.k, settings.participants.c
        );
        return Ok(());
    }

    if let Commands::History { count } = command {
        handle_history(&AuditLogger::new(paths.audit_log()), count)?;
        return Ok(());
    }

    let mut ledger = open_ledger(&paths, &settings)?;

    match command {
        Commands::Entry(cmd) => handle_entry_command(&mut ledger, cmd)?,
        Commands::Summary => handle_summary(&ledger)?,
        Commands::Goal(cmd) => handle_goal_command(&mut ledger, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut ledger, cmd)?,
        Commands::Accounts(cmd) => handle_accounts_command(&mut ledger, cmd)?,
        Commands::Recurring(cmd) => handle_recurring_command(&mut ledger, cmd)?,
        Commands::Export(cmd) => handle_export_command(&ledger, cmd)?,
        Commands::History { .. } | Commands::Config => {}
    }

    Ok(())
}
