//! Export CLI commands

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::clock::Clock;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{
    export_entries_csv, export_goals_csv, export_snapshot_json, read_snapshot_json,
};
use crate::ledger::Ledger;
use crate::storage::DocumentStore;

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export entries (or goals) to CSV
    Csv {
        /// Output file, stdout if omitted
        output: Option<PathBuf>,
        /// Export savings goals instead of entries
        #[arg(long)]
        goals: bool,
    },
    /// Export the full ledger snapshot to JSON
    Json {
        /// Output file, stdout if omitted
        output: Option<PathBuf>,
        /// Single-line output
        #[arg(long)]
        compact: bool,
    },
    /// Check a JSON export file without importing it
    Validate {
        input: PathBuf,
    },
}

pub fn handle_export_command<S: DocumentStore, C: Clock>(
    ledger: &Ledger<S, C>,
    cmd: ExportCommands,
) -> LedgerResult<()> {
    match cmd {
        ExportCommands::Csv { output, goals } => {
            let writer = open_output(output.as_ref())?;
            if goals {
                export_goals_csv(&ledger.financial_data().savings_goals, writer)?;
            } else {
                export_entries_csv(ledger.entries(), writer)?;
            }

            if let Some(path) = output {
                let count = if goals {
                    ledger.financial_data().savings_goals.len()
                } else {
                    ledger.entries().len()
                };
                println!("Exportadas {} filas a: {}", count, path.display());
            }
        }

        ExportCommands::Json { output, compact } => {
            let mut writer = open_output(output.as_ref())?;
            export_snapshot_json(&ledger.snapshot(), &mut writer, !compact)?;
            writeln!(writer)?;
            writer.flush()?;

            if let Some(path) = output {
                println!("Libro exportado a: {}", path.display());
            }
        }

        ExportCommands::Validate { input } => {
            let text = std::fs::read_to_string(&input).map_err(|e| {
                LedgerError::Export(format!("Failed to read {}: {}", input.display(), e))
            })?;
            let export = read_snapshot_json(&text)?;
            let meta = &export.metadata;
            println!(
                "Exportación válida (esquema {}): {} movimientos, {} metas, {} presupuestos, {} recurrentes",
                export.schema_version,
                meta.entry_count,
                meta.goal_count,
                meta.budget_count,
                meta.recurring_count
            );
        }
    }

    Ok(())
}

fn open_output(path: Option<&PathBuf>) -> LedgerResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
