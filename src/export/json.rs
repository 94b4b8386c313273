//! JSON export
//!
//! Writes the full ledger snapshot with a schema version so a later reader
//! can check compatibility.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::LedgerSnapshot;
use crate::models::{Entry, FinancialData};

pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Version of the program that wrote the export
    pub app_version: String,
    pub entries: Vec<Entry>,
    pub financial_data: FinancialData,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub entry_count: usize,
    pub goal_count: usize,
    pub budget_count: usize,
    pub recurring_count: usize,
    /// Oldest and newest entry timestamps (epoch millis)
    pub earliest_timestamp: Option<i64>,
    pub latest_timestamp: Option<i64>,
}

impl SnapshotExport {
    pub fn from_snapshot(snapshot: &LedgerSnapshot) -> Self {
        let entries = snapshot.entries.clone();
        let data = snapshot.financial_data.clone();

        let metadata = ExportMetadata {
            entry_count: entries.len(),
            goal_count: data.savings_goals.len(),
            budget_count: data.budgets.len(),
            recurring_count: data.recurring_transactions.len(),
            earliest_timestamp: entries.iter().map(|e| e.timestamp).min(),
            latest_timestamp: entries.iter().map(|e| e.timestamp).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            entries,
            financial_data: data,
            metadata,
        }
    }

    /// Check version and that no id appears twice
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.entries.iter().find(|e| !seen.insert(e.id)) {
            return Err(format!("Duplicate entry id {}", dup.id));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self
            .financial_data
            .savings_goals
            .iter()
            .find(|g| !seen.insert(g.id))
        {
            return Err(format!("Duplicate goal id {}", dup.id));
        }

        Ok(())
    }
}

/// Write `snapshot` as a [`SnapshotExport`]
pub fn export_snapshot_json<W: Write>(
    snapshot: &LedgerSnapshot,
    writer: W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = SnapshotExport::from_snapshot(snapshot);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))
}

/// Parse and validate an export
pub fn read_snapshot_json(json: &str) -> LedgerResult<SnapshotExport> {
    let export: SnapshotExport =
        serde_json::from_str(json).map_err(|e| LedgerError::Export(e.to_string()))?;
    export.validate().map_err(LedgerError::Export)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, EntryDraft, EntryId, Money, MonthKey, Participant};
    use crate::models::DEFAULT_INITIAL_BALANCE;

    fn snapshot() -> LedgerSnapshot {
        let entries = [(-2500, 3000), (180000, 1000), (-990, 2000)]
            .into_iter()
            .map(|(cents, ts)| {
                Entry::from_draft(
                    EntryId::new(),
                    ts,
                    EntryDraft::new(
                        "x",
                        Money::from_cents(cents),
                        Category::Otros,
                        "",
                        Participant::K,
                    ),
                )
            })
            .collect();

        LedgerSnapshot {
            entries,
            financial_data: FinancialData::seeded(
                DEFAULT_INITIAL_BALANCE,
                MonthKey { year: 2025, month0: 9 },
            ),
            loading: false,
        }
    }

    #[test]
    fn test_export_metadata() {
        let export = SnapshotExport::from_snapshot(&snapshot());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.entry_count, 3);
        assert_eq!(export.metadata.goal_count, 2);
        assert_eq!(export.metadata.budget_count, 3);
        assert_eq!(export.metadata.earliest_timestamp, Some(1000));
        assert_eq!(export.metadata.latest_timestamp, Some(3000));
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_written_export_reads_back() {
        let snapshot = snapshot();
        let mut out = Vec::new();
        export_snapshot_json(&snapshot, &mut out, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"schemaVersion\": \"1.0.0\""));
        assert!(text.contains("\"exportedAt\""));

        let export = read_snapshot_json(&text).unwrap();
        assert_eq!(export.entries, snapshot.entries);
        assert_eq!(export.financial_data, snapshot.financial_data);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut snapshot = snapshot();
        let first = snapshot.entries[0].clone();
        snapshot.entries.push(first);

        let export = SnapshotExport::from_snapshot(&snapshot);
        assert!(export.validate().unwrap_err().contains("Duplicate entry id"));
    }

    #[test]
    fn test_wrong_version_is_rejected() {
        let mut export = SnapshotExport::from_snapshot(&snapshot());
        export.schema_version = "0.1.0".into();
        let json = serde_json::to_string(&export).unwrap();

        assert!(read_snapshot_json(&json).is_err());
    }
}
