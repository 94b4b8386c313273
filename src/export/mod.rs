//! Export of ledger data
//!
//! - CSV: the entry list, one row per entry (spreadsheet-compatible)
//! - JSON: the full snapshot with schema version and export timestamp

pub mod csv;
pub mod json;

pub use self::csv::{export_entries_csv, export_goals_csv};
pub use json::{
    export_snapshot_json, read_snapshot_json, ExportMetadata, SnapshotExport, EXPORT_SCHEMA_VERSION,
};
