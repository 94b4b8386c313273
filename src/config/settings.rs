//! User settings for the ledger
//!
//! Display preferences, the opening balance and the audit switch.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::storage::write_json_atomic;
use crate::models::{Money, Participant, DEFAULT_INITIAL_BALANCE};

/// Display names for the two participants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantNames {
    #[serde(default = "default_k_name")]
    pub k: String,
    #[serde(default = "default_c_name")]
    pub c: String,
}

impl ParticipantNames {
    pub fn name_of(&self, participant: Participant) -> &str {
        match participant {
            Participant::K => &self.k,
            Participant::C => &self.c,
        }
    }
}

impl Default for ParticipantNames {
    fn default() -> Self {
        Self {
            k: default_k_name(),
            c: default_c_name(),
        }
    }
}

fn default_k_name() -> String {
    "Kely".to_string()
}

fn default_c_name() -> String {
    "Crhistian".to_string()
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Balance before any entry; the running balance is this plus all amounts
    #[serde(default = "default_initial_balance")]
    pub initial_balance: Money,

    /// How many entries `recent` returns when no count is given
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,

    /// strftime format for the display date of new entries
    #[serde(default = "default_entry_date_format")]
    pub entry_date_format: String,

    /// Whether mutations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    #[serde(default)]
    pub participants: ParticipantNames,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    crate::models::money::DEFAULT_SYMBOL.to_string()
}

fn default_initial_balance() -> Money {
    DEFAULT_INITIAL_BALANCE
}

fn default_recent_count() -> usize {
    5
}

fn default_entry_date_format() -> String {
    "%d/%m/%Y %H:%M".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            initial_balance: default_initial_balance(),
            recent_count: default_recent_count(),
            entry_date_format: default_entry_date_format(),
            audit_enabled: default_audit_enabled(),
            participants: ParticipantNames::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        write_json_atomic(paths.settings_file(), self)
    }

    /// Format an amount with the configured symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.initial_balance.cents(), 524050);
        assert_eq!(settings.recent_count, 5);
        assert_eq!(settings.currency_symbol, "S/");
        assert!(settings.audit_enabled);
        assert_eq!(settings.participants.name_of(Participant::C), "Crhistian");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.recent_count = 10;
        settings.audit_enabled = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.recent_count, 10);
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "$"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.initial_balance.cents(), 524050);
        assert_eq!(settings.format_money(Money::from_cents(-150)), "-$1.50");
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
