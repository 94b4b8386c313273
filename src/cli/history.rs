//! Audit history command

use crate::audit::AuditLogger;
use crate::error::LedgerResult;

/// Print the last `count` audit records, newest last
pub fn handle_history(logger: &AuditLogger, count: usize) -> LedgerResult<()> {
    let records = logger.read_recent(count)?;
    if records.is_empty() {
        println!("Sin historial en {}", logger.path().display());
        return Ok(());
    }

    for record in &records {
        println!("{}", record.format_human_readable());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_history_on_missing_log() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));

        assert!(handle_history(&logger, 10).is_ok());
    }
}
