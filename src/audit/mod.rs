//! Audit trail for ledger mutations
//!
//! Every committed change to an entry, goal, budget, recurring template or
//! the sub-accounts is appended to `audit.log` as one JSON object per line,
//! carrying the record before and after the change.
//!
//! ```rust,ignore
//! use pareja_ledger::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::Entry,
//!     entry.id.to_string(),
//!     Some(entry.description.clone()),
//!     &entry,
//! ))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::{changed_fields, generate_diff};
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
