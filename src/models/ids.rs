//! Typed record identifiers
//!
//! Each record kind gets its own uuid newtype so an entry id can never be
//! handed to a goal operation. Ids display in a short prefixed form
//! (`ent-1a2b3c4d`) and serialize as the bare uuid.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Behaviour shared by every record id
pub trait RecordId: Copy + fmt::Display {
    /// Prefix of the short display form
    const PREFIX: &'static str;

    fn uuid(&self) -> Uuid;
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl RecordId for $name {
            const PREFIX: &'static str = $prefix;

            fn uuid(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let simple = self.0.simple().to_string();
                write!(f, "{}{}", $prefix, &simple[..8])
            }
        }
    };
}

define_id!(EntryId, "ent-");
define_id!(GoalId, "goal-");
define_id!(BudgetId, "bud-");
define_id!(RecurringId, "rec-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_creation() {
        let id = EntryId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let display = format!("{}", EntryId::new());
        assert!(display.starts_with("ent-"));
        assert_eq!(display.len(), 12);

        let display = format!("{}", GoalId::new());
        assert!(display.starts_with("goal-"));
        assert_eq!(display.len(), 13);
    }

    #[test]
    fn test_id_equality() {
        let id1 = EntryId::new();
        let id2 = id1;
        assert_eq!(id1, id2);
        assert_ne!(id1, EntryId::new());
    }

    #[test]
    fn test_id_serialization() {
        let id = BudgetId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: BudgetId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_short_form_uses_uuid_head() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let id = RecurringId::from_uuid(uuid);
        assert_eq!(id.to_string(), "rec-550e8400");
        assert_eq!(id.uuid(), uuid);
        assert_eq!(RecurringId::PREFIX, "rec-");
    }
}
