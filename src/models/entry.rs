//! Ledger entry model
//!
//! An entry is a single signed income or expense record. The amount's sign is
//! the only polarity marker: negative amounts are expenses, positive amounts
//! are income.

use chrono::{DateTime, Datelike, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, PaymentMethod};
use super::ids::EntryId;
use super::money::Money;

/// One of the two people sharing the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Participant {
    K,
    C,
}

impl Participant {
    pub const ALL: [Participant; 2] = [Participant::K, Participant::C];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::K => "K",
            Self::C => "C",
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Participant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "K" | "k" => Ok(Self::K),
            "C" | "c" => Ok(Self::C),
            other => Err(format!("unknown participant '{}', expected K or C", other)),
        }
    }
}

/// Calendar month used for bucketing, with a 0-based month index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    /// 0 = January .. 11 = December
    pub month0: u32,
}

impl MonthKey {
    pub fn of<Tz: TimeZone>(moment: &DateTime<Tz>) -> Self {
        Self {
            year: moment.year(),
            month0: moment.month0(),
        }
    }

    /// Month containing an epoch-millisecond timestamp, in local time
    pub fn of_timestamp(timestamp_ms: i64) -> Option<Self> {
        Local
            .timestamp_millis_opt(timestamp_ms)
            .single()
            .map(|moment| Self::of(&moment))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month0 + 1)
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique identifier, assigned at creation
    pub id: EntryId,

    pub description: String,

    /// Signed amount (negative for expenses, positive for income)
    pub amount: Money,

    pub category: Category,

    /// Human-facing date text; independent of `timestamp`
    pub date: String,

    /// Author of the entry
    pub user: Participant,

    /// Creation time in epoch milliseconds, used for ordering and bucketing
    ///
    /// Entries posted from recurring templates are backdated to local
    /// midnight of their occurrence date, so `recent()` order is not
    /// insertion order once catch-up postings exist.
    pub timestamp: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

impl Entry {
    /// Build an entry from a draft with the given identity
    pub fn from_draft(id: EntryId, timestamp: i64, draft: EntryDraft) -> Self {
        Self {
            id,
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            user: draft.user,
            timestamp,
            notes: draft.notes,
            is_recurring: draft.is_recurring,
            payment_method: draft.payment_method,
        }
    }

    /// Replace every field except the identifier and the timestamp
    pub fn apply(&mut self, draft: EntryDraft) {
        self.description = draft.description;
        self.amount = draft.amount;
        self.category = draft.category;
        self.date = draft.date;
        self.user = draft.user;
        self.notes = draft.notes;
        self.is_recurring = draft.is_recurring;
        self.payment_method = draft.payment_method;
    }

    /// The editable fields of this entry
    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            description: self.description.clone(),
            amount: self.amount,
            category: self.category.clone(),
            date: self.date.clone(),
            user: self.user,
            notes: self.notes.clone(),
            is_recurring: self.is_recurring,
            payment_method: self.payment_method.clone(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// Month of the creation timestamp (not of the display date)
    pub fn month(&self) -> Option<MonthKey> {
        MonthKey::of_timestamp(self.timestamp)
    }

    pub fn falls_in(&self, month: MonthKey) -> bool {
        self.month() == Some(month)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} ({})",
            self.description, self.category, self.amount, self.user
        )
    }
}

/// Caller-supplied entry fields (everything but id and timestamp)
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub description: String,
    pub amount: Money,
    pub category: Category,
    pub date: String,
    pub user: Participant,
    pub notes: Option<String>,
    pub is_recurring: Option<bool>,
    pub payment_method: Option<PaymentMethod>,
}

impl EntryDraft {
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: Category,
        date: impl Into<String>,
        user: Participant,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category,
            date: date.into(),
            user,
            notes: None,
            is_recurring: None,
            payment_method: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    pub fn recurring(mut self, is_recurring: bool) -> Self {
        self.is_recurring = Some(is_recurring);
        self
    }

    /// Form-level checks. The ledger itself never calls this; front-ends do
    /// before submitting.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.description.trim().is_empty() {
            return Err(EntryValidationError::EmptyDescription);
        }

        if self.amount.is_zero() {
            return Err(EntryValidationError::ZeroAmount);
        }

        if self.amount.is_negative() && self.category.is_blank() {
            return Err(EntryValidationError::MissingCategory);
        }

        Ok(())
    }
}

/// Errors from [`EntryDraft::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyDescription,
    ZeroAmount,
    MissingCategory,
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description is required"),
            Self::ZeroAmount => write!(f, "Amount must be greater than zero"),
            Self::MissingCategory => write!(f, "Expenses need a category"),
        }
    }
}

impl std::error::Error for EntryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EntryDraft {
        EntryDraft::new(
            "Supermercado",
            Money::from_cents(-12550),
            Category::Comida,
            "12 oct., 10:30",
            Participant::K,
        )
    }

    #[test]
    fn test_apply_keeps_identity() {
        let id = EntryId::new();
        let mut entry = Entry::from_draft(id, 1_700_000_000_000, draft());

        let mut edited = draft();
        edited.amount = Money::from_cents(-30000);
        edited.description = "Mercado".into();
        edited.user = Participant::C;
        entry.apply(edited);

        assert_eq!(entry.id, id);
        assert_eq!(entry.timestamp, 1_700_000_000_000);
        assert_eq!(entry.amount.cents(), -30000);
        assert_eq!(entry.description, "Mercado");
        assert_eq!(entry.user, Participant::C);
    }

    #[test]
    fn test_polarity_from_sign() {
        let entry = Entry::from_draft(EntryId::new(), 0, draft());
        assert!(entry.is_expense());
        assert!(!entry.is_income());
    }

    #[test]
    fn test_validation() {
        assert!(draft().validate().is_ok());

        let mut empty = draft();
        empty.description = "   ".into();
        assert_eq!(empty.validate(), Err(EntryValidationError::EmptyDescription));

        let mut zero = draft();
        zero.amount = Money::zero();
        assert_eq!(zero.validate(), Err(EntryValidationError::ZeroAmount));

        let mut uncategorized = draft();
        uncategorized.category = Category::from_label("");
        assert_eq!(
            uncategorized.validate(),
            Err(EntryValidationError::MissingCategory)
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let entry = Entry::from_draft(
            EntryId::new(),
            42,
            draft()
                .with_payment_method(PaymentMethod::Yape)
                .recurring(false),
        );
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["amount"], -12550);
        assert_eq!(json["category"], "Comida");
        assert_eq!(json["user"], "K");
        assert_eq!(json["paymentMethod"], "yape");
        assert_eq!(json["isRecurring"], false);
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_month_key_display() {
        let key = MonthKey {
            year: 2025,
            month0: 0,
        };
        assert_eq!(key.to_string(), "2025-01");
    }

    #[test]
    fn test_participant_parse() {
        assert_eq!("k".parse::<Participant>().unwrap(), Participant::K);
        assert!("X".parse::<Participant>().is_err());
    }
}
