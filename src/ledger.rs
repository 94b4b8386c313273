//! Ledger facade
//!
//! The single surface front-ends call. Every mutation runs the same
//! sequence: change the in-memory collections, recompute the aggregates from
//! the full entry list, write both documents, then append to the audit log.
//! Callers never see entries and totals out of step.

use std::collections::BTreeMap;

use chrono::{Local, TimeZone};
use serde::Serialize;
use tracing::{debug, warn};

use crate::audit::{changed_fields, AuditEntry, AuditLogger, EntityType};
use crate::clock::{Clock, SystemClock};
use crate::config::Settings;
use crate::error::LedgerResult;
use crate::models::{
    Accounts, AccountsPatch, Budget, Category, Entry, EntryDraft, EntryId, FinancialData,
    GoalDraft, GoalId, GoalPatch, Money, MonthKey, Participant, RecurringDraft, RecurringId,
    RecurringTransaction, SavingsGoal,
};
use crate::services::{aggregation, recurring, EntryStore, PlanningManager};
use crate::storage::{DocumentStore, ENTRIES_KEY, FINANCIAL_DATA_KEY};

/// Owned copy of the whole ledger state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    pub entries: Vec<Entry>,
    pub financial_data: FinancialData,
    pub loading: bool,
}

pub struct Ledger<S: DocumentStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    settings: Settings,
    entries: EntryStore,
    data: FinancialData,
    loading: bool,
    audit: Option<AuditLogger>,
}

impl<S: DocumentStore> Ledger<S> {
    /// A ledger on the system clock, still `loading` until [`Ledger::hydrate`]
    pub fn new(store: S, settings: Settings) -> Self {
        Self::with_clock(store, settings, SystemClock)
    }

    /// [`Ledger::new`] followed by [`Ledger::hydrate`]
    pub fn open(store: S, settings: Settings) -> Self {
        let mut ledger = Self::new(store, settings);
        ledger.hydrate();
        ledger
    }
}

impl<S: DocumentStore, C: Clock> Ledger<S, C> {
    pub fn with_clock(store: S, settings: Settings, clock: C) -> Self {
        let data = FinancialData::seeded(settings.initial_balance, clock.current_month());
        Self {
            store,
            clock,
            settings,
            entries: EntryStore::new(),
            data,
            loading: true,
            audit: None,
        }
    }

    /// Record every committed mutation in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Load both documents from the store
    ///
    /// A missing, unreadable or unparseable document is replaced by its
    /// default; nothing is surfaced to the caller. Stored aggregates are
    /// taken as-is and refreshed by the next mutation.
    pub fn hydrate(&mut self) {
        let entries = self
            .load_document::<Vec<Entry>>(ENTRIES_KEY)
            .unwrap_or_default();
        let data = self.load_document::<FinancialData>(FINANCIAL_DATA_KEY).unwrap_or_else(|| {
            FinancialData::seeded(self.settings.initial_balance, self.clock.current_month())
        });

        debug!(entries = entries.len(), "ledger hydrated");
        self.entries = EntryStore::from_entries(entries);
        self.data = data;
        self.loading = false;
    }

    fn load_document<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = match self.store.read(key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "could not read document, using defaults");
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "corrupt document, using defaults");
                None
            }
        }
    }

    // --- entries ---

    /// Record a new entry stamped with the current time
    pub fn add(&mut self, draft: EntryDraft) -> LedgerResult<Entry> {
        let timestamp = self.clock.now().timestamp_millis();
        let entry = self.entries.add(draft, timestamp);

        let record = AuditEntry::create(
            EntityType::Entry,
            entry.id.to_string(),
            Some(entry.description.clone()),
            &entry,
        );
        self.commit(vec![record])?;
        Ok(entry)
    }

    /// Record income: the amount is made positive and filed under `Ingreso`
    pub fn add_income(
        &mut self,
        amount: Money,
        description: impl Into<String>,
        user: Participant,
    ) -> LedgerResult<Entry> {
        let date = self.display_date_now();
        self.add(EntryDraft::new(
            description,
            amount.abs(),
            Category::Ingreso,
            date,
            user,
        ))
    }

    /// Replace an entry's fields. `Ok(false)` if the id is unknown.
    pub fn update(&mut self, id: EntryId, draft: EntryDraft) -> LedgerResult<bool> {
        let Some((before, after)) = self.entries.update(id, draft) else {
            return Ok(false);
        };

        let record = AuditEntry::update(
            EntityType::Entry,
            id.to_string(),
            Some(after.description.clone()),
            &before,
            &after,
        );
        self.commit(vec![record])?;
        Ok(true)
    }

    /// Remove an entry. `Ok(false)` if the id is unknown.
    pub fn delete(&mut self, id: EntryId) -> LedgerResult<bool> {
        let Some(removed) = self.entries.delete(id) else {
            return Ok(false);
        };

        let record = AuditEntry::delete(
            EntityType::Entry,
            id.to_string(),
            Some(removed.description.clone()),
            &removed,
        );
        self.commit(vec![record])?;
        Ok(true)
    }

    /// Newest entries by timestamp; `None` uses the configured count
    pub fn recent(&self, n: Option<usize>) -> Vec<Entry> {
        self.entries.recent(n.unwrap_or(self.settings.recent_count))
    }

    /// Expense totals per category for the current month
    pub fn monthly_by_category(&self) -> BTreeMap<Category, Money> {
        self.entries.monthly_by_category(self.clock.current_month())
    }

    /// Expense totals per participant for the current month
    pub fn monthly_by_participant(&self) -> BTreeMap<Participant, Money> {
        self.entries
            .monthly_by_participant(self.clock.current_month())
    }

    // --- goals, budgets, accounts ---

    pub fn add_goal(&mut self, draft: GoalDraft) -> LedgerResult<SavingsGoal> {
        let goal = PlanningManager::new(&mut self.data).add_goal(draft)?;

        let record = AuditEntry::create(
            EntityType::SavingsGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        );
        self.commit(vec![record])?;
        Ok(goal)
    }

    /// Merge `patch` into a goal. `Ok(false)` if the id is unknown.
    pub fn update_goal(&mut self, id: GoalId, patch: GoalPatch) -> LedgerResult<bool> {
        let Some((before, after)) = PlanningManager::new(&mut self.data).update_goal(id, patch)?
        else {
            return Ok(false);
        };

        let record = AuditEntry::update(
            EntityType::SavingsGoal,
            id.to_string(),
            Some(after.name.clone()),
            &before,
            &after,
        );
        self.commit(vec![record])?;
        Ok(true)
    }

    pub fn delete_goal(&mut self, id: GoalId) -> LedgerResult<bool> {
        let Some(removed) = PlanningManager::new(&mut self.data).delete_goal(id) else {
            return Ok(false);
        };

        let record = AuditEntry::delete(
            EntityType::SavingsGoal,
            id.to_string(),
            Some(removed.name.clone()),
            &removed,
        );
        self.commit(vec![record])?;
        Ok(true)
    }

    /// Set the current month's limit for `category`
    ///
    /// Updates the existing budget for the month in place, or creates one.
    pub fn upsert_budget(&mut self, category: Category, limit: Money) -> LedgerResult<Budget> {
        let period = self.clock.current_month();
        let upsert = PlanningManager::new(&mut self.data).upsert_budget(category, limit, period);

        let name = Some(upsert.budget.category.label().to_string());
        let record = match &upsert.previous {
            Some(previous) => AuditEntry::update(
                EntityType::Budget,
                upsert.budget.id.to_string(),
                name,
                previous,
                &upsert.budget,
            ),
            None => AuditEntry::create(
                EntityType::Budget,
                upsert.budget.id.to_string(),
                name,
                &upsert.budget,
            ),
        };
        self.commit(vec![record])?;
        Ok(upsert.budget)
    }

    /// Merge sub-account balances and return the result
    pub fn update_accounts(&mut self, patch: AccountsPatch) -> LedgerResult<Accounts> {
        let (before, after) = PlanningManager::new(&mut self.data).update_accounts(patch);

        let record = AuditEntry::update(EntityType::Accounts, "accounts", None, &before, &after);
        self.commit(vec![record])?;
        Ok(after)
    }

    // --- recurring templates ---

    pub fn add_recurring_transaction(
        &mut self,
        draft: RecurringDraft,
    ) -> LedgerResult<RecurringTransaction> {
        let template = PlanningManager::new(&mut self.data).add_recurring(draft);

        let record = AuditEntry::create(
            EntityType::RecurringTransaction,
            template.id.to_string(),
            Some(template.description.clone()),
            &template,
        );
        self.commit(vec![record])?;
        Ok(template)
    }

    pub fn delete_recurring(&mut self, id: RecurringId) -> LedgerResult<bool> {
        let Some(removed) = PlanningManager::new(&mut self.data).delete_recurring(id) else {
            return Ok(false);
        };

        let record = AuditEntry::delete(
            EntityType::RecurringTransaction,
            id.to_string(),
            Some(removed.description.clone()),
            &removed,
        );
        self.commit(vec![record])?;
        Ok(true)
    }

    /// Pause or resume a template. `Ok(false)` if the id is unknown.
    pub fn set_recurring_active(&mut self, id: RecurringId, active: bool) -> LedgerResult<bool> {
        let Some((before, after)) =
            PlanningManager::new(&mut self.data).set_recurring_active(id, active)
        else {
            return Ok(false);
        };

        let record = AuditEntry::update(
            EntityType::RecurringTransaction,
            id.to_string(),
            Some(after.description.clone()),
            &before,
            &after,
        );
        self.commit(vec![record])?;
        Ok(true)
    }

    /// Turn every due occurrence of an active template into an entry
    ///
    /// Each posted entry is timestamped at local midnight of its occurrence
    /// date, so catch-up entries land in the month they belong to. Returns
    /// the posted entries oldest first; nothing is written when none are due.
    pub fn post_due_recurring(&mut self) -> LedgerResult<Vec<Entry>> {
        let now = self.clock.now();
        let before = self.data.recurring_transactions.clone();
        let due = recurring::collect_due(&mut self.data.recurring_transactions, now.date_naive());
        if due.is_empty() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        let mut posted = Vec::with_capacity(due.len());
        for occurrence in due {
            let timestamp = occurrence
                .on
                .and_hms_opt(0, 0, 0)
                .and_then(|naive| Local.from_local_datetime(&naive).earliest())
                .map(|moment| moment.timestamp_millis())
                .unwrap_or_else(|| now.timestamp_millis());

            let entry = self.entries.add(occurrence.draft, timestamp);
            records.push(AuditEntry::create(
                EntityType::Entry,
                entry.id.to_string(),
                Some(entry.description.clone()),
                &entry,
            ));
            posted.push(entry);
        }

        for (old, new) in before.iter().zip(&self.data.recurring_transactions) {
            if old != new {
                records.push(AuditEntry::update(
                    EntityType::RecurringTransaction,
                    new.id.to_string(),
                    Some(new.description.clone()),
                    old,
                    new,
                ));
            }
        }

        debug!(count = posted.len(), "posted recurring occurrences");
        self.commit(records)?;
        Ok(posted)
    }

    // --- reads ---

    /// Entries in stored order, most recently added first
    pub fn entries(&self) -> &[Entry] {
        self.entries.all()
    }

    pub fn financial_data(&self) -> &FinancialData {
        &self.data
    }

    /// True until the first [`Ledger::hydrate`] has run
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The clock's current time in the configured display-date format
    pub fn display_date_now(&self) -> String {
        self.clock
            .now()
            .format(&self.settings.entry_date_format)
            .to_string()
    }

    pub fn current_month(&self) -> MonthKey {
        self.clock.current_month()
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            entries: self.entries.all().to_vec(),
            financial_data: self.data.clone(),
            loading: self.loading,
        }
    }

    /// Recompute aggregates, persist both documents, then audit
    fn commit(&mut self, records: Vec<AuditEntry>) -> LedgerResult<()> {
        let totals = aggregation::compute(
            self.settings.initial_balance,
            self.entries.all(),
            self.clock.current_month(),
        );
        totals.apply_to(&mut self.data);

        let entries_json = serde_json::to_string_pretty(self.entries.all())?;
        let data_json = serde_json::to_string_pretty(&self.data)?;
        self.store.write(ENTRIES_KEY, &entries_json)?;
        self.store.write(FINANCIAL_DATA_KEY, &data_json)?;

        for record in &records {
            let fields = match (&record.before, &record.after) {
                (Some(b), Some(a)) => changed_fields(b, a),
                _ => Vec::new(),
            };
            debug!(
                operation = %record.operation,
                entity = %record.entity_type,
                id = %record.entity_id,
                ?fields,
                "committed"
            );
        }
        debug!(balance = %self.data.balance, "aggregates refreshed");

        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log_batch(&records) {
                warn!(error = %e, "failed to append to audit log");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{Frequency, Priority};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn clock() -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2025, 10, 15, 18, 30, 0).unwrap())
    }

    fn ledger(store: &MemoryStore) -> Ledger<&MemoryStore, FixedClock> {
        let mut ledger = Ledger::with_clock(store, Settings::default(), clock());
        ledger.hydrate();
        ledger
    }

    fn expense(description: &str, cents: i64, category: Category) -> EntryDraft {
        EntryDraft::new(
            description,
            Money::from_cents(cents),
            category,
            "15/10/2025",
            Participant::K,
        )
    }

    #[test]
    fn test_loading_until_hydrated() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::with_clock(&store, Settings::default(), clock());
        assert!(ledger.is_loading());
        assert!(ledger.snapshot().loading);

        ledger.hydrate();
        assert!(!ledger.is_loading());
    }

    #[test]
    fn test_empty_store_hydrates_seed_state() {
        let store = MemoryStore::new();
        let ledger = ledger(&store);

        let data = ledger.financial_data();
        assert!(ledger.entries().is_empty());
        assert_eq!(data.balance.cents(), 524050);
        assert_eq!(data.savings_goals.len(), 2);
        assert_eq!(data.budgets_for(ledger.current_month()).count(), 3);
        assert_eq!(data.accounts.checking.cents(), 54050);
        // Hydration alone writes nothing
        assert!(store.get(ENTRIES_KEY).is_none());
    }

    #[test]
    fn test_corrupt_documents_fall_back_to_defaults() {
        let store = MemoryStore::new()
            .with_document(ENTRIES_KEY, "[{not json")
            .with_document(FINANCIAL_DATA_KEY, "42");
        let ledger = ledger(&store);

        assert!(!ledger.is_loading());
        assert!(ledger.entries().is_empty());
        assert_eq!(ledger.financial_data().savings_goals.len(), 2);
    }

    #[test]
    fn test_add_commits_both_documents() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);

        let entry = ledger
            .add(expense("Supermercado", -12550, Category::Comida))
            .unwrap();

        assert_eq!(entry.timestamp, clock().0.timestamp_millis());
        assert_eq!(ledger.financial_data().balance.cents(), 511500);
        assert_eq!(ledger.financial_data().monthly_expenses.cents(), 12550);

        let stored: Vec<Entry> = serde_json::from_str(&store.get(ENTRIES_KEY).unwrap()).unwrap();
        assert_eq!(stored, ledger.entries());
        let data: FinancialData =
            serde_json::from_str(&store.get(FINANCIAL_DATA_KEY).unwrap()).unwrap();
        assert_eq!(&data, ledger.financial_data());
    }

    #[test]
    fn test_add_income_forces_sign_and_category() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);

        let entry = ledger
            .add_income(Money::from_cents(-300000), "Sueldo", Participant::C)
            .unwrap();

        assert_eq!(entry.amount.cents(), 300000);
        assert_eq!(entry.category, Category::Ingreso);
        assert_eq!(entry.date, "15/10/2025 18:30");
        assert_eq!(ledger.financial_data().monthly_income.cents(), 300000);
    }

    #[test]
    fn test_unknown_ids_write_nothing() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);

        assert!(!ledger
            .update(EntryId::new(), expense("x", -1, Category::Otros))
            .unwrap());
        assert!(!ledger.delete(EntryId::new()).unwrap());
        assert!(!ledger.delete_goal(GoalId::new()).unwrap());
        assert!(!ledger
            .update_goal(GoalId::new(), GoalPatch::default())
            .unwrap());
        assert!(!ledger.delete_recurring(RecurringId::new()).unwrap());
        assert!(store.get(ENTRIES_KEY).is_none());
        assert!(store.get(FINANCIAL_DATA_KEY).is_none());
    }

    #[test]
    fn test_recent_defaults_to_settings_count() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);
        for i in 0..7 {
            ledger
                .add(expense(&format!("Gasto {}", i), -100, Category::Otros))
                .unwrap();
        }

        assert_eq!(ledger.recent(None).len(), 5);
        assert_eq!(ledger.recent(Some(2)).len(), 2);
    }

    #[test]
    fn test_goal_mutations_leave_entries_alone() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);
        ledger
            .add(expense("Cine", -3000, Category::Entretenimiento))
            .unwrap();

        let goal = ledger
            .add_goal(GoalDraft {
                name: "Bicicleta".into(),
                target: Money::from_cents(120000),
                deadline: None,
                priority: Priority::Low,
                category: Category::Other("Deporte".into()),
            })
            .unwrap();
        assert!(ledger
            .update_goal(
                goal.id,
                GoalPatch {
                    current: Some(Money::from_cents(20000)),
                    ..Default::default()
                }
            )
            .unwrap());

        assert_eq!(ledger.entries().len(), 1);
        assert_eq!(ledger.financial_data().balance.cents(), 521050);
        assert_eq!(ledger.financial_data().savings_goals[2].current.cents(), 20000);
    }

    #[test]
    fn test_upsert_budget_uses_current_month() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);

        let budget = ledger
            .upsert_budget(Category::Comida, Money::from_cents(90000))
            .unwrap();

        assert_eq!(budget.period(), MonthKey { year: 2025, month0: 9 });
        assert_eq!(ledger.financial_data().budgets.len(), 3);
        assert_eq!(ledger.financial_data().budgets[0].limit.cents(), 90000);
    }

    #[test]
    fn test_post_due_recurring() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);
        ledger
            .add_recurring_transaction(RecurringDraft {
                description: "Alquiler".into(),
                amount: Money::from_cents(-150000),
                category: Category::Hogar,
                frequency: Frequency::Monthly,
                next_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                user: Participant::K,
                is_active: true,
            })
            .unwrap();

        let posted = ledger.post_due_recurring().unwrap();
        assert_eq!(posted.len(), 2);
        assert_eq!(posted[0].date, "2025-09-01");
        assert_eq!(posted[1].date, "2025-10-01");
        assert_eq!(
            posted[0].timestamp,
            Local
                .with_ymd_and_hms(2025, 9, 1, 0, 0, 0)
                .unwrap()
                .timestamp_millis()
        );
        // Ordered by occurrence date, not by posting order
        assert_eq!(ledger.recent(Some(1))[0].date, "2025-10-01");

        // Only the October occurrence counts toward this month
        assert_eq!(ledger.financial_data().monthly_expenses.cents(), 150000);
        assert_eq!(ledger.financial_data().balance.cents(), 524050 - 300000);
        assert_eq!(
            ledger.financial_data().recurring_transactions[0].next_date,
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
        );
        assert!(ledger.post_due_recurring().unwrap().is_empty());
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let store = MemoryStore::new();
        let mut ledger =
            Ledger::with_clock(&store, Settings::default(), clock()).with_audit(logger.clone());
        ledger.hydrate();

        let entry = ledger.add(expense("Taxi", -1500, Category::Transporte)).unwrap();
        ledger
            .update(entry.id, expense("Taxi", -1800, Category::Transporte))
            .unwrap();
        ledger.delete(entry.id).unwrap();
        ledger
            .update_accounts(AccountsPatch {
                cash: Some(Money::from_cents(1000)),
                ..Default::default()
            })
            .unwrap();

        let records = logger.read_all().unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[1].diff_summary.as_deref(), Some("amount: -1500 -> -1800"));
        assert_eq!(records[3].entity_type, EntityType::Accounts);
    }
}
