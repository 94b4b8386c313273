//! Recurring scheduler
//!
//! Turns due recurring templates into entry drafts. Runs only when a caller
//! asks for it; the ledger never posts templates on its own.

use chrono::NaiveDate;

use crate::models::{EntryDraft, RecurringId, RecurringTransaction};

/// Upper bound on occurrences emitted per template in one run
pub const MAX_CATCH_UP: usize = 366;

/// One occurrence to post
#[derive(Debug, Clone, PartialEq)]
pub struct DueOccurrence {
    pub template_id: RecurringId,
    pub on: NaiveDate,
    pub draft: EntryDraft,
}

/// Collect every occurrence due on or before `today` and advance each
/// template's `next_date` past `today`
///
/// Occurrences come out grouped by template, oldest first within a template.
pub fn collect_due(templates: &mut [RecurringTransaction], today: NaiveDate) -> Vec<DueOccurrence> {
    let mut due = Vec::new();

    for template in templates.iter_mut() {
        let mut emitted = 0;
        while template.is_due(today) && emitted < MAX_CATCH_UP {
            let on = template.next_date;
            due.push(DueOccurrence {
                template_id: template.id,
                on,
                draft: template.entry_draft(on),
            });
            emitted += 1;

            match template.frequency.advance(on) {
                Some(next) => template.next_date = next,
                None => {
                    // Calendar overflow; nothing sensible comes after
                    template.is_active = false;
                    break;
                }
            }
        }
    }

    due
}
