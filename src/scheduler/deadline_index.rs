//! Deadline index.
//!
//! Normalizes per-subject deadline lists and orders the selected subjects
//! by final deadline, earliest first.
//!
//! # Ordering
//! - Deadlines within a subject: ascending, stable.
//! - Subjects: ascending by final deadline; subjects with no deadline last;
//!   ties keep selection order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DeadlineEvent, DeadlineTable, SubjectSelection};

/// A selected subject with its normalized deadlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineEntry {
    /// Subject name.
    pub subject: String,
    /// Deadlines, ascending.
    pub deadlines: Vec<NaiveDate>,
    /// Chronologically last deadline. `None` = no deadlines.
    pub final_deadline: Option<NaiveDate>,
}

impl DeadlineEntry {
    /// Builds an entry, sorting the deadlines.
    pub fn new(subject: impl Into<String>, mut deadlines: Vec<NaiveDate>) -> Self {
        deadlines.sort();
        let final_deadline = deadlines.last().copied();
        Self {
            subject: subject.into(),
            deadlines,
            final_deadline,
        }
    }

    /// Whether the subject has any deadline.
    pub fn has_deadlines(&self) -> bool {
        !self.deadlines.is_empty()
    }

    /// First deadline strictly after `date`.
    pub fn next_deadline_after(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.deadlines.iter().copied().find(|&d| d > date)
    }
}

/// Orders selected subjects by final deadline.
///
/// Subjects missing from the table get an empty deadline list and sort last.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use u_revision::models::{DeadlineTable, SubjectSelection};
/// use u_revision::scheduler::compute_deadline_schedule;
///
/// let date = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap();
/// let table = DeadlineTable::new()
///     .with_deadline("Maths", date(5, 15))
///     .with_deadline("Biology", date(5, 13));
/// let selected: SubjectSelection = ["Maths", "Biology"].into_iter().collect();
///
/// let schedule = compute_deadline_schedule(&selected, &table);
/// assert_eq!(schedule[0].subject, "Biology");
/// assert_eq!(schedule[1].subject, "Maths");
/// ```
pub fn compute_deadline_schedule(
    selected: &SubjectSelection,
    table: &DeadlineTable,
) -> Vec<DeadlineEntry> {
    let mut entries: Vec<DeadlineEntry> = selected
        .iter()
        .map(|subject| DeadlineEntry::new(subject, table.deadlines_for(subject).to_vec()))
        .collect();

    // Stable: equal keys keep selection order
    entries.sort_by_key(|e| (e.final_deadline.is_none(), e.final_deadline));
    entries
}

/// One event per (selected subject, deadline).
///
/// Events follow selection order rather than table order, so the list
/// matches the order the learner picked subjects in. Each subject's dates
/// are ascending.
pub fn compute_deadline_events(
    selected: &SubjectSelection,
    table: &DeadlineTable,
) -> Vec<DeadlineEvent> {
    selected
        .iter()
        .flat_map(|subject| {
            let mut dates = table.deadlines_for(subject).to_vec();
            dates.sort();
            dates
                .into_iter()
                .map(move |date| DeadlineEvent::new(subject, date))
        })
        .collect()
}
