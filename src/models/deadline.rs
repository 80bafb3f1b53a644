//! Deadline reference data and deadline events.
//!
//! A [`DeadlineTable`] maps each subject to its deadline dates (exam
//! sittings). It is loaded once and never mutated by the scheduler.
//! [`DeadlineEvent`] is the display projection of one (subject, date) pair.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{parse_date, Result};

/// Subject → deadline dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeadlineTable {
    entries: BTreeMap<String, Vec<NaiveDate>>,
}

impl DeadlineTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a deadline for a subject.
    pub fn with_deadline(mut self, subject: impl Into<String>, date: NaiveDate) -> Self {
        self.entries.entry(subject.into()).or_default().push(date);
        self
    }

    /// Appends several deadlines for a subject.
    pub fn with_deadlines(
        mut self,
        subject: impl Into<String>,
        dates: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        self.entries.entry(subject.into()).or_default().extend(dates);
        self
    }

    /// Appends deadlines given as `YYYY-MM-DD` strings.
    ///
    /// Fails on the first unparseable date; the table is left unchanged.
    pub fn with_iso_deadlines<'a>(
        mut self,
        subject: impl Into<String>,
        dates: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        let parsed = dates
            .into_iter()
            .map(parse_date)
            .collect::<Result<Vec<_>>>()?;
        self.entries.entry(subject.into()).or_default().extend(parsed);
        Ok(self)
    }

    /// Deadlines for a subject, as stored. Absent subjects yield an empty slice.
    pub fn deadlines_for(&self, subject: &str) -> &[NaiveDate] {
        self.entries.get(subject).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the table has an entry for the subject.
    pub fn contains(&self, subject: &str) -> bool {
        self.entries.contains_key(subject)
    }

    /// Subjects with entries, in name order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of subjects with entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A deadline occurrence for a selected subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineEvent {
    /// Subject name.
    pub subject: String,
    /// Deadline date.
    pub date: NaiveDate,
}

impl DeadlineEvent {
    /// Creates a deadline event.
    pub fn new(subject: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            subject: subject.into(),
            date,
        }
    }

    /// Display title, e.g. `"Maths Exam"`.
    pub fn title(&self) -> String {
        format!("{} Exam", self.subject)
    }
}
