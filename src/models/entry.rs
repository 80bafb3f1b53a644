//! Calendar entry projection.
//!
//! Maps deadline events and revision sessions to timed entries that a
//! calendar view or file exporter can consume. Encoding those entries
//! (iCalendar, PDF, print) is left to the consumer.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::{DeadlineEvent, ScheduledSession};
use crate::config::AllocatorConfig;

/// What a calendar entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// A deadline (exam sitting).
    Deadline,
    /// A revision session.
    Revision,
}

/// A timed calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// Display title.
    pub title: String,
    /// Entry kind.
    pub kind: EntryKind,
    /// Local start time.
    pub start: NaiveDateTime,
    /// Nominal length in minutes.
    pub duration_minutes: u32,
}

impl CalendarEntry {
    /// Entry for a deadline event, at the default time.
    pub fn from_deadline(event: &DeadlineEvent, config: &AllocatorConfig) -> Self {
        Self {
            title: event.title(),
            kind: EntryKind::Deadline,
            start: event.date.and_time(config.default_session_time),
            duration_minutes: config.session_minutes,
        }
    }

    /// Entry for a session. The time comes from the slot label when it
    /// starts with `HH:MM`, otherwise the default time.
    pub fn from_session(session: &ScheduledSession, config: &AllocatorConfig) -> Self {
        let time = session
            .slot
            .as_deref()
            .and_then(slot_start_time)
            .unwrap_or(config.default_session_time);
        Self {
            title: session.title(),
            kind: EntryKind::Revision,
            start: session.date.and_time(time),
            duration_minutes: config.session_minutes,
        }
    }

    /// End time (start + duration).
    pub fn end(&self) -> NaiveDateTime {
        self.start + TimeDelta::minutes(i64::from(self.duration_minutes))
    }
}

/// Leading `HH:MM` of a slot label, if any.
pub fn slot_start_time(label: &str) -> Option<NaiveTime> {
    let prefix = label
        .trim()
        .split(|c: char| !(c.is_ascii_digit() || c == ':'))
        .next()?;
    NaiveTime::parse_from_str(prefix, "%H:%M").ok()
}
