//! Revision plan (solution) model.
//!
//! A plan is the output of one allocation run: the scheduled revision
//! sessions plus the deadline events of the selected subjects. Plans are
//! recomputed from scratch on every input change and never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CalendarEntry, DeadlineEvent};
use crate::config::AllocatorConfig;

/// The allocation pass that placed a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityTier {
    /// Reinforcement in the days before a deadline.
    PreDeadline,
    /// Round-robin rotation before the intensive cutover.
    EarlyBalanced,
    /// Soonest-next-deadline fill of remaining slots.
    ProximityFill,
}

impl PriorityTier {
    /// All tiers in pass order.
    pub const ALL: [PriorityTier; 3] = [
        PriorityTier::PreDeadline,
        PriorityTier::EarlyBalanced,
        PriorityTier::ProximityFill,
    ];
}

/// One revision session on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSession {
    /// Subject to revise.
    pub subject: String,
    /// Calendar day.
    pub date: NaiveDate,
    /// Slot label from the availability template.
    pub slot: Option<String>,
    /// Pass that placed this session.
    pub tier: PriorityTier,
}

impl ScheduledSession {
    /// Creates a session in a slot.
    pub fn new(
        subject: impl Into<String>,
        date: NaiveDate,
        slot: impl Into<String>,
        tier: PriorityTier,
    ) -> Self {
        Self {
            subject: subject.into(),
            date,
            slot: Some(slot.into()),
            tier,
        }
    }

    /// Display title, e.g. `"Revise Maths"`.
    pub fn title(&self) -> String {
        format!("Revise {}", self.subject)
    }
}

/// Sessions and deadline events of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionPlan {
    /// Sessions ordered by date, then slot position.
    pub sessions: Vec<ScheduledSession>,
    /// Deadline events of the selected subjects.
    pub deadline_events: Vec<DeadlineEvent>,
}

impl RevisionPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session was placed.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sessions on a date.
    pub fn sessions_on(&self, date: NaiveDate) -> Vec<&ScheduledSession> {
        self.sessions.iter().filter(|s| s.date == date).collect()
    }

    /// Sessions for a subject.
    pub fn sessions_for_subject(&self, subject: &str) -> Vec<&ScheduledSession> {
        self.sessions
            .iter()
            .filter(|s| s.subject == subject)
            .collect()
    }

    /// Sessions placed by a tier.
    pub fn sessions_in_tier(&self, tier: PriorityTier) -> Vec<&ScheduledSession> {
        self.sessions.iter().filter(|s| s.tier == tier).collect()
    }

    /// Session count per date.
    pub fn sessions_per_date(&self) -> BTreeMap<NaiveDate, usize> {
        let mut counts = BTreeMap::new();
        for s in &self.sessions {
            *counts.entry(s.date).or_insert(0) += 1;
        }
        counts
    }

    /// Calendar projection: deadline events first, then sessions.
    pub fn calendar_entries(&self, config: &AllocatorConfig) -> Vec<CalendarEntry> {
        self.deadline_events
            .iter()
            .map(|e| CalendarEntry::from_deadline(e, config))
            .chain(
                self.sessions
                    .iter()
                    .map(|s| CalendarEntry::from_session(s, config)),
            )
            .collect()
    }
}
