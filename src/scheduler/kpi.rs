//! Revision plan quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fill rate | Sessions placed / slots offered in the window |
//! | Sessions by tier | Count per allocation pass |
//! | Sessions by subject | Count per selected subject |
//! | Deadline coverage | Fraction of deadlines with a session since the previous one |

use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::DeadlineEntry;
use crate::models::{AvailabilityMap, DeadlineEvent, PlanningWindow, PriorityTier, RevisionPlan};

/// Revision plan indicators.
#[derive(Debug, Clone)]
pub struct PlanKpi {
    /// Slots offered across the window.
    pub total_slots: usize,
    /// Slots holding a session.
    pub filled_slots: usize,
    /// `filled_slots / total_slots` (0.0 when no slots).
    pub fill_rate: f64,
    /// Sessions per tier (every tier present, possibly zero).
    pub sessions_by_tier: BTreeMap<PriorityTier, usize>,
    /// Sessions per subject (every scheduled subject present).
    pub sessions_by_subject: BTreeMap<String, usize>,
    /// Distinct deadlines considered.
    pub deadlines_total: usize,
    /// Deadlines with no session of their subject since the previous one.
    pub uncovered_deadlines: Vec<DeadlineEvent>,
}

impl PlanKpi {
    /// Computes KPIs for a plan.
    ///
    /// # Arguments
    /// * `plan` - The computed plan.
    /// * `schedule` - The deadline schedule the plan was built from.
    /// * `availability` - Weekly template used for the run.
    /// * `window` - Planning window used for the run.
    pub fn calculate(
        plan: &RevisionPlan,
        schedule: &[DeadlineEntry],
        availability: &AvailabilityMap,
        window: &PlanningWindow,
    ) -> Self {
        let total_slots: usize = window
            .dates()
            .map(|date| availability.slots_on(date).len())
            .sum();
        let filled_slots = plan.session_count();
        let fill_rate = if total_slots == 0 {
            0.0
        } else {
            filled_slots as f64 / total_slots as f64
        };

        let mut sessions_by_tier: BTreeMap<PriorityTier, usize> =
            PriorityTier::ALL.iter().map(|&t| (t, 0)).collect();
        let mut sessions_by_subject: BTreeMap<String, usize> = schedule
            .iter()
            .map(|e| (e.subject.clone(), 0))
            .collect();
        for s in &plan.sessions {
            *sessions_by_tier.entry(s.tier).or_insert(0) += 1;
            *sessions_by_subject.entry(s.subject.clone()).or_insert(0) += 1;
        }

        let mut deadlines_total = 0;
        let mut uncovered_deadlines = Vec::new();
        for entry in schedule {
            let dates: Vec<NaiveDate> = plan
                .sessions
                .iter()
                .filter(|s| s.subject == entry.subject)
                .map(|s| s.date)
                .collect();

            let mut distinct = entry.deadlines.clone();
            distinct.dedup();

            let mut previous: Option<NaiveDate> = None;
            for &deadline in &distinct {
                deadlines_total += 1;
                let covered = dates
                    .iter()
                    .any(|&d| d < deadline && previous.map_or(true, |p| d >= p));
                if !covered {
                    uncovered_deadlines.push(DeadlineEvent::new(&entry.subject, deadline));
                }
                previous = Some(deadline);
            }
        }

        Self {
            total_slots,
            filled_slots,
            fill_rate,
            sessions_by_tier,
            sessions_by_subject,
            deadlines_total,
            uncovered_deadlines,
        }
    }

    /// Fraction of deadlines covered (1.0 when there are none).
    pub fn coverage_rate(&self) -> f64 {
        if self.deadlines_total == 0 {
            return 1.0;
        }
        let covered = self.deadlines_total - self.uncovered_deadlines.len();
        covered as f64 / self.deadlines_total as f64
    }

    /// Whether the plan meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_fill_rate: f64, min_coverage: f64) -> bool {
        self.fill_rate >= min_fill_rate && self.coverage_rate() >= min_coverage
    }
}
