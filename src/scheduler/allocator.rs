//! Three-pass revision session allocator.
//!
//! # Algorithm
//!
//! The window is expanded once into per-day slot lists
//! (date → weekday → slots). Three passes then fill the slots; each pass
//! only touches slots earlier passes left open.
//!
//! 1. **PreDeadline**: for each subject (deadline order) and each of its
//!    deadlines, walk backward from the day before the deadline and place
//!    up to `reinforcement_cap` sessions.
//! 2. **EarlyBalanced**: on days before the intensive cutover, slot `s` of
//!    day `d` gets subject `(d + s) mod n`. A collision leaves the slot open.
//! 3. **ProximityFill**: every remaining slot gets the subject with the
//!    soonest deadline strictly after that day, skipping subjects already
//!    on the day.
//!
//! # Invariants
//! - A subject appears at most once per day.
//! - Sessions per day never exceed that weekday's slot count.
//!
//! # Complexity
//! O(D * (S + n log n) + n * k * D) where D = days, S = slots/day,
//! n = subjects, k = deadlines/subject.

use chrono::NaiveDate;
use tracing::{debug, trace, warn};

use super::deadline_index::{compute_deadline_events, compute_deadline_schedule, DeadlineEntry};
use crate::config::AllocatorConfig;
use crate::models::{
    AvailabilityMap, DeadlineTable, PlanningWindow, PriorityTier, RevisionPlan,
    ScheduledSession, SubjectSelection,
};

/// Input container for a full planning run.
#[derive(Debug, Clone)]
pub struct RevisionRequest {
    /// Selected subjects.
    pub selection: SubjectSelection,
    /// Deadline reference data.
    pub deadlines: DeadlineTable,
    /// Weekly availability template.
    pub availability: AvailabilityMap,
    /// Planning window.
    pub window: PlanningWindow,
}

impl RevisionRequest {
    /// Creates a request.
    pub fn new(
        selection: SubjectSelection,
        deadlines: DeadlineTable,
        availability: AvailabilityMap,
        window: PlanningWindow,
    ) -> Self {
        Self {
            selection,
            deadlines,
            availability,
            window,
        }
    }
}

/// Slot state of one day during allocation.
#[derive(Debug)]
struct DayPlan<'a> {
    date: NaiveDate,
    slots: Vec<&'a str>,
    /// Occupant per slot: (subject index, tier).
    occupants: Vec<Option<(usize, PriorityTier)>>,
    /// Subject indices already on this day.
    subjects: Vec<usize>,
}

impl<'a> DayPlan<'a> {
    fn new(date: NaiveDate, slots: Vec<&'a str>) -> Self {
        let occupants = vec![None; slots.len()];
        Self {
            date,
            slots,
            occupants,
            subjects: Vec::new(),
        }
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.subjects.len() >= self.slots.len()
    }

    #[inline]
    fn has(&self, subject: usize) -> bool {
        self.subjects.contains(&subject)
    }

    fn first_open(&self) -> Option<usize> {
        self.occupants.iter().position(Option::is_none)
    }

    fn is_open(&self, slot: usize) -> bool {
        self.occupants[slot].is_none()
    }

    fn place(&mut self, slot: usize, subject: usize, tier: PriorityTier) {
        debug_assert!(self.is_open(slot) && !self.has(subject));
        self.occupants[slot] = Some((subject, tier));
        self.subjects.push(subject);
    }
}

/// Deadline-aware revision scheduler.
///
/// Stateless apart from its policy; every call recomputes from scratch.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use u_revision::models::{AvailabilityMap, DeadlineTable, PlanningWindow, SubjectSelection};
/// use u_revision::scheduler::{RevisionRequest, RevisionScheduler};
///
/// let date = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap();
/// let request = RevisionRequest::new(
///     ["Maths"].into_iter().collect::<SubjectSelection>(),
///     DeadlineTable::new().with_deadline("Maths", date(5, 15)),
///     AvailabilityMap::new().with_slot(Weekday::Wed, "09:00"),
///     PlanningWindow::new(date(5, 1), date(5, 20), date(5, 10)),
/// );
///
/// let plan = RevisionScheduler::new().schedule_request(&request);
/// assert!(plan.session_count() > 0);
/// assert_eq!(plan.deadline_events.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RevisionScheduler {
    config: AllocatorConfig,
}

impl RevisionScheduler {
    /// Creates a scheduler with the reference policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the allocation policy.
    pub fn with_config(mut self, config: AllocatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Current policy.
    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Allocates sessions for an ordered deadline schedule.
    ///
    /// Output is ordered by date, then slot position.
    pub fn schedule(
        &self,
        schedule: &[DeadlineEntry],
        availability: &AvailabilityMap,
        window: &PlanningWindow,
    ) -> Vec<ScheduledSession> {
        let window = normalize_window(window);

        if schedule.is_empty() || availability.is_empty() || window.day_count() == 0 {
            debug!(
                subjects = schedule.len(),
                weekly_slots = availability.weekly_slot_count(),
                days = window.day_count(),
                "nothing to allocate"
            );
            return Vec::new();
        }

        let mut days: Vec<DayPlan<'_>> = window
            .dates()
            .map(|date| DayPlan::new(date, availability.slots_on(date)))
            .collect();

        let reinforced = self.reinforce(&mut days, schedule, &window);
        debug!(placed = reinforced, "pre-deadline pass complete");

        let balanced = rotate_early(&mut days, schedule.len(), &window);
        debug!(placed = balanced, "early balanced pass complete");

        let filled = fill_by_proximity(&mut days, schedule);
        debug!(placed = filled, "proximity fill pass complete");

        collect_sessions(&days, schedule)
    }

    /// Runs the full pipeline: deadline index, allocation, deadline events.
    pub fn schedule_request(&self, request: &RevisionRequest) -> RevisionPlan {
        let deadline_schedule = compute_deadline_schedule(&request.selection, &request.deadlines);
        let sessions = self.schedule(&deadline_schedule, &request.availability, &request.window);
        RevisionPlan {
            sessions,
            deadline_events: compute_deadline_events(&request.selection, &request.deadlines),
        }
    }

    /// Pass 1: backward walk from each deadline, capped per deadline.
    fn reinforce(
        &self,
        days: &mut [DayPlan<'_>],
        schedule: &[DeadlineEntry],
        window: &PlanningWindow,
    ) -> usize {
        let cap = self.config.reinforcement_cap;
        if cap == 0 {
            return 0;
        }

        let mut placed = 0;
        for (subject, entry) in schedule.iter().enumerate() {
            for &deadline in &entry.deadlines {
                let Some(day_before) = deadline.pred_opt() else {
                    continue;
                };
                let Some(from) = window.ordinal(day_before.min(window.end)) else {
                    continue;
                };

                let mut count = 0;
                for day in days[..=from].iter_mut().rev() {
                    if count == cap {
                        break;
                    }
                    if day.is_full() || day.has(subject) {
                        continue;
                    }
                    if let Some(slot) = day.first_open() {
                        day.place(slot, subject, PriorityTier::PreDeadline);
                        trace!(
                            subject = %entry.subject,
                            date = %day.date,
                            %deadline,
                            "reinforcement placed"
                        );
                        count += 1;
                    }
                }
                placed += count;
            }
        }
        placed
    }
}

/// Pass 2: round-robin over days before the cutover.
fn rotate_early(days: &mut [DayPlan<'_>], subject_count: usize, window: &PlanningWindow) -> usize {
    let mut placed = 0;
    for (ordinal, day) in days.iter_mut().enumerate() {
        if !window.is_early(day.date) {
            break;
        }
        for slot in 0..day.slots.len() {
            if day.is_full() {
                break;
            }
            if !day.is_open(slot) {
                continue;
            }
            let subject = (ordinal + slot) % subject_count;
            // Collision leaves the slot open; no secondary search
            if day.has(subject) {
                continue;
            }
            day.place(slot, subject, PriorityTier::EarlyBalanced);
            placed += 1;
        }
    }
    placed
}

/// Pass 3: soonest-next-deadline first, falling through the ranking.
fn fill_by_proximity(days: &mut [DayPlan<'_>], schedule: &[DeadlineEntry]) -> usize {
    let mut placed = 0;
    for day in days.iter_mut() {
        if day.is_full() {
            continue;
        }

        let date = day.date;
        let mut ranked: Vec<usize> = (0..schedule.len()).collect();
        ranked.sort_by_key(|&i| {
            let next = schedule[i].next_deadline_after(date);
            (next.is_none(), next)
        });

        for slot in 0..day.slots.len() {
            if !day.is_open(slot) {
                continue;
            }
            let Some(subject) = ranked.iter().copied().find(|&i| !day.has(i)) else {
                break;
            };
            day.place(slot, subject, PriorityTier::ProximityFill);
            placed += 1;
        }
    }
    placed
}

fn collect_sessions(days: &[DayPlan<'_>], schedule: &[DeadlineEntry]) -> Vec<ScheduledSession> {
    days.iter()
        .flat_map(|day| {
            day.slots
                .iter()
                .zip(&day.occupants)
                .filter_map(move |(slot, occupant)| {
                    occupant.map(|(subject, tier)| {
                        ScheduledSession::new(&schedule[subject].subject, day.date, *slot, tier)
                    })
                })
        })
        .collect()
}

/// Clamps the window, emitting at most one warning per call.
fn normalize_window(window: &PlanningWindow) -> PlanningWindow {
    let clamped = window.clamped();
    if window.end < window.start {
        warn!(
            start = %window.start,
            end = %window.end,
            "planning window ends before it starts; nothing scheduled"
        );
    } else if clamped.intensive_cutover != window.intensive_cutover {
        warn!(
            requested = %window.intensive_cutover,
            clamped = %clamped.intensive_cutover,
            "intensive cutover clamped into planning window"
        );
    }
    clamped
}

/// Orders subjects and allocates sessions with the reference policy.
pub fn compute_revision_sessions(
    schedule: &[DeadlineEntry],
    availability: &AvailabilityMap,
    window: &PlanningWindow,
) -> Vec<ScheduledSession> {
    RevisionScheduler::new().schedule(schedule, availability, window)
}
