//! Deadline index, session allocator, and plan KPIs.
//!
//! # Algorithm
//!
//! `compute_deadline_schedule` orders the selected subjects by final
//! deadline. `RevisionScheduler` then fills the weekly slots of every day
//! in the planning window in three passes (pre-deadline reinforcement,
//! early balanced rotation, deadline-proximity fill). Both steps are pure
//! and deterministic: identical inputs give identical output sequences.
//!
//! # KPI
//!
//! `PlanKpi` reports slot fill rate, per-tier and per-subject counts, and
//! deadline coverage.

mod allocator;
mod deadline_index;
mod kpi;

pub use allocator::{compute_revision_sessions, RevisionRequest, RevisionScheduler};
pub use deadline_index::{compute_deadline_events, compute_deadline_schedule, DeadlineEntry};
pub use kpi::PlanKpi;
