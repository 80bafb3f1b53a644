//! Revision planning domain models.
//!
//! Provides the data types consumed and produced by the scheduler. Inputs
//! are immutable snapshots (selection, deadline table, weekly availability,
//! planning window); outputs are fresh per run (sessions, deadline events,
//! calendar entries).
//!
//! # Domain Mappings
//!
//! | u-revision | Exam revision | Training plan | Certification |
//! |------------|---------------|---------------|---------------|
//! | Subject | School subject | Skill | Module |
//! | Deadline | Exam sitting | Competition | Assessment |
//! | Slot | Study hour | Session | Study block |
//! | Plan | Revision timetable | Training block | Study plan |

mod calendar;
mod deadline;
mod entry;
mod session;
mod subject;

pub use calendar::{parse_weekday, AvailabilityMap, PlanningWindow, WEEKDAYS};
pub use deadline::{DeadlineEvent, DeadlineTable};
pub use entry::{slot_start_time, CalendarEntry, EntryKind};
pub use session::{PriorityTier, RevisionPlan, ScheduledSession};
pub use subject::SubjectSelection;
