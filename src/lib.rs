//! Deadline-aware revision scheduling for the U-Engine ecosystem.
//!
//! Allocates recurring study sessions to a weekly availability template so
//! that every selected subject is revised before each of its deadlines.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `SubjectSelection`, `DeadlineTable`,
//!   `AvailabilityMap`, `PlanningWindow`, `ScheduledSession`, `RevisionPlan`,
//!   `CalendarEntry`
//! - **`scheduler`**: Deadline index, three-pass allocator, plan KPIs
//! - **`validation`**: Advisory input checks (window ordering, missing deadlines)
//! - **`config`**: Allocation policy, loadable from TOML
//! - **`catalog`**: GCSE 2025 reference subjects and exam dates
//!
//! # Usage
//!
//! ```
//! use chrono::Weekday;
//! use u_revision::catalog;
//! use u_revision::models::{AvailabilityMap, SubjectSelection};
//! use u_revision::scheduler::{compute_deadline_schedule, compute_revision_sessions};
//!
//! let catalog = catalog::gcse_2025();
//! let selected: SubjectSelection = ["Maths", "Biology", "History"].into_iter().collect();
//! let availability = AvailabilityMap::new()
//!     .with_slots(Weekday::Sat, ["10:00", "11:00"])
//!     .with_slot(Weekday::Tue, "18:00");
//!
//! let schedule = compute_deadline_schedule(&selected, &catalog.deadlines);
//! let sessions = compute_revision_sessions(&schedule, &availability, &catalog.window);
//! assert!(!sessions.is_empty());
//! ```
//!
//! # Architecture
//!
//! Pure, synchronous computation over immutable snapshots. No I/O, no
//! global state; every call recomputes the plan from scratch.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{PlannerError, Result};
