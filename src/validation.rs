//! Input validation for revision planning.
//!
//! The scheduler is total and never rejects input. This module is an
//! optional preflight for callers that want to surface problems instead of
//! receiving a silently thin plan. Detects:
//! - Window ending before it starts
//! - Intensive cutover outside the window
//! - Blank slot labels
//! - Selected subjects without deadlines
//! - Deadlines on or before the window start (no reinforcement possible)

use crate::models::{AvailabilityMap, DeadlineTable, PlanningWindow, SubjectSelection, WEEKDAYS};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Window end precedes its start.
    InvalidWindow,
    /// Intensive cutover lies outside the window.
    CutoverOutsideWindow,
    /// A slot label is empty or whitespace.
    BlankSlotLabel,
    /// A selected subject has no deadlines in the table.
    MissingDeadlines,
    /// A deadline leaves no day inside the window to reinforce on.
    DeadlineBeforeWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs of a planning run.
///
/// Checks:
/// 1. `start <= end`
/// 2. `start <= intensive_cutover <= end`
/// 3. No blank slot labels
/// 4. Every selected subject has at least one deadline
/// 5. Every deadline of a selected subject falls after the window start
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    selection: &SubjectSelection,
    deadlines: &DeadlineTable,
    availability: &AvailabilityMap,
    window: &PlanningWindow,
) -> ValidationResult {
    let mut errors = Vec::new();

    if window.end < window.start {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWindow,
            format!("Window ends {} before it starts {}", window.end, window.start),
        ));
    } else if !window.contains(window.intensive_cutover) {
        errors.push(ValidationError::new(
            ValidationErrorKind::CutoverOutsideWindow,
            format!(
                "Intensive cutover {} outside window {}..={}",
                window.intensive_cutover, window.start, window.end
            ),
        ));
    }

    for day in WEEKDAYS {
        if availability
            .slots_for(day)
            .iter()
            .any(|slot| slot.trim().is_empty())
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankSlotLabel,
                format!("Blank slot label on {day}"),
            ));
        }
    }

    for subject in selection.iter() {
        let dates = deadlines.deadlines_for(subject);
        if dates.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingDeadlines,
                format!("Subject '{subject}' has no deadlines"),
            ));
            continue;
        }
        for date in dates.iter().filter(|&&d| d <= window.start) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DeadlineBeforeWindow,
                format!(
                    "Subject '{subject}' deadline {date} is not after window start {}",
                    window.start
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
