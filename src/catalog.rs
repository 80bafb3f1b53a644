//! Reference GCSE 2025 catalog.
//!
//! Subject list, exam sittings, hourly slot labels, and the default
//! planning window of the GCSE revision planner. Useful as fixture data
//! and as the default reference table.

use chrono::NaiveDate;

use crate::models::{DeadlineTable, PlanningWindow};

/// Subjects offered, in display order.
pub const GCSE_SUBJECTS: [&str; 23] = [
    "Maths",
    "English Language",
    "English Literature",
    "Biology",
    "Chemistry",
    "Physics",
    "Geography",
    "History",
    "French",
    "Spanish",
    "Business",
    "Automotive",
    "Religious Studies",
    "Music",
    "Food Tech",
    "Health and Social",
    "IT",
    "Construction",
    "Statistics",
    "Sport",
    "Design Technology",
    "Media Studies",
    "Hospitality & Catering",
];

/// Hourly slot labels offered by the availability picker.
pub const HOURLY_SLOTS: [&str; 14] = [
    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
    "18:00", "19:00", "20:00", "21:00",
];

/// Exam sittings as (month, day) in 2025.
const GCSE_2025_EXAMS: [(&str, &[(u32, u32)]); 23] = [
    ("Health and Social", &[(5, 6)]),
    ("Construction", &[(5, 6)]),
    ("Business", &[(5, 9), (5, 16)]),
    ("English Literature", &[(5, 12), (5, 20)]),
    ("Religious Studies", &[(5, 13), (5, 21)]),
    ("Biology", &[(5, 13), (6, 9)]),
    ("Geography", &[(5, 14), (6, 6), (6, 12)]),
    ("Media Studies", &[(5, 14), (5, 22)]),
    ("Maths", &[(5, 15), (6, 4), (6, 11)]),
    ("History", &[(5, 16), (6, 5), (6, 10)]),
    ("Chemistry", &[(5, 19), (6, 13)]),
    ("French", &[(5, 21), (6, 5)]),
    ("Physics", &[(5, 22), (6, 16)]),
    ("Sport", &[(5, 22)]),
    ("English Language", &[(5, 23), (6, 6)]),
    ("Statistics", &[(6, 2), (6, 13)]),
    ("Automotive", &[(6, 2)]),
    ("IT", &[(6, 9)]),
    ("Spanish", &[(6, 10), (6, 17)]),
    ("Music", &[(6, 5)]),
    ("Food Tech", &[(6, 6)]),
    ("Design Technology", &[(6, 18)]),
    ("Hospitality & Catering", &[(6, 12)]),
];

/// Reference data bundle.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Selectable subjects.
    pub subjects: Vec<String>,
    /// Exam sittings per subject.
    pub deadlines: DeadlineTable,
    /// Slot labels the availability picker offers.
    pub time_slots: Vec<String>,
    /// Default planning window.
    pub window: PlanningWindow,
}

fn ymd(month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, month, day)
}

/// GCSE 2025 reference catalog.
///
/// Window 2025-04-04 ..= 2025-07-19, intensive phase from 2025-04-22.
pub fn gcse_2025() -> Catalog {
    let deadlines = GCSE_2025_EXAMS
        .iter()
        .fold(DeadlineTable::new(), |table, (subject, dates)| {
            table.with_deadlines(*subject, dates.iter().filter_map(|&(m, d)| ymd(m, d)))
        });

    let start = ymd(4, 4).unwrap_or_default();
    let end = ymd(7, 19).unwrap_or_default();
    let cutover = ymd(4, 22).unwrap_or_default();

    Catalog {
        subjects: GCSE_SUBJECTS.iter().map(|s| s.to_string()).collect(),
        deadlines,
        time_slots: HOURLY_SLOTS.iter().map(|s| s.to_string()).collect(),
        window: PlanningWindow::new(start, end, cutover),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subject_has_deadlines() {
        let catalog = gcse_2025();
        assert_eq!(catalog.subjects.len(), 23);
        assert_eq!(catalog.deadlines.len(), 23);
        for subject in &catalog.subjects {
            assert!(
                !catalog.deadlines.deadlines_for(subject).is_empty(),
                "{subject} has no exams"
            );
        }
    }

    #[test]
    fn test_known_sittings() {
        let catalog = gcse_2025();
        assert_eq!(
            catalog.deadlines.deadlines_for("Geography"),
            &[
                NaiveDate::from_ymd_opt(2025, 5, 14).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
            ]
        );
    }

    #[test]
    fn test_window_is_well_formed() {
        let catalog = gcse_2025();
        assert!(catalog.window.check().is_ok());
        assert_eq!(catalog.window.day_count(), 107);
        assert_eq!(catalog.time_slots.first().map(String::as_str), Some("08:00"));
        assert_eq!(catalog.time_slots.len(), 14);
    }
}
