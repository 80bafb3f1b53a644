//! Randomized invariant sweeps over the public scheduling API.
//!
//! Inputs are drawn from a seeded RNG so every run checks the same cases.

use std::collections::{BTreeMap, HashSet};

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use u_revision::catalog::{self, HOURLY_SLOTS};
use u_revision::models::{
    AvailabilityMap, DeadlineTable, PlanningWindow, PriorityTier, ScheduledSession,
    SubjectSelection, WEEKDAYS,
};
use u_revision::scheduler::{compute_deadline_schedule, compute_revision_sessions};

const CASES: u64 = 64;

fn random_selection(rng: &mut StdRng, subjects: &[String]) -> SubjectSelection {
    subjects
        .iter()
        .filter(|_| rng.random_bool(0.35))
        .cloned()
        .collect()
}

fn random_availability(rng: &mut StdRng) -> AvailabilityMap {
    let mut map = AvailabilityMap::new();
    for day in WEEKDAYS {
        for slot in HOURLY_SLOTS {
            if rng.random_bool(0.15) {
                map.toggle(day, slot);
            }
        }
    }
    map
}

fn assert_no_duplicates(sessions: &[ScheduledSession]) {
    let mut seen = HashSet::new();
    for s in sessions {
        assert!(
            seen.insert((s.date, s.subject.as_str())),
            "{} scheduled twice on {}",
            s.subject,
            s.date
        );
    }
}

fn assert_slot_bound(sessions: &[ScheduledSession], availability: &AvailabilityMap) {
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for s in sessions {
        *per_day.entry(s.date).or_default() += 1;
        let slot = s.slot.as_deref().expect("allocator always assigns a slot");
        assert!(availability.slots_on(s.date).contains(&slot));
    }
    for (date, count) in per_day {
        assert!(count <= availability.slots_on(date).len(), "{date} overbooked");
    }
}

#[test]
fn test_random_plans_hold_invariants() {
    let catalog = catalog::gcse_2025();
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..CASES {
        let selected = random_selection(&mut rng, &catalog.subjects);
        let availability = random_availability(&mut rng);
        let schedule = compute_deadline_schedule(&selected, &catalog.deadlines);
        let sessions = compute_revision_sessions(&schedule, &availability, &catalog.window);

        assert_no_duplicates(&sessions);
        assert_slot_bound(&sessions, &availability);
        assert!(sessions.iter().all(|s| catalog.window.contains(s.date)));
        assert!(sessions
            .iter()
            .filter(|s| s.tier == PriorityTier::EarlyBalanced)
            .all(|s| catalog.window.is_early(s.date)));
    }
}

#[test]
fn test_random_plans_are_deterministic() {
    let catalog = catalog::gcse_2025();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..CASES / 4 {
        let selected = random_selection(&mut rng, &catalog.subjects);
        let availability = random_availability(&mut rng);

        let first = compute_revision_sessions(
            &compute_deadline_schedule(&selected, &catalog.deadlines),
            &availability,
            &catalog.window,
        );
        let second = compute_revision_sessions(
            &compute_deadline_schedule(&selected, &catalog.deadlines),
            &availability.clone(),
            &catalog.window,
        );

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn test_single_deadline_gets_reinforced() {
    let mut rng = StdRng::seed_from_u64(7);
    let start = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
    let window = PlanningWindow::new(start, end, start);

    for _ in 0..CASES {
        let offset = rng.random_range(1..90);
        let deadline = start.checked_add_days(Days::new(offset)).unwrap();
        let availability = random_availability(&mut rng);
        let table = DeadlineTable::new().with_deadline("Maths", deadline);
        let selected: SubjectSelection = ["Maths"].into_iter().collect();

        let sessions = compute_revision_sessions(
            &compute_deadline_schedule(&selected, &table),
            &availability,
            &window,
        );

        let reachable = window
            .dates()
            .take_while(|&d| d < deadline)
            .any(|d| !availability.slots_on(d).is_empty());
        let pre: Vec<&ScheduledSession> = sessions
            .iter()
            .filter(|s| s.tier == PriorityTier::PreDeadline)
            .collect();

        assert!(pre.len() <= 3);
        assert!(pre.iter().all(|s| s.date < deadline));
        if reachable {
            assert!(!pre.is_empty(), "no reinforcement before {deadline}");
        } else {
            assert!(pre.is_empty());
        }
    }
}
