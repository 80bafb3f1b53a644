//! Weekly availability template and planning window.
//!
//! # Time Model
//! Dates are calendar days (`NaiveDate`), no time zone. Slots are opaque
//! labels (e.g. `"08:00"`, `"Evening (6-7)"`) attached to a weekday, not to
//! a date.
//!
//! # Lookup
//! A date resolves to slots in two explicit steps:
//! date → weekday → slot set. The template never holds per-date overrides.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeSet, HashMap};

use crate::error::{PlannerError, Result};

/// All weekdays, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Parses a weekday name (`"Monday"`, `"mon"`, case-insensitive).
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    name.trim()
        .parse::<Weekday>()
        .map_err(|_| PlannerError::UnknownWeekday(name.to_string()))
}

/// Recurring weekly availability: weekday → slot labels.
///
/// Slot sets are unique and kept in label order. That order is the slot
/// position the allocator uses. A weekday with no entry has no slots.
///
/// Serializes as a map keyed Monday first, so equal templates always
/// encode to the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityMap {
    slots: HashMap<Weekday, BTreeSet<String>>,
}

impl Serialize for AvailabilityMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for day in WEEKDAYS {
            if let Some(set) = self.slots.get(&day) {
                map.serialize_entry(&day, set)?;
            }
        }
        map.end()
    }
}

impl AvailabilityMap {
    /// Creates an empty template (no availability at all).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a slot to a weekday.
    pub fn with_slot(mut self, weekday: Weekday, slot: impl Into<String>) -> Self {
        self.slots.entry(weekday).or_default().insert(slot.into());
        self
    }

    /// Adds several slots to a weekday.
    pub fn with_slots<S: Into<String>>(
        mut self,
        weekday: Weekday,
        slots: impl IntoIterator<Item = S>,
    ) -> Self {
        self.slots
            .entry(weekday)
            .or_default()
            .extend(slots.into_iter().map(Into::into));
        self
    }

    /// Adds the same slots to every weekday.
    pub fn every_day<S: Into<String> + Clone>(slots: impl IntoIterator<Item = S>) -> Self {
        let slots: Vec<S> = slots.into_iter().collect();
        WEEKDAYS.iter().fold(Self::new(), |map, &day| {
            map.with_slots(day, slots.iter().cloned())
        })
    }

    /// Flips a slot on a weekday. Returns `true` if the slot is now available.
    pub fn toggle(&mut self, weekday: Weekday, slot: &str) -> bool {
        let set = self.slots.entry(weekday).or_default();
        if set.remove(slot) {
            false
        } else {
            set.insert(slot.to_string());
            true
        }
    }

    /// Flips a slot on a weekday given by name.
    pub fn toggle_named(&mut self, weekday: &str, slot: &str) -> Result<bool> {
        let day = parse_weekday(weekday)?;
        Ok(self.toggle(day, slot))
    }

    /// Slots offered on a weekday, in slot order.
    pub fn slots_for(&self, weekday: Weekday) -> Vec<&str> {
        self.slots
            .get(&weekday)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Slots offered on a calendar date (via its weekday).
    pub fn slots_on(&self, date: NaiveDate) -> Vec<&str> {
        self.slots_for(date.weekday())
    }

    /// Number of slots on a weekday.
    pub fn slot_count(&self, weekday: Weekday) -> usize {
        self.slots.get(&weekday).map_or(0, BTreeSet::len)
    }

    /// Total slots across the week.
    pub fn weekly_slot_count(&self) -> usize {
        self.slots.values().map(BTreeSet::len).sum()
    }

    /// Whether no weekday offers any slot.
    pub fn is_empty(&self) -> bool {
        self.weekly_slot_count() == 0
    }
}

/// Inclusive planning range with an intensive cutover.
///
/// Days strictly before `intensive_cutover` form the early (balanced)
/// phase. `start <= intensive_cutover <= end` is expected; see
/// [`PlanningWindow::try_new`] and [`PlanningWindow::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningWindow {
    /// First schedulable day (inclusive).
    pub start: NaiveDate,
    /// Last schedulable day (inclusive).
    pub end: NaiveDate,
    /// First day of the intensive phase.
    pub intensive_cutover: NaiveDate,
}

impl PlanningWindow {
    /// Creates a window without checking ordering.
    pub fn new(start: NaiveDate, end: NaiveDate, intensive_cutover: NaiveDate) -> Self {
        Self {
            start,
            end,
            intensive_cutover,
        }
    }

    /// Creates a window, rejecting `end < start` or a cutover outside it.
    pub fn try_new(start: NaiveDate, end: NaiveDate, intensive_cutover: NaiveDate) -> Result<Self> {
        let window = Self::new(start, end, intensive_cutover);
        window.check()?;
        Ok(window)
    }

    /// Checks the ordering precondition.
    pub fn check(&self) -> Result<()> {
        if self.end < self.start {
            return Err(PlannerError::WindowEndsBeforeStart {
                start: self.start,
                end: self.end,
            });
        }
        if self.intensive_cutover < self.start || self.intensive_cutover > self.end {
            return Err(PlannerError::CutoverOutsideWindow {
                start: self.start,
                end: self.end,
                cutover: self.intensive_cutover,
            });
        }
        Ok(())
    }

    /// Normalized copy used by the allocator.
    ///
    /// The cutover is clamped into `[start, end]`. A window with
    /// `end < start` keeps its bounds and simply has no days.
    pub fn clamped(&self) -> Self {
        let upper = self.end.max(self.start);
        Self {
            intensive_cutover: self.intensive_cutover.clamp(self.start, upper),
            ..*self
        }
    }

    /// Number of days in the window (0 if `end < start`).
    pub fn day_count(&self) -> usize {
        let days = (self.end - self.start).num_days() + 1;
        usize::try_from(days).unwrap_or(0)
    }

    /// Every date in the window, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.day_count())
    }

    /// Whether a date lies in the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Zero-based offset of a date from `start`, if inside the window.
    pub fn ordinal(&self, date: NaiveDate) -> Option<usize> {
        if !self.contains(date) {
            return None;
        }
        usize::try_from((date - self.start).num_days()).ok()
    }

    /// Date at a zero-based offset from `start`.
    pub fn date_at(&self, ordinal: usize) -> Option<NaiveDate> {
        if ordinal >= self.day_count() {
            return None;
        }
        self.start.checked_add_days(Days::new(ordinal as u64))
    }

    /// Whether a date falls in the early (pre-cutover) phase.
    #[inline]
    pub fn is_early(&self, date: NaiveDate) -> bool {
        date < self.intensive_cutover
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    #[test]
    fn test_slots_sorted_and_unique() {
        let map = AvailabilityMap::new()
            .with_slot(Weekday::Mon, "18:00")
            .with_slot(Weekday::Mon, "08:00")
            .with_slot(Weekday::Mon, "18:00");
        assert_eq!(map.slots_for(Weekday::Mon), vec!["08:00", "18:00"]);
        assert_eq!(map.slot_count(Weekday::Mon), 2);
        assert!(map.slots_for(Weekday::Tue).is_empty());
    }

    #[test]
    fn test_date_to_weekday_lookup() {
        // 2025-05-07 is a Wednesday
        let map = AvailabilityMap::new().with_slot(Weekday::Wed, "09:00");
        assert_eq!(map.slots_on(d(5, 7)), vec!["09:00"]);
        assert!(map.slots_on(d(5, 8)).is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut map = AvailabilityMap::new();
        assert!(map.toggle(Weekday::Fri, "10:00"));
        assert_eq!(map.slot_count(Weekday::Fri), 1);
        assert!(!map.toggle(Weekday::Fri, "10:00"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_toggle_named() {
        let mut map = AvailabilityMap::new();
        assert!(map.toggle_named("Saturday", "11:00").unwrap());
        assert_eq!(map.slots_for(Weekday::Sat), vec!["11:00"]);
        assert!(map.toggle_named("Caturday", "11:00").is_err());
    }

    #[test]
    fn test_every_day() {
        let map = AvailabilityMap::every_day(["08:00", "19:00"]);
        assert_eq!(map.weekly_slot_count(), 14);
    }

    #[test]
    fn test_availability_serde_accepts_full_names() {
        let map: AvailabilityMap =
            serde_json::from_str(r#"{"Monday": ["09:00"], "wed": ["18:00", "08:00"]}"#).unwrap();
        assert_eq!(map.slots_for(Weekday::Mon), vec!["09:00"]);
        assert_eq!(map.slots_for(Weekday::Wed), vec!["08:00", "18:00"]);
    }

    #[test]
    fn test_availability_serializes_in_weekday_order() {
        let mut forward = AvailabilityMap::new();
        let mut backward = AvailabilityMap::new();
        for day in WEEKDAYS {
            forward.toggle(day, "08:00");
        }
        for day in WEEKDAYS.iter().rev() {
            backward.toggle(*day, "08:00");
        }
        forward.toggle(Weekday::Wed, "18:00");
        backward.toggle(Weekday::Wed, "18:00");

        let json = serde_json::to_string(&forward).unwrap();
        assert_eq!(json, serde_json::to_string(&backward).unwrap());
        assert!(json.starts_with(r#"{"Mon":["08:00"],"Tue":["08:00"],"Wed":["08:00","18:00"]"#));
        assert!(json.ends_with(r#""Sun":["08:00"]}"#));

        let decoded: AvailabilityMap = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, forward);
    }

    #[test]
    fn test_window_days() {
        let w = PlanningWindow::new(d(5, 1), d(5, 20), d(5, 10));
        assert_eq!(w.day_count(), 20);
        assert_eq!(w.dates().next(), Some(d(5, 1)));
        assert_eq!(w.dates().last(), Some(d(5, 20)));
        assert_eq!(w.ordinal(d(5, 10)), Some(9));
        assert_eq!(w.ordinal(d(4, 30)), None);
        assert_eq!(w.date_at(19), Some(d(5, 20)));
        assert_eq!(w.date_at(20), None);
        assert!(w.is_early(d(5, 9)));
        assert!(!w.is_early(d(5, 10)));
    }

    #[test]
    fn test_window_inverted_has_no_days() {
        let w = PlanningWindow::new(d(5, 20), d(5, 1), d(5, 10));
        assert_eq!(w.day_count(), 0);
        assert_eq!(w.dates().count(), 0);
        assert!(w.check().is_err());
    }

    #[test]
    fn test_window_clamped() {
        let w = PlanningWindow::new(d(5, 1), d(5, 20), d(6, 1)).clamped();
        assert_eq!(w.intensive_cutover, d(5, 20));

        let w = PlanningWindow::new(d(5, 1), d(5, 20), d(4, 1)).clamped();
        assert_eq!(w.intensive_cutover, d(5, 1));

        let w = PlanningWindow::new(d(5, 20), d(5, 1), d(6, 1)).clamped();
        assert_eq!(w.intensive_cutover, d(5, 20));
        assert_eq!(w.day_count(), 0);
    }

    #[test]
    fn test_window_try_new() {
        assert!(PlanningWindow::try_new(d(5, 1), d(5, 20), d(5, 10)).is_ok());
        assert!(matches!(
            PlanningWindow::try_new(d(5, 1), d(5, 20), d(5, 21)),
            Err(PlannerError::CutoverOutsideWindow { .. })
        ));
        assert!(matches!(
            PlanningWindow::try_new(d(5, 20), d(5, 1), d(5, 10)),
            Err(PlannerError::WindowEndsBeforeStart { .. })
        ));
    }
}
