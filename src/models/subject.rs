//! Subject selection model.
//!
//! Subjects are opaque names. A selection is a set: membership is what the
//! learner chose. Insertion order is kept only as a deterministic tie-break
//! for the deadline index.

use serde::{Deserialize, Serialize};

/// Insertion-ordered set of selected subjects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectSelection {
    subjects: Vec<String>,
}

impl SubjectSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subject (no-op if already selected).
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.insert(subject);
        self
    }

    /// Adds a subject. Returns `true` if it was not selected before.
    pub fn insert(&mut self, subject: impl Into<String>) -> bool {
        let subject = subject.into();
        if self.contains(&subject) {
            return false;
        }
        self.subjects.push(subject);
        true
    }

    /// Removes a subject. Returns `true` if it was selected.
    pub fn remove(&mut self, subject: &str) -> bool {
        let before = self.subjects.len();
        self.subjects.retain(|s| s != subject);
        self.subjects.len() != before
    }

    /// Flips membership of a subject. Returns the new membership state.
    pub fn toggle(&mut self, subject: &str) -> bool {
        if self.remove(subject) {
            false
        } else {
            self.subjects.push(subject.to_string());
            true
        }
    }

    /// Whether the subject is selected.
    pub fn contains(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }

    /// Selected subjects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(String::as_str)
    }

    /// Number of selected subjects.
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SubjectSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for subject in iter {
            selection.insert(subject);
        }
        selection
    }
}
