//! Teacher model.
//!
//! A teacher carries identity data, a fixed capability set (the subjects
//! they are able to teach) and an assignment set filled in by the scheduler.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

use super::Subject;

/// A teacher on the roster.
///
/// `can_teach_subjects` is fixed at construction. `assigned_subjects` starts
/// empty; a scheduled copy holds exactly the subjects the teacher was given.
/// Age and email are stored as given, without validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize",
    deserialize = "S: Deserialize<'de> + Eq + Hash"
))]
pub struct Teacher<S = String> {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years.
    pub age: u32,
    /// Contact email (unvalidated).
    pub email: String,
    /// Subjects this teacher is able to teach.
    pub can_teach_subjects: HashSet<S>,
    /// Subjects this teacher was assigned. Empty until scheduled.
    #[serde(default = "HashSet::new")]
    pub assigned_subjects: HashSet<S>,
}

impl<S: Subject> Teacher<S> {
    /// Creates a teacher with no assignments.
    pub fn new<I>(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
        can_teach: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<S>,
    {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            email: email.into(),
            can_teach_subjects: can_teach.into_iter().map(Into::into).collect(),
            assigned_subjects: HashSet::new(),
        }
    }

    /// Adds a subject to the capability set.
    pub fn with_subject(mut self, subject: impl Into<S>) -> Self {
        self.can_teach_subjects.insert(subject.into());
        self
    }

    /// Adds several subjects to the capability set.
    pub fn with_subjects<I>(mut self, subjects: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<S>,
    {
        self.can_teach_subjects
            .extend(subjects.into_iter().map(Into::into));
        self
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this teacher is able to teach the subject.
    pub fn can_teach(&self, subject: &S) -> bool {
        self.can_teach_subjects.contains(subject)
    }

    /// Number of subjects in `subjects` this teacher is able to teach.
    pub fn coverage_of(&self, subjects: &HashSet<S>) -> usize {
        // Iterate the smaller side.
        if self.can_teach_subjects.len() <= subjects.len() {
            self.can_teach_subjects
                .iter()
                .filter(|s| subjects.contains(*s))
                .count()
        } else {
            subjects
                .iter()
                .filter(|s| self.can_teach_subjects.contains(*s))
                .count()
        }
    }

    /// The subset of `subjects` this teacher is able to teach.
    pub fn teachable_in(&self, subjects: &HashSet<S>) -> HashSet<S> {
        self.can_teach_subjects
            .intersection(subjects)
            .cloned()
            .collect()
    }

    /// Whether any subject has been assigned.
    pub fn is_assigned(&self) -> bool {
        !self.assigned_subjects.is_empty()
    }

    /// Returns a copy carrying the given assignment.
    pub(crate) fn assigned(&self, subjects: HashSet<S>) -> Self {
        Self {
            assigned_subjects: subjects,
            ..self.clone()
        }
    }
}
