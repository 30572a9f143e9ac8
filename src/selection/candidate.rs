//! Candidate view used during one selection step.

use std::collections::HashSet;

use crate::models::{Subject, Teacher};

/// A teacher as seen by the selection policy at one greedy step.
///
/// Holds borrowed identity fields and the counts rules may score on, so
/// rules stay independent of the subject type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Position of the teacher in the input roster.
    pub roster_index: usize,
    /// Given name.
    pub first_name: &'a str,
    /// Family name.
    pub last_name: &'a str,
    /// Contact email.
    pub email: &'a str,
    /// Age in years.
    pub age: u32,
    /// Size of the teacher's capability set.
    pub capability_count: usize,
    /// How many still-uncovered subjects the teacher would cover.
    pub coverage: usize,
}

impl<'a> Candidate<'a> {
    /// Builds a candidate for `teacher` against the remaining subjects.
    pub fn new<S: Subject>(
        roster_index: usize,
        teacher: &'a Teacher<S>,
        remaining: &HashSet<S>,
    ) -> Self {
        Self {
            roster_index,
            first_name: &teacher.first_name,
            last_name: &teacher.last_name,
            email: &teacher.email,
            age: teacher.age,
            capability_count: teacher.can_teach_subjects.len(),
            coverage: teacher.coverage_of(remaining),
        }
    }
}
