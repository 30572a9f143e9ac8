//! Greedy set-cover scheduler.
//!
//! # Algorithm
//!
//! 1. Start with `remaining` = required subjects.
//! 2. Score every unselected teacher by `|can_teach ∩ remaining|`.
//! 3. Pick the best by the selection policy (coverage, then tie-break rules,
//!    then roster order).
//! 4. If the best coverage is zero, stop: the roster is infeasible.
//! 5. Assign the teacher exactly the subjects it newly covers, drop them from
//!    `remaining`, and repeat until nothing remains.
//!
//! Not optimal: greedy set cover is an `H(n)`-approximation of the minimum
//! number of teachers.
//!
//! # Complexity
//! O(t² · s) where t = teachers, s = subjects. The loop runs at most t times.
//!
//! # Reference
//! Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;
use tracing::{debug, trace};

use crate::models::{Infeasible, Placement, Schedule, ScheduleOutcome, Subject, Teacher};
use crate::selection::{Candidate, SelectionPolicy, TieBreakRule};

/// Input container for scheduling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize",
    deserialize = "S: Deserialize<'de> + Eq + Hash"
))]
pub struct ScheduleRequest<S = String> {
    /// Subjects that must each be covered by exactly one teacher.
    pub subjects: HashSet<S>,
    /// Available teachers, in roster order.
    pub teachers: Vec<Teacher<S>>,
}

impl<S: Subject> ScheduleRequest<S> {
    /// Creates a new schedule request.
    pub fn new(subjects: HashSet<S>, teachers: Vec<Teacher<S>>) -> Self {
        Self { subjects, teachers }
    }

    /// Adds a required subject.
    pub fn with_subject(mut self, subject: impl Into<S>) -> Self {
        self.subjects.insert(subject.into());
        self
    }

    /// Adds a teacher to the end of the roster.
    pub fn with_teacher(mut self, teacher: Teacher<S>) -> Self {
        self.teachers.push(teacher);
        self
    }
}

impl<S> Default for ScheduleRequest<S> {
    fn default() -> Self {
        Self {
            subjects: HashSet::new(),
            teachers: Vec::new(),
        }
    }
}

/// Greedy set-cover scheduler.
///
/// Repeatedly selects the teacher covering the most uncovered subjects.
/// The roster is borrowed immutably; selected teachers are returned as
/// copies with `assigned_subjects` populated.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use u_roster::models::Teacher;
/// use u_roster::scheduler::GreedyCoverScheduler;
///
/// let subjects: HashSet<String> = ["Math", "Physics"].map(String::from).into();
/// let teachers: Vec<Teacher> = vec![
///     Teacher::new("Ivan", "Petrov", 35, "ivan@example.com", ["Math", "Physics"]),
/// ];
///
/// let outcome = GreedyCoverScheduler::new().schedule(&subjects, &teachers);
/// let schedule = outcome.into_schedule().unwrap();
/// assert_eq!(schedule.len(), 1);
/// assert_eq!(schedule.placements[0].teacher.assigned_subjects, subjects);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyCoverScheduler {
    policy: SelectionPolicy,
}

impl GreedyCoverScheduler {
    /// Creates a scheduler with the default policy (youngest, then roster order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection policy.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Appends a tie-break rule to the current policy.
    pub fn with_tie_breaker<R: TieBreakRule + 'static>(mut self, rule: R) -> Self {
        self.policy = self.policy.with_tie_breaker(rule);
        self
    }

    /// The active selection policy.
    pub fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    /// Covers `required` with teachers from `teachers`.
    ///
    /// Returns `Scheduled` with an empty schedule when nothing is required,
    /// and `Infeasible` when some subjects cannot be covered by the roster.
    /// Neither argument is modified.
    pub fn schedule<S: Subject>(
        &self,
        required: &HashSet<S>,
        teachers: &[Teacher<S>],
    ) -> ScheduleOutcome<S> {
        let mut schedule = Schedule::new();
        if required.is_empty() {
            return ScheduleOutcome::Scheduled(schedule);
        }

        let mut remaining = required.clone();
        let mut available: Vec<usize> = (0..teachers.len()).collect();

        while !remaining.is_empty() {
            let candidates: Vec<Candidate<'_>> = available
                .iter()
                .map(|&i| Candidate::new(i, &teachers[i], &remaining))
                .collect();
            trace!(
                candidates = candidates.len(),
                remaining = remaining.len(),
                "scoring roster"
            );

            let best = match self.policy.select(&candidates) {
                Some(c) if c.coverage > 0 => c.roster_index,
                _ => {
                    debug!(
                        uncovered = remaining.len(),
                        selected = schedule.len(),
                        "no remaining teacher covers the uncovered subjects"
                    );
                    return ScheduleOutcome::Infeasible(Infeasible {
                        uncovered: remaining,
                        partial: schedule,
                    });
                }
            };

            available.retain(|&i| i != best);
            let teacher = &teachers[best];
            let assigned = teacher.teachable_in(&remaining);
            remaining.retain(|s| !assigned.contains(s));

            debug!(
                roster_index = best,
                teacher = %teacher.full_name(),
                covered = assigned.len(),
                remaining = remaining.len(),
                "selected teacher"
            );
            schedule.add_placement(Placement::new(best, teacher.assigned(assigned)));
        }

        ScheduleOutcome::Scheduled(schedule)
    }

    /// Schedules from a request.
    pub fn schedule_request<S: Subject>(&self, request: &ScheduleRequest<S>) -> ScheduleOutcome<S> {
        self.schedule(&request.subjects, &request.teachers)
    }
}

/// Covers `required` with the default scheduler.
///
/// Shorthand for `GreedyCoverScheduler::new().schedule(required, teachers)`.
pub fn create_schedule<S: Subject>(
    required: &HashSet<S>,
    teachers: &[Teacher<S>],
) -> ScheduleOutcome<S> {
    GreedyCoverScheduler::new().schedule(required, teachers)
}
