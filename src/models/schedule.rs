//! Schedule (solution) model.
//!
//! A schedule is the ordered list of teachers picked by the scheduler, each
//! paired with the subjects it was given. A schedule can be audited against a
//! required subject set, producing violations for gaps or double-booking.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::{Subject, Teacher};
use crate::error::ScheduleError;

/// A teacher selected by the scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize",
    deserialize = "S: Deserialize<'de> + Eq + Hash"
))]
pub struct Placement<S = String> {
    /// Position of the teacher in the input roster.
    pub roster_index: usize,
    /// The selected teacher, with `assigned_subjects` populated.
    pub teacher: Teacher<S>,
}

/// A complete schedule, in selection order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize",
    deserialize = "S: Deserialize<'de> + Eq + Hash"
))]
pub struct Schedule<S = String> {
    /// Selected teachers (first selected first).
    pub placements: Vec<Placement<S>>,
}

/// Outcome of a scheduling run.
///
/// `Scheduled` with an empty schedule is a success (nothing was required)
/// and is distinct from `Infeasible`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize",
    deserialize = "S: Deserialize<'de> + Eq + Hash"
))]
pub enum ScheduleOutcome<S = String> {
    /// Every required subject is covered exactly once.
    Scheduled(Schedule<S>),
    /// Some required subjects cannot be covered by the roster.
    Infeasible(Infeasible<S>),
}

/// Details of an infeasible run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize",
    deserialize = "S: Deserialize<'de> + Eq + Hash"
))]
pub struct Infeasible<S = String> {
    /// Subjects still uncovered when no remaining teacher could cover any of them.
    pub uncovered: HashSet<S>,
    /// Teachers selected before the run stalled.
    pub partial: Schedule<S>,
}

/// A problem found when auditing a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Roster index of the offending teacher, if one is involved.
    pub roster_index: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A required subject has no teacher.
    Uncovered,
    /// A subject is assigned to more than one teacher.
    DoubleBooked,
    /// A teacher is assigned a subject outside their capability set.
    NotQualified,
    /// A selected teacher has nothing assigned.
    EmptyAssignment,
    /// A teacher is assigned a subject that was not required.
    Extraneous,
}

impl<S> Placement<S> {
    /// Creates a placement.
    pub fn new(roster_index: usize, teacher: Teacher<S>) -> Self {
        Self {
            roster_index,
            teacher,
        }
    }
}

impl<S> Default for Schedule<S> {
    fn default() -> Self {
        Self {
            placements: Vec::new(),
        }
    }
}

impl<S: Subject> Schedule<S> {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a placement.
    pub fn add_placement(&mut self, placement: Placement<S>) {
        self.placements.push(placement);
    }

    /// Number of selected teachers.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether no teacher was selected.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Selected teachers in selection order.
    pub fn teachers(&self) -> impl Iterator<Item = &Teacher<S>> {
        self.placements.iter().map(|p| &p.teacher)
    }

    /// Roster indices in selection order.
    pub fn roster_indices(&self) -> Vec<usize> {
        self.placements.iter().map(|p| p.roster_index).collect()
    }

    /// Finds the placement that was assigned a subject.
    pub fn placement_for(&self, subject: &S) -> Option<&Placement<S>> {
        self.placements
            .iter()
            .find(|p| p.teacher.assigned_subjects.contains(subject))
    }

    /// Finds the teacher assigned to a subject.
    pub fn teacher_for(&self, subject: &S) -> Option<&Teacher<S>> {
        self.placement_for(subject).map(|p| &p.teacher)
    }

    /// Union of all assigned subjects.
    pub fn covered_subjects(&self) -> HashSet<S> {
        self.teachers()
            .flat_map(|t| t.assigned_subjects.iter().cloned())
            .collect()
    }

    /// Total number of assignments, counting duplicates.
    pub fn assignment_count(&self) -> usize {
        self.teachers().map(|t| t.assigned_subjects.len()).sum()
    }

    /// Writes each placement's assignment into the caller's roster.
    ///
    /// Only the selected teachers are touched. A placement is skipped when
    /// its roster index is out of range, when the entry there is a different
    /// teacher (first name, last name or email differ), or when the entry
    /// cannot teach every subject in the assignment.
    ///
    /// Returns the number of roster entries written.
    pub fn apply_to(&self, roster: &mut [Teacher<S>]) -> usize {
        let mut applied = 0;
        for p in &self.placements {
            let Some(t) = roster.get_mut(p.roster_index) else {
                continue;
            };
            let same_teacher = t.first_name == p.teacher.first_name
                && t.last_name == p.teacher.last_name
                && t.email == p.teacher.email;
            let assigned = &p.teacher.assigned_subjects;
            if same_teacher && assigned.is_subset(&t.can_teach_subjects) {
                t.assigned_subjects = assigned.clone();
                applied += 1;
            }
        }
        applied
    }

    /// Audits the schedule against a required subject set.
    ///
    /// Returns every violation found; an exact cover yields none.
    pub fn violations(&self, required: &HashSet<S>) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut owner: HashMap<&S, usize> = HashMap::new();

        for p in &self.placements {
            let t = &p.teacher;
            if t.assigned_subjects.is_empty() {
                violations.push(Violation::new(
                    ViolationType::EmptyAssignment,
                    Some(p.roster_index),
                    format!("{} was selected with no subjects", t.full_name()),
                ));
            }

            for subject in &t.assigned_subjects {
                if !t.can_teach(subject) {
                    violations.push(Violation::new(
                        ViolationType::NotQualified,
                        Some(p.roster_index),
                        format!("{} cannot teach {subject:?}", t.full_name()),
                    ));
                }
                if !required.contains(subject) {
                    violations.push(Violation::new(
                        ViolationType::Extraneous,
                        Some(p.roster_index),
                        format!("{subject:?} was assigned but not required"),
                    ));
                }
                if let Some(first) = owner.insert(subject, p.roster_index) {
                    violations.push(Violation::new(
                        ViolationType::DoubleBooked,
                        Some(p.roster_index),
                        format!("{subject:?} already assigned to roster entry {first}"),
                    ));
                }
            }
        }

        for subject in required {
            if !owner.contains_key(subject) {
                violations.push(Violation::new(
                    ViolationType::Uncovered,
                    None,
                    format!("{subject:?} has no teacher"),
                ));
            }
        }

        violations
    }

    /// Whether every required subject is assigned to exactly one qualified teacher.
    pub fn is_exact_cover(&self, required: &HashSet<S>) -> bool {
        self.violations(required).is_empty()
    }
}

impl<S: Subject> ScheduleOutcome<S> {
    /// Whether the run succeeded.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Scheduled(_))
    }

    /// The schedule, if the run succeeded.
    pub fn schedule(&self) -> Option<&Schedule<S>> {
        match self {
            Self::Scheduled(s) => Some(s),
            Self::Infeasible(_) => None,
        }
    }

    /// Consumes the outcome, returning the schedule if the run succeeded.
    pub fn into_schedule(self) -> Option<Schedule<S>> {
        match self {
            Self::Scheduled(s) => Some(s),
            Self::Infeasible(_) => None,
        }
    }

    /// Converts into a `Result`, reporting infeasibility as an error.
    pub fn into_result(self) -> Result<Schedule<S>, ScheduleError> {
        match self {
            Self::Scheduled(s) => Ok(s),
            Self::Infeasible(inf) => {
                let mut uncovered: Vec<String> =
                    inf.uncovered.iter().map(|s| format!("{s:?}")).collect();
                uncovered.sort();
                Err(ScheduleError::Infeasible { uncovered })
            }
        }
    }
}

impl Violation {
    fn new(
        violation_type: ViolationType,
        roster_index: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            roster_index,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn placed(index: usize, can: &[&str], assigned: &[&str]) -> Placement {
        let t: Teacher = Teacher::new(format!("T{index}"), "X", 30, "", can.iter().copied());
        Placement::new(index, t.assigned(set(assigned)))
    }

    fn has_violation(v: &[Violation], ty: ViolationType, index: Option<usize>) -> bool {
        v.iter()
            .any(|x| x.violation_type == ty && x.roster_index == index)
    }

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_placement(placed(2, &["Math", "Physics"], &["Math", "Physics"]));
        s.add_placement(placed(0, &["Math", "Chemistry"], &["Chemistry"]));
        s
    }

    #[test]
    fn test_schedule_queries() {
        let s = sample_schedule();
        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());
        assert_eq!(s.roster_indices(), vec![2, 0]);
        assert_eq!(s.assignment_count(), 3);
        assert_eq!(s.covered_subjects(), set(&["Math", "Physics", "Chemistry"]));

        let (chemistry, math) = ("Chemistry".to_string(), "Math".to_string());
        assert_eq!(s.placement_for(&chemistry).unwrap().roster_index, 0);
        assert_eq!(s.teacher_for(&math).unwrap().first_name, "T2");
        assert!(s.teacher_for(&"Biology".to_string()).is_none());
    }

    #[test]
    fn test_exact_cover() {
        let s = sample_schedule();
        assert!(s.is_exact_cover(&set(&["Math", "Physics", "Chemistry"])));
    }

    #[test]
    fn test_violation_uncovered_and_extraneous() {
        let s = sample_schedule();
        let v = s.violations(&set(&["Math", "Physics", "Biology"]));

        assert!(has_violation(&v, ViolationType::Uncovered, None));
        assert!(has_violation(&v, ViolationType::Extraneous, Some(0)));
    }

    #[test]
    fn test_violation_double_booked() {
        let mut s = sample_schedule();
        s.add_placement(placed(5, &["Math"], &["Math"]));

        let v = s.violations(&set(&["Math", "Physics", "Chemistry"]));
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].violation_type, ViolationType::DoubleBooked);
        assert_eq!(v[0].roster_index, Some(5));
    }

    #[test]
    fn test_violation_not_qualified_and_empty() {
        let mut s = Schedule::new();
        s.add_placement(placed(0, &["Math"], &["Art"]));
        s.add_placement(placed(1, &["Math"], &[]));

        let v = s.violations(&set(&["Art"]));
        assert!(has_violation(&v, ViolationType::NotQualified, Some(0)));
        assert!(has_violation(&v, ViolationType::EmptyAssignment, Some(1)));
    }

    #[test]
    fn test_apply_to_roster() {
        let s = sample_schedule();
        let mut roster: Vec<Teacher> = vec![
            Teacher::new("T0", "X", 30, "", ["Math", "Chemistry"]),
            Teacher::new("T1", "X", 30, "", ["Art"]),
            Teacher::new("T2", "X", 30, "", ["Math", "Physics"]),
        ];

        assert_eq!(s.apply_to(&mut roster), 2);
        assert_eq!(roster[0].assigned_subjects, set(&["Chemistry"]));
        assert!(roster[1].assigned_subjects.is_empty());
        assert_eq!(roster[2].assigned_subjects, set(&["Math", "Physics"]));
    }

    #[test]
    fn test_apply_to_short_roster_skips() {
        let s = sample_schedule();
        let mut roster: Vec<Teacher> = vec![Teacher::new("T0", "X", 30, "", ["Chemistry"])];
        assert_eq!(s.apply_to(&mut roster), 1);
        assert_eq!(roster[0].assigned_subjects, set(&["Chemistry"]));
    }

    #[test]
    fn test_apply_to_skips_mismatched_roster() {
        let mut s = Schedule::new();
        s.add_placement(placed(0, &["Math"], &["Math"]));

        // Different teacher at the same index, unable to teach Math.
        let mut other: Vec<Teacher> = vec![Teacher::new("Z", "X", 30, "", ["Art"])];
        assert_eq!(s.apply_to(&mut other), 0);
        assert!(other[0].assigned_subjects.is_empty());

        // Same capabilities, different identity.
        let mut renamed: Vec<Teacher> = vec![Teacher::new("T0", "Y", 30, "", ["Math"])];
        assert_eq!(s.apply_to(&mut renamed), 0);
        assert!(renamed[0].assigned_subjects.is_empty());

        // Same identity, capabilities no longer cover the assignment.
        let mut narrowed: Vec<Teacher> = vec![Teacher::new("T0", "X", 30, "", ["Art"])];
        assert_eq!(s.apply_to(&mut narrowed), 0);
        assert!(narrowed[0].assigned_subjects.is_empty());
    }

    #[test]
    fn test_outcome_helpers() {
        let ok: ScheduleOutcome = ScheduleOutcome::Scheduled(Schedule::new());
        assert!(ok.is_feasible());
        assert!(ok.schedule().unwrap().is_empty());
        assert!(ok.clone().into_result().is_ok());
        assert!(ok.into_schedule().is_some());

        let bad: ScheduleOutcome = ScheduleOutcome::Infeasible(Infeasible {
            uncovered: set(&["Biology", "Art"]),
            partial: sample_schedule(),
        });
        assert!(!bad.is_feasible());
        assert!(bad.schedule().is_none());
        let err = bad.clone().into_result().unwrap_err();
        let uncovered = vec!["\"Art\"".to_string(), "\"Biology\"".to_string()];
        assert_eq!(err, ScheduleError::Infeasible { uncovered });
        assert!(bad.into_schedule().is_none());
    }
}
