//! Coverage quality metrics (KPIs).
//!
//! Computes summary indicators from a completed schedule and the subject set
//! it was built for.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Teachers Used | Number of placements |
//! | Coverage Rate | Covered required subjects / required subjects |
//! | Avg Load | Mean subjects per selected teacher |
//! | Max Load | Largest single assignment |
//! | Roster Utilization | Teachers used / roster size |
//! | Exact Cover | Every required subject assigned exactly once |

use std::collections::HashSet;

use crate::models::{Schedule, Subject};

/// Schedule coverage indicators.
#[derive(Debug, Clone)]
pub struct CoverageKpi {
    /// Number of selected teachers.
    pub teachers_used: usize,
    /// Number of required subjects.
    pub subjects_required: usize,
    /// Number of required subjects with a teacher.
    pub subjects_covered: usize,
    /// Fraction of required subjects covered (0.0..1.0).
    pub coverage_rate: f64,
    /// Mean number of subjects per selected teacher.
    pub avg_load: f64,
    /// Largest number of subjects given to one teacher.
    pub max_load: usize,
    /// Fraction of the roster that was selected (0.0..1.0).
    pub roster_utilization: f64,
    /// Whether the schedule is an exact cover of the required subjects.
    pub is_exact_cover: bool,
}

impl CoverageKpi {
    /// Computes KPIs for a schedule.
    ///
    /// # Arguments
    /// * `schedule` - The completed (or partial) schedule.
    /// * `required` - The subjects that had to be covered.
    /// * `roster_size` - Number of teachers that were available.
    pub fn calculate<S: Subject>(
        schedule: &Schedule<S>,
        required: &HashSet<S>,
        roster_size: usize,
    ) -> Self {
        let teachers_used = schedule.len();
        let covered = schedule.covered_subjects();
        let subjects_covered = required.iter().filter(|s| covered.contains(*s)).count();

        let coverage_rate = if required.is_empty() {
            1.0
        } else {
            subjects_covered as f64 / required.len() as f64
        };

        let loads: Vec<usize> = schedule
            .teachers()
            .map(|t| t.assigned_subjects.len())
            .collect();
        let max_load = loads.iter().copied().max().unwrap_or(0);
        let avg_load = if loads.is_empty() {
            0.0
        } else {
            loads.iter().sum::<usize>() as f64 / loads.len() as f64
        };

        let roster_utilization = if roster_size == 0 {
            0.0
        } else {
            teachers_used as f64 / roster_size as f64
        };

        Self {
            teachers_used,
            subjects_required: required.len(),
            subjects_covered,
            coverage_rate,
            avg_load,
            max_load,
            roster_utilization,
            is_exact_cover: schedule.is_exact_cover(required),
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_teachers: usize, min_coverage: f64) -> bool {
        self.teachers_used <= max_teachers && self.coverage_rate >= min_coverage
    }
}
