//! Error types.

use thiserror::Error;

/// Result type alias using [`ScheduleError`].
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors reported when a scheduling outcome is converted into a `Result`.
///
/// The scheduler itself never fails; infeasibility is a regular
/// [`ScheduleOutcome`](crate::models::ScheduleOutcome) variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The roster cannot cover every required subject.
    #[error(
        "{} required subject(s) cannot be covered by the roster: {}",
        .uncovered.len(),
        .uncovered.join(", ")
    )]
    Infeasible {
        /// Uncovered subjects in `Debug` form, sorted.
        uncovered: Vec<String>,
    },
}
