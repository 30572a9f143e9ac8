//! Greedy set-cover scheduler and coverage KPIs.
//!
//! # Algorithm
//!
//! `GreedyCoverScheduler` repeatedly picks the teacher covering the most
//! still-uncovered subjects, breaking ties by the configured
//! [`SelectionPolicy`](crate::selection::SelectionPolicy). It is not optimal,
//! but gives a logarithmic-factor approximation of the smallest cover.
//!
//! # KPI
//!
//! `CoverageKpi` summarizes a schedule: teachers used, coverage rate,
//! load per teacher, and roster utilization.
//!
//! # References
//!
//! - Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"
//! - Johnson (1974), "Approximation Algorithms for Combinatorial Problems"

mod greedy;
mod kpi;

pub use greedy::{create_schedule, GreedyCoverScheduler, ScheduleRequest};
pub use kpi::CoverageKpi;
