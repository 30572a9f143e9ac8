//! Teacher-to-subject assignment by greedy set cover.
//!
//! Given a set of required subjects and a roster of teachers, each able to
//! teach some subjects, selects teachers one at a time until every subject
//! is covered exactly once. Each step picks the teacher covering the most
//! uncovered subjects; ties go to the youngest, then to roster order.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Teacher`, `Schedule`, `Placement`,
//!   `ScheduleOutcome`, `Infeasible`, `Violation`
//! - **`selection`**: Tie-break rules and the `SelectionPolicy`
//! - **`scheduler`**: `GreedyCoverScheduler`, `ScheduleRequest`, `CoverageKpi`
//! - **`validation`**: Optional roster checks (duplicates, uncoverable subjects)
//! - **`error`**: `ScheduleError` for `Result`-based callers
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use u_roster::models::{ScheduleOutcome, Teacher};
//! use u_roster::scheduler::create_schedule;
//!
//! let subjects: HashSet<String> = ["Math", "Physics", "Chemistry"].map(String::from).into();
//! let teachers: Vec<Teacher> = vec![
//!     Teacher::new("Ivan", "Petrov", 35, "ivan@example.com", ["Math"]),
//!     Teacher::new("Maria", "Sydorenko", 30, "maria@example.com", ["Math", "Physics"])
//!         .with_subject("Chemistry"),
//! ];
//!
//! match create_schedule(&subjects, &teachers) {
//!     ScheduleOutcome::Scheduled(schedule) => {
//!         assert_eq!(schedule.len(), 1);
//!         assert_eq!(schedule.placements[0].teacher.first_name, "Maria");
//!     }
//!     ScheduleOutcome::Infeasible(inf) => panic!("uncovered: {:?}", inf.uncovered),
//! }
//! ```
//!
//! # References
//!
//! - Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"
//! - Vazirani (2001), "Approximation Algorithms", Ch. 2

pub mod error;
pub mod models;
pub mod scheduler;
pub mod selection;
pub mod validation;
