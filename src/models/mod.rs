//! Roster domain models.
//!
//! Provides the data types for teacher-to-subject assignment problems and
//! their solutions.
//!
//! # Domain Mappings
//!
//! | u-roster | School | Clinic | Support desk |
//! |----------|--------|--------|--------------|
//! | Subject | Course | Specialty | Product area |
//! | Teacher | Teacher | Doctor | Agent |
//! | Schedule | Staffing plan | On-call roster | Rotation |

mod schedule;
mod subject;
mod teacher;

pub use schedule::{Infeasible, Placement, Schedule, ScheduleOutcome, Violation, ViolationType};
pub use subject::Subject;
pub use teacher::Teacher;
