//! Tie-break rules and selection policy for the greedy scheduler.
//!
//! Coverage of the remaining subjects is always the primary selection key.
//! When several teachers cover equally many, the policy applies its
//! tie-break rules in order, and finally falls back to roster order.
//!
//! # Usage
//!
//! ```
//! use u_roster::selection::{rules, SelectionPolicy};
//!
//! // Default: youngest first, then roster order.
//! let policy = SelectionPolicy::default();
//! assert_eq!(policy.rule_names(), vec!["YOUNGEST"]);
//!
//! let policy = SelectionPolicy::new()
//!     .with_tie_breaker(rules::Specialist)
//!     .with_tie_breaker(rules::Oldest);
//! assert_eq!(policy.rule_names(), vec!["SPECIALIST", "OLDEST"]);
//! ```

mod candidate;
mod policy;
pub mod rules;

pub use candidate::Candidate;
pub use policy::SelectionPolicy;

use std::fmt::Debug;

/// Score returned by a tie-break rule.
///
/// Lower scores = preferred.
pub type RuleScore = f64;

/// A rule that orders candidates covering equally many subjects.
///
/// # Score Convention
/// **Lower score = preferred.** Rules return smaller values for the
/// teacher that should be picked first.
pub trait TieBreakRule: Send + Sync + Debug {
    /// Rule name (e.g., "YOUNGEST").
    fn name(&self) -> &'static str;

    /// Scores a candidate; lower wins.
    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
