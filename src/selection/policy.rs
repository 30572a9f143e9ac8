//! Selection policy: coverage first, then tie-break rules, then roster order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, Candidate, TieBreakRule};

/// Orders candidates for the greedy scheduler.
///
/// Comparison is lexicographic:
/// 1. Higher coverage of the remaining subjects wins.
/// 2. Tie-break rules in insertion order; lower score wins.
/// 3. Earlier roster index wins.
///
/// Step 3 makes the choice deterministic for a fixed roster order.
///
/// # Example
/// ```
/// use u_roster::selection::{Candidate, SelectionPolicy};
///
/// let a = Candidate { roster_index: 0, first_name: "A", last_name: "", email: "",
///                     age: 45, capability_count: 2, coverage: 2 };
/// let b = Candidate { roster_index: 1, first_name: "B", last_name: "", email: "",
///                     age: 30, capability_count: 2, coverage: 2 };
///
/// let best = SelectionPolicy::default().select(&[a, b]).unwrap();
/// assert_eq!(best.first_name, "B");
/// ```
#[derive(Clone)]
pub struct SelectionPolicy {
    rules: Vec<Arc<dyn TieBreakRule>>,
    epsilon: f64,
}

impl SelectionPolicy {
    /// Creates a policy with no tie-break rules (coverage, then roster order).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Appends a tie-break rule.
    pub fn with_tie_breaker<R: TieBreakRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the tie-break rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Compares two candidates; `Less` means `a` is preferred.
    pub fn compare(&self, a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
        match b.coverage.cmp(&a.coverage) {
            Ordering::Equal => {}
            ord => return ord,
        }

        for rule in &self.rules {
            let score_a = rule.evaluate(a);
            let score_b = rule.evaluate(b);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        a.roster_index.cmp(&b.roster_index)
    }

    /// Returns the preferred candidate, or `None` if there are none.
    pub fn select<'a>(&self, candidates: &[Candidate<'a>]) -> Option<Candidate<'a>> {
        candidates.iter().min_by(|a, b| self.compare(a, b)).copied()
    }

    /// Sorts candidates from most to least preferred.
    pub fn rank(&self, candidates: &mut [Candidate<'_>]) {
        candidates.sort_by(|a, b| self.compare(a, b));
    }
}

impl Default for SelectionPolicy {
    /// Youngest first, then roster order.
    fn default() -> Self {
        Self::new().with_tie_breaker(rules::Youngest)
    }
}

impl std::fmt::Debug for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionPolicy")
            .field("rules", &self.rule_names())
            .finish()
    }
}
