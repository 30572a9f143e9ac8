//! Built-in tie-break rules.
//!
//! # Score Convention
//! All rules return lower scores for preferred candidates.

use super::{Candidate, RuleScore, TieBreakRule};

// ======================== Age ========================

/// Youngest teacher first. The default tie-breaker.
#[derive(Debug, Clone, Copy)]
pub struct Youngest;

impl TieBreakRule for Youngest {
    fn name(&self) -> &'static str {
        "YOUNGEST"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate.age as f64
    }

    fn description(&self) -> &'static str {
        "Youngest teacher first"
    }
}

/// Oldest teacher first.
#[derive(Debug, Clone, Copy)]
pub struct Oldest;

impl TieBreakRule for Oldest {
    fn name(&self) -> &'static str {
        "OLDEST"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        -(candidate.age as f64)
    }

    fn description(&self) -> &'static str {
        "Oldest teacher first"
    }
}

// ======================== Capability ========================

/// Fewest capabilities first.
///
/// Keeps broadly qualified teachers available for later steps.
#[derive(Debug, Clone, Copy)]
pub struct Specialist;

impl TieBreakRule for Specialist {
    fn name(&self) -> &'static str {
        "SPECIALIST"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate.capability_count as f64
    }

    fn description(&self) -> &'static str {
        "Fewest capabilities first"
    }
}

/// Most capabilities first.
#[derive(Debug, Clone, Copy)]
pub struct Generalist;

impl TieBreakRule for Generalist {
    fn name(&self) -> &'static str {
        "GENERALIST"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        -(candidate.capability_count as f64)
    }

    fn description(&self) -> &'static str {
        "Most capabilities first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(age: u32, capability_count: usize) -> Candidate<'static> {
        Candidate {
            roster_index: 0,
            first_name: "",
            last_name: "",
            email: "",
            age,
            capability_count,
            coverage: 1,
        }
    }

    #[test]
    fn test_youngest() {
        let young = Youngest.evaluate(&candidate(29, 1));
        let old = Youngest.evaluate(&candidate(50, 1));
        assert!(young < old);
    }

    #[test]
    fn test_oldest() {
        let young = Oldest.evaluate(&candidate(29, 1));
        let old = Oldest.evaluate(&candidate(50, 1));
        assert!(old < young);
    }

    #[test]
    fn test_specialist_and_generalist() {
        let narrow = candidate(40, 1);
        let broad = candidate(40, 4);
        assert!(Specialist.evaluate(&narrow) < Specialist.evaluate(&broad));
        assert!(Generalist.evaluate(&broad) < Generalist.evaluate(&narrow));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Youngest.name(), "YOUNGEST");
        assert_eq!(Oldest.name(), "OLDEST");
        assert_eq!(Specialist.name(), "SPECIALIST");
        assert_eq!(Generalist.name(), "GENERALIST");
        assert_eq!(Specialist.description(), "Fewest capabilities first");
    }
}
