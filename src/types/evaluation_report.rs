use std::fmt;
use std::time::Duration;

use super::outcome::RuleOutcome;
use super::relation::Relation;

/// Combined verdict plus per-rule breakdown, returned by
/// [`RuleGroup::evaluate_detailed()`](super::RuleGroup::evaluate_detailed).
///
/// The outcomes are the same entries
/// [`evaluate_with_details()`](super::RuleGroup::evaluate_with_details) returns;
/// the verdict is what [`evaluate()`](super::RuleGroup::evaluate) returns.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationReport {
    relation: Relation,
    verdict: bool,
    outcomes: Vec<RuleOutcome>,
    duration: Duration,
}

impl EvaluationReport {
    pub(crate) fn new(
        relation: Relation,
        verdict: bool,
        outcomes: Vec<RuleOutcome>,
        duration: Duration,
    ) -> Self {
        Self {
            relation,
            verdict,
            outcomes,
            duration,
        }
    }

    /// The relation the verdict was combined with.
    #[must_use]
    pub fn relation(&self) -> Relation {
        self.relation
    }

    #[must_use]
    pub fn verdict(&self) -> bool {
        self.verdict
    }

    /// Per-rule outcomes in input order.
    #[must_use]
    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.outcomes
    }

    /// Descriptions of the rules that passed, in input order.
    pub fn passed(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|o| o.passed())
            .map(RuleOutcome::description)
    }

    /// Descriptions of the rules that failed, in input order.
    pub fn failed(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|o| !o.passed())
            .map(RuleOutcome::description)
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "verdict: {} ({})", self.verdict, self.relation)?;
        write!(f, ", passed: [{}]", self.passed().collect::<Vec<_>>().join(", "))?;
        write!(f, ", failed: [{}]", self.failed().collect::<Vec<_>>().join(", "))?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
