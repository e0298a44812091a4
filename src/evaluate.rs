use std::time::Instant;

use tracing::debug;

use crate::{EvaluationReport, Record, Relation, Rule, RuleError, RuleOutcome};

/// Evaluate every rule, in order, without short-circuiting.
fn results(rules: &[&Rule], record: &Record) -> Result<Vec<bool>, RuleError> {
    rules
        .iter()
        .map(|rule| {
            rule.evaluate(record).map_err(|source| RuleError::Operator {
                rule: rule.description(),
                source,
            })
        })
        .collect()
}

pub(crate) fn evaluate(
    rules: &[&Rule],
    relation: Relation,
    record: &Record,
) -> Result<bool, RuleError> {
    let results = results(rules, record)?;
    let verdict = relation.combine(&results);
    debug!(%relation, rules = rules.len(), verdict, "rule group evaluated");
    Ok(verdict)
}

pub(crate) fn evaluate_with_details(
    rules: &[&Rule],
    record: &Record,
) -> Result<Vec<RuleOutcome>, RuleError> {
    let results = results(rules, record)?;
    Ok(rules
        .iter()
        .zip(results)
        .map(|(rule, passed)| RuleOutcome::new(rule.description(), passed))
        .collect())
}

pub(crate) fn evaluate_detailed(
    rules: &[&Rule],
    relation: Relation,
    record: &Record,
) -> Result<EvaluationReport, RuleError> {
    let start = Instant::now();
    let results = results(rules, record)?;
    let verdict = relation.combine(&results);
    let outcomes = rules
        .iter()
        .zip(results)
        .map(|(rule, passed)| RuleOutcome::new(rule.description(), passed))
        .collect();
    let duration = start.elapsed();
    debug!(%relation, rules = rules.len(), verdict, ?duration, "rule group evaluated");
    Ok(EvaluationReport::new(relation, verdict, outcomes, duration))
}
