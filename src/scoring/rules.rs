//! Diagnostic rules over a [`RawScore`]: stateless predicates that either
//! apply or fail their checks. New rules register in [`RULES`] and ride along
//! without touching the handlers.

use super::RawScore;
use serde::Serialize;

/// Two-valued verdict: the rule condition was met, or it was not. There is no
/// partial or error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EvaluationResult {
    Applied,
    FailedChecks,
}

/// Identifies which rule a verdict belongs to. Serialized verbatim on the
/// wire ("AllZeros", "AllLowScore").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleType {
    AllZeros,
    AllLowScore,
}

pub type Rule = fn(&RawScore) -> EvaluationResult;

/// Rule registry, walked in response order: AllZeros first, AllLowScore
/// second.
pub const RULES: [(RuleType, Rule); 2] = [
    (RuleType::AllZeros, check_all_zeros),
    (RuleType::AllLowScore, check_all_low_score),
];

/// A single rule verdict as returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub name: RuleType,
    pub result: EvaluationResult,
}

/// Run every registered rule against the score, in registry order.
pub fn evaluate(raw: &RawScore) -> Vec<RuleOutcome> {
    RULES
        .iter()
        .map(|(name, rule)| RuleOutcome {
            name: *name,
            result: rule(raw),
        })
        .collect()
}

/// Applied iff all four raw values are zero.
pub fn check_all_zeros(raw: &RawScore) -> EvaluationResult {
    if raw.entries().iter().all(|score| score.value == 0) {
        EvaluationResult::Applied
    } else {
        EvaluationResult::FailedChecks
    }
}

/// Applied iff at least one quadrant is disproportionately low: its raw value
/// falls strictly below half the median of all four values. Measuring against
/// the median rather than the maximum keeps a single high outlier from
/// dragging the remaining quadrants into "low" territory.
pub fn check_all_low_score(raw: &RawScore) -> EvaluationResult {
    let mut values = raw.entries().map(|score| score.value);
    values.sort_unstable();

    // value < median/2 with median = (mid1 + mid2) / 2, kept in integers as
    // 4*value < mid1 + mid2. Only the minimum can qualify.
    let median_doubled = u64::from(values[1]) + u64::from(values[2]);
    if 4 * u64::from(values[0]) < median_doubled {
        EvaluationResult::Applied
    } else {
        EvaluationResult::FailedChecks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreInput;

    fn raw(collaborate: u32, create: u32, compete: u32, control: u32) -> RawScore {
        RawScore::new(&ScoreInput {
            collaborate,
            create,
            compete,
            control,
        })
    }

    #[test]
    fn all_zeros_applies_only_to_the_zero_score() {
        assert_eq!(check_all_zeros(&raw(0, 0, 0, 0)), EvaluationResult::Applied);
        assert_eq!(
            check_all_zeros(&raw(0, 0, 0, 1)),
            EvaluationResult::FailedChecks
        );
        assert_eq!(
            check_all_zeros(&raw(5, 9, 5, 5)),
            EvaluationResult::FailedChecks
        );
    }

    #[test]
    fn low_score_flags_a_disproportionately_low_quadrant() {
        // Control at 1 against three 5s is well below half the median.
        assert_eq!(
            check_all_low_score(&raw(5, 5, 5, 1)),
            EvaluationResult::Applied
        );
    }

    #[test]
    fn low_score_ignores_a_single_high_outlier() {
        // One quadrant being high must not mark the equal remainder low.
        assert_eq!(
            check_all_low_score(&raw(5, 55, 5, 5)),
            EvaluationResult::FailedChecks
        );
        assert_eq!(
            check_all_low_score(&raw(5, 9, 5, 5)),
            EvaluationResult::FailedChecks
        );
    }

    #[test]
    fn low_score_boundary_sits_at_half_the_median() {
        // Exactly half the median is not low; just below it is.
        assert_eq!(
            check_all_low_score(&raw(2, 4, 4, 4)),
            EvaluationResult::FailedChecks
        );
        assert_eq!(
            check_all_low_score(&raw(1, 4, 4, 4)),
            EvaluationResult::Applied
        );
    }

    #[test]
    fn low_score_fails_checks_on_the_all_zero_score() {
        assert_eq!(
            check_all_low_score(&raw(0, 0, 0, 0)),
            EvaluationResult::FailedChecks
        );
    }

    #[test]
    fn evaluate_reports_rules_in_registry_order() {
        let outcomes = evaluate(&raw(0, 0, 0, 0));

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].name, RuleType::AllZeros);
        assert_eq!(outcomes[0].result, EvaluationResult::Applied);
        assert_eq!(outcomes[1].name, RuleType::AllLowScore);
        assert_eq!(outcomes[1].result, EvaluationResult::FailedChecks);
    }
}
