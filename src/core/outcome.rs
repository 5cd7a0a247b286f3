use crate::core::{GradedOutcome, OutcomeTally, ProjectResult};

/// A grade of at least 1 is a pass; zero and missing grades fail.
#[must_use]
pub fn is_pass(outcome: GradedOutcome) -> bool {
    outcome.grade.is_some_and(|grade| grade >= 1.0)
}

/// Tallies outcomes; anything that is not a pass counts as a fail.
#[must_use]
pub fn tally_outcomes(outcomes: &[GradedOutcome]) -> OutcomeTally {
    outcomes
        .iter()
        .fold(OutcomeTally::default(), |mut tally, outcome| {
            if is_pass(*outcome) {
                tally.pass_count += 1;
            } else {
                tally.fail_count += 1;
            }
            tally
        })
}

impl From<&ProjectResult> for GradedOutcome {
    fn from(result: &ProjectResult) -> Self {
        Self::new(result.grade)
    }
}
