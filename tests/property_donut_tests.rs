use progress_charts::api::build_donut_chart;
use progress_charts::core::{GradedOutcome, ProjectResult, tally_outcomes};
use proptest::prelude::*;

fn grade_strategy() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        4 => (0.0f64..2.0).prop_map(Some),
        1 => Just(None),
    ]
}

proptest! {
    #[test]
    fn tally_counts_every_outcome(grades in proptest::collection::vec(grade_strategy(), 0..64)) {
        let outcomes: Vec<GradedOutcome> = grades.iter().copied().map(GradedOutcome::new).collect();
        let tally = tally_outcomes(&outcomes);
        prop_assert_eq!(tally.total() as usize, grades.len());

        let expected_pass = grades.iter().filter(|grade| matches!(grade, Some(g) if *g >= 1.0)).count();
        prop_assert_eq!(tally.pass_count as usize, expected_pass);
    }

    #[test]
    fn center_label_is_rounded_pass_percentage(
        grades in proptest::collection::vec(0.0f64..2.0, 1..48)
    ) {
        let results: Vec<ProjectResult> = grades.iter().copied().map(ProjectResult::graded).collect();
        let chart = build_donut_chart(&results, 800.0, &Default::default(), &Default::default())
            .expect("donut");

        let passes = grades.iter().filter(|grade| **grade >= 1.0).count() as f64;
        let expected = format!("{}%", (passes / grades.len() as f64 * 100.0).round() as u32);
        let center = chart.root.find_group("center-label").expect("center label");
        prop_assert_eq!(center.texts()[0], expected.as_str());
    }
}
