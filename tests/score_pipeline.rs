use culture_scores::scoring::rules::{self, EvaluationResult, RuleType};
use culture_scores::scoring::{Culture, RawScore, ScoreInput};

fn input(collaborate: u32, create: u32, compete: u32, control: u32) -> ScoreInput {
    ScoreInput {
        collaborate,
        create,
        compete,
        control,
    }
}

#[test]
fn pipeline_scales_ranks_and_preserves_field_mapping() {
    let raw = RawScore::new(&input(1, 2, 3, 4));

    // Field-mapping regression: each input field lands on its own culture.
    assert_eq!(raw.compete.value, 3);
    assert_eq!(raw.compete.culture, Culture::Compete);
    assert_eq!(raw.control.value, 4);
    assert_eq!(raw.control.culture, Culture::Control);

    let scaled = raw.scale().expect("non-zero score scales");
    assert_eq!(scaled.control.value, 100.0);
    assert_eq!(scaled.compete.value, 75.0);
    assert_eq!(scaled.create.value, 50.0);
    assert_eq!(scaled.collaborate.value, 25.0);

    let ranked = scaled.rank();
    assert_eq!(ranked.first.culture, Culture::Control);
    assert_eq!(ranked.second.culture, Culture::Compete);
    assert_eq!(ranked.third.culture, Culture::Create);
    assert_eq!(ranked.fourth.culture, Culture::Collaborate);
}

#[test]
fn maximum_quadrant_always_scales_to_exactly_100() {
    let cases = [
        input(17, 3, 5, 7),
        input(0, 1, 0, 0),
        input(250, 250, 125, 60),
        input(3, 9, 81, 27),
    ];

    for case in cases {
        let raw = RawScore::new(&case);
        let max = raw.max_value();
        let scaled = raw.scale().expect("non-zero score scales");
        let top = scaled
            .entries()
            .into_iter()
            .max_by(|a, b| a.value.total_cmp(&b.value))
            .expect("four entries");
        assert_eq!(top.value, 100.0, "max quadrant must scale to 100 ({case:?})");

        for entry in scaled.entries() {
            assert!(entry.value >= 0.0 && entry.value <= 100.0);
        }
        assert!(max > 0);
    }
}

#[test]
fn ranked_values_never_increase_from_first_to_fourth() {
    let ranked = RawScore::new(&input(6, 6, 2, 9))
        .scale()
        .expect("scales")
        .rank();

    let values: Vec<f64> = ranked
        .positions()
        .iter()
        .map(|(_, score)| score.value)
        .collect();
    assert!(values.windows(2).all(|pair| pair[0] >= pair[1]));

    // 6 and 6 tie: Create outranks Collaborate under the fixed precedence.
    assert_eq!(ranked.second.culture, Culture::Create);
    assert_eq!(ranked.third.culture, Culture::Collaborate);
}

#[test]
fn repeated_processing_is_byte_identical() {
    let raw = RawScore::new(&input(13, 29, 7, 31));

    let first_pass = serde_json::to_string(&raw.scale().expect("scales").rank())
        .expect("ranked score serializes");
    let second_pass = serde_json::to_string(&raw.scale().expect("scales").rank())
        .expect("ranked score serializes");

    assert_eq!(first_pass, second_pass);
}

#[test]
fn rule_verdicts_follow_the_documented_policy() {
    let verdicts = |score: ScoreInput| {
        rules::evaluate(&RawScore::new(&score))
            .into_iter()
            .map(|outcome| (outcome.name, outcome.result))
            .collect::<Vec<_>>()
    };

    assert_eq!(
        verdicts(input(0, 0, 0, 0)),
        vec![
            (RuleType::AllZeros, EvaluationResult::Applied),
            (RuleType::AllLowScore, EvaluationResult::FailedChecks),
        ]
    );

    assert_eq!(
        verdicts(input(5, 5, 5, 1)),
        vec![
            (RuleType::AllZeros, EvaluationResult::FailedChecks),
            (RuleType::AllLowScore, EvaluationResult::Applied),
        ]
    );

    // A single high value is not a low quadrant.
    assert_eq!(
        verdicts(input(5, 55, 5, 5)),
        vec![
            (RuleType::AllZeros, EvaluationResult::FailedChecks),
            (RuleType::AllLowScore, EvaluationResult::FailedChecks),
        ]
    );
}
