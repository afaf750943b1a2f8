use mindguard_core::models::scale::ScaleId;
use mindguard_scales::error::ScaleError;
use mindguard_scales::scales::phq9::{self, Phq9};
use mindguard_scales::scales::pss10::Pss10;
use mindguard_scales::scoring::ValidationKind;
use mindguard_scales::{Scale, all_scales, get_scale, scale_for};

fn repeat(label: &str, n: usize) -> Vec<String> {
    vec![label.to_string(); n]
}

#[test]
fn definitions_match_published_parameters() {
    let expected = [
        (ScaleId::Phq9, 9, 4, 27, vec![]),
        (ScaleId::Gad7, 7, 4, 21, vec![]),
        (ScaleId::Pss10, 10, 5, 40, vec![3, 4, 6, 7]),
        (ScaleId::Mspss, 16, 5, 80, vec![]),
    ];

    for (id, items, options, max, reversed) in expected {
        let def = scale_for(id).definition().clone();
        assert_eq!(def.id, id);
        assert_eq!(def.items.len(), items, "{id} item count");
        assert_eq!(def.options.len(), options, "{id} option count");
        assert_eq!(def.max_score, max, "{id} max score");
        assert_eq!(def.reverse_indices.into_iter().collect::<Vec<_>>(), reversed);
    }
}

#[test]
fn option_values_are_contiguous() {
    for scale in all_scales() {
        let def = scale.definition();
        let base = if scale.id() == ScaleId::Mspss { 1 } else { 0 };
        let values: Vec<u32> = def.options.iter().map(|o| o.value).collect();
        let expected: Vec<u32> = (base..base + def.options.len() as u32).collect();
        assert_eq!(values, expected, "{}", scale.name());
        assert!(def.reverse_indices.iter().all(|i| *i < def.items.len()));
    }
}

#[test]
fn phq9_all_not_at_all_scores_zero() {
    let result = Phq9.score(&repeat("Not at all", 9)).unwrap();
    assert_eq!(result.total, 0);
    assert_eq!(result.per_item_scores, vec![0; 9]);
    assert_eq!(result.per_item_choices, repeat("Not at all", 9));
}

#[test]
fn gad7_all_nearly_every_day_scores_max() {
    let result = get_scale("gad7")
        .unwrap()
        .score(&repeat("Nearly every day", 7))
        .unwrap();
    assert_eq!(result.total, 21);
}

#[test]
fn pss10_all_sometimes_is_unchanged_by_reversal() {
    let result = Pss10.score(&repeat("Sometimes", 10)).unwrap();
    assert_eq!(result.per_item_scores, vec![2; 10]);
    assert_eq!(result.total, 20);
}

#[test]
fn pss10_reversed_item_inverts_value() {
    let mut responses = repeat("Never", 10);
    responses[3] = "Very Often".to_string();
    let result = Pss10.score(&responses).unwrap();
    assert_eq!(result.per_item_scores[3], 0);

    responses[3] = "Never".to_string();
    let result = Pss10.score(&responses).unwrap();
    assert_eq!(result.per_item_scores[3], 4);
}

#[test]
fn pss10_extremes() {
    // "Very Often" everywhere: six forward items at 4, four reversed at 0.
    let result = Pss10.score(&repeat("Very Often", 10)).unwrap();
    assert_eq!(result.total, 24);

    let result = Pss10.score(&repeat("Never", 10)).unwrap();
    assert_eq!(result.total, 16);
}

#[test]
fn mspss_uses_one_based_values_without_reversal() {
    let scale = scale_for(ScaleId::Mspss);

    let low = scale.score(&repeat("None of the time", 16)).unwrap();
    assert_eq!(low.total, 16);
    assert_eq!(low.average(), 1.0);

    let high = scale.score(&repeat("All of the time", 16)).unwrap();
    assert_eq!(high.total, 80);
    assert_eq!(high.average(), 5.0);
}

#[test]
fn mspss_average_to_two_decimals() {
    let mut responses = repeat("Some of the time", 16);
    responses[0] = "Most of the time".to_string();
    let result = scale_for(ScaleId::Mspss).score(&responses).unwrap();
    assert_eq!(result.total, 49);
    assert_eq!(format!("{:.2}", result.average()), "3.06");
}

#[test]
fn totals_stay_within_range_for_every_uniform_answer() {
    for scale in all_scales() {
        let def = scale.definition();
        for option in &def.options {
            let result = scale
                .score(&repeat(&option.label, def.items.len()))
                .unwrap();
            assert_eq!(result.total, result.per_item_scores.iter().sum::<u32>());
            assert_eq!(result.per_item_scores.len(), def.items.len());
            assert!(result.total >= def.min_score() && result.total <= def.max_score);
        }
    }
}

#[test]
fn scoring_is_deterministic() {
    let options = ["Never", "Sometimes", "Very Often", "Fairly Often", "Almost Never"];
    let responses: Vec<String> = options
        .iter()
        .cycle()
        .take(10)
        .map(|s| s.to_string())
        .collect();
    assert_eq!(
        Pss10.score(&responses).unwrap(),
        Pss10.score(&responses).unwrap()
    );
}

#[test]
fn wrong_length_is_rejected() {
    let err = Phq9.score(&repeat("Not at all", 8)).unwrap_err();
    match err {
        ScaleError::InvalidResponses { scale_id, errors } => {
            assert_eq!(scale_id, ScaleId::Phq9);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].kind, ValidationKind::WrongLength);
            assert_eq!(errors[0].item, None);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_labels_are_all_reported() {
    let mut responses = repeat("Not at all", 9);
    responses[2] = "Sometimes".to_string();
    responses[5] = "often".to_string();

    let errors = Phq9.validate_responses(&responses);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.kind == ValidationKind::UnknownOption));
    assert_eq!(errors[0].item, Some(2));
    assert_eq!(errors[1].item, Some(5));
    assert!(errors[0].message.contains("item 3"));

    let err = Phq9.score(&responses).unwrap_err();
    assert!(err.to_string().contains("2 invalid response(s)"));
}

#[test]
fn labels_are_case_sensitive() {
    let mut responses = repeat("Never", 10);
    responses[0] = "never".to_string();
    assert!(Pss10.score(&responses).is_err());
}

#[test]
fn unknown_scale_id_is_rejected() {
    assert!(matches!(
        get_scale("bdi2"),
        Err(ScaleError::UnknownScale(id)) if id == "bdi2"
    ));
}

#[test]
fn self_harm_item_flags_any_endorsement() {
    let mut responses = repeat("Not at all", 9);
    let result = Phq9.score(&responses).unwrap();
    assert!(!phq9::self_harm_indicated(&result));

    responses[phq9::SELF_HARM_ITEM] = "Several days".to_string();
    let result = Phq9.score(&responses).unwrap();
    assert!(phq9::self_harm_indicated(&result));
}
