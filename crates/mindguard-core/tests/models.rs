use mindguard_core::error::CoreError;
use mindguard_core::models::assessment::Submission;
use mindguard_core::models::demographics::{
    Demographics, EmploymentStatus, Gender, WorkEnvironment, YesNo,
};
use mindguard_core::models::features::{FEATURE_NAMES, FeatureRecord, FeatureValue, ScaleTotals};
use mindguard_core::models::risk::RiskLabel;
use mindguard_core::models::scale::{ScaleId, ScaleResult};

fn demographics() -> Demographics {
    Demographics {
        age: 25,
        gender: Gender::Female,
        employment_status: EmploymentStatus::SelfEmployed,
        work_environment: WorkEnvironment::OnSite,
        mental_health_history: YesNo::No,
        seeks_treatment: YesNo::Yes,
        sleep_hours: 7,
        physical_activity_days: 3,
    }
}

fn totals() -> ScaleTotals {
    ScaleTotals {
        depression: 12,
        anxiety: 8,
        stress: 19,
        social_support: 60,
    }
}

#[test]
fn assembled_record_uses_model_column_names() {
    let record = FeatureRecord::assemble(&demographics(), totals());
    let json = serde_json::to_value(&record).unwrap();
    let keys: Vec<&str> = json
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();

    let mut expected = FEATURE_NAMES.to_vec();
    expected.sort_unstable();
    let mut keys = keys;
    keys.sort_unstable();
    assert_eq!(keys, expected);

    assert_eq!(json["productivity_score"], 19);
    assert_eq!(json["employment_status"], "Self-Employed");
    assert_eq!(json["work_environment"], "On-site");
}

#[test]
fn stress_total_is_exposed_as_productivity() {
    let record = FeatureRecord::assemble(&demographics(), totals());
    assert_eq!(record.get("productivity_score"), Some(FeatureValue::Number(19.0)));
    assert_eq!(record.get("depression_score"), Some(FeatureValue::Number(12.0)));
    assert_eq!(record.get("anxiety_score"), Some(FeatureValue::Number(8.0)));
    assert_eq!(record.get("social_support_score"), Some(FeatureValue::Number(60.0)));
    assert_eq!(record.get("stress_score"), None);
}

#[test]
fn fields_follow_training_order() {
    let record = FeatureRecord::assemble(&demographics(), totals());
    let names: Vec<&str> = record.fields().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, FEATURE_NAMES.to_vec());
    assert_eq!(record.get("gender"), Some(FeatureValue::Category("Female")));
}

#[test]
fn demographics_out_of_range_are_rejected() {
    assert!(demographics().validate().is_ok());

    let young = Demographics {
        age: 9,
        ..demographics()
    };
    assert!(matches!(
        young.validate(),
        Err(CoreError::OutOfRange { field: "age", value: 9, .. })
    ));

    let sleepy = Demographics {
        sleep_hours: 13,
        ..demographics()
    };
    assert!(sleepy.validate().is_err());

    let active = Demographics {
        physical_activity_days: 8,
        ..demographics()
    };
    assert!(active.validate().is_err());
}

#[test]
fn risk_labels_map_class_ids() {
    assert_eq!(RiskLabel::from_class_id(0), RiskLabel::Low);
    assert_eq!(RiskLabel::from_class_id(1), RiskLabel::Medium);
    assert_eq!(RiskLabel::from_class_id(2), RiskLabel::High);
    assert_eq!(RiskLabel::from_class_id(7).to_string(), "7");
}

#[test]
fn risk_labels_serialize_as_plain_strings() {
    assert_eq!(serde_json::to_string(&RiskLabel::Medium).unwrap(), "\"Medium\"");
    assert_eq!(
        serde_json::to_string(&RiskLabel::Unrecognized("7".into())).unwrap(),
        "\"7\""
    );
    let parsed: RiskLabel = serde_json::from_str("\"High\"").unwrap();
    assert_eq!(parsed, RiskLabel::High);
}

#[test]
fn scale_ids_parse_and_display() {
    assert_eq!("pss10".parse::<ScaleId>().unwrap(), ScaleId::Pss10);
    assert!("PSS-10".parse::<ScaleId>().is_err());
    assert_eq!(ScaleId::Phq9.to_string(), "PHQ-9");
}

#[test]
fn average_of_empty_result_is_zero() {
    let result = ScaleResult {
        scale_id: ScaleId::Mspss,
        total: 0,
        per_item_scores: vec![],
        per_item_choices: vec![],
    };
    assert_eq!(result.average(), 0.0);
}

#[test]
fn submission_parses_form_labels() {
    let json = r#"{
        "demographics": {
            "age": 30,
            "gender": "Other",
            "employment_status": "Student",
            "work_environment": "Remote",
            "mental_health_history": "Yes",
            "seeks_treatment": "No",
            "sleep_hours": 6,
            "physical_activity_days": 0
        },
        "responses": {
            "phq9": ["Not at all"],
            "gad7": [],
            "pss10": [],
            "mspss": []
        }
    }"#;
    let submission = Submission::from_json(json).unwrap();
    assert_eq!(submission.demographics.work_environment, WorkEnvironment::Remote);
    assert_eq!(submission.responses.for_scale(ScaleId::Phq9), ["Not at all"]);
}

#[test]
fn malformed_submission_is_a_serialization_error() {
    let err = Submission::from_json("{\"demographics\": {}}").unwrap_err();
    assert!(matches!(err, CoreError::Serialization(_)));
}
