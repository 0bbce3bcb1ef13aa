//! Serde roundtrip and JsonSchema validation tests for all entity types.

use paddy_core::entities::*;
use paddy_core::enums::InferenceMethod;
use paddy_core::policy::ScoringPolicy;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    symptom_roundtrip,
    Symptom,
    Symptom {
        id: 1,
        name: "Brown spots on leaves".into(),
    }
);

roundtrip_and_validate!(
    disease_roundtrip,
    Disease,
    Disease {
        id: 1,
        name: "Brown Spot".into(),
        description: "Caused by Bipolaris oryzae, affects leaves and grains".into(),
        treatment: "Use resistant varieties, apply fungicides like propiconazole".into(),
    }
);

roundtrip_and_validate!(
    link_roundtrip,
    DiseaseSymptomLink,
    DiseaseSymptomLink {
        disease_id: 1,
        symptom_id: 5,
        severity: 3,
    }
);

roundtrip_and_validate!(
    rule_roundtrip,
    ExpertRule,
    ExpertRule {
        id: 1,
        condition: "has_symptom('Brown spots on leaves') and has_symptom('Dark brown lesions')"
            .into(),
        disease_id: 1,
        confidence: 0.9,
    }
);

roundtrip_and_validate!(
    rule_based_match_roundtrip,
    DiagnosisMatch,
    DiagnosisMatch {
        disease_id: 2,
        confidence: 0.85,
        method: InferenceMethod::RuleBased,
        matched_symptom_count: None,
        total_symptom_count: None,
    }
);

roundtrip_and_validate!(
    combined_match_roundtrip,
    DiagnosisMatch,
    DiagnosisMatch {
        disease_id: 1,
        confidence: 0.87,
        method: InferenceMethod::Combined,
        matched_symptom_count: Some(2),
        total_symptom_count: Some(3),
    }
);

roundtrip_and_validate!(
    report_roundtrip,
    DiagnosisReport,
    DiagnosisReport {
        disease_id: 5,
        disease_name: "False Smut".into(),
        description: "Caused by Ustilaginoidea virens, affects grains".into(),
        treatment: "Use resistant varieties, proper field drainage, apply propiconazole".into(),
        confidence: 0.8,
        method: InferenceMethod::SymptomMatching,
        matched_symptom_count: Some(2),
        total_symptom_count: Some(3),
    }
);

roundtrip_and_validate!(policy_roundtrip, ScoringPolicy, ScoringPolicy::default());

#[test]
fn schema_rejects_wrong_method_tag() {
    let schema = serde_json::to_value(schema_for!(DiagnosisMatch)).unwrap();
    let instance = serde_json::json!({
        "disease_id": 1,
        "confidence": 0.5,
        "method": "statistical",
    });
    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty(), "unknown method tag should not validate");
}
