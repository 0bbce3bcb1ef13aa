use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Disease;
use crate::enums::InferenceMethod;
use crate::ids::DiseaseId;

/// One ranked diagnosis produced by the engine. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DiagnosisMatch {
    pub disease_id: DiseaseId,
    /// Confidence in `[0.0, 1.0]`.
    pub confidence: f64,
    pub method: InferenceMethod,
    /// Selected symptoms that belong to the disease. Present only when
    /// similarity contributed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_symptom_count: Option<usize>,
    /// Number of distinct symptoms linked to the disease. Present only when
    /// similarity contributed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_symptom_count: Option<usize>,
}

/// A [`DiagnosisMatch`] joined with the disease it names, for display.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DiagnosisReport {
    pub disease_id: DiseaseId,
    pub disease_name: String,
    pub description: String,
    pub treatment: String,
    pub confidence: f64,
    pub method: InferenceMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_symptom_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_symptom_count: Option<usize>,
}

impl DiagnosisReport {
    /// Join a match with its disease record.
    #[must_use]
    pub fn new(diagnosis: &DiagnosisMatch, disease: &Disease) -> Self {
        Self {
            disease_id: diagnosis.disease_id,
            disease_name: disease.name.clone(),
            description: disease.description.clone(),
            treatment: disease.treatment.clone(),
            confidence: diagnosis.confidence,
            method: diagnosis.method,
            matched_symptom_count: diagnosis.matched_symptom_count,
            total_symptom_count: diagnosis.total_symptom_count,
        }
    }

    /// Confidence as a whole percentage, rounded.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}
