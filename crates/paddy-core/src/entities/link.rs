use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::{DiseaseId, SymptomId};

pub const MIN_SEVERITY: u8 = 1;
pub const MAX_SEVERITY: u8 = 5;

const fn default_severity() -> u8 {
    MIN_SEVERITY
}

/// Association between a disease and one of its symptoms.
///
/// `severity` (1–5) is recorded but not yet weighted by the similarity
/// matcher; every linked symptom counts equally.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct DiseaseSymptomLink {
    pub disease_id: DiseaseId,
    pub symptom_id: SymptomId,
    #[serde(default = "default_severity")]
    pub severity: u8,
}

impl DiseaseSymptomLink {
    #[must_use]
    pub const fn new(disease_id: DiseaseId, symptom_id: SymptomId) -> Self {
        Self {
            disease_id,
            symptom_id,
            severity: default_severity(),
        }
    }

    #[must_use]
    pub const fn has_valid_severity(&self) -> bool {
        self.severity >= MIN_SEVERITY && self.severity <= MAX_SEVERITY
    }
}
