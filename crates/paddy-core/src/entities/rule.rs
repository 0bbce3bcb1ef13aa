use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::{DiseaseId, RuleId};

const fn default_rule_confidence() -> f64 {
    0.5
}

/// An expert-authored rule: when `condition` holds, conclude `disease_id`
/// with `confidence`.
///
/// `condition` is text in the condition language understood by
/// `paddy-rules`, e.g. `has_symptom('Leaf blight') and not has_symptom('Wilting')`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ExpertRule {
    pub id: RuleId,
    pub condition: String,
    pub disease_id: DiseaseId,
    #[serde(default = "default_rule_confidence")]
    pub confidence: f64,
}
