use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::DiseaseId;

/// A diagnosable disease with its description and recommended treatment.
///
/// The symptoms a disease presents are stored separately as
/// [`DiseaseSymptomLink`](super::DiseaseSymptomLink) entries.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Disease {
    pub id: DiseaseId,
    pub name: String,
    pub description: String,
    pub treatment: String,
}
