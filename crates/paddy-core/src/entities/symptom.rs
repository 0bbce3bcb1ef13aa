use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::SymptomId;

/// An observable symptom. Names are unique within a knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct Symptom {
    pub id: SymptomId,
    pub name: String,
}
