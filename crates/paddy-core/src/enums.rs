//! Enums shared across Paddy.
//!
//! Tags serialize in `kebab-case` (`"rule-based"`, `"symptom-matching"`,
//! `"combined"`), the same strings the display layer has always shown.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// InferenceMethod
// ---------------------------------------------------------------------------

/// Which strategy produced a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum InferenceMethod {
    /// At least one expert rule fired for the disease; similarity did not pass.
    RuleBased,
    /// Only the symptom-overlap score passed the threshold.
    SymptomMatching,
    /// Both strategies agreed; confidence is the weighted blend.
    Combined,
}

impl InferenceMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RuleBased => "rule-based",
            Self::SymptomMatching => "symptom-matching",
            Self::Combined => "combined",
        }
    }

    /// Whether the similarity matcher contributed to this result.
    #[must_use]
    pub const fn uses_similarity(self) -> bool {
        matches!(self, Self::SymptomMatching | Self::Combined)
    }

    /// Whether an expert rule contributed to this result.
    #[must_use]
    pub const fn uses_rules(self) -> bool {
        matches!(self, Self::RuleBased | Self::Combined)
    }
}

impl fmt::Display for InferenceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
