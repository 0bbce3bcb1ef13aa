//! Scoring policy for the diagnosis engine.
//!
//! The defaults are the reference weights: similarity ratios are boosted by
//! `1.2` and must exceed `0.3`; when both strategies match, rules carry `0.7`
//! of the blend and similarity `0.3`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::confidence::is_valid_confidence;
use crate::errors::CoreError;

pub const DEFAULT_SIMILARITY_BOOST: f64 = 1.2;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.3;
pub const DEFAULT_RULE_WEIGHT: f64 = 0.7;
pub const DEFAULT_SIMILARITY_WEIGHT: f64 = 0.3;

/// Tunable constants used by the similarity matcher and the result merger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoringPolicy {
    /// Multiplier applied to the raw match ratio before capping at `1.0`.
    pub similarity_boost: f64,
    /// A similarity confidence must be strictly greater than this to count.
    pub similarity_threshold: f64,
    /// Weight of the rule confidence in a combined score.
    pub rule_weight: f64,
    /// Weight of the similarity confidence in a combined score.
    pub similarity_weight: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            similarity_boost: DEFAULT_SIMILARITY_BOOST,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            rule_weight: DEFAULT_RULE_WEIGHT,
            similarity_weight: DEFAULT_SIMILARITY_WEIGHT,
        }
    }
}

impl ScoringPolicy {
    /// Check that every field lies in its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.similarity_boost.is_finite() || self.similarity_boost <= 0.0 {
            return Err(CoreError::Validation(format!(
                "similarity_boost must be a positive finite number, got {}",
                self.similarity_boost
            )));
        }
        for (field, value) in [
            ("similarity_threshold", self.similarity_threshold),
            ("rule_weight", self.rule_weight),
            ("similarity_weight", self.similarity_weight),
        ] {
            if !is_valid_confidence(value) {
                return Err(CoreError::Validation(format!(
                    "{field} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}
