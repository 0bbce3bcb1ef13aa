//! Scoring weights and thresholds.

use paddy_core::errors::CoreError;
use paddy_core::policy::{
    DEFAULT_RULE_WEIGHT, DEFAULT_SIMILARITY_BOOST, DEFAULT_SIMILARITY_THRESHOLD,
    DEFAULT_SIMILARITY_WEIGHT, ScoringPolicy,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_similarity_boost() -> f64 {
    DEFAULT_SIMILARITY_BOOST
}

const fn default_similarity_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

const fn default_rule_weight() -> f64 {
    DEFAULT_RULE_WEIGHT
}

const fn default_similarity_weight() -> f64 {
    DEFAULT_SIMILARITY_WEIGHT
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoringConfig {
    /// Multiplier for the raw symptom overlap ratio.
    #[serde(default = "default_similarity_boost")]
    pub similarity_boost: f64,

    /// Similarity scores must be strictly above this to be reported.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Rule share of a combined score.
    #[serde(default = "default_rule_weight")]
    pub rule_weight: f64,

    /// Similarity share of a combined score.
    #[serde(default = "default_similarity_weight")]
    pub similarity_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            similarity_boost: default_similarity_boost(),
            similarity_threshold: default_similarity_threshold(),
            rule_weight: default_rule_weight(),
            similarity_weight: default_similarity_weight(),
        }
    }
}

impl ScoringConfig {
    /// Validated policy for the diagnosis engine.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a weight or the threshold
    /// falls outside `[0, 1]`, or the boost is not a positive number.
    pub fn to_policy(&self) -> Result<ScoringPolicy, ConfigError> {
        let policy = ScoringPolicy {
            similarity_boost: self.similarity_boost,
            similarity_threshold: self.similarity_threshold,
            rule_weight: self.rule_weight,
            similarity_weight: self.similarity_weight,
        };
        policy.validate().map_err(|error| {
            let reason = match error {
                CoreError::Validation(reason) => reason,
                other => other.to_string(),
            };
            ConfigError::InvalidValue {
                field: "scoring".into(),
                reason,
            }
        })?;
        Ok(policy)
    }
}
