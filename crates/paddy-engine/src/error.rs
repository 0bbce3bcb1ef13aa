//! Engine error types.

use paddy_core::errors::CoreError;

/// Errors from loading knowledge or reading it during a diagnosis.
///
/// Scoring itself never fails; broken rules and unknown ids degrade to fewer
/// matches instead.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The knowledge source failed to produce data.
    #[error("knowledge source error: {0}")]
    Source(#[from] CoreError),

    #[error("failed to read knowledge base '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid knowledge base TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid knowledge base JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The data parsed but breaks a uniqueness or range constraint.
    #[error("invalid knowledge base: {0}")]
    InvalidKnowledgeBase(String),
}
