//! # paddy-engine
//!
//! Infers likely diseases from a set of observed symptoms.
//!
//! Two independent strategies feed one ranked list:
//! - [`rules`]: expert rules written in the `paddy-rules` condition language;
//!   a disease takes the highest confidence among its rules that fire.
//! - [`similarity`]: the fraction of a disease's linked symptoms that were
//!   selected, boosted and thresholded by the [`ScoringPolicy`].
//!
//! [`merge`] blends the two (rules 70%, similarity 30% by default) and ranks
//! by confidence, then disease id. [`DiagnosisEngine`] is the facade that
//! reads a [`KnowledgeSource`] and runs the whole pipeline.
//!
//! The engine is synchronous and holds no mutable state; one instance can be
//! shared across threads as long as its source can.
//!
//! [`ScoringPolicy`]: paddy_core::policy::ScoringPolicy

pub mod engine;
pub mod error;
pub mod knowledge;
pub mod merge;
pub mod rules;
pub mod similarity;
pub mod source;

mod seed;

pub use engine::DiagnosisEngine;
pub use error::EngineError;
pub use knowledge::{KnowledgeBase, KnowledgeData, KnowledgeIssue};
pub use source::KnowledgeSource;
