//! Identifier aliases.
//!
//! Ids are plain integers assigned by whatever layer owns the data. They are
//! signed because callers may hand the engine arbitrary selections, including
//! negative values, which simply match nothing.

/// Identifier of a [`Symptom`](crate::entities::Symptom).
pub type SymptomId = i64;

/// Identifier of a [`Disease`](crate::entities::Disease).
pub type DiseaseId = i64;

/// Identifier of an [`ExpertRule`](crate::entities::ExpertRule).
pub type RuleId = i64;
