//! Entity structs for the Paddy knowledge base and diagnosis output.
//!
//! Knowledge-base entities are owned by whatever layer stores them; the
//! engine only reads them. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for file loading, CLI output, and schema validation.

mod diagnosis;
mod disease;
mod link;
mod rule;
mod symptom;

pub use diagnosis::{DiagnosisMatch, DiagnosisReport};
pub use disease::Disease;
pub use link::{DiseaseSymptomLink, MAX_SEVERITY, MIN_SEVERITY};
pub use rule::ExpertRule;
pub use symptom::Symptom;
