//! Read-only boundary between the engine and whatever stores the knowledge.

use paddy_core::entities::{Disease, DiseaseSymptomLink, ExpertRule, Symptom};
use paddy_core::errors::CoreError;
use paddy_core::ids::{DiseaseId, SymptomId};
use paddy_rules::SymptomResolver;

/// Supplies the engine with a consistent snapshot of domain data.
///
/// Implementations are responsible for snapshot isolation; the engine calls
/// these methods several times per diagnosis and assumes the answers agree.
pub trait KnowledgeSource {
    fn list_rules(&self) -> Result<Vec<ExpertRule>, CoreError>;

    fn list_diseases(&self) -> Result<Vec<Disease>, CoreError>;

    fn list_symptom_links_for_disease(
        &self,
        disease_id: DiseaseId,
    ) -> Result<Vec<DiseaseSymptomLink>, CoreError>;

    /// Exact, case-sensitive lookup.
    fn find_symptom_by_name(&self, name: &str) -> Result<Option<Symptom>, CoreError>;

    fn list_symptoms(&self) -> Result<Vec<Symptom>, CoreError>;

    fn find_disease(&self, disease_id: DiseaseId) -> Result<Option<Disease>, CoreError> {
        Ok(self
            .list_diseases()?
            .into_iter()
            .find(|disease| disease.id == disease_id))
    }
}

impl<T: KnowledgeSource + ?Sized> KnowledgeSource for &T {
    fn list_rules(&self) -> Result<Vec<ExpertRule>, CoreError> {
        (**self).list_rules()
    }

    fn list_diseases(&self) -> Result<Vec<Disease>, CoreError> {
        (**self).list_diseases()
    }

    fn list_symptom_links_for_disease(
        &self,
        disease_id: DiseaseId,
    ) -> Result<Vec<DiseaseSymptomLink>, CoreError> {
        (**self).list_symptom_links_for_disease(disease_id)
    }

    fn find_symptom_by_name(&self, name: &str) -> Result<Option<Symptom>, CoreError> {
        (**self).find_symptom_by_name(name)
    }

    fn list_symptoms(&self) -> Result<Vec<Symptom>, CoreError> {
        (**self).list_symptoms()
    }

    fn find_disease(&self, disease_id: DiseaseId) -> Result<Option<Disease>, CoreError> {
        (**self).find_disease(disease_id)
    }
}

/// Resolves `has_symptom` names through a [`KnowledgeSource`].
///
/// A lookup failure counts as "no such symptom" so the predicate is false.
pub struct SourceResolver<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S: KnowledgeSource + ?Sized> SourceResolver<'a, S> {
    pub const fn new(source: &'a S) -> Self {
        Self { source }
    }
}

impl<S: KnowledgeSource + ?Sized> SymptomResolver for SourceResolver<'_, S> {
    fn resolve(&self, name: &str) -> Option<SymptomId> {
        match self.source.find_symptom_by_name(name) {
            Ok(symptom) => symptom.map(|s| s.id),
            Err(error) => {
                tracing::warn!(%error, name, "symptom lookup failed; treating as absent");
                None
            }
        }
    }
}
