//! Diagnosis facade.

use std::collections::{BTreeMap, HashSet};

use paddy_core::entities::{DiagnosisMatch, DiagnosisReport};
use paddy_core::ids::{DiseaseId, SymptomId};
use paddy_core::policy::ScoringPolicy;

use crate::error::EngineError;
use crate::merge::merge;
use crate::rules::{RuleMatch, match_by_rules};
use crate::similarity::match_by_similarity;
use crate::source::{KnowledgeSource, SourceResolver};

/// Runs rule matching and similarity matching over a [`KnowledgeSource`]
/// and merges the results.
#[derive(Debug, Clone)]
pub struct DiagnosisEngine<S> {
    source: S,
    policy: ScoringPolicy,
}

impl<S: KnowledgeSource> DiagnosisEngine<S> {
    /// Engine with the default scoring policy.
    pub fn new(source: S) -> Self {
        Self {
            source,
            policy: ScoringPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    pub const fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Rank the diseases that best explain `selected`.
    ///
    /// An empty selection returns an empty list without reading the source.
    /// Rules whose disease no longer exists are dropped.
    ///
    /// # Errors
    ///
    /// Only fails if the knowledge source does.
    pub fn diagnose(
        &self,
        selected: &HashSet<SymptomId>,
    ) -> Result<Vec<DiagnosisMatch>, EngineError> {
        if selected.is_empty() {
            return Ok(Vec::new());
        }

        let rules = self.source.list_rules()?;
        let resolver = SourceResolver::new(&self.source);
        let mut rule_matches = match_by_rules(&rules, selected, &resolver);

        let diseases = self.source.list_diseases()?;
        let known: HashSet<DiseaseId> = diseases.iter().map(|d| d.id).collect();
        drop_dangling(&mut rule_matches, &known);

        let mut links = Vec::new();
        for disease in &diseases {
            links.extend(self.source.list_symptom_links_for_disease(disease.id)?);
        }
        let similarity_matches = match_by_similarity(&diseases, &links, selected, &self.policy);

        let results = merge(&rule_matches, &similarity_matches, &self.policy);
        tracing::debug!(
            selected = selected.len(),
            rule_matches = rule_matches.len(),
            similarity_matches = similarity_matches.len(),
            results = results.len(),
            "diagnosis complete"
        );
        Ok(results)
    }

    /// [`Self::diagnose`], with each match joined to its disease details.
    ///
    /// # Errors
    ///
    /// Only fails if the knowledge source does.
    pub fn diagnose_report(
        &self,
        selected: &HashSet<SymptomId>,
    ) -> Result<Vec<DiagnosisReport>, EngineError> {
        let matches = self.diagnose(selected)?;
        let mut reports = Vec::with_capacity(matches.len());
        for diagnosis in &matches {
            match self.source.find_disease(diagnosis.disease_id)? {
                Some(disease) => reports.push(DiagnosisReport::new(diagnosis, &disease)),
                None => tracing::warn!(
                    disease_id = diagnosis.disease_id,
                    "disease vanished between reads; omitting from report"
                ),
            }
        }
        Ok(reports)
    }
}

fn drop_dangling(rule_matches: &mut BTreeMap<DiseaseId, RuleMatch>, known: &HashSet<DiseaseId>) {
    rule_matches.retain(|disease_id, _| {
        let keep = known.contains(disease_id);
        if !keep {
            tracing::debug!(disease_id, "rule concludes unknown disease; dropped");
        }
        keep
    });
}
