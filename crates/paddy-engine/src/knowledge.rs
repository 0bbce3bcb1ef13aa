//! In-memory knowledge base.
//!
//! [`KnowledgeData`] is the on-disk shape (TOML, or JSON for `.json` files).
//! [`KnowledgeBase`] is the validated, indexed snapshot that implements
//! [`KnowledgeSource`]. It is immutable once built.
//!
//! Loading rejects what a storage schema would reject: duplicate ids or
//! names, duplicate links, severities outside 1–5, non-finite confidences.
//! Dangling references and broken rule conditions are only reported as
//! [`KnowledgeIssue`]s, since the engine already degrades gracefully on them.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use paddy_core::confidence::is_valid_confidence;
use paddy_core::entities::{
    Disease, DiseaseSymptomLink, ExpertRule, MAX_SEVERITY, MIN_SEVERITY, Symptom,
};
use paddy_core::errors::CoreError;
use paddy_core::ids::{DiseaseId, RuleId, SymptomId};
use paddy_rules::{Condition, ConditionError};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::seed;
use crate::source::KnowledgeSource;

/// Raw knowledge base contents, as stored in a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeData {
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    #[serde(default)]
    pub diseases: Vec<Disease>,
    #[serde(default)]
    pub links: Vec<DiseaseSymptomLink>,
    #[serde(default)]
    pub rules: Vec<ExpertRule>,
}

/// A tolerated inconsistency in otherwise valid knowledge.
#[derive(Debug, Clone, PartialEq)]
pub enum KnowledgeIssue {
    LinkToUnknownDisease {
        disease_id: DiseaseId,
        symptom_id: SymptomId,
    },
    LinkToUnknownSymptom {
        disease_id: DiseaseId,
        symptom_id: SymptomId,
    },
    DiseaseWithoutSymptoms {
        disease_id: DiseaseId,
    },
    RuleForUnknownDisease {
        rule_id: RuleId,
        disease_id: DiseaseId,
    },
    MalformedCondition {
        rule_id: RuleId,
        error: ConditionError,
    },
    UnknownSymptomInRule {
        rule_id: RuleId,
        name: String,
    },
    ConfidenceOutOfRange {
        rule_id: RuleId,
        confidence: f64,
    },
}

impl KnowledgeIssue {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LinkToUnknownDisease { .. } => "link_to_unknown_disease",
            Self::LinkToUnknownSymptom { .. } => "link_to_unknown_symptom",
            Self::DiseaseWithoutSymptoms { .. } => "disease_without_symptoms",
            Self::RuleForUnknownDisease { .. } => "rule_for_unknown_disease",
            Self::MalformedCondition { .. } => "malformed_condition",
            Self::UnknownSymptomInRule { .. } => "unknown_symptom_in_rule",
            Self::ConfidenceOutOfRange { .. } => "confidence_out_of_range",
        }
    }
}

impl fmt::Display for KnowledgeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinkToUnknownDisease {
                disease_id,
                symptom_id,
            } => write!(
                f,
                "link {disease_id}->{symptom_id} references unknown disease {disease_id}"
            ),
            Self::LinkToUnknownSymptom {
                disease_id,
                symptom_id,
            } => write!(
                f,
                "link {disease_id}->{symptom_id} references unknown symptom {symptom_id}"
            ),
            Self::DiseaseWithoutSymptoms { disease_id } => write!(
                f,
                "disease {disease_id} has no linked symptoms and can only match by rule"
            ),
            Self::RuleForUnknownDisease {
                rule_id,
                disease_id,
            } => write!(
                f,
                "rule {rule_id} concludes unknown disease {disease_id} and will never match"
            ),
            Self::MalformedCondition { rule_id, error } => write!(
                f,
                "rule {rule_id} has a malformed condition ({error}) and will never match"
            ),
            Self::UnknownSymptomInRule { rule_id, name } => {
                write!(f, "rule {rule_id} references unknown symptom '{name}'")
            }
            Self::ConfidenceOutOfRange {
                rule_id,
                confidence,
            } => write!(
                f,
                "rule {rule_id} confidence {confidence} is outside [0, 1] and will be clamped"
            ),
        }
    }
}

/// Validated, indexed knowledge snapshot.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    data: KnowledgeData,
    symptom_by_id: HashMap<SymptomId, usize>,
    symptom_by_name: HashMap<String, usize>,
    disease_by_id: HashMap<DiseaseId, usize>,
    links_by_disease: HashMap<DiseaseId, Vec<DiseaseSymptomLink>>,
}

impl KnowledgeBase {
    /// Validate and index `data`. Tolerated issues are logged at warn level.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidKnowledgeBase`] on duplicate ids, names or
    /// links, on out-of-range severities, and on non-finite confidences.
    pub fn new(data: KnowledgeData) -> Result<Self, EngineError> {
        let mut symptom_by_id = HashMap::with_capacity(data.symptoms.len());
        let mut symptom_by_name = HashMap::with_capacity(data.symptoms.len());
        for (index, symptom) in data.symptoms.iter().enumerate() {
            if symptom_by_id.insert(symptom.id, index).is_some() {
                return Err(invalid(format!("duplicate symptom id {}", symptom.id)));
            }
            if symptom_by_name.insert(symptom.name.clone(), index).is_some() {
                return Err(invalid(format!("duplicate symptom name '{}'", symptom.name)));
            }
        }

        let mut disease_by_id = HashMap::with_capacity(data.diseases.len());
        let mut disease_names = HashSet::with_capacity(data.diseases.len());
        for (index, disease) in data.diseases.iter().enumerate() {
            if disease_by_id.insert(disease.id, index).is_some() {
                return Err(invalid(format!("duplicate disease id {}", disease.id)));
            }
            if !disease_names.insert(disease.name.as_str()) {
                return Err(invalid(format!("duplicate disease name '{}'", disease.name)));
            }
        }

        let mut links_by_disease: HashMap<DiseaseId, Vec<DiseaseSymptomLink>> = HashMap::new();
        let mut seen_links = HashSet::with_capacity(data.links.len());
        for link in &data.links {
            if !link.has_valid_severity() {
                return Err(invalid(format!(
                    "link {}->{} has severity {}, expected {MIN_SEVERITY}..={MAX_SEVERITY}",
                    link.disease_id, link.symptom_id, link.severity
                )));
            }
            if !seen_links.insert((link.disease_id, link.symptom_id)) {
                return Err(invalid(format!(
                    "duplicate link {}->{}",
                    link.disease_id, link.symptom_id
                )));
            }
            links_by_disease
                .entry(link.disease_id)
                .or_default()
                .push(link.clone());
        }

        let mut rule_ids = HashSet::with_capacity(data.rules.len());
        for rule in &data.rules {
            if !rule_ids.insert(rule.id) {
                return Err(invalid(format!("duplicate rule id {}", rule.id)));
            }
            if !rule.confidence.is_finite() {
                return Err(invalid(format!(
                    "rule {} confidence must be a finite number",
                    rule.id
                )));
            }
        }

        let kb = Self {
            data,
            symptom_by_id,
            symptom_by_name,
            disease_by_id,
            links_by_disease,
        };

        for issue in kb.issues() {
            tracing::warn!(kind = issue.kind(), "{issue}");
        }
        tracing::debug!(
            symptoms = kb.data.symptoms.len(),
            diseases = kb.data.diseases.len(),
            links = kb.data.links.len(),
            rules = kb.data.rules.len(),
            "knowledge base loaded"
        );

        Ok(kb)
    }

    /// Parse and validate TOML knowledge.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Toml`] on syntax errors, or any error from [`Self::new`].
    pub fn from_toml_str(input: &str) -> Result<Self, EngineError> {
        Self::new(toml::from_str(input)?)
    }

    /// Parse and validate JSON knowledge.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Json`] on syntax errors, or any error from [`Self::new`].
    pub fn from_json_str(input: &str) -> Result<Self, EngineError> {
        Self::new(serde_json::from_str(input)?)
    }

    /// Load a knowledge base file. `.json` files are read as JSON, anything
    /// else as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Io`] if the file cannot be read, or a parse or
    /// validation error.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    /// The built-in rice disease knowledge base.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded data is corrupt.
    pub fn seed() -> Result<Self, EngineError> {
        Self::from_toml_str(seed::RICE_TOML)
    }

    #[must_use]
    pub const fn data(&self) -> &KnowledgeData {
        &self.data
    }

    #[must_use]
    pub fn symptoms(&self) -> &[Symptom] {
        &self.data.symptoms
    }

    #[must_use]
    pub fn diseases(&self) -> &[Disease] {
        &self.data.diseases
    }

    #[must_use]
    pub fn links(&self) -> &[DiseaseSymptomLink] {
        &self.data.links
    }

    #[must_use]
    pub fn rules(&self) -> &[ExpertRule] {
        &self.data.rules
    }

    #[must_use]
    pub fn symptom(&self, id: SymptomId) -> Option<&Symptom> {
        self.symptom_by_id.get(&id).map(|&i| &self.data.symptoms[i])
    }

    #[must_use]
    pub fn symptom_named(&self, name: &str) -> Option<&Symptom> {
        self.symptom_by_name
            .get(name)
            .map(|&i| &self.data.symptoms[i])
    }

    #[must_use]
    pub fn disease(&self, id: DiseaseId) -> Option<&Disease> {
        self.disease_by_id.get(&id).map(|&i| &self.data.diseases[i])
    }

    #[must_use]
    pub fn links_for_disease(&self, id: DiseaseId) -> &[DiseaseSymptomLink] {
        self.links_by_disease
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn rules_for_disease(&self, id: DiseaseId) -> impl Iterator<Item = &ExpertRule> {
        self.data.rules.iter().filter(move |rule| rule.disease_id == id)
    }

    /// Tolerated inconsistencies, in data order.
    #[must_use]
    pub fn issues(&self) -> Vec<KnowledgeIssue> {
        let mut issues = Vec::new();

        for link in &self.data.links {
            if !self.disease_by_id.contains_key(&link.disease_id) {
                issues.push(KnowledgeIssue::LinkToUnknownDisease {
                    disease_id: link.disease_id,
                    symptom_id: link.symptom_id,
                });
            }
            if !self.symptom_by_id.contains_key(&link.symptom_id) {
                issues.push(KnowledgeIssue::LinkToUnknownSymptom {
                    disease_id: link.disease_id,
                    symptom_id: link.symptom_id,
                });
            }
        }

        for disease in &self.data.diseases {
            if !self.links_by_disease.contains_key(&disease.id) {
                issues.push(KnowledgeIssue::DiseaseWithoutSymptoms {
                    disease_id: disease.id,
                });
            }
        }

        for rule in &self.data.rules {
            if !self.disease_by_id.contains_key(&rule.disease_id) {
                issues.push(KnowledgeIssue::RuleForUnknownDisease {
                    rule_id: rule.id,
                    disease_id: rule.disease_id,
                });
            }
            if !is_valid_confidence(rule.confidence) {
                issues.push(KnowledgeIssue::ConfidenceOutOfRange {
                    rule_id: rule.id,
                    confidence: rule.confidence,
                });
            }
            match Condition::parse(&rule.condition) {
                Ok(condition) => {
                    for name in condition.referenced_symptoms() {
                        if !self.symptom_by_name.contains_key(name) {
                            issues.push(KnowledgeIssue::UnknownSymptomInRule {
                                rule_id: rule.id,
                                name: name.to_string(),
                            });
                        }
                    }
                }
                Err(error) => issues.push(KnowledgeIssue::MalformedCondition {
                    rule_id: rule.id,
                    error,
                }),
            }
        }

        issues
    }
}

fn invalid(message: String) -> EngineError {
    EngineError::InvalidKnowledgeBase(message)
}

impl KnowledgeSource for KnowledgeBase {
    fn list_rules(&self) -> Result<Vec<ExpertRule>, CoreError> {
        Ok(self.data.rules.clone())
    }

    fn list_diseases(&self) -> Result<Vec<Disease>, CoreError> {
        Ok(self.data.diseases.clone())
    }

    fn list_symptom_links_for_disease(
        &self,
        disease_id: DiseaseId,
    ) -> Result<Vec<DiseaseSymptomLink>, CoreError> {
        Ok(self.links_for_disease(disease_id).to_vec())
    }

    fn find_symptom_by_name(&self, name: &str) -> Result<Option<Symptom>, CoreError> {
        Ok(self.symptom_named(name).cloned())
    }

    fn list_symptoms(&self) -> Result<Vec<Symptom>, CoreError> {
        Ok(self.data.symptoms.clone())
    }

    fn find_disease(&self, disease_id: DiseaseId) -> Result<Option<Disease>, CoreError> {
        Ok(self.disease(disease_id).cloned())
    }
}
