//! Result merger: blend rule and similarity evidence into one ranking.
//!
//! Weights come from the [`ScoringPolicy`]:
//! - rule only: rule confidence, tagged `rule-based`
//! - similarity only: similarity confidence and counts, tagged `symptom-matching`
//! - both: `min(rule_weight * rule + similarity_weight * similarity, 1.0)`,
//!   tagged `combined`, with the similarity counts
//!
//! Results are ordered by descending confidence, then ascending disease id,
//! so equal scores always come out in the same order.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use paddy_core::confidence::clamp_confidence;
use paddy_core::entities::DiagnosisMatch;
use paddy_core::enums::InferenceMethod;
use paddy_core::ids::DiseaseId;
use paddy_core::policy::ScoringPolicy;

use crate::rules::RuleMatch;
use crate::similarity::SimilarityMatch;

/// Weighted blend of a rule confidence and a similarity confidence.
#[must_use]
pub fn combine_confidence(rule: f64, similarity: f64, policy: &ScoringPolicy) -> f64 {
    let blended = rule * policy.rule_weight + similarity * policy.similarity_weight;
    clamp_confidence(blended.min(1.0))
}

/// Merge both strategies' matches into a ranked list.
#[must_use]
pub fn merge(
    rule_matches: &BTreeMap<DiseaseId, RuleMatch>,
    similarity_matches: &BTreeMap<DiseaseId, SimilarityMatch>,
    policy: &ScoringPolicy,
) -> Vec<DiagnosisMatch> {
    let diseases: BTreeSet<DiseaseId> = rule_matches
        .keys()
        .chain(similarity_matches.keys())
        .copied()
        .collect();

    let mut results: Vec<DiagnosisMatch> = diseases
        .into_iter()
        .filter_map(|disease_id| {
            let rule = rule_matches.get(&disease_id);
            let similarity = similarity_matches.get(&disease_id);
            let (confidence, method) = match (rule, similarity) {
                (Some(r), Some(s)) => (
                    combine_confidence(r.confidence, s.confidence, policy),
                    InferenceMethod::Combined,
                ),
                (Some(r), None) => (clamp_confidence(r.confidence), InferenceMethod::RuleBased),
                (None, Some(s)) => (
                    clamp_confidence(s.confidence),
                    InferenceMethod::SymptomMatching,
                ),
                (None, None) => return None,
            };
            Some(DiagnosisMatch {
                disease_id,
                confidence,
                method,
                matched_symptom_count: similarity.map(|s| s.matched),
                total_symptom_count: similarity.map(|s| s.total),
            })
        })
        .collect();

    rank(&mut results);
    results
}

/// Sort by descending confidence, then ascending disease id.
pub fn rank(results: &mut [DiagnosisMatch]) {
    results.sort_by(|a, b| match b.confidence.total_cmp(&a.confidence) {
        Ordering::Equal => a.disease_id.cmp(&b.disease_id),
        other => other,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rule(confidence: f64) -> RuleMatch {
        RuleMatch {
            confidence,
            strongest_rule: 1,
            fired: 1,
        }
    }

    fn similar(confidence: f64, matched: usize, total: usize) -> SimilarityMatch {
        SimilarityMatch {
            confidence,
            matched,
            total,
        }
    }

    #[test]
    fn combined_uses_seventy_thirty_blend() {
        let rules = BTreeMap::from([(1, rule(0.9))]);
        let similarity = BTreeMap::from([(1, similar(0.6, 1, 2))]);
        let merged = merge(&rules, &similarity, &ScoringPolicy::default());

        assert_eq!(merged.len(), 1);
        assert!((merged[0].confidence - 0.81).abs() < 1e-9);
        assert_eq!(merged[0].method, InferenceMethod::Combined);
        assert_eq!(merged[0].matched_symptom_count, Some(1));
        assert_eq!(merged[0].total_symptom_count, Some(2));
    }

    #[test]
    fn single_strategy_keeps_its_score() {
        let rules = BTreeMap::from([(1, rule(0.85))]);
        let similarity = BTreeMap::from([(2, similar(0.8, 2, 3))]);
        let merged = merge(&rules, &similarity, &ScoringPolicy::default());

        assert_eq!(
            merged,
            vec![
                DiagnosisMatch {
                    disease_id: 1,
                    confidence: 0.85,
                    method: InferenceMethod::RuleBased,
                    matched_symptom_count: None,
                    total_symptom_count: None,
                },
                DiagnosisMatch {
                    disease_id: 2,
                    confidence: 0.8,
                    method: InferenceMethod::SymptomMatching,
                    matched_symptom_count: Some(2),
                    total_symptom_count: Some(3),
                },
            ]
        );
    }

    #[test]
    fn combined_is_capped_at_one() {
        let policy = ScoringPolicy {
            rule_weight: 1.0,
            similarity_weight: 1.0,
            ..ScoringPolicy::default()
        };
        assert!((combine_confidence(0.9, 0.9, &policy) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_break_by_disease_id() {
        let rules = BTreeMap::from([(7, rule(0.8)), (3, rule(0.8))]);
        let similarity = BTreeMap::from([(5, similar(0.8, 2, 3))]);
        let merged = merge(&rules, &similarity, &ScoringPolicy::default());
        let order: Vec<DiseaseId> = merged.iter().map(|m| m.disease_id).collect();
        assert_eq!(order, vec![3, 5, 7]);
    }

    #[test]
    fn orders_by_descending_confidence() {
        let rules = BTreeMap::from([(1, rule(0.5)), (2, rule(0.9))]);
        let similarity = BTreeMap::from([(3, similar(0.72, 3, 5))]);
        let merged = merge(&rules, &similarity, &ScoringPolicy::default());
        let order: Vec<DiseaseId> = merged.iter().map(|m| m.disease_id).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn empty_inputs_merge_to_nothing() {
        let merged = merge(&BTreeMap::new(), &BTreeMap::new(), &ScoringPolicy::default());
        assert!(merged.is_empty());
    }
}
