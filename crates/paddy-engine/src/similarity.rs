//! Similarity matcher: score diseases by symptom overlap.

use std::collections::{BTreeMap, HashMap, HashSet};

use paddy_core::confidence::clamp_confidence;
use paddy_core::entities::{Disease, DiseaseSymptomLink};
use paddy_core::ids::{DiseaseId, SymptomId};
use paddy_core::policy::ScoringPolicy;

/// Overlap evidence for one disease.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityMatch {
    pub confidence: f64,
    /// `|selected ∩ linked|`.
    pub matched: usize,
    /// `|linked|`, counting each symptom once.
    pub total: usize,
}

/// `min(matched / total * boost, 1.0)`; `0.0` when `total` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn similarity_confidence(matched: usize, total: usize, boost: f64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ratio = matched as f64 / total as f64;
    clamp_confidence((ratio * boost).min(1.0))
}

/// Score every disease in `diseases` against `selected`.
///
/// Links naming diseases outside `diseases` are ignored, and diseases with no
/// links are skipped. A disease is reported only when its confidence is
/// strictly above `policy.similarity_threshold`.
pub fn match_by_similarity(
    diseases: &[Disease],
    links: &[DiseaseSymptomLink],
    selected: &HashSet<SymptomId>,
    policy: &ScoringPolicy,
) -> BTreeMap<DiseaseId, SimilarityMatch> {
    let mut profiles: HashMap<DiseaseId, HashSet<SymptomId>> = HashMap::new();
    for link in links {
        profiles
            .entry(link.disease_id)
            .or_default()
            .insert(link.symptom_id);
    }

    let mut matches = BTreeMap::new();
    for disease in diseases {
        let Some(profile) = profiles.get(&disease.id) else {
            continue;
        };

        let matched = profile.intersection(selected).count();
        let total = profile.len();
        let confidence = similarity_confidence(matched, total, policy.similarity_boost);

        if confidence > policy.similarity_threshold {
            tracing::debug!(
                disease_id = disease.id,
                matched,
                total,
                confidence,
                "similarity match"
            );
            matches.insert(
                disease.id,
                SimilarityMatch {
                    confidence,
                    matched,
                    total,
                },
            );
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn disease(id: DiseaseId) -> Disease {
        Disease {
            id,
            name: format!("Disease {id}"),
            description: String::new(),
            treatment: String::new(),
        }
    }

    fn links(disease_id: DiseaseId, symptoms: &[SymptomId]) -> Vec<DiseaseSymptomLink> {
        symptoms
            .iter()
            .map(|&s| DiseaseSymptomLink::new(disease_id, s))
            .collect()
    }

    #[rstest]
    #[case(1, 1, 1.0)]
    #[case(2, 3, 0.8)]
    #[case(1, 2, 0.6)]
    #[case(1, 5, 0.24)]
    #[case(0, 4, 0.0)]
    #[case(0, 0, 0.0)]
    fn confidence_is_boosted_ratio(
        #[case] matched: usize,
        #[case] total: usize,
        #[case] expected: f64,
    ) {
        let got = similarity_confidence(matched, total, 1.2);
        assert!((got - expected).abs() < 1e-9, "{matched}/{total}: got {got}");
    }

    #[test]
    fn full_overlap_caps_at_one() {
        let matches = match_by_similarity(
            &[disease(1)],
            &links(1, &[1, 2, 3]),
            &HashSet::from([1, 2, 3]),
            &ScoringPolicy::default(),
        );
        let m = matches[&1];
        assert!((m.confidence - 1.0).abs() < f64::EPSILON);
        assert_eq!((m.matched, m.total), (3, 3));
    }

    #[test]
    fn threshold_is_strict() {
        // 1 of 4 linked symptoms: 0.25 * 1.2 = 0.3, not above 0.3.
        let matches = match_by_similarity(
            &[disease(1)],
            &links(1, &[1, 2, 3, 4]),
            &HashSet::from([1]),
            &ScoringPolicy::default(),
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn low_overlap_is_suppressed() {
        let matches = match_by_similarity(
            &[disease(1)],
            &links(1, &[1, 2, 3, 4, 5]),
            &HashSet::from([1]),
            &ScoringPolicy::default(),
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn diseases_without_links_are_skipped() {
        let matches = match_by_similarity(
            &[disease(1), disease(2)],
            &links(2, &[7]),
            &HashSet::from([7]),
            &ScoringPolicy::default(),
        );
        assert_eq!(matches.keys().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn links_for_unlisted_diseases_are_ignored() {
        let matches = match_by_similarity(
            &[disease(1)],
            &links(9, &[1]),
            &HashSet::from([1]),
            &ScoringPolicy::default(),
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn repeated_links_count_once() {
        let mut all = links(1, &[1, 2]);
        all.push(DiseaseSymptomLink::new(1, 2));
        let matches = match_by_similarity(
            &[disease(1)],
            &all,
            &HashSet::from([1]),
            &ScoringPolicy::default(),
        );
        assert_eq!((matches[&1].matched, matches[&1].total), (1, 2));
    }

    #[test]
    fn unknown_and_negative_selection_ids_add_nothing() {
        let matches = match_by_similarity(
            &[disease(1)],
            &links(1, &[1, 2]),
            &HashSet::from([-4, 999, 1, 2]),
            &ScoringPolicy::default(),
        );
        assert_eq!(matches[&1].matched, 2);
    }

    #[test]
    fn policy_threshold_and_boost_apply() {
        let policy = ScoringPolicy {
            similarity_boost: 1.0,
            similarity_threshold: 0.0,
            ..ScoringPolicy::default()
        };
        let matches = match_by_similarity(
            &[disease(1)],
            &links(1, &[1, 2, 3, 4]),
            &HashSet::from([1]),
            &policy,
        );
        assert!((matches[&1].confidence - 0.25).abs() < f64::EPSILON);
    }
}
