//! Rule matcher: evaluate every expert rule against a selection.

use std::collections::{BTreeMap, HashSet};

use paddy_core::confidence::clamp_confidence;
use paddy_core::entities::ExpertRule;
use paddy_core::ids::{DiseaseId, RuleId, SymptomId};
use paddy_rules::SymptomResolver;

/// Rule evidence for one disease.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleMatch {
    /// Highest confidence among the rules that fired, clamped to `[0, 1]`.
    pub confidence: f64,
    /// Rule that supplied `confidence` (lowest id on ties).
    pub strongest_rule: RuleId,
    /// Number of rules for this disease that fired.
    pub fired: usize,
}

/// Evaluate `rules` against `selected`.
///
/// Each firing rule votes for its disease with its own confidence; a disease
/// keeps the maximum vote, so weaker co-firing rules never dilute a strong
/// one. Conditions that fail to parse never fire. The result does not depend
/// on rule order.
#[allow(clippy::float_cmp)]
pub fn match_by_rules<R>(
    rules: &[ExpertRule],
    selected: &HashSet<SymptomId>,
    resolver: &R,
) -> BTreeMap<DiseaseId, RuleMatch>
where
    R: SymptomResolver + ?Sized,
{
    let mut matches: BTreeMap<DiseaseId, RuleMatch> = BTreeMap::new();

    for rule in rules {
        if !paddy_rules::evaluate(&rule.condition, selected, resolver) {
            continue;
        }
        let confidence = clamp_confidence(rule.confidence);
        tracing::debug!(
            rule_id = rule.id,
            disease_id = rule.disease_id,
            confidence,
            "rule fired"
        );

        matches
            .entry(rule.disease_id)
            .and_modify(|existing| {
                existing.fired += 1;
                let stronger = confidence > existing.confidence
                    || (confidence == existing.confidence && rule.id < existing.strongest_rule);
                if stronger {
                    existing.confidence = confidence;
                    existing.strongest_rule = rule.id;
                }
            })
            .or_insert(RuleMatch {
                confidence,
                strongest_rule: rule.id,
                fired: 1,
            });
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn resolver() -> HashMap<String, SymptomId> {
        HashMap::from([
            ("Water-soaked lesions".to_string(), 4),
            ("Leaf blight".to_string(), 6),
            ("Stem rot".to_string(), 7),
        ])
    }

    fn rule(id: RuleId, condition: &str, disease_id: DiseaseId, confidence: f64) -> ExpertRule {
        ExpertRule {
            id,
            condition: condition.into(),
            disease_id,
            confidence,
        }
    }

    #[test]
    fn takes_max_of_firing_rules() {
        let rules = vec![
            rule(1, "has_symptom('Leaf blight')", 2, 0.7),
            rule(2, "has_symptom('Stem rot')", 2, 0.85),
        ];
        let matches = match_by_rules(&rules, &HashSet::from([6, 7]), &resolver());
        assert_eq!(
            matches.get(&2),
            Some(&RuleMatch {
                confidence: 0.85,
                strongest_rule: 2,
                fired: 2,
            })
        );
    }

    #[test]
    fn rule_order_does_not_matter() {
        let mut rules = vec![
            rule(1, "has_symptom('Leaf blight')", 2, 0.7),
            rule(2, "has_symptom('Stem rot')", 2, 0.85),
            rule(3, "has_symptom('Water-soaked lesions')", 3, 0.6),
        ];
        let selected = HashSet::from([4, 6, 7]);
        let forward = match_by_rules(&rules, &selected, &resolver());
        rules.reverse();
        let backward = match_by_rules(&rules, &selected, &resolver());
        assert_eq!(forward, backward);
    }

    #[test]
    fn non_firing_and_broken_rules_are_ignored() {
        let rules = vec![
            rule(1, "has_symptom('Leaf blight') and has_symptom('Stem rot')", 2, 0.9),
            rule(2, "has_symptom('Leaf blight') and", 3, 0.9),
            rule(3, "has_symptom('Water-soaked lesions')", 4, 0.8),
        ];
        let matches = match_by_rules(&rules, &HashSet::from([4, 6]), &resolver());
        assert_eq!(matches.keys().copied().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn clamps_out_of_range_confidence() {
        let rules = vec![
            rule(1, "True", 1, 1.7),
            rule(2, "True", 2, -0.3),
        ];
        let matches = match_by_rules(&rules, &HashSet::from([1]), &resolver());
        assert!((matches[&1].confidence - 1.0).abs() < f64::EPSILON);
        assert!(matches[&2].confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn equal_confidence_keeps_lowest_rule_id() {
        let rules = vec![
            rule(9, "True", 1, 0.8),
            rule(4, "True", 1, 0.8),
        ];
        let matches = match_by_rules(&rules, &HashSet::from([1]), &resolver());
        assert_eq!(matches[&1].strongest_rule, 4);
    }
}
