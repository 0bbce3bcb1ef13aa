//! Built-in rice disease knowledge.
//!
//! Fifteen symptoms, eight diseases, and one expert rule per disease. Symptom
//! ids follow the listing order in `data/rice.toml`.

pub const RICE_TOML: &str = include_str!("../data/rice.toml");

#[cfg(test)]
mod tests {
    use crate::knowledge::KnowledgeBase;

    #[test]
    fn seed_loads_cleanly() {
        let kb = KnowledgeBase::seed().expect("seed data should be valid");
        assert_eq!(kb.symptoms().len(), 15);
        assert_eq!(kb.diseases().len(), 8);
        assert_eq!(kb.rules().len(), 8);
        assert_eq!(kb.links().len(), 28);
        assert!(kb.issues().is_empty(), "seed issues: {:?}", kb.issues());
    }

    #[test]
    fn seed_ids_are_stable() {
        let kb = KnowledgeBase::seed().unwrap();
        assert_eq!(kb.symptom_named("Brown spots on leaves").map(|s| s.id), Some(1));
        assert_eq!(kb.symptom_named("Dark brown lesions").map(|s| s.id), Some(5));
        assert_eq!(kb.disease(1).map(|d| d.name.as_str()), Some("Brown Spot"));
        assert_eq!(kb.disease(8).map(|d| d.name.as_str()), Some("Root Rot"));
    }

    #[test]
    fn every_seed_disease_has_exactly_one_rule() {
        let kb = KnowledgeBase::seed().unwrap();
        for disease in kb.diseases() {
            assert_eq!(
                kb.rules_for_disease(disease.id).count(),
                1,
                "{} should have one rule",
                disease.name
            );
        }
    }
}
