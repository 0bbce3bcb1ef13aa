//! Conditions that are malformed or try to reach outside the language must
//! evaluate to false, never panic, and never match.

use std::collections::{HashMap, HashSet};

use paddy_core::ids::SymptomId;
use paddy_rules::{Condition, ConditionError, evaluate, try_evaluate};
use rstest::rstest;

fn resolver() -> HashMap<String, SymptomId> {
    HashMap::from([
        ("Leaf blight".to_string(), 6),
        ("Stem rot".to_string(), 7),
    ])
}

fn everything_selected() -> HashSet<SymptomId> {
    (1..=15).collect()
}

#[rstest]
#[case::python_import("__import__('os').system('rm -rf /')")]
#[case::attribute_access("has_symptom.__globals__")]
#[case::builtins("eval('True')")]
#[case::comparison("1 == 1")]
#[case::symbolic_and("has_symptom('Leaf blight') && has_symptom('Stem rot')")]
#[case::two_arguments("has_symptom('Leaf blight', 'Stem rot')")]
#[case::lambda("(lambda: True)()")]
#[case::unbalanced("((has_symptom('Leaf blight'))")]
#[case::empty_call("has_symptom()")]
#[case::unterminated("has_symptom('Leaf blight)")]
#[case::nothing("")]
#[case::lowercase_true("true")]
#[case::lowercase_true_in_disjunction("has_symptom('Leaf blight') or true")]
#[case::lowercase_false("false or has_symptom('Stem rot')")]
fn hostile_or_broken_conditions_are_false(#[case] condition: &str) {
    let selected = everything_selected();
    assert!(
        try_evaluate(condition, &selected, &resolver()).is_err(),
        "{condition:?} should not parse"
    );
    assert!(!evaluate(condition, &selected, &resolver()));
}

#[test]
fn deeply_nested_not_is_rejected_without_overflow() {
    let condition = "not ".repeat(10_000) + "True";
    assert!(matches!(
        Condition::parse(&condition),
        Err(ConditionError::TooDeep { .. })
    ));
    assert!(!evaluate(&condition, &everything_selected(), &resolver()));
}

#[rstest]
#[case("has_symptom('Leaf blight') and has_symptom('Stem rot')", true)]
#[case("has_symptom('Leaf blight') and not has_symptom('Stem rot')", false)]
#[case("True", true)]
#[case("False or has_symptom('Stem rot')", true)]
#[case("not (True and False)", true)]
fn well_formed_conditions_evaluate(#[case] condition: &str, #[case] expected: bool) {
    let selected: HashSet<SymptomId> = HashSet::from([6, 7]);
    assert_eq!(try_evaluate(condition, &selected, &resolver()), Ok(expected));
}

#[test]
fn parsed_condition_is_reusable_across_selections() {
    let condition = Condition::parse("has_symptom('Leaf blight') or has_symptom('Stem rot')")
        .expect("condition should parse");
    let resolver = resolver();
    assert!(condition.evaluate(&HashSet::from([6]), &resolver));
    assert!(condition.evaluate(&HashSet::from([7]), &resolver));
    assert!(!condition.evaluate(&HashSet::<SymptomId>::new(), &resolver));
}
