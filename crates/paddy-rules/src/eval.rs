//! Condition evaluation against a symptom selection.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::BuildHasher;
use std::str::FromStr;

use paddy_core::ids::SymptomId;

use crate::ast::Expr;
use crate::error::ConditionError;
use crate::parser;

/// Looks up a symptom id by its exact display name.
pub trait SymptomResolver {
    fn resolve(&self, name: &str) -> Option<SymptomId>;
}

impl<S: BuildHasher> SymptomResolver for HashMap<String, SymptomId, S> {
    fn resolve(&self, name: &str) -> Option<SymptomId> {
        self.get(name).copied()
    }
}

impl SymptomResolver for BTreeMap<String, SymptomId> {
    fn resolve(&self, name: &str) -> Option<SymptomId> {
        self.get(name).copied()
    }
}

impl<T: SymptomResolver + ?Sized> SymptomResolver for &T {
    fn resolve(&self, name: &str) -> Option<SymptomId> {
        (**self).resolve(name)
    }
}

/// A parsed, reusable condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    expr: Expr,
}

impl Condition {
    /// Parse condition text.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConditionError`] found in `input`.
    pub fn parse(input: &str) -> Result<Self, ConditionError> {
        parser::parse(input).map(|expr| Self { expr })
    }

    #[must_use]
    pub const fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Evaluate against the selected symptom ids.
    ///
    /// `has_symptom(name)` is true iff `resolver` knows `name` and its id is in
    /// `selected`. Unknown names are simply false.
    pub fn evaluate<R, S>(&self, selected: &HashSet<SymptomId, S>, resolver: &R) -> bool
    where
        R: SymptomResolver + ?Sized,
        S: BuildHasher,
    {
        eval_expr(&self.expr, selected, resolver)
    }

    /// Distinct symptom names mentioned by the condition, in source order.
    #[must_use]
    pub fn referenced_symptoms(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        self.expr.for_each_symptom(&mut |name| {
            if !names.contains(&name) {
                names.push(name);
            }
        });
        names
    }
}

impl FromStr for Condition {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn eval_expr<R, S>(expr: &Expr, selected: &HashSet<SymptomId, S>, resolver: &R) -> bool
where
    R: SymptomResolver + ?Sized,
    S: BuildHasher,
{
    match expr {
        Expr::Literal(value) => *value,
        Expr::HasSymptom(name) => resolver
            .resolve(name)
            .is_some_and(|id| selected.contains(&id)),
        Expr::Not(inner) => !eval_expr(inner, selected, resolver),
        Expr::And(operands) => operands
            .iter()
            .all(|operand| eval_expr(operand, selected, resolver)),
        Expr::Or(operands) => operands
            .iter()
            .any(|operand| eval_expr(operand, selected, resolver)),
    }
}

/// Parse and evaluate in one step, keeping the parse error.
///
/// # Errors
///
/// Returns a [`ConditionError`] if `condition` does not parse.
pub fn try_evaluate<R, S>(
    condition: &str,
    selected: &HashSet<SymptomId, S>,
    resolver: &R,
) -> Result<bool, ConditionError>
where
    R: SymptomResolver + ?Sized,
    S: BuildHasher,
{
    Ok(Condition::parse(condition)?.evaluate(selected, resolver))
}

/// Parse and evaluate, failing closed.
///
/// A condition that does not parse evaluates to `false`; the error is only
/// logged at debug level.
pub fn evaluate<R, S>(condition: &str, selected: &HashSet<SymptomId, S>, resolver: &R) -> bool
where
    R: SymptomResolver + ?Sized,
    S: BuildHasher,
{
    match try_evaluate(condition, selected, resolver) {
        Ok(result) => result,
        Err(error) => {
            tracing::debug!(%error, condition, "condition rejected; evaluating as false");
            false
        }
    }
}
