//! # paddy-rules
//!
//! The condition language used by expert rules.
//!
//! A condition is a boolean expression over symptom predicates:
//!
//! ```text
//! has_symptom('Water-soaked lesions') and (has_symptom('Leaf blight') or not has_symptom('Wilting'))
//! ```
//!
//! Only `has_symptom(<string>)`, `and`, `or`, `not`, parentheses, and the
//! literals `True` / `False` are understood. Anything else is rejected by the
//! parser. There is no general-purpose evaluation of any kind.
//!
//! Two entry points:
//! - [`Condition::parse`] + [`Condition::evaluate`] for callers that want the
//!   typed [`ConditionError`] (rule linting, precompilation).
//! - [`evaluate`], which fails closed: a condition that does not parse is
//!   `false`, so one broken rule cannot disturb a diagnosis.

mod ast;
mod error;
mod eval;
mod lexer;
mod parser;

pub use ast::Expr;
pub use error::ConditionError;
pub use eval::{Condition, SymptomResolver, evaluate, try_evaluate};
pub use parser::MAX_DEPTH;
