//! Syntax tree for parsed conditions.

use std::fmt;

/// A parsed condition.
///
/// `and` / `or` chains are stored flat, so `a and b and c` is one
/// [`Expr::And`] with three operands rather than a nested tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(bool),
    /// `has_symptom('<name>')`.
    HasSymptom(String),
    Not(Box<Expr>),
    And(Vec<Expr>),
    Or(Vec<Expr>),
}

impl Expr {
    const fn precedence(&self) -> u8 {
        match self {
            Self::Or(_) => 1,
            Self::And(_) => 2,
            Self::Not(_) => 3,
            Self::Literal(_) | Self::HasSymptom(_) => 4,
        }
    }

    /// Visit every `has_symptom` name in source order.
    pub fn for_each_symptom<'a>(&'a self, visit: &mut impl FnMut(&'a str)) {
        match self {
            Self::Literal(_) => {}
            Self::HasSymptom(name) => visit(name),
            Self::Not(inner) => inner.for_each_symptom(visit),
            Self::And(operands) | Self::Or(operands) => {
                for operand in operands {
                    operand.for_each_symptom(visit);
                }
            }
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, min_precedence: u8) -> fmt::Result {
        if self.precedence() < min_precedence {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }

    fn fmt_chain(
        operands: &[Self],
        f: &mut fmt::Formatter<'_>,
        keyword: &str,
        own: u8,
    ) -> fmt::Result {
        for (index, operand) in operands.iter().enumerate() {
            if index > 0 {
                write!(f, " {keyword} ")?;
            }
            operand.fmt_operand(f, own + 1)?;
        }
        Ok(())
    }
}

/// Canonical text form. Re-parsing the output yields an equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(true) => f.write_str("True"),
            Self::Literal(false) => f.write_str("False"),
            Self::HasSymptom(name) => {
                f.write_str("has_symptom('")?;
                for ch in name.chars() {
                    match ch {
                        '\\' => f.write_str("\\\\")?,
                        '\'' => f.write_str("\\'")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("')")
            }
            Self::Not(inner) => {
                f.write_str("not ")?;
                inner.fmt_operand(f, 3)
            }
            Self::And(operands) => Self::fmt_chain(operands, f, "and", 2),
            Self::Or(operands) => Self::fmt_chain(operands, f, "or", 1),
        }
    }
}
