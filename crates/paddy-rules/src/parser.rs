//! Recursive-descent parser.
//!
//! ```text
//! expr     := or_expr
//! or_expr  := and_expr ( "or" and_expr )*
//! and_expr := not_expr ( "and" not_expr )*
//! not_expr := "not" not_expr | primary
//! primary  := "(" expr ")" | "has_symptom" "(" STRING ")" | "True" | "False"
//! ```

use crate::ast::Expr;
use crate::error::ConditionError;
use crate::lexer::{Token, TokenKind, tokenize};

/// Maximum nesting of parentheses and `not` before parsing gives up.
pub const MAX_DEPTH: usize = 64;

const PREDICATE: &str = "has_symptom";

/// Parse condition text into an [`Expr`].
pub fn parse(input: &str) -> Result<Expr, ConditionError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ConditionError::Empty);
    }

    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.or_expr()?;

    if let Some(token) = parser.peek() {
        return Err(ConditionError::UnexpectedToken {
            expected: "end of condition",
            found: token.kind.to_string(),
            offset: token.offset,
        });
    }
    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        matches!(self.peek(), Some(Token { kind: TokenKind::Ident(name), .. }) if name == keyword)
    }

    fn enter(&mut self) -> Result<(), ConditionError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ConditionError::TooDeep { limit: MAX_DEPTH });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expect(&mut self, want: &TokenKind, expected: &'static str) -> Result<(), ConditionError> {
        match self.next() {
            Some(token) if token.kind == *want => Ok(()),
            Some(token) => Err(ConditionError::UnexpectedToken {
                expected,
                found: token.kind.to_string(),
                offset: token.offset,
            }),
            None => Err(ConditionError::UnexpectedEnd { expected }),
        }
    }

    fn or_expr(&mut self) -> Result<Expr, ConditionError> {
        let first = self.and_expr()?;
        if !self.at_keyword("or") {
            return Ok(first);
        }
        let mut operands = vec![first];
        while self.at_keyword("or") {
            self.pos += 1;
            operands.push(self.and_expr()?);
        }
        Ok(Expr::Or(operands))
    }

    fn and_expr(&mut self) -> Result<Expr, ConditionError> {
        let first = self.not_expr()?;
        if !self.at_keyword("and") {
            return Ok(first);
        }
        let mut operands = vec![first];
        while self.at_keyword("and") {
            self.pos += 1;
            operands.push(self.not_expr()?);
        }
        Ok(Expr::And(operands))
    }

    fn not_expr(&mut self) -> Result<Expr, ConditionError> {
        if self.at_keyword("not") {
            self.pos += 1;
            self.enter()?;
            let inner = self.not_expr()?;
            self.leave();
            return Ok(Expr::Not(Box::new(inner)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, ConditionError> {
        let Some(token) = self.next().cloned() else {
            return Err(ConditionError::UnexpectedEnd {
                expected: "a condition",
            });
        };

        match token.kind {
            TokenKind::LParen => {
                self.enter()?;
                let inner = self.or_expr()?;
                self.expect(&TokenKind::RParen, "')'")?;
                self.leave();
                Ok(inner)
            }
            TokenKind::Ident(name) => match name.as_str() {
                PREDICATE => self.predicate_call(),
                "True" => Ok(Expr::Literal(true)),
                "False" => Ok(Expr::Literal(false)),
                "and" | "or" | "not" => Err(ConditionError::UnexpectedToken {
                    expected: "a condition",
                    found: format!("'{name}'"),
                    offset: token.offset,
                }),
                _ => Err(ConditionError::UnknownIdentifier {
                    name,
                    offset: token.offset,
                }),
            },
            other => Err(ConditionError::UnexpectedToken {
                expected: "a condition",
                found: other.to_string(),
                offset: token.offset,
            }),
        }
    }

    fn predicate_call(&mut self) -> Result<Expr, ConditionError> {
        self.expect(&TokenKind::LParen, "'(' after has_symptom")?;
        let name = match self.next() {
            Some(Token {
                kind: TokenKind::Str(value),
                ..
            }) => value.clone(),
            Some(token) => {
                return Err(ConditionError::UnexpectedToken {
                    expected: "a quoted symptom name",
                    found: token.kind.to_string(),
                    offset: token.offset,
                });
            }
            None => {
                return Err(ConditionError::UnexpectedEnd {
                    expected: "a quoted symptom name",
                });
            }
        };
        self.expect(&TokenKind::RParen, "')'")?;
        Ok(Expr::HasSymptom(name))
    }
}
