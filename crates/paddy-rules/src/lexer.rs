//! Tokenizer for the condition language.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::ConditionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Bare word: keyword, predicate name, or literal.
    Ident(String),
    /// Quoted string with escapes already resolved.
    Str(String),
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "'{name}'"),
            Self::Str(value) => write!(f, "string {value:?}"),
            Self::LParen => f.write_str("'('"),
            Self::RParen => f.write_str("')'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

/// Split `input` into tokens.
///
/// Whitespace separates tokens and is otherwise ignored. Strings may use
/// single or double quotes and support `\\`, `\'`, `\"`, `\n`, `\t`.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ConditionError> {
    let mut chars = input.char_indices().peekable();
    let mut tokens = Vec::new();

    while let Some(&(offset, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::LParen,
                    offset,
                });
            }
            ')' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::RParen,
                    offset,
                });
            }
            '\'' | '"' => {
                chars.next();
                let value = read_string(&mut chars, ch, offset)?;
                tokens.push(Token {
                    kind: TokenKind::Str(value),
                    offset,
                });
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut name = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        name.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(name),
                    offset,
                });
            }
            other => return Err(ConditionError::UnexpectedChar { ch: other, offset }),
        }
    }

    Ok(tokens)
}

fn read_string(
    chars: &mut Peekable<CharIndices<'_>>,
    quote: char,
    start: usize,
) -> Result<String, ConditionError> {
    let mut value = String::new();
    loop {
        let Some((offset, ch)) = chars.next() else {
            return Err(ConditionError::UnterminatedString { offset: start });
        };
        match ch {
            c if c == quote => return Ok(value),
            '\\' => {
                let Some((_, escaped)) = chars.next() else {
                    return Err(ConditionError::UnterminatedString { offset: start });
                };
                let resolved = match escaped {
                    '\\' => '\\',
                    '\'' => '\'',
                    '"' => '"',
                    'n' => '\n',
                    't' => '\t',
                    other => return Err(ConditionError::InvalidEscape { ch: other, offset }),
                };
                value.push(resolved);
            }
            c => value.push(c),
        }
    }
}
