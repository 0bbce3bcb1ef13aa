//! Condition language error types.

/// Why a condition could not be parsed. Offsets are byte positions in the
/// condition text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConditionError {
    #[error("condition is empty")]
    Empty,

    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("unterminated string literal starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("unsupported escape sequence '\\{ch}' at offset {offset}")]
    InvalidEscape { ch: char, offset: usize },

    #[error("unknown identifier '{name}' at offset {offset}")]
    UnknownIdentifier { name: String, offset: usize },

    #[error("expected {expected} at offset {offset}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    #[error("unexpected end of condition, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("condition nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}
