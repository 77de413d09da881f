use thiserror::Error;

/// Errors that can occur when parsing expression text.
///
/// Positions are byte offsets into the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character `{ch}` at {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("invalid number `{text}` at {position}")]
    InvalidNumber { text: String, position: usize },

    #[error("unexpected `{found}` at {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("function `{name}` at {position} must be followed by `(`")]
    BareFunction { name: String, position: usize },

    #[error("expression nested deeper than {limit} levels at {position}")]
    TooDeep { limit: usize, position: usize },
}
