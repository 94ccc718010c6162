//! Error kinds produced while solving an expression.
//!
//! These are language-neutral. Front ends turn them into text by looking up
//! [`Error::message_id`] in a message catalog.

use thiserror::Error;

/// Everything that can go wrong between the raw input and the final value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A numeric literal is malformed (leading `%`, consecutive `,`).
    #[error("unexpected character: {0}")]
    UnexpectedCharacter(char),
    /// A literal failed to parse as a float, or a bitwise operator got a
    /// non-integral operand.
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),
    /// The token sequence cannot be reduced to a single value.
    #[error("invalid expression")]
    InvalidExpression,
}

impl Error {
    /// Stable catalog key for this error kind.
    pub fn message_id(&self) -> &'static str {
        match self {
            Self::UnexpectedCharacter(_) => "error.unexpected_character",
            Self::InvalidDecimal(_) => "error.invalid_decimal",
            Self::InvalidExpression => "error.invalid_expression",
        }
    }

    /// The offending text, if the error carries one.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::UnexpectedCharacter(c) => Some(c.to_string()),
            Self::InvalidDecimal(text) => Some(text.clone()),
            Self::InvalidExpression => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::UnexpectedCharacter(',').to_string(),
            "unexpected character: ,"
        );
        assert_eq!(
            Error::InvalidDecimal("1,2".into()).to_string(),
            "invalid decimal: 1,2"
        );
        assert_eq!(Error::InvalidExpression.to_string(), "invalid expression");
    }

    #[test]
    fn test_message_ids() {
        assert_eq!(
            Error::UnexpectedCharacter('%').message_id(),
            "error.unexpected_character"
        );
        assert_eq!(
            Error::InvalidDecimal(String::new()).message_id(),
            "error.invalid_decimal"
        );
        assert_eq!(Error::InvalidExpression.message_id(), "error.invalid_expression");
        assert_eq!(Error::InvalidExpression.detail(), None);
    }
}
