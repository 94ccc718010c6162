//! Collapses a token sequence into a single value.
//!
//! Operators are applied strictly left to right as they appear. There is no
//! precedence and no grouping: `2+3*4` is `(2+3)*4`.

use crate::calculator::token::{Token, TokenKind, Value};
use crate::error::{Error, Result};

/// Reduce `tokens` to the one token left once every operator has been applied.
pub fn reduce(mut tokens: Vec<Token>) -> Result<Token> {
    if tokens.iter().any(|t| t.kind().is_illegal()) {
        return Err(Error::InvalidExpression);
    }

    let mut i = 0;
    while i < tokens.len() {
        if !tokens[i].kind().is_operator() {
            i += 1;
            continue;
        }
        if i == 0 || i + 1 == tokens.len() {
            return Err(Error::InvalidExpression);
        }

        let (left, op, right) = (&tokens[i - 1], &tokens[i], &tokens[i + 1]);
        if !operands_allowed(left.kind(), right.kind()) {
            return Err(Error::InvalidExpression);
        }
        let Value::Operator(apply) = op.value() else {
            // punctuation is lexed but never reduced
            return Err(Error::InvalidExpression);
        };
        let result = apply(left, right)?;

        // The window restarts at the result: the operator, its left operand
        // and anything before them are dropped.
        tokens[i + 1] = result;
        tokens.drain(..=i);
        i = 1;
    }

    match <[Token; 1]>::try_from(tokens) {
        Ok([token]) => Ok(token),
        Err(_) => Err(Error::InvalidExpression),
    }
}

/// The left operand must be a decimal. The right one may also be a named
/// constant, and a constant on either side relaxes the right-hand check.
fn operands_allowed(left: TokenKind, right: TokenKind) -> bool {
    left == TokenKind::Decimal
        && (right == TokenKind::Decimal || left.is_constant() || right.is_constant())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::lexer::tokenize;

    fn eval(s: &str) -> Result<Token> {
        let chars: Vec<char> = s.chars().collect();
        reduce(tokenize(&chars)?)
    }

    fn value(s: &str) -> String {
        eval(s).unwrap().value().to_string()
    }

    #[test]
    fn test_single_operation() {
        assert_eq!(value("2+3"), "5");
        assert_eq!(value("2-3"), "-1");
        assert_eq!(value("2*3"), "6");
        assert_eq!(value("3/2"), "1.5");
    }

    #[test]
    fn test_left_to_right_without_precedence() {
        assert_eq!(value("2+3*4"), "20");
        assert_eq!(value("10-2-3"), "5");
        assert_eq!(value("2^3^2"), "64");
    }

    #[test]
    fn test_single_value() {
        assert_eq!(value("42"), "42");
        assert_eq!(value("pi"), "3.141592653589793");
        assert_eq!(value("nan"), "NaN");
    }

    #[test]
    fn test_constants_as_right_operand() {
        assert_eq!(value("2*pi"), (2.0 * std::f64::consts::PI).to_string());
        assert_eq!(value("1+e"), (1.0 + std::f64::consts::E).to_string());
        assert_eq!(value("1/inf"), "0");
        assert_eq!(value("2*pi+1"), (2.0 * std::f64::consts::PI + 1.0).to_string());
    }

    #[test]
    fn test_constant_as_left_operand_is_rejected() {
        assert_eq!(eval("pi*2").unwrap_err(), Error::InvalidExpression);
        assert_eq!(eval("e+e").unwrap_err(), Error::InvalidExpression);
    }

    #[test]
    fn test_nan_is_not_an_operand() {
        assert_eq!(eval("1+nan").unwrap_err(), Error::InvalidExpression);
    }

    #[test]
    fn test_operator_at_boundary() {
        assert_eq!(eval("+").unwrap_err(), Error::InvalidExpression);
        assert_eq!(eval("+1").unwrap_err(), Error::InvalidExpression);
        assert_eq!(eval("1+").unwrap_err(), Error::InvalidExpression);
        assert_eq!(eval("-5").unwrap_err(), Error::InvalidExpression);
    }

    #[test]
    fn test_consecutive_operators() {
        assert_eq!(eval("1+-2").unwrap_err(), Error::InvalidExpression);
        assert_eq!(eval("1++2").unwrap_err(), Error::InvalidExpression);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(reduce(Vec::new()).unwrap_err(), Error::InvalidExpression);
    }

    #[test]
    fn test_leftover_operands() {
        assert_eq!(eval("1 2").unwrap_err(), Error::InvalidExpression);
        assert_eq!(eval("1+2 3").unwrap_err(), Error::InvalidExpression);
    }

    #[test]
    fn test_tokens_before_left_operand_are_dropped() {
        assert_eq!(value("pi1+2"), "3");
        assert_eq!(value("1 2+3"), "5");
        assert_eq!(value("7 2+3*2"), "10");
    }

    #[test]
    fn test_illegal_token() {
        assert_eq!(eval("1+x").unwrap_err(), Error::InvalidExpression);
        assert_eq!(eval("x").unwrap_err(), Error::InvalidExpression);
    }

    #[test]
    fn test_punctuation_is_not_reducible() {
        assert_eq!(eval("1,2").unwrap_err(), Error::InvalidDecimal("1,2".into()));
        assert_eq!(eval("1;2").unwrap_err(), Error::InvalidExpression);
        assert_eq!(eval("(1)").unwrap_err(), Error::InvalidExpression);
        assert_eq!(eval("1(2").unwrap_err(), Error::InvalidExpression);
    }

    #[test]
    fn test_boolean_result_cannot_be_an_operand() {
        assert_eq!(value("2>1"), "true");
        assert_eq!(eval("2>1+1").unwrap_err(), Error::InvalidExpression);
        assert_eq!(eval("true").unwrap().kind(), TokenKind::Boolean);
        assert_eq!(eval("true=1").unwrap_err(), Error::InvalidExpression);
    }

    #[test]
    fn test_bitwise_failure_propagates() {
        assert!(matches!(eval("2.5&1.5"), Err(Error::InvalidDecimal(_))));
        assert_eq!(value("6|1"), "7");
    }
}
