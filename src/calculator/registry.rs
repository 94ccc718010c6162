//! Static lookup tables: operator symbols, operator functions and constants.
//!
//! Everything here is built at most once and never mutated afterwards, so
//! concurrent callers can share it freely.

use std::collections::HashMap;
use std::f64::consts;

use lazy_static::lazy_static;

use crate::calculator::operators;
use crate::calculator::token::{BinaryOp, Token, TokenKind, Value};

/// The golden ratio.
const PHI: f64 = 1.618_033_988_749_895;

/// Recognized constant spellings, tried in order as prefixes of the input.
const CONSTANT_SPELLINGS: &[(&str, TokenKind)] = &[
    ("φ", TokenKind::Phi),
    ("phi", TokenKind::Phi),
    ("π", TokenKind::Pi),
    ("pi", TokenKind::Pi),
    ("e", TokenKind::E),
    ("E", TokenKind::E),
    ("∞", TokenKind::Infinity),
    ("inf", TokenKind::Infinity),
    ("nan", TokenKind::NotANumber),
];

const BOOLEAN_SPELLINGS: &[(&str, bool)] = &[("true", true), ("false", false)];

lazy_static! {
    /// Precomputed constant tokens.
    static ref CONSTANTS: HashMap<TokenKind, Token> = [
        (TokenKind::Pi, consts::PI),
        (TokenKind::Phi, PHI),
        (TokenKind::E, consts::E),
        (TokenKind::Infinity, f64::INFINITY),
        (TokenKind::NotANumber, f64::NAN),
    ]
    .into_iter()
    .map(|(kind, value)| (kind, Token::new(kind, kind.symbol(), Value::Number(value))))
    .collect();
}

/// Map a single character to its operator or punctuation kind.
pub fn operator_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Multiply,
        '/' => TokenKind::Divide,
        '(' => TokenKind::ParenthesisOpen,
        ')' => TokenKind::ParenthesisClose,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        ':' => TokenKind::Colon,
        '%' => TokenKind::Mod,
        '^' => TokenKind::Caret,
        '&' => TokenKind::Ampersand,
        '|' => TokenKind::Pipe,
        '=' => TokenKind::Equal,
        '>' => TokenKind::GreaterThan,
        '<' => TokenKind::LessThan,
        _ => return None,
    };
    Some(kind)
}

/// The binary function registered for an operator kind.
///
/// Punctuation and non-operator kinds have no function.
pub fn operator(kind: TokenKind) -> Option<BinaryOp> {
    let op: BinaryOp = match kind {
        TokenKind::Plus => operators::add,
        TokenKind::Minus => operators::subtract,
        TokenKind::Multiply => operators::multiply,
        TokenKind::Divide => operators::divide,
        TokenKind::Mod => operators::modulo,
        TokenKind::Caret => operators::pow,
        TokenKind::Ampersand => operators::bitwise_and,
        TokenKind::Pipe => operators::bitwise_or,
        TokenKind::Equal => operators::equal,
        TokenKind::GreaterThan => operators::greater_than,
        TokenKind::GreaterThanOrEqual => operators::greater_than_or_equal,
        TokenKind::LessThan => operators::less_than,
        TokenKind::LessThanOrEqual => operators::less_than_or_equal,
        _ => return None,
    };
    Some(op)
}

/// The precomputed token for a constant kind.
pub fn constant(kind: TokenKind) -> Option<Token> {
    CONSTANTS.get(&kind).cloned()
}

/// Find a constant or boolean spelling at the start of `input`.
///
/// Returns the token and the number of characters the spelling spans.
pub fn match_spelling(input: &[char]) -> Option<(Token, usize)> {
    let constants = CONSTANT_SPELLINGS
        .iter()
        .filter_map(|&(spelling, kind)| Some((spelling, constant(kind)?)));
    let booleans = BOOLEAN_SPELLINGS
        .iter()
        .map(|&(spelling, value)| (spelling, Token::boolean(value)));

    constants.chain(booleans).find_map(|(spelling, token)| {
        let len = spelling.chars().count();
        let matches = input.len() >= len && spelling.chars().zip(input).all(|(a, &b)| a == b);
        matches.then_some((token, len))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_every_operator_has_a_function() {
        for c in "+-*/%^&|=><".chars() {
            let kind = operator_kind(c).unwrap();
            assert!(operator(kind).is_some(), "no function for {c}");
        }
        assert!(operator(TokenKind::GreaterThanOrEqual).is_some());
        assert!(operator(TokenKind::LessThanOrEqual).is_some());
    }

    #[test]
    fn test_punctuation_has_no_function() {
        for c in "(),;:".chars() {
            let kind = operator_kind(c).unwrap();
            assert!(kind.is_punctuation());
            assert!(operator(kind).is_none());
        }
        assert!(operator_kind('!').is_none());
    }

    #[test]
    fn test_constants() {
        assert_eq!(constant(TokenKind::Pi).unwrap().number(), Ok(consts::PI));
        assert_eq!(constant(TokenKind::E).unwrap().number(), Ok(consts::E));
        assert!(constant(TokenKind::NotANumber).unwrap().number().unwrap().is_nan());
        assert!(constant(TokenKind::Decimal).is_none());
    }

    #[test]
    fn test_match_spelling() {
        let (token, len) = match_spelling(&chars("phi*2")).unwrap();
        assert_eq!(token.kind(), TokenKind::Phi);
        assert_eq!(len, 3);

        let (token, len) = match_spelling(&chars("π")).unwrap();
        assert_eq!(token.kind(), TokenKind::Pi);
        assert_eq!(len, 1);

        let (token, len) = match_spelling(&chars("inf")).unwrap();
        assert_eq!(token.kind(), TokenKind::Infinity);
        assert_eq!(len, 3);

        let (token, _) = match_spelling(&chars("true")).unwrap();
        assert_eq!(token.kind(), TokenKind::Boolean);

        assert!(match_spelling(&chars("p")).is_none());
        assert!(match_spelling(&chars("NaN")).is_none());
        assert!(match_spelling(&chars("x")).is_none());
    }
}
