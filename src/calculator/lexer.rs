//! Turns a normalized character sequence into tokens.
//!
//! The lexer is forgiving: characters it cannot classify become
//! [`TokenKind::Illegal`] tokens and scanning carries on. Only malformed
//! numeric literals abort lexing.

use tracing::trace;

use crate::calculator::registry;
use crate::calculator::token::{Token, TokenKind, Value};
use crate::error::{Error, Result};

/// A cursor over an immutable character sequence.
pub struct Lexer<'a> {
    input: &'a [char],
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [char]) -> Self {
        Self { input, pos: 0 }
    }

    /// Scan the whole input.
    pub fn lex(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        while let Some(c) = self.current() {
            trace!(pos = self.pos, ch = %c, "lexing");

            if c.is_numeric() || c == '.' {
                tokens.push(self.lex_decimal()?);
            } else if c.is_whitespace() {
                self.pos += 1;
            } else if let Some(kind) = registry::operator_kind(c) {
                tokens.push(self.lex_operator(kind));
            } else if let Some((token, len)) = registry::match_spelling(&self.input[self.pos..]) {
                trace!(kind = %token.kind(), "constant");
                self.pos += len;
                tokens.push(token);
            } else {
                self.pos += 1;
                tokens.push(Token::illegal(c));
            }
        }

        Ok(tokens)
    }

    fn current(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos + 1).copied()
    }

    /// Emit an operator, widening `>` and `<` to `>=` and `<=` when followed by `=`.
    fn lex_operator(&mut self, kind: TokenKind) -> Token {
        let kind = match (kind, self.peek()) {
            (TokenKind::GreaterThan, Some('=')) => {
                self.pos += 1;
                TokenKind::GreaterThanOrEqual
            }
            (TokenKind::LessThan, Some('=')) => {
                self.pos += 1;
                TokenKind::LessThanOrEqual
            }
            (kind, _) => kind,
        };
        self.pos += 1;

        let value = registry::operator(kind).map_or(Value::Empty, Value::Operator);
        Token::new(kind, kind.symbol(), value)
    }

    /// Scan a numeric literal starting at the cursor.
    ///
    /// Accepts digits, `.`, grouping commas and a trailing `%`. On return
    /// the cursor sits on the first character that is not part of the literal.
    fn lex_decimal(&mut self) -> Result<Token> {
        let mut raw = String::new();

        while let Some(c) = self.current() {
            match c {
                '0'..='9' | '.' => raw.push(c),
                // A bare `e` is Euler's number, not an exponent marker.
                'e' if raw.is_empty() => {
                    self.pos += 1;
                    return registry::constant(TokenKind::E).ok_or(Error::InvalidExpression);
                }
                '%' => {
                    if raw.is_empty() {
                        return Err(Error::UnexpectedCharacter(c));
                    }
                    // `10%5` is a modulo, leave the `%` to be lexed as an operator
                    if self.peek().is_some_and(|next| next.is_ascii_digit()) {
                        break;
                    }
                    self.pos += 1;
                    let value = parse_decimal(&raw)? / 100.0;
                    raw.push(c);
                    return Ok(Token::new(TokenKind::Decimal, raw, Value::Number(value)));
                }
                ',' => {
                    if raw.ends_with(',') {
                        return Err(Error::UnexpectedCharacter(c));
                    }
                    raw.push(c);
                }
                _ => break,
            }
            self.pos += 1;
        }

        let value = parse_decimal(&raw)?;
        Ok(Token::new(TokenKind::Decimal, raw, Value::Number(value)))
    }
}

fn parse_decimal(raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| Error::InvalidDecimal(raw.to_string()))
}

/// Tokenize a normalized character sequence.
pub fn tokenize(input: &[char]) -> Result<Vec<Token>> {
    Lexer::new(input).lex()
}
