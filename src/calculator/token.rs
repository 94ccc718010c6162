//! Token types shared by the lexer and the reducer.

use std::fmt;

use crate::error::{Error, Result};

/// Signature of every binary operator: two operand tokens in, one result out.
pub type BinaryOp = fn(&Token, &Token) -> Result<Token>;

/// The kind of a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    Decimal,
    Boolean,

    // Arithmetic and bitwise operators
    Plus,
    Minus,
    Multiply,
    Divide,
    Mod,
    Caret,
    Ampersand,
    Pipe,
    // Comparison operators
    Equal,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    // Punctuation: lexed, never reducible
    ParenthesisOpen,
    ParenthesisClose,
    Comma,
    Semicolon,
    Colon,

    // Constants
    Pi,
    Phi,
    E,
    Infinity,
    NotANumber,

    // Functions and calculus operators. Part of the grammar's vocabulary
    // only: the lexer never emits them and the reducer rejects them.
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
    Cosec,
    Abs,
    Sqrt,
    Cbrt,
    Log,
    Ln,
    Exp,
    Factorial,
    Limit,
    Sum,
    Product,
    Integral,
    Derivative,
}

impl TokenKind {
    /// Operators and punctuation: everything that sits between two operands.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Self::Plus
                | Self::Minus
                | Self::Multiply
                | Self::Divide
                | Self::Mod
                | Self::Caret
                | Self::Ampersand
                | Self::Pipe
                | Self::Equal
                | Self::GreaterThan
                | Self::GreaterThanOrEqual
                | Self::LessThan
                | Self::LessThanOrEqual
        ) || self.is_punctuation()
    }

    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            Self::ParenthesisOpen
                | Self::ParenthesisClose
                | Self::Comma
                | Self::Semicolon
                | Self::Colon
        )
    }

    /// Named constants that may stand in for a decimal operand.
    ///
    /// `NotANumber` is not one of them: it can only be a whole expression.
    pub fn is_constant(self) -> bool {
        matches!(self, Self::Pi | Self::Phi | Self::E | Self::Infinity)
    }

    pub fn is_function(self) -> bool {
        matches!(
            self,
            Self::Sin
                | Self::Cos
                | Self::Tan
                | Self::Cot
                | Self::Sec
                | Self::Csc
                | Self::Cosec
                | Self::Abs
                | Self::Sqrt
                | Self::Cbrt
                | Self::Log
                | Self::Ln
                | Self::Exp
                | Self::Factorial
                | Self::Limit
                | Self::Sum
                | Self::Product
                | Self::Integral
                | Self::Derivative
        )
    }

    pub fn is_illegal(self) -> bool {
        self == Self::Illegal
    }

    /// Canonical spelling of the kind.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Decimal => "DECIMAL",
            Self::Boolean => "BOOLEAN",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Mod => "%",
            Self::Caret => "^",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Equal => "=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::ParenthesisOpen => "(",
            Self::ParenthesisClose => ")",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Pi => "π",
            Self::Phi => "φ",
            Self::E => "e",
            Self::Infinity => "∞",
            Self::NotANumber => "NaN",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
            Self::Sec => "sec",
            Self::Csc => "csc",
            Self::Cosec => "cosec",
            Self::Abs => "abs",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Factorial => "!",
            Self::Limit => "lim",
            Self::Sum => "Σ",
            Self::Product => "Π",
            Self::Integral => "∫",
            Self::Derivative => "∂",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Payload of a token. Which variant is present is fixed by the token kind.
#[derive(Clone, Copy, Debug)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    Operator(BinaryOp),
    /// Illegal lexemes, punctuation and end of input carry nothing.
    Empty,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Operator(_) => f.write_str("<operator>"),
            Self::Empty => Ok(()),
        }
    }
}

/// A single lexeme. Tokens are never mutated once built.
#[derive(Clone, Debug)]
pub struct Token {
    kind: TokenKind,
    raw: String,
    value: Value,
}

impl Token {
    pub fn new(kind: TokenKind, raw: impl Into<String>, value: Value) -> Self {
        Self {
            kind,
            raw: raw.into(),
            value,
        }
    }

    /// A decimal token whose text is the shortest round-trip spelling of `value`.
    pub fn decimal(value: f64) -> Self {
        Self::new(TokenKind::Decimal, value.to_string(), Value::Number(value))
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(TokenKind::Boolean, value.to_string(), Value::Boolean(value))
    }

    pub fn illegal(c: char) -> Self {
        Self::new(TokenKind::Illegal, c, Value::Empty)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> Value {
        self.value
    }

    /// The numeric payload, for decimal and constant tokens.
    pub fn number(&self) -> Result<f64> {
        match self.value {
            Value::Number(n) => Ok(n),
            _ => Err(Error::InvalidExpression),
        }
    }
}
