//! Calculator module for solving short expressions.
//!
//! This module provides functionality to:
//! - Rewrite operator synonyms (`**`, `×`, `÷`, `∧`)
//! - Tokenize the expression
//! - Reduce the tokens left to right into a single value
//! - Detect if user input looks like a calculator expression

mod detection;
mod evaluation;
pub mod lexer;
mod normalize;
mod operators;
pub mod reducer;
pub mod registry;
pub mod token;

pub use detection::looks_like_expression;
pub use evaluation::{CalcResult, evaluate_expression, format_display, solve};
pub use lexer::{Lexer, tokenize};
pub use normalize::normalize;
pub use reducer::reduce;
pub use token::{BinaryOp, Token, TokenKind, Value};
