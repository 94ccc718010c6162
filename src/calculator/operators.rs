//! Binary operator implementations.
//!
//! Both operands are expected to carry a number; the reducer checks the
//! token kinds before calling in here.

use crate::calculator::token::Token;
use crate::error::{Error, Result};

pub fn add(a: &Token, b: &Token) -> Result<Token> {
    Ok(Token::decimal(a.number()? + b.number()?))
}

pub fn subtract(a: &Token, b: &Token) -> Result<Token> {
    Ok(Token::decimal(a.number()? - b.number()?))
}

pub fn multiply(a: &Token, b: &Token) -> Result<Token> {
    Ok(Token::decimal(a.number()? * b.number()?))
}

/// IEEE division: dividing by zero gives an infinity or NaN, not an error.
pub fn divide(a: &Token, b: &Token) -> Result<Token> {
    Ok(Token::decimal(a.number()? / b.number()?))
}

/// Floating remainder, with the sign of the dividend.
pub fn modulo(a: &Token, b: &Token) -> Result<Token> {
    Ok(Token::decimal(a.number()? % b.number()?))
}

pub fn pow(a: &Token, b: &Token) -> Result<Token> {
    Ok(Token::decimal(a.number()?.powf(b.number()?)))
}

pub fn bitwise_and(a: &Token, b: &Token) -> Result<Token> {
    let (x, y) = integral_operands(a, b)?;
    Ok(Token::decimal((x & y) as f64))
}

pub fn bitwise_or(a: &Token, b: &Token) -> Result<Token> {
    let (x, y) = integral_operands(a, b)?;
    Ok(Token::decimal((x | y) as f64))
}

pub fn equal(a: &Token, b: &Token) -> Result<Token> {
    Ok(Token::boolean(a.number()? == b.number()?))
}

pub fn greater_than(a: &Token, b: &Token) -> Result<Token> {
    Ok(Token::boolean(a.number()? > b.number()?))
}

pub fn greater_than_or_equal(a: &Token, b: &Token) -> Result<Token> {
    Ok(Token::boolean(a.number()? >= b.number()?))
}

pub fn less_than(a: &Token, b: &Token) -> Result<Token> {
    Ok(Token::boolean(a.number()? < b.number()?))
}

pub fn less_than_or_equal(a: &Token, b: &Token) -> Result<Token> {
    Ok(Token::boolean(a.number()? <= b.number()?))
}

/// Both operands as integers, or `InvalidDecimal` if either has a fractional part.
fn integral_operands(a: &Token, b: &Token) -> Result<(i64, i64)> {
    Ok((integral(a.number()?)?, integral(b.number()?)?))
}

fn integral(value: f64) -> Result<i64> {
    // fract() of an infinity or NaN is NaN, so those are rejected too
    if value.fract() != 0.0 {
        return Err(Error::InvalidDecimal(value.to_string()));
    }
    Ok(value as i64)
}
