//! Expression evaluation.
//!
//! [`solve`] runs the whole pipeline (normalize, lex, reduce, format) and
//! is all a front end needs. [`evaluate_expression`] wraps it into a
//! [`CalcResult`] and adds display formatting.

use tracing::{debug, warn};

use crate::calculator::lexer::tokenize;
use crate::calculator::normalize::normalize;
use crate::calculator::reducer::reduce;
use crate::error::{Error, Result};

/// Solve `expression` and return the value in its canonical textual form.
///
/// Numbers use the shortest representation that round-trips (`0.1`,
/// `1024`, `inf`, `NaN`), booleans are `true` or `false`.
pub fn solve(expression: &str) -> Result<String> {
    let chars = normalize(expression);
    let tokens = tokenize(&chars)?;
    let token = reduce(tokens)?;
    Ok(token.value().to_string())
}

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug)]
pub enum CalcResult {
    /// The expression reduced to a value.
    Success {
        /// The trimmed expression.
        expression: String,
        /// Canonical form of the value.
        value: String,
    },
    /// The expression could not be solved.
    Error {
        /// The trimmed expression.
        expression: String,
        /// Why it failed.
        error: Error,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The canonical value, for successful results.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Error { .. } => None,
        }
    }

    /// The error, for failed results.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error, .. } => Some(error),
        }
    }
}

/// Evaluate a mathematical expression.
pub fn evaluate_expression(input: &str) -> CalcResult {
    let expression = input.trim().to_string();

    match solve(&expression) {
        Ok(value) => {
            debug!(%expression, %value, "solved");
            CalcResult::Success { expression, value }
        }
        Err(error) => {
            warn!(%expression, %error, "failed to solve");
            CalcResult::Error { expression, error }
        }
    }
}

/// Format a canonical value for display.
///
/// With `separators` the integer part of a number gets thousand separators.
/// Anything that is not a plain number (`true`, `inf`, `NaN`) is returned as is.
pub fn format_display(value: &str, separators: bool) -> String {
    if !separators {
        return value.to_string();
    }

    let (sign, unsigned) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    if int_part.is_empty() || !int_part.chars().all(|c| c.is_ascii_digit()) {
        return value.to_string();
    }

    format!("{}{}{}", sign, format_with_separators(int_part), frac_part)
}

/// Insert a `,` between every group of three digits.
fn format_with_separators(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
