//! Expression detection for chat-style front ends.
//!
//! Determines whether a line of user input looks like something the
//! calculator should answer, before attempting to solve it.

use lazy_static::lazy_static;
use regex::Regex;

/// Named constants and boolean literals the lexer understands.
const WORDS: &[&str] = &["phi", "pi", "inf", "nan", "true", "false", "e", "E"];

lazy_static! {
    /// Matches strings containing only characters the lexer can classify.
    /// Allows: digits, whitespace, operators and their synonyms, punctuation,
    /// constant symbols and the latin letters used by constant spellings.
    static ref CALC_SAFE_CHARS: Regex = Regex::new(
        r"^[\d\s\.,;:+\-*/%\^&|=<>()×÷∧πφ∞a-zA-Z]+$"
    ).unwrap();

    /// Runs of latin letters.
    static ref WORD: Regex = Regex::new(r"[a-zA-Z]+").unwrap();
}

/// Check if input looks like a potential calculator expression.
///
/// Returns `true` if the input:
/// 1. Contains only calculator-safe characters
/// 2. Spells no words other than the known constants
/// 3. Has at least one operator, a percentage, or a named constant
/// 4. Is not just a plain number
pub fn looks_like_expression(input: &str) -> bool {
    let trimmed = input.trim();

    if trimmed.is_empty() || !CALC_SAFE_CHARS.is_match(trimmed) {
        return false;
    }

    // Every run of letters must be one or more known words back to back
    if !WORD.find_iter(trimmed).all(|m| is_known_words(m.as_str())) {
        return false;
    }

    if is_plain_number(trimmed) {
        return false;
    }

    has_operator(trimmed) || has_constant(trimmed)
}

/// Check if the input is just a plain number (no operations).
fn is_plain_number(input: &str) -> bool {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    // Allow optional leading minus for negative numbers
    let to_check = cleaned.strip_prefix('-').unwrap_or(&cleaned);

    !to_check.is_empty()
        && to_check
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

/// Check if input contains an operator symbol or synonym.
fn has_operator(input: &str) -> bool {
    input.contains(|c: char| "+-*/%^&|=<>×÷∧".contains(c))
}

/// Check if input contains a constant symbol or spelling.
fn has_constant(input: &str) -> bool {
    input.contains(['π', 'φ', '∞']) || WORD.is_match(input)
}

/// Whether `word` splits entirely into known constant or boolean spellings.
fn is_known_words(word: &str) -> bool {
    if word.is_empty() {
        return true;
    }
    WORDS.iter().any(|known| {
        word.strip_prefix(known)
            .is_some_and(|rest| is_known_words(rest))
    })
}
