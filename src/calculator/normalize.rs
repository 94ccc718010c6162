//! Rewrites operator synonyms into the symbols the lexer understands.

/// Synonym -> canonical symbol.
const SYNONYMS: &[(&str, &str)] = &[("**", "^"), ("×", "*"), ("÷", "/"), ("∧", "^")];

/// Replace every operator synonym in `expression` and split it into characters.
///
/// Replacement is a single left-to-right pass, so `***` becomes `^*`.
pub fn normalize(expression: &str) -> Vec<char> {
    let mut output = String::with_capacity(expression.len());
    let mut rest = expression;

    'scan: while let Some(c) = rest.chars().next() {
        for &(from, to) in SYNONYMS {
            if let Some(tail) = rest.strip_prefix(from) {
                output.push_str(to);
                rest = tail;
                continue 'scan;
            }
        }
        output.push(c);
        rest = &rest[c.len_utf8()..];
    }

    output.chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(s: &str) -> String {
        normalize(s).into_iter().collect()
    }

    #[test]
    fn test_synonyms_replaced() {
        assert_eq!(normalized("2**3"), "2^3");
        assert_eq!(normalized("2×3"), "2*3");
        assert_eq!(normalized("6÷3"), "6/3");
        assert_eq!(normalized("2∧3"), "2^3");
    }

    #[test]
    fn test_other_characters_untouched() {
        assert_eq!(normalized("π * 2 + φ"), "π * 2 + φ");
        assert_eq!(normalized(""), "");
    }

    #[test]
    fn test_single_pass() {
        assert_eq!(normalized("2***3"), "2^*3");
        assert_eq!(normalized("1×2÷3**4"), "1*2/3^4");
    }
}
