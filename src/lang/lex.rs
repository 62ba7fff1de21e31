use std::collections::HashMap;

/// The marker for a negative literal. `-` always means subtraction,
/// so a leading `~` stands in for the sign of a negative number.
pub const NEGATIVE_MARKER: char = '~';

/// Tokenize an RPN expression for string-evaluation mode.
///
/// Splits on whitespace, converts each token to uppercase, translates a
/// leading negative marker to a minus sign, and resolves long-form key
/// aliases (e.g. `LOG10`) back to the short key identifiers the state
/// machine understands. Tokens that match nothing pass through unchanged;
/// the state machine decides whether they are operands.
pub fn lex(expression: &str, reverse_keys: &HashMap<&str, &str>) -> Vec<String> {
    expression
        .split_whitespace()
        .map(|token| {
            let mut token = token.to_ascii_uppercase();
            if token.len() > 1 && token.starts_with(NEGATIVE_MARKER) {
                token.replace_range(0..1, "-");
            }
            match reverse_keys.get(token.as_str()) {
                Some(short) => short.to_string(),
                None => token,
            }
        })
        .collect()
}

/// Whether a token, as typed so far, is a valid decimal number.
/// Used to greedily continue a partially typed operand.
pub fn is_decimal(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}
