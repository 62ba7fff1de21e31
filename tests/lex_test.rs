use rpn::lang::{is_decimal, lex};
use rpn::mach::{Keypad, KEY_LOG10, KEY_RCL, KEY_SIN, KEY_STO};

#[test]
fn test_long_aliases_resolve_to_short_keys() {
    let keypad = Keypad::new();
    assert_eq!(
        lex("sin log10 sto rcl", &keypad.reverse_keys),
        vec![KEY_SIN, KEY_LOG10, KEY_STO, KEY_RCL]
    );
}

#[test]
fn test_tokens_are_uppercased() {
    let keypad = Keypad::new();
    assert_eq!(
        lex("foo 1e3", &keypad.reverse_keys),
        vec!["FOO", "1E3"]
    );
}

#[test]
fn test_negative_marker_becomes_a_sign() {
    let keypad = Keypad::new();
    assert_eq!(
        lex("~5 ~2.5 ~", &keypad.reverse_keys),
        vec!["-5", "-2.5", "~"]
    );
}

#[test]
fn test_operators_pass_through() {
    let keypad = Keypad::new();
    assert_eq!(
        lex("1 2 + - * / ^", &keypad.reverse_keys),
        vec!["1", "2", "+", "-", "*", "/", "^"]
    );
}

#[test]
fn test_is_decimal() {
    assert!(is_decimal("0"));
    assert!(is_decimal("-2.5"));
    assert!(is_decimal("1e-3"));
    assert!(!is_decimal(""));
    assert!(!is_decimal("2x"));
}
