use rpn::mach::{Keypad, GENERAL_REGISTERS, KEY_PLUS, KEY_SIN};

#[test]
fn test_annotate_spells_out_the_long_alias() {
    let keypad = Keypad::new();
    assert_eq!(keypad.annotate(KEY_SIN), "SIN (s)");
    assert_eq!(keypad.annotate("E"), "EEX (E)");
}

#[test]
fn test_annotate_is_plain_when_the_alias_is_the_key() {
    let keypad = Keypad::new();
    assert_eq!(keypad.annotate(KEY_PLUS), "+");
}

#[test]
fn test_annotate_unknown_key_is_empty() {
    let keypad = Keypad::new();
    assert_eq!(keypad.annotate("zz"), "");
}

#[test]
fn test_long_key_searches_every_category() {
    let keypad = Keypad::new();
    assert_eq!(keypad.long_key(" "), Some("ENTER"));
    assert_eq!(keypad.long_key("r"), Some("SQRT"));
    assert_eq!(keypad.long_key("/"), Some("/"));
    assert_eq!(keypad.long_key("#"), Some("STO"));
    assert_eq!(keypad.long_key("E"), Some("EEX"));
    assert_eq!(keypad.long_key("%"), None);
}

#[test]
fn test_general_register_index() {
    assert_eq!(Keypad::general_register_index("A"), Some(0));
    assert_eq!(Keypad::general_register_index("j"), Some(9));
    assert_eq!(Keypad::general_register_index("Z"), None);
    assert_eq!(GENERAL_REGISTERS.len(), 10);
}

#[test]
fn test_every_key_has_a_distinct_grid_position() {
    let keypad = Keypad::new();
    let mut points = Vec::new();
    for info in keypad.stack_keys.values() {
        points.push(info.point);
    }
    for info in keypad.single_arg_keys.values() {
        points.push(info.point);
    }
    for info in keypad.double_arg_keys.values() {
        points.push(info.point);
    }
    for info in keypad.storage_keys.values() {
        points.push(info.point);
    }
    for info in keypad.eex_key.values() {
        points.push(info.point);
    }
    for (i, a) in points.iter().enumerate() {
        for b in points.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
