mod common;
use common::*;

#[test]
fn test_sto_rcl_round_trip() {
    // RCL overwrites the 0 in X, leaving the original 42 in Y
    assert_eq!(eval("42 STO A 0 RCL A +"), 84.0);
}

#[test]
fn test_register_names_are_case_insensitive() {
    assert_eq!(eval("42 STO a RCL A"), 42.0);
    assert_eq!(eval("42 STO J RCL j"), 42.0);
}

#[test]
fn test_sto_register_e_is_not_exponent_entry() {
    // the token after STO/RCL always names a register; the 2 in X is
    // overwritten by the recall, leaving the stored 5 over the first 5
    assert_eq!(eval("5 STO E 2 RCL E +"), 10.0);
}

#[test]
fn test_sto_does_not_disturb_the_stack() {
    assert_eq!(eval("3 ENTER 4 STO B *"), 12.0);
}

#[test]
fn test_rcl_lifts_over_the_stored_value() {
    // X is recalled over the top of the stack, not pushed
    assert_eq!(eval("7 STO C 100 RCL C"), 7.0);
}

#[test]
fn test_unknown_register_is_a_silent_no_op() {
    assert_eq!(eval("7 STO Z RCL Z"), 7.0);
}

#[test]
fn test_short_storage_keys() {
    assert_eq!(eval("9 # D 0 ? D +"), 18.0);
}
