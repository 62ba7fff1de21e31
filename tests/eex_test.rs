mod common;
use common::*;

#[test]
fn test_eex_scales_the_mantissa() {
    assert!(close(eval("2 EEX 3"), 2000.0));
    assert!(close(eval("2 EEX ~3"), 0.002));
}

#[test]
fn test_eex_without_a_mantissa_is_a_power_of_ten() {
    assert!(close(eval("EEX 3"), 1000.0));
}

#[test]
fn test_eex_without_an_exponent_keeps_x() {
    assert!(close(eval("5 EEX"), 5.0));
}

#[test]
fn test_eex_operands_survive_an_enter() {
    // the exponent flag outlives ENTER's stack motion
    assert!(close(eval("2 EEX 3 ENTER 3 EEX 3 +"), 5000.0));
}

#[test]
fn test_eex_chains_multiply() {
    assert!(close(eval("2 EEX 1 EEX 2"), 2000.0));
}
