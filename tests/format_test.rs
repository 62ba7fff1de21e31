use rpn::term::{fmt_auto, fmt_engineering, fmt_fixed, pad_left};

#[test]
fn test_fixed_preserves_trailing_zeros() {
    assert_eq!(fmt_fixed(3.14159, 2), "3.14");
    assert_eq!(fmt_fixed(-3.1, 2), "-3.10");
    assert_eq!(fmt_fixed(0.0, 5), "0.00000");
}

#[test]
fn test_engineering_notation() {
    assert_eq!(fmt_engineering(123.12345, 2), "1.23 E2");
    assert_eq!(fmt_engineering(-0.000123456, 3), "-1.235 E-4");
    assert_eq!(fmt_engineering(-0.000123456, 4), "-1.2346 E-4");
}

#[test]
fn test_engineering_trims_trailing_zeros() {
    assert_eq!(fmt_engineering(1500.0, 4), "1.5 E3");
    assert_eq!(fmt_engineering(2500000.0, 6), "2.5 E6");
}

#[test]
fn test_auto_format_by_magnitude() {
    assert_eq!(fmt_auto(0.0), "0.00000");
    assert_eq!(fmt_auto(5.5), "5.50000");
    assert_eq!(fmt_auto(-1.5), "-1.50000");
    assert_eq!(fmt_auto(12345.0), "12345.0");
    assert_eq!(fmt_auto(0.0025), "2.5 E-3");
    assert_eq!(fmt_auto(2.5e13), "2.5 E13");
}

#[test]
fn test_pad_left() {
    assert_eq!(pad_left("1.5", 6), "   1.5");
    assert_eq!(pad_left("123456789", 6), "123456789");
}
