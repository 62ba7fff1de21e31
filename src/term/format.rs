/// Format a number with a fixed count of decimals, trailing zeros
/// preserved. `fmt_fixed(-3.1, 2)` is `-3.10`.
pub fn fmt_fixed(num: f64, precision: usize) -> String {
    format!("{:.*}", precision, num)
}

/// Format a number in scientific notation, `m E<magnitude>` with
/// 1 <= |m| < 10. Trailing zeros (and a then-dangling decimal point)
/// are trimmed from the mantissa:
///
/// ```
/// use rpn::term::fmt_engineering;
/// assert_eq!(fmt_engineering(123.12345, 2), "1.23 E2");
/// assert_eq!(fmt_engineering(-0.000123456, 3), "-1.235 E-4");
/// assert_eq!(fmt_engineering(1500.0, 2), "1.5 E3");
/// ```
pub fn fmt_engineering(num: f64, precision: usize) -> String {
    let magnitude = if num == 0.0 {
        0
    } else {
        num.abs().log10().floor() as i32
    };
    let mantissa = num / 10f64.powi(magnitude);
    let mantissa = fmt_fixed(mantissa, precision);
    let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{} E{}", mantissa, magnitude)
}

/// Pick a format for a number based on its magnitude: fixed precision
/// while it fits comfortably on a display, scientific notation once it
/// stops. The breakpoints are arbitrary but read well on a calculator.
pub fn fmt_auto(num: f64) -> String {
    let magnitude = num.abs();
    if magnitude < f64::MIN_POSITIVE * 100.0 {
        fmt_fixed(num, 5)
    } else if magnitude < 0.01 {
        fmt_engineering(num, 6)
    } else if magnitude < 1e3 {
        fmt_fixed(num, 5)
    } else if magnitude < 1e6 {
        fmt_fixed(num, 1)
    } else if magnitude < 1e12 {
        fmt_engineering(num, 6)
    } else if magnitude < 1e18 {
        fmt_engineering(num, 7)
    } else {
        fmt_engineering(num, 8)
    }
}

/// Pad the front of a string with spaces up to `width`, for
/// right-aligned register displays. Longer strings pass through.
pub fn pad_left(input: &str, width: usize) -> String {
    format!("{:>1$}", input, width)
}
