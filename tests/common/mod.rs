use rpn::mach::{Evaluator, Keypad};

pub fn eval(expression: &str) -> f64 {
    let keypad = Keypad::new();
    let mut evaluator = Evaluator::new(&keypad);
    evaluator.eval(expression).unwrap()
}

#[allow(dead_code)]
pub fn eval_code(expression: &str) -> u16 {
    let keypad = Keypad::new();
    let mut evaluator = Evaluator::new(&keypad);
    evaluator.eval(expression).unwrap_err().code()
}

#[allow(dead_code)]
pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
