use super::keypad::{self, Engine, Keypad};
use super::runtime::Runtime;
use crate::lang::{is_decimal, lex, Error, NEGATIVE_MARKER};

type Result<T> = std::result::Result<T, Error>;

/// What a keypress did to the evaluation loop.
#[derive(Debug, PartialEq)]
pub enum Press {
    Continue,
    Quit,
}

/// How a token was classified before dispatch.
#[derive(Debug, PartialEq, Clone, Copy)]
enum Kind {
    None,
    Eex,
    Enter,
    Stack,
    Numeric,
    Storage,
}

/// ## The input state machine
///
/// Consumes a sequence of keys or tokens, buffers a partially typed
/// operand, and drives the machine. Interactive mode feeds it one
/// keystroke at a time; string mode feeds it whole tokens through the
/// same path, which is what makes the two modes agree.
pub struct Evaluator<'a> {
    keypad: &'a Keypad,
    runtime: Runtime<'a>,
    /// Digits of the number being typed, possibly empty.
    operand: String,
    /// The STO/RCL key awaiting its register-name token.
    pending_storage: Option<String>,
}

impl<'a> Evaluator<'a> {
    pub fn new(keypad: &'a Keypad) -> Evaluator<'a> {
        Evaluator {
            keypad,
            runtime: Runtime::new(keypad),
            operand: String::new(),
            pending_storage: None,
        }
    }

    pub fn runtime(&self) -> &Runtime<'a> {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime<'a> {
        &mut self.runtime
    }

    /// The operand typed so far, for display previews.
    pub fn operand(&self) -> &str {
        &self.operand
    }

    fn classify(&self, keypress: &str) -> Kind {
        if self.keypad.eex_key.contains_key(keypress) {
            Kind::Eex
        } else if keypress == keypad::KEY_ENTER {
            Kind::Enter
        } else if self.keypad.stack_keys.contains_key(keypress) {
            Kind::Stack
        } else if self.keypad.single_arg_keys.contains_key(keypress)
            || self.keypad.double_arg_keys.contains_key(keypress)
        {
            Kind::Numeric
        } else if self.keypad.storage_keys.contains_key(keypress) {
            Kind::Storage
        } else {
            Kind::None
        }
    }

    /// Write the buffered operand into the stack before an operation
    /// consumes it.
    fn flush_operand(&mut self) {
        if self.operand.is_empty() {
            return;
        }
        match self.operand.parse::<f64>() {
            Ok(num) => self.runtime.insert(num),
            Err(_) => {
                // unreachable through press(), which only buffers valid
                // decimals; reported rather than trusted
                eprintln!("Invalid operand ignored: {}", self.operand);
            }
        }
        self.operand.clear();
    }

    /// Feed one key (or one string-mode token) to the machine.
    ///
    /// A STO/RCL prefix consumes the following token as its register
    /// name before any reclassification, so every register letter is
    /// reachable, including the one that doubles as the EEX key. A
    /// token that extends the buffered operand to a valid decimal is
    /// always an operand; otherwise EEX, ENTER, stack, numeric and
    /// storage keys are tried in that order. Anything left over is
    /// reported and ignored.
    pub fn press(&mut self, keypress: &str) -> Result<Press> {
        if let Some(operation) = self.pending_storage.take() {
            self.runtime.set_storage_pending(false);
            if let Some(key) = self.keypad.storage_keys.get(operation.as_str()) {
                (key.function)(&mut self.runtime, keypress);
            }
            self.operand.clear();
            return Ok(Press::Continue);
        }

        let mut extended = self.operand.clone();
        extended.push_str(keypress);
        if is_decimal(&extended) {
            self.operand = extended;
            return Ok(Press::Continue);
        }
        if self.operand.is_empty() && keypress == NEGATIVE_MARKER.to_string() {
            // seed a negative literal; `-` itself means subtraction
            self.operand.push_str("-0");
            return Ok(Press::Continue);
        }

        match self.classify(keypress) {
            Kind::Eex => {
                // the operand typed so far is the exponent entry's
                // pending value; it reaches the machine through eex,
                // not through insert
                let pending = self.operand.parse::<f64>().ok();
                if let Some(key) = self.keypad.eex_key.get(keypress) {
                    (key.function)(&mut self.runtime, pending);
                }
            }
            Kind::Enter => {
                self.flush_operand();
                self.runtime.enter();
            }
            Kind::Stack => {
                self.flush_operand();
                if let Some(key) = self.keypad.stack_keys.get(keypress) {
                    (key.function)(&mut self.runtime);
                }
            }
            Kind::Numeric => {
                self.flush_operand();
                self.runtime.calculate(keypress)?;
            }
            Kind::Storage => {
                self.flush_operand();
                self.pending_storage = Some(keypress.to_string());
                self.runtime.set_storage_pending(true);
            }
            Kind::None => {
                // string mode uppercases tokens, so match the quit key
                // in either case
                if keypress.eq_ignore_ascii_case(keypad::KEY_QUIT) {
                    return Ok(Press::Quit);
                }
                eprintln!("Invalid input ignored: {}", keypress);
            }
        }
        self.operand.clear();
        Ok(Press::Continue)
    }

    /// Evaluate a whole expression written in reverse Polish notation,
    /// operands and operations separated by spaces. A trailing operand
    /// is entered as if an operation followed it. Returns the final
    /// content of register X.
    ///
    /// ```
    /// let keypad = rpn::mach::Keypad::new();
    /// let mut eval = rpn::mach::Evaluator::new(&keypad);
    /// assert_eq!(eval.eval("12 ENTER 7 -").unwrap(), 5.0);
    /// ```
    pub fn eval(&mut self, expression: &str) -> Result<f64> {
        for token in lex(expression, &self.keypad.reverse_keys) {
            if let Press::Quit = self.press(&token)? {
                break;
            }
        }
        self.flush_operand();
        Ok(self.runtime.peek().0)
    }
}
