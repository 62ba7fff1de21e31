use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

// Key identifiers. Interactive mode reads these as single keystrokes;
// string mode reaches them through the long aliases in the reverse map.
// Keys that manipulate the stack:
pub const KEY_RDN: &str = "v";
pub const KEY_LASTX: &str = "x";
pub const KEY_SWAP: &str = "<";
pub const KEY_ENTER: &str = " ";
pub const KEY_PI: &str = "p";
pub const KEY_CLX: &str = "@";
pub const KEY_CLS: &str = "$";
// Numeric operations of one argument:
pub const KEY_CHS: &str = "!";
pub const KEY_INV: &str = "i";
pub const KEY_SIN: &str = "s";
pub const KEY_COS: &str = "c";
pub const KEY_TAN: &str = "t";
pub const KEY_ASIN: &str = "S";
pub const KEY_ACOS: &str = "C";
pub const KEY_ATAN: &str = "T";
pub const KEY_EXP: &str = "e";
pub const KEY_LN: &str = "l";
pub const KEY_LOG10: &str = "L";
pub const KEY_SQRT: &str = "r";
// Numeric operations of two arguments:
pub const KEY_PLUS: &str = "+";
pub const KEY_MINUS: &str = "-";
pub const KEY_MUL: &str = "*";
pub const KEY_DIV: &str = "/";
pub const KEY_POWER: &str = "^";
// Prefix operations; the next token names a general register:
pub const KEY_STO: &str = "#";
pub const KEY_RCL: &str = "?";
// Exponent entry:
pub const KEY_EEX: &str = "E";
// Ends the interactive loop:
pub const KEY_QUIT: &str = "q";

/// Names of the 10 general purpose storage registers. One letter each,
/// matched case-insensitively.
pub const GENERAL_REGISTERS: [&str; 10] =
    ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

/// A divisor below this magnitude is treated as zero.
pub const DIVISION_EPSILON: f64 = 1e-10;

/// The engine capabilities a key can trigger. The keypad dispatches
/// through this trait rather than the concrete engine so the table
/// depends only on what a key may do.
pub trait Engine {
    fn swap_xy(&mut self);
    fn rdn(&mut self);
    fn enter(&mut self);
    fn last_x(&mut self);
    fn pi(&mut self);
    fn clx(&mut self);
    fn cls(&mut self);
    fn sto(&mut self, name: &str);
    fn rcl(&mut self, name: &str);
    fn eex(&mut self, operand: Option<f64>);
}

/// Position of a key on the keypad grid, top left as origin (0, 0).
/// Two adjacent keys are (x, y) and (x+1, y); width and height are the
/// display layer's concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// A key that operates on the whole engine, e.g. ENTER or RDN.
pub struct StackKey {
    pub function: fn(&mut dyn Engine),
    pub annotation: &'static str,
    pub point: Point,
    pub long_key: &'static str,
}

/// A key that is a pure function of register X, e.g. SIN.
pub struct SingleArgKey {
    pub function: fn(f64) -> Result<f64>,
    pub annotation: &'static str,
    pub point: Point,
    pub long_key: &'static str,
}

/// A key that is a pure function of registers X and Y, e.g. `+`.
pub struct DoubleArgKey {
    pub function: fn(f64, f64) -> Result<f64>,
    pub annotation: &'static str,
    pub point: Point,
    pub long_key: &'static str,
}

/// A prefix key that takes a general register name, i.e. STO and RCL.
pub struct StorageKey {
    pub function: fn(&mut dyn Engine, &str),
    pub annotation: &'static str,
    pub point: Point,
    pub long_key: &'static str,
}

/// The exponent entry key. Receives the operand typed so far, if any.
pub struct EexKey {
    pub function: fn(&mut dyn Engine, Option<f64>),
    pub annotation: &'static str,
    pub point: Point,
    pub long_key: &'static str,
}

/// ## The calculator's keypad
///
/// A read-only table binding every key identifier to its executable
/// function, display annotation, grid position and long alias, partitioned
/// into five categories by arity and role. Built once and shared by
/// reference into each engine instance.
pub struct Keypad {
    pub stack_keys: HashMap<&'static str, StackKey>,
    pub single_arg_keys: HashMap<&'static str, SingleArgKey>,
    pub double_arg_keys: HashMap<&'static str, DoubleArgKey>,
    pub storage_keys: HashMap<&'static str, StorageKey>,
    pub eex_key: HashMap<&'static str, EexKey>,
    /// Long alias back to short key, e.g. `LOG10` -> `L`. Lets string
    /// mode feed the same tokenizer the keyboard does.
    pub reverse_keys: HashMap<&'static str, &'static str>,
}

impl Default for Keypad {
    fn default() -> Keypad {
        Keypad::new()
    }
}

impl Keypad {
    pub fn new() -> Keypad {
        let mut stack_keys: HashMap<&'static str, StackKey> = HashMap::new();
        stack_keys.insert(
            KEY_RDN,
            StackKey {
                function: |b| b.rdn(),
                annotation: "RDN",
                point: Point { x: 2, y: 3 },
                long_key: "RDN",
            },
        );
        stack_keys.insert(
            KEY_LASTX,
            StackKey {
                function: |b| b.last_x(),
                annotation: "LASTX",
                point: Point { x: 3, y: 3 },
                long_key: "LASTX",
            },
        );
        stack_keys.insert(
            KEY_SWAP,
            StackKey {
                function: |b| b.swap_xy(),
                annotation: "x<->y",
                point: Point { x: 1, y: 3 },
                long_key: "SWAP",
            },
        );
        stack_keys.insert(
            KEY_ENTER,
            StackKey {
                function: |b| b.enter(),
                annotation: "ENTER",
                point: Point { x: 0, y: 4 },
                long_key: "ENTER",
            },
        );
        stack_keys.insert(
            KEY_PI,
            StackKey {
                function: |b| b.pi(),
                annotation: "pi",
                point: Point { x: 4, y: 4 },
                long_key: "PI",
            },
        );
        stack_keys.insert(
            KEY_CLX,
            StackKey {
                function: |b| b.clx(),
                annotation: "CLX",
                point: Point { x: 3, y: 4 },
                long_key: "CLX",
            },
        );
        stack_keys.insert(
            KEY_CLS,
            StackKey {
                function: |b| b.cls(),
                annotation: "CLS",
                point: Point { x: 4, y: 0 },
                long_key: "CLS",
            },
        );

        let mut single_arg_keys: HashMap<&'static str, SingleArgKey> = HashMap::new();
        single_arg_keys.insert(
            KEY_CHS,
            SingleArgKey {
                function: chs,
                annotation: "chs",
                point: Point { x: 1, y: 4 },
                long_key: "CHS",
            },
        );
        single_arg_keys.insert(
            KEY_INV,
            SingleArgKey {
                function: inv,
                annotation: "1/x",
                point: Point { x: 0, y: 3 },
                long_key: "INV",
            },
        );
        single_arg_keys.insert(
            KEY_SIN,
            SingleArgKey {
                function: sin,
                annotation: "sin",
                point: Point { x: 1, y: 1 },
                long_key: "SIN",
            },
        );
        single_arg_keys.insert(
            KEY_COS,
            SingleArgKey {
                function: cos,
                annotation: "cos",
                point: Point { x: 2, y: 1 },
                long_key: "COS",
            },
        );
        single_arg_keys.insert(
            KEY_TAN,
            SingleArgKey {
                function: tan,
                annotation: "tan",
                point: Point { x: 3, y: 1 },
                long_key: "TAN",
            },
        );
        single_arg_keys.insert(
            KEY_ASIN,
            SingleArgKey {
                function: asin,
                annotation: "asin",
                point: Point { x: 1, y: 2 },
                long_key: "ASIN",
            },
        );
        single_arg_keys.insert(
            KEY_ACOS,
            SingleArgKey {
                function: acos,
                annotation: "acos",
                point: Point { x: 2, y: 2 },
                long_key: "ACOS",
            },
        );
        single_arg_keys.insert(
            KEY_ATAN,
            SingleArgKey {
                function: atan,
                annotation: "atan",
                point: Point { x: 3, y: 2 },
                long_key: "ATAN",
            },
        );
        single_arg_keys.insert(
            KEY_EXP,
            SingleArgKey {
                function: exp,
                annotation: "e^x",
                point: Point { x: 3, y: 0 },
                long_key: "EXP",
            },
        );
        single_arg_keys.insert(
            KEY_LN,
            SingleArgKey {
                function: ln,
                annotation: "ln",
                point: Point { x: 2, y: 0 },
                long_key: "LN",
            },
        );
        single_arg_keys.insert(
            KEY_LOG10,
            SingleArgKey {
                function: log10,
                annotation: "log10",
                point: Point { x: 1, y: 0 },
                long_key: "LOG10",
            },
        );
        single_arg_keys.insert(
            KEY_SQRT,
            SingleArgKey {
                function: sqrt,
                annotation: "sqrt",
                point: Point { x: 0, y: 1 },
                long_key: "SQRT",
            },
        );

        let mut double_arg_keys: HashMap<&'static str, DoubleArgKey> = HashMap::new();
        double_arg_keys.insert(
            KEY_PLUS,
            DoubleArgKey {
                function: sum,
                annotation: "+",
                point: Point { x: 0, y: 5 },
                long_key: "+",
            },
        );
        double_arg_keys.insert(
            KEY_MINUS,
            DoubleArgKey {
                function: subtract,
                annotation: "y-x",
                point: Point { x: 1, y: 5 },
                long_key: "-",
            },
        );
        double_arg_keys.insert(
            KEY_MUL,
            DoubleArgKey {
                function: multiply,
                annotation: "*",
                point: Point { x: 2, y: 5 },
                long_key: "*",
            },
        );
        double_arg_keys.insert(
            KEY_DIV,
            DoubleArgKey {
                function: divide,
                annotation: "y/x",
                point: Point { x: 3, y: 5 },
                long_key: "/",
            },
        );
        double_arg_keys.insert(
            KEY_POWER,
            DoubleArgKey {
                function: power,
                annotation: "x^y",
                point: Point { x: 4, y: 5 },
                long_key: "^",
            },
        );

        let mut storage_keys: HashMap<&'static str, StorageKey> = HashMap::new();
        storage_keys.insert(
            KEY_STO,
            StorageKey {
                function: |b, name| b.sto(name),
                annotation: "STO",
                point: Point { x: 4, y: 2 },
                long_key: "STO",
            },
        );
        storage_keys.insert(
            KEY_RCL,
            StorageKey {
                function: |b, name| b.rcl(name),
                annotation: "RCL",
                point: Point { x: 4, y: 3 },
                long_key: "RCL",
            },
        );

        let mut eex_key: HashMap<&'static str, EexKey> = HashMap::new();
        eex_key.insert(
            KEY_EEX,
            EexKey {
                function: |b, operand| b.eex(operand),
                annotation: "EEX",
                point: Point { x: 2, y: 4 },
                long_key: "EEX",
            },
        );

        let mut reverse_keys: HashMap<&'static str, &'static str> = HashMap::new();
        for (key, info) in &stack_keys {
            reverse_keys.insert(info.long_key, key);
        }
        for (key, info) in &single_arg_keys {
            reverse_keys.insert(info.long_key, key);
        }
        for (key, info) in &double_arg_keys {
            reverse_keys.insert(info.long_key, key);
        }
        for (key, info) in &storage_keys {
            reverse_keys.insert(info.long_key, key);
        }
        for (key, info) in &eex_key {
            reverse_keys.insert(info.long_key, key);
        }

        Keypad {
            stack_keys,
            single_arg_keys,
            double_arg_keys,
            storage_keys,
            eex_key,
            reverse_keys,
        }
    }

    /// The long alias of a keypress, searching every category.
    pub fn long_key(&self, keypress: &str) -> Option<&'static str> {
        if let Some(info) = self.stack_keys.get(keypress) {
            return Some(info.long_key);
        }
        if let Some(info) = self.single_arg_keys.get(keypress) {
            return Some(info.long_key);
        }
        if let Some(info) = self.double_arg_keys.get(keypress) {
            return Some(info.long_key);
        }
        if let Some(info) = self.storage_keys.get(keypress) {
            return Some(info.long_key);
        }
        if let Some(info) = self.eex_key.get(keypress) {
            return Some(info.long_key);
        }
        None
    }

    /// Compile a display description of a keypress; `s` becomes `SIN (s)`
    /// while `+`, whose long alias is itself, stays `+`. Empty string for
    /// a keypress that is not on the keypad.
    pub fn annotate(&self, keypress: &str) -> String {
        match self.long_key(keypress) {
            None => String::new(),
            Some(long_key) => {
                if keypress == long_key {
                    keypress.to_string()
                } else {
                    format!("{} ({})", long_key, keypress)
                }
            }
        }
    }

    /// Index of a general register by name, trying the upper then the
    /// lower form. None for names that aren't registers.
    pub fn general_register_index(name: &str) -> Option<usize> {
        let upper = name.to_ascii_uppercase();
        let lower = name.to_ascii_lowercase();
        GENERAL_REGISTERS
            .iter()
            .position(|&n| n == upper || n == lower)
    }
}

fn chs(x: f64) -> Result<f64> {
    Ok(-x)
}

fn inv(x: f64) -> Result<f64> {
    Ok(1.0 / x)
}

// Trigonometric keys work in degrees; conversion happens here so the
// engine never sees radians.
fn sin(x: f64) -> Result<f64> {
    Ok(x.to_radians().sin())
}

fn cos(x: f64) -> Result<f64> {
    Ok(x.to_radians().cos())
}

fn tan(x: f64) -> Result<f64> {
    Ok(x.to_radians().tan())
}

fn asin(x: f64) -> Result<f64> {
    Ok(x.asin().to_degrees())
}

fn acos(x: f64) -> Result<f64> {
    Ok(x.acos().to_degrees())
}

fn atan(x: f64) -> Result<f64> {
    Ok(x.atan().to_degrees())
}

fn exp(x: f64) -> Result<f64> {
    Ok(x.exp())
}

fn ln(x: f64) -> Result<f64> {
    Ok(x.ln())
}

fn log10(x: f64) -> Result<f64> {
    Ok(x.log10())
}

fn sqrt(x: f64) -> Result<f64> {
    Ok(x.sqrt())
}

fn sum(x: f64, y: f64) -> Result<f64> {
    Ok(x + y)
}

fn subtract(x: f64, y: f64) -> Result<f64> {
    Ok(y - x)
}

fn multiply(x: f64, y: f64) -> Result<f64> {
    Ok(x * y)
}

fn divide(x: f64, y: f64) -> Result<f64> {
    if x.abs() < DIVISION_EPSILON {
        Err(error!(DivisionByZero))
    } else {
        Ok(y / x)
    }
}

fn power(x: f64, y: f64) -> Result<f64> {
    Ok(x.powf(y))
}
