/*!
## Rust Machine Module

This Rust module is the calculator: the four-register stack, the keypad
that maps keys to executable operations, the machine that owns the
registers, and the state machine that turns keystrokes into register
mutations.

*/

mod eval;
mod keypad;
mod observer;
mod runtime;
mod stack;

#[cfg(test)]
mod tests;

pub use eval::Evaluator;
pub use eval::Press;
pub use keypad::Engine;
pub use keypad::Keypad;
pub use keypad::Point;
pub use keypad::DIVISION_EPSILON;
pub use keypad::GENERAL_REGISTERS;
pub use keypad::{
    KEY_ACOS, KEY_ASIN, KEY_ATAN, KEY_CHS, KEY_CLS, KEY_CLX, KEY_COS, KEY_DIV, KEY_EEX,
    KEY_ENTER, KEY_EXP, KEY_INV, KEY_LASTX, KEY_LN, KEY_LOG10, KEY_MINUS, KEY_MUL, KEY_PI,
    KEY_PLUS, KEY_POWER, KEY_QUIT, KEY_RCL, KEY_RDN, KEY_SIN, KEY_SQRT, KEY_STO, KEY_SWAP,
    KEY_TAN,
};
pub use observer::Observer;
pub use observer::Recorder;
pub use runtime::Flags;
pub use runtime::Runtime;
pub use stack::Stack;
pub use stack::{REG_T, REG_X, REG_Y, REG_Z};
