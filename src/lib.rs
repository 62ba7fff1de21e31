//! # RPN-35
//!
//! A reverse Polish notation scientific calculator in the tradition of
//! the HP-35: four stack registers (X, Y, Z, T), a LASTX correction
//! register, and ten general purpose storage registers.
//!
//! Begin by opening a terminal and running the executable. Every key is
//! one keystroke; `q` quits and leaves the final X on the screen.
//!
//! Expressions can also be evaluated without the keypad:
//! ```text
//! $ rpn35 -e "16 ENTER 19 - LASTX + LASTX *"
//! 304.00000
//! ```
//!
//! RPN pushes operands on a stack and writes each operation's result
//! over them, so `4 - (3 + 2)` is entered as `4 ENTER 3 ENTER 2 + -`.

pub mod lang;
pub mod mach;
pub mod term;
