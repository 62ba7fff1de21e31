/*!
# Rust Language Module

This Rust module provides error reporting and the token surface of the
calculator: how an expression string becomes the key tokens that drive
the machine.

*/

#[macro_use]
mod error;
mod lex;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::is_decimal;
pub use lex::lex;
pub use lex::NEGATIVE_MARKER;
