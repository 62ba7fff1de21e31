//! # RPN-35
//!
//! A reverse Polish notation scientific calculator in the tradition of
//! the HP-35.
//!

use std::process::exit;

const USAGE: &str = "\
Usage: rpn35 [OPTION]
A reverse Polish notation scientific calculator.

With no option, run the interactive keypad.
  -r, --repl        read expressions a line at a time
  -e, --eval EXPR   evaluate one expression and print register X
  -h, --help        show this message
";

fn main() {
    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        None => rpn::term::main(),
        Some("-r") | Some("--repl") => rpn::term::repl(),
        Some("-e") | Some("--eval") => match args.get(2) {
            Some(expression) => {
                if !rpn::term::eval_once(expression) {
                    exit(1);
                }
            }
            None => {
                eprintln!("{}", USAGE);
                exit(1);
            }
        },
        Some("-h") | Some("--help") => print!("{}", USAGE),
        Some(other) => {
            eprintln!("Unknown option: {}", other);
            eprintln!("{}", USAGE);
            exit(1);
        }
    }
}
