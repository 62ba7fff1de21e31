/*!
## Terminal interfaces

Two ways to drive the calculator from a terminal: an interactive mode
reading one raw keystroke at a time, the way the hardware felt, and a
line-oriented mode reading whole expressions with history and editing.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
extern crate mortal;

mod format;
pub use format::{fmt_auto, fmt_engineering, fmt_fixed, pad_left};

use crate::mach::{Evaluator, Keypad, Point, Press, Recorder};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use mortal::{Event, Key, PrepareConfig, Terminal};
use std::cell::RefCell;
use std::io::ErrorKind;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Width of a displayed register, matching the reference hardware's
/// ten significant digits plus sign and exponent.
const DISPLAY_WIDTH: usize = 14;

/// Run the interactive calculator until `q` or Ctrl-C.
pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = interactive_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn interactive_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let keypad = Keypad::new();
    let mut eval = Evaluator::new(&keypad);
    let recorder = Rc::new(RefCell::new(Recorder::new()));
    eval.runtime_mut().attach(recorder.clone());

    let term = Terminal::new()?;
    let state = term.prepare(PrepareConfig::default())?;
    // raw mode needs explicit carriage returns
    term.write_str(&keypad_help(&keypad).replace('\n', "\r\n"))?;
    term.write_str("\r\n")?;
    term.write_str(&status_line(&eval, &keypad, &recorder.borrow()))?;

    loop {
        if interrupted.load(Ordering::SeqCst) {
            break;
        }
        let event = match term.read_event(Some(Duration::from_millis(100))) {
            Ok(event) => event,
            // a signal landed mid-read; the flag poll above decides
            Err(ref error) if error.kind() == ErrorKind::Interrupted => continue,
            Err(error) => return Err(error),
        };
        let key = match event {
            Some(Event::Key(key)) => key,
            Some(_) | None => continue,
        };
        let keypress = match key {
            Key::Enter => crate::mach::KEY_ENTER.to_string(),
            Key::Char(ch) => ch.to_string(),
            Key::Ctrl('c') | Key::Ctrl('d') => break,
            _ => continue,
        };
        let storage_prefix = eval.runtime().flags().rcl_sto_pending;
        match eval.press(&keypress) {
            Ok(Press::Continue) => {}
            Ok(Press::Quit) => break,
            Err(error) => {
                term.write_str(&format!(
                    "\r\n{}\r\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
        }
        if storage_prefix {
            // the keypress just named a general register; show it
            if let Some(value) = eval.runtime().general_register(&keypress) {
                term.write_str(&format!(
                    "\r\n{}: {}\r\n",
                    keypress.to_ascii_uppercase(),
                    fmt_auto(value)
                ))?;
            }
        }
        term.write_str(&status_line(&eval, &keypad, &recorder.borrow()))?;
    }

    let (x, _) = eval.runtime().peek();
    term.write_str(&format!("\r\n{}\r\n", fmt_auto(x)))?;
    term.restore(state)?;
    Ok(())
}

/// One carriage-returned line showing Y, X (or the operand being
/// typed) and the most recent operation.
fn status_line(eval: &Evaluator, keypad: &Keypad, recorder: &Recorder) -> String {
    let (x, y) = eval.runtime().peek();
    let x_display = if eval.operand().is_empty() {
        pad_left(&fmt_auto(x), DISPLAY_WIDTH)
    } else {
        pad_left(eval.operand(), DISPLAY_WIDTH)
    };
    format!(
        "\rY:{}  X:{}  {:<12}",
        pad_left(&fmt_auto(y), DISPLAY_WIDTH),
        x_display,
        keypad.annotate(recorder.operation())
    )
}

/// Render the keypad as rows of annotated keys, laid out by each key's
/// grid position.
fn keypad_help(keypad: &Keypad) -> String {
    let mut keys: Vec<(Point, String)> = Vec::new();
    for info in keypad.stack_keys.values() {
        keys.push((info.point, info.annotation.to_string()));
    }
    for info in keypad.single_arg_keys.values() {
        keys.push((info.point, info.annotation.to_string()));
    }
    for info in keypad.double_arg_keys.values() {
        keys.push((info.point, info.annotation.to_string()));
    }
    for info in keypad.storage_keys.values() {
        keys.push((info.point, info.annotation.to_string()));
    }
    for info in keypad.eex_key.values() {
        keys.push((info.point, info.annotation.to_string()));
    }
    keys.sort_by_key(|(point, _)| (point.y, point.x));
    let mut out = String::new();
    let mut row = 0;
    for (point, annotation) in keys {
        if point.y != row {
            out.push('\n');
            row = point.y;
        }
        out.push_str(&format!("{:<12}", annotation));
    }
    out.push('\n');
    out
}

/// Run the expression-at-a-time calculator until Ctrl-D.
pub fn repl() {
    if let Err(error) = repl_loop() {
        eprintln!("{}", error);
    }
}

fn repl_loop() -> std::io::Result<()> {
    let keypad = Keypad::new();
    let mut eval = Evaluator::new(&keypad);
    let interface = Interface::new("rpn35")?;
    interface.set_prompt("> ")?;
    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string.trim().is_empty() {
            continue;
        }
        match eval.eval(&string) {
            Ok(x) => {
                interface.write_fmt(format_args!("{}\n", fmt_auto(x)))?;
                interface.add_history_unique(string);
            }
            Err(error) => {
                interface.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
        }
    }
    Ok(())
}

/// Evaluate a single expression and print the result, for shell use.
/// A fatal error prints bold on stderr and reports failure.
pub fn eval_once(expression: &str) -> bool {
    let keypad = Keypad::new();
    let mut eval = Evaluator::new(&keypad);
    match eval.eval(expression) {
        Ok(x) => {
            println!("{}", fmt_auto(x));
            true
        }
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            false
        }
    }
}
