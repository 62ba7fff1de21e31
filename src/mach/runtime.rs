use super::keypad::{self, Engine, Keypad, GENERAL_REGISTERS};
use super::observer::Observer;
use super::stack::{Stack, REG_T, REG_X, REG_Y};
use crate::error;
use crate::lang::Error;
use std::cell::RefCell;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Entry-interpretation flags. All transient; reset with the machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct Flags {
    /// The next insert must lift the stack before writing X. Cleared by
    /// ENTER and CLX, whose X is still "being typed".
    pub shift_up: bool,
    /// The most recent action was exponent entry, so the next insert
    /// multiplies X by a power of ten instead of replacing it.
    pub eex_pressed: bool,
    /// A STO/RCL prefix is awaiting its register-name key.
    pub rcl_sto_pending: bool,
}

/// ## The calculator machine
///
/// Owns the four-register stack, the LASTX correction register, the ten
/// general purpose storage registers and the entry flags. Every key on
/// the keypad ultimately lands in one of the methods here. Holds its
/// keypad by reference; one keypad may serve any number of machines.
///
/// ```text
/// 4 - (3 + 2), or in RPN: 4 3 2 + -
///
///   |     |    |     |    |  4  |   |     |   |     |
/// 4 |     | 3  |  4  | 2  |  3  | + |  4  | - |     | <- Y
///   |  4  |    |  3  |    |  2  |   |  5  |   | -1  | <- X
///   +-----+    +-----+    +-----+   +-----+   +-----+
/// ```
pub struct Runtime<'a> {
    keypad: &'a Keypad,
    stack: Stack,
    /// Value of X before the most recent numeric operation or RCL.
    lastx: f64,
    /// The ten general registers, independent of the stack.
    sto_regs: [f64; GENERAL_REGISTERS.len()],
    flags: Flags,
    observers: Vec<Rc<RefCell<dyn Observer>>>,
}

impl<'a> Runtime<'a> {
    pub fn new(keypad: &'a Keypad) -> Runtime<'a> {
        Runtime {
            keypad,
            stack: Stack::new(),
            lastx: 0.0,
            sto_regs: [0.0; GENERAL_REGISTERS.len()],
            flags: Flags {
                shift_up: true,
                eex_pressed: false,
                rcl_sto_pending: false,
            },
            observers: Vec::new(),
        }
    }

    pub fn attach(&mut self, observer: Rc<RefCell<dyn Observer>>) {
        self.observers.push(observer);
    }

    /// Remove an observer from the notification list. Machine state is
    /// unaffected; an observer that was never attached is a no-op.
    pub fn detach(&mut self, observer: &Rc<RefCell<dyn Observer>>) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    fn notify_operation(&self, operation: &str) {
        for observer in &self.observers {
            observer.borrow_mut().update_operation(operation);
        }
    }

    fn notify_value(&self) {
        let registers = self.peek();
        for observer in &self.observers {
            observer.borrow_mut().update_registers(registers);
        }
    }

    /// Current (X, Y) pair, without mutation.
    pub fn peek(&self) -> (f64, f64) {
        (self.stack[REG_X], self.stack[REG_Y])
    }

    pub fn lastx(&self) -> f64 {
        self.lastx
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn set_storage_pending(&mut self, pending: bool) {
        self.flags.rcl_sto_pending = pending;
    }

    /// Value of a general register, None for names that aren't registers.
    pub fn general_register(&self, name: &str) -> Option<f64> {
        Keypad::general_register_index(name).map(|idx| self.sto_regs[idx])
    }

    /// Insert a number by writing to register X. When a calculation
    /// previously took place the stack lifts first to make room; right
    /// after ENTER it writes over X in place; right after EEX the number
    /// is an exponent and multiplies X by a power of ten.
    ///
    /// ```text
    /// typing 9 + 13, starting from X = Y = 6:
    /// |     |     |     |     |     |      |     |
    /// |  6  |  9  |  6  |  +  |     |  13  |  15 |
    /// |  6  |     |  9  |     |  15 |      |  13 |
    /// +-----+     +-----+     +-----+      +-----+
    ///   lift=F      lift=T      lift=F
    /// ```
    pub fn insert(&mut self, num: f64) {
        if self.flags.eex_pressed {
            self.stack[REG_X] *= 10f64.powf(num);
        } else if self.flags.shift_up {
            self.stack.shift_up();
            self.stack.write_x(num);
        } else {
            // ENTER was pressed; write in the current register X
            self.stack.write_x(num);
        }
        self.flags.shift_up = true;
        self.flags.eex_pressed = false;
        self.notify_value();
    }

    /// Emulate pressing a function key. One-argument keys use register X
    /// as input and output; two-argument keys read X and Y, write the
    /// result to Y and drop the stack. X is saved in LASTX either way.
    ///
    /// ```text
    ///    before: (LOG)  after:  |  before:    (/)    after:
    /// T->   4             3     |     4                4
    /// Z->   3             2     |     3                4
    /// Y->   2             1     |     2                3
    /// X->   1             0     |    0.1               20
    /// ```
    pub fn calculate(&mut self, operation: &str) -> Result<f64> {
        self.flags.shift_up = true;
        self.lastx = self.stack[REG_X];
        let mut valid_operation = false;
        if let Some(key) = self.keypad.single_arg_keys.get(operation) {
            self.stack[REG_X] = (key.function)(self.stack[REG_X])?;
            valid_operation = true;
        }
        if let Some(key) = self.keypad.double_arg_keys.get(operation) {
            self.stack[REG_Y] = (key.function)(self.stack[REG_X], self.stack[REG_Y])?;
            // drop the old register X
            self.stack.shift_down();
            valid_operation = true;
        }
        if valid_operation {
            self.notify_operation(operation);
            self.notify_value();
            Ok(self.stack[REG_X])
        } else {
            Err(error!(UnknownOperation; operation))
        }
    }
}

impl<'a> Engine for Runtime<'a> {
    fn swap_xy(&mut self) {
        let x = self.stack[REG_X];
        self.stack[REG_X] = self.stack[REG_Y];
        self.stack[REG_Y] = x;
        self.flags.eex_pressed = false;
        self.notify_operation(keypad::KEY_SWAP);
        self.notify_value();
    }

    /// Circularly rotate the stack down; the old X becomes the new T.
    fn rdn(&mut self) {
        let old_first = self.stack[REG_X];
        for i in 0..Stack::LEN - 1 {
            self.stack[i] = self.stack[i + 1];
        }
        self.stack[REG_T] = old_first;
        self.flags.eex_pressed = false;
        self.notify_operation(keypad::KEY_RDN);
        self.notify_value();
    }

    /// Lift the stack, discarding T, then clone Y into X. A following
    /// insert writes over the clone rather than lifting again; this is
    /// how two consecutive operands are separated.
    fn enter(&mut self) {
        self.stack.shift_up();
        self.stack[REG_X] = self.stack[REG_Y];
        self.flags.eex_pressed = false;
        self.flags.shift_up = false;
        self.notify_operation(keypad::KEY_ENTER);
        self.notify_value();
    }

    /// Lift the stack and insert the LASTX register, re-entering the
    /// operand the most recent operation consumed.
    fn last_x(&mut self) {
        self.stack.shift_up();
        self.stack[REG_X] = self.lastx;
        self.flags.eex_pressed = false;
        self.notify_operation(keypad::KEY_LASTX);
        self.notify_value();
    }

    /// Insert pi through the ordinary insert path, so it honors the
    /// shift-up and exponent-entry flags like any typed number.
    fn pi(&mut self) {
        self.insert(std::f64::consts::PI);
        self.notify_operation(keypad::KEY_PI);
        self.notify_value();
    }

    /// Zero register X only, to fix a typo in the last entered number.
    /// The cleared X is still being typed, so the stack must not lift.
    fn clx(&mut self) {
        self.stack.write_x(0.0);
        self.flags.shift_up = false;
        self.notify_operation(keypad::KEY_CLX);
        self.notify_value();
    }

    /// Zero the entire stack by clearing X and letting three ENTERs
    /// propagate the zero through all four registers.
    fn cls(&mut self) {
        self.stack.write_x(0.0);
        self.enter();
        self.enter();
        self.enter();
        self.notify_operation(keypad::KEY_CLS);
        self.notify_value();
    }

    /// Exponent entry. With both the pending operand and X at zero, X is
    /// primed to 1 so the coming power of ten reads as plain magnitude
    /// entry. A second EEX in a row multiplies X by 10^operand (exponent
    /// chaining). A zero operand against a nonzero X means the exponent
    /// has not been typed yet and does nothing. Otherwise the operand
    /// lands in X outright.
    fn eex(&mut self, operand: Option<f64>) {
        let operand = operand.unwrap_or(0.0);
        let regx = self.stack[REG_X];
        if is_near_zero(operand) && is_near_zero(regx) {
            self.stack.write_x(1.0);
        } else if self.flags.eex_pressed {
            self.stack[REG_X] *= 10f64.powf(operand);
        } else if is_near_zero(operand) && !is_near_zero(regx) {
            // exponent not yet typed
        } else {
            self.stack.write_x(operand);
        }
        self.flags.shift_up = false;
        self.flags.eex_pressed = true;
        self.notify_operation(keypad::KEY_EEX);
        self.notify_value();
    }

    /// Copy X into a named general register. Unknown names are silently
    /// ignored to keep entry fluid.
    fn sto(&mut self, name: &str) {
        let idx = match Keypad::general_register_index(name) {
            Some(idx) => idx,
            None => return,
        };
        self.sto_regs[idx] = self.stack[REG_X];
        self.flags.shift_up = true;
        self.flags.eex_pressed = false;
        // the stack is unchanged so no register values are published
        self.notify_operation(keypad::KEY_STO);
    }

    /// Overwrite X with a named general register. X is saved in LASTX
    /// first, matching the reference hardware. Unknown names are
    /// silently ignored.
    fn rcl(&mut self, name: &str) {
        let idx = match Keypad::general_register_index(name) {
            Some(idx) => idx,
            None => return,
        };
        self.lastx = self.stack[REG_X];
        self.stack[REG_X] = self.sto_regs[idx];
        self.flags.shift_up = true;
        self.flags.eex_pressed = false;
        self.notify_operation(keypad::KEY_RCL);
        self.notify_value();
    }
}

fn is_near_zero(x: f64) -> bool {
    x.abs() < f64::MIN_POSITIVE * 100.0
}

impl<'a> std::fmt::Display for Runtime<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "X\tY\tZ\tT\tLASTX")?;
        writeln!(
            f,
            "{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
            self.stack[REG_X],
            self.stack[REG_Y],
            self.stack[super::stack::REG_Z],
            self.stack[REG_T],
            self.lastx
        )
    }
}
