/// ## Notification boundary
///
/// After any stack-or-register mutation the machine publishes the key
/// identifier of the operation just performed and the current (X, Y)
/// pair, in that order, to every attached observer. Calls are
/// synchronous and in-line; there is no queue.
pub trait Observer {
    fn update_operation(&mut self, operation: &str);
    fn update_registers(&mut self, registers: (f64, f64));
}

/// An observer that records the most recent operation and register pair,
/// for display layers and tests that need to query state after the fact.
#[derive(Default)]
pub struct Recorder {
    operation: String,
    registers: (f64, f64),
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder {
            operation: String::new(),
            registers: (0.0, 0.0),
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn registers(&self) -> (f64, f64) {
        self.registers
    }
}

impl Observer for Recorder {
    fn update_operation(&mut self, operation: &str) {
        self.operation = operation.to_string();
    }

    fn update_registers(&mut self, registers: (f64, f64)) {
        self.registers = registers;
    }
}
