/// Index of register X, the bottom of the stack and the active value.
pub const REG_X: usize = 0;
/// Index of register Y.
pub const REG_Y: usize = 1;
/// Index of register Z.
pub const REG_Z: usize = 2;
/// Index of register T, the top of the stack.
pub const REG_T: usize = 3;

/// ## The four-register automatic memory stack
///
/// X, Y, Z and T are four contiguous cells; X is the bottom, where values
/// are entered, and T is the top. Unlike an ordinary push/pop stack it
/// supports exactly the intrinsic operations the calculator architecture
/// needs: shift up, shift down, clear and direct register access.
pub struct Stack {
    regs: [f64; Stack::LEN],
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.regs)
    }
}

impl Default for Stack {
    fn default() -> Stack {
        Stack::new()
    }
}

impl Stack {
    pub const LEN: usize = 4;

    pub fn new() -> Stack {
        Stack {
            regs: [0.0; Stack::LEN],
        }
    }

    /// Shift every register one position toward T, discarding the old T
    /// and zeroing X.
    /// ```text
    ///    before:     after:  |  t   +----------> T
    /// T->   4          3     |  z --+  +-------> Z
    /// Z->   3          2     |  y -----+  +----> Y
    /// Y->   2          1     |  x --------+      X = 0
    /// X->   1          0     |
    /// ```
    pub fn shift_up(&mut self) {
        for i in (1..Stack::LEN).rev() {
            self.regs[i] = self.regs[i - 1];
        }
        self.regs[REG_X] = 0.0;
    }

    /// Shift every register one position toward X, discarding the old X.
    /// The old T is replicated into the new T rather than zeroed; a binary
    /// operation consumes two operands but leaves the higher registers
    /// undisturbed.
    /// ```text
    ///    before:     after:  |  t ------+-----> T
    /// T->   4          4     |  z       +-----> Z
    /// Z->   3          4     |  y ------------> Y
    /// Y->   2          3     |  x ------------> X
    /// X->   1          2     |
    /// ```
    pub fn shift_down(&mut self) {
        let old_top = self.regs[Stack::LEN - 1];
        for i in 0..Stack::LEN - 1 {
            self.regs[i] = self.regs[i + 1];
        }
        self.regs[Stack::LEN - 1] = old_top;
    }

    pub fn clear(&mut self) {
        self.regs = [0.0; Stack::LEN];
    }

    pub fn write_x(&mut self, x: f64) {
        self.regs[REG_X] = x;
    }
}

impl std::ops::Index<usize> for Stack {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        &self.regs[index]
    }
}

impl std::ops::IndexMut<usize> for Stack {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.regs[index]
    }
}
