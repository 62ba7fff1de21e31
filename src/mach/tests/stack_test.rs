use crate::mach::{Stack, REG_T, REG_X, REG_Y, REG_Z};

fn filled() -> Stack {
    let mut stack = Stack::new();
    stack[REG_X] = 1.0;
    stack[REG_Y] = 2.0;
    stack[REG_Z] = 3.0;
    stack[REG_T] = 4.0;
    stack
}

#[test]
fn test_new_reads_zero() {
    let stack = Stack::new();
    for i in 0..Stack::LEN {
        assert_eq!(stack[i], 0.0);
    }
}

#[test]
fn test_shift_up_discards_top_and_zeroes_x() {
    let mut stack = filled();
    stack.shift_up();
    assert_eq!(stack[REG_X], 0.0);
    assert_eq!(stack[REG_Y], 1.0);
    assert_eq!(stack[REG_Z], 2.0);
    assert_eq!(stack[REG_T], 3.0);
}

#[test]
fn test_shift_down_replicates_top() {
    let mut stack = filled();
    stack.shift_down();
    assert_eq!(stack[REG_X], 2.0);
    assert_eq!(stack[REG_Y], 3.0);
    assert_eq!(stack[REG_Z], 4.0);
    assert_eq!(stack[REG_T], 4.0);
}

#[test]
fn test_shift_down_is_not_the_inverse_of_shift_up() {
    // the replicated top register means a round trip does not restore
    // the original stack
    let mut stack = filled();
    stack.shift_up();
    stack.shift_down();
    assert_eq!(stack[REG_X], 1.0);
    assert_eq!(stack[REG_Y], 2.0);
    assert_eq!(stack[REG_Z], 3.0);
    assert_eq!(stack[REG_T], 3.0);
}

#[test]
fn test_clear() {
    let mut stack = filled();
    stack.clear();
    for i in 0..Stack::LEN {
        assert_eq!(stack[i], 0.0);
    }
}

#[test]
fn test_write_x() {
    let mut stack = filled();
    stack.write_x(9.5);
    assert_eq!(stack[REG_X], 9.5);
    assert_eq!(stack[REG_Y], 2.0);
}
