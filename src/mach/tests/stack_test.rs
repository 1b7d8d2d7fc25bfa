use super::*;

#[test]
fn test_push_pop_order() {
    let mut stack: Stack<Val> = Stack::new(4);
    stack.push(1).unwrap();
    stack.push(2).unwrap();
    stack.push(3).unwrap();
    assert_eq!(stack.pop().unwrap(), 3);
    assert_eq!(stack.as_slice(), &[1, 2]);
    assert_eq!(stack.pop_2().unwrap(), (1, 2));
    assert!(stack.is_empty());
}

#[test]
fn test_overflow_leaves_stack_intact() {
    let mut stack: Stack<Val> = Stack::new(2);
    stack.push(1).unwrap();
    stack.push(2).unwrap();
    assert!(stack.is_full());
    let error = stack.push(3).unwrap_err();
    assert_eq!(error.code(), ErrorCode::StackOverflow);
    assert_eq!(stack.as_slice(), &[1, 2]);
}

#[test]
fn test_underflow() {
    let mut stack: Stack<Val> = Stack::new(STACK_MAX);
    assert_eq!(stack.pop().unwrap_err().code(), ErrorCode::StackUnderflow);
    stack.push(9).unwrap();
    assert_eq!(stack.pop_2().unwrap_err().code(), ErrorCode::StackUnderflow);
    assert!(stack.is_empty());
}

#[test]
fn test_stack_discipline() {
    let mut stack: Stack<Val> = Stack::new(STACK_MAX);
    for n in 0..10 {
        stack.push(n).unwrap();
    }
    for _ in 0..4 {
        stack.pop().unwrap();
    }
    assert_eq!(stack.as_slice(), &[0, 1, 2, 3, 4, 5]);
    stack.clear();
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.max_len(), STACK_MAX);
}
