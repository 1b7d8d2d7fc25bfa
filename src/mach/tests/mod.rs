use super::*;
use crate::lang::ErrorCode;
use std::convert::TryFrom;

mod stack_test;

#[test]
fn test_opcode_bytes() {
    for byte in 0..=6u8 {
        let opcode = Opcode::try_from(byte).unwrap();
        assert_eq!(u8::from(opcode), byte);
        assert_eq!(Opcode::from_mnemonic(&opcode.to_string()), Some(opcode));
    }
    for byte in 7..=255u8 {
        let error = Opcode::try_from(byte).unwrap_err();
        assert_eq!(error.code(), ErrorCode::UnknownOpcode);
    }
}

#[test]
fn test_opcode_immediate_len() {
    assert_eq!(Opcode::PushImmediate.immediate_len(), 1);
    assert_eq!(Opcode::Div.immediate_len(), 0);
    assert_eq!(Opcode::Done.immediate_len(), 0);
}

#[test]
fn test_operation_divide_by_zero() {
    assert_eq!(Operation::divide(7, 2).unwrap(), 3);
    let error = Operation::divide(7, 0).unwrap_err();
    assert_eq!(error.code(), ErrorCode::DivisionByZero);
}

#[test]
fn test_operation_wraps() {
    assert_eq!(Operation::sum(u64::MAX, 2).unwrap(), 1);
    assert_eq!(Operation::subtract(0, 1).unwrap(), u64::MAX);
    assert_eq!(Operation::multiply(1 << 63, 2).unwrap(), 0);
}
