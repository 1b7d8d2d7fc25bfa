use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

/// ## Virtual machine instruction set
///
/// The machine has no general registers.
/// Every operation is performed on the stack, and a single result
/// register receives the answer.
///
/// For example: `(10 + 20) * 5` assembles to
/// `[PushImmediate(10), PushImmediate(20), Add, PushImmediate(5), Mul, PopResult, Done]`
///
/// Binary operations pop the right operand first, then the left.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    // *** Stack manipulation
    /// Push the next program byte on to the stack, widened to 64 bits.
    PushImmediate = 0,

    // *** Expression operations
    Add = 1,
    Sub = 2,
    /// Fails before the dividend is popped when the divisor is zero.
    Div = 3,
    Mul = 4,

    // *** Termination
    /// Pop stack to the result register.
    PopResult = 5,
    /// Halt successfully. Remaining stack values are ignored.
    Done = 6,
}

impl Opcode {
    /// Number of program bytes following the opcode byte.
    pub fn immediate_len(self) -> usize {
        match self {
            Opcode::PushImmediate => 1,
            _ => 0,
        }
    }

    pub fn from_mnemonic(s: &str) -> Option<Opcode> {
        use Opcode::*;
        match s.to_ascii_uppercase().as_str() {
            "PUSHI" | "PUSH_IMMEDIATE" => Some(PushImmediate),
            "ADD" => Some(Add),
            "SUB" => Some(Sub),
            "DIV" => Some(Div),
            "MUL" => Some(Mul),
            "POPRES" | "POP_RESULT" => Some(PopResult),
            "DONE" => Some(Done),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = Error;
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        use Opcode::*;
        match byte {
            0 => Ok(PushImmediate),
            1 => Ok(Add),
            2 => Ok(Sub),
            3 => Ok(Div),
            4 => Ok(Mul),
            5 => Ok(PopResult),
            6 => Ok(Done),
            _ => Err(error!(UnknownOpcode)),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> u8 {
        opcode as u8
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            PushImmediate => write!(f, "PUSHI"),
            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            Div => write!(f, "DIV"),
            Mul => write!(f, "MUL"),
            PopResult => write!(f, "POPRES"),
            Done => write!(f, "DONE"),
        }
    }
}
