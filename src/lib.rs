//! # BYTEVM
//!
//! A very small stack machine. Programs are flat byte sequences:
//! an opcode byte, sometimes followed by an immediate byte.
//!
//! ```
//! use bytevm::mach::Runtime;
//!
//! // PUSHI 10, PUSHI 20, ADD, PUSHI 5, MUL, POPRES, DONE
//! let program = [0, 10, 0, 20, 1, 0, 5, 4, 5, 6];
//! let mut runtime = Runtime::new();
//! assert_eq!(runtime.interpret(&program).unwrap(), 150);
//! ```
//!
//! Run the executable with no arguments for an interactive session
//! that accepts assembly one instruction at a time. Type `SAMPLE`
//! then `RUN` to see the program above. Give a file name to run a
//! program directly; files ending in `.asm` are assembled first.
//!
//! Set `RUST_LOG=bytevm=trace` to watch every dispatched opcode.

pub mod lang;
pub mod mach;
pub mod term;
