/*!
## Rust Machine Module

This Rust module is the virtual machine: opcode decoding, the operand
stack, and the dispatch loop. A disassembler is included for listings.

*/

pub type Address = usize;
pub type Val = u64;

/// Operand stack capacity in values.
pub const STACK_MAX: usize = 256;

mod listing;
mod opcode;
mod operation;
mod runtime;
mod stack;

#[cfg(test)]
mod tests;

pub use listing::Listing;
pub use opcode::Opcode;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
