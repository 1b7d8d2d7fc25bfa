/*!
# Rust Language Module

This Rust module provides the error type shared by the whole crate
and a line-oriented assembler for the machine's instruction set.

*/

pub type LineNumber = Option<usize>;
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod asm;
mod lex;

pub use asm::assemble;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
