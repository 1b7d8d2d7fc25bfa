use super::{lex, Column, Error, LineNumber};
use crate::error;
use crate::mach::Opcode;

type Result<T> = std::result::Result<T, Error>;

/// ## Assembler
///
/// Translates mnemonics into bytecode, one instruction per line.
///
/// ```
/// let bytes = bytevm::lang::assemble("PUSHI 2\nPUSHI 3\nMUL\nPOPRES\nDONE").unwrap();
/// assert_eq!(bytes, vec![0, 2, 0, 3, 4, 5, 6]);
/// ```
///
/// `BYTE n` emits a raw byte, which is how a listing spells anything
/// that does not decode as an instruction.
pub fn assemble(source: &str) -> Result<Vec<u8>> {
    let mut bytes = vec![];
    for (index, line) in source.lines().enumerate() {
        assemble_line(&mut bytes, Some(index + 1), line)?;
    }
    Ok(bytes)
}

fn assemble_line(bytes: &mut Vec<u8>, line_number: LineNumber, line: &str) -> Result<()> {
    let words = lex(line);
    let mut words = words.iter();
    let (col, mnemonic) = match words.next() {
        Some(word) => word,
        None => return Ok(()),
    };
    if mnemonic.eq_ignore_ascii_case("BYTE") {
        bytes.push(immediate(line_number, col, words.next())?);
    } else {
        let opcode = match Opcode::from_mnemonic(mnemonic) {
            Some(opcode) => opcode,
            None => return Err(error!(SyntaxError, line_number, ..col; "UNKNOWN MNEMONIC")),
        };
        bytes.push(opcode.into());
        for _ in 0..opcode.immediate_len() {
            bytes.push(immediate(line_number, col, words.next())?);
        }
    }
    if let Some((col, _)) = words.next() {
        return Err(error!(SyntaxError, line_number, ..col; "UNEXPECTED OPERAND"));
    }
    Ok(())
}

fn immediate(line_number: LineNumber, prev: &Column, word: Option<&(Column, &str)>) -> Result<u8> {
    match word {
        None => Err(error!(SyntaxError, line_number, ..&(prev.end..prev.end); "MISSING IMMEDIATE")),
        Some((col, s)) => match parse_byte(s) {
            Some(byte) => Ok(byte),
            None => Err(error!(SyntaxError, line_number, ..col; "INVALID IMMEDIATE")),
        },
    }
}

fn parse_byte(s: &str) -> Option<u8> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16).ok()
    } else {
        s.parse::<u8>().ok()
    }
}
