use super::{Address, Opcode};
use std::convert::TryFrom;

/// ## Disassembly of bytecode
///
/// Bytes that do not decode, including a trailing instruction missing
/// its immediate, are listed as `BYTE n`. The text of every line
/// assembles back to the bytes it came from.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Listing {
    lines: Vec<(Address, String)>,
}

impl Listing {
    pub fn new(bytecode: &[u8]) -> Listing {
        let mut lines = vec![];
        let mut addr = 0;
        while let Some(&byte) = bytecode.get(addr) {
            let (text, len) = match Opcode::try_from(byte) {
                Ok(opcode) => {
                    let len = 1 + opcode.immediate_len();
                    match bytecode.get(addr + 1..addr + len) {
                        Some([]) => (opcode.to_string(), len),
                        Some([val]) => (format!("{} {}", opcode, val), len),
                        _ => (format!("BYTE {}", byte), 1),
                    }
                }
                Err(_) => (format!("BYTE {}", byte), 1),
            };
            lines.push((addr, text));
            addr += len;
        }
        Listing { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[(Address, String)] {
        &self.lines
    }

    pub fn line(&self, addr: Address) -> Option<&str> {
        self.lines
            .iter()
            .find(|(a, _)| *a == addr)
            .map(|(_, text)| text.as_str())
    }

    /// Assembly text without addresses.
    pub fn source(&self) -> String {
        let mut s = String::new();
        for (_, text) in &self.lines {
            s.push_str(text);
            s.push('\n');
        }
        s
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (addr, text) in &self.lines {
            writeln!(f, "{:04}  {}", addr, text)?;
        }
        Ok(())
    }
}
