#![allow(dead_code)]
use bytevm::lang::assemble;
use bytevm::mach::Runtime;

pub fn exec(runtime: &mut Runtime, source: &str) -> String {
    match assemble(source) {
        Ok(bytecode) => exec_bytes(runtime, &bytecode),
        Err(error) => format!("{}", error),
    }
}

pub fn exec_bytes(runtime: &mut Runtime, bytecode: &[u8]) -> String {
    match runtime.interpret(bytecode) {
        Ok(result) => format!("{}", result),
        Err(error) => format!("{}", error),
    }
}

pub fn run(source: &str) -> String {
    exec(&mut Runtime::default(), source)
}
