use super::{Address, Opcode, Operation, Stack, Val, STACK_MAX};
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Machine state and dispatch loop
///
/// Each `Runtime` owns its own program copy, stack and result register.
/// Independent runtimes share nothing.
///
/// ```
/// use bytevm::mach::Runtime;
/// let mut runtime = Runtime::default();
/// assert_eq!(runtime.interpret(&[0, 10, 0, 20, 1, 5, 6]).unwrap(), 30);
/// ```

pub struct Runtime {
    program: Vec<u8>,
    ip: Address,
    stack: Stack<Val>,
    result: Val,
    running: bool,
}

#[derive(Debug, PartialEq)]
pub enum Event {
    /// Nothing loaded, or the program already terminated.
    Stopped,
    /// Cycle budget exhausted; call `execute` again.
    Running,
    Done(Val),
    Errors(Error),
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            program: vec![],
            ip: 0,
            stack: Stack::new(STACK_MAX),
            result: 0,
            running: false,
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn reset(&mut self) {
        debug!("resetting machine");
        self.program.clear();
        self.ip = 0;
        self.stack.clear();
        self.result = 0;
        self.running = false;
    }

    pub fn load(&mut self, bytecode: &[u8]) {
        self.reset();
        self.program.extend_from_slice(bytecode);
        self.running = true;
    }

    /// Reset, load and run to termination.
    /// `Ok` holds the result register, which stays 0 unless `PopResult` ran.
    pub fn interpret(&mut self, bytecode: &[u8]) -> Result<Val> {
        self.load(bytecode);
        debug!(len = bytecode.len(), "starting machine");
        loop {
            match self.execute(usize::MAX) {
                Event::Done(val) => return Ok(val),
                Event::Errors(error) => return Err(error),
                Event::Running => {}
                Event::Stopped => return Err(error!(InternalError; "MACHINE STOPPED")),
            }
        }
    }

    /// Run at most `cycles` instructions.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if !self.running {
            return Event::Stopped;
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(false) => {}
                Ok(true) => {
                    self.running = false;
                    debug!(result = self.result, "machine done");
                    return Event::Done(self.result);
                }
                Err(error) => {
                    self.running = false;
                    debug!(%error, depth = self.stack.len(), "machine halted");
                    return Event::Errors(error);
                }
            }
        }
        Event::Running
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn ip(&self) -> Address {
        self.ip
    }

    pub fn result(&self) -> Val {
        self.result
    }

    pub fn stack(&self) -> &[Val] {
        self.stack.as_slice()
    }

    fn step(&mut self) -> Result<bool> {
        let addr = self.ip;
        self.dispatch(addr).map_err(|error| error.in_address(addr))
    }

    fn dispatch(&mut self, addr: Address) -> Result<bool> {
        let opcode = Opcode::try_from(self.fetch()?)?;
        trace!(addr, %opcode, depth = self.stack.len(), "dispatch");
        match opcode {
            Opcode::PushImmediate => {
                let val = self.fetch()?;
                self.stack.push(Val::from(val))?;
            }
            Opcode::Add => self.binary(Operation::sum)?,
            Opcode::Sub => self.binary(Operation::subtract)?,
            Opcode::Mul => self.binary(Operation::multiply)?,
            Opcode::Div => {
                // A zero divisor leaves the dividend on the stack.
                let rhs = self.stack.pop()?;
                if rhs == 0 {
                    return Err(error!(DivisionByZero));
                }
                let lhs = self.stack.pop()?;
                self.stack.push(Operation::divide(lhs, rhs)?)?;
            }
            Opcode::PopResult => self.result = self.stack.pop()?,
            Opcode::Done => return Ok(true),
        }
        Ok(false)
    }

    fn fetch(&mut self) -> Result<u8> {
        let byte = match self.program.get(self.ip) {
            Some(byte) => *byte,
            None => return Err(error!(TruncatedProgram)),
        };
        self.ip += 1;
        Ok(byte)
    }

    fn binary(&mut self, op: fn(Val, Val) -> Result<Val>) -> Result<()> {
        let (lhs, rhs) = self.stack.pop_2()?;
        self.stack.push(op(lhs, rhs)?)
    }
}
