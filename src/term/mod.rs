extern crate ansi_term;
extern crate linefeed;
use crate::lang::{assemble, Error};
use crate::mach::{Listing, Runtime};
use crate::error;
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = "\
PUSHI 10 ; push 10
PUSHI 20 ; push 20
ADD      ; 10 + 20 = 30
PUSHI 5  ; push 5
MUL      ; 30 * 5 = 150
POPRES   ; result register = 150
DONE
";

pub fn main() {
    init_tracing();
    let code = match std::env::args().nth(1) {
        Some(filename) => run_file(&filename),
        None => match main_loop() {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("{}", error);
                1
            }
        },
    };
    std::process::exit(code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_file(filename: &str) -> i32 {
    let mut runtime = Runtime::default();
    match load(filename).and_then(|bytecode| runtime.interpret(&bytecode)) {
        Ok(result) => {
            println!("RESULT {}", result);
            0
        }
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            1
        }
    }
}

fn main_loop() -> std::io::Result<()> {
    let mut session = Session::default();
    let command = Interface::new("BYTEVM")?;
    command.write_fmt(format_args!("BYTEVM\nREADY.\n"))?;
    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        match session.enter(&string) {
            Ok(output) => {
                if !output.is_empty() {
                    command.write_fmt(format_args!("{}\n", output))?;
                }
            }
            Err(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
        }
        if !string.trim().is_empty() {
            command.add_history_unique(string);
        }
    }
    Ok(())
}

/// ## Interactive program buffer
///
/// Instruction lines accumulate in a source buffer. Words in
/// upper or lower case are commands:
/// `RUN`, `LIST`, `NEW`, `SAMPLE`, `LOAD "file"`, `SAVE "file"`.

#[derive(Default)]
pub struct Session {
    runtime: Runtime,
    source: Vec<String>,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn source(&self) -> String {
        let mut s = self.source.join("\n");
        if !s.is_empty() {
            s.push('\n');
        }
        s
    }

    pub fn enter(&mut self, line: &str) -> Result<String, Error> {
        let trimmed = line.trim();
        let (word, arg) = match trimmed.find(char::is_whitespace) {
            Some(index) => (&trimmed[..index], trimmed[index..].trim()),
            None => (trimmed, ""),
        };
        match word.to_ascii_uppercase().as_str() {
            "" => Ok(String::new()),
            "RUN" => {
                let bytecode = assemble(&self.source())?;
                let result = self.runtime.interpret(&bytecode)?;
                Ok(format!("RESULT {}", result))
            }
            "LIST" => {
                let listing = Listing::new(&assemble(&self.source())?);
                Ok(listing.to_string().trim_end().to_string())
            }
            "NEW" => {
                self.source.clear();
                Ok(String::new())
            }
            "SAMPLE" => {
                self.set_source(SAMPLE);
                Ok(String::new())
            }
            "LOAD" => {
                let bytecode = load(filename(arg)?)?;
                self.set_source(&Listing::new(&bytecode).source());
                Ok(String::new())
            }
            "SAVE" => {
                save(&self.source(), filename(arg)?)?;
                Ok(String::new())
            }
            _ => {
                self.source.push(trimmed.to_string());
                if let Err(error) = assemble(&self.source()) {
                    self.source.pop();
                    return Err(error);
                }
                Ok(String::new())
            }
        }
    }

    fn set_source(&mut self, source: &str) {
        self.source = source.lines().map(|line| line.to_string()).collect();
    }
}

fn filename(arg: &str) -> Result<&str, Error> {
    let name = arg.trim_matches('"');
    if name.is_empty() {
        Err(error!(SyntaxError; "MISSING FILE NAME"))
    } else {
        Ok(name)
    }
}

/// Files ending in `.asm` are assembly text, anything else is raw bytecode.
fn load(filename: &str) -> Result<Vec<u8>, Error> {
    let mut file = match File::open(filename) {
        Ok(file) => file,
        Err(error) => match error.kind() {
            ErrorKind::NotFound => return Err(error!(FileNotFound)),
            _ => return Err(error!(InternalError; "CAN'T OPEN FILE")),
        },
    };
    let mut bytes = vec![];
    if file.read_to_end(&mut bytes).is_err() {
        return Err(error!(InternalError; "CAN'T READ FILE"));
    }
    if filename.ends_with(".asm") {
        match String::from_utf8(bytes) {
            Ok(source) => assemble(&source),
            Err(_) => Err(error!(SyntaxError; "FILE IS NOT TEXT")),
        }
    } else {
        Ok(bytes)
    }
}

fn save(source: &str, filename: &str) -> Result<(), Error> {
    if source.is_empty() {
        return Err(error!(InternalError; "NOTHING TO SAVE"));
    }
    let bytes = if filename.ends_with(".asm") {
        source.as_bytes().to_vec()
    } else {
        assemble(source)?
    };
    let mut file = match File::create(filename) {
        Ok(file) => file,
        Err(_) => return Err(error!(InternalError; "CAN'T CREATE FILE")),
    };
    if file.write_all(&bytes).is_err() {
        return Err(error!(InternalError; "CAN'T WRITE FILE"));
    }
    Ok(())
}
