use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use log::{debug, warn};

use super::command::{Command, parse_command};
use crate::mmu::WordMemory;

/// Applies `command` and returns what the monitor prints for it.
pub fn execute<M: WordMemory + ?Sized>(memory: &mut M, command: Command) -> String {
    debug!("{}", command);
    match command {
        Command::Read(addr) => format!("{:#06x}: {:#06x}", addr, memory.read(addr)),
        Command::Write(addr, val) => {
            memory.write(addr, val);
            "ok".to_string()
        }
        Command::Dump(start, len) => {
            let mut out = String::new();
            for (i, val) in memory.read_block(start, len).into_iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                let addr = start.wrapping_add(i as u32);
                let _ = write!(out, "{:#06x}: {:#06x}", addr, val);
            }
            out
        }
        Command::Fill(val) => {
            for addr in 0..memory.capacity() {
                memory.write(addr, val);
            }
            "ok".to_string()
        }
        Command::Capacity => memory.capacity().to_string(),
    }
}

/// Runs every line of `input` against `memory`, writing responses to `output`.
///
/// Bad lines are reported inline and skipped. Returns the number of bad lines.
pub fn run_script<M, R, W>(memory: &mut M, input: R, mut output: W) -> io::Result<usize>
where
    M: WordMemory + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut errors = 0;
    for (number, line) in input.lines().enumerate() {
        let line = line?;
        match parse_command(&line) {
            Ok(Some(command)) => {
                let response = execute(memory, command);
                if !response.is_empty() {
                    writeln!(output, "{}", response)?;
                }
            }
            Ok(None) => {}
            Err(err) => {
                warn!("line {}: {}", number + 1, err);
                writeln!(output, "error: line {}: {}", number + 1, err)?;
                errors += 1;
            }
        }
    }
    output.flush()?;
    Ok(errors)
}
