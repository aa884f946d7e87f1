use std::fmt;
use std::str::{FromStr, SplitWhitespace};

use super::error::ParseError;
use crate::constants::{Address, COMMENT_PREFIX, Word};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    Read(Address),
    Write(Address, Word),
    Dump(Address, usize),
    Fill(Word),
    Capacity,
}

/// Parses one monitor line. Blank lines and comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }
    line.parse().map(Some)
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut args = s.split_whitespace();
        let name = args.next().ok_or(ParseError::MissingArgument("command"))?;

        let command = match name.to_ascii_lowercase().as_str() {
            "read" | "r" => Command::Read(number(&mut args, "address")?),
            "write" | "w" => Command::Write(number(&mut args, "address")?, number(&mut args, "value")?),
            "dump" | "d" => Command::Dump(number(&mut args, "start")?, number(&mut args, "len")?),
            "fill" => Command::Fill(number(&mut args, "value")?),
            "capacity" | "cap" => Command::Capacity,
            _ => return Err(ParseError::UnknownCommand(name.to_string())),
        };

        match args.next() {
            Some(extra) => Err(ParseError::TrailingArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Read(addr) => write!(f, "read {:#06x}", addr),
            Command::Write(addr, val) => write!(f, "write {:#06x} {:#06x}", addr, val),
            Command::Dump(start, len) => write!(f, "dump {:#06x} {}", start, len),
            Command::Fill(val) => write!(f, "fill {:#06x}", val),
            Command::Capacity => write!(f, "capacity"),
        }
    }
}

// Accepts decimal or 0x-prefixed hex. Overflow of the target type is an
// invalid number, so values wider than a word are rejected here.
fn number<T>(args: &mut SplitWhitespace<'_>, name: &'static str) -> Result<T, ParseError>
where
    T: TryFrom<u64>,
{
    let raw = args.next().ok_or(ParseError::MissingArgument(name))?;
    let invalid = || ParseError::InvalidNumber(raw.to_string());

    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => raw.parse::<u64>(),
    }
    .map_err(|_| invalid())?;

    T::try_from(parsed).map_err(|_| invalid())
}
