use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidNumber(String),
    TrailingArgument(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownCommand(cmd) => write!(f, "unknown command '{}'", cmd),
            ParseError::MissingArgument(name) => write!(f, "missing argument <{}>", name),
            ParseError::InvalidNumber(raw) => write!(f, "invalid number '{}'", raw),
            ParseError::TrailingArgument(raw) => write!(f, "unexpected argument '{}'", raw),
        }
    }
}

impl std::error::Error for ParseError {}
