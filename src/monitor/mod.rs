mod command;
mod error;
mod session;

pub use command::{Command, parse_command};
pub use error::ParseError;
pub use session::{execute, run_script};
