use std::fmt;
use std::io;

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    MissingExtension,
    InvalidExtension {
        expected: &'static str,
        found: String,
    },
    /// Images are whole words; a trailing half word is rejected.
    OddLength(usize),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "I/O error: {}", err),
            LoadError::MissingExtension => write!(f, "Image file has no extension"),
            LoadError::InvalidExtension { expected, found } => write!(
                f,
                "Invalid image file extension: expected '{}', found '{}'",
                expected, found
            ),
            LoadError::OddLength(len) => write!(
                f,
                "Image length {} is not a whole number of 16-bit words",
                len
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}
