use std::{fmt, io};

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    /// Carries the offending input.
    InvalidUrl(String),
    EmptyName,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(error) => write!(f, "{error}"),
            Error::InvalidUrl(url) => write!(f, "'{url}' is not a valid file URL"),
            Error::EmptyName => write!(f, "the name to search for is empty"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
