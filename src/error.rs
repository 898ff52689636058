use std::io;

/// A enum that contains the different types of errors that the library returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    /// Writing a passphrase out failed.
    Output(io::Error),
    /// A line that isn't on the form `CODE<TAB>WORD<LF>`, with the 1-based line number.
    MalformedLine(usize, &'static str),
    /// A line longer than the configured limit, with the 1-based line number and the limit.
    LineTooLong(usize, usize),
    EmptyWordlist,
    InvalidArgument(&'static str),
    ConfigError(config::ConfigError),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "failed to write passphrase: {err}"),
            Self::MalformedLine(line, reason) => write!(f, "line {line}: {reason}"),
            Self::LineTooLong(line, limit) => {
                write!(f, "line {line}: longer than {limit} bytes")
            }
            Self::EmptyWordlist => write!(f, "the word list is empty"),
            Self::InvalidArgument(err) => write!(f, "{err}"),
            Self::ConfigError(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Output(err) => Some(err),
            Self::ConfigError(err) => Some(err),
            _ => None,
        }
    }
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
