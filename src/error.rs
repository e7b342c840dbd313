use std::io;
use std::result;

/// An error found while reading, grouping or reporting.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Csv(csv::Error),
    UnknownEncoding(String),
    Decode { line: u64, reason: String },
    MalformedRow { line: u64, required: usize, found: usize },
    NonNumericValue { key: String, value: String },
    Format(strfmt::FmtError),
    InvalidDelimiter(String),
}

pub type Result<T> = result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        Error::Io(error)
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Error {
        Error::Csv(error)
    }
}

impl From<strfmt::FmtError> for Error {
    fn from(error: strfmt::FmtError) -> Error {
        Error::Format(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Io(ref e) => Some(e),
            Error::Csv(ref e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Error::Io(ref e) => write!(f, "IO error: {}", e),
            Error::Csv(ref e) => write!(f, "CSV error: {}", e),
            Error::UnknownEncoding(ref label) => write!(f, "Unknown encoding: {}", label),
            Error::Decode { line, ref reason } => {
                write!(f, "could not decode line {}: {}", line, reason)
            }
            Error::MalformedRow { line, required, found } => write!(
                f,
                "malformed row at line {}: expected at least {} fields, found {}",
                line, required, found
            ),
            Error::NonNumericValue { ref key, ref value } => {
                write!(f, "non numeric value {:?} in group {:?}", value, key)
            }
            Error::Format(ref e) => write!(f, "Could not render template: {}", e),
            Error::InvalidDelimiter(ref d) => {
                write!(f, "delimiter must be a single ASCII character, got {:?}", d)
            }
        }
    }
}
