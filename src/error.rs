use std::fmt;
use std::num::ParseIntError;

pub enum Error {
    InvalidArgument(String),
    Cancelled,
    Generic(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(why) => write!(f, "[Error] {}", why),
            Error::Cancelled => write!(f, "[Error] the computation was cancelled"),
            Error::Generic(why) => write!(f, "[Error] {}", why)
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(why) => write!(f, "Invalid argument: {}", why),
            Error::Cancelled => write!(f, "Cancelled"),
            Error::Generic(why) => write!(f, "Generic error: {}", why)
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Error) -> bool {
        match (self, other) {
            (Error::InvalidArgument(a), Error::InvalidArgument(b)) => a == b,
            (Error::Cancelled, Error::Cancelled) => true,
            (Error::Generic(a), Error::Generic(b)) => a == b,
            _ => false
        }
    }
}

impl From<String> for Error {
    fn from(err: String) -> Error {
        Error::Generic(err)
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Error {
        Error::InvalidArgument(format!("failed to parse integer: {}", err))
    }
}
