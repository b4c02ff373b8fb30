use std::error;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum Error {
    /// A buffer or color list does not have the expected number of elements.
    DataSize {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A coordinate or symbol is outside of its range (`value` must be lower than `max`).
    InvalidArgument {
        what: &'static str,
        value: usize,
        max: usize,
    },
    /// Input was received before the game was started with `restart()`.
    NotStarted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::DataSize {
                what,
                expected,
                actual,
            } => write!(
                f,
                "{} must have exactly {} elements, got {}.",
                what, expected, actual
            ),
            Error::InvalidArgument { what, value, max } => write!(
                f,
                "{} must be in range 0..{}, got {}.",
                what, max, value
            ),
            Error::NotStarted => write!(f, "the game has not been started, call restart() first."),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

pub(crate) fn check_size(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::DataSize {
            what,
            expected,
            actual,
        })
    }
}

pub(crate) fn check_range(what: &'static str, value: usize, max: usize) -> Result<()> {
    if value < max {
        Ok(())
    } else {
        Err(Error::InvalidArgument { what, value, max })
    }
}
