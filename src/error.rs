use crate::header_writer::MAX_COLUMNS;
use geozero::error::GeozeroError;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum Error {
    /// Operation called in the wrong writer state (e.g. `open` twice)
    InvalidState(&'static str),
    /// A previous sink write failed, the stream is truncated
    Aborted,
    /// Column indices are u16 in property records
    TooManyColumns(usize),
    /// Column names must be unique within a header
    DuplicateColumn(String),
    Geometry(GeozeroError),
    IO(std::io::Error),
}
pub type Result<T> = std::result::Result<T, Error>;

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidState(msg) => write!(f, "Invalid writer state: {msg}"),
            Error::Aborted => "Stream aborted after a failed write".fmt(f),
            Error::TooManyColumns(count) => {
                write!(f, "Too many columns: {count} (maximum is {MAX_COLUMNS})")
            }
            Error::DuplicateColumn(name) => write!(f, "Duplicate column `{name}`"),
            Error::Geometry(geozero) => geozero.fmt(f),
            Error::IO(io) => io.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::IO(value)
    }
}

impl From<GeozeroError> for Error {
    fn from(value: GeozeroError) -> Self {
        Error::Geometry(value)
    }
}
