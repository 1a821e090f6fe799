use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: u32, cols: u32 },

    #[error(
        "buffer of {len} bytes doesn't hold a whole number of {stride}-byte \
         vertices"
    )]
    InvalidBufferLength { len: usize, stride: usize },

    #[error("vertex #{index} is out of bounds (buffer holds {count})")]
    OutOfBounds { index: usize, count: usize },

    #[error("expected {expected} heat values, got {actual}")]
    ValueCountMismatch { expected: usize, actual: usize },
}
