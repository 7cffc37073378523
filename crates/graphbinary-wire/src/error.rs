/// Error returned when reading or writing a primitive field on the wire fails.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("truncated: expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("negative length prefix: {length}")]
    NegativeLength { length: i32 },

    #[error("invalid utf-8 in string payload")]
    InvalidUtf8(#[from] core::str::Utf8Error),
}
