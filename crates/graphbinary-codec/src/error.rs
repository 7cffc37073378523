use graphbinary_wire::WireError;

/// Error returned when encoding an in-memory value to the wire fails.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("no handler registered for value shape {shape}")]
    UnregisteredType { shape: &'static str },

    #[error("{type_name} is a reserved type and cannot be encoded")]
    UnsupportedType { type_name: &'static str },

    #[error("value out of range for its wire width: {reason}")]
    OutOfRange { reason: String },

    #[error("value could not be encoded: {reason}")]
    EncodingError { reason: String },

    #[error("nesting depth {depth} exceeds the configured limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },
}

/// Error returned when decoding a wire value to an in-memory value fails.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("buffer too short: expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("unknown type code: {0:#04x}")]
    UnknownTypeCode(u8),

    #[error("{type_name} is a reserved type and cannot be decoded")]
    UnsupportedType { type_name: &'static str },

    #[error("value out of range: {reason}")]
    OutOfRange { reason: String },

    #[error("malformed value on the wire: {reason}")]
    EncodingError { reason: String },

    #[error("nesting depth {depth} exceeds the configured limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },
}

impl From<WireError> for DecodeError {
    fn from(error: WireError) -> Self {
        match error {
            WireError::Truncated { expected, actual } => DecodeError::Truncated { expected, actual },
            WireError::NegativeLength { length } => DecodeError::EncodingError {
                reason: format!("negative length prefix: {length}"),
            },
            WireError::InvalidUtf8(source) => DecodeError::EncodingError {
                reason: source.to_string(),
            },
        }
    }
}

impl From<WireError> for EncodeError {
    fn from(error: WireError) -> Self {
        match error {
            WireError::Truncated { expected, actual } => EncodeError::EncodingError {
                reason: format!("buffer too short: expected at least {expected} bytes, got {actual}"),
            },
            WireError::NegativeLength { length } => EncodeError::EncodingError {
                reason: format!("negative length prefix: {length}"),
            },
            WireError::InvalidUtf8(source) => EncodeError::EncodingError {
                reason: source.to_string(),
            },
        }
    }
}
