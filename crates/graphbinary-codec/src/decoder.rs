use std::sync::Arc;

use bytes::Bytes;
use graphbinary_types::GraphBinaryValue;
use graphbinary_wire::WireDecode;
use tracing::instrument;

use crate::config::CodecConfig;
use crate::error::DecodeError;
use crate::registry::{Registry, RegistryOverrides};
use crate::type_code::{TypeCode, NULL_CODE};

/// Public entry point for turning wire bytes back into `GraphBinaryValue`s.
/// See [`crate::Encoder`] for the shared immutability/thread-safety story.
#[derive(Clone)]
pub struct Decoder {
    registry: Arc<Registry>,
    config: CodecConfig,
}

impl Decoder {
    pub fn new(overrides: Option<RegistryOverrides>) -> Self {
        Self::with_config(overrides, CodecConfig::default())
    }

    pub fn with_config(overrides: Option<RegistryOverrides>, config: CodecConfig) -> Self {
        Self {
            registry: Arc::new(Registry::build(overrides)),
            config,
        }
    }

    /// Reads one complete value from the front of `input`, consuming
    /// exactly as many bytes as the value occupies.
    #[instrument(skip_all)]
    pub fn read_object(&self, input: impl Into<Bytes>) -> Result<GraphBinaryValue, DecodeError> {
        let mut input = input.into();
        self.read_value(&mut input, 0)
    }

    /// Recursive decode used both by `read_object` and by handlers reading
    /// nested fully-typed values.
    pub(crate) fn read_value(&self, input: &mut Bytes, depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        if depth > self.config.max_nesting_depth {
            return Err(DecodeError::NestingTooDeep {
                depth,
                limit: self.config.max_nesting_depth,
            });
        }

        let code = input.read_u8()?;
        if code == NULL_CODE {
            return Ok(GraphBinaryValue::Null);
        }

        let type_code = TypeCode::from_byte(code).ok_or(DecodeError::UnknownTypeCode(code))?;

        // Graph has no null form at all, so it is refused before the flag
        // byte is even consulted.
        if type_code == TypeCode::Graph {
            return Err(DecodeError::UnsupportedType {
                type_name: type_code.reserved_name(),
            });
        }

        let flag = input.read_u8()?;
        match flag {
            0x00 => {}
            0x01 => return Ok(GraphBinaryValue::Null),
            other => {
                return Err(DecodeError::EncodingError {
                    reason: format!("invalid value flag byte {other:#04x}"),
                })
            }
        }

        // Every other reserved code only errors here because its flag was
        // 0x00 (a real, unimplemented payload) -- a 0x01 flag already
        // returned `Null` above.
        if type_code.is_reserved() {
            return Err(DecodeError::UnsupportedType {
                type_name: type_code.reserved_name(),
            });
        }

        let handler = self
            .registry
            .resolve_decoder(code)
            .ok_or(DecodeError::UnknownTypeCode(code))?;
        handler.decode_payload(self, input, depth)
    }
}
