use std::sync::Arc;

use bytes::{BufMut, Bytes, BytesMut};
use graphbinary_types::GraphBinaryValue;
use tracing::instrument;

use crate::config::CodecConfig;
use crate::error::EncodeError;
use crate::registry::{Registry, RegistryOverrides};
use crate::type_code::NULL_CODE;

/// Public entry point for turning in-memory `GraphBinaryValue`s into wire
/// bytes. Immutable after construction: the registry is built once from the
/// built-in defaults plus any caller overrides, then never mutated, so an
/// `Encoder` is `Send + Sync` and safely shared across threads provided each
/// call site uses its own output buffer.
#[derive(Clone)]
pub struct Encoder {
    registry: Arc<Registry>,
    config: CodecConfig,
}

impl Encoder {
    pub fn new(overrides: Option<RegistryOverrides>) -> Self {
        Self::with_config(overrides, CodecConfig::default())
    }

    pub fn with_config(overrides: Option<RegistryOverrides>, config: CodecConfig) -> Self {
        Self {
            registry: Arc::new(Registry::build(overrides)),
            config,
        }
    }

    /// Encodes one complete value in fully-qualified form: a bare `Null`
    /// produces the single untyped-null byte; anything else produces
    /// `[type_code][value_flag = 0x00][payload]`.
    #[instrument(skip_all, fields(shape = value.shape_name()))]
    pub fn write_object(&self, value: &GraphBinaryValue) -> Result<Bytes, EncodeError> {
        let mut out = BytesMut::new();
        self.write_value(value, &mut out, 0)?;
        Ok(out.freeze())
    }

    /// Recursive encode used both by `write_object` and by handlers writing
    /// nested fully-typed values (list elements, map pairs, graph element
    /// ids, traverser objects, ...).
    pub(crate) fn write_value(&self, value: &GraphBinaryValue, out: &mut BytesMut, depth: usize) -> Result<(), EncodeError> {
        if depth > self.config.max_nesting_depth {
            return Err(EncodeError::NestingTooDeep {
                depth,
                limit: self.config.max_nesting_depth,
            });
        }

        if value.is_null() {
            out.put_u8(NULL_CODE);
            return Ok(());
        }

        let handler = self.registry.resolve_encoder(value)?;
        out.put_u8(handler.type_code().as_byte());
        out.put_u8(0x00);
        handler.encode_payload(value, self, out, depth)
    }

    /// Writes the `[0x09][0x00]` header for a fully-typed list whose items
    /// come from a borrowed slice rather than an owned `GraphBinaryValue`
    /// (used by the `Path` handler for its `labels`/`objects` fields).
    pub(crate) fn write_list_header(&self, out: &mut BytesMut, depth: usize) -> Result<(), EncodeError> {
        if depth > self.config.max_nesting_depth {
            return Err(EncodeError::NestingTooDeep {
                depth,
                limit: self.config.max_nesting_depth,
            });
        }
        out.put_u8(crate::type_code::TypeCode::List.as_byte());
        out.put_u8(0x00);
        Ok(())
    }
}
