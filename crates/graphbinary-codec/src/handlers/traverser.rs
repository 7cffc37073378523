use bytes::{Bytes, BytesMut};
use graphbinary_types::{GraphBinaryValue, Traverser};
use graphbinary_wire::{WireDecode, WireEncode};

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::registry::TypeHandler;
use crate::type_code::TypeCode;

pub struct TraverserHandler;

impl TypeHandler for TraverserHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::Traverser
    }

    fn encode_payload(&self, value: &GraphBinaryValue, encoder: &Encoder, out: &mut BytesMut, depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::Traverser(t) => {
                out.write_i64(t.bulk);
                encoder.write_value(&t.object, out, depth + 1)?;
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    fn decode_payload(&self, decoder: &Decoder, input: &mut Bytes, depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        let bulk = input.read_i64()?;
        let object = decoder.read_value(input, depth + 1)?;
        Ok(GraphBinaryValue::Traverser(Traverser::new(object, bulk)))
    }
}
