use bytes::{Bytes, BytesMut};
use graphbinary_types::GraphBinaryValue;
use graphbinary_wire::{WireDecode, WireEncode};

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::registry::TypeHandler;
use crate::type_code::TypeCode;

pub struct StringHandler;

impl TypeHandler for StringHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::String
    }

    fn encode_payload(&self, value: &GraphBinaryValue, _encoder: &Encoder, out: &mut BytesMut, _depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::String(v) => {
                out.write_string(v);
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    fn decode_payload(&self, _decoder: &Decoder, input: &mut Bytes, _depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        Ok(GraphBinaryValue::String(input.read_string()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Encoder;

    #[test]
    fn matches_fixed_vector() {
        let bytes = Encoder::new(None)
            .write_object(&GraphBinaryValue::String("abc".to_string()))
            .unwrap();
        assert_eq!(&bytes[..], &[0x03, 0x00, 0x00, 0x00, 0x00, 0x03, b'a', b'b', b'c']);
    }

    #[test]
    fn round_trips_through_decoder() {
        let encoder = Encoder::new(None);
        let decoder = crate::Decoder::new(None);
        let value = GraphBinaryValue::String("gremlin".to_string());
        let bytes = encoder.write_object(&value).unwrap();
        assert_eq!(decoder.read_object(bytes).unwrap(), value);
    }
}
