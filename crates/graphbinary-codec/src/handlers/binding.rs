use bytes::{Bytes, BytesMut};
use graphbinary_types::{Binding, GraphBinaryValue};
use graphbinary_wire::{WireDecode, WireEncode};

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::registry::TypeHandler;
use crate::type_code::TypeCode;

pub struct BindingHandler;

impl TypeHandler for BindingHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::Binding
    }

    fn encode_payload(&self, value: &GraphBinaryValue, encoder: &Encoder, out: &mut BytesMut, depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::Binding(b) => {
                out.write_string(&b.key);
                encoder.write_value(&b.value, out, depth + 1)?;
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    fn decode_payload(&self, decoder: &Decoder, input: &mut Bytes, depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        let key = input.read_string()?;
        let value = decoder.read_value(input, depth + 1)?;
        Ok(GraphBinaryValue::Binding(Binding::new(key, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decoder, Encoder};

    #[test]
    fn round_trips() {
        let value = GraphBinaryValue::Binding(Binding::new("x", GraphBinaryValue::Int(5)));
        let encoder = Encoder::new(None);
        let decoder = Decoder::new(None);
        let bytes = encoder.write_object(&value).unwrap();
        assert_eq!(decoder.read_object(bytes).unwrap(), value);
    }
}
