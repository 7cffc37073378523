use bytes::{Bytes, BytesMut};
use graphbinary_types::GraphBinaryValue;
use graphbinary_wire::{WireDecode, WireEncode};

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::registry::TypeHandler;
use crate::type_code::TypeCode;

pub struct PHandler;

impl TypeHandler for PHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::P
    }

    fn encode_payload(&self, value: &GraphBinaryValue, encoder: &Encoder, out: &mut BytesMut, depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::P(p) => {
                out.write_string(&p.operator);
                out.write_i32(if p.other.is_some() { 2 } else { 1 });
                encoder.write_value(&p.value, out, depth + 1)?;
                if let Some(other) = &p.other {
                    encoder.write_value(other, out, depth + 1)?;
                }
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    /// Write-only: `P` has no registered decode entry, so this is never
    /// reached through `Decoder::read_value`.
    fn decode_payload(&self, _decoder: &Decoder, _input: &mut Bytes, _depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        Err(DecodeError::UnsupportedType { type_name: "p" })
    }
}

pub struct TextPHandler;

impl TypeHandler for TextPHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::TextP
    }

    fn encode_payload(&self, value: &GraphBinaryValue, encoder: &Encoder, out: &mut BytesMut, depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::TextP(p) => {
                out.write_string(&p.operator);
                out.write_i32(if p.other.is_some() { 2 } else { 1 });
                encoder.write_value(&p.value, out, depth + 1)?;
                if let Some(other) = &p.other {
                    encoder.write_value(other, out, depth + 1)?;
                }
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    fn decode_payload(&self, _decoder: &Decoder, _input: &mut Bytes, _depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        Err(DecodeError::UnsupportedType { type_name: "textp" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Encoder;
    use graphbinary_types::P;

    #[test]
    fn single_argument_predicate_emits_argc_one() {
        let value = GraphBinaryValue::P(P::new("eq", GraphBinaryValue::Int(5)));
        let mut bytes = Encoder::new(None).write_object(&value).unwrap();

        assert_eq!(bytes.read_u8().unwrap(), TypeCode::P.as_byte());
        assert_eq!(bytes.read_u8().unwrap(), 0x00);
        assert_eq!(bytes.read_string().unwrap(), "eq");
        assert_eq!(bytes.read_i32().unwrap(), 1);
    }

    #[test]
    fn two_argument_predicate_emits_argc_two() {
        let value = GraphBinaryValue::P(P::with_other("between", GraphBinaryValue::Int(1), GraphBinaryValue::Int(10)));
        let mut bytes = Encoder::new(None).write_object(&value).unwrap();

        assert_eq!(bytes.read_u8().unwrap(), TypeCode::P.as_byte());
        assert_eq!(bytes.read_u8().unwrap(), 0x00);
        assert_eq!(bytes.read_string().unwrap(), "between");
        assert_eq!(bytes.read_i32().unwrap(), 2);
    }
}
