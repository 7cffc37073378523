use bytes::{Bytes, BytesMut};
use graphbinary_types::{GraphBinaryMap, GraphBinaryValue};
use graphbinary_wire::{WireDecode, WireEncode};

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::registry::TypeHandler;
use crate::type_code::TypeCode;

pub(crate) fn write_count(out: &mut BytesMut, len: usize) -> Result<(), EncodeError> {
    let count = i32::try_from(len).map_err(|_| EncodeError::OutOfRange {
        reason: format!("collection of {len} elements exceeds i32::MAX"),
    })?;
    out.write_i32(count);
    Ok(())
}

pub(crate) fn read_count(input: &mut Bytes) -> Result<usize, DecodeError> {
    let count = input.read_i32()?;
    if count < 0 {
        return Err(DecodeError::OutOfRange {
            reason: format!("negative collection count: {count}"),
        });
    }
    Ok(count as usize)
}

/// Writes a fully-typed list (`[0x09][0x00][i32 count][value...]`) from a
/// borrowed slice, for embedding a list in a context (`Path`) that already
/// knows the nested values are lists by construction and so has no
/// standalone `GraphBinaryValue::List` to hand to `Encoder::write_value`.
pub(crate) fn write_typed_list(encoder: &Encoder, out: &mut BytesMut, items: &[GraphBinaryValue], depth: usize) -> Result<(), EncodeError> {
    encoder.write_list_header(out, depth)?;
    write_count(out, items.len())?;
    for item in items {
        encoder.write_value(item, out, depth + 1)?;
    }
    Ok(())
}

pub struct ListHandler;

impl TypeHandler for ListHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::List
    }

    fn encode_payload(&self, value: &GraphBinaryValue, encoder: &Encoder, out: &mut BytesMut, depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::List(items) => {
                write_count(out, items.len())?;
                for item in items {
                    encoder.write_value(item, out, depth + 1)?;
                }
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    fn decode_payload(&self, decoder: &Decoder, input: &mut Bytes, depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        let count = read_count(input)?;
        let mut items = Vec::with_capacity(count.min(4096));
        for _ in 0..count {
            items.push(decoder.read_value(input, depth + 1)?);
        }
        Ok(GraphBinaryValue::List(items))
    }
}

pub struct SetHandler;

impl TypeHandler for SetHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::Set
    }

    fn encode_payload(&self, value: &GraphBinaryValue, encoder: &Encoder, out: &mut BytesMut, depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::Set(items) => {
                write_count(out, items.len())?;
                for item in items {
                    encoder.write_value(item, out, depth + 1)?;
                }
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    fn decode_payload(&self, decoder: &Decoder, input: &mut Bytes, depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        let count = read_count(input)?;
        let mut items = Vec::with_capacity(count.min(4096));
        for _ in 0..count {
            items.push(decoder.read_value(input, depth + 1)?);
        }
        // Duplicates are not deduplicated by the codec; the wire format
        // just repeats whatever the encoding side produced.
        Ok(GraphBinaryValue::Set(items))
    }
}

pub struct MapHandler;

impl TypeHandler for MapHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::Map
    }

    fn encode_payload(&self, value: &GraphBinaryValue, encoder: &Encoder, out: &mut BytesMut, depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::Map(pairs) => {
                write_count(out, pairs.len())?;
                for (key, val) in pairs.iter() {
                    encoder.write_value(key, out, depth + 1)?;
                    encoder.write_value(val, out, depth + 1)?;
                }
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    fn decode_payload(&self, decoder: &Decoder, input: &mut Bytes, depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        let count = read_count(input)?;
        let mut pairs = Vec::with_capacity(count.min(4096));
        for _ in 0..count {
            let key = decoder.read_value(input, depth + 1)?;
            let val = decoder.read_value(input, depth + 1)?;
            pairs.push((key, val));
        }
        Ok(GraphBinaryValue::Map(GraphBinaryMap(pairs)))
    }
}

/// Decode-only: bulksets are expanded into a plain sequence by repeating
/// each value `bulk` times, matching how a caller receiving a `List` would
/// observe the same logical result. There is no `GraphBinaryValue` shape
/// that round-trips back into bulkset form, so only a decode handler is
/// registered (encode never produces type code `0x2a`).
pub struct BulkSetHandler;

impl TypeHandler for BulkSetHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::BulkSet
    }

    fn encode_payload(&self, value: &GraphBinaryValue, _encoder: &Encoder, _out: &mut BytesMut, _depth: usize) -> Result<(), EncodeError> {
        Err(EncodeError::UnregisteredType { shape: value.shape_name() })
    }

    fn decode_payload(&self, decoder: &Decoder, input: &mut Bytes, depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        let count = read_count(input)?;
        let mut items = Vec::new();
        for _ in 0..count {
            let value = decoder.read_value(input, depth + 1)?;
            let bulk = input.read_i64()?;
            if bulk < 0 {
                return Err(DecodeError::OutOfRange {
                    reason: format!("negative bulkset repetition count: {bulk}"),
                });
            }
            for _ in 0..bulk {
                items.push(value.clone());
            }
        }
        Ok(GraphBinaryValue::List(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decoder, Encoder};

    #[test]
    fn list_matches_fixed_vector() {
        let value = GraphBinaryValue::List(vec![
            GraphBinaryValue::Int(1),
            GraphBinaryValue::String("a".to_string()),
        ]);
        let bytes = Encoder::new(None).write_object(&value).unwrap();
        assert_eq!(
            &bytes[..],
            &[
                0x09, 0x00, 0x00, 0x00, 0x00, 0x02, //
                0x01, 0x00, 0x00, 0x00, 0x00, 0x01, //
                0x03, 0x00, 0x00, 0x00, 0x00, 0x01, b'a',
            ]
        );
    }

    #[test]
    fn set_does_not_deduplicate() {
        let value = GraphBinaryValue::Set(vec![GraphBinaryValue::Int(1), GraphBinaryValue::Int(1)]);
        let encoder = Encoder::new(None);
        let decoder = Decoder::new(None);
        let bytes = encoder.write_object(&value).unwrap();
        assert_eq!(decoder.read_object(bytes).unwrap(), value);
    }

    #[test]
    fn map_preserves_entry_order() {
        let value = GraphBinaryValue::Map(GraphBinaryMap(vec![
            (GraphBinaryValue::String("b".to_string()), GraphBinaryValue::Int(2)),
            (GraphBinaryValue::String("a".to_string()), GraphBinaryValue::Int(1)),
        ]));
        let encoder = Encoder::new(None);
        let decoder = Decoder::new(None);
        let bytes = encoder.write_object(&value).unwrap();
        assert_eq!(decoder.read_object(bytes).unwrap(), value);
    }

    #[test]
    fn bulkset_expands_into_a_list() {
        let mut payload = BytesMut::new();
        write_count(&mut payload, 1).unwrap();
        // one entry: value = int 7, bulk = 3
        payload.write_u8(TypeCode::Int.as_byte());
        payload.write_u8(0x00);
        payload.write_i32(7);
        payload.write_i64(3);

        let decoder = Decoder::new(None);
        let mut full = BytesMut::new();
        full.write_u8(TypeCode::BulkSet.as_byte());
        full.write_u8(0x00);
        full.write_raw(&payload[..]);

        let decoded = decoder.read_object(full.freeze()).unwrap();
        assert_eq!(
            decoded,
            GraphBinaryValue::List(vec![GraphBinaryValue::Int(7), GraphBinaryValue::Int(7), GraphBinaryValue::Int(7)])
        );
    }
}
