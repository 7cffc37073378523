use bytes::{Bytes, BytesMut};
use graphbinary_types::{Edge, GraphBinaryValue, Path, Property, Vertex, VertexProperty};
use graphbinary_wire::{WireDecode, WireEncode};

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::handlers::collections::write_typed_list;
use crate::registry::TypeHandler;
use crate::type_code::{TypeCode, NULL_CODE};

/// Graph element fields reserve a slot for properties that this core never
/// populates: on encode it is always the bare untyped-null byte, and on
/// decode it is always skipped unread.
fn write_reserved_null(out: &mut BytesMut) {
    out.write_u8(NULL_CODE);
}

fn skip_reserved_null(input: &mut Bytes) -> Result<(), DecodeError> {
    input.read_u8()?;
    Ok(())
}

pub struct VertexHandler;

impl TypeHandler for VertexHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::Vertex
    }

    fn encode_payload(&self, value: &GraphBinaryValue, encoder: &Encoder, out: &mut BytesMut, depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::Vertex(v) => {
                encoder.write_value(&v.id, out, depth + 1)?;
                out.write_string(&v.label);
                write_reserved_null(out);
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    fn decode_payload(&self, decoder: &Decoder, input: &mut Bytes, depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        let id = decoder.read_value(input, depth + 1)?;
        let label = input.read_string()?;
        skip_reserved_null(input)?;
        Ok(GraphBinaryValue::Vertex(Vertex::new(id, label)))
    }
}

pub struct EdgeHandler;

impl TypeHandler for EdgeHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::Edge
    }

    fn encode_payload(&self, value: &GraphBinaryValue, encoder: &Encoder, out: &mut BytesMut, depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::Edge(e) => {
                encoder.write_value(&e.id, out, depth + 1)?;
                out.write_string(&e.label);
                encoder.write_value(&e.in_v.id, out, depth + 1)?;
                out.write_string(&e.in_v.label);
                encoder.write_value(&e.out_v.id, out, depth + 1)?;
                out.write_string(&e.out_v.label);
                write_reserved_null(out);
                write_reserved_null(out);
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    fn decode_payload(&self, decoder: &Decoder, input: &mut Bytes, depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        let id = decoder.read_value(input, depth + 1)?;
        let label = input.read_string()?;
        let in_v_id = decoder.read_value(input, depth + 1)?;
        let in_v_label = input.read_string()?;
        let out_v_id = decoder.read_value(input, depth + 1)?;
        let out_v_label = input.read_string()?;
        skip_reserved_null(input)?;
        skip_reserved_null(input)?;
        Ok(GraphBinaryValue::Edge(Edge::new(
            id,
            label,
            Vertex::new(out_v_id, out_v_label),
            Vertex::new(in_v_id, in_v_label),
        )))
    }
}

pub struct PropertyHandler;

impl TypeHandler for PropertyHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::Property
    }

    fn encode_payload(&self, value: &GraphBinaryValue, encoder: &Encoder, out: &mut BytesMut, depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::Property(p) => {
                out.write_string(&p.key);
                encoder.write_value(&p.value, out, depth + 1)?;
                write_reserved_null(out);
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    fn decode_payload(&self, decoder: &Decoder, input: &mut Bytes, depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        let key = input.read_string()?;
        let value = decoder.read_value(input, depth + 1)?;
        skip_reserved_null(input)?;
        Ok(GraphBinaryValue::Property(Property::new(key, value)))
    }
}

pub struct VertexPropertyHandler;

impl TypeHandler for VertexPropertyHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::VertexProperty
    }

    fn encode_payload(&self, value: &GraphBinaryValue, encoder: &Encoder, out: &mut BytesMut, depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::VertexProperty(vp) => {
                encoder.write_value(&vp.id, out, depth + 1)?;
                out.write_string(&vp.label);
                encoder.write_value(&vp.value, out, depth + 1)?;
                write_reserved_null(out);
                write_reserved_null(out);
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    fn decode_payload(&self, decoder: &Decoder, input: &mut Bytes, depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        let id = decoder.read_value(input, depth + 1)?;
        let label = input.read_string()?;
        let value = decoder.read_value(input, depth + 1)?;
        skip_reserved_null(input)?;
        skip_reserved_null(input)?;
        Ok(GraphBinaryValue::VertexProperty(VertexProperty::new(id, label, value)))
    }
}

pub struct PathHandler;

impl TypeHandler for PathHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::Path
    }

    fn encode_payload(&self, value: &GraphBinaryValue, encoder: &Encoder, out: &mut BytesMut, depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::Path(p) => {
                write_typed_list(encoder, out, &p.labels, depth)?;
                write_typed_list(encoder, out, &p.objects, depth)?;
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    fn decode_payload(&self, decoder: &Decoder, input: &mut Bytes, depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        let labels = match decoder.read_value(input, depth + 1)? {
            GraphBinaryValue::List(items) => items,
            other => {
                return Err(DecodeError::EncodingError {
                    reason: format!("expected a list for path labels, got {}", other.shape_name()),
                })
            }
        };
        let objects = match decoder.read_value(input, depth + 1)? {
            GraphBinaryValue::List(items) => items,
            other => {
                return Err(DecodeError::EncodingError {
                    reason: format!("expected a list for path objects, got {}", other.shape_name()),
                })
            }
        };
        Ok(GraphBinaryValue::Path(Path::new(labels, objects)))
    }
}
