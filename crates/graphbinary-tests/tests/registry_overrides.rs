use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use graphbinary_codec::{DecodeError, Decoder, EncodeError, Encoder, RegistryOverrides, ShapeKey, TypeCode, TypeHandler};
use graphbinary_types::GraphBinaryValue;
use graphbinary_wire::{WireDecode, WireEncode};

/// A caller override that re-encodes `int` values as their absolute value,
/// to prove overrides genuinely replace the built-in entry rather than
/// merely supplementing it.
struct AbsoluteIntHandler;

impl TypeHandler for AbsoluteIntHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::Int
    }

    fn encode_payload(&self, value: &GraphBinaryValue, _encoder: &Encoder, out: &mut BytesMut, _depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::Int(v) => {
                out.write_i32(v.abs());
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    fn decode_payload(&self, _decoder: &Decoder, input: &mut Bytes, _depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        Ok(GraphBinaryValue::Int(input.read_i32()?))
    }
}

#[test]
fn encode_exact_override_replaces_the_builtin_handler() {
    let overrides = RegistryOverrides::new().with_encode_exact(ShapeKey::Int, Arc::new(AbsoluteIntHandler));
    let encoder = Encoder::new(Some(overrides));

    let bytes = encoder.write_object(&GraphBinaryValue::Int(-7)).unwrap();
    assert_eq!(&bytes[..], &[0x01, 0x00, 0x00, 0x00, 0x00, 0x07]);
}

#[test]
fn capability_override_never_shadows_an_exact_match() {
    // The exact-shape tier is checked before capability predicates, so a
    // predicate matching every value still can't steal dispatch away from
    // the built-in Long handler registered via `encode_exact`.
    struct PanickingHandler;
    impl TypeHandler for PanickingHandler {
        fn type_code(&self) -> TypeCode {
            TypeCode::Long
        }
        fn encode_payload(&self, _value: &GraphBinaryValue, _encoder: &Encoder, _out: &mut BytesMut, _depth: usize) -> Result<(), EncodeError> {
            panic!("capability tier should not run when an exact match exists");
        }
        fn decode_payload(&self, _decoder: &Decoder, _input: &mut Bytes, _depth: usize) -> Result<GraphBinaryValue, DecodeError> {
            panic!("capability tier should not run when an exact match exists");
        }
    }

    let overrides = RegistryOverrides::new()
        .with_encode_capability(Arc::new(|_: &GraphBinaryValue| true), Arc::new(PanickingHandler));
    let encoder = Encoder::new(Some(overrides));

    let bytes = encoder.write_object(&GraphBinaryValue::Long(-42)).unwrap();
    assert_eq!(&bytes[..], &[0x02, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xD6]);
}

#[test]
fn decode_override_replaces_the_builtin_type_code_entry() {
    struct AlwaysZeroHandler;
    impl TypeHandler for AlwaysZeroHandler {
        fn type_code(&self) -> TypeCode {
            TypeCode::Int
        }
        fn encode_payload(&self, value: &GraphBinaryValue, _encoder: &Encoder, out: &mut BytesMut, _depth: usize) -> Result<(), EncodeError> {
            match value {
                GraphBinaryValue::Int(v) => {
                    out.write_i32(*v);
                    Ok(())
                }
                other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
            }
        }
        fn decode_payload(&self, _decoder: &Decoder, input: &mut Bytes, _depth: usize) -> Result<GraphBinaryValue, DecodeError> {
            input.read_i32()?;
            Ok(GraphBinaryValue::Int(0))
        }
    }

    let overrides = RegistryOverrides::new().with_decode(TypeCode::Int.as_byte(), Arc::new(AlwaysZeroHandler));
    let decoder = Decoder::new(Some(overrides));

    let decoded = decoder
        .read_object(Bytes::from_static(&[0x01, 0x00, 0x00, 0x00, 0x00, 0x2A]))
        .unwrap();
    assert_eq!(decoded, GraphBinaryValue::Int(0));
}
