use bytes::{Bytes, BytesMut};
use graphbinary_types::GraphBinaryValue;
use graphbinary_wire::{WireDecode, WireEncode};

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::registry::TypeHandler;
use crate::type_code::TypeCode;

macro_rules! token_handler {
    ($handler:ident, $code:ident, $variant:ident, $token:ty) => {
        pub struct $handler;

        impl TypeHandler for $handler {
            fn type_code(&self) -> TypeCode {
                TypeCode::$code
            }

            fn encode_payload(
                &self,
                value: &GraphBinaryValue,
                _encoder: &Encoder,
                out: &mut BytesMut,
                _depth: usize,
            ) -> Result<(), EncodeError> {
                match value {
                    GraphBinaryValue::$variant(token) => {
                        out.write_string(token.name());
                        Ok(())
                    }
                    other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
                }
            }

            fn decode_payload(
                &self,
                _decoder: &Decoder,
                input: &mut Bytes,
                _depth: usize,
            ) -> Result<GraphBinaryValue, DecodeError> {
                let name = input.read_string()?;
                let token = <$token>::from_name(&name).ok_or_else(|| DecodeError::EncodingError {
                    reason: format!("unknown {} token: {name:?}", stringify!($token)),
                })?;
                Ok(GraphBinaryValue::$variant(token))
            }
        }
    };
}

token_handler!(BarrierHandler, Barrier, Barrier, graphbinary_types::Barrier);
token_handler!(CardinalityHandler, Cardinality, Cardinality, graphbinary_types::Cardinality);
token_handler!(ColumnHandler, Column, Column, graphbinary_types::Column);
token_handler!(DirectionHandler, Direction, Direction, graphbinary_types::Direction);
token_handler!(OperatorHandler, Operator, Operator, graphbinary_types::Operator);
token_handler!(OrderHandler, Order, Order, graphbinary_types::Order);
token_handler!(PickHandler, Pick, Pick, graphbinary_types::Pick);
token_handler!(PopHandler, Pop, Pop, graphbinary_types::Pop);
token_handler!(ScopeHandler, Scope, Scope, graphbinary_types::Scope);
token_handler!(THandler, T, T, graphbinary_types::T);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Encoder;
    use graphbinary_types::Order;

    #[test]
    fn order_desc_matches_fixed_vector() {
        let bytes = Encoder::new(None)
            .write_object(&GraphBinaryValue::Order(Order::Desc))
            .unwrap();
        assert_eq!(
            &bytes[..],
            &[0x1a, 0x00, 0x00, 0x00, 0x00, 0x04, b'd', b'e', b's', b'c']
        );
    }

    #[test]
    fn direction_round_trips_through_decoder() {
        let encoder = Encoder::new(None);
        let decoder = crate::Decoder::new(None);
        let value = GraphBinaryValue::Direction(graphbinary_types::Direction::Out);
        let bytes = encoder.write_object(&value).unwrap();
        assert_eq!(decoder.read_object(bytes).unwrap(), value);
    }
}
