use std::collections::HashMap;
use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use graphbinary_types::GraphBinaryValue;

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::handlers;
use crate::type_code::TypeCode;

/// The concrete in-memory shape a value carries, used as the exact-match
/// key for encoder dispatch. `GraphBinaryValue` is a closed enum, so this
/// mirrors its variants one-to-one; it exists as a separate type so the
/// registry can be keyed and hashed without requiring `GraphBinaryValue`
/// itself to implement `Eq`/`Hash` (it can't: some variants carry `f32`/`f64`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKey {
    Int,
    Long,
    String,
    Date,
    Timestamp,
    Double,
    Float,
    Uuid,
    Byte,
    ByteBuffer,
    Boolean,
    List,
    Set,
    Map,
    Vertex,
    Edge,
    Property,
    VertexProperty,
    Path,
    Barrier,
    Cardinality,
    Column,
    Direction,
    Operator,
    Order,
    Pick,
    Pop,
    Scope,
    T,
    Binding,
    Bytecode,
    P,
    TextP,
    Lambda,
    Traverser,
}

pub fn shape_key_of(value: &GraphBinaryValue) -> Option<ShapeKey> {
    let key = match value {
        GraphBinaryValue::Null => return None,
        GraphBinaryValue::Int(_) => ShapeKey::Int,
        GraphBinaryValue::Long(_) => ShapeKey::Long,
        GraphBinaryValue::String(_) => ShapeKey::String,
        GraphBinaryValue::Date(_) => ShapeKey::Date,
        GraphBinaryValue::Timestamp(_) => ShapeKey::Timestamp,
        GraphBinaryValue::Double(_) => ShapeKey::Double,
        GraphBinaryValue::Float(_) => ShapeKey::Float,
        GraphBinaryValue::Uuid(_) => ShapeKey::Uuid,
        GraphBinaryValue::Byte(_) => ShapeKey::Byte,
        GraphBinaryValue::ByteBuffer(_) => ShapeKey::ByteBuffer,
        GraphBinaryValue::Boolean(_) => ShapeKey::Boolean,
        GraphBinaryValue::List(_) => ShapeKey::List,
        GraphBinaryValue::Set(_) => ShapeKey::Set,
        GraphBinaryValue::Map(_) => ShapeKey::Map,
        GraphBinaryValue::Vertex(_) => ShapeKey::Vertex,
        GraphBinaryValue::Edge(_) => ShapeKey::Edge,
        GraphBinaryValue::Property(_) => ShapeKey::Property,
        GraphBinaryValue::VertexProperty(_) => ShapeKey::VertexProperty,
        GraphBinaryValue::Path(_) => ShapeKey::Path,
        GraphBinaryValue::Barrier(_) => ShapeKey::Barrier,
        GraphBinaryValue::Cardinality(_) => ShapeKey::Cardinality,
        GraphBinaryValue::Column(_) => ShapeKey::Column,
        GraphBinaryValue::Direction(_) => ShapeKey::Direction,
        GraphBinaryValue::Operator(_) => ShapeKey::Operator,
        GraphBinaryValue::Order(_) => ShapeKey::Order,
        GraphBinaryValue::Pick(_) => ShapeKey::Pick,
        GraphBinaryValue::Pop(_) => ShapeKey::Pop,
        GraphBinaryValue::Scope(_) => ShapeKey::Scope,
        GraphBinaryValue::T(_) => ShapeKey::T,
        GraphBinaryValue::Binding(_) => ShapeKey::Binding,
        GraphBinaryValue::Bytecode(_) => ShapeKey::Bytecode,
        GraphBinaryValue::P(_) => ShapeKey::P,
        GraphBinaryValue::TextP(_) => ShapeKey::TextP,
        GraphBinaryValue::Lambda(_) => ShapeKey::Lambda,
        GraphBinaryValue::Traverser(_) => ShapeKey::Traverser,
    };
    Some(key)
}

/// A capability predicate used by the ordered fallback tier of encoder
/// dispatch: evaluated in registration order against values whose exact
/// shape has no direct entry.
pub type CapabilityPredicate = Arc<dyn Fn(&GraphBinaryValue) -> bool + Send + Sync>;

/// One registered type: its wire code, and its serialize/deserialize
/// behavior. A handler only ever writes/reads its own payload; the
/// type-code byte, the value flag, and null handling are the Encoder's
/// and Decoder's responsibility (see [`Encoder::write_value`] and
/// [`Decoder::read_value`]).
pub trait TypeHandler: Send + Sync {
    fn type_code(&self) -> TypeCode;

    fn encode_payload(
        &self,
        value: &GraphBinaryValue,
        encoder: &Encoder,
        out: &mut BytesMut,
        depth: usize,
    ) -> Result<(), EncodeError>;

    fn decode_payload(
        &self,
        decoder: &Decoder,
        input: &mut Bytes,
        depth: usize,
    ) -> Result<GraphBinaryValue, DecodeError>;
}

/// Caller-supplied additions or replacements applied on top of the built-in
/// default registry. Overrides win by key: an `encode_exact`/`decode` entry
/// for a key the default table already has replaces it outright; capability
/// predicates are appended after the built-in ones (which is empty by
/// default, so in practice caller predicates simply run first).
#[derive(Default)]
pub struct RegistryOverrides {
    pub encode_exact: Vec<(ShapeKey, Arc<dyn TypeHandler>)>,
    pub encode_capabilities: Vec<(CapabilityPredicate, Arc<dyn TypeHandler>)>,
    pub decode: Vec<(u8, Arc<dyn TypeHandler>)>,
}

impl RegistryOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encode_exact(mut self, key: ShapeKey, handler: Arc<dyn TypeHandler>) -> Self {
        self.encode_exact.push((key, handler));
        self
    }

    pub fn with_encode_capability(mut self, predicate: CapabilityPredicate, handler: Arc<dyn TypeHandler>) -> Self {
        self.encode_capabilities.push((predicate, handler));
        self
    }

    pub fn with_decode(mut self, code: u8, handler: Arc<dyn TypeHandler>) -> Self {
        self.decode.push((code, handler));
        self
    }
}

/// Two lookup tables built once at codec construction and never mutated
/// again: value-shape to handler for encoding, wire type code to handler
/// for decoding.
pub struct Registry {
    encode_exact: HashMap<ShapeKey, Arc<dyn TypeHandler>>,
    encode_capabilities: Vec<(CapabilityPredicate, Arc<dyn TypeHandler>)>,
    decode: HashMap<u8, Arc<dyn TypeHandler>>,
}

impl Registry {
    pub fn build(overrides: Option<RegistryOverrides>) -> Self {
        let mut encode_exact = HashMap::new();
        let mut decode = HashMap::new();
        handlers::register_defaults(&mut encode_exact, &mut decode);

        let mut encode_capabilities = Vec::new();

        if let Some(overrides) = overrides {
            for (key, handler) in overrides.encode_exact {
                encode_exact.insert(key, handler);
            }
            for (code, handler) in overrides.decode {
                decode.insert(code, handler);
            }
            encode_capabilities.extend(overrides.encode_capabilities);
        }

        Self {
            encode_exact,
            encode_capabilities,
            decode,
        }
    }

    /// Encoder dispatch policy: exact-shape match, then ordered capability
    /// fallback, then the generic-container fallback for List/Set/Map (only
    /// reachable if a caller's overrides removed the built-in entry for
    /// one of those shapes), then `UnregisteredType`.
    pub fn resolve_encoder(&self, value: &GraphBinaryValue) -> Result<Arc<dyn TypeHandler>, EncodeError> {
        if let Some(key) = shape_key_of(value) {
            if let Some(handler) = self.encode_exact.get(&key) {
                return Ok(Arc::clone(handler));
            }
        }

        for (predicate, handler) in &self.encode_capabilities {
            if predicate(value) {
                return Ok(Arc::clone(handler));
            }
        }

        let generic_key = match value {
            GraphBinaryValue::List(_) => Some(ShapeKey::List),
            GraphBinaryValue::Set(_) => Some(ShapeKey::Set),
            GraphBinaryValue::Map(_) => Some(ShapeKey::Map),
            _ => None,
        };
        if let Some(key) = generic_key {
            if let Some(handler) = self.encode_exact.get(&key) {
                return Ok(Arc::clone(handler));
            }
        }

        Err(EncodeError::UnregisteredType {
            shape: value.shape_name(),
        })
    }

    pub fn resolve_decoder(&self, code: u8) -> Option<Arc<dyn TypeHandler>> {
        self.decode.get(&code).map(Arc::clone)
    }
}
