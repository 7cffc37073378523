mod binding;
mod bytecode;
pub(crate) mod collections;
mod elements;
mod lambda;
mod predicate;
mod scalars;
mod strings;
mod tokens;
mod traverser;

use std::collections::HashMap;
use std::sync::Arc;

use crate::registry::{ShapeKey, TypeHandler};

/// Populates the built-in default encode/decode tables. Called once per
/// `Registry::build`; caller overrides are layered on top afterward.
pub fn register_defaults(
    encode_exact: &mut HashMap<ShapeKey, Arc<dyn TypeHandler>>,
    decode: &mut HashMap<u8, Arc<dyn TypeHandler>>,
) {
    macro_rules! register {
        ($key:expr, $handler:expr) => {{
            let handler: Arc<dyn TypeHandler> = Arc::new($handler);
            decode.insert(handler.type_code().as_byte(), Arc::clone(&handler));
            encode_exact.insert($key, handler);
        }};
    }

    register!(ShapeKey::Int, scalars::IntHandler);
    register!(ShapeKey::Long, scalars::LongHandler);
    register!(ShapeKey::Date, scalars::DateHandler);
    register!(ShapeKey::Timestamp, scalars::TimestampHandler);
    register!(ShapeKey::Double, scalars::DoubleHandler);
    register!(ShapeKey::Float, scalars::FloatHandler);
    register!(ShapeKey::Uuid, scalars::UuidHandler);
    register!(ShapeKey::Byte, scalars::ByteHandler);
    register!(ShapeKey::ByteBuffer, scalars::ByteBufferHandler);
    register!(ShapeKey::Boolean, scalars::BooleanHandler);

    register!(ShapeKey::String, strings::StringHandler);

    register!(ShapeKey::List, collections::ListHandler);
    register!(ShapeKey::Set, collections::SetHandler);
    register!(ShapeKey::Map, collections::MapHandler);
    // Decode-only: no ShapeKey maps to a bulkset, it decodes into a List.
    {
        let handler: Arc<dyn TypeHandler> = Arc::new(collections::BulkSetHandler);
        decode.insert(handler.type_code().as_byte(), handler);
    }

    register!(ShapeKey::Vertex, elements::VertexHandler);
    register!(ShapeKey::Edge, elements::EdgeHandler);
    register!(ShapeKey::Property, elements::PropertyHandler);
    register!(ShapeKey::VertexProperty, elements::VertexPropertyHandler);
    register!(ShapeKey::Path, elements::PathHandler);

    register!(ShapeKey::Barrier, tokens::BarrierHandler);
    register!(ShapeKey::Cardinality, tokens::CardinalityHandler);
    register!(ShapeKey::Column, tokens::ColumnHandler);
    register!(ShapeKey::Direction, tokens::DirectionHandler);
    register!(ShapeKey::Operator, tokens::OperatorHandler);
    register!(ShapeKey::Order, tokens::OrderHandler);
    register!(ShapeKey::Pick, tokens::PickHandler);
    register!(ShapeKey::Pop, tokens::PopHandler);
    register!(ShapeKey::Scope, tokens::ScopeHandler);
    register!(ShapeKey::T, tokens::THandler);

    register!(ShapeKey::Binding, binding::BindingHandler);
    register!(ShapeKey::Bytecode, bytecode::BytecodeHandler);
    register!(ShapeKey::Traverser, traverser::TraverserHandler);

    // Write-only: P, TextP, Lambda are registered for encode but deliberately
    // left out of the decode table.
    {
        let handler: Arc<dyn TypeHandler> = Arc::new(predicate::PHandler);
        encode_exact.insert(ShapeKey::P, handler);
    }
    {
        let handler: Arc<dyn TypeHandler> = Arc::new(predicate::TextPHandler);
        encode_exact.insert(ShapeKey::TextP, handler);
    }
    {
        let handler: Arc<dyn TypeHandler> = Arc::new(lambda::LambdaHandler);
        encode_exact.insert(ShapeKey::Lambda, handler);
    }
}
