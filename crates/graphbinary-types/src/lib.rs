//! Graph-domain value model consumed by the GraphBinary codec.
//!
//! This crate owns the in-memory shapes (`Vertex`, `Edge`, `Bytecode`, the
//! traversal-token enums, ...) that `graphbinary-codec` serializes and
//! deserializes. It has no awareness of the wire format itself.

mod binding;
mod bytecode;
mod elements;
mod lambda;
mod predicate;
mod tokens;
mod traverser;
mod value;

pub use binding::Binding;
pub use bytecode::{Bytecode, Instruction};
pub use elements::{Edge, Path, Property, Vertex, VertexProperty};
pub use lambda::{Lambda, DEFAULT_LAMBDA_LANGUAGE};
pub use predicate::{TextP, P};
pub use tokens::{Barrier, Cardinality, Column, Direction, Operator, Order, Pick, Pop, Scope, T};
pub use traverser::Traverser;
pub use value::{GraphBinaryMap, GraphBinaryValue};
