use bytes::Bytes;
use uuid::Uuid;

use crate::binding::Binding;
use crate::bytecode::Bytecode;
use crate::elements::{Edge, Path, Property, Vertex, VertexProperty};
use crate::lambda::Lambda;
use crate::predicate::{TextP, P};
use crate::tokens::{Barrier, Cardinality, Column, Direction, Operator, Order, Pick, Pop, Scope, T};
use crate::traverser::Traverser;

/// An ordered key/value map. GraphBinary map entries preserve insertion
/// order and are not required to have hashable keys (a key can itself be a
/// float or a nested collection), so this is backed by a plain `Vec` of
/// pairs rather than a hash map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphBinaryMap(pub Vec<(GraphBinaryValue, GraphBinaryValue)>);

impl GraphBinaryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (GraphBinaryValue, GraphBinaryValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(GraphBinaryValue, GraphBinaryValue)> for GraphBinaryMap {
    fn from_iter<I: IntoIterator<Item = (GraphBinaryValue, GraphBinaryValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for GraphBinaryMap {
    type Item = (GraphBinaryValue, GraphBinaryValue);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// The full set of in-memory value shapes the codec knows how to carry.
///
/// Variants that wrap another `GraphBinaryValue` directly are boxed to keep
/// this type's size bounded despite the recursive structure of the wire
/// format; variants wrapping a `Vec<GraphBinaryValue>` don't need boxing
/// since the `Vec` itself already breaks the cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphBinaryValue {
    Null,

    Int(i32),
    Long(i64),
    String(String),
    Date(i64),
    Timestamp(i64),
    Double(f64),
    Float(f32),
    Uuid(Uuid),
    Byte(i8),
    ByteBuffer(Bytes),
    Boolean(bool),

    List(Vec<GraphBinaryValue>),
    Set(Vec<GraphBinaryValue>),
    Map(GraphBinaryMap),

    Vertex(Vertex),
    Edge(Edge),
    Property(Property),
    VertexProperty(VertexProperty),
    Path(Path),

    Barrier(Barrier),
    Cardinality(Cardinality),
    Column(Column),
    Direction(Direction),
    Operator(Operator),
    Order(Order),
    Pick(Pick),
    Pop(Pop),
    Scope(Scope),
    T(T),

    Binding(Binding),
    Bytecode(Bytecode),
    P(P),
    TextP(TextP),
    Lambda(Lambda),
    Traverser(Traverser),
}

impl GraphBinaryValue {
    /// A human-readable shape name, used in diagnostics (error messages,
    /// tracing fields) rather than on the wire.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::String(_) => "string",
            Self::Date(_) => "date",
            Self::Timestamp(_) => "timestamp",
            Self::Double(_) => "double",
            Self::Float(_) => "float",
            Self::Uuid(_) => "uuid",
            Self::Byte(_) => "byte",
            Self::ByteBuffer(_) => "bytebuffer",
            Self::Boolean(_) => "boolean",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
            Self::Vertex(_) => "vertex",
            Self::Edge(_) => "edge",
            Self::Property(_) => "property",
            Self::VertexProperty(_) => "vertexproperty",
            Self::Path(_) => "path",
            Self::Barrier(_) => "barrier",
            Self::Cardinality(_) => "cardinality",
            Self::Column(_) => "column",
            Self::Direction(_) => "direction",
            Self::Operator(_) => "operator",
            Self::Order(_) => "order",
            Self::Pick(_) => "pick",
            Self::Pop(_) => "pop",
            Self::Scope(_) => "scope",
            Self::T(_) => "t",
            Self::Binding(_) => "binding",
            Self::Bytecode(_) => "bytecode",
            Self::P(_) => "p",
            Self::TextP(_) => "textp",
            Self::Lambda(_) => "lambda",
            Self::Traverser(_) => "traverser",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<i32> for GraphBinaryValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for GraphBinaryValue {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<String> for GraphBinaryValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for GraphBinaryValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<bool> for GraphBinaryValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for GraphBinaryValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<f32> for GraphBinaryValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}
