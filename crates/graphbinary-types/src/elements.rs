use crate::GraphBinaryValue;

/// A graph vertex. The core never populates the reserved properties slot
/// (see the wire layout note on [`crate::GraphBinaryValue::Vertex`]), so this
/// type carries only `id` and `label`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub id: Box<GraphBinaryValue>,
    pub label: String,
}

impl Vertex {
    pub fn new(id: GraphBinaryValue, label: impl Into<String>) -> Self {
        Self { id: Box::new(id), label: label.into() }
    }
}

/// A graph edge, with its own id/label plus the endpoint vertices'
/// id/label (reconstructed as fresh [`Vertex`] placeholders on decode, per
/// the wire format; no adjacent-edge or property data is carried).
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: Box<GraphBinaryValue>,
    pub label: String,
    pub in_v: Vertex,
    pub out_v: Vertex,
}

impl Edge {
    pub fn new(id: GraphBinaryValue, label: impl Into<String>, out_v: Vertex, in_v: Vertex) -> Self {
        Self { id: Box::new(id), label: label.into(), in_v, out_v }
    }
}

/// A key/value property attached to an edge (or, via [`VertexProperty`], a
/// vertex property's own metadata).
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Box<GraphBinaryValue>,
}

impl Property {
    pub fn new(key: impl Into<String>, value: GraphBinaryValue) -> Self {
        Self { key: key.into(), value: Box::new(value) }
    }
}

/// A single value of a (possibly multi-valued) vertex property.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexProperty {
    pub id: Box<GraphBinaryValue>,
    pub label: String,
    pub value: Box<GraphBinaryValue>,
}

impl VertexProperty {
    pub fn new(id: GraphBinaryValue, label: impl Into<String>, value: GraphBinaryValue) -> Self {
        Self { id: Box::new(id), label: label.into(), value: Box::new(value) }
    }
}

/// An ordered walk through a traversal: a list of step labels and a
/// parallel list of the objects visited at each step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub labels: Vec<GraphBinaryValue>,
    pub objects: Vec<GraphBinaryValue>,
}

impl Path {
    pub fn new(labels: Vec<GraphBinaryValue>, objects: Vec<GraphBinaryValue>) -> Self {
        Self { labels, objects }
    }
}
