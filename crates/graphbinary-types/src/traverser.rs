use crate::GraphBinaryValue;

/// Wraps an object flowing through a traversal with its bulk: the number of
/// times an upstream object is logically represented by this single
/// traverser.
#[derive(Debug, Clone, PartialEq)]
pub struct Traverser {
    pub bulk: i64,
    pub object: Box<GraphBinaryValue>,
}

impl Traverser {
    pub fn new(object: GraphBinaryValue, bulk: i64) -> Self {
        Self { bulk, object: Box::new(object) }
    }
}
