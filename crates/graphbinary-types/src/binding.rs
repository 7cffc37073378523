use crate::GraphBinaryValue;

/// A named binding between a variable used in a bytecode step and a
/// concrete value, allowing the same bytecode to be replayed with
/// different parameter values on the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub key: String,
    pub value: Box<GraphBinaryValue>,
}

impl Binding {
    pub fn new(key: impl Into<String>, value: GraphBinaryValue) -> Self {
        Self { key: key.into(), value: Box::new(value) }
    }
}
