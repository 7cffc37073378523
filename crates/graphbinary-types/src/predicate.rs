use crate::GraphBinaryValue;

/// A single-argument or two-argument traversal predicate, e.g. `eq(x)` or
/// `between(x, y)`. `other` is only present for two-argument predicates such
/// as `and`/`or`/`between`/`inside`/`outside`, where it holds the second
/// operand (or the second predicate, for `and`/`or`).
#[derive(Debug, Clone, PartialEq)]
pub struct P {
    pub operator: String,
    pub value: Box<GraphBinaryValue>,
    pub other: Option<Box<GraphBinaryValue>>,
}

impl P {
    pub fn new(operator: impl Into<String>, value: GraphBinaryValue) -> Self {
        Self { operator: operator.into(), value: Box::new(value), other: None }
    }

    pub fn with_other(operator: impl Into<String>, value: GraphBinaryValue, other: GraphBinaryValue) -> Self {
        Self { operator: operator.into(), value: Box::new(value), other: Some(Box::new(other)) }
    }
}

/// The text-matching counterpart of [`P`], e.g. `startingWith("foo")`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextP {
    pub operator: String,
    pub value: Box<GraphBinaryValue>,
    pub other: Option<Box<GraphBinaryValue>>,
}

impl TextP {
    pub fn new(operator: impl Into<String>, value: GraphBinaryValue) -> Self {
        Self { operator: operator.into(), value: Box::new(value), other: None }
    }

    pub fn with_other(operator: impl Into<String>, value: GraphBinaryValue, other: GraphBinaryValue) -> Self {
        Self { operator: operator.into(), value: Box::new(value), other: Some(Box::new(other)) }
    }
}
