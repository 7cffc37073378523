/// The one-byte wire type identifiers, per the GraphBinary v1 grammar.
/// Codes with no implemented handler in this crate are still named here so
/// the decoder can distinguish "reserved" (`UnsupportedType`) from
/// "unknown" (`UnknownTypeCode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeCode {
    Custom = 0x00,
    Int = 0x01,
    Long = 0x02,
    String = 0x03,
    Date = 0x04,
    Timestamp = 0x05,
    Class = 0x06,
    Double = 0x07,
    Float = 0x08,
    List = 0x09,
    Map = 0x0a,
    Set = 0x0b,
    Uuid = 0x0c,
    Edge = 0x0d,
    Path = 0x0e,
    Property = 0x0f,
    Graph = 0x10,
    Vertex = 0x11,
    VertexProperty = 0x12,
    Barrier = 0x13,
    Binding = 0x14,
    Bytecode = 0x15,
    Cardinality = 0x16,
    Column = 0x17,
    Direction = 0x18,
    Operator = 0x19,
    Order = 0x1a,
    Pick = 0x1b,
    Pop = 0x1c,
    Lambda = 0x1d,
    P = 0x1e,
    Scope = 0x1f,
    T = 0x20,
    Traverser = 0x21,
    BigDecimal = 0x22,
    BigInteger = 0x23,
    Byte = 0x24,
    ByteBuffer = 0x25,
    Short = 0x26,
    Boolean = 0x27,
    TextP = 0x28,
    Strategy = 0x29,
    BulkSet = 0x2a,
    Tree = 0x2b,
    Metrics = 0x2c,
    TraversalMetrics = 0x2d,
}

/// The untyped null marker. Carries no `value_flag` or payload, and is not
/// itself a `TypeCode` variant since it can appear where no type code would
/// otherwise be valid (top-level `writeObject(null)`).
pub const NULL_CODE: u8 = 0xFE;

impl TypeCode {
    pub fn from_byte(byte: u8) -> Option<Self> {
        use TypeCode::*;
        let code = match byte {
            0x00 => Custom,
            0x01 => Int,
            0x02 => Long,
            0x03 => String,
            0x04 => Date,
            0x05 => Timestamp,
            0x06 => Class,
            0x07 => Double,
            0x08 => Float,
            0x09 => List,
            0x0a => Map,
            0x0b => Set,
            0x0c => Uuid,
            0x0d => Edge,
            0x0e => Path,
            0x0f => Property,
            0x10 => Graph,
            0x11 => Vertex,
            0x12 => VertexProperty,
            0x13 => Barrier,
            0x14 => Binding,
            0x15 => Bytecode,
            0x16 => Cardinality,
            0x17 => Column,
            0x18 => Direction,
            0x19 => Operator,
            0x1a => Order,
            0x1b => Pick,
            0x1c => Pop,
            0x1d => Lambda,
            0x1e => P,
            0x1f => Scope,
            0x20 => T,
            0x21 => Traverser,
            0x22 => BigDecimal,
            0x23 => BigInteger,
            0x24 => Byte,
            0x25 => ByteBuffer,
            0x26 => Short,
            0x27 => Boolean,
            0x28 => TextP,
            0x29 => Strategy,
            0x2a => BulkSet,
            0x2b => Tree,
            0x2c => Metrics,
            0x2d => TraversalMetrics,
            _ => return None,
        };
        Some(code)
    }

    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Human-readable name for the reserved, unimplemented codes, used in
    /// `UnsupportedType` diagnostics.
    pub fn reserved_name(self) -> &'static str {
        match self {
            TypeCode::Custom => "custom",
            TypeCode::Class => "class",
            TypeCode::Graph => "graph",
            TypeCode::BigDecimal => "bigdecimal",
            TypeCode::BigInteger => "bigint",
            TypeCode::Short => "short",
            TypeCode::Strategy => "strategy",
            TypeCode::Tree => "tree",
            TypeCode::Metrics => "metrics",
            TypeCode::TraversalMetrics => "trav-metrics",
            _ => "reserved",
        }
    }

    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TypeCode::Custom
                | TypeCode::Class
                | TypeCode::Graph
                | TypeCode::BigDecimal
                | TypeCode::BigInteger
                | TypeCode::Short
                | TypeCode::Strategy
                | TypeCode::Tree
                | TypeCode::Metrics
                | TypeCode::TraversalMetrics
        )
    }
}
