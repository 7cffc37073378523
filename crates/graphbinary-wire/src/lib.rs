//! Byte-layer primitives for the GraphBinary v1 wire format.
//!
//! Provides low-level encode/decode extension traits over `bytes::Bytes` /
//! `bytes::BytesMut`, mirroring the split used by the rest of the workspace:
//! `WireDecode` reads big-endian fixed-width fields from a forward-only
//! cursor, `WireEncode` appends them to an extensible buffer.

mod error;
mod wire;

pub use error::WireError;
pub use wire::{WireDecode, WireEncode};
