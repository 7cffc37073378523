//! Type-dispatched encoder/decoder for the GraphBinary v1 wire format.
//!
//! An [`Encoder`]/[`Decoder`] pair is built once (with optional
//! [`RegistryOverrides`]) and then used read-only; see [`Registry`] for the
//! dispatch policy.

mod config;
mod decoder;
mod encoder;
mod error;
mod handlers;
mod registry;
mod type_code;

pub use config::{CodecConfig, DEFAULT_MAX_NESTING_DEPTH};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{DecodeError, EncodeError};
pub use registry::{CapabilityPredicate, Registry, RegistryOverrides, ShapeKey, TypeHandler};
pub use type_code::{TypeCode, NULL_CODE};
