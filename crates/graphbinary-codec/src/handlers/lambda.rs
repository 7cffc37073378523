use bytes::{Bytes, BytesMut};
use graphbinary_types::GraphBinaryValue;
use graphbinary_wire::{WireDecode, WireEncode};

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::registry::TypeHandler;
use crate::type_code::TypeCode;

/// Jython/Python lambdas are sent as plain expressions; the server-side
/// evaluator only accepts them wrapped in a `lambda` declaration, so one is
/// prepended unless the script already starts with it.
fn script_for_wire(language: &str, script: &str) -> String {
    let needs_lambda_prefix = matches!(language, "gremlin-jython" | "gremlin-python") && !script.trim_start().starts_with("lambda");
    if needs_lambda_prefix {
        format!("lambda {script}")
    } else {
        script.to_string()
    }
}

pub struct LambdaHandler;

impl TypeHandler for LambdaHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::Lambda
    }

    fn encode_payload(&self, value: &GraphBinaryValue, _encoder: &Encoder, out: &mut BytesMut, _depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::Lambda(l) => {
                out.write_string(&l.language);
                out.write_string(&script_for_wire(&l.language, &l.script));
                out.write_i32(l.argc);
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    /// Write-only: `Lambda` has no registered decode entry.
    fn decode_payload(&self, _decoder: &Decoder, _input: &mut Bytes, _depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        Err(DecodeError::UnsupportedType { type_name: "lambda" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Encoder;
    use graphbinary_types::Lambda;

    #[test]
    fn emits_language_script_and_argc_minus_one() {
        let value = GraphBinaryValue::Lambda(Lambda::new("it.get()"));
        let mut bytes = Encoder::new(None).write_object(&value).unwrap();

        assert_eq!(bytes.read_u8().unwrap(), TypeCode::Lambda.as_byte());
        assert_eq!(bytes.read_u8().unwrap(), 0x00);
        assert_eq!(bytes.read_string().unwrap(), "gremlin-groovy");
        assert_eq!(bytes.read_string().unwrap(), "it.get()");
        assert_eq!(bytes.read_i32().unwrap(), -1);
    }

    #[test]
    fn gremlin_python_script_gets_a_lambda_prefix() {
        let value = GraphBinaryValue::Lambda(Lambda::with_language("x: x.get()", "gremlin-python"));
        let mut bytes = Encoder::new(None).write_object(&value).unwrap();

        assert_eq!(bytes.read_u8().unwrap(), TypeCode::Lambda.as_byte());
        assert_eq!(bytes.read_u8().unwrap(), 0x00);
        assert_eq!(bytes.read_string().unwrap(), "gremlin-python");
        assert_eq!(bytes.read_string().unwrap(), "lambda x: x.get()");
        assert_eq!(bytes.read_i32().unwrap(), -1);
    }

    #[test]
    fn gremlin_python_script_already_prefixed_is_left_alone() {
        let value = GraphBinaryValue::Lambda(Lambda::with_language("lambda x: x.get()", "gremlin-python"));
        let mut bytes = Encoder::new(None).write_object(&value).unwrap();

        assert_eq!(bytes.read_u8().unwrap(), TypeCode::Lambda.as_byte());
        assert_eq!(bytes.read_u8().unwrap(), 0x00);
        assert_eq!(bytes.read_string().unwrap(), "gremlin-python");
        assert_eq!(bytes.read_string().unwrap(), "lambda x: x.get()");
        assert_eq!(bytes.read_i32().unwrap(), -1);
    }
}
