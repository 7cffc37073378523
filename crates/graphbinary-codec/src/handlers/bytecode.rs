use bytes::{Bytes, BytesMut};
use graphbinary_types::{Bytecode, GraphBinaryValue, Instruction};
use graphbinary_wire::{WireDecode, WireEncode};

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::registry::TypeHandler;
use crate::type_code::TypeCode;

fn write_instructions(encoder: &Encoder, out: &mut BytesMut, instructions: &[Instruction], depth: usize) -> Result<(), EncodeError> {
    let count = i32::try_from(instructions.len()).map_err(|_| EncodeError::OutOfRange {
        reason: format!("{} instructions exceeds i32::MAX", instructions.len()),
    })?;
    out.write_i32(count);
    for instruction in instructions {
        out.write_string(&instruction.name);
        let argc = i32::try_from(instruction.args.len()).map_err(|_| EncodeError::OutOfRange {
            reason: format!("instruction {} has too many arguments", instruction.name),
        })?;
        out.write_i32(argc);
        for arg in &instruction.args {
            encoder.write_value(arg, out, depth + 1)?;
        }
    }
    Ok(())
}

fn read_instructions(decoder: &Decoder, input: &mut Bytes, depth: usize) -> Result<Vec<Instruction>, DecodeError> {
    let count = input.read_i32()?;
    if count < 0 {
        return Err(DecodeError::OutOfRange {
            reason: format!("negative instruction count: {count}"),
        });
    }
    let mut instructions = Vec::with_capacity((count as usize).min(4096));
    for _ in 0..count {
        let name = input.read_string()?;
        let argc = input.read_i32()?;
        if argc < 0 {
            return Err(DecodeError::OutOfRange {
                reason: format!("negative argument count for instruction {name}: {argc}"),
            });
        }
        let mut args = Vec::with_capacity((argc as usize).min(4096));
        for _ in 0..argc {
            args.push(decoder.read_value(input, depth + 1)?);
        }
        instructions.push(Instruction::new(name, args));
    }
    Ok(instructions)
}

pub struct BytecodeHandler;

impl TypeHandler for BytecodeHandler {
    fn type_code(&self) -> TypeCode {
        TypeCode::Bytecode
    }

    fn encode_payload(&self, value: &GraphBinaryValue, encoder: &Encoder, out: &mut BytesMut, depth: usize) -> Result<(), EncodeError> {
        match value {
            GraphBinaryValue::Bytecode(bc) => {
                write_instructions(encoder, out, &bc.steps, depth)?;
                write_instructions(encoder, out, &bc.sources, depth)?;
                Ok(())
            }
            other => Err(EncodeError::UnregisteredType { shape: other.shape_name() }),
        }
    }

    fn decode_payload(&self, decoder: &Decoder, input: &mut Bytes, depth: usize) -> Result<GraphBinaryValue, DecodeError> {
        let steps = read_instructions(decoder, input, depth)?;
        let sources = read_instructions(decoder, input, depth)?;
        Ok(GraphBinaryValue::Bytecode(Bytecode { steps, sources }))
    }
}
