use std::mem::size_of;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::WireError;

/// Extension trait on [`Bytes`] for reading the fixed-width, big-endian
/// fields that make up every GraphBinary payload.
pub trait WireDecode {
    fn read_u8(&mut self) -> Result<u8, WireError>;
    fn read_i8(&mut self) -> Result<i8, WireError>;
    fn read_i16(&mut self) -> Result<i16, WireError>;
    fn read_i32(&mut self) -> Result<i32, WireError>;
    fn read_i64(&mut self) -> Result<i64, WireError>;
    fn read_f32(&mut self) -> Result<f32, WireError>;
    fn read_f64(&mut self) -> Result<f64, WireError>;
    /// Reads exactly `len` raw bytes.
    fn read_raw(&mut self, len: usize) -> Result<Bytes, WireError>;
    /// Reads an `[i32 length][UTF-8 bytes]` string. The length is a byte
    /// count, not a character count, and must not be negative.
    fn read_string(&mut self) -> Result<String, WireError>;
}

impl WireDecode for Bytes {
    fn read_u8(&mut self) -> Result<u8, WireError> {
        if self.remaining() < size_of::<u8>() {
            return Err(WireError::Truncated { expected: size_of::<u8>(), actual: self.remaining() });
        }
        Ok(self.get_u8())
    }

    fn read_i8(&mut self) -> Result<i8, WireError> {
        if self.remaining() < size_of::<i8>() {
            return Err(WireError::Truncated { expected: size_of::<i8>(), actual: self.remaining() });
        }
        Ok(self.get_i8())
    }

    fn read_i16(&mut self) -> Result<i16, WireError> {
        if self.remaining() < size_of::<i16>() {
            return Err(WireError::Truncated { expected: size_of::<i16>(), actual: self.remaining() });
        }
        Ok(self.get_i16())
    }

    fn read_i32(&mut self) -> Result<i32, WireError> {
        if self.remaining() < size_of::<i32>() {
            return Err(WireError::Truncated { expected: size_of::<i32>(), actual: self.remaining() });
        }
        Ok(self.get_i32())
    }

    fn read_i64(&mut self) -> Result<i64, WireError> {
        if self.remaining() < size_of::<i64>() {
            return Err(WireError::Truncated { expected: size_of::<i64>(), actual: self.remaining() });
        }
        Ok(self.get_i64())
    }

    fn read_f32(&mut self) -> Result<f32, WireError> {
        if self.remaining() < size_of::<f32>() {
            return Err(WireError::Truncated { expected: size_of::<f32>(), actual: self.remaining() });
        }
        Ok(self.get_f32())
    }

    fn read_f64(&mut self) -> Result<f64, WireError> {
        if self.remaining() < size_of::<f64>() {
            return Err(WireError::Truncated { expected: size_of::<f64>(), actual: self.remaining() });
        }
        Ok(self.get_f64())
    }

    fn read_raw(&mut self, len: usize) -> Result<Bytes, WireError> {
        if self.remaining() < len {
            return Err(WireError::Truncated { expected: len, actual: self.remaining() });
        }
        Ok(self.copy_to_bytes(len))
    }

    fn read_string(&mut self) -> Result<String, WireError> {
        let length = self.read_i32()?;
        if length < 0 {
            return Err(WireError::NegativeLength { length });
        }
        let raw = self.read_raw(length as usize)?;
        Ok(std::str::from_utf8(&raw)?.to_owned())
    }
}

/// Extension trait on [`BytesMut`] for writing the fixed-width, big-endian
/// fields that make up every GraphBinary payload. Mirrors [`WireDecode`] so
/// encode and decode stay symmetric across handlers.
pub trait WireEncode {
    fn write_u8(&mut self, value: u8);
    fn write_i8(&mut self, value: i8);
    fn write_i16(&mut self, value: i16);
    fn write_i32(&mut self, value: i32);
    fn write_i64(&mut self, value: i64);
    fn write_f32(&mut self, value: f32);
    fn write_f64(&mut self, value: f64);
    fn write_raw(&mut self, bytes: impl AsRef<[u8]>);
    /// Writes `[i32 length][UTF-8 bytes]`, length measured in bytes.
    fn write_string(&mut self, value: &str);
}

impl WireEncode for BytesMut {
    fn write_u8(&mut self, value: u8) {
        self.put_u8(value);
    }

    fn write_i8(&mut self, value: i8) {
        self.put_i8(value);
    }

    fn write_i16(&mut self, value: i16) {
        self.put_i16(value);
    }

    fn write_i32(&mut self, value: i32) {
        self.put_i32(value);
    }

    fn write_i64(&mut self, value: i64) {
        self.put_i64(value);
    }

    fn write_f32(&mut self, value: f32) {
        self.put_f32(value);
    }

    fn write_f64(&mut self, value: f64) {
        self.put_f64(value);
    }

    fn write_raw(&mut self, bytes: impl AsRef<[u8]>) {
        self.put(bytes.as_ref());
    }

    fn write_string(&mut self, value: &str) {
        self.write_i32(value.len() as i32);
        self.write_raw(value.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u8_roundtrip() {
        let mut buf = BytesMut::new();
        buf.write_u8(0x42);
        let mut bytes = buf.freeze();
        assert_eq!(bytes.read_u8().unwrap(), 0x42);
    }

    #[test]
    fn i32_is_big_endian() {
        let mut buf = BytesMut::new();
        buf.write_i32(1);
        assert_eq!(&buf[..], &[0x00, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn i64_roundtrip_negative() {
        let mut buf = BytesMut::new();
        buf.write_i64(-1);
        let mut bytes = buf.freeze();
        assert_eq!(bytes.read_i64().unwrap(), -1);
    }

    #[test]
    fn string_roundtrip() {
        let mut buf = BytesMut::new();
        buf.write_string("abc");
        assert_eq!(&buf[..], &[0x00, 0x00, 0x00, 0x03, b'a', b'b', b'c']);
        let mut bytes = buf.freeze();
        assert_eq!(bytes.read_string().unwrap(), "abc");
    }

    #[test]
    fn string_read_truncated() {
        let mut buf = BytesMut::new();
        buf.write_i32(5);
        buf.write_raw(b"ab");
        let mut bytes = buf.freeze();
        assert!(matches!(bytes.read_string(), Err(WireError::Truncated { .. })));
    }

    #[test]
    fn string_read_negative_length() {
        let mut buf = BytesMut::new();
        buf.write_i32(-1);
        let mut bytes = buf.freeze();
        assert!(matches!(bytes.read_string(), Err(WireError::NegativeLength { length: -1 })));
    }

    #[test]
    fn read_past_end_is_truncated() {
        let mut bytes = Bytes::new();
        assert!(matches!(bytes.read_u8(), Err(WireError::Truncated { expected: 1, actual: 0 })));
    }
}
