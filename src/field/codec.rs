//! Binary encoding of field values.
//!
//! The layout is fixed and little-endian:
//!
//! | Item | Encoding |
//! |---|---|
//! | `Int` / `Float` | 4 bytes |
//! | `Long` / `Double` | 8 bytes |
//! | `Boolean` | 1 byte, `0` or `1` |
//! | string | `u32` byte length, then UTF-8 bytes |
//! | repeated values | `u32` element count, then each element |
//! | field | name as a string, then the value payload |
//!
//! Enum values write `enum_type` then `default_value`, both as strings.
//! Lengths and counts above `u32::MAX` fail with [`EncodeError::LengthOverflow`]
//! before anything is written for them.
//! Decoding never returns a partial value: a declared length or count that
//! exceeds the remaining input fails with [`DecodeError::UnexpectedEof`].

use super::value::{FieldType, FieldValue};
use crate::error::{DecodeError, EncodeError};
use serde::{Deserialize, Serialize};

/// Append-only byte sink shared by all field writes of one document.
#[derive(Debug, Default, Clone)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_u8(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    pub fn write_u32(&mut self, v: u32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn write_i32(&mut self, v: i32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn write_i64(&mut self, v: i64) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn write_f32(&mut self, v: f32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_bits().to_le_bytes());
        self
    }

    pub fn write_f64(&mut self, v: f64) -> &mut Self {
        self.buf.extend_from_slice(&v.to_bits().to_le_bytes());
        self
    }

    pub fn write_bool(&mut self, v: bool) -> &mut Self {
        self.write_u8(u8::from(v))
    }

    pub fn write_len(&mut self, len: usize) -> Result<&mut Self, EncodeError> {
        let prefix = u32::try_from(len).map_err(|_| EncodeError::LengthOverflow(len))?;
        Ok(self.write_u32(prefix))
    }

    pub fn write_str(&mut self, v: &str) -> Result<&mut Self, EncodeError> {
        self.write_len(v.len())?;
        self.buf.extend_from_slice(v.as_bytes());
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Sequential read cursor over an encoded byte slice.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(DecodeError::UnexpectedEof { needed, remaining });
        }
        let slice = &self.bytes[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take_array::<1>()?[0])
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        self.take_array().map(u32::from_le_bytes)
    }

    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        self.take_array().map(i32::from_le_bytes)
    }

    pub fn read_i64(&mut self) -> Result<i64, DecodeError> {
        self.take_array().map(i64::from_le_bytes)
    }

    pub fn read_f32(&mut self) -> Result<f32, DecodeError> {
        self.take_array()
            .map(|b| f32::from_bits(u32::from_le_bytes(b)))
    }

    pub fn read_f64(&mut self) -> Result<f64, DecodeError> {
        self.take_array()
            .map(|b| f64::from_bits(u64::from_le_bytes(b)))
    }

    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DecodeError::InvalidBool(other)),
        }
    }

    pub fn read_str(&mut self) -> Result<String, DecodeError> {
        let len = self.read_u32()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidUtf8)
    }

    /// Reads an element count and checks that `count` elements of at least
    /// `min_element_size` bytes can still fit in the input.
    pub fn read_count(&mut self, min_element_size: usize) -> Result<usize, DecodeError> {
        let count = self.read_u32()? as usize;
        let needed = count.saturating_mul(min_element_size);
        let remaining = self.remaining();
        if needed > remaining {
            return Err(DecodeError::UnexpectedEof { needed, remaining });
        }
        Ok(count)
    }

    fn read_repeated<T>(
        &mut self,
        min_element_size: usize,
        mut read_one: impl FnMut(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<Vec<T>, DecodeError> {
        let count = self.read_count(min_element_size)?;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(read_one(self)?);
        }
        Ok(items)
    }
}

impl FieldValue {
    /// Writes this value's payload (without a field name or type tag).
    pub fn write(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        match self {
            FieldValue::Int(v) => {
                writer.write_i32(*v);
            }
            FieldValue::Long(v) => {
                writer.write_i64(*v);
            }
            FieldValue::Float(v) => {
                writer.write_f32(*v);
            }
            FieldValue::Double(v) => {
                writer.write_f64(*v);
            }
            FieldValue::String(v) => {
                writer.write_str(v)?;
            }
            FieldValue::Boolean(v) => {
                writer.write_bool(*v);
            }
            FieldValue::Enum {
                enum_type,
                default_value,
            } => {
                writer.write_str(enum_type)?.write_str(default_value)?;
            }
            FieldValue::RepeatInt(items) => {
                writer.write_len(items.len())?;
                items.iter().for_each(|v| {
                    writer.write_i32(*v);
                });
            }
            FieldValue::RepeatLong(items) => {
                writer.write_len(items.len())?;
                items.iter().for_each(|v| {
                    writer.write_i64(*v);
                });
            }
            FieldValue::RepeatFloat(items) => {
                writer.write_len(items.len())?;
                items.iter().for_each(|v| {
                    writer.write_f32(*v);
                });
            }
            FieldValue::RepeatString(items) => {
                writer.write_len(items.len())?;
                for v in items {
                    writer.write_str(v)?;
                }
            }
        }
        Ok(())
    }

    /// Reads a payload of the given kind.
    pub fn read(kind: FieldType, reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        let value = match kind {
            FieldType::Int => FieldValue::Int(reader.read_i32()?),
            FieldType::Long => FieldValue::Long(reader.read_i64()?),
            FieldType::Float => FieldValue::Float(reader.read_f32()?),
            FieldType::Double => FieldValue::Double(reader.read_f64()?),
            FieldType::String => FieldValue::String(reader.read_str()?),
            FieldType::Boolean => FieldValue::Boolean(reader.read_bool()?),
            FieldType::Enum => {
                let enum_type = reader.read_str()?;
                let default_value = reader.read_str()?;
                FieldValue::Enum {
                    enum_type,
                    default_value,
                }
            }
            FieldType::RepeatInt => {
                FieldValue::RepeatInt(reader.read_repeated(4, |r| r.read_i32())?)
            }
            FieldType::RepeatLong => {
                FieldValue::RepeatLong(reader.read_repeated(8, |r| r.read_i64())?)
            }
            FieldType::RepeatFloat => {
                FieldValue::RepeatFloat(reader.read_repeated(4, |r| r.read_f32())?)
            }
            FieldType::RepeatString => {
                FieldValue::RepeatString(reader.read_repeated(4, |r| r.read_str())?)
            }
        };
        Ok(value)
    }

    /// Writes the one-byte type tag followed by the payload.
    pub fn write_tagged(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer.write_u8(self.field_type().tag());
        self.write(writer)
    }

    pub fn read_tagged(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        let tag = reader.read_u8()?;
        let kind = FieldType::from_tag(tag).ok_or(DecodeError::UnknownFieldType(tag))?;
        Self::read(kind, reader)
    }
}

/// A named value as it appears in a tree document: field name, then payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new(name: impl Into<String>, value: FieldValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.value.field_type()
    }

    pub fn write(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer.write_str(&self.name)?;
        self.value.write(writer)
    }

    pub fn read(kind: FieldType, reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        let name = reader.read_str()?;
        let value = FieldValue::read(kind, reader)?;
        Ok(Self { name, value })
    }

    /// Writes the field name, the type tag, then the payload.
    pub fn write_tagged(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer.write_str(&self.name)?;
        self.value.write_tagged(writer)
    }

    pub fn read_tagged(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        let name = reader.read_str()?;
        let value = FieldValue::read_tagged(reader)?;
        Ok(Self { name, value })
    }
}
