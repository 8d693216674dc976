// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Fixed-width integer and float codec with explicit byte order.
//!
//! Every AxoGraph layout stores its numeric fields big-endian, whatever the
//! host. The free functions here read a value at an offset and report how
//! many bytes they consumed; [`ByteCursor`] and [`ByteWriter`] wrap them for
//! sequential decoding and encoding.
//!
//! # Example
//!
//! ```
//! use axocodec::encoding::byte_order::{read_i32, write_i32, Endianness};
//!
//! let bytes = write_i32(-2, Endianness::Big);
//! assert_eq!(bytes, [0xFF, 0xFF, 0xFF, 0xFE]);
//! assert_eq!(read_i32(&bytes, 0, Endianness::Big).unwrap(), (-2, 4));
//! ```

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::{CodecError, Result};

/// Byte order of a multi-byte field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// Most significant byte first (all AxoGraph formats)
    #[default]
    Big,
    /// Least significant byte first
    Little,
}

/// Borrow exactly `width` bytes at `offset`, or fail with `TruncatedInput`.
#[inline]
fn field(buf: &[u8], offset: usize, width: usize) -> Result<&[u8]> {
    let available = buf.len().saturating_sub(offset);
    if available < width {
        return Err(CodecError::truncated(width, available, offset));
    }
    Ok(&buf[offset..offset + width])
}

macro_rules! primitive_codec {
    ($read:ident, $write:ident, $ty:ty, $width:expr) => {
        #[doc = concat!("Read a `", stringify!($ty), "` at `offset`, returning the value and bytes consumed.")]
        pub fn $read(buf: &[u8], offset: usize, order: Endianness) -> Result<($ty, usize)> {
            let bytes = field(buf, offset, $width)?;
            let value = match order {
                Endianness::Big => BigEndian::$read(bytes),
                Endianness::Little => LittleEndian::$read(bytes),
            };
            Ok((value, $width))
        }

        #[doc = concat!("Encode a `", stringify!($ty), "` in the given byte order.")]
        pub fn $write(value: $ty, order: Endianness) -> [u8; $width] {
            let mut bytes = [0u8; $width];
            match order {
                Endianness::Big => BigEndian::$write(&mut bytes, value),
                Endianness::Little => LittleEndian::$write(&mut bytes, value),
            }
            bytes
        }
    };
}

primitive_codec!(read_u16, write_u16, u16, 2);
primitive_codec!(read_i16, write_i16, i16, 2);
primitive_codec!(read_u32, write_u32, u32, 4);
primitive_codec!(read_i32, write_i32, i32, 4);
primitive_codec!(read_f32, write_f32, f32, 4);
primitive_codec!(read_f64, write_f64, f64, 8);

/// Sequential reader over an in-memory buffer.
///
/// The cursor never mutates the buffer. A failed read leaves the position
/// unchanged.
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
    order: Endianness,
}

macro_rules! cursor_read {
    ($name:ident, $ty:ty, $read:ident) => {
        #[doc = concat!("Read a `", stringify!($ty), "` and advance.")]
        pub fn $name(&mut self) -> Result<$ty> {
            let (value, used) = $read(self.data, self.offset, self.order)?;
            self.offset += used;
            Ok(value)
        }
    };
}

macro_rules! cursor_read_array {
    ($name:ident, $ty:ty, $read:ident, $width:expr) => {
        #[doc = concat!("Read `count` consecutive `", stringify!($ty), "` values.")]
        ///
        /// The whole payload is bounds-checked before anything is allocated.
        pub fn $name(&mut self, count: usize) -> Result<Vec<$ty>> {
            let bytes = self.read_bytes(Self::array_bytes(count, $width, self.offset)?)?;
            let mut values = Vec::with_capacity(count);
            for chunk in bytes.chunks_exact($width) {
                values.push($read(chunk, 0, self.order)?.0);
            }
            Ok(values)
        }
    };
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at the start of `data`.
    pub fn new(data: &'a [u8], order: Endianness) -> Self {
        Self {
            data,
            offset: 0,
            order,
        }
    }

    /// Create a big-endian cursor, the byte order of every AxoGraph layout.
    pub fn big_endian(data: &'a [u8]) -> Self {
        Self::new(data, Endianness::Big)
    }

    /// Current read position.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Check if at end of buffer.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let byte = field(self.data, self.offset, 1)?[0];
        self.offset += 1;
        Ok(byte)
    }

    cursor_read!(read_u16, u16, read_u16);
    cursor_read!(read_i16, i16, read_i16);
    cursor_read!(read_u32, u32, read_u32);
    cursor_read!(read_i32, i32, read_i32);
    cursor_read!(read_f32, f32, read_f32);
    cursor_read!(read_f64, f64, read_f64);

    cursor_read_array!(read_i16_array, i16, read_i16, 2);
    cursor_read_array!(read_i32_array, i32, read_i32, 4);
    cursor_read_array!(read_f32_array, f32, read_f32, 4);
    cursor_read_array!(read_f64_array, f64, read_f64, 8);

    /// Read a byte slice.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = field(self.data, self.offset, count)?;
        self.offset += count;
        Ok(bytes)
    }

    /// Consume everything that is left.
    pub fn read_rest(&mut self) -> &'a [u8] {
        let start = self.offset.min(self.data.len());
        self.offset = self.data.len();
        &self.data[start..]
    }

    /// Skip bytes.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        field(self.data, self.offset, count)?;
        self.offset += count;
        Ok(())
    }

    fn array_bytes(count: usize, width: usize, position: usize) -> Result<usize> {
        count
            .checked_mul(width)
            .ok_or_else(|| CodecError::truncated(usize::MAX, 0, position))
    }
}

/// Sequential writer into a growable buffer.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
    order: Endianness,
}

macro_rules! writer_put {
    ($name:ident, $ty:ty, $write:ident) => {
        #[doc = concat!("Append a `", stringify!($ty), "`.")]
        pub fn $name(&mut self, value: $ty) {
            self.buf.extend_from_slice(&$write(value, self.order));
        }
    };
}

impl ByteWriter {
    /// Create an empty big-endian writer.
    pub fn big_endian() -> Self {
        Self::with_order(Endianness::Big)
    }

    /// Create an empty writer with the given byte order.
    pub fn with_order(order: Endianness) -> Self {
        Self {
            buf: Vec::new(),
            order,
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    writer_put!(put_u16, u16, write_u16);
    writer_put!(put_i16, i16, write_i16);
    writer_put!(put_u32, u32, write_u32);
    writer_put!(put_i32, i32, write_i32);
    writer_put!(put_f32, f32, write_f32);
    writer_put!(put_f64, f64, write_f64);

    /// Append a single byte.
    pub fn put_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Append raw bytes.
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Consume the writer and return the encoded bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
