// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Column title encodings.
//!
//! The two legacy formats store titles as Pascal strings inside a fixed
//! 80-byte field: one length byte followed by single-byte characters. AxoGraph
//! X stores an i32 byte-length prefix followed by big-endian UTF-16 code units.

use crate::encoding::byte_order::{ByteCursor, ByteWriter};
use crate::{CodecError, Result};

/// Size of the fixed title field in legacy column headers.
pub const LEGACY_TITLE_FIELD: usize = 80;

/// Longest title a legacy field can hold (one byte goes to the length).
pub const LEGACY_TITLE_MAX: usize = LEGACY_TITLE_FIELD - 1;

/// Which title encoding a format version uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// Pascal string in an 80-byte field
    LegacyPascal,
    /// Byte-length prefix + UTF-16BE
    Utf16Prefixed,
}

impl TextEncoding {
    /// Decode a title at the cursor position.
    pub fn decode(self, cursor: &mut ByteCursor<'_>) -> Result<String> {
        match self {
            TextEncoding::LegacyPascal => decode_pascal(cursor),
            TextEncoding::Utf16Prefixed => decode_utf16(cursor),
        }
    }

    /// Encode a title, failing if it cannot be stored without loss.
    pub fn encode(self, title: &str, out: &mut ByteWriter) -> Result<()> {
        match self {
            TextEncoding::LegacyPascal => encode_pascal(title, out),
            TextEncoding::Utf16Prefixed => encode_utf16(title, out),
        }
    }
}

/// Decode a Pascal string from a fixed 80-byte title field.
///
/// Characters are interpreted as ISO-8859-1, so every byte maps to exactly one
/// `char` and nothing can fail after the length check.
pub fn decode_pascal(cursor: &mut ByteCursor<'_>) -> Result<String> {
    let start = cursor.position();
    let field = cursor.read_bytes(LEGACY_TITLE_FIELD)?;
    let len = field[0] as usize;
    if len > LEGACY_TITLE_MAX {
        return Err(CodecError::malformed(
            "title",
            format!("Pascal length {len} at position {start} exceeds {LEGACY_TITLE_MAX}"),
        ));
    }
    Ok(field[1..=len].iter().map(|&b| char::from(b)).collect())
}

/// Encode a title as a zero-padded Pascal string field.
pub fn encode_pascal(title: &str, out: &mut ByteWriter) -> Result<()> {
    let mut field = [0u8; LEGACY_TITLE_FIELD];
    let mut len = 0usize;
    for ch in title.chars() {
        let code = u32::from(ch);
        if code > 0xFF {
            return Err(CodecError::invalid_column(
                0,
                format!("title {title:?} has character {ch:?} outside ISO-8859-1"),
            ));
        }
        if len == LEGACY_TITLE_MAX {
            return Err(CodecError::invalid_column(
                0,
                format!("title {title:?} is longer than {LEGACY_TITLE_MAX} characters"),
            ));
        }
        len += 1;
        field[len] = code as u8;
    }
    field[0] = len as u8;
    out.put_bytes(&field);
    Ok(())
}

/// Decode a byte-length-prefixed UTF-16BE title.
pub fn decode_utf16(cursor: &mut ByteCursor<'_>) -> Result<String> {
    let start = cursor.position();
    let byte_len = cursor.read_i32()?;
    if byte_len < 0 || byte_len % 2 != 0 {
        return Err(CodecError::malformed(
            "title",
            format!("invalid UTF-16 byte length {byte_len} at position {start}"),
        ));
    }
    let bytes = cursor.read_bytes(byte_len as usize)?;
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    Ok(char::decode_utf16(units)
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect())
}

/// Encode a title as byte-length prefix + UTF-16BE code units.
pub fn encode_utf16(title: &str, out: &mut ByteWriter) -> Result<()> {
    let units: Vec<u16> = title.encode_utf16().collect();
    let byte_len = i32::try_from(units.len() * 2).map_err(|_| {
        CodecError::invalid_column(0, format!("title of {} code units is too long", units.len()))
    })?;
    out.put_i32(byte_len);
    for unit in units {
        out.put_u16(unit);
    }
    Ok(())
}
