// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! File header codec.
//!
//! | Version        | Layout                                  | Size |
//! |----------------|-----------------------------------------|------|
//! | `OldGraph`     | `AxGr`, i16 format id 1, i16 columns    | 8    |
//! | `OldDigitized` | `AxGr`, i16 format id 2, i16 columns    | 8    |
//! | `AxoGraphX`    | `axgx`, i32 revision, i32 columns       | 12   |
//!
//! Column records start immediately after the header.

use crate::encoding::byte_order::{ByteCursor, ByteWriter};
use crate::io::detection::{
    detect_version, AXOGRAPH_X_LATEST_REVISION, AXOGRAPH_X_SIGNATURE, LEGACY_SIGNATURE,
    OLD_DIGITIZED_ID, OLD_GRAPH_ID,
};
use crate::{CodecError, FormatVersion, Result};

/// Header size of both AxoGraph 4 layouts.
pub const LEGACY_HEADER_SIZE: usize = 8;

/// Header size of AxoGraph X files.
pub const AXOGRAPH_X_HEADER_SIZE: usize = 12;

/// Decoded file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Layout family
    pub version: FormatVersion,
    /// Raw version field
    pub revision: i32,
    /// Number of column records that follow
    pub column_count: usize,
    /// Byte offset of the first column record
    pub columns_offset: usize,
}

/// Fixed header size for a format version.
pub fn header_size(version: FormatVersion) -> usize {
    if version.is_legacy() {
        LEGACY_HEADER_SIZE
    } else {
        AXOGRAPH_X_HEADER_SIZE
    }
}

/// Decode the header at the start of `bytes`.
pub fn decode_header(bytes: &[u8]) -> Result<FileHeader> {
    let detected = detect_version(bytes)?;
    let mut cursor = ByteCursor::big_endian(bytes);
    cursor.skip(detected.consumed)?;

    let column_count = if detected.version.is_legacy() {
        i32::from(cursor.read_i16()?)
    } else {
        cursor.read_i32()?
    };
    if column_count < 0 {
        return Err(CodecError::malformed(
            "column count",
            format!("negative value {column_count}"),
        ));
    }

    debug_assert_eq!(cursor.position(), header_size(detected.version));
    Ok(FileHeader {
        version: detected.version,
        revision: detected.revision,
        column_count: column_count as usize,
        columns_offset: cursor.position(),
    })
}

/// Encode a header for `column_count` columns.
///
/// AxoGraph X headers always carry the latest revision.
pub fn encode_header(version: FormatVersion, column_count: usize) -> Result<Vec<u8>> {
    let mut out = ByteWriter::big_endian();
    encode_header_into(version, column_count, &mut out)?;
    Ok(out.into_inner())
}

pub(crate) fn encode_header_into(
    version: FormatVersion,
    column_count: usize,
    out: &mut ByteWriter,
) -> Result<()> {
    match version {
        FormatVersion::OldGraph | FormatVersion::OldDigitized => {
            let count = i16::try_from(column_count).map_err(|_| {
                CodecError::invalid_column(
                    column_count,
                    format!("{version} files hold at most {} columns", i16::MAX),
                )
            })?;
            let id = if version == FormatVersion::OldGraph {
                OLD_GRAPH_ID
            } else {
                OLD_DIGITIZED_ID
            };
            out.put_bytes(&LEGACY_SIGNATURE);
            out.put_i16(id);
            out.put_i16(count);
        }
        FormatVersion::AxoGraphX => {
            let count = i32::try_from(column_count).map_err(|_| {
                CodecError::invalid_column(column_count, "too many columns for an i32 count")
            })?;
            out.put_bytes(&AXOGRAPH_X_SIGNATURE);
            out.put_i32(AXOGRAPH_X_LATEST_REVISION);
            out.put_i32(count);
        }
    }
    Ok(())
}
