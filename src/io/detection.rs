// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Format detection from the leading signature bytes.
//!
//! Every AxoGraph file starts with a 4-byte signature followed by a version
//! field:
//!
//! - `AxGr` + i16 `1` - AxoGraph 4 graph file
//! - `AxGr` + i16 `2` - AxoGraph 4 digitized file
//! - `axgx` + i32 `3..=6` - AxoGraph X (revision sub-field)
//!
//! Anything else is rejected with `UnrecognizedFormat`; there is no
//! extension-based fallback when reading.
//!
//! # Example
//!
//! ```
//! use axocodec::io::detection::detect_version;
//! use axocodec::FormatVersion;
//!
//! let head = [b'a', b'x', b'g', b'x', 0, 0, 0, 5];
//! let detected = detect_version(&head)?;
//! assert_eq!(detected.version, FormatVersion::AxoGraphX);
//! assert_eq!(detected.revision, 5);
//! # Ok::<(), axocodec::CodecError>(())
//! ```

use std::fs::File;
use std::io::Read;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::encoding::byte_order::{read_i16, read_i32, Endianness};
use crate::{CodecError, FormatVersion, Result};

/// Signature of both AxoGraph 4 layouts.
pub const LEGACY_SIGNATURE: [u8; 4] = *b"AxGr";

/// Signature of AxoGraph X files.
pub const AXOGRAPH_X_SIGNATURE: [u8; 4] = *b"axgx";

/// Width of the signature token.
pub const SIGNATURE_LEN: usize = 4;

/// Version field value of AxoGraph 4 graph files.
pub const OLD_GRAPH_ID: i16 = 1;

/// Version field value of AxoGraph 4 digitized files.
pub const OLD_DIGITIZED_ID: i16 = 2;

/// AxoGraph X revisions that share one column layout.
pub const AXOGRAPH_X_REVISIONS: RangeInclusive<i32> = 3..=6;

/// Revision written by the encoder.
pub const AXOGRAPH_X_LATEST_REVISION: i32 = 6;

/// Result of signature detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedFormat {
    /// Layout family
    pub version: FormatVersion,
    /// Raw version field as stored (1/2 for legacy, 3..=6 for AxoGraph X)
    pub revision: i32,
    /// Bytes consumed by the signature and version field
    pub consumed: usize,
}

/// Detect the format version of an in-memory file image.
pub fn detect_version(bytes: &[u8]) -> Result<DetectedFormat> {
    let Some(signature) = bytes.get(..SIGNATURE_LEN) else {
        return Err(CodecError::unrecognized_format(format!(
            "{} bytes is too short for a signature",
            bytes.len()
        )));
    };

    if signature == LEGACY_SIGNATURE {
        let (id, used) = read_i16(bytes, SIGNATURE_LEN, Endianness::Big)?;
        let version = match id {
            OLD_GRAPH_ID => FormatVersion::OldGraph,
            OLD_DIGITIZED_ID => FormatVersion::OldDigitized,
            other => {
                return Err(CodecError::unrecognized_format(format!(
                    "AxoGraph 4 file with unknown format id {other}"
                )))
            }
        };
        return Ok(DetectedFormat {
            version,
            revision: i32::from(id),
            consumed: SIGNATURE_LEN + used,
        });
    }

    if signature == AXOGRAPH_X_SIGNATURE {
        let (revision, used) = read_i32(bytes, SIGNATURE_LEN, Endianness::Big)?;
        if !AXOGRAPH_X_REVISIONS.contains(&revision) {
            return Err(CodecError::unrecognized_format(format!(
                "AxoGraph X file with unsupported revision {revision}"
            )));
        }
        return Ok(DetectedFormat {
            version: FormatVersion::AxoGraphX,
            revision,
            consumed: SIGNATURE_LEN + used,
        });
    }

    Err(CodecError::unrecognized_format(format!(
        "signature {}",
        hex::encode(signature)
    )))
}

/// Detect the format version of a file by reading only its first bytes.
pub fn detect_format<P: AsRef<Path>>(path: P) -> Result<DetectedFormat> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| CodecError::io("FormatDetection", format!("Failed to open file: {e}")))?;

    let mut head = Vec::with_capacity(SIGNATURE_LEN + 4);
    file.take((SIGNATURE_LEN + 4) as u64)
        .read_to_end(&mut head)
        .map_err(|e| CodecError::io("FormatDetection", format!("Failed to read header: {e}")))?;

    detect_version(&head)
}

/// Check if a file carries a recognized AxoGraph signature.
pub fn is_axograph_file<P: AsRef<Path>>(path: P) -> bool {
    detect_format(path).is_ok()
}
