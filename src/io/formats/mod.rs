// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! AxoGraph file layouts.
//!
//! A file is a header followed by one record per column, in column order:
//! - [`header`]: signature, version field and column count
//! - [`column`]: per-column record codec
//! - [`table`]: per-format layout and type-tag tables
//!
//! AxoGraph X files may carry bytes after the last column (the graph
//! settings block). They are kept verbatim as the trailer and written back
//! when the target is AxoGraph X.

pub mod column;
pub mod header;
pub mod table;

use tracing::debug;

use crate::core::FileContents;
use crate::encoding::byte_order::{ByteCursor, ByteWriter};
use crate::{FormatVersion, Result};

use column::{decode_column, encode_column};
use header::{decode_header, encode_header_into};
use table::FormatRules;

/// Decode a complete file image.
///
/// Fails on the first malformed record; no partial result is returned.
pub fn decode(bytes: &[u8]) -> Result<FileContents> {
    let header = decode_header(bytes)?;
    let rules = FormatRules::of(header.version);
    let mut cursor = ByteCursor::big_endian(bytes);
    cursor.skip(header.columns_offset)?;

    debug!(
        format = %header.version,
        revision = header.revision,
        columns = header.column_count,
        size = bytes.len(),
        "decoding file"
    );

    // A record is at least four bytes; don't trust the count for capacity.
    let capacity = header.column_count.min(cursor.remaining() / 4);
    let mut names = Vec::with_capacity(capacity);
    let mut columns = Vec::with_capacity(capacity);
    for index in 0..header.column_count {
        let (name, column) = decode_column(&mut cursor, &rules, index)?;
        names.push(name);
        columns.push(column);
    }

    let rest = cursor.read_rest();
    let trailer = if rest.is_empty() {
        None
    } else if header.version.is_legacy() {
        debug!(bytes = rest.len(), "ignoring bytes after last column");
        None
    } else {
        debug!(bytes = rest.len(), "keeping trailer");
        Some(rest.to_vec())
    };

    Ok(FileContents::from_decoded(
        names,
        columns,
        header.version,
        trailer,
    ))
}

/// Encode `contents` in `format`.
///
/// The trailer is written only for AxoGraph X targets.
pub fn encode(contents: &FileContents, format: FormatVersion) -> Result<Vec<u8>> {
    let rules = FormatRules::of(format);
    let mut out = ByteWriter::big_endian();
    encode_header_into(format, contents.len(), &mut out)?;

    for (index, (name, column)) in contents.iter().enumerate() {
        encode_column(&mut out, &rules, index, name, column)?;
    }

    match contents.trailer() {
        Some(trailer) if format == FormatVersion::AxoGraphX => out.put_bytes(trailer),
        Some(trailer) => debug!(
            bytes = trailer.len(),
            %format,
            "dropping trailer for legacy format"
        ),
        None => {}
    }

    debug!(
        %format,
        columns = contents.len(),
        size = out.len(),
        "encoded file"
    );
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Column, LinearSequence, RawArray, ScaledArray};
    use crate::CodecError;

    fn sample() -> FileContents {
        FileContents::new(
            vec!["Time (s)".into(), "Current (A)".into(), "".into()],
            vec![
                LinearSequence::new(4, 0.0, 0.25).into(),
                Column::from(vec![1.0f64, 2.1, 3.4, 5.3]),
                ScaledArray::from_i16(vec![12, -18, 16, 42], 0.5, 0.0).into(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_axograph_x_round_trip_is_exact() {
        let contents = sample().with_trailer(Some(b"settings".to_vec()));
        let bytes = encode(&contents, FormatVersion::AxoGraphX).unwrap();
        assert!(bytes.ends_with(b"settings"));

        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, contents);
        assert_eq!(encode(&decoded, FormatVersion::AxoGraphX).unwrap(), bytes);
    }

    #[test]
    fn test_legacy_targets_drop_trailer() {
        let contents = sample().with_trailer(Some(vec![1, 2, 3]));
        for format in [FormatVersion::OldGraph, FormatVersion::OldDigitized] {
            let decoded = decode(&encode(&contents, format).unwrap()).unwrap();
            assert_eq!(decoded.format_version(), format);
            assert_eq!(decoded.trailer(), None);
            assert_eq!(decoded.names(), contents.names());
        }
    }

    #[test]
    fn test_digitized_requires_evenly_spaced_time_column() {
        let uneven = FileContents::new(
            vec!["time".into(), "v".into()],
            vec![
                Column::from(vec![0.0f64, 1.0, 5.0, 6.0]),
                Column::from(vec![1.0f64, 2.0, 3.0, 4.0]),
            ],
        )
        .unwrap();
        assert!(matches!(
            encode(&uneven, FormatVersion::OldDigitized),
            Err(CodecError::InvalidColumn { column: 0, .. })
        ));
        // The other layouts store the column element by element.
        assert!(encode(&uneven, FormatVersion::OldGraph).is_ok());

        let even = FileContents::new(
            vec!["time".into(), "v".into()],
            vec![
                Column::from(vec![0.0f64, 2.0, 4.0, 6.0]),
                Column::from(vec![1.0f64, 2.0, 3.0, 4.0]),
            ],
        )
        .unwrap();
        let decoded = decode(&encode(&even, FormatVersion::OldDigitized).unwrap()).unwrap();
        assert_eq!(decoded.columns()[0].to_vec(), vec![0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_old_graph_columns_are_float() {
        let bytes = encode(&sample(), FormatVersion::OldGraph).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert!(decoded
            .columns()
            .iter()
            .all(|c| matches!(c, Column::Raw(RawArray::Float32(_)))));
        assert_eq!(decoded.columns()[0].to_vec(), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_legacy_trailing_bytes_ignored() {
        let mut bytes = encode(&sample(), FormatVersion::OldGraph).unwrap();
        bytes.extend_from_slice(&[0xde, 0xad]);
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.trailer(), None);
        assert_eq!(decoded.len(), 3);
    }

    #[test]
    fn test_empty_file() {
        let contents = FileContents::new(Vec::new(), Vec::new()).unwrap();
        for format in FormatVersion::ALL {
            let decoded = decode(&encode(&contents, format).unwrap()).unwrap();
            assert!(decoded.is_empty());
        }
    }

    #[test]
    fn test_missing_column_record_is_truncated() {
        let bytes = encode(&sample(), FormatVersion::AxoGraphX).unwrap();
        let mut header_only = bytes[..header::AXOGRAPH_X_HEADER_SIZE].to_vec();
        header_only[11] = 1;
        assert!(matches!(
            decode(&header_only),
            Err(CodecError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_column_count_larger_than_file() {
        let bytes = b"axgx\x00\x00\x00\x06\x7f\xff\xff\xff";
        assert!(matches!(
            decode(bytes),
            Err(CodecError::TruncatedInput { .. })
        ));
    }
}
