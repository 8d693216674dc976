// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Per-format column layout tables.
//!
//! Each format version maps columns to an on-disk [`ColumnLayout`]. AxoGraph X
//! selects the layout with an explicit type tag; the AxoGraph 4 layouts
//! select it by column position. Both directions (tag to layout when
//! decoding, column to layout and tag when encoding) go through the tables
//! below rather than per-format branches.

use crate::core::{Column, NumericKind, RawArray, ScaledRaw};
use crate::encoding::text::TextEncoding;
use crate::{CodecError, FormatVersion, Result};

/// AxoGraph X tag: int16 array.
pub const TAG_SHORT_ARRAY: i32 = 4;
/// AxoGraph X tag: int32 array.
pub const TAG_INT_ARRAY: i32 = 5;
/// AxoGraph X tag: float array.
pub const TAG_FLOAT_ARRAY: i32 = 6;
/// AxoGraph X tag: double array.
pub const TAG_DOUBLE_ARRAY: i32 = 7;
/// AxoGraph X tag: series (first value + increment).
pub const TAG_SERIES: i32 = 9;
/// AxoGraph X tag: scaled int16 (scale + offset + samples).
pub const TAG_SCALED_SHORT: i32 = 10;

/// Storage of the per-column scalars (series start/increment, scale/offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// 32-bit float (AxoGraph 4)
    Float32,
    /// 64-bit float (AxoGraph X)
    Float64,
}

impl ScalarKind {
    /// Size of one scalar in bytes.
    pub fn width(self) -> usize {
        match self {
            ScalarKind::Float32 => 4,
            ScalarKind::Float64 => 8,
        }
    }
}

/// How one column record's payload is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLayout {
    /// `points` elements of one kind
    Dense(NumericKind),
    /// First value and increment, no per-element payload
    Series {
        /// Storage kind of the two scalars
        scalar: ScalarKind,
    },
    /// Scale (and optionally offset) followed by `points` int16 samples
    ScaledShort {
        /// Storage kind of the scale/offset scalars
        scalar: ScalarKind,
        /// Whether an offset is stored after the scale
        with_offset: bool,
    },
}

impl ColumnLayout {
    /// Payload size in bytes for `points` elements, or `None` on overflow.
    pub fn payload_len(self, points: usize) -> Option<usize> {
        match self {
            ColumnLayout::Dense(kind) => points.checked_mul(kind.width()),
            ColumnLayout::Series { scalar } => Some(2 * scalar.width()),
            ColumnLayout::ScaledShort {
                scalar,
                with_offset,
            } => {
                let scalars = (if with_offset { 2 } else { 1 }) * scalar.width();
                points.checked_mul(2)?.checked_add(scalars)
            }
        }
    }
}

/// AxoGraph X type-tag table.
pub const AXOGRAPH_X_TAGS: [(i32, ColumnLayout); 6] = [
    (TAG_SHORT_ARRAY, ColumnLayout::Dense(NumericKind::Int16)),
    (TAG_INT_ARRAY, ColumnLayout::Dense(NumericKind::Int32)),
    (TAG_FLOAT_ARRAY, ColumnLayout::Dense(NumericKind::Float32)),
    (TAG_DOUBLE_ARRAY, ColumnLayout::Dense(NumericKind::Float64)),
    (
        TAG_SERIES,
        ColumnLayout::Series {
            scalar: ScalarKind::Float64,
        },
    ),
    (
        TAG_SCALED_SHORT,
        ColumnLayout::ScaledShort {
            scalar: ScalarKind::Float64,
            with_offset: true,
        },
    ),
];

const GRAPH_COLUMN: ColumnLayout = ColumnLayout::Dense(NumericKind::Float32);

const DIGITIZED_TIME_COLUMN: ColumnLayout = ColumnLayout::Series {
    scalar: ScalarKind::Float32,
};

const DIGITIZED_DATA_COLUMN: ColumnLayout = ColumnLayout::ScaledShort {
    scalar: ScalarKind::Float32,
    with_offset: false,
};

/// Column record rules of one format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRules {
    /// Format version these rules describe
    pub version: FormatVersion,
    /// Title encoding
    pub text: TextEncoding,
    /// Whether each record carries an i32 type tag
    pub tagged: bool,
}

impl FormatRules {
    /// Rules for a format version.
    pub fn of(version: FormatVersion) -> Self {
        match version {
            FormatVersion::OldGraph | FormatVersion::OldDigitized => Self {
                version,
                text: TextEncoding::LegacyPascal,
                tagged: false,
            },
            FormatVersion::AxoGraphX => Self {
                version,
                text: TextEncoding::Utf16Prefixed,
                tagged: true,
            },
        }
    }

    /// Layout of a record being decoded.
    ///
    /// `tag` is the stored type tag for tagged formats and ignored otherwise.
    pub fn layout_for_tag(&self, index: usize, tag: i32) -> Result<ColumnLayout> {
        match self.version {
            FormatVersion::OldGraph => Ok(GRAPH_COLUMN),
            FormatVersion::OldDigitized if index == 0 => Ok(DIGITIZED_TIME_COLUMN),
            FormatVersion::OldDigitized => Ok(DIGITIZED_DATA_COLUMN),
            FormatVersion::AxoGraphX => AXOGRAPH_X_TAGS
                .iter()
                .find(|(t, _)| *t == tag)
                .map(|(_, layout)| *layout)
                .ok_or_else(|| CodecError::unsupported_column_type(tag, index)),
        }
    }

    /// Layout (and tag, for tagged formats) used to encode `column`.
    ///
    /// AxoGraph X picks the narrowest lossless layout. The legacy layouts are
    /// fixed by position and the column is converted to fit.
    pub fn layout_for_column(
        &self,
        index: usize,
        column: &Column,
    ) -> Result<(Option<i32>, ColumnLayout)> {
        let layout = match self.version {
            FormatVersion::OldGraph => return Ok((None, GRAPH_COLUMN)),
            FormatVersion::OldDigitized if index == 0 => return Ok((None, DIGITIZED_TIME_COLUMN)),
            FormatVersion::OldDigitized => return Ok((None, DIGITIZED_DATA_COLUMN)),
            FormatVersion::AxoGraphX => match column {
                Column::Raw(array) => ColumnLayout::Dense(array.kind()),
                Column::Sequence(_) => ColumnLayout::Series {
                    scalar: ScalarKind::Float64,
                },
                Column::Scaled(scaled) => match scaled.raw() {
                    ScaledRaw::Int16(_) => ColumnLayout::ScaledShort {
                        scalar: ScalarKind::Float64,
                        with_offset: true,
                    },
                    ScaledRaw::Int32(_) => ColumnLayout::Dense(NumericKind::Float64),
                },
            },
        };

        let tag = AXOGRAPH_X_TAGS
            .iter()
            .find(|(_, l)| *l == layout)
            .map(|(t, _)| *t)
            .ok_or_else(|| {
                CodecError::invalid_column(index, format!("no AxoGraph X tag for {layout:?}"))
            })?;
        Ok((Some(tag), layout))
    }
}

/// Check whether a column survives a write to `version` without precision loss.
pub fn is_lossless(version: FormatVersion, index: usize, column: &Column) -> bool {
    match version {
        FormatVersion::AxoGraphX => true,
        FormatVersion::OldGraph => match column {
            Column::Raw(RawArray::Float32(_)) | Column::Raw(RawArray::Int16(_)) => true,
            other => other.iter().all(|v| f64::from(v as f32) == v),
        },
        FormatVersion::OldDigitized if index == 0 => match column {
            Column::Sequence(s) => {
                f64::from(s.start() as f32) == s.start()
                    && f64::from(s.increment() as f32) == s.increment()
            }
            _ => false,
        },
        FormatVersion::OldDigitized => match column {
            Column::Scaled(s) => {
                matches!(s.raw(), ScaledRaw::Int16(_))
                    && s.offset() == 0.0
                    && f64::from(s.scale() as f32) == s.scale()
            }
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LinearSequence, ScaledArray};

    #[test]
    fn test_axograph_x_tag_lookup() {
        let rules = FormatRules::of(FormatVersion::AxoGraphX);
        assert_eq!(
            rules.layout_for_tag(0, TAG_SHORT_ARRAY).unwrap(),
            ColumnLayout::Dense(NumericKind::Int16)
        );
        assert!(matches!(
            rules.layout_for_tag(0, TAG_SERIES).unwrap(),
            ColumnLayout::Series { .. }
        ));
        for unknown in [0, 1, 3, 8, 11, 12, -1, 100] {
            assert!(matches!(
                rules.layout_for_tag(2, unknown),
                Err(CodecError::UnsupportedColumnType { column: 2, .. })
            ));
        }
    }

    #[test]
    fn test_legacy_layouts_by_position() {
        let digitized = FormatRules::of(FormatVersion::OldDigitized);
        assert!(!digitized.tagged);
        assert_eq!(digitized.layout_for_tag(0, 0).unwrap(), DIGITIZED_TIME_COLUMN);
        assert_eq!(digitized.layout_for_tag(1, 0).unwrap(), DIGITIZED_DATA_COLUMN);

        let graph = FormatRules::of(FormatVersion::OldGraph);
        assert_eq!(graph.layout_for_tag(5, 0).unwrap(), GRAPH_COLUMN);
        assert_eq!(graph.text, TextEncoding::LegacyPascal);
    }

    #[test]
    fn test_axograph_x_tag_selection() {
        let rules = FormatRules::of(FormatVersion::AxoGraphX);
        let cases: Vec<(Column, i32)> = vec![
            (Column::from(vec![1i16]), TAG_SHORT_ARRAY),
            (Column::from(vec![1i32]), TAG_INT_ARRAY),
            (Column::from(vec![1.0f32]), TAG_FLOAT_ARRAY),
            (Column::from(vec![1.0f64]), TAG_DOUBLE_ARRAY),
            (LinearSequence::new(3, 0.0, 1.0).into(), TAG_SERIES),
            (ScaledArray::from_i16(vec![1], 1.0, 0.0).into(), TAG_SCALED_SHORT),
            (ScaledArray::from_i32(vec![1], 1.0, 0.0).into(), TAG_DOUBLE_ARRAY),
        ];
        for (column, tag) in cases {
            let (selected, _) = rules.layout_for_column(0, &column).unwrap();
            assert_eq!(selected, Some(tag), "{}", column.representation());
        }
    }

    #[test]
    fn test_payload_len() {
        assert_eq!(ColumnLayout::Dense(NumericKind::Float64).payload_len(3), Some(24));
        assert_eq!(DIGITIZED_TIME_COLUMN.payload_len(1000), Some(8));
        assert_eq!(ScalarKind::Float32.width(), 4);
        assert_eq!(DIGITIZED_DATA_COLUMN.payload_len(10), Some(24));
        assert_eq!(
            ColumnLayout::ScaledShort {
                scalar: ScalarKind::Float64,
                with_offset: true
            }
            .payload_len(1),
            Some(18)
        );
        assert_eq!(ColumnLayout::Dense(NumericKind::Float64).payload_len(usize::MAX), None);
    }

    #[test]
    fn test_is_lossless() {
        let seq: Column = LinearSequence::new(4, 0.5, 0.25).into();
        assert!(is_lossless(FormatVersion::OldDigitized, 0, &seq));
        assert!(!is_lossless(FormatVersion::OldDigitized, 1, &seq));
        assert!(is_lossless(FormatVersion::OldGraph, 0, &seq));

        let doubles = Column::from(vec![0.1f64]);
        assert!(!is_lossless(FormatVersion::OldGraph, 1, &doubles));
        assert!(is_lossless(FormatVersion::AxoGraphX, 1, &doubles));
    }
}
