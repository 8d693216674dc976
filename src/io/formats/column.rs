// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Column record codec.
//!
//! A column record is a small header (point count, type tag for AxoGraph X,
//! title) followed by a payload whose shape is given by the record's
//! [`ColumnLayout`]:
//!
//! ```text
//! AxoGraph 4 graph       i32 points | title[80] | f32 * points
//! AxoGraph 4 digitized   i32 points | title[80] | f32 first | f32 interval     (column 0)
//!                        i32 points | title[80] | f32 scale | i16 * points     (other columns)
//! AxoGraph X             i32 points | i32 tag | i32 title bytes | UTF-16BE title | payload
//! ```

use std::borrow::Cow;

use tracing::{debug, warn};

use super::table::{is_lossless, ColumnLayout, FormatRules, ScalarKind};
use crate::core::scaled::INT16_FULL_SCALE;
use crate::core::{Column, LinearSequence, NumericKind, RawArray, ScaledArray, ScaledRaw};
use crate::encoding::byte_order::{ByteCursor, ByteWriter};
use crate::{CodecError, Result};

/// Decode the column record at the cursor.
///
/// Returns the title and the column. The payload length is validated
/// against the remaining bytes before anything is allocated.
pub fn decode_column(
    cursor: &mut ByteCursor<'_>,
    rules: &FormatRules,
    index: usize,
) -> Result<(String, Column)> {
    let record_start = cursor.position();
    let points = cursor.read_i32()?;
    let tag = if rules.tagged { cursor.read_i32()? } else { 0 };
    if points < 0 {
        return Err(CodecError::malformed(
            "points",
            format!("column {index} at position {record_start} declares {points} points"),
        ));
    }
    let points = points as usize;
    let layout = rules.layout_for_tag(index, tag)?;
    let name = rules.text.decode(cursor)?;

    let needed = layout
        .payload_len(points)
        .ok_or_else(|| CodecError::truncated(usize::MAX, cursor.remaining(), cursor.position()))?;
    if needed > cursor.remaining() {
        return Err(CodecError::truncated(
            needed,
            cursor.remaining(),
            cursor.position(),
        ));
    }

    let column = match layout {
        ColumnLayout::Dense(kind) => Column::Raw(read_dense(cursor, kind, points)?),
        ColumnLayout::Series { scalar } => {
            let start = read_scalar(cursor, scalar)?;
            let increment = read_scalar(cursor, scalar)?;
            LinearSequence::new(points, start, increment).into()
        }
        ColumnLayout::ScaledShort {
            scalar,
            with_offset,
        } => {
            let scale = read_scalar(cursor, scalar)?;
            let offset = if with_offset {
                read_scalar(cursor, scalar)?
            } else {
                0.0
            };
            let raw = cursor.read_i16_array(points)?;
            ScaledArray::from_i16(raw, scale, offset).into()
        }
    };

    debug!(
        column = index,
        tag,
        points,
        bytes = cursor.position() - record_start,
        "decoded {} column {:?}",
        column.representation(),
        name
    );
    Ok((name, column))
}

/// Encode one column record.
pub fn encode_column(
    out: &mut ByteWriter,
    rules: &FormatRules,
    index: usize,
    name: &str,
    column: &Column,
) -> Result<()> {
    let (tag, layout) = rules.layout_for_column(index, column)?;
    let points = i32::try_from(column.len()).map_err(|_| {
        CodecError::invalid_column(index, format!("{} points exceed i32", column.len()))
    })?;

    if !is_lossless(rules.version, index, column) {
        debug!(
            column = index,
            format = %rules.version,
            "{} column narrowed to the format's native width",
            column.representation()
        );
    }

    let record_start = out.len();
    out.put_i32(points);
    if let Some(tag) = tag {
        out.put_i32(tag);
    }
    rules
        .text
        .encode(name, out)
        .map_err(|e| e.at_column(index))?;

    match layout {
        ColumnLayout::Dense(kind) => write_dense(out, index, kind, column)?,
        ColumnLayout::Series { scalar } => {
            let sequence = series_of(index, column)?;
            write_scalar(out, scalar, sequence.start());
            write_scalar(out, scalar, sequence.increment());
        }
        ColumnLayout::ScaledShort {
            scalar,
            with_offset,
        } => {
            let (scale, offset, raw) = scaled_short_of(index, column, with_offset);
            write_scalar(out, scalar, scale);
            if with_offset {
                write_scalar(out, scalar, offset);
            }
            for &sample in raw.iter() {
                out.put_i16(sample);
            }
        }
    }

    debug!(
        column = index,
        ?tag,
        points,
        bytes = out.len() - record_start,
        "encoded {} column {:?} as {:?}",
        column.representation(),
        name,
        layout
    );
    Ok(())
}

fn read_scalar(cursor: &mut ByteCursor<'_>, kind: ScalarKind) -> Result<f64> {
    Ok(match kind {
        ScalarKind::Float32 => f64::from(cursor.read_f32()?),
        ScalarKind::Float64 => cursor.read_f64()?,
    })
}

fn write_scalar(out: &mut ByteWriter, kind: ScalarKind, value: f64) {
    match kind {
        ScalarKind::Float32 => out.put_f32(value as f32),
        ScalarKind::Float64 => out.put_f64(value),
    }
}

fn read_dense(cursor: &mut ByteCursor<'_>, kind: NumericKind, points: usize) -> Result<RawArray> {
    Ok(match kind {
        NumericKind::Int16 => RawArray::Int16(cursor.read_i16_array(points)?),
        NumericKind::Int32 => RawArray::Int32(cursor.read_i32_array(points)?),
        NumericKind::Float32 => RawArray::Float32(cursor.read_f32_array(points)?),
        NumericKind::Float64 => RawArray::Float64(cursor.read_f64_array(points)?),
    })
}

fn write_dense(out: &mut ByteWriter, index: usize, kind: NumericKind, column: &Column) -> Result<()> {
    match (kind, column) {
        (NumericKind::Int16, Column::Raw(RawArray::Int16(values))) => {
            values.iter().for_each(|&v| out.put_i16(v))
        }
        (NumericKind::Int32, Column::Raw(RawArray::Int32(values))) => {
            values.iter().for_each(|&v| out.put_i32(v))
        }
        (NumericKind::Float32, Column::Raw(RawArray::Float32(values))) => {
            values.iter().for_each(|&v| out.put_f32(v))
        }
        (NumericKind::Float32, other) => other.iter().for_each(|v| out.put_f32(v as f32)),
        (NumericKind::Float64, other) => other.iter().for_each(|v| out.put_f64(v)),
        (kind, other) => {
            return Err(CodecError::invalid_column(
                index,
                format!("cannot store {} as {kind} array", other.representation()),
            ))
        }
    }
    Ok(())
}

/// Series parameters for a column written without per-element payload.
///
/// A [`LinearSequence`] is written as is. Any other column must already be
/// evenly spaced; the file cannot store anything else, so uneven columns
/// fail with `InvalidColumn` instead of being replaced by a fit.
fn series_of(index: usize, column: &Column) -> Result<LinearSequence> {
    if let Column::Sequence(sequence) = column {
        return Ok(*sequence);
    }
    LinearSequence::try_from_values(&column.to_vec()).map_err(|e| e.at_column(index))
}

/// Scale, offset and int16 samples for a scaled-short record.
///
/// Int16 scaled arrays are written as stored when the layout can hold their
/// offset; everything else is quantized to full int16 range with zero offset.
fn scaled_short_of(index: usize, column: &Column, with_offset: bool) -> (f64, f64, Cow<'_, [i16]>) {
    if let Column::Scaled(scaled) = column {
        if let ScaledRaw::Int16(raw) = scaled.raw() {
            if with_offset || scaled.offset() == 0.0 {
                return (scaled.scale(), scaled.offset(), Cow::Borrowed(raw.as_slice()));
            }
        }
    }

    let (scale, raw) = quantize(index, &column.to_vec());
    (scale, 0.0, Cow::Owned(raw))
}

/// Quantize values to int16 samples with a single f32-representable scale
/// and no offset.
pub(crate) fn quantize(index: usize, values: &[f64]) -> (f64, Vec<i16>) {
    let max = values
        .iter()
        .filter(|v| v.is_finite())
        .fold(0.0, |m: f64, v| m.max(v.abs()));
    let scale = (max / INT16_FULL_SCALE) as f32;
    let scale = if scale > 0.0 && scale.is_finite() {
        f64::from(scale)
    } else {
        1.0
    };

    let (raw, clamped) = ScaledArray::quantize_samples(values, scale, 0.0);
    if clamped > 0 {
        warn!(column = index, clamped, "samples clamped to int16 range");
    }
    (scale, raw)
}
