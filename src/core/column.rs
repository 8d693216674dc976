// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Column data model.
//!
//! A [`Column`] is one of a closed set of representations:
//! - [`RawArray`] - eagerly stored values of a single numeric kind
//! - [`LinearSequence`] - an arithmetic progression stored as three scalars
//! - [`ScaledArray`] - integer samples with a scale and offset
//!
//! All of them expose the same read-only view: a length, a logical numeric
//! kind and an index-addressable sequence of `f64` values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{CodecError, Result};
use super::scaled::{ScaledArray, ScaledRaw};
use super::sequence::LinearSequence;

/// Element type of a stored numeric array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericKind {
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 32-bit IEEE float
    Float32,
    /// 64-bit IEEE float
    Float64,
}

impl NumericKind {
    /// Size of one element in bytes.
    pub fn width(self) -> usize {
        match self {
            NumericKind::Int16 => 2,
            NumericKind::Int32 | NumericKind::Float32 => 4,
            NumericKind::Float64 => 8,
        }
    }

    /// Short lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            NumericKind::Int16 => "int16",
            NumericKind::Int32 => "int32",
            NumericKind::Float32 => "float32",
            NumericKind::Float64 => "float64",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Eagerly stored values of one numeric kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawArray {
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

impl RawArray {
    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            RawArray::Int16(v) => v.len(),
            RawArray::Int32(v) => v.len(),
            RawArray::Float32(v) => v.len(),
            RawArray::Float64(v) => v.len(),
        }
    }

    /// Check if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element kind.
    pub fn kind(&self) -> NumericKind {
        match self {
            RawArray::Int16(_) => NumericKind::Int16,
            RawArray::Int32(_) => NumericKind::Int32,
            RawArray::Float32(_) => NumericKind::Float32,
            RawArray::Float64(_) => NumericKind::Float64,
        }
    }

    /// Element at `index` widened to `f64`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        match self {
            RawArray::Int16(v) => v.get(index).map(|&x| f64::from(x)),
            RawArray::Int32(v) => v.get(index).map(|&x| f64::from(x)),
            RawArray::Float32(v) => v.get(index).map(|&x| f64::from(x)),
            RawArray::Float64(v) => v.get(index).copied(),
        }
    }
}

/// One data column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    /// Plain stored array
    Raw(RawArray),
    /// Arithmetic progression
    Sequence(LinearSequence),
    /// Scaled integer samples
    Scaled(ScaledArray),
}

impl Column {
    /// Number of logical elements.
    pub fn len(&self) -> usize {
        match self {
            Column::Raw(a) => a.len(),
            Column::Sequence(s) => s.len(),
            Column::Scaled(s) => s.len(),
        }
    }

    /// Check if the column has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric kind of the logical values.
    ///
    /// Sequences and scaled arrays produce computed values and report
    /// `Float64`; stored arrays report their element kind.
    pub fn kind(&self) -> NumericKind {
        match self {
            Column::Raw(a) => a.kind(),
            Column::Sequence(_) | Column::Scaled(_) => NumericKind::Float64,
        }
    }

    /// Human-readable name of the representation.
    pub fn representation(&self) -> &'static str {
        match self {
            Column::Raw(RawArray::Int16(_)) => "int16 array",
            Column::Raw(RawArray::Int32(_)) => "int32 array",
            Column::Raw(RawArray::Float32(_)) => "float32 array",
            Column::Raw(RawArray::Float64(_)) => "float64 array",
            Column::Sequence(_) => "linear sequence",
            Column::Scaled(s) => match s.raw() {
                ScaledRaw::Int16(_) => "scaled int16",
                ScaledRaw::Int32(_) => "scaled int32",
            },
        }
    }

    /// Value at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        match self {
            Column::Raw(a) => a.get(index),
            Column::Sequence(s) => s.get(index),
            Column::Scaled(s) => s.get(index),
        }
    }

    /// Value at `index`, failing with `IndexOutOfRange` past the end.
    pub fn value(&self, index: usize) -> Result<f64> {
        self.get(index)
            .ok_or_else(|| CodecError::out_of_range(index, self.len()))
    }

    /// Iterate over the logical values. Each call starts from the beginning.
    pub fn iter(&self) -> ColumnIter<'_> {
        ColumnIter {
            column: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Collect every logical value.
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Dense stored form of this column.
    ///
    /// Stored arrays are returned unchanged; computed columns become
    /// `Float64` arrays of their logical values.
    pub fn materialize(&self) -> RawArray {
        match self {
            Column::Raw(a) => a.clone(),
            Column::Sequence(_) | Column::Scaled(_) => RawArray::Float64(self.to_vec()),
        }
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = f64;
    type IntoIter = ColumnIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the logical values of a [`Column`].
#[derive(Debug, Clone)]
pub struct ColumnIter<'a> {
    column: &'a Column,
    front: usize,
    back: usize,
}

impl Iterator for ColumnIter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        let value = self.column.get(self.front);
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.back - self.front;
        (left, Some(left))
    }
}

impl DoubleEndedIterator for ColumnIter<'_> {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.column.get(self.back)
    }
}

impl ExactSizeIterator for ColumnIter<'_> {}

impl From<RawArray> for Column {
    fn from(array: RawArray) -> Self {
        Column::Raw(array)
    }
}

impl From<LinearSequence> for Column {
    fn from(sequence: LinearSequence) -> Self {
        Column::Sequence(sequence)
    }
}

impl From<ScaledArray> for Column {
    fn from(array: ScaledArray) -> Self {
        Column::Scaled(array)
    }
}

impl From<Vec<i16>> for Column {
    fn from(values: Vec<i16>) -> Self {
        Column::Raw(RawArray::Int16(values))
    }
}

impl From<Vec<i32>> for Column {
    fn from(values: Vec<i32>) -> Self {
        Column::Raw(RawArray::Int32(values))
    }
}

impl From<Vec<f32>> for Column {
    fn from(values: Vec<f32>) -> Self {
        Column::Raw(RawArray::Float32(values))
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Raw(RawArray::Float64(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_kind_width() {
        assert_eq!(NumericKind::Int16.width(), 2);
        assert_eq!(NumericKind::Int32.width(), 4);
        assert_eq!(NumericKind::Float32.width(), 4);
        assert_eq!(NumericKind::Float64.width(), 8);
        assert_eq!(NumericKind::Float32.to_string(), "float32");
    }

    #[test]
    fn test_raw_column_view() {
        let col = Column::from(vec![11043i16, -21274, -1834, 32341]);
        assert_eq!(col.len(), 4);
        assert_eq!(col.kind(), NumericKind::Int16);
        assert_eq!(col.value(1).unwrap(), -21274.0);
        assert_eq!(col.representation(), "int16 array");
        assert!(col.value(4).is_err());
    }

    #[test]
    fn test_sequence_column_view() {
        let col = Column::from(LinearSequence::new(3, 1.0, 0.5));
        assert_eq!(col.kind(), NumericKind::Float64);
        assert_eq!(col.to_vec(), vec![1.0, 1.5, 2.0]);
        assert_eq!(col.materialize(), RawArray::Float64(vec![1.0, 1.5, 2.0]));
    }

    #[test]
    fn test_scaled_column_view() {
        let col = Column::from(ScaledArray::from_i16(vec![2, -4], 0.5, 1.0));
        assert_eq!(col.kind(), NumericKind::Float64);
        assert_eq!(col.to_vec(), vec![2.0, -1.0]);
        assert_eq!(col.representation(), "scaled int16");
    }

    #[test]
    fn test_column_iter_reverse() {
        let col = Column::from(vec![1.0f32, 2.0, 3.0]);
        let reversed: Vec<f64> = col.iter().rev().collect();
        assert_eq!(reversed, vec![3.0, 2.0, 1.0]);
        assert_eq!(col.iter().len(), 3);
        assert_eq!((&col).into_iter().sum::<f64>(), 6.0);
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let original = Column::from(vec![1.0f64, 2.0]);
        let mut copy = original.clone();
        if let Column::Raw(RawArray::Float64(values)) = &mut copy {
            values[0] = 99.0;
        }
        assert_eq!(original.value(0).unwrap(), 1.0);
        assert_eq!(copy.value(0).unwrap(), 99.0);
    }
}
