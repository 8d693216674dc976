// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Arithmetic-progression column.

use serde::{Deserialize, Serialize};

use super::error::{CodecError, Result};

/// Relative deviation from a straight line still accepted as evenly spaced.
///
/// A few single-precision ulps, so columns that went through an f32 store
/// are still recognized.
pub const PROGRESSION_TOLERANCE: f64 = 4.0 * f32::EPSILON as f64;

/// `length` values `start + i * increment` for `i` in `[0, length)`.
///
/// Only the three scalars are stored; values are computed on demand, so
/// memory use is constant regardless of length.
///
/// # Example
///
/// ```
/// use axocodec::LinearSequence;
///
/// let time = LinearSequence::new(1000, 0.0, 0.036);
/// assert_eq!(time.len(), 1000);
/// assert_eq!(time.iter().count(), 1000);
/// assert!(time.value(1000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearSequence {
    length: usize,
    start: f64,
    increment: f64,
}

impl LinearSequence {
    /// Create a sequence of `length` values.
    pub fn new(length: usize, start: f64, increment: f64) -> Self {
        Self {
            length,
            start,
            increment,
        }
    }

    /// Fit a sequence through the first and last of `values`.
    ///
    /// Fewer than two values give a zero increment. The result is exact for
    /// arithmetic progressions and an endpoint approximation otherwise.
    pub fn spanning(values: &[f64]) -> Self {
        let length = values.len();
        match (values.first(), values.last()) {
            (Some(&first), Some(&last)) if length > 1 => {
                Self::new(length, first, (last - first) / (length - 1) as f64)
            }
            (Some(&first), _) => Self::new(length, first, 0.0),
            _ => Self::new(0, 0.0, 0.0),
        }
    }

    /// Convert evenly spaced `values` into a sequence.
    ///
    /// Fails with `InvalidColumn` when a value is not finite or any value
    /// lies further than [`PROGRESSION_TOLERANCE`] (relative to the largest
    /// magnitude) from the line through the first and last values.
    ///
    /// ```
    /// use axocodec::LinearSequence;
    ///
    /// let seq = LinearSequence::try_from_values(&[0.0, 0.5, 1.0, 1.5]).unwrap();
    /// assert_eq!(seq.increment(), 0.5);
    /// assert!(LinearSequence::try_from_values(&[0.0, 1.0, 5.0, 6.0]).is_err());
    /// ```
    pub fn try_from_values(values: &[f64]) -> Result<Self> {
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(CodecError::invalid_column(
                0,
                format!("value {i} is {} and cannot be part of a sequence", values[i]),
            ));
        }

        let fitted = Self::spanning(values);
        let magnitude = values.iter().fold(0.0, |m: f64, v| m.max(v.abs()));
        let (worst, deviation) = values
            .iter()
            .zip(fitted.iter())
            .map(|(v, f)| (v - f).abs())
            .enumerate()
            .fold((0, 0.0), |best, (i, d)| {
                if d > best.1 || d.is_nan() {
                    (i, d)
                } else {
                    best
                }
            });

        // NaN from an overflowing fit also fails this check.
        let on_line = deviation <= PROGRESSION_TOLERANCE * magnitude;
        if !on_line {
            return Err(CodecError::invalid_column(
                0,
                format!(
                    "values are not evenly spaced: value {worst} is {} but a sequence from {} by {} gives {}",
                    values[worst],
                    fitted.start,
                    fitted.increment,
                    fitted.get(worst).unwrap_or(f64::NAN)
                ),
            ));
        }
        Ok(fitted)
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Check if the sequence has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// First value.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Step between consecutive values.
    #[inline]
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Value at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        (index < self.length).then(|| self.start + index as f64 * self.increment)
    }

    /// Value at `index`, failing with `IndexOutOfRange` past the end.
    pub fn value(&self, index: usize) -> Result<f64> {
        self.get(index)
            .ok_or_else(|| CodecError::out_of_range(index, self.length))
    }

    /// Iterate over the values. Each call starts again from the beginning.
    pub fn iter(&self) -> SequenceIter {
        SequenceIter {
            sequence: *self,
            front: 0,
            back: self.length,
        }
    }

    /// Collect every value.
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}

impl IntoIterator for &LinearSequence {
    type Item = f64;
    type IntoIter = SequenceIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`LinearSequence`].
#[derive(Debug, Clone)]
pub struct SequenceIter {
    sequence: LinearSequence,
    front: usize,
    back: usize,
}

impl Iterator for SequenceIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        let value = self.sequence.get(self.front);
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.back - self.front;
        (left, Some(left))
    }

    fn nth(&mut self, n: usize) -> Option<f64> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for SequenceIter {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.sequence.get(self.back)
    }
}

impl ExactSizeIterator for SequenceIter {}
