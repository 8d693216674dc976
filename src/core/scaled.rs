// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Scaled-integer column.

use serde::{Deserialize, Serialize};

use super::column::NumericKind;
use super::error::{CodecError, Result};

/// Largest magnitude an int16 sample can represent symmetrically.
pub const INT16_FULL_SCALE: f64 = 32767.0;

/// Raw integer storage behind a [`ScaledArray`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScaledRaw {
    /// 16-bit samples (the only kind AxoGraph stores on disk)
    Int16(Vec<i16>),
    /// 32-bit samples
    Int32(Vec<i32>),
}

impl ScaledRaw {
    /// Number of samples.
    pub fn len(&self) -> usize {
        match self {
            ScaledRaw::Int16(v) => v.len(),
            ScaledRaw::Int32(v) => v.len(),
        }
    }

    /// Check if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage kind of the samples.
    pub fn kind(&self) -> NumericKind {
        match self {
            ScaledRaw::Int16(_) => NumericKind::Int16,
            ScaledRaw::Int32(_) => NumericKind::Int32,
        }
    }

    #[inline]
    fn sample(&self, index: usize) -> Option<f64> {
        match self {
            ScaledRaw::Int16(v) => v.get(index).map(|&x| f64::from(x)),
            ScaledRaw::Int32(v) => v.get(index).map(|&x| f64::from(x)),
        }
    }
}

/// Integer samples plus a linear transform: `value[i] = raw[i] * scale + offset`.
///
/// The raw samples are fixed at construction; there is no way to grow,
/// shrink or edit them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledArray {
    raw: ScaledRaw,
    scale: f64,
    offset: f64,
}

impl ScaledArray {
    /// Create a scaled array over 16-bit samples.
    pub fn from_i16(raw: Vec<i16>, scale: f64, offset: f64) -> Self {
        Self::new(ScaledRaw::Int16(raw), scale, offset)
    }

    /// Create a scaled array over 32-bit samples.
    pub fn from_i32(raw: Vec<i32>, scale: f64, offset: f64) -> Self {
        Self::new(ScaledRaw::Int32(raw), scale, offset)
    }

    /// Create a scaled array from raw samples.
    pub fn new(raw: ScaledRaw, scale: f64, offset: f64) -> Self {
        Self { raw, scale, offset }
    }

    /// Quantize `values` to 16-bit samples spanning the full int16 range.
    ///
    /// The offset is the midpoint of the finite values and the scale maps
    /// half their range to 32767, so every finite value reads back within
    /// `scale / 2`. NaN is stored as sample 0 and infinities clamp. Values
    /// with no spread get scale 1.0.
    ///
    /// ```
    /// use axocodec::ScaledArray;
    ///
    /// let scaled = ScaledArray::quantize(&[1.0, 2.0, 3.0]);
    /// assert_eq!(scaled.offset(), 2.0);
    /// assert!((scaled.value(0).unwrap() - 1.0).abs() <= scaled.scale() / 2.0);
    /// ```
    pub fn quantize(values: &[f64]) -> Self {
        let (min, max) = values
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if min > max {
            let (raw, _) = Self::quantize_samples(values, 1.0, 0.0);
            return Self::from_i16(raw, 1.0, 0.0);
        }

        // Halved before subtracting so extreme ranges do not overflow.
        let offset = min / 2.0 + max / 2.0;
        let scale = (max / 2.0 - min / 2.0) / INT16_FULL_SCALE;
        let scale = if scale > 0.0 && scale.is_finite() {
            scale
        } else {
            1.0
        };
        let (raw, _) = Self::quantize_samples(values, scale, offset);
        Self::from_i16(raw, scale, offset)
    }

    /// Int16 samples for `values` under a fixed transform.
    ///
    /// Returns the samples and how many were clamped to the int16 range.
    pub(crate) fn quantize_samples(values: &[f64], scale: f64, offset: f64) -> (Vec<i16>, usize) {
        let mut clamped = 0usize;
        let raw = values
            .iter()
            .map(|v| {
                let sample = ((v - offset) / scale).round();
                if sample > f64::from(i16::MAX) || sample < f64::from(i16::MIN) {
                    clamped += 1;
                }
                // Saturating cast; NaN becomes 0.
                sample as i16
            })
            .collect();
        (raw, clamped)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Check if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Multiplier applied to each sample.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Constant added after scaling.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The raw integer samples.
    pub fn raw(&self) -> &ScaledRaw {
        &self.raw
    }

    /// Scaled value at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.raw
            .sample(index)
            .map(|sample| sample * self.scale + self.offset)
    }

    /// Scaled value at `index`, failing with `IndexOutOfRange` past the end.
    pub fn value(&self, index: usize) -> Result<f64> {
        self.get(index)
            .ok_or_else(|| CodecError::out_of_range(index, self.len()))
    }

    /// Iterate over the scaled values.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| {
            // In range by construction.
            self.get(i).unwrap_or(f64::NAN)
        })
    }

    /// Collect every scaled value.
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}
