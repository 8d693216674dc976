// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.
//!
//! The sample builders write bytes by hand, independent of the crate's
//! encoder, and mirror the layout of the sample files shipped with
//! AxoGraph X.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use axocodec::{Column, FileContents, LinearSequence, ScaledArray};

// ============================================================================
// Fixture Paths
// ============================================================================

/// Path of an optional fixture under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Create a temporary file path with cleanup guard
pub fn temp_path(name: &str) -> (PathBuf, CleanupGuard) {
    let random = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let dir = std::env::temp_dir().join(format!(
        "axocodec_test_{}_{}_{}",
        std::process::id(),
        random,
        name.replace(['.', ' '], "_")
    ));
    fs::create_dir_all(&dir).ok();
    let path = dir.join(name);
    (path, CleanupGuard(dir))
}

/// Cleanup guard for test temporary files
pub struct CleanupGuard(PathBuf);

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

// ============================================================================
// Byte Builder
// ============================================================================

/// Big-endian byte builder for hand-made fixtures.
#[derive(Default)]
pub struct BeBytes(Vec<u8>);

impl BeBytes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(mut self, b: &[u8]) -> Self {
        self.0.extend_from_slice(b);
        self
    }

    pub fn i16(self, v: i16) -> Self {
        self.bytes(&v.to_be_bytes())
    }

    pub fn i32(self, v: i32) -> Self {
        self.bytes(&v.to_be_bytes())
    }

    pub fn f32(self, v: f32) -> Self {
        self.bytes(&v.to_be_bytes())
    }

    pub fn f64(self, v: f64) -> Self {
        self.bytes(&v.to_be_bytes())
    }

    /// 80-byte length-prefixed Latin-1 title.
    pub fn pascal(self, title: &str) -> Self {
        let mut field = [0u8; 80];
        field[0] = title.len() as u8;
        field[1..=title.len()].copy_from_slice(title.as_bytes());
        self.bytes(&field)
    }

    /// Byte-length-prefixed UTF-16BE title.
    pub fn utf16(self, title: &str) -> Self {
        let units: Vec<u16> = title.encode_utf16().collect();
        let mut out = self.i32((units.len() * 2) as i32);
        for unit in units {
            out = out.bytes(&unit.to_be_bytes());
        }
        out
    }

    pub fn finish(self) -> Vec<u8> {
        self.0
    }
}

// ============================================================================
// Sample Files
// ============================================================================

pub const DIGITIZED_COLUMNS: usize = 29;
pub const DIGITIZED_POINTS: usize = 200;

/// Scale of the current column; the other data columns use picoamps.
pub const DIGITIZED_CURRENT_SCALE: f32 = 1.0e-13;
/// Sum of the current column of the AxoGraph digitized sample file.
pub const DIGITIZED_CURRENT_SUM: f64 = -1.973206e-07;

/// Current column samples: a -9866 baseline with a small ripple. They sum
/// to -1973206, so the column sums to [`DIGITIZED_CURRENT_SUM`].
fn digitized_current_raw(i: usize) -> i16 {
    -9866 + (i % 7) as i16 - 3
}

/// AxoGraph 4 digitized file: 29 columns of 200 points.
pub fn digitized_sample() -> Vec<u8> {
    let mut b = BeBytes::new()
        .bytes(b"AxGr")
        .i16(2)
        .i16(DIGITIZED_COLUMNS as i16);

    b = b
        .i32(DIGITIZED_POINTS as i32)
        .pascal("Time (s)")
        .f32(1.0e-4)
        .f32(1.0e-4);

    b = b
        .i32(DIGITIZED_POINTS as i32)
        .pascal("Current (A)")
        .f32(DIGITIZED_CURRENT_SCALE);
    for i in 0..DIGITIZED_POINTS {
        b = b.i16(digitized_current_raw(i));
    }

    for column in 2..DIGITIZED_COLUMNS {
        b = b
            .i32(DIGITIZED_POINTS as i32)
            .pascal(&format!("Column{}", column + 1))
            .f32(1.0e-12);
        for i in 0..DIGITIZED_POINTS {
            b = b.i16((i % 7) as i16 - 3);
        }
    }
    b.finish()
}

pub const GRAPH_POINTS: usize = 2048;

/// AxoGraph 4 graph file: 3 float columns of 2048 points.
pub fn graph_sample() -> Vec<u8> {
    let mut b = BeBytes::new().bytes(b"AxGr").i16(1).i16(3);
    for (column, name) in ["Time (sec)", "Current (A)", "Current (A)"]
        .into_iter()
        .enumerate()
    {
        b = b.i32(GRAPH_POINTS as i32).pascal(name);
        for i in 0..GRAPH_POINTS {
            let v = match column {
                0 => (i + 1) as f32 * 0.0005,
                1 => (i as f32).sin() * 1.0e-9,
                _ => -(i as f32) * 1.0e-12,
            };
            b = b.f32(v);
        }
    }
    b.finish()
}

pub const X_POINTS: usize = 1000;
pub const X_TRAILER: &[u8] = b"\x00\x00\x00\x02graph settings";
/// Sum of the current column of the AxoGraph X sample file.
pub const X_CURRENT_SUM: f64 = -2.3021573e-8;

/// AxoGraph X file: 7 columns of 1000 points, one of each stored type,
/// followed by a settings trailer.
pub fn axograph_x_sample() -> Vec<u8> {
    let n = X_POINTS as i32;
    let mut b = BeBytes::new().bytes(b"axgx").i32(6).i32(7);

    // Time: double array ending at exactly 0.05
    b = b.i32(n).i32(7).utf16("Time (s)");
    for i in 0..X_POINTS {
        b = b.f64((i + 1) as f64 / 20000.0);
    }

    // Current: scaled int16, 573 samples at -23022 and the rest at -23021
    b = b.i32(n).i32(10).utf16("Current (A)").f64(1.0e-15).f64(0.0);
    for i in 0..X_POINTS {
        b = b.i16(if i < 573 { -23022 } else { -23021 });
    }

    b = b.i32(n).i32(4).utf16("");
    for i in 0..X_POINTS {
        b = b.i16(i as i16);
    }

    b = b.i32(n).i32(5).utf16("");
    for i in 0..X_POINTS {
        b = b.i32(i as i32 * 100_000);
    }

    b = b.i32(n).i32(6).utf16("");
    for i in 0..X_POINTS {
        b = b.f32(i as f32 * 0.25);
    }

    b = b.i32(n).i32(9).utf16("").f64(0.0).f64(5.0e-5);

    b = b.i32(n).i32(7).utf16("");
    for i in 0..X_POINTS {
        b = b.f64(-(i as f64) * 1.0e-11);
    }

    b.bytes(X_TRAILER).finish()
}

// ============================================================================
// Read/Write Contents
// ============================================================================

/// One column of every supported representation.
pub fn mixed_contents() -> FileContents {
    FileContents::new(
        ["time", "", "seq", "float", "double", "short", "int", "scaled"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        vec![
            Column::from(vec![2.01f64, 2.02, 2.03, 2.04]),
            Column::from(vec![1.0f64, 2.1, 3.4, 5.3]),
            LinearSequence::new(4, 0.12345, 0.54321).into(),
            Column::from(vec![1.8218f32, 4.3672, 5.1484, 7.3235]),
            Column::from(vec![1.82187845f64, 4.367244252, 5.14842452445, 7.322452435]),
            Column::from(vec![11043i16, -21274, -1834, 32341]),
            Column::from(vec![1213104371i32, -2027483727, -18, 3234]),
            ScaledArray::from_i16(vec![12, -18, 16, 42], 0.001, 0.1).into(),
        ],
    )
    .unwrap()
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert two columns agree to `digits` significant digits of the
/// original column's magnitude.
pub fn assert_roughly(original: &Column, decoded: &Column, digits: i32, label: &str) {
    assert_eq!(original.len(), decoded.len(), "{label}: length");
    let magnitude = original.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    let tolerance = magnitude * 10f64.powi(-digits);
    for (i, (a, b)) in original.iter().zip(decoded.iter()).enumerate() {
        assert!(
            (a - b).abs() <= tolerance,
            "{label}[{i}]: {a} vs {b} (tolerance {tolerance})"
        );
    }
}
