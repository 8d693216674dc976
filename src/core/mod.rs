// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout axocodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error taxonomy for decoding and encoding
//! - [`Column`] and its representations - the column data model
//! - [`FileContents`] - names, columns and target format of one file
//! - [`FormatVersion`] - the three on-disk layouts

pub mod column;
pub mod contents;
pub mod error;
pub mod scaled;
pub mod sequence;

pub use column::{Column, ColumnIter, NumericKind, RawArray};
pub use contents::FileContents;
pub use error::{CodecError, Result};
pub use scaled::{ScaledArray, ScaledRaw};
pub use sequence::{LinearSequence, SequenceIter};

use serde::{Deserialize, Serialize};

/// On-disk layout of an AxoGraph file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatVersion {
    /// AxoGraph 4 digitized file (series time column + scaled int16 columns)
    OldDigitized,
    /// AxoGraph 4 graph file (float columns)
    OldGraph,
    /// AxoGraph X file (typed columns, newest)
    AxoGraphX,
}

/// Error returned when parsing a `FormatVersion` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFormatVersionError {
    _private: (),
}

impl std::fmt::Display for ParseFormatVersionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid format name, expected 'digitized', 'graph', or 'x'"
        )
    }
}

impl std::error::Error for ParseFormatVersionError {}

impl std::str::FromStr for FormatVersion {
    type Err = ParseFormatVersionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "digitized" | "old-digitized" | "old_digitized" => Ok(FormatVersion::OldDigitized),
            "graph" | "old-graph" | "old_graph" => Ok(FormatVersion::OldGraph),
            "x" | "axograph-x" | "axograph_x" | "axgx" => Ok(FormatVersion::AxoGraphX),
            _ => Err(ParseFormatVersionError { _private: () }),
        }
    }
}

impl std::fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FormatVersion {
    /// Every supported version, oldest first.
    pub const ALL: [FormatVersion; 3] = [
        FormatVersion::OldDigitized,
        FormatVersion::OldGraph,
        FormatVersion::AxoGraphX,
    ];

    /// The newest format, used by default when writing.
    pub fn newest() -> Self {
        FormatVersion::AxoGraphX
    }

    /// Check if this is one of the two AxoGraph 4 layouts.
    pub fn is_legacy(&self) -> bool {
        !matches!(self, FormatVersion::AxoGraphX)
    }

    /// Guess a format from a file extension (`axgx`, `axgd` are AxoGraph X).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "axgx" | "axgd" => Some(FormatVersion::AxoGraphX),
            _ => None,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatVersion::OldDigitized => "old-digitized",
            FormatVersion::OldGraph => "old-graph",
            FormatVersion::AxoGraphX => "axograph-x",
        }
    }
}
