// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # axocodec
//!
//! Reader and writer for AxoGraph electrophysiology data files.
//!
//! Three on-disk layouts are supported, all big-endian:
//! - **AxoGraph 4 digitized** (`AxGr`, id 2): series time column plus scaled int16 columns
//! - **AxoGraph 4 graph** (`AxGr`, id 1): float columns
//! - **AxoGraph X** (`axgx`, revisions 3 to 6): typed columns with UTF-16 titles
//!
//! ## Architecture
//!
//! - `core/` - column model ([`Column`], [`LinearSequence`], [`ScaledArray`]),
//!   [`FileContents`], [`FormatVersion`] and the [`CodecError`] taxonomy
//! - `encoding/` - byte cursor/writer and title text encodings
//! - `io/` - format detection, header and column record codecs, file reader/writer
//!
//! ## Example: Reading a file
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let contents = axocodec::io::read_file("recording.axgx")?;
//! println!("{} ({} columns)", contents.format_version(), contents.len());
//! for (name, column) in contents.iter() {
//!     println!("{name}: {} points, first {:?}", column.len(), column.get(0));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Converting to an AxoGraph 4 graph file
//!
//! ```
//! use axocodec::{Column, FileContents, FormatVersion, LinearSequence};
//!
//! let contents = FileContents::new(
//!     vec!["Time (s)".into(), "Current (A)".into()],
//!     vec![
//!         LinearSequence::new(4, 0.0, 0.001).into(),
//!         Column::from(vec![1.5f32, 2.5, 3.5, 4.5]),
//!     ],
//! )?;
//! let bytes = axocodec::encode(&contents, FormatVersion::OldGraph)?;
//! let decoded = axocodec::decode(&bytes)?;
//! assert_eq!(decoded.format_version(), FormatVersion::OldGraph);
//! assert_eq!(decoded.columns()[1].to_vec(), vec![1.5, 2.5, 3.5, 4.5]);
//! # Ok::<(), axocodec::CodecError>(())
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{
    CodecError, Column, FileContents, FormatVersion, LinearSequence, NumericKind, RawArray,
    Result, ScaledArray, ScaledRaw,
};

// Byte order and text primitives
pub mod encoding;

// Detection, layouts, file reader/writer
pub mod io;

/// Decode a complete AxoGraph file image.
///
/// The format is detected from the signature.
pub fn decode(bytes: &[u8]) -> Result<FileContents> {
    io::formats::decode(bytes)
}

/// Encode `contents` in `format`, ignoring the contents' own format.
pub fn encode(contents: &FileContents, format: FormatVersion) -> Result<Vec<u8>> {
    io::formats::encode(contents, format)
}
