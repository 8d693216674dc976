// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! I/O layer for AxoGraph files.
//!
//! - [`detection`]: signature-based format detection
//! - [`formats`]: header and column record layouts, whole-file codec
//! - [`reader`]: memory-mapped file reading
//! - [`writer`]: file writing with a target format

pub mod detection;
pub mod formats;
pub mod reader;
pub mod writer;

// Re-exports
pub use detection::{detect_format, detect_version, is_axograph_file, DetectedFormat};
pub use reader::{read_file, MappedFile};
pub use writer::{write_file, AxoWriter, WriterBuilder, WriterConfig};
