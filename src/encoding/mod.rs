// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Low-level encoding primitives.
//!
//! - [`byte_order`] - bounds-checked big-endian scalar and array reads/writes
//! - [`text`] - column title encodings (Pascal Latin-1 and UTF-16)

pub mod byte_order;
pub mod text;

pub use byte_order::{ByteCursor, ByteWriter, Endianness};
pub use text::TextEncoding;
