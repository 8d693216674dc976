// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for axocodec.
//!
//! Every failure surfaced by the codec is structural: the bytes do not match
//! any known layout, a field runs past the end of the buffer, or a column
//! cannot be represented in the requested format. Nothing here is retried.

use std::fmt;

/// Errors that can occur while decoding or encoding AxoGraph data.
#[derive(Debug, Clone)]
pub enum CodecError {
    /// Signature bytes match none of the known format versions
    UnrecognizedFormat {
        /// Description of what was found at offset 0
        found: String,
    },

    /// A field or payload needs more bytes than remain in the buffer
    TruncatedInput {
        /// Requested bytes
        requested: usize,
        /// Available bytes
        available: usize,
        /// Buffer position when the read was attempted
        position: usize,
    },

    /// Column type tag outside the active format's table
    UnsupportedColumnType {
        /// The on-disk tag value
        tag: i32,
        /// Index of the column carrying the tag
        column: usize,
    },

    /// Header or column header fields are internally inconsistent
    MalformedHeader {
        /// Which field was inconsistent
        field: String,
        /// Why it was rejected
        reason: String,
    },

    /// Element index outside `[0, len)`
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Length of the column
        len: usize,
    },

    /// A column or name cannot be written in the target format
    InvalidColumn {
        /// Index of the offending column
        column: usize,
        /// Why it was rejected
        reason: String,
    },

    /// Underlying file I/O failure
    Io {
        /// What was being done
        context: String,
        /// Error message
        message: String,
    },
}

impl CodecError {
    /// Create an unrecognized format error.
    pub fn unrecognized_format(found: impl Into<String>) -> Self {
        CodecError::UnrecognizedFormat {
            found: found.into(),
        }
    }

    /// Create a truncated input error.
    pub fn truncated(requested: usize, available: usize, position: usize) -> Self {
        CodecError::TruncatedInput {
            requested,
            available,
            position,
        }
    }

    /// Create an unsupported column type error.
    pub fn unsupported_column_type(tag: i32, column: usize) -> Self {
        CodecError::UnsupportedColumnType { tag, column }
    }

    /// Create a malformed header error.
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::MalformedHeader {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an index out of range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        CodecError::IndexOutOfRange { index, len }
    }

    /// Create an invalid column error.
    pub fn invalid_column(column: usize, reason: impl Into<String>) -> Self {
        CodecError::InvalidColumn {
            column,
            reason: reason.into(),
        }
    }

    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::Io {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Attach a column index to errors raised while handling that column.
    ///
    /// Only `UnsupportedColumnType` and `InvalidColumn` carry an index; other
    /// variants pass through unchanged.
    pub(crate) fn at_column(self, index: usize) -> Self {
        match self {
            CodecError::UnsupportedColumnType { tag, .. } => {
                CodecError::UnsupportedColumnType { tag, column: index }
            }
            CodecError::InvalidColumn { reason, .. } => CodecError::InvalidColumn {
                column: index,
                reason,
            },
            other => other,
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::UnrecognizedFormat { found } => vec![("found", found.clone())],
            CodecError::TruncatedInput {
                requested,
                available,
                position,
            } => vec![
                ("requested", requested.to_string()),
                ("available", available.to_string()),
                ("position", position.to_string()),
            ],
            CodecError::UnsupportedColumnType { tag, column } => {
                vec![("tag", tag.to_string()), ("column", column.to_string())]
            }
            CodecError::MalformedHeader { field, reason } => {
                vec![("field", field.clone()), ("reason", reason.clone())]
            }
            CodecError::IndexOutOfRange { index, len } => {
                vec![("index", index.to_string()), ("len", len.to_string())]
            }
            CodecError::InvalidColumn { column, reason } => {
                vec![("column", column.to_string()), ("reason", reason.clone())]
            }
            CodecError::Io { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::UnrecognizedFormat { found } => {
                write!(f, "Unrecognized AxoGraph format: {found}")
            }
            CodecError::TruncatedInput {
                requested,
                available,
                position,
            } => write!(
                f,
                "Truncated input: requested {requested} bytes at position {position}, but only {available} bytes available"
            ),
            CodecError::UnsupportedColumnType { tag, column } => {
                write!(f, "Unsupported column type {tag} in column {column}")
            }
            CodecError::MalformedHeader { field, reason } => {
                write!(f, "Malformed header field '{field}': {reason}")
            }
            CodecError::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for column of length {len}")
            }
            CodecError::InvalidColumn { column, reason } => {
                write!(f, "Cannot encode column {column}: {reason}")
            }
            CodecError::Io { context, message } => write!(f, "{context}: {message}"),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Io {
            context: "IO".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type for axocodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
