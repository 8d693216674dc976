// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Writing AxoGraph files to disk.
//!
//! # Example
//!
//! ```rust,no_run
//! use axocodec::io::writer::WriterBuilder;
//! use axocodec::FormatVersion;
//!
//! let contents = axocodec::io::reader::read_file("input.axgx")?;
//! WriterBuilder::new()
//!     .path("output.axgr")
//!     .format(FormatVersion::OldGraph)
//!     .build()?
//!     .write(&contents)?;
//! # Ok::<(), axocodec::CodecError>(())
//! ```

pub mod builder;

pub use builder::{WriterBuilder, WriterConfig};

use std::path::Path;

use tracing::debug;

use crate::{CodecError, FileContents, FormatVersion, Result};

/// Writer for one output file.
#[derive(Debug, Clone)]
pub struct AxoWriter {
    config: WriterConfig,
}

impl AxoWriter {
    /// Create a writer that keeps the format of whatever it writes.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        WriterBuilder::new().path(path).build()
    }

    /// Writer configuration.
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Format `contents` would be written in.
    pub fn target_format(&self, contents: &FileContents) -> FormatVersion {
        self.config.format.unwrap_or(contents.format_version())
    }

    /// Encode `contents` and write the file, replacing any existing one.
    pub fn write(&self, contents: &FileContents) -> Result<()> {
        let format = self.target_format(contents);
        let bytes = if self.config.preserve_trailer || contents.trailer().is_none() {
            contents.encode_as(format)?
        } else {
            contents.clone().with_trailer(None).encode_as(format)?
        };

        std::fs::write(&self.config.path, &bytes).map_err(|e| {
            CodecError::io(
                "AxoWriter",
                format!(
                    "Failed to write file '{}': {e}",
                    self.config.path.display()
                ),
            )
        })?;
        debug!(
            path = %self.config.path.display(),
            %format,
            size = bytes.len(),
            "wrote file"
        );
        Ok(())
    }
}

/// Write `contents` to `path` in its own format.
pub fn write_file<P: AsRef<Path>>(path: P, contents: &FileContents) -> Result<()> {
    AxoWriter::create(path)?.write(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::reader::read_file;
    use crate::{Column, LinearSequence};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "axocodec_test_writer_{}_{}",
            std::process::id(),
            name
        ))
    }

    fn contents() -> FileContents {
        FileContents::new(
            vec!["Time".into(), "Signal".into()],
            vec![
                LinearSequence::new(5, 0.0, 0.5).into(),
                Column::from(vec![0.5f32, 1.0, 1.5, 2.0, 2.5]),
            ],
        )
        .unwrap()
        .with_trailer(Some(vec![9, 9, 9]))
    }

    #[test]
    fn test_write_keeps_format_and_trailer() {
        let path = temp_path("keep.axgx");
        write_file(&path, &contents()).unwrap();

        let decoded = read_file(&path).unwrap();
        assert_eq!(decoded, contents());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_drop_trailer() {
        let path = temp_path("drop.axgx");
        WriterBuilder::new()
            .path(&path)
            .preserve_trailer(false)
            .build()
            .unwrap()
            .write(&contents())
            .unwrap();

        assert_eq!(read_file(&path).unwrap().trailer(), None);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_legacy_target() {
        let path = temp_path("legacy.axgr");
        let writer = WriterBuilder::new()
            .path(&path)
            .format(FormatVersion::OldDigitized)
            .build()
            .unwrap();
        assert_eq!(writer.target_format(&contents()), FormatVersion::OldDigitized);
        writer.write(&contents()).unwrap();

        let decoded = read_file(&path).unwrap();
        assert_eq!(decoded.format_version(), FormatVersion::OldDigitized);
        assert_eq!(decoded.names(), contents().names());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_to_missing_directory() {
        let err = write_file("/nonexistent/axocodec/out.axgx", &contents()).unwrap_err();
        assert!(matches!(err, CodecError::Io { .. }));
    }
}
