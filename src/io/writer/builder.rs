// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Builder pattern for creating file writers.

use std::path::PathBuf;

use crate::{CodecError, FormatVersion, Result};

/// Configuration for creating a writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Path to the output file
    pub path: PathBuf,
    /// Target format; `None` keeps the format of the contents being written
    pub format: Option<FormatVersion>,
    /// Write the AxoGraph X trailer when the contents carry one
    pub preserve_trailer: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            format: None,
            preserve_trailer: true,
        }
    }
}

/// Builder for creating file writers.
#[derive(Debug, Clone, Default)]
pub struct WriterBuilder {
    config: WriterConfig,
}

impl WriterBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path to the output file.
    pub fn path<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        self.config.path = path.as_ref().to_path_buf();
        self
    }

    /// Set the target format.
    pub fn format(mut self, format: FormatVersion) -> Self {
        self.config.format = Some(format);
        self
    }

    /// Keep or drop the AxoGraph X trailer.
    pub fn preserve_trailer(mut self, preserve: bool) -> Self {
        self.config.preserve_trailer = preserve;
        self
    }

    /// Build the writer.
    pub fn build(self) -> Result<super::AxoWriter> {
        if self.config.path.as_os_str().is_empty() {
            return Err(CodecError::io("WriterBuilder", "Path is not set"));
        }
        Ok(super::AxoWriter {
            config: self.config,
        })
    }
}
