// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Reading AxoGraph files from disk.
//!
//! Files are memory-mapped and decoded in one pass; the mapping is released
//! as soon as the decoded [`FileContents`] owns its data.
//!
//! # Example
//!
//! ```rust,no_run
//! use axocodec::io::reader::read_file;
//!
//! let contents = read_file("recording.axgx")?;
//! for (name, column) in contents.iter() {
//!     println!("{name}: {} points", column.len());
//! }
//! # Ok::<(), axocodec::CodecError>(())
//! ```

use std::fs::File;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{CodecError, FileContents, Result};

/// A read-only memory-mapped file image.
///
/// Empty files are not mapped (mapping zero bytes fails on some platforms).
pub struct MappedFile {
    mmap: Option<memmap2::Mmap>,
    path: PathBuf,
}

impl MappedFile {
    /// Open and map a file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            CodecError::io(
                "MappedFile",
                format!("Failed to open file '{}': {e}", path.display()),
            )
        })?;
        let len = file
            .metadata()
            .map_err(|e| {
                CodecError::io(
                    "MappedFile",
                    format!("Failed to stat file '{}': {e}", path.display()),
                )
            })?
            .len();

        let mmap = if len == 0 {
            None
        } else {
            // The mapping is private to this value and never handed out
            // beyond its lifetime.
            let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|e| {
                CodecError::io(
                    "MappedFile",
                    format!("Failed to mmap file '{}': {e}", path.display()),
                )
            })?;
            Some(mmap)
        };

        Ok(Self {
            mmap,
            path: path.to_path_buf(),
        })
    }

    /// Path the file was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mapped bytes.
    pub fn data(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}

impl Deref for MappedFile {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.data()
    }
}

/// Read and decode a file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<FileContents> {
    let mapped = MappedFile::open(path)?;
    debug!(path = %mapped.path().display(), size = mapped.len(), "reading file");
    FileContents::decode(&mapped)
}
