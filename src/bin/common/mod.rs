// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::path::Path;

use anyhow::Context as _;
use axocodec::{Column, FileContents, FormatVersion};
use serde::Serialize;

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Read and decode a file, naming the path on failure.
pub fn open_contents(path: &Path) -> Result<FileContents> {
    axocodec::io::read_file(path).with_context(|| format!("reading {}", path.display()))
}

/// Parse a `--format` value.
pub fn parse_format(s: &str) -> CliResult<FormatVersion> {
    s.parse::<FormatVersion>()
        .map_err(|e| anyhow::anyhow!("{e}: {s}"))
}

/// One column as shown by `inspect info`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub index: usize,
    pub name: String,
    pub kind: String,
    pub representation: String,
    pub points: usize,
    pub first: Option<f64>,
    pub last: Option<f64>,
}

impl ColumnSummary {
    pub fn new(index: usize, name: &str, column: &Column) -> Self {
        Self {
            index,
            name: name.to_string(),
            kind: column.kind().to_string(),
            representation: column.representation().to_string(),
            points: column.len(),
            first: column.get(0),
            last: column.len().checked_sub(1).and_then(|i| column.get(i)),
        }
    }
}

/// Summaries of every column.
pub fn summarize(contents: &FileContents) -> Vec<ColumnSummary> {
    contents
        .iter()
        .enumerate()
        .map(|(i, (name, column))| ColumnSummary::new(i, name, column))
        .collect()
}

/// Format an optional sample for table output.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.6e}"),
        None => "-".to_string(),
    }
}
