// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inspect command - show file information and column values.

use std::path::PathBuf;

use clap::Subcommand;
use serde::Serialize;

use crate::common::{format_value, open_contents, summarize, ColumnSummary, Result};
use axocodec::io::detect_format;

/// Inspect file contents.
#[derive(Subcommand, Clone, Debug)]
pub enum InspectCmd {
    /// Show format, revision and a per-column summary
    Info {
        /// Input AxoGraph file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the values of one column
    Column {
        /// Input AxoGraph file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Zero-based column index
        #[arg(value_name = "INDEX")]
        index: usize,

        /// Print at most this many values
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

impl InspectCmd {
    pub fn run(self) -> Result<()> {
        match self {
            InspectCmd::Info { input, json } => cmd_info(input, json),
            InspectCmd::Column {
                input,
                index,
                limit,
            } => cmd_column(input, index, limit),
        }
    }
}

#[derive(Serialize)]
struct FileSummary {
    path: String,
    format: String,
    revision: i32,
    trailer_bytes: usize,
    columns: Vec<ColumnSummary>,
}

/// Cmd: Show file info
fn cmd_info(input: PathBuf, json: bool) -> Result<()> {
    let detected = detect_format(&input)?;
    let contents = open_contents(&input)?;

    let summary = FileSummary {
        path: input.display().to_string(),
        format: contents.format_version().to_string(),
        revision: detected.revision,
        trailer_bytes: contents.trailer().map_or(0, <[u8]>::len),
        columns: summarize(&contents),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("=== {} ===", summary.path);
    println!("Format: {} (revision {})", summary.format, summary.revision);
    println!("Columns: {}", summary.columns.len());
    if summary.trailer_bytes > 0 {
        println!("Trailer: {} bytes", summary.trailer_bytes);
    }

    println!();
    for column in &summary.columns {
        println!(
            "  [{}] {:?} | {} | {} | {} points | {} .. {}",
            column.index,
            column.name,
            column.kind,
            column.representation,
            column.points,
            format_value(column.first),
            format_value(column.last)
        );
    }

    Ok(())
}

/// Cmd: Print column values
fn cmd_column(input: PathBuf, index: usize, limit: Option<usize>) -> Result<()> {
    let contents = open_contents(&input)?;
    let (name, column) = contents
        .get(index)
        .ok_or_else(|| axocodec::CodecError::out_of_range(index, contents.len()))?;

    println!("=== [{index}] {name:?} ({}) ===", column.representation());
    let shown = limit.unwrap_or(column.len()).min(column.len());
    for (i, value) in column.iter().take(shown).enumerate() {
        println!("{i}\t{value}");
    }
    if shown < column.len() {
        println!("... {} more", column.len() - shown);
    }

    Ok(())
}
