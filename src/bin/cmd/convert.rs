// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Convert command - re-encode a file in another format version.

use std::path::PathBuf;

use clap::Args;

use crate::common::{open_contents, parse_format, Result};
use axocodec::io::WriterBuilder;
use axocodec::FormatVersion;

/// Convert between AxoGraph format versions.
#[derive(Args, Clone, Debug)]
pub struct ConvertCmd {
    /// Input AxoGraph file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Target format (graph, digitized, x). Defaults to the output
    /// extension when it names one, otherwise the input's format.
    #[arg(short, long, value_parser = parse_format)]
    format: Option<FormatVersion>,

    /// Do not copy the AxoGraph X trailer
    #[arg(long)]
    drop_trailer: bool,
}

impl ConvertCmd {
    pub fn run(self) -> Result<()> {
        let contents = open_contents(&self.input)?;
        let format = self
            .format
            .or_else(|| {
                self.output
                    .extension()
                    .and_then(|e| e.to_str())
                    .and_then(FormatVersion::from_extension)
            })
            .unwrap_or(contents.format_version());

        println!("Converting AxoGraph file:");
        println!("  Input:  {} ({})", self.input.display(), contents.format_version());
        println!("  Output: {} ({format})", self.output.display());
        println!("  Columns: {}", contents.len());

        WriterBuilder::new()
            .path(&self.output)
            .format(format)
            .preserve_trailer(!self.drop_trailer)
            .build()?
            .write(&contents)?;

        println!("Done.");
        Ok(())
    }
}
