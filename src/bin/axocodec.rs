// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # axocodec CLI
//!
//! Command-line tool for AxoGraph data files.
//!
//! ## Usage
//!
//! ```sh
//! # Show file information
//! axocodec inspect info recording.axgx
//!
//! # Print the first values of column 1
//! axocodec inspect column recording.axgx 1 --limit 20
//!
//! # Convert to an AxoGraph 4 graph file
//! axocodec convert recording.axgx recording.axgr --format graph
//!
//! # Export to CSV
//! axocodec export csv recording.axgx recording.csv
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{ConvertCmd, ExportCmd, InspectCmd};
use common::Result;

/// axocodec - AxoGraph file toolkit
///
/// Read, convert and export AxoGraph 4 and AxoGraph X files.
/// The input format is always detected from the file signature.
#[derive(Parser, Clone)]
#[command(name = "axocodec")]
#[command(about = "AxoGraph file toolkit", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Inspect file contents (info, column values)
    #[command(subcommand)]
    Inspect(InspectCmd),

    /// Convert to another format version
    Convert(ConvertCmd),

    /// Export column data (csv, json)
    #[command(subcommand)]
    Export(ExportCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(cmd) => cmd.run(),
        Commands::Convert(cmd) => cmd.run(),
        Commands::Export(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
