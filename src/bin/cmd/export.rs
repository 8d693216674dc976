// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Export command - dump names and values to text formats.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Subcommand;
use serde::Serialize;

use crate::common::{open_contents, Result};
use axocodec::FileContents;

/// Export column data.
#[derive(Subcommand, Clone, Debug)]
pub enum ExportCmd {
    /// Write one CSV column per AxoGraph column
    Csv {
        /// Input AxoGraph file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output CSV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Write names and values as JSON
    Json {
        /// Input AxoGraph file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output JSON file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}

impl ExportCmd {
    pub fn run(self) -> Result<()> {
        match self {
            ExportCmd::Csv { input, output } => {
                let contents = open_contents(&input)?;
                write_output(&output, |out| write_csv(&contents, out))?;
                println!("Exported {} columns to {}", contents.len(), output.display());
            }
            ExportCmd::Json { input, output } => {
                let contents = open_contents(&input)?;
                write_output(&output, |out| write_json(&contents, out))?;
                println!("Exported {} columns to {}", contents.len(), output.display());
            }
        }
        Ok(())
    }
}

fn write_output(path: &Path, body: impl FnOnce(&mut BufWriter<File>) -> Result<()>) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    body(&mut out)?;
    out.flush()?;
    Ok(())
}

/// Quote a CSV field when it contains a separator, quote or line break.
fn csv_field(s: &str) -> Cow<'_, str> {
    if s.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(s)
    }
}

/// Columns may differ in length; shorter columns leave empty cells.
fn write_csv<W: Write>(contents: &FileContents, out: &mut W) -> Result<()> {
    let header: Vec<Cow<'_, str>> = contents.names().iter().map(|n| csv_field(n)).collect();
    writeln!(out, "{}", header.join(","))?;

    let rows = contents.columns().iter().map(|c| c.len()).max().unwrap_or(0);
    let mut line = String::new();
    for row in 0..rows {
        line.clear();
        for (i, column) in contents.columns().iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            if let Some(v) = column.get(row) {
                line.push_str(&v.to_string());
            }
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct ExportedColumn<'a> {
    name: &'a str,
    representation: &'static str,
    values: Vec<f64>,
}

#[derive(Serialize)]
struct ExportedFile<'a> {
    format: String,
    columns: Vec<ExportedColumn<'a>>,
}

fn write_json<W: Write>(contents: &FileContents, out: &mut W) -> Result<()> {
    let exported = ExportedFile {
        format: contents.format_version().to_string(),
        columns: contents
            .iter()
            .map(|(name, column)| ExportedColumn {
                name,
                representation: column.representation(),
                values: column.to_vec(),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &exported)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axocodec::{Column, LinearSequence};

    fn contents() -> FileContents {
        FileContents::new(
            vec!["Time (s)".into(), "a,b".into()],
            vec![
                LinearSequence::new(3, 0.0, 0.5).into(),
                Column::from(vec![1i16, 2]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        write_csv(&contents(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Time (s),\"a,b\"\n0,1\n0.5,2\n1,\n");
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&contents(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["format"], "axograph-x");
        assert_eq!(value["columns"][0]["values"][2], 1.0);
        assert_eq!(value["columns"][1]["name"], "a,b");
    }
}
