//! Preview writers: render the finalized class map without touching any
//! file. The terminal form prints one `original -> short` line per pair;
//! the JSON form emits the same pairs as structured data. Both follow rank
//! order, so output is deterministic for a given corpus.

use crate::core::ClassMap;
use clap::ValueEnum;
use colored::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

pub trait OutputWriter {
    fn write_map(&mut self, map: &ClassMap) -> anyhow::Result<()>;
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_map(&mut self, map: &ClassMap) -> anyhow::Result<()> {
        for mapping in map.mappings() {
            writeln!(
                self.writer,
                "{} -> {}",
                mapping.class,
                mapping.replacement.green()
            )?;
        }
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_map(&mut self, map: &ClassMap) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(map.mappings())?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Build the writer selected by the CLI: stdout by default, or a file when
/// `--output` is given (colorization is disabled for files).
pub fn create_writer(
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            match format {
                OutputFormat::Terminal => {
                    colored::control::set_override(false);
                    Ok(Box::new(TerminalWriter::new(file)))
                }
                OutputFormat::Json => Ok(Box::new(JsonWriter::new(file))),
            }
        }
        None => match format {
            OutputFormat::Terminal => Ok(Box::new(TerminalWriter::new(io::stdout()))),
            OutputFormat::Json => Ok(Box::new(JsonWriter::new(io::stdout()))),
        },
    }
}
