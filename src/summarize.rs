use crate::header::*;
use crate::pretty::{self, Format};
use anyhow::{bail, Context, Result};
use column_stats::{Accumulator, Summary};
use log::*;
use std::borrow::Cow;
use std::io::{BufRead, Write};

/// One accumulator per declared column, in header order.
pub struct State {
    columns: Vec<Column>,
    stats: Vec<Accumulator>,
}

impl State {
    pub fn new(columns: Vec<Column>) -> State {
        let stats = columns.iter().map(|c| Accumulator::new(c.kind)).collect();
        State { columns, stats }
    }

    /// Feeds one data line.  The line must have exactly one field per
    /// column.
    pub fn update(&mut self, line: u64, fields: &[&str]) -> Result<()> {
        if fields.len() != self.stats.len() {
            bail!(
                "Line {} has {} fields, but the header declares {} columns",
                line,
                fields.len(),
                self.stats.len()
            );
        }
        for (cell, stats) in fields.iter().zip(&mut self.stats) {
            stats.update(cell, line)?;
        }
        Ok(())
    }

    pub fn summaries(&self) -> impl Iterator<Item = (&Column, Summary)> + '_ {
        self.columns
            .iter()
            .zip(self.stats.iter().map(Accumulator::summarize))
    }
}

/// Strips the line terminator and replaces invalid UTF-8.
fn decode(line: &[u8]) -> Cow<str> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line)
}

/// Splits a line on commas.  There's no quoting: a comma always separates
/// fields, and an empty line is a single empty field.
fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

/// Reads a header line and data lines from `input`, and writes a summary of
/// every column to `output`.
///
/// Nothing is written until the whole input has been read, so an error means
/// no output at all.
pub fn summarize(input: impl BufRead, mut output: impl Write, format: Format) -> Result<()> {
    let mut lines = input.split(b'\n');

    let header = match lines.next() {
        Some(header) => header.context("Failed to read header line")?,
        None => bail!("Failed to read header line: the input is empty"),
    };
    let columns = parse_header(split_fields(&decode(&header)));
    info!("Found {} columns", columns.len());
    for column in &columns {
        debug!("Column \"{}\" is {}", column.name, column.kind);
    }
    let mut state = State::new(columns);

    let mut n = 0;
    for (line, bytes) in (2u64..).zip(lines) {
        let bytes = match bytes {
            Ok(bytes) => bytes,
            // A broken stream ends the input just like EOF does
            Err(e) => {
                warn!("Stopped reading input at line {}: {}", line, e);
                break;
            }
        };
        let text = decode(&bytes);
        if let Cow::Owned(_) = text {
            warn!("Line {} is not valid UTF-8", line);
        }
        state.update(line, &split_fields(&text))?;
        n += 1;
    }
    debug!("Read {} records", n);

    for (column, summary) in state.summaries() {
        pretty::write_column(&mut output, &column.name, &summary, format)?;
    }
    output.flush()?;
    Ok(())
}
