//! CSV-to-JSON conversion: parse rows of named host lists and write the
//! structured records out as an indented JSON array.
//!
//! Rows have no header and a variable number of columns, so the reader is
//! configured headerless and flexible. Blank lines yield no record; a
//! malformed row (e.g. an unescaped quote) surfaces the parser's error and
//! aborts the conversion.
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::source::Source;

/// Parse CSV data from a reader into one `Source` per non-empty row.
pub fn read_sources_from<R: Read>(reader: R, group: i64) -> Result<Vec<Source>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut sources = Vec::new();
    for record in rdr.records() {
        let record = record.context("parse CSV row")?;
        sources.push(Source::from_row(record.iter(), group));
    }
    Ok(sources)
}

/// Parse a CSV file into records, tagging each with `group`.
pub fn read_sources<P: AsRef<Path>>(path: P, group: i64) -> Result<Vec<Source>> {
    let file =
        File::open(&path).with_context(|| format!("open {}", path.as_ref().display()))?;
    read_sources_from(file, group)
        .with_context(|| format!("read {}", path.as_ref().display()))
}

/// Write the records as a JSON array with 4-space indentation. The output
/// file is overwritten directly; no trailing newline is appended.
pub fn write_json<P: AsRef<Path>>(sources: &[Source], path: P) -> Result<()> {
    let file =
        File::create(&path).with_context(|| format!("create {}", path.as_ref().display()))?;
    let mut writer = BufWriter::new(file);
    {
        let mut ser = serde_json::Serializer::with_formatter(
            &mut writer,
            PrettyFormatter::with_indent(b"    "),
        );
        sources
            .serialize(&mut ser)
            .with_context(|| format!("serialize {}", path.as_ref().display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("write {}", path.as_ref().display()))?;
    Ok(())
}

/// Convert a CSV file of named host lists into a JSON dataset file.
/// Returns the number of records written.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    group: i64,
) -> Result<usize> {
    let sources = read_sources(&input, group)?;
    debug!(
        "{}: {} records",
        input.as_ref().display(),
        sources.len()
    );
    write_json(&sources, output)?;
    Ok(sources.len())
}
