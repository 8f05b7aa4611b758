//! Delimited text rendering of the record store.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::FixtureResult;
use crate::store::RecordStore;

/// Write the store as delimited text to `path`.
///
/// By default the file is opened in append mode, so repeated exports against
/// the same target accumulate duplicate lines. That matches the import
/// convention (one record per line) and is intentional; pass `truncate` to
/// start from an empty file instead.
pub fn write_file(store: &RecordStore, path: &Path, truncate: bool) -> FixtureResult<()> {
    let mut options = OpenOptions::new();
    options.create(true).write(true);
    if truncate {
        options.truncate(true);
    } else {
        options.append(true);
    }
    let file = options.open(path)?;

    let mut writer = BufWriter::new(file);
    write_to(store, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Render the store as delimiter-joined lines.
pub fn render(store: &RecordStore) -> Vec<u8> {
    let delimiter = store.delimiter().to_string();
    let mut buffer = Vec::new();
    for row in store.rows() {
        buffer.extend_from_slice(row.join(&delimiter).as_bytes());
        buffer.push(b'\n');
    }
    buffer
}

fn write_to<W: Write>(store: &RecordStore, writer: &mut W) -> FixtureResult<()> {
    let delimiter = store.delimiter().to_string();
    for row in store.rows() {
        writeln!(writer, "{}", row.join(&delimiter))?;
    }
    Ok(())
}
