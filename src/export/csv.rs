//! CSV rendering of the record store.

use std::io::Write;
use std::path::Path;

use crate::FixtureResult;
use crate::store::RecordStore;

/// Write the full store as CSV to `path`, truncating any previous content.
pub fn write_file(store: &RecordStore, path: &Path) -> FixtureResult<()> {
    let file = std::fs::File::create(path)?;
    write_to(store, file)
}

/// Render the full store as CSV bytes.
pub fn render(store: &RecordStore) -> FixtureResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_to(store, &mut buffer)?;
    Ok(buffer)
}

/// Write the store as CSV to any writer.
///
/// No header row is emitted; the first data row is a normal row, not column
/// names. Flexible mode allows rows of differing widths.
pub fn write_to<W: Write>(store: &RecordStore, writer: W) -> FixtureResult<()> {
    let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    for row in store.rows() {
        csv_writer
            .write_record(row)
            .map_err(|e| std::io::Error::other(e))?;
    }

    csv_writer.flush()?;
    Ok(())
}
