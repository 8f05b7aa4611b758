//! XLSX rendering of the record store.

use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::FixtureResult;
use crate::store::RecordStore;

/// Write the full store as a single-worksheet XLSX file at `path`.
pub fn write_file(store: &RecordStore, path: &Path) -> FixtureResult<()> {
    let mut workbook = build_workbook(store)?;
    workbook
        .save(path)
        .map_err(|e| std::io::Error::other(e))?;
    Ok(())
}

/// Render the full store as XLSX bytes.
pub fn render(store: &RecordStore) -> FixtureResult<Vec<u8>> {
    let mut workbook = build_workbook(store)?;
    let bytes = workbook
        .save_to_buffer()
        .map_err(|e| std::io::Error::other(e))?;
    Ok(bytes)
}

/// One worksheet, every cell written as a string, no header row.
fn build_workbook(store: &RecordStore) -> FixtureResult<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (r, row) in store.rows().iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            worksheet
                .write_string(r as u32, c as u16, cell)
                .map_err(|e| std::io::Error::other(e))?;
        }
    }

    Ok(workbook)
}
