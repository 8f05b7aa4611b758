//! Append-only store of delimited rows.
//!
//! Rows accumulate from three sources: literal text lines, delimited text
//! files, and the synthetic generator in [`generate`]. Nothing is ever
//! deleted or rewritten; exports always see the full insertion order.

pub mod generate;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::{DEFAULT_DELIMITER, FixtureError, FixtureResult};

pub use generate::GenerateSpec;

/// One logical record: an ordered sequence of text cells.
///
/// No schema is enforced; rows of different lengths may coexist.
pub type Row = Vec<String>;

/// The accumulated, append-only collection of rows for one session.
#[derive(Debug, Clone)]
pub struct RecordStore {
    rows: Vec<Row>,
    delimiter: char,
}

impl Default for RecordStore {
    fn default() -> Self {
        RecordStore::new()
    }
}

impl RecordStore {
    /// Create an empty store using the default `|` delimiter.
    pub fn new() -> Self {
        RecordStore::with_delimiter(DEFAULT_DELIMITER)
    }

    /// Create an empty store with a custom cell delimiter.
    pub fn with_delimiter(delimiter: char) -> Self {
        RecordStore {
            rows: Vec::new(),
            delimiter,
        }
    }

    /// The cell delimiter used by text import and export.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Split `line` on the store delimiter and append the result as one row.
    ///
    /// # Errors
    /// Returns [`FixtureError::Input`] if the line embeds a line break, which
    /// the line-oriented text format cannot represent.
    pub fn append_from_text(&mut self, line: &str) -> FixtureResult<()> {
        if line.contains(['\n', '\r']) {
            return Err(FixtureError::Input(
                "row text must not contain line breaks".to_string(),
            ));
        }
        let row: Row = line.split(self.delimiter).map(str::to_string).collect();
        let cells = row.len();
        self.rows.push(row);
        info!(cells, "appended row from text");
        Ok(())
    }

    /// Read `path` and append one row per line, cells split on the store
    /// delimiter. All lines are parsed before any row is appended, so a
    /// failed read leaves the store unchanged.
    ///
    /// Returns the number of rows appended.
    ///
    /// # Errors
    /// Returns [`FixtureError::NotFound`] if the path does not exist and
    /// [`FixtureError::Io`] on any other read failure.
    pub fn append_from_file(&mut self, path: impl AsRef<Path>) -> FixtureResult<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FixtureError::NotFound(path.to_path_buf())
            } else {
                FixtureError::Io(e)
            }
        })?;

        let reader = BufReader::new(file);
        let mut parsed: Vec<Row> = Vec::new();
        for line in reader.lines() {
            let line = line?;
            parsed.push(line.split(self.delimiter).map(str::to_string).collect());
        }

        let appended = parsed.len();
        self.rows.extend(parsed);
        info!(path = %path.display(), rows = appended, "appended rows from file");
        Ok(appended)
    }

    /// Append synthetic rows described by `spec`. Returns the number of rows
    /// appended (relevant when the row count is left to the random default).
    pub fn append_generated(&mut self, spec: &GenerateSpec) -> usize {
        let appended = generate::fill(&mut self.rows, spec);
        info!(
            rows = appended,
            columns = spec.columns,
            cell_length = spec.cell_length,
            "appended generated rows"
        );
        appended
    }
}
