//! Export of the record store to file formats.
//!
//! Formats are dispatched by identifier; an unknown identifier is an explicit
//! [`FixtureError::Format`], never a panic or a generic lookup failure. The
//! failure is permanent: retrying the same identifier cannot succeed.

pub mod csv;
pub mod text;
pub mod xlsx;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::info;

use crate::store::RecordStore;
use crate::{FixtureError, FixtureResult};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Txt,
}

impl ExportFormat {
    /// File extension appended by [`Exporter::export_to_file`].
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Txt => "txt",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = FixtureError;

    fn from_str(s: &str) -> FixtureResult<Self> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" => Ok(ExportFormat::Xlsx),
            "txt" => Ok(ExportFormat::Txt),
            other => Err(FixtureError::Format(other.to_string())),
        }
    }
}

/// Renders the rows of a [`RecordStore`] to a file or an in-memory buffer.
///
/// The exporter borrows the store; it never mutates it. Text export appends
/// to pre-existing file content by default (repeated runs accumulate
/// duplicate lines), see [`Exporter::truncate_text`].
#[derive(Debug, Clone, Copy)]
pub struct Exporter<'a> {
    store: &'a RecordStore,
    truncate_text: bool,
}

impl<'a> Exporter<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Exporter {
            store,
            truncate_text: false,
        }
    }

    /// Truncate the target before a `txt` export instead of appending.
    /// Append remains the default; other formats are unaffected.
    pub fn truncate_text(mut self, truncate: bool) -> Self {
        self.truncate_text = truncate;
        self
    }

    /// Write the store to `<target>.<ext>` and return the written path.
    ///
    /// # Errors
    /// [`FixtureError::Io`] on write failure.
    pub fn export_to_file(&self, target: &Path, format: ExportFormat) -> FixtureResult<PathBuf> {
        let path = with_extension(target, format.extension());
        match format {
            ExportFormat::Csv => csv::write_file(self.store, &path)?,
            ExportFormat::Xlsx => xlsx::write_file(self.store, &path)?,
            ExportFormat::Txt => text::write_file(self.store, &path, self.truncate_text)?,
        }
        info!(path = %path.display(), rows = self.store.len(), "exported store to file");
        Ok(path)
    }

    /// Render the store in-memory, for archiving.
    pub fn export_to_buffer(&self, format: ExportFormat) -> FixtureResult<Vec<u8>> {
        let buffer = match format {
            ExportFormat::Csv => csv::render(self.store)?,
            ExportFormat::Xlsx => xlsx::render(self.store)?,
            ExportFormat::Txt => text::render(self.store),
        };
        info!(
            format = format.extension(),
            bytes = buffer.len(),
            "rendered export buffer"
        );
        Ok(buffer)
    }
}

fn with_extension(target: &Path, ext: &str) -> PathBuf {
    let mut name = target.as_os_str().to_os_string();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse_known() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
    }

    #[test]
    fn test_format_parse_unknown() {
        let err = "doc".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, FixtureError::Format(ref s) if s == "doc"));
    }

    #[test]
    fn test_with_extension_keeps_full_stem() {
        // Dots in the stem must not be treated as an extension boundary.
        let path = with_extension(Path::new("out/report.v2"), "csv");
        assert_eq!(path, PathBuf::from("out/report.v2.csv"));
    }
}
