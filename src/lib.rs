pub mod archive;
pub mod export;
pub mod store;

use std::path::PathBuf;

use thiserror::Error;

/// Default cell separator for text import/export.
///
/// Import and export round-trip on this single character; a cell that contains
/// it will silently split on re-import. The library does not validate cells.
pub const DEFAULT_DELIMITER: char = '|';

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("invalid input: {0}")]
    Input(String),
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("unsupported format: {0}")]
    Format(String),
    #[error("{member} is {size} bytes, exceeding the {max_size} byte archive budget")]
    Capacity {
        member: String,
        size: u64,
        max_size: u64,
    },
    #[error("{member} already exists in {}", .archive.display())]
    DuplicateMember { member: String, archive: PathBuf },
}

pub type FixtureResult<T> = Result<T, FixtureError>;

// Re-export key types
pub use archive::{ArchiveFormat, Archiver};
pub use export::{ExportFormat, Exporter};
pub use store::{GenerateSpec, RecordStore, Row};
