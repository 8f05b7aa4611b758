//! Bundling of exports into size-bounded archive parts.
//!
//! One [`Archiver::build_archive`] call renders the store to three in-memory
//! buffers (xlsx, csv, txt, in that order) and packs them into one or more
//! part files named `<name><part>.<ext>`. Part indices start at 1 and only
//! move forward; parts already written when a later member fails stay on
//! disk.

pub mod tar;
pub mod zip;

use std::path::PathBuf;
use std::str::FromStr;

use tracing::info;

use crate::export::{ExportFormat, Exporter};
use crate::store::RecordStore;
use crate::{FixtureError, FixtureResult};

/// Fixed member names and packing order for every archive.
const MEMBERS: [(&str, ExportFormat); 3] = [
    ("file.xlsx", ExportFormat::Xlsx),
    ("file.csv", ExportFormat::Csv),
    ("file.txt", ExportFormat::Txt),
];

/// Supported archive containers. Both behave identically with respect to
/// appending, duplicate detection and size accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar,
}

impl ArchiveFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ArchiveFormat::Zip => "zip",
            ArchiveFormat::Tar => "tar",
        }
    }
}

impl FromStr for ArchiveFormat {
    type Err = FixtureError;

    fn from_str(s: &str) -> FixtureResult<Self> {
        match s {
            "zip" => Ok(ArchiveFormat::Zip),
            "tar" => Ok(ArchiveFormat::Tar),
            other => Err(FixtureError::Format(other.to_string())),
        }
    }
}

/// Packs exports of a [`RecordStore`] into archive parts.
#[derive(Debug, Clone, Copy)]
pub struct Archiver<'a> {
    store: &'a RecordStore,
}

impl<'a> Archiver<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Archiver { store }
    }

    /// Export the store and pack the results into `<name><part>.<ext>` files.
    ///
    /// With `max_size` set, a member whose buffer plus the current part's
    /// on-disk size would exceed the budget opens the next part instead. A
    /// member that can never fit on its own fails up front.
    ///
    /// Returns the paths of all parts written, in order.
    ///
    /// # Errors
    /// - [`FixtureError::Capacity`] if a single buffer exceeds `max_size`;
    ///   no part file is created or touched for that buffer.
    /// - [`FixtureError::DuplicateMember`] if a target part already holds a
    ///   member of the same name (e.g. a repeated call with the same `name`).
    /// - [`FixtureError::Io`] on any write failure.
    pub fn build_archive(
        &self,
        name: &str,
        format: ArchiveFormat,
        max_size: Option<u64>,
    ) -> FixtureResult<Vec<PathBuf>> {
        info!(name, format = format.extension(), max_size, "building archive");

        let exporter = Exporter::new(self.store);
        let mut buffers = Vec::with_capacity(MEMBERS.len());
        for (member, export_format) in MEMBERS {
            buffers.push((member, exporter.export_to_buffer(export_format)?));
        }

        pack(&buffers, name, format, max_size)
    }
}

fn pack(
    buffers: &[(&str, Vec<u8>)],
    name: &str,
    format: ArchiveFormat,
    max_size: Option<u64>,
) -> FixtureResult<Vec<PathBuf>> {
    let mut part = 1u32;
    // On-disk size of the current part, recomputed after each write so that
    // container overhead participates in the threshold checks.
    let mut written: u64 = 0;
    let mut parts: Vec<PathBuf> = Vec::new();

    for (member, bytes) in buffers {
        let size = bytes.len() as u64;
        if let Some(max) = max_size {
            if size > max {
                return Err(FixtureError::Capacity {
                    member: member.to_string(),
                    size,
                    max_size: max,
                });
            }
            if written + size > max {
                part += 1;
                written = 0;
            }
        }

        let path = PathBuf::from(format!("{name}{part}.{}", format.extension()));
        info!(member, part, bytes = size, path = %path.display(), "writing archive member");
        match format {
            ArchiveFormat::Zip => zip::append_member(&path, member, bytes)?,
            ArchiveFormat::Tar => tar::append_member(&path, member, bytes)?,
        }
        written = std::fs::metadata(&path)?.len();

        if parts.last() != Some(&path) {
            parts.push(path);
        }
    }

    Ok(parts)
}
