//! Zip part backend.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::{FixtureError, FixtureResult};

/// Append `bytes` as `member` to the zip part at `path`, creating the part
/// if it does not exist yet.
///
/// Members are stored uncompressed so that part sizes track buffer sizes
/// predictably. A member name already present in the part is a
/// [`FixtureError::DuplicateMember`].
pub(super) fn append_member(path: &Path, member: &str, bytes: &[u8]) -> FixtureResult<()> {
    let exists = path.exists();
    if exists {
        let file = File::open(path)?;
        let archive = ZipArchive::new(file).map_err(zip_io)?;
        if archive.file_names().any(|n| n == member) {
            return Err(FixtureError::DuplicateMember {
                member: member.to_string(),
                archive: path.to_path_buf(),
            });
        }
    }

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(path)?;
    let mut writer = if exists {
        ZipWriter::new_append(file).map_err(zip_io)?
    } else {
        ZipWriter::new(file)
    };

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    writer.start_file(member, options).map_err(zip_io)?;
    writer.write_all(bytes)?;
    writer.finish().map_err(zip_io)?;
    Ok(())
}

fn zip_io(e: zip::result::ZipError) -> FixtureError {
    FixtureError::Io(std::io::Error::other(e))
}
