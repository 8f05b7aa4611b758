//! Tar part backend.
//!
//! Parity with the zip backend: append to an existing part, detect duplicate
//! member names, and leave the part in a state whose on-disk size reflects
//! container overhead. Appending to an existing tar rewinds over the two
//! trailing zero blocks before attaching the builder, so the new member and
//! a fresh trailer land at the true end of the data.

use std::fs::OpenOptions;
use std::io::{Seek, SeekFrom};
use std::path::Path;

use tar::{Archive, Builder, Header};

use crate::{FixtureError, FixtureResult};

/// Trailing end-of-archive marker: two 512-byte zero blocks.
const TRAILER_LEN: u64 = 1024;

/// Append `bytes` as `member` to the tar part at `path`, creating the part
/// if it does not exist yet.
pub(super) fn append_member(path: &Path, member: &str, bytes: &[u8]) -> FixtureResult<()> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(path)?;
    let len = file.metadata()?.len();

    if len > 0 {
        let mut archive = Archive::new(&mut file);
        for entry in archive.entries()? {
            let entry = entry?;
            if entry.path()? == Path::new(member) {
                return Err(FixtureError::DuplicateMember {
                    member: member.to_string(),
                    archive: path.to_path_buf(),
                });
            }
        }
    }

    let data_end = len.saturating_sub(TRAILER_LEN);
    file.seek(SeekFrom::Start(data_end))?;
    file.set_len(data_end)?;

    let mut builder = Builder::new(&mut file);
    let mut header = Header::new_gnu();
    header.set_size(bytes.len() as u64);
    header.set_mode(0o644);
    builder.append_data(&mut header, member, bytes)?;
    builder.finish()?;
    Ok(())
}
