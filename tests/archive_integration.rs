//! Integration tests for archive building.

use fixturekit::{ArchiveFormat, Archiver, FixtureError, RecordStore};

fn small_store() -> RecordStore {
    let mut store = RecordStore::new();
    store.append_from_text("Hold.|Night.|Season.").unwrap();
    store.append_from_text("Firm.|Last deep.").unwrap();
    store
}

fn arc_name(dir: &std::path::Path, stem: &str) -> String {
    dir.join(stem).to_str().unwrap().to_string()
}

#[test]
fn test_build_zip_archive_single_part() {
    let dir = tempfile::tempdir().unwrap();
    let store = small_store();

    let parts = Archiver::new(&store)
        .build_archive(&arc_name(dir.path(), "arc"), ArchiveFormat::Zip, None)
        .unwrap();

    assert_eq!(parts.len(), 1);
    assert!(parts[0].to_str().unwrap().ends_with("arc1.zip"));

    let file = std::fs::File::open(&parts[0]).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    let names: Vec<&str> = archive.file_names().collect();
    // Fixed member order: xlsx, then csv, then txt.
    assert_eq!(names, vec!["file.xlsx", "file.csv", "file.txt"]);
}

#[test]
fn test_build_archive_twice_fails_on_duplicate_member() {
    let dir = tempfile::tempdir().unwrap();
    let store = small_store();
    let name = arc_name(dir.path(), "arc");
    let archiver = Archiver::new(&store);

    archiver
        .build_archive(&name, ArchiveFormat::Zip, None)
        .unwrap();
    let err = archiver
        .build_archive(&name, ArchiveFormat::Zip, None)
        .unwrap_err();

    // The second call collides on its first write.
    assert!(matches!(
        err,
        FixtureError::DuplicateMember { ref member, .. } if member == "file.xlsx"
    ));
}

#[test]
fn test_build_archive_tiny_budget_fails_with_capacity() {
    let dir = tempfile::tempdir().unwrap();
    let store = small_store();
    let name = arc_name(dir.path(), "arc");

    let err = Archiver::new(&store)
        .build_archive(&name, ArchiveFormat::Zip, Some(10))
        .unwrap_err();

    assert!(matches!(err, FixtureError::Capacity { max_size: 10, .. }));
    // The oversized first buffer must not leave a part file behind.
    assert!(!std::path::PathBuf::from(format!("{name}1.zip")).exists());
}

#[test]
fn test_build_archive_unknown_format_identifier() {
    let err = "7z".parse::<ArchiveFormat>().unwrap_err();
    assert!(matches!(err, FixtureError::Format(ref s) if s == "7z"));
}

#[test]
fn test_build_tar_archive_parity() {
    let dir = tempfile::tempdir().unwrap();
    let store = small_store();

    let parts = Archiver::new(&store)
        .build_archive(&arc_name(dir.path(), "arc"), ArchiveFormat::Tar, None)
        .unwrap();

    assert_eq!(parts.len(), 1);
    assert!(parts[0].to_str().unwrap().ends_with("arc1.tar"));

    let file = std::fs::File::open(&parts[0]).unwrap();
    let mut archive = tar::Archive::new(file);
    let names: Vec<String> = archive
        .entries()
        .unwrap()
        .map(|e| e.unwrap().path().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["file.xlsx", "file.csv", "file.txt"]);
}

#[test]
fn test_tar_duplicate_member_parity() {
    let dir = tempfile::tempdir().unwrap();
    let store = small_store();
    let name = arc_name(dir.path(), "arc");
    let archiver = Archiver::new(&store);

    archiver
        .build_archive(&name, ArchiveFormat::Tar, None)
        .unwrap();
    let err = archiver
        .build_archive(&name, ArchiveFormat::Tar, None)
        .unwrap_err();

    assert!(matches!(err, FixtureError::DuplicateMember { .. }));
}

#[test]
fn test_archived_txt_member_matches_export() {
    let dir = tempfile::tempdir().unwrap();
    let store = small_store();

    let parts = Archiver::new(&store)
        .build_archive(&arc_name(dir.path(), "arc"), ArchiveFormat::Zip, None)
        .unwrap();

    let file = std::fs::File::open(&parts[0]).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut contents = String::new();
    std::io::Read::read_to_string(&mut archive.by_name("file.txt").unwrap(), &mut contents)
        .unwrap();

    assert_eq!(contents, "Hold.|Night.|Season.\nFirm.|Last deep.\n");
}
