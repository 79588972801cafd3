use super::*;

#[test]
fn test_dir_entry_new() {
    let entry = DirEntry::new(PathBuf::from("/test/file.txt"), false);
    assert_eq!(entry.name, "file.txt");
    assert!(!entry.is_dir);
}

#[test]
fn test_file_error_display() {
    let err = FileError::NotFound(PathBuf::from("/test"));
    assert!(err.to_string().contains("/test"));

    let err = FileError::AlreadyExists(PathBuf::from("/work/x.txt"));
    assert_eq!(err.to_string(), "/work/x.txt already exists");
}

#[test]
fn test_from_io_maps_kinds() {
    let path = Path::new("/work/a");

    let err = FileError::from_io(io::Error::from(io::ErrorKind::AlreadyExists), path);
    assert!(err.is_already_exists());

    let err = FileError::from_io(io::Error::from(io::ErrorKind::PermissionDenied), path);
    assert!(matches!(err, FileError::PermissionDenied(p) if p == path));

    let err = FileError::from_io(io::Error::other("boom"), path);
    assert!(matches!(err, FileError::Io(_)));
}
