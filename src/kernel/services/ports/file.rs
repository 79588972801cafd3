//! File-system port: the directory listing and whole-file read/write
//! contract the kernel's effects are executed against.

use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    Io(io::Error),
    NotFound(PathBuf),
    PermissionDenied(PathBuf),
    AlreadyExists(PathBuf),
    NotADirectory(PathBuf),
    NotAFile(PathBuf),
}

impl FileError {
    /// Attach `path` to the io error kinds the shell reports by name.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::AlreadyExists => FileError::AlreadyExists(path.to_path_buf()),
            _ => FileError::Io(err),
        }
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, FileError::AlreadyExists(_))
    }
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::Io(e) => write!(f, "IO error: {}", e),
            FileError::NotFound(p) => write!(f, "Not found: {}", p.display()),
            FileError::PermissionDenied(p) => write!(f, "Permission denied: {}", p.display()),
            FileError::AlreadyExists(p) => write!(f, "{} already exists", p.display()),
            FileError::NotADirectory(p) => write!(f, "Not a directory: {}", p.display()),
            FileError::NotAFile(p) => write!(f, "Not a file: {}", p.display()),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FileError {
    fn from(e: io::Error) -> Self {
        FileError::Io(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Folder => "folder",
        }
    }
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Self { path, name, is_dir }
    }
}

pub trait FileProvider {
    /// Lists `path`. Order is whatever the provider yields; callers that need
    /// directories first partition the result themselves.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Whole file as text. Bytes that are not valid UTF-8 are replaced, so
    /// any readable file opens.
    fn read_file(&self, path: &Path) -> Result<String>;

    fn read_file_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    /// Creates an empty file, failing with `AlreadyExists` if anything is
    /// already at `path`.
    fn create_file(&self, path: &Path) -> Result<()>;

    /// Creates a directory (and missing parents), failing with
    /// `AlreadyExists` if anything is already at `path`.
    fn create_dir(&self, path: &Path) -> Result<()>;

    fn is_file(&self, path: &Path) -> bool;

    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/file.rs"]
mod tests;
