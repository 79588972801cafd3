//! Local file-system provider over `std::fs`.

use crate::kernel::services::ports::file::{DirEntry, FileError, FileProvider, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct LocalFileProvider;

impl LocalFileProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileProvider for LocalFileProvider {
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(path).map_err(|e| FileError::from_io(e, path))? {
            let entry = entry?;
            // Symlinks are not followed, so a link back to an ancestor stays a leaf.
            let file_type = entry.file_type()?;

            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                path: entry.path(),
                is_dir: file_type.is_dir(),
            });
        }

        // Raw read_dir order differs between runs on some file systems.
        entries.sort_by_key(|e| e.name.to_lowercase());

        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        let bytes = self.read_file_bytes(path)?;
        // Invalid UTF-8 sequences become U+FFFD instead of failing the open.
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
    }

    fn read_file_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        if !path.exists() {
            return Err(FileError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }
        fs::read(path).map_err(|e| FileError::from_io(e, path))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if path.is_dir() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }
        fs::write(path, content).map_err(|e| FileError::from_io(e, path))
    }

    fn create_file(&self, path: &Path) -> Result<()> {
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(|_| ())
            .map_err(|e| FileError::from_io(e, path))
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(FileError::AlreadyExists(path.to_path_buf()));
        }
        fs::create_dir_all(path).map_err(|e| FileError::from_io(e, path))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path).map_err(|e| FileError::from_io(e, path))
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/local.rs"]
mod tests;
