//! On-disk icon images.
//!
//! Asset sets do not ship every variant for every family, so a family is
//! probed through a fixed list of naming conventions before giving up.

use crate::kernel::icons::{self, IconId};
use crate::kernel::services::ports::file::FileProvider;
use std::path::{Path, PathBuf};

const VARIANT_SUFFIXES: &[&str] = &["-original-wordmark", "-original", "-plain", "-line", ""];
const ASSET_EXT: &str = "svg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconAsset {
    Found { path: PathBuf, bytes: Vec<u8> },
    Fallback,
}

impl IconAsset {
    pub fn path(&self) -> Option<&Path> {
        match self {
            IconAsset::Found { path, .. } => Some(path),
            IconAsset::Fallback => None,
        }
    }
}

pub struct IconAssetStore {
    dir: PathBuf,
}

impl IconAssetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Candidate files for `icon`, in probing order.
    pub fn candidates(&self, icon: IconId) -> Vec<PathBuf> {
        let family = icon.family();
        let family_dir = self.dir.join(family);
        VARIANT_SUFFIXES
            .iter()
            .map(|suffix| family_dir.join(format!("{family}{suffix}.{ASSET_EXT}")))
            .collect()
    }

    pub fn probe(&self, provider: &dyn FileProvider, icon: IconId) -> IconAsset {
        for path in self.candidates(icon) {
            if !provider.is_file(&path) {
                continue;
            }
            match provider.read_file_bytes(&path) {
                Ok(bytes) => {
                    tracing::trace!(icon = %icon, path = %path.display(), "icon asset found");
                    return IconAsset::Found { path, bytes };
                }
                Err(err) => {
                    tracing::debug!(path = %path.display(), error = %err, "icon asset unreadable");
                }
            }
        }
        IconAsset::Fallback
    }

    /// Resolves `path` to an icon family and probes it.
    pub fn asset_for(&self, provider: &dyn FileProvider, path: impl AsRef<Path>) -> IconAsset {
        self.probe(provider, icons::resolve(path))
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/icon_assets.rs"]
mod tests;
