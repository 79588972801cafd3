//! Directory tree index.
//!
//! Nodes are keyed by path strings plus two synthetic ids: the empty super
//! root, whose only child is `root`, and `root` itself, whose children are
//! the opened folder's entries. The whole subtree is listed eagerly at load
//! time; every listed directory gets an entry (possibly empty), files get none.

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

use crate::kernel::services::ports::file::{DirEntry, FileProvider, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreeNodeId(CompactString);

impl TreeNodeId {
    pub const SUPER_ROOT: TreeNodeId = TreeNodeId(CompactString::const_new(""));
    pub const ROOT: TreeNodeId = TreeNodeId(CompactString::const_new("root"));

    pub fn from_path(path: &Path) -> Self {
        Self(CompactString::new(path.to_string_lossy()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The node's path. Meaningless for the synthetic ids.
    pub fn as_path(&self) -> &Path {
        Path::new(self.0.as_str())
    }

    pub fn is_root(&self) -> bool {
        *self == Self::ROOT
    }

    pub fn is_super_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_synthetic(&self) -> bool {
        self.is_root() || self.is_super_root()
    }
}

impl std::fmt::Display for TreeNodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TreeNodeId {
    fn from(value: &str) -> Self {
        Self(CompactString::new(value))
    }
}

impl From<&Path> for TreeNodeId {
    fn from(value: &Path) -> Self {
        Self::from_path(value)
    }
}

impl From<PathBuf> for TreeNodeId {
    fn from(value: PathBuf) -> Self {
        Self::from_path(&value)
    }
}

/// Node id → ordered children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeIndex {
    children: FxHashMap<TreeNodeId, Vec<TreeNodeId>>,
}

impl Default for TreeIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl TreeIndex {
    /// Index with no folder open: `"" -> [root]`, `root -> []`.
    pub fn empty() -> Self {
        let mut children = FxHashMap::default();
        children.insert(TreeNodeId::SUPER_ROOT, vec![TreeNodeId::ROOT]);
        children.insert(TreeNodeId::ROOT, Vec::new());
        Self { children }
    }

    pub fn children(&self, id: &TreeNodeId) -> &[TreeNodeId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_children(&self, id: &TreeNodeId) -> bool {
        !self.children(id).is_empty()
    }

    /// True for the synthetic ids and every listed directory, empty or not.
    pub fn is_branch(&self, id: &TreeNodeId) -> bool {
        self.children.contains_key(id)
    }

    /// Number of branch entries, synthetic ids included.
    pub fn branch_count(&self) -> usize {
        self.children.len()
    }

    /// Number of real nodes below `root`.
    pub fn node_count(&self) -> usize {
        self.children
            .iter()
            .filter(|(id, _)| !id.is_super_root())
            .map(|(_, children)| children.len())
            .sum()
    }

    fn insert(&mut self, id: TreeNodeId, children: Vec<TreeNodeId>) {
        self.children.insert(id, children);
    }
}

/// Result of a successful [`load`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeLoad {
    pub index: TreeIndex,
    /// Nested directories that could not be listed; each has an empty entry
    /// in `index`.
    pub unreadable: Vec<PathBuf>,
}

/// Lists `root` and, recursively, every directory below it.
///
/// Directories come before files at each level; within each group the
/// provider's order is kept. Entry names in `exclude` are skipped. Only a
/// failure to list `root` itself is an error.
pub fn load(provider: &dyn FileProvider, root: &Path, exclude: &[String]) -> Result<TreeLoad> {
    let entries = provider.read_dir(root)?;

    let mut builder = Builder {
        provider,
        exclude,
        load: TreeLoad {
            index: TreeIndex::empty(),
            unreadable: Vec::new(),
        },
    };
    let top = builder.level(entries);
    builder.load.index.insert(TreeNodeId::ROOT, top);

    tracing::debug!(
        root = %root.display(),
        branches = builder.load.index.branch_count(),
        unreadable = builder.load.unreadable.len(),
        "tree loaded"
    );
    Ok(builder.load)
}

struct Builder<'a> {
    provider: &'a dyn FileProvider,
    exclude: &'a [String],
    load: TreeLoad,
}

impl Builder<'_> {
    fn level(&mut self, entries: Vec<DirEntry>) -> Vec<TreeNodeId> {
        let (dirs, files): (Vec<DirEntry>, Vec<DirEntry>) = entries
            .into_iter()
            .filter(|entry| !self.exclude.iter().any(|name| *name == entry.name))
            .partition(|entry| entry.is_dir);

        let mut ids = Vec::with_capacity(dirs.len() + files.len());
        for entry in dirs {
            self.descend(&entry.path);
            ids.push(TreeNodeId::from_path(&entry.path));
        }
        for entry in files {
            ids.push(TreeNodeId::from_path(&entry.path));
        }
        ids
    }

    fn descend(&mut self, dir: &Path) {
        let children = match self.provider.read_dir(dir) {
            Ok(entries) => self.level(entries),
            Err(err) => {
                tracing::warn!(path = %dir.display(), error = %err, "skipping unreadable directory");
                self.load.unreadable.push(dir.to_path_buf());
                Vec::new()
            }
        };
        self.load.index.insert(TreeNodeId::from_path(dir), children);
    }
}

/// Label shown for `id`: the last path component, or for `root` the opened
/// folder's name (`placeholder` when nothing is open).
pub fn display_name(id: &TreeNodeId, open_folder: Option<&Path>, placeholder: &str) -> String {
    if id.is_root() {
        return match open_folder {
            Some(folder) => base_name(folder),
            None => placeholder.to_string(),
        };
    }
    if id.is_super_root() {
        return String::new();
    }
    base_name(id.as_path())
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/tree.rs"]
mod tests;
