use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

use crate::kernel::icons::{self, IconId};
use crate::kernel::services::ports::ShellConfig;
use crate::kernel::tree::{self, TreeIndex, TreeLoad, TreeNodeId};

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ShellConfig,
    pub explorer: ExplorerState,
    pub document: DocumentState,
    pub ui: UiState,
}

impl AppState {
    pub fn new(config: ShellConfig) -> Self {
        let title = config.window_title(None);
        Self {
            config,
            explorer: ExplorerState::new(),
            document: DocumentState::default(),
            ui: UiState {
                title,
                quit_requested: false,
            },
        }
    }

    /// Label for the file currently in the buffer.
    pub fn file_label(&self) -> String {
        self.document
            .name()
            .unwrap_or_else(|| self.config.untitled_name.clone())
    }

    pub fn root_label(&self) -> String {
        tree::display_name(
            &TreeNodeId::ROOT,
            self.explorer.root(),
            &self.config.empty_root_label,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub title: String,
    pub quit_requested: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentState {
    pub path: Option<PathBuf>,
    pub text: String,
}

impl DocumentState {
    pub fn name(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        path.file_name()
            .map(|name| name.to_string_lossy().to_string())
    }
}

/// One visible line of the sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub id: TreeNodeId,
    pub depth: usize,
    pub label: String,
    pub is_branch: bool,
    pub expanded: bool,
    pub icon: IconId,
}

/// Sidebar tree: the index of the open folder plus which branches are open.
#[derive(Debug, Clone)]
pub struct ExplorerState {
    root: Option<PathBuf>,
    index: TreeIndex,
    expanded: FxHashSet<TreeNodeId>,
    unreadable: Vec<PathBuf>,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorerState {
    pub fn new() -> Self {
        Self {
            root: None,
            index: TreeIndex::empty(),
            expanded: FxHashSet::default(),
            unreadable: Vec::new(),
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.root.is_some()
    }

    pub fn index(&self) -> &TreeIndex {
        &self.index
    }

    pub fn unreadable(&self) -> &[PathBuf] {
        &self.unreadable
    }

    pub fn is_expanded(&self, id: &TreeNodeId) -> bool {
        self.expanded.contains(id)
    }

    /// Replaces the whole index. Reloading the same folder keeps branches
    /// that still exist open; a different folder starts collapsed. `root` is
    /// opened whenever it has entries.
    pub fn apply_loaded(&mut self, root: PathBuf, load: TreeLoad) -> bool {
        let same_root = self.root.as_deref() == Some(root.as_path());
        let TreeLoad { index, unreadable } = load;

        if same_root {
            self.expanded.retain(|id| index.is_branch(id));
        } else {
            self.expanded.clear();
        }
        if index.has_children(&TreeNodeId::ROOT) {
            self.expanded.insert(TreeNodeId::ROOT);
        }

        self.root = Some(root);
        self.index = index;
        self.unreadable = unreadable;
        true
    }

    pub fn toggle(&mut self, id: &TreeNodeId) -> bool {
        if id.is_super_root() || !self.index.is_branch(id) {
            return false;
        }
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
        true
    }

    pub fn expand_all(&mut self) -> bool {
        let before = self.expanded.len();
        let mut stack = vec![TreeNodeId::ROOT];
        while let Some(id) = stack.pop() {
            if !self.index.has_children(&id) {
                continue;
            }
            for child in self.index.children(&id) {
                if self.index.is_branch(child) {
                    stack.push(child.clone());
                }
            }
            self.expanded.insert(id);
        }
        self.expanded.len() != before
    }

    pub fn collapse_all(&mut self) -> bool {
        let changed = !self.expanded.is_empty();
        self.expanded.clear();
        changed
    }

    /// Depth-first rows following the expanded set. `root` is always row 0.
    pub fn rows(&self, empty_root_label: &str) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        let mut stack = vec![(TreeNodeId::ROOT, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            let is_branch = self.index.is_branch(&id);
            let expanded = is_branch && self.is_expanded(&id);

            if expanded {
                for child in self.index.children(&id).iter().rev() {
                    stack.push((child.clone(), depth + 1));
                }
            }

            let icon = if is_branch {
                IconId::FOLDER
            } else {
                icons::resolve(id.as_path())
            };
            rows.push(TreeRow {
                label: tree::display_name(&id, self.root(), empty_root_label),
                id,
                depth,
                is_branch,
                expanded,
                icon,
            });
        }

        rows
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
