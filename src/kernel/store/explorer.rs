use std::path::{Component, PathBuf};

use crate::kernel::services::ports::EntryKind;
use crate::kernel::{Action, Command, Effect};

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::SelectNode(id) => {
                if id.is_synthetic() {
                    return super::DispatchResult::unchanged();
                }
                if self.state.explorer.index().is_branch(&id) {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: self.state.explorer.toggle(&id),
                    };
                }
                super::DispatchResult::effects(vec![Effect::ReadFile(id.as_path().to_path_buf())])
            }
            Action::ExpandAll => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.explorer.expand_all(),
            },
            Action::CollapseAll => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.explorer.collapse_all(),
            },
            Action::FolderChosen(path) => {
                super::DispatchResult::effects(vec![Effect::LoadTree(path)])
            }
            Action::TreeLoaded { root, load } => {
                tracing::info!(
                    root = %root.display(),
                    nodes = load.index.node_count(),
                    unreadable = load.unreadable.len(),
                    "folder opened"
                );
                let name = root
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string());
                let state_changed = self.state.explorer.apply_loaded(root, load);
                super::DispatchResult {
                    effects: self.retitle(name),
                    state_changed,
                }
            }
            Action::TreeLoadFailed { root, error } => {
                tracing::warn!(root = %root.display(), %error, "folder load failed");
                super::DispatchResult::effects(vec![super::error_dialog(error)])
            }
            Action::NameEntered { kind, name } => {
                let Some(relative) = entry_name(&name) else {
                    return super::DispatchResult::unchanged();
                };
                let Some(root) = self.state.explorer.root() else {
                    return super::DispatchResult::effects(vec![no_folder_notice(kind)]);
                };
                let path = root.join(relative);
                let effect = match kind {
                    EntryKind::File => Effect::CreateFile(path),
                    EntryKind::Folder => Effect::CreateDir(path),
                };
                super::DispatchResult::effects(vec![effect])
            }
            Action::PathCreated { path, kind } => {
                let Some(root) = self.state.explorer.root().map(PathBuf::from) else {
                    return super::DispatchResult::unchanged();
                };
                let mut effects = vec![Effect::LoadTree(root)];
                if kind == EntryKind::File {
                    effects.push(Effect::ReadFile(path));
                }
                super::DispatchResult::effects(effects)
            }
            _ => unreachable!("non-explorer action passed to reduce_explorer_action"),
        }
    }

    pub(super) fn request_new_entry(&mut self, cmd: Command) -> super::DispatchResult {
        let kind = match cmd {
            Command::NewFolder => EntryKind::Folder,
            _ => EntryKind::File,
        };
        if !self.state.explorer.is_loaded() {
            return super::DispatchResult::effects(vec![no_folder_notice(kind)]);
        }
        super::DispatchResult::effects(vec![Effect::PromptName(kind)])
    }
}

/// The entered name as a path relative to the open folder. Root, prefix,
/// `.` and `..` components are dropped so the result never leaves the
/// folder; `None` when nothing is left.
fn entry_name(name: &str) -> Option<PathBuf> {
    let relative: PathBuf = std::path::Path::new(name)
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect();
    (!relative.as_os_str().is_empty()).then_some(relative)
}

fn no_folder_notice(kind: EntryKind) -> Effect {
    Effect::ShowInfo {
        title: "No Folder".to_string(),
        message: format!(
            "Please open a folder first to create a new {}",
            kind.label()
        ),
    }
}
