use std::path::PathBuf;

use crate::kernel::command::Command;
use crate::kernel::services::ports::EntryKind;
use crate::kernel::tree::{TreeLoad, TreeNodeId};

/// Which file operation an [`Action::FsOpFailed`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    Read,
    Write,
    Create(EntryKind),
}

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    SelectNode(TreeNodeId),
    ExpandAll,
    CollapseAll,
    SetText(String),
    FolderChosen(PathBuf),
    FileChosen(PathBuf),
    SaveTargetChosen(PathBuf),
    NameEntered {
        kind: EntryKind,
        name: String,
    },
    TreeLoaded {
        root: PathBuf,
        load: TreeLoad,
    },
    TreeLoadFailed {
        root: PathBuf,
        error: String,
    },
    FileLoaded {
        path: PathBuf,
        content: String,
    },
    FileSaved {
        path: PathBuf,
    },
    PathCreated {
        path: PathBuf,
        kind: EntryKind,
    },
    FsOpFailed {
        op: FsOp,
        path: PathBuf,
        error: String,
    },
}
