use std::path::PathBuf;

use crate::kernel::services::ports::EntryKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadTree(PathBuf),
    ReadFile(PathBuf),
    WriteFile { path: PathBuf, content: String },
    CreateFile(PathBuf),
    CreateDir(PathBuf),
    PickFolder,
    PickOpenFile,
    PickSaveFile,
    PromptName(EntryKind),
    ShowError { title: String, message: String },
    ShowInfo { title: String, message: String },
    SetTitle(String),
    Quit,
}
