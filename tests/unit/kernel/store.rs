use super::*;
use crate::kernel::services::adapters::LocalFileProvider;
use crate::kernel::services::ports::{EntryKind, ShellConfig};
use crate::kernel::tree::{self, TreeNodeId};
use crate::kernel::FsOp;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn new_store() -> Store {
    Store::new(AppState::new(ShellConfig::default()))
}

fn open_folder(store: &mut Store, root: &Path) {
    let load = tree::load(&LocalFileProvider::new(), root, &[]).unwrap();
    store.dispatch(Action::TreeLoaded {
        root: root.to_path_buf(),
        load,
    });
}

fn info(title: &str, message: &str) -> Effect {
    Effect::ShowInfo {
        title: title.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn open_folder_asks_for_a_folder_then_loads_it() {
    let mut store = new_store();

    let result = store.dispatch(Action::RunCommand(Command::OpenFolder));
    assert_eq!(result.effects, vec![Effect::PickFolder]);
    assert!(!result.state_changed);

    let result = store.dispatch(Action::FolderChosen(PathBuf::from("/w/project")));
    assert_eq!(result.effects, vec![Effect::LoadTree(PathBuf::from("/w/project"))]);
}

#[test]
fn tree_loaded_moves_to_loaded_state_and_retitles() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    fs::create_dir_all(root.join("src")).unwrap();

    let mut store = new_store();
    let load = tree::load(&LocalFileProvider::new(), &root, &[]).unwrap();
    let result = store.dispatch(Action::TreeLoaded {
        root: root.clone(),
        load,
    });

    assert!(result.state_changed);
    assert_eq!(
        result.effects,
        vec![Effect::SetTitle("Aether - project".to_string())]
    );
    assert!(store.state().explorer.is_loaded());
    assert_eq!(store.state().root_label(), "project");
    assert_eq!(
        store.state().explorer.index().children(&TreeNodeId::ROOT),
        &[TreeNodeId::from_path(&root.join("src"))]
    );
}

#[test]
fn failed_load_keeps_previous_tree_and_shows_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "").unwrap();

    let mut store = new_store();
    open_folder(&mut store, dir.path());
    let before = store.state().explorer.index().clone();

    let result = store.dispatch(Action::TreeLoadFailed {
        root: PathBuf::from("/gone"),
        error: "Not found: /gone".to_string(),
    });

    assert!(!result.state_changed);
    assert_eq!(
        result.effects,
        vec![Effect::ShowError {
            title: "Error".to_string(),
            message: "Not found: /gone".to_string(),
        }]
    );
    assert_eq!(store.state().explorer.index(), &before);
    assert_eq!(store.state().explorer.root(), Some(dir.path()));
}

#[test]
fn new_file_without_folder_shows_notice() {
    let mut store = new_store();

    let result = store.dispatch(Action::RunCommand(Command::NewFile));
    assert_eq!(
        result.effects,
        vec![info(
            "No Folder",
            "Please open a folder first to create a new file"
        )]
    );

    let result = store.dispatch(Action::RunCommand(Command::NewFolder));
    assert_eq!(
        result.effects,
        vec![info(
            "No Folder",
            "Please open a folder first to create a new folder"
        )]
    );
}

#[test]
fn new_entry_prompts_then_creates_under_root() {
    let dir = tempdir().unwrap();
    let mut store = new_store();
    open_folder(&mut store, dir.path());

    let result = store.dispatch(Action::RunCommand(Command::NewFile));
    assert_eq!(result.effects, vec![Effect::PromptName(EntryKind::File)]);

    let result = store.dispatch(Action::NameEntered {
        kind: EntryKind::File,
        name: "x.txt".to_string(),
    });
    assert_eq!(
        result.effects,
        vec![Effect::CreateFile(dir.path().join("x.txt"))]
    );

    let result = store.dispatch(Action::NameEntered {
        kind: EntryKind::Folder,
        name: "pkg".to_string(),
    });
    assert_eq!(result.effects, vec![Effect::CreateDir(dir.path().join("pkg"))]);
}

#[test]
fn empty_name_is_ignored() {
    let dir = tempdir().unwrap();
    let mut store = new_store();
    open_folder(&mut store, dir.path());

    let result = store.dispatch(Action::NameEntered {
        kind: EntryKind::File,
        name: String::new(),
    });
    assert!(result.effects.is_empty());
    assert!(!result.state_changed);
}

#[test]
fn entered_name_stays_under_root() {
    let dir = tempdir().unwrap();
    let mut store = new_store();
    open_folder(&mut store, dir.path());

    let result = store.dispatch(Action::NameEntered {
        kind: EntryKind::File,
        name: "/elsewhere/x.txt".to_string(),
    });
    assert_eq!(
        result.effects,
        vec![Effect::CreateFile(dir.path().join("elsewhere/x.txt"))]
    );

    let result = store.dispatch(Action::NameEntered {
        kind: EntryKind::Folder,
        name: "../../pkg".to_string(),
    });
    assert_eq!(result.effects, vec![Effect::CreateDir(dir.path().join("pkg"))]);

    let result = store.dispatch(Action::NameEntered {
        kind: EntryKind::File,
        name: "/..".to_string(),
    });
    assert!(result.effects.is_empty());
}

#[test]
fn created_file_reloads_tree_and_opens_it() {
    let dir = tempdir().unwrap();
    let mut store = new_store();
    open_folder(&mut store, dir.path());

    let path = dir.path().join("x.txt");
    let result = store.dispatch(Action::PathCreated {
        path: path.clone(),
        kind: EntryKind::File,
    });
    assert_eq!(
        result.effects,
        vec![
            Effect::LoadTree(dir.path().to_path_buf()),
            Effect::ReadFile(path)
        ]
    );

    let result = store.dispatch(Action::PathCreated {
        path: dir.path().join("pkg"),
        kind: EntryKind::Folder,
    });
    assert_eq!(
        result.effects,
        vec![Effect::LoadTree(dir.path().to_path_buf())]
    );
}

#[test]
fn failed_create_shows_error() {
    let mut store = new_store();
    let result = store.dispatch(Action::FsOpFailed {
        op: FsOp::Create(EntryKind::File),
        path: PathBuf::from("/w/x.txt"),
        error: "/w/x.txt already exists".to_string(),
    });
    assert_eq!(
        result.effects,
        vec![Effect::ShowError {
            title: "Error".to_string(),
            message: "/w/x.txt already exists".to_string(),
        }]
    );
}

#[test]
fn selecting_a_branch_toggles_and_a_file_opens() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
    fs::write(dir.path().join("notes.md"), "").unwrap();

    let mut store = new_store();
    open_folder(&mut store, dir.path());

    let src = TreeNodeId::from_path(&dir.path().join("src"));
    let result = store.dispatch(Action::SelectNode(src.clone()));
    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert!(store.state().explorer.is_expanded(&src));

    let notes = dir.path().join("notes.md");
    let result = store.dispatch(Action::SelectNode(TreeNodeId::from_path(&notes)));
    assert_eq!(result.effects, vec![Effect::ReadFile(notes)]);

    for synthetic in [TreeNodeId::SUPER_ROOT, TreeNodeId::ROOT] {
        let result = store.dispatch(Action::SelectNode(synthetic));
        assert!(!result.state_changed);
        assert!(result.effects.is_empty());
    }
    assert!(store.state().explorer.is_expanded(&TreeNodeId::ROOT));
}

#[test]
fn file_loaded_fills_document() {
    let mut store = new_store();
    let result = store.dispatch(Action::FileLoaded {
        path: PathBuf::from("/w/main.go"),
        content: "package main".to_string(),
    });

    assert!(result.state_changed);
    assert_eq!(
        result.effects,
        vec![Effect::SetTitle("Aether - main.go".to_string())]
    );
    assert_eq!(store.state().document.text, "package main");
    assert_eq!(store.state().file_label(), "main.go");
}

#[test]
fn open_file_picks_then_reads() {
    let mut store = new_store();
    let result = store.dispatch(Action::RunCommand(Command::OpenFile));
    assert_eq!(result.effects, vec![Effect::PickOpenFile]);

    let result = store.dispatch(Action::FileChosen(PathBuf::from("/w/a.py")));
    assert_eq!(result.effects, vec![Effect::ReadFile(PathBuf::from("/w/a.py"))]);
}

#[test]
fn save_without_path_asks_for_location() {
    let mut store = new_store();
    store.dispatch(Action::SetText("hello".to_string()));

    let result = store.dispatch(Action::RunCommand(Command::Save));
    assert_eq!(result.effects, vec![Effect::PickSaveFile]);

    let result = store.dispatch(Action::SaveTargetChosen(PathBuf::from("/w/out.txt")));
    assert_eq!(
        result.effects,
        vec![Effect::WriteFile {
            path: PathBuf::from("/w/out.txt"),
            content: "hello".to_string(),
        }]
    );
}

#[test]
fn save_with_path_writes_buffer() {
    let mut store = new_store();
    store.dispatch(Action::FileLoaded {
        path: PathBuf::from("/w/a.txt"),
        content: "old".to_string(),
    });
    store.dispatch(Action::SetText("new".to_string()));

    let result = store.dispatch(Action::RunCommand(Command::Save));
    assert_eq!(
        result.effects,
        vec![Effect::WriteFile {
            path: PathBuf::from("/w/a.txt"),
            content: "new".to_string(),
        }]
    );

    let result = store.dispatch(Action::RunCommand(Command::SaveAs));
    assert_eq!(result.effects, vec![Effect::PickSaveFile]);
}

#[test]
fn file_saved_updates_path_and_confirms() {
    let mut store = new_store();
    let result = store.dispatch(Action::FileSaved {
        path: PathBuf::from("/w/out.txt"),
    });

    assert!(result.state_changed);
    assert_eq!(
        result.effects,
        vec![
            Effect::SetTitle("Aether - out.txt".to_string()),
            info("Saved", "File saved to /w/out.txt"),
        ]
    );
    assert_eq!(
        store.state().document.path,
        Some(PathBuf::from("/w/out.txt"))
    );
}

#[test]
fn set_text_reports_change_only_when_different() {
    let mut store = new_store();
    assert!(store.dispatch(Action::SetText("a".to_string())).state_changed);
    assert!(!store.dispatch(Action::SetText("a".to_string())).state_changed);
}

#[test]
fn quit_marks_state_once() {
    let mut store = new_store();
    let result = store.dispatch(Action::RunCommand(Command::Quit));
    assert!(result.state_changed);
    assert_eq!(result.effects, vec![Effect::Quit]);
    assert!(store.state().ui.quit_requested);

    assert!(!store.dispatch(Action::RunCommand(Command::Quit)).state_changed);
}
