use super::*;
use crate::kernel::services::adapters::LocalFileProvider;
use std::fs;
use tempfile::tempdir;

fn loaded(root: &Path) -> TreeLoad {
    tree::load(&LocalFileProvider::new(), root, &[]).unwrap()
}

fn workspace() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/app.tsx"), "").unwrap();
    fs::write(dir.path().join("Dockerfile"), "").unwrap();
    dir
}

#[test]
fn new_state_uses_placeholders() {
    let state = AppState::new(ShellConfig::default());
    assert_eq!(state.ui.title, "Aether");
    assert_eq!(state.file_label(), "untitled.txt");
    assert_eq!(state.root_label(), "Open a folder to get started");
    assert!(!state.explorer.is_loaded());
}

#[test]
fn empty_explorer_shows_only_root_row() {
    let explorer = ExplorerState::new();
    let rows = explorer.rows("nothing open");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, TreeNodeId::ROOT);
    assert_eq!(rows[0].label, "nothing open");
    assert!(rows[0].is_branch);
    assert!(!rows[0].expanded);
}

#[test]
fn loading_opens_root_when_it_has_entries() {
    let dir = workspace();
    let mut explorer = ExplorerState::new();

    assert!(explorer.apply_loaded(dir.path().to_path_buf(), loaded(dir.path())));
    assert!(explorer.is_expanded(&TreeNodeId::ROOT));

    let rows = explorer.rows("-");
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    let root_name = dir.path().file_name().unwrap().to_string_lossy().to_string();
    assert_eq!(labels, vec![root_name.as_str(), "src", "Dockerfile"]);
    assert_eq!(rows[1].icon, IconId::FOLDER);
    assert_eq!(rows[2].icon.family(), "docker");
    assert_eq!(rows[2].depth, 1);
}

#[test]
fn loading_an_empty_folder_leaves_root_closed() {
    let dir = tempdir().unwrap();
    let mut explorer = ExplorerState::new();
    explorer.apply_loaded(dir.path().to_path_buf(), loaded(dir.path()));

    assert!(!explorer.is_expanded(&TreeNodeId::ROOT));
    assert_eq!(explorer.rows("-").len(), 1);
}

#[test]
fn toggle_expands_and_collapses_branches_only() {
    let dir = workspace();
    let mut explorer = ExplorerState::new();
    explorer.apply_loaded(dir.path().to_path_buf(), loaded(dir.path()));

    let src = TreeNodeId::from_path(&dir.path().join("src"));
    assert!(explorer.toggle(&src));
    assert!(explorer.is_expanded(&src));
    assert_eq!(explorer.rows("-").len(), 4);
    assert_eq!(explorer.rows("-")[2].icon.family(), "react");

    assert!(explorer.toggle(&src));
    assert!(!explorer.is_expanded(&src));

    let file = TreeNodeId::from_path(&dir.path().join("Dockerfile"));
    assert!(!explorer.toggle(&file));
    assert!(!explorer.toggle(&TreeNodeId::SUPER_ROOT));
}

#[test]
fn reloading_same_root_keeps_open_branches() {
    let dir = workspace();
    let mut explorer = ExplorerState::new();
    explorer.apply_loaded(dir.path().to_path_buf(), loaded(dir.path()));

    let src = TreeNodeId::from_path(&dir.path().join("src"));
    explorer.toggle(&src);

    fs::write(dir.path().join("x.txt"), "").unwrap();
    explorer.apply_loaded(dir.path().to_path_buf(), loaded(dir.path()));
    assert!(explorer.is_expanded(&src));

    let other = workspace();
    explorer.apply_loaded(other.path().to_path_buf(), loaded(other.path()));
    assert!(!explorer.is_expanded(&src));
    assert!(explorer.is_expanded(&TreeNodeId::ROOT));
}

#[test]
fn expand_all_then_collapse_all() {
    let dir = workspace();
    fs::create_dir_all(dir.path().join("src/a/b")).unwrap();
    fs::write(dir.path().join("src/a/b/c.rs"), "").unwrap();

    let mut explorer = ExplorerState::new();
    explorer.apply_loaded(dir.path().to_path_buf(), loaded(dir.path()));

    assert!(explorer.expand_all());
    let rows = explorer.rows("-");
    assert_eq!(rows.len(), 7);
    assert_eq!(rows.last().unwrap().label, "Dockerfile");
    assert!(rows.iter().any(|r| r.label == "c.rs" && r.depth == 4));
    assert!(!explorer.expand_all());

    assert!(explorer.collapse_all());
    assert_eq!(explorer.rows("-").len(), 1);
}

#[test]
fn document_name_comes_from_path() {
    let doc = DocumentState {
        path: Some(PathBuf::from("/w/main.go")),
        text: String::new(),
    };
    assert_eq!(doc.name().as_deref(), Some("main.go"));
    assert_eq!(DocumentState::default().name(), None);
}
