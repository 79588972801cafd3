//! Drives the kernel store: reduces actions, then performs the requested
//! effects against the file system and the UI host, feeding each outcome
//! back in as a new action.

use std::path::Path;

use crate::kernel::icons::{self, IconId};
use crate::kernel::services::adapters::{IconAsset, IconAssetStore};
use crate::kernel::services::ports::{
    EntryKind, FileProvider, Settings, ShellConfig, UiHost,
};
use crate::kernel::tree::{self, TreeNodeId};
use crate::kernel::{Action, AppState, Command, Effect, FsOp, Store, TreeRow};

pub struct Shell<H: UiHost> {
    store: Store,
    files: Box<dyn FileProvider>,
    host: H,
    assets: Option<IconAssetStore>,
}

impl<H: UiHost> Shell<H> {
    pub fn new(settings: &Settings, files: Box<dyn FileProvider>, host: H) -> Self {
        let mut shell = Self::with_config(ShellConfig::from_settings(settings), files, host);
        shell.assets = settings.icon_assets.clone().map(IconAssetStore::new);
        shell
    }

    pub fn with_config(config: ShellConfig, files: Box<dyn FileProvider>, host: H) -> Self {
        Self {
            store: Store::new(AppState::new(config)),
            files,
            host,
            assets: None,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns whether anything the UI renders changed, follow-up actions
    /// included.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        let mut state_changed = result.state_changed;
        for effect in result.effects {
            state_changed |= self.run_effect(effect);
        }
        state_changed
    }

    pub fn run_command(&mut self, cmd: Command) -> bool {
        self.dispatch(Action::RunCommand(cmd))
    }

    fn run_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::LoadTree(root) => {
                let _span = tracing::debug_span!("effect.load_tree").entered();
                let loaded = tree::load(
                    self.files.as_ref(),
                    &root,
                    &self.store.state().config.exclude,
                );
                match loaded {
                    Ok(load) => self.dispatch(Action::TreeLoaded { root, load }),
                    Err(err) => self.dispatch(Action::TreeLoadFailed {
                        root,
                        error: err.to_string(),
                    }),
                }
            }
            Effect::ReadFile(path) => {
                let _span = tracing::debug_span!("effect.read_file").entered();
                match self.files.read_file(&path) {
                    Ok(content) => self.dispatch(Action::FileLoaded { path, content }),
                    Err(err) => self.dispatch(Action::FsOpFailed {
                        op: FsOp::Read,
                        path,
                        error: err.to_string(),
                    }),
                }
            }
            Effect::WriteFile { path, content } => {
                let _span = tracing::debug_span!("effect.write_file").entered();
                match self.files.write_file(&path, &content) {
                    Ok(()) => self.dispatch(Action::FileSaved { path }),
                    Err(err) => self.dispatch(Action::FsOpFailed {
                        op: FsOp::Write,
                        path,
                        error: err.to_string(),
                    }),
                }
            }
            Effect::CreateFile(path) => self.create_entry(EntryKind::File, path),
            Effect::CreateDir(path) => self.create_entry(EntryKind::Folder, path),
            Effect::PickFolder => {
                let Some(picked) = self.host.pick_folder() else {
                    return false;
                };
                match self.files.canonicalize(&picked) {
                    Ok(path) => self.dispatch(Action::FolderChosen(path)),
                    Err(err) => self.dispatch(Action::TreeLoadFailed {
                        root: picked,
                        error: err.to_string(),
                    }),
                }
            }
            Effect::PickOpenFile => match self.host.pick_open_file() {
                Some(path) => self.dispatch(Action::FileChosen(path)),
                None => false,
            },
            Effect::PickSaveFile => match self.host.pick_save_file() {
                Some(path) => self.dispatch(Action::SaveTargetChosen(path)),
                None => false,
            },
            Effect::PromptName(kind) => match self.host.prompt_name(kind) {
                Some(name) => self.dispatch(Action::NameEntered { kind, name }),
                None => false,
            },
            Effect::ShowError { title, message } => {
                self.host.show_error(&title, &message);
                false
            }
            Effect::ShowInfo { title, message } => {
                self.host.show_info(&title, &message);
                false
            }
            Effect::SetTitle(title) => {
                self.host.set_title(&title);
                false
            }
            Effect::Quit => {
                self.host.quit();
                false
            }
        }
    }

    fn create_entry(&mut self, kind: EntryKind, path: std::path::PathBuf) -> bool {
        let _span = tracing::debug_span!("effect.create", kind = kind.label()).entered();
        let created = match kind {
            EntryKind::File => self.files.create_file(&path),
            EntryKind::Folder => self.files.create_dir(&path),
        };
        match created {
            Ok(()) => self.dispatch(Action::PathCreated { path, kind }),
            Err(err) => self.dispatch(Action::FsOpFailed {
                op: FsOp::Create(kind),
                path,
                error: err.to_string(),
            }),
        }
    }

    pub fn children(&self, id: &TreeNodeId) -> &[TreeNodeId] {
        self.state().explorer.index().children(id)
    }

    pub fn has_children(&self, id: &TreeNodeId) -> bool {
        self.state().explorer.index().has_children(id)
    }

    pub fn rows(&self) -> Vec<TreeRow> {
        let state = self.state();
        state.explorer.rows(&state.config.empty_root_label)
    }

    pub fn resolve_icon(&self, path: impl AsRef<Path>) -> IconId {
        icons::resolve(path)
    }

    /// Image for `path`'s icon family, or `Fallback` when no asset directory
    /// is configured or none of the variants exist.
    pub fn icon_asset(&self, path: impl AsRef<Path>) -> IconAsset {
        match &self.assets {
            Some(assets) => assets.asset_for(self.files.as_ref(), path),
            None => IconAsset::Fallback,
        }
    }

    pub fn title(&self) -> &str {
        &self.state().ui.title
    }

    pub fn file_label(&self) -> String {
        self.state().file_label()
    }

    pub fn root_label(&self) -> String {
        self.state().root_label()
    }

    pub fn should_quit(&self) -> bool {
        self.state().ui.quit_requested
    }
}
