use super::{Action, AppState, Command, Effect};

mod document;
mod explorer;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn effects(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: false,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        tracing::trace!(?action, "dispatch");
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::SelectNode(_)
            | Action::ExpandAll
            | Action::CollapseAll
            | Action::FolderChosen(_)
            | Action::NameEntered { .. }
            | Action::TreeLoaded { .. }
            | Action::TreeLoadFailed { .. }
            | Action::PathCreated { .. } => self.reduce_explorer_action(action),
            Action::SetText(_)
            | Action::FileChosen(_)
            | Action::SaveTargetChosen(_)
            | Action::FileLoaded { .. }
            | Action::FileSaved { .. } => self.reduce_document_action(action),
            Action::FsOpFailed { op, path, error } => {
                tracing::warn!(?op, path = %path.display(), %error, "file operation failed");
                DispatchResult::effects(vec![error_dialog(error)])
            }
        }
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        match cmd {
            Command::OpenFolder => DispatchResult::effects(vec![Effect::PickFolder]),
            Command::NewFile | Command::NewFolder => self.request_new_entry(cmd),
            Command::OpenFile => DispatchResult::effects(vec![Effect::PickOpenFile]),
            Command::Save => self.save(),
            Command::SaveAs => DispatchResult::effects(vec![Effect::PickSaveFile]),
            Command::Quit => {
                let changed = !self.state.ui.quit_requested;
                self.state.ui.quit_requested = true;
                DispatchResult {
                    effects: vec![Effect::Quit],
                    state_changed: changed,
                }
            }
        }
    }

    /// Updates the window title, emitting `SetTitle` only when it changes.
    fn retitle(&mut self, name: Option<String>) -> Vec<Effect> {
        let title = self.state.config.window_title(name.as_deref());
        if title == self.state.ui.title {
            return Vec::new();
        }
        self.state.ui.title = title.clone();
        vec![Effect::SetTitle(title)]
    }
}

fn error_dialog(message: String) -> Effect {
    Effect::ShowError {
        title: "Error".to_string(),
        message,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
