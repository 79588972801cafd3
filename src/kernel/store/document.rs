use crate::kernel::{Action, Effect};

impl super::Store {
    pub(super) fn reduce_document_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::SetText(text) => {
                let changed = self.state.document.text != text;
                self.state.document.text = text;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: changed,
                }
            }
            Action::FileChosen(path) => super::DispatchResult::effects(vec![Effect::ReadFile(path)]),
            Action::SaveTargetChosen(path) => super::DispatchResult::effects(vec![Effect::WriteFile {
                path,
                content: self.state.document.text.clone(),
            }]),
            Action::FileLoaded { path, content } => {
                tracing::debug!(path = %path.display(), bytes = content.len(), "file opened");
                self.state.document.path = Some(path);
                self.state.document.text = content;
                let name = self.state.document.name();
                super::DispatchResult {
                    effects: self.retitle(name),
                    state_changed: true,
                }
            }
            Action::FileSaved { path } => {
                let message = format!("File saved to {}", path.display());
                let state_changed = self.state.document.path.as_ref() != Some(&path);
                self.state.document.path = Some(path);
                let name = self.state.document.name();
                let mut effects = self.retitle(name);
                effects.push(Effect::ShowInfo {
                    title: "Saved".to_string(),
                    message,
                });
                super::DispatchResult {
                    effects,
                    state_changed,
                }
            }
            _ => unreachable!("non-document action passed to reduce_document_action"),
        }
    }

    /// Writes the buffer to its file, or asks where to put it first.
    pub(super) fn save(&mut self) -> super::DispatchResult {
        match self.state.document.path.clone() {
            Some(path) => super::DispatchResult::effects(vec![Effect::WriteFile {
                path,
                content: self.state.document.text.clone(),
            }]),
            None => super::DispatchResult::effects(vec![Effect::PickSaveFile]),
        }
    }
}
