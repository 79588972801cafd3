use std::path::PathBuf;

use crate::kernel::services::ports::{EntryKind, UiHost};

/// Host for non-interactive runs: every picker and prompt is cancelled and
/// messages go to stderr.
#[derive(Debug, Default)]
pub struct HeadlessHost;

impl UiHost for HeadlessHost {
    fn pick_folder(&mut self) -> Option<PathBuf> {
        None
    }

    fn pick_open_file(&mut self) -> Option<PathBuf> {
        None
    }

    fn pick_save_file(&mut self) -> Option<PathBuf> {
        None
    }

    fn prompt_name(&mut self, _kind: EntryKind) -> Option<String> {
        None
    }

    fn show_error(&mut self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }

    fn show_info(&mut self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }
}
