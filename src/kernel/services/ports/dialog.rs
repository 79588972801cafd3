//! UI host port: everything the core asks of the window it is embedded in.
//!
//! Pickers and prompts return `None` when the user cancels.

use super::file::EntryKind;
use std::path::PathBuf;

pub trait UiHost {
    fn pick_folder(&mut self) -> Option<PathBuf>;

    fn pick_open_file(&mut self) -> Option<PathBuf>;

    fn pick_save_file(&mut self) -> Option<PathBuf>;

    fn prompt_name(&mut self, kind: EntryKind) -> Option<String>;

    fn show_error(&mut self, title: &str, message: &str);

    fn show_info(&mut self, title: &str, message: &str);

    fn set_title(&mut self, _title: &str) {}

    fn quit(&mut self) {}
}
