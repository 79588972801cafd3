//! Service ports: traits + data contracts.

pub mod config;
pub mod dialog;
pub mod file;
pub mod settings;

pub use config::ShellConfig;
pub use dialog::UiHost;
pub use file::{DirEntry, EntryKind, FileError, FileProvider, Result as FileResult};
pub use settings::{ExplorerSettings, Settings, ShellSettings};
