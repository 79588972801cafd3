//! Service adapters: OS specific implementations of the ports.

pub mod file;
pub mod icon_assets;
pub mod paths;
pub mod settings;

pub use file::LocalFileProvider;
pub use icon_assets::{IconAsset, IconAssetStore};
pub use paths::{ensure_log_dir, get_log_dir, get_settings_path};
pub use settings::{load_settings, load_settings_from};
