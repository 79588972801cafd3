use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Directory of per-family icon images (`<dir>/<family>/<family>-plain.svg`, ...).
    #[serde(default)]
    pub icon_assets: Option<PathBuf>,
    #[serde(default)]
    pub explorer: ExplorerSettings,
    #[serde(default)]
    pub shell: ShellSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExplorerSettings {
    /// Entry names skipped while building the tree (exact match).
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShellSettings {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_untitled_name")]
    pub untitled_name: String,
    #[serde(default = "default_empty_root_label")]
    pub empty_root_label: String,
}

fn default_app_name() -> String {
    "Aether".to_string()
}

fn default_untitled_name() -> String {
    "untitled.txt".to_string()
}

fn default_empty_root_label() -> String {
    "Open a folder to get started".to_string()
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            untitled_name: default_untitled_name(),
            empty_root_label: default_empty_root_label(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
