use crate::kernel::services::ports::settings::Settings;
use std::path::Path;

use super::paths::get_settings_path;

/// Reads the user settings. A missing file means defaults; a malformed one is
/// logged and also means defaults. Nothing is ever written back.
pub fn load_settings() -> Settings {
    match get_settings_path() {
        Some(path) => load_settings_from(&path),
        None => Settings::default(),
    }
}

pub fn load_settings_from(path: &Path) -> Settings {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Settings::default(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "settings unreadable");
            return Settings::default();
        }
    };

    match serde_json::from_str(&data) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "settings malformed");
            Settings::default()
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
