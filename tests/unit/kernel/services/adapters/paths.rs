use super::*;

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
#[test]
fn test_get_log_dir() {
    let Some(dir) = get_log_dir() else {
        // No HOME/APPDATA in this environment.
        return;
    };
    assert!(dir.to_string_lossy().contains(APP_NAME));
    assert!(dir.ends_with(LOG_DIR));
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
#[test]
fn test_get_settings_path() {
    let Some(path) = get_settings_path() else {
        return;
    };
    assert!(path.ends_with(format!("{}/{}", SETTINGS_DIR, SETTINGS_FILE)));
}
