use super::settings::Settings;

/// Labels and exclusions the kernel reads while reducing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    pub app_name: String,
    pub untitled_name: String,
    pub empty_root_label: String,
    pub exclude: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl ShellConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            app_name: settings.shell.app_name.clone(),
            untitled_name: settings.shell.untitled_name.clone(),
            empty_root_label: settings.shell.empty_root_label.clone(),
            exclude: settings.explorer.exclude.clone(),
        }
    }

    /// `"<app> - <name>"`, or just the app name.
    pub fn window_title(&self, name: Option<&str>) -> String {
        match name {
            Some(name) => format!("{} - {}", self.app_name, name),
            None => self.app_name.clone(),
        }
    }
}
