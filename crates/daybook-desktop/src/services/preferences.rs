//! Settings persistence on the local config directory.

use std::fs;
use std::path::PathBuf;

use daybook_core::models::Settings;

/// Loads and saves user settings as JSON under the platform config dir.
#[derive(Debug, Clone)]
pub struct PreferencesService {
    path: PathBuf,
}

impl Default for PreferencesService {
    fn default() -> Self {
        Self::new(default_settings_path())
    }
}

impl PreferencesService {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load persisted settings, falling back to defaults when the file is
    /// missing or unreadable.
    #[must_use]
    pub fn load(&self) -> Settings {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|error| {
                tracing::warn!("Failed to parse settings file: {}", error);
                Settings::default()
            }),
            Err(_) => Settings::default(),
        }
    }

    /// Persist settings, creating the config directory if needed.
    pub fn save(&self, settings: &Settings) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(settings).map_err(std::io::Error::other)?;
        fs::write(&self.path, serialized)
    }
}

fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("daybook")
        .join("settings.json")
}

#[cfg(test)]
mod tests {
    use daybook_core::models::ThemeMode;

    use super::*;

    #[test]
    fn settings_round_trip_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let service = PreferencesService::new(dir.path().join("settings.json"));

        let settings = Settings {
            theme: ThemeMode::Dark,
        };
        service.save(&settings).unwrap();
        assert_eq!(service.load(), settings);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = PreferencesService::new(dir.path().join("absent.json"));
        assert_eq!(service.load(), Settings::default());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(PreferencesService::new(path).load(), Settings::default());
    }
}
