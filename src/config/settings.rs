// src/config/settings.rs
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "console.toml";
const APP_DIR_NAME: &str = "deepsea-console";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Directory that `/assets/...` references are resolved against.
    pub asset_root: PathBuf,
    /// Optional RON file replacing the built-in module catalog.
    pub catalog_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Application U".to_string(),
            window_width: 1280.0,
            window_height: 800.0,
            asset_root: PathBuf::from("."),
            catalog_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Layers the user config dir, `./console.toml`, an explicit file and
    /// `CONSOLE__*` environment variables over the defaults, later sources
    /// winning.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let user_file = dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
        Self::load_from(user_file.as_deref(), explicit)
    }

    fn load_from(user_file: Option<&Path>, explicit: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = user_file {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(File::with_name("console").required(false));
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(Environment::with_prefix("CONSOLE").separator("__"));

        builder
            .build()
            .context("Failed to read console settings")?
            .try_deserialize()
            .context("Invalid console settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_without_any_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(CONFIG_FILE_NAME);

        let settings = Settings::load_from(Some(&missing), None).unwrap();
        assert_eq!(settings.title, "Application U");
        assert_eq!(settings.log_filter, "info");
        assert!(settings.catalog_path.is_none());
    }

    #[test]
    fn explicit_file_overrides_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("user.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(&user, "title = \"From User\"\nwindow_width = 900.0\n").unwrap();
        fs::write(&explicit, "title = \"From Explicit\"\nasset_root = \"/srv/console\"\n").unwrap();

        let settings = Settings::load_from(Some(&user), Some(&explicit)).unwrap();
        assert_eq!(settings.title, "From Explicit");
        assert_eq!(settings.window_width, 900.0);
        assert_eq!(settings.asset_root, PathBuf::from("/srv/console"));
        assert_eq!(settings.window_height, Settings::default().window_height);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("nope.toml");
        assert!(Settings::load_from(None, Some(&explicit)).is_err());
    }
}
