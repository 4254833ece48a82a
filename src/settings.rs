use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::*;

use crate::error::{Result, SettingsError};
use crate::{APP_NAME, DEFAULT_LOCK_MESSAGE, DEFAULT_LOG_LEVEL, DEFAULT_WORK_MINUTES};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq, Copy)]
pub enum Mode {
    Input,
    #[default]
    Normal,
}

/// Read only configuration. Nothing the user does at runtime is written back.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub timer: TimerSettings,
    pub ui: UISettings,
    pub log: LogSettings,
}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimerSettings {
    pub default_work_minutes: u32,
}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UISettings {
    pub show_instructions: bool,
    pub lock_message: String,
}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
}

impl Default for TimerSettings {
    fn default() -> Self {
        TimerSettings {
            default_work_minutes: DEFAULT_WORK_MINUTES,
        }
    }
}
impl Default for UISettings {
    fn default() -> Self {
        UISettings {
            show_instructions: true,
            lock_message: DEFAULT_LOCK_MESSAGE.to_string(),
        }
    }
}
impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    pub fn project_dirs() -> Result<ProjectDirs> {
        Ok(ProjectDirs::from("", APP_NAME, APP_NAME).ok_or(SettingsError::HomeDirNotFound)?)
    }
    pub fn config_path() -> Result<PathBuf> {
        Ok(Settings::project_dirs()?.config_dir().join("config.toml"))
    }
    /// Missing file means defaults; a file that exists but does not parse is an error.
    pub fn load() -> Result<Settings> {
        Settings::load_from(&Settings::config_path()?)
    }
    pub fn load_from(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let data = fs::read_to_string(path)?;
        Settings::from_toml_str(&data)
    }
    pub fn from_toml_str(data: &str) -> Result<Settings> {
        let settings: Settings = toml::from_str(data)?;
        settings.validate()?;
        Ok(settings)
    }
    fn validate(&self) -> Result<()> {
        if self.timer.default_work_minutes == 0 {
            return Err(SettingsError::LoadError(
                "timer.default_work_minutes must be positive".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::error::Error;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\nshow_instructions = false\n").unwrap();
        let settings = Settings::load_from(&path).unwrap();
        assert!(!settings.ui.show_instructions);
        assert_eq!(settings.timer, TimerSettings::default());

        fs::write(&path, "[timer]\ndefault_work_minutes = \"ten\"\n").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(Error::TomlDeError(_))
        ));
    }

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.timer.default_work_minutes, 30);
        assert!(settings.ui.show_instructions);
        assert_eq!(settings.log.level, "info");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [timer]
            default_work_minutes = 45

            [ui]
            lock_message = "Stand up"
            "#,
        )
        .unwrap();
        assert_eq!(settings.timer.default_work_minutes, 45);
        assert_eq!(settings.ui.lock_message, "Stand up");
        assert!(settings.ui.show_instructions);
        assert_eq!(settings.log, LogSettings::default());
    }

    #[test]
    fn rejects_zero_minutes_and_bad_toml() {
        assert!(matches!(
            Settings::from_toml_str("[timer]\ndefault_work_minutes = 0"),
            Err(Error::SettingsError(SettingsError::LoadError(_)))
        ));
        assert!(matches!(
            Settings::from_toml_str("[timer\n"),
            Err(Error::TomlDeError(_))
        ));
    }
}
