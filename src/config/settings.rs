use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_threshold() -> usize {
    9
}
fn default_window_days() -> u32 {
    365
}
fn default_focus_minutes() -> u32 {
    25
}
fn default_log_limit() -> usize {
    10
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Minimum task rows a day needs, all completed, to count as a streak day.
    #[serde(default = "default_threshold")]
    pub completion_threshold: usize,
    /// How far back streak scans look. Also the maximum reportable streak.
    #[serde(default = "default_window_days")]
    pub streak_window_days: u32,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            completion_threshold: default_threshold(),
            streak_window_days: default_window_days(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroConfig {
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for GymConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_limit")]
    pub list_limit: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            list_limit: default_log_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub tasks: TaskConfig,
    #[serde(default)]
    pub pomodoro: PomodoroConfig,
    #[serde(default)]
    pub gym: GymConfig,
    #[serde(default)]
    pub logs: LogConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "daygrid").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn db_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("daygrid.db"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(&path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.tasks.completion_threshold, 9);
        assert_eq!(config.tasks.streak_window_days, 365);
        assert_eq!(config.pomodoro.focus_minutes, 25);
        assert!(config.gym.enabled);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: AppConfig =
            toml::from_str("[tasks]\ncompletion_threshold = 5\n").unwrap();
        assert_eq!(config.tasks.completion_threshold, 5);
        assert_eq!(config.tasks.streak_window_days, 365);
    }

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = AppConfig::default();
        config.pomodoro.focus_minutes = 50;
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let read: AppConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(read.pomodoro.focus_minutes, 50);
    }
}
