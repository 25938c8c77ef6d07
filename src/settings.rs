//! Optional runtime settings, read from `breakout.json` next to the executable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

const SETTINGS_FILE: &str = "breakout.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between simulation ticks
    pub tick_ms: u64,
    /// Level filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Log destination; relative paths sit next to the executable
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: 10,
            log_level: "info".to_string(),
            log_file: PathBuf::from("breakout.log"),
        }
    }
}

impl Settings {
    /// Load from the default location. A missing file yields the defaults.
    pub fn load() -> io::Result<Self> {
        Self::load_from(&data_dir().join(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> io::Result<Self> {
        match fs::read_to_string(path) {
            Ok(json) => Self::parse(&json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub fn parse(json: &str) -> io::Result<Self> {
        serde_json::from_str(json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn log_path(&self) -> PathBuf {
        if self.log_file.is_absolute() {
            self.log_file.clone()
        } else {
            data_dir().join(&self.log_file)
        }
    }
}

fn data_dir() -> PathBuf {
    // Store next to the executable
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.to_path_buf();
        }
    }
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tick_ms, 10);
        assert_eq!(settings.tick_rate(), Duration::from_millis(10));
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::parse(r#"{ "tick_ms": 16 }"#).unwrap();
        assert_eq!(settings.tick_ms, 16);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.log_file, PathBuf::from("breakout.log"));
    }

    #[test]
    fn test_invalid_json_is_invalid_data() {
        let err = Settings::parse("{ tick_ms: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_zero_tick_is_clamped() {
        let settings = Settings { tick_ms: 0, ..Settings::default() };
        assert_eq!(settings.tick_rate(), Duration::from_millis(1));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("breakout-settings-does-not-exist.json");
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("breakout-settings-{}.json", std::process::id()));
        fs::write(&path, r#"{ "log_level": "debug", "log_file": "/tmp/b.log" }"#).unwrap();
        let settings = Settings::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.log_path(), PathBuf::from("/tmp/b.log"));
        assert_eq!(settings.tick_ms, 10);
    }
}
