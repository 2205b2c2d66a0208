use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,

    // Schedule offered when a department has no schedule configured yet.
    #[serde(default = "default_work_start")]
    pub default_work_start: String,
    #[serde(default = "default_work_end")]
    pub default_work_end: String,
    #[serde(default = "default_lunch_start")]
    pub default_lunch_start: String,
    #[serde(default = "default_lunch_end")]
    pub default_lunch_end: String,
}

fn default_separator_char() -> String {
    "-".to_string()
}
fn default_work_start() -> String {
    "09:00".to_string()
}
fn default_work_end() -> String {
    "18:00".to_string()
}
fn default_lunch_start() -> String {
    "12:30".to_string()
}
fn default_lunch_end() -> String {
    "13:30".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            separator_char: default_separator_char(),
            default_work_start: default_work_start(),
            default_work_end: default_work_end(),
            default_lunch_start: default_lunch_start(),
            default_lunch_end: default_lunch_end(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."));
            appdata.join("mesai")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".mesai")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("mesai.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("mesai.sqlite")
    }

    /// Load configuration from file. Missing file means defaults; an
    /// unreadable file falls back to defaults with a warning instead of
    /// aborting the whole CLI.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!("Unreadable config file ({}), using defaults.", e));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!("Cannot read config file ({}), using defaults.", e));
                Self::default()
            }
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("serialize config: {}", e)))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Create the configuration directory, config file, and an empty
    /// database file. With `is_test` the config file is left untouched
    /// (tests pass --db explicitly).
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save()?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
