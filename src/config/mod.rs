use crate::errors::{AppError, AppResult};
use crate::models::duty_limits::DutyLimits;
use crate::models::window::WindowBoundary;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_limit_daily")]
    pub duty_limit_daily: Option<f64>,
    #[serde(default = "default_limit_weekly")]
    pub duty_limit_weekly: Option<f64>,
    #[serde(default = "default_limit_monthly")]
    pub duty_limit_monthly: Option<f64>,
    #[serde(default)]
    pub window_boundary: WindowBoundary,
    #[serde(default = "default_show_bars")]
    pub show_bars: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_limit_daily() -> Option<f64> {
    Some(DutyLimits::DEFAULT_DAILY)
}
fn default_limit_weekly() -> Option<f64> {
    Some(DutyLimits::DEFAULT_WEEKLY)
}
fn default_limit_monthly() -> Option<f64> {
    Some(DutyLimits::DEFAULT_MONTHLY)
}
fn default_show_bars() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            duty_limit_daily: default_limit_daily(),
            duty_limit_weekly: default_limit_weekly(),
            duty_limit_monthly: default_limit_monthly(),
            window_boundary: WindowBoundary::default(),
            show_bars: default_show_bars(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rdutylog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rdutylog")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdutylog.conf")
    }

    /// Config file in use: the `--config` override or the default one.
    pub fn resolve_file(custom: Option<&str>) -> PathBuf {
        custom
            .map(expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rdutylog.sqlite")
    }

    /// Duty limits as consumed by the calculator.
    pub fn limits(&self) -> DutyLimits {
        DutyLimits {
            daily: self.duty_limit_daily,
            weekly: self.duty_limit_weekly,
            monthly: self.duty_limit_monthly,
        }
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    ///
    /// A file that exists but cannot be parsed is an error.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Initialize configuration and database files.
    ///
    /// Returns the configuration that was written (or would have been, in test mode).
    pub fn init_all(
        config_path: &Path,
        custom_db: Option<&str>,
        is_test: bool,
    ) -> AppResult<Config> {
        let existing = Config::load_from(config_path)?;

        // DB name: user provided, else the one already configured
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() {
                    p
                } else {
                    Self::config_dir().join(p)
                }
            }
            None => expand_tilde(&existing.database),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..existing
        };

        // Write config file
        if !is_test {
            config.save_to(config_path)?;
            success(format!("Config file: {}", config_path.display()));
        }

        // Create empty DB file if not exists
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        success(format!("Database:    {}", db_path.display()));

        Ok(config)
    }
}
