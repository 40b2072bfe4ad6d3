use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATABASE: &str = "bmi_data.db";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Runtime settings, read once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_path: PathBuf,
    pub log_config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: PathBuf::from(DEFAULT_DATABASE),
            log_config_path: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

impl Config {
    /// Defaults, overridden by `BMI_DATABASE` / `BMI_LOG_CONFIG` from the
    /// environment or a `.env` file
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup("BMI_DATABASE").filter(|v| !v.is_empty()) {
            config.database_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("BMI_LOG_CONFIG").filter(|v| !v.is_empty()) {
            config.log_config_path = PathBuf::from(path);
        }

        config
    }

    /// Start log4rs from the configured file. Logging stays off when the
    /// file does not exist.
    pub fn init_logging(&self) -> anyhow::Result<bool> {
        if !self.log_config_path.exists() {
            return Ok(false);
        }
        log4rs::init_file(&self.log_config_path, Default::default())?;
        Ok(true)
    }
}
