use crate::config::types::{ConfigFile, LoggingConfig, ResolvedConfig};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from an explicit path or the default location.
    ///
    /// An explicit path must exist. A missing file at the default location
    /// yields the built-in defaults.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = default_config_path();
                if !p.exists() {
                    return Ok(ResolvedConfig::default());
                }
                p
            }
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        Self::from_toml_str(&s, &path)
    }

    fn from_toml_str(s: &str, path: &Path) -> Result<ResolvedConfig, ConfigError> {
        let cf: ConfigFile = toml::from_str(s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        let logging = Self::resolve_logging(&cf.logging)?;

        Ok(ResolvedConfig {
            config_path: Some(path.to_path_buf()),
            transpiler: cf.transpiler,
            logging,
        })
    }

    fn resolve_logging(log_cfg: &LoggingConfig) -> Result<LoggingConfig, ConfigError> {
        // Resolve log file path if present
        let Some(ref file) = log_cfg.file else {
            return Ok(log_cfg.clone());
        };

        Ok(LoggingConfig {
            level: log_cfg.level.clone(),
            file_level: log_cfg.file_level.clone(),
            file: Some(expand_path(&file.to_string_lossy())?),
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("fumes").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("fumes").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
