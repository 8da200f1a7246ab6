//! CLI configuration
//!
//! Each setting resolves as flag, then environment, then default. A `.env`
//! file in the working directory is read first, except under test.

use std::path::PathBuf;

use tutoria_core::logging_facility::Profile;

pub const ENV_DB: &str = "TUTORIA_DB";
pub const ENV_LOG_FORMAT: &str = "TUTORIA_LOG_FORMAT";
pub const DEFAULT_DB: &str = ".tutoria/store.db";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Empty value for {0}")]
    EmptyValue(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub db_path: PathBuf,
    pub log_profile: Profile,
}

impl CliConfig {
    /// Resolve from flags and the process environment
    pub fn resolve(
        db_flag: Option<PathBuf>,
        log_flag: Option<String>,
    ) -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::resolve_with(db_flag, log_flag, |key| std::env::var(key).ok())
    }

    fn resolve_with(
        db_flag: Option<PathBuf>,
        log_flag: Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let db_path = match db_flag {
            Some(path) => path,
            None => match env(ENV_DB) {
                Some(value) if value.trim().is_empty() => {
                    return Err(ConfigError::EmptyValue(ENV_DB.to_string()))
                }
                Some(value) => PathBuf::from(value),
                None => PathBuf::from(DEFAULT_DB),
            },
        };
        if db_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyValue("--db".to_string()));
        }

        let (source, format) = match log_flag {
            Some(format) => ("--log-format", format),
            None => (
                ENV_LOG_FORMAT,
                env(ENV_LOG_FORMAT).unwrap_or_else(|| "pretty".to_string()),
            ),
        };
        let log_profile = match format.parse::<Profile>() {
            Ok(Profile::Test) | Err(_) => {
                return Err(ConfigError::InvalidValue(
                    source.to_string(),
                    format!("'{}' is not one of pretty, json", format),
                ))
            }
            Ok(profile) => profile,
        };

        Ok(Self {
            db_path,
            log_profile,
        })
    }
}
