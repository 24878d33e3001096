use crate::errors::ConfigError;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub port: u16,
    pub include_comments: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            port: DEFAULT_PORT,
            include_comments: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable lookup, so tests never touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("APP_DATA_DIR").filter(|value| !value.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup("PORT") {
            config.port = raw
                .trim()
                .parse::<u16>()
                .map_err(|err| ConfigError::InvalidEnvVar {
                    var: "PORT".to_string(),
                    reason: err.to_string(),
                })?;
        }

        if let Some(raw) = lookup("REPORT_INCLUDE_COMMENTS") {
            config.include_comments = parse_flag(&raw).ok_or_else(|| ConfigError::InvalidEnvVar {
                var: "REPORT_INCLUDE_COMMENTS".to_string(),
                reason: format!("expected true/false, got {raw:?}"),
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
