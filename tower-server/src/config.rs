//! Server configuration from environment variables
//!
//! | Variable                | Default                               |
//! |-------------------------|---------------------------------------|
//! | `API_PORT`              | `8080`                                |
//! | `UPSTREAM_MODE`         | `http` (`offline` serves local pools) |
//! | `UPSTREAM_BASE_URL`     | `https://games-test.datsteam.dev/api` |
//! | `AUTH_TOKEN`            | required in `http` mode               |
//! | `UPSTREAM_TIMEOUT_SECS` | `10`                                  |
//! | `GAME_CONFIG_PATH`      | unset (built-in game defaults)        |
//! | `LOG_LEVEL`             | `info`                                |

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_PORT: u16 = 8080;
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://games-test.datsteam.dev/api";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
pub const AUTH_TOKEN_ENV: &str = "AUTH_TOKEN";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ServerConfigError {
    #[error("Authentication token not found. Please set the {0} environment variable.")]
    MissingAuthToken(&'static str),
    #[error("Invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamMode {
    Http,
    Offline,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub upstream_mode: UpstreamMode,
    pub upstream_base_url: String,
    pub auth_token: Option<String>,
    pub upstream_timeout: Duration,
    pub game_config_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_API_PORT,
            upstream_mode: UpstreamMode::Http,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            auth_token: None,
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            game_config_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("API_PORT") {
            Some(raw) => raw.parse().map_err(|_| ServerConfigError::Invalid {
                var: "API_PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        let upstream_mode = match lookup("UPSTREAM_MODE").as_deref() {
            None | Some("http") => UpstreamMode::Http,
            Some("offline") => UpstreamMode::Offline,
            Some(other) => {
                return Err(ServerConfigError::Invalid {
                    var: "UPSTREAM_MODE",
                    value: other.to_string(),
                })
            }
        };

        let auth_token = lookup(AUTH_TOKEN_ENV).filter(|t| !t.is_empty());
        if upstream_mode == UpstreamMode::Http && auth_token.is_none() {
            return Err(ServerConfigError::MissingAuthToken(AUTH_TOKEN_ENV));
        }

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.parse().map_err(|_| {
                ServerConfigError::Invalid {
                    var: "UPSTREAM_TIMEOUT_SECS",
                    value: raw,
                }
            })?),
            None => defaults.upstream_timeout,
        };

        Ok(Self {
            port,
            upstream_mode,
            upstream_base_url: lookup("UPSTREAM_BASE_URL").unwrap_or(defaults.upstream_base_url),
            auth_token,
            upstream_timeout,
            game_config_path: lookup("GAME_CONFIG_PATH").map(PathBuf::from),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }
}
