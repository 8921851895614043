//! Server settings read from the environment (and a `.env` file, if any).
//!
//! | Variable | Default |
//! |---|---|
//! | `WEZAWIRE_HOST` | `127.0.0.1` |
//! | `WEZAWIRE_PORT` | `8080` |
//! | `WEZAWIRE_API_URL` | `http://localhost:8000/api/` |
//! | `WEZAWIRE_LOG_LEVEL` | `info` |
//! | `WEZAWIRE_OPEN_BROWSER` | `false` |

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_API_URL: &str = "http://localhost:8000/api/";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("WEZAWIRE_PORT must be a port number, got `{0}`")]
    InvalidPort(String),
    #[error("{name} must be true or false, got `{value}`")]
    InvalidFlag { name: &'static str, value: String },
    #[error("WEZAWIRE_API_URL must not be empty")]
    EmptyApiUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_url: String,
    pub log_level: String,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            open_browser: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source; blank values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(name).map(|value| value.trim().to_string()).filter(|value| !value.is_empty());
        let defaults = Self::default();

        let port = match read("WEZAWIRE_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let open_browser = match read("WEZAWIRE_OPEN_BROWSER") {
            Some(raw) => parse_flag("WEZAWIRE_OPEN_BROWSER", &raw)?,
            None => defaults.open_browser,
        };
        let api_url = match lookup("WEZAWIRE_API_URL") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyApiUrl),
            Some(raw) => raw.trim().to_string(),
            None => defaults.api_url,
        };

        Ok(Self {
            host: read("WEZAWIRE_HOST").unwrap_or(defaults.host),
            port,
            api_url,
            log_level: read("WEZAWIRE_LOG_LEVEL").unwrap_or(defaults.log_level),
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        assert_eq!(ServerConfig::from_lookup(lookup(&[])), Ok(ServerConfig::default()));
    }

    #[test]
    fn reads_every_variable() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("WEZAWIRE_HOST", "0.0.0.0"),
            ("WEZAWIRE_PORT", "9000"),
            ("WEZAWIRE_API_URL", "https://api.wezawire.com/api/"),
            ("WEZAWIRE_LOG_LEVEL", "debug"),
            ("WEZAWIRE_OPEN_BROWSER", "yes"),
        ]))
        .unwrap();
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert_eq!(config.api_url, "https://api.wezawire.com/api/");
        assert_eq!(config.log_level, "debug");
        assert!(config.open_browser);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[("WEZAWIRE_PORT", "eighty")])),
            Err(ConfigError::InvalidPort("eighty".into()))
        );
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[("WEZAWIRE_OPEN_BROWSER", "maybe")])),
            Err(ConfigError::InvalidFlag {
                name: "WEZAWIRE_OPEN_BROWSER",
                value: "maybe".into()
            })
        );
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[("WEZAWIRE_API_URL", "  ")])),
            Err(ConfigError::EmptyApiUrl)
        );
    }
}
