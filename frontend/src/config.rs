//! Runtime configuration served by the static host as `/config.json`.

use gloo_net::http::Request;
use serde::Deserialize;

const CONFIG_PATH: &str = "/config.json";
const FALLBACK_API_URL: &str = "/api/";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            log_level: default_log_level(),
        }
    }
}

/// API base baked in at compile time, if any.
fn default_api_url() -> String {
    option_env!("WEZAWIRE_API_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(FALLBACK_API_URL)
        .to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl RuntimeConfig {
    /// Fetches `/config.json`, falling back to the defaults when the file is
    /// missing or malformed (e.g. under `trunk serve`).
    pub async fn load() -> Self {
        let response = match Request::get(CONFIG_PATH).send().await {
            Ok(response) if response.ok() => response,
            _ => return Self::default(),
        };
        match response.json::<RuntimeConfig>().await {
            Ok(config) => config.normalized(),
            Err(_) => Self::default(),
        }
    }

    fn normalized(mut self) -> Self {
        if self.api_url.trim().is_empty() {
            self.api_url = default_api_url();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn blank_api_url_is_replaced() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"api_url": " ", "log_level": "debug"}"#).unwrap();
        let config = config.normalized();
        assert_eq!(config.api_url, default_api_url());
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn served_values_win() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"api_url": "https://api.wezawire.com/api/"}"#).unwrap();
        assert_eq!(config.normalized().api_url, "https://api.wezawire.com/api/");
    }
}
