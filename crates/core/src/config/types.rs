use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Adoption service endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Service base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://frontend-take-home-service.fetch.com".to_string()
}

fn default_timeout() -> u32 {
    30
}

/// Session cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Where the cached display name is stored.
    #[serde(default = "default_session_path")]
    pub path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

fn default_session_path() -> PathBuf {
    PathBuf::from("pawfinder-session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(
            config.api.base_url,
            "https://frontend-take-home-service.fetch.com"
        );
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(
            config.session.path.to_str().unwrap(),
            "pawfinder-session.json"
        );
    }

    #[test]
    fn test_deserialize_custom_api_section() {
        let toml = r#"
[api]
base_url = "http://localhost:3000"
timeout_secs = 5
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 5);
    }

    #[test]
    fn test_deserialize_custom_session_path() {
        let toml = r#"
[session]
path = "/tmp/session.json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.session.path.to_str().unwrap(), "/tmp/session.json");
    }
}
