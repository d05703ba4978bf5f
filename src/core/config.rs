//! Application configuration.
//!
//! The server loads [`Config`] with `Config::from_env()` after calling
//! `dotenvy::dotenv()`. The part the browser needs is [`ClientConfig`], which
//! the server embeds in the page shell and the hydrated client reads back.

use serde::{Deserialize, Serialize};

use super::forms::LoginMode;

/// `id` of the `<script>` element carrying the client configuration
pub const CLIENT_CONFIG_ELEMENT_ID: &str = "client-config";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be `true` or `false`, got `{value}`")]
    InvalidBool { name: &'static str, value: String },
}

/// Settings shared with the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Origin of the auth service; empty for same origin
    pub auth_base_url: String,
    pub login_mode: LoginMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_base_url: String::new(),
            login_mode: LoginMode::EmailOrUsername,
        }
    }
}

impl ClientConfig {
    /// Payload of the configuration `<script>` tag
    pub fn to_script_json(&self) -> String {
        // `</` would close the script element early
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_string())
            .replace("</", "<\\/")
    }

    pub fn from_script_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|err| {
            leptos::logging::warn!("Invalid client config, using defaults: {}", err);
            Self::default()
        })
    }

    /// Read the configuration embedded by the server
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CLIENT_CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content())
            .map(|json| Self::from_script_json(&json))
            .unwrap_or_default()
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external auth service
    /// Example: https://auth.example.com
    pub auth_base_url: Option<String>,

    /// Whether the auth service accepts usernames at sign-in
    pub username_login: bool,

    /// Database used by the auth service (reported, never connected to here)
    pub database_url: Option<String>,

    /// Secret of the auth service (reported, never used here)
    pub auth_secret: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let username_login = match lookup("AUTH_USERNAME_LOGIN") {
            None => true,
            Some(value) => parse_bool("AUTH_USERNAME_LOGIN", &value)?,
        };

        Ok(Self {
            auth_base_url: lookup("AUTH_BASE_URL").filter(|v| !v.is_empty()),
            username_login,
            database_url: lookup("DATABASE_URL"),
            auth_secret: lookup("AUTH_SECRET"),
        })
    }

    pub fn has_database(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn has_auth_secret(&self) -> bool {
        self.auth_secret.is_some()
    }

    pub fn client(&self) -> ClientConfig {
        ClientConfig {
            auth_base_url: self.auth_base_url.clone().unwrap_or_default(),
            login_mode: if self.username_login {
                LoginMode::EmailOrUsername
            } else {
                LoginMode::EmailOnly
            },
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn test_defaults_with_empty_environment() {
        let config = load(&[]).unwrap();

        assert!(config.auth_base_url.is_none());
        assert!(config.username_login);
        assert!(!config.has_database());
        assert!(!config.has_auth_secret());
        assert_eq!(config.client(), ClientConfig::default());
    }

    #[test]
    fn test_all_variables() {
        let config = load(&[
            ("AUTH_BASE_URL", "https://auth.example.com"),
            ("AUTH_USERNAME_LOGIN", "false"),
            ("DATABASE_URL", "postgres://localhost/app"),
            ("AUTH_SECRET", "s3cret"),
        ])
        .unwrap();

        assert!(config.has_database());
        assert!(config.has_auth_secret());
        assert_eq!(
            config.client(),
            ClientConfig {
                auth_base_url: "https://auth.example.com".to_string(),
                login_mode: LoginMode::EmailOnly,
            }
        );
    }

    #[test]
    fn test_empty_base_url_means_same_origin() {
        let config = load(&[("AUTH_BASE_URL", "")]).unwrap();

        assert!(config.auth_base_url.is_none());
    }

    #[test]
    fn test_bool_spellings() {
        assert!(load(&[("AUTH_USERNAME_LOGIN", " YES ")]).unwrap().username_login);
        assert!(!load(&[("AUTH_USERNAME_LOGIN", "0")]).unwrap().username_login);
    }

    #[test]
    fn test_invalid_bool_is_rejected() {
        let err = load(&[("AUTH_USERNAME_LOGIN", "maybe")]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "AUTH_USERNAME_LOGIN must be `true` or `false`, got `maybe`"
        );
    }

    #[test]
    fn test_client_config_script_payload() {
        let config = ClientConfig {
            auth_base_url: "https://auth.example.com/</script>".to_string(),
            login_mode: LoginMode::EmailOnly,
        };

        let json = config.to_script_json();

        assert!(!json.contains("</"));
        assert!(json.contains(r#""login_mode":"email-only""#));
        assert_eq!(ClientConfig::from_script_json(&json), config);
    }

    #[test]
    fn test_invalid_client_config_falls_back_to_default() {
        assert_eq!(ClientConfig::from_script_json("not json"), ClientConfig::default());
    }
}
