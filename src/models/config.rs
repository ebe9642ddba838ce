//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

use crate::controller::{DEFAULT_DEBOUNCE, ListConfig};
use crate::domain::filter::DEFAULT_PAGE_SIZE;
use crate::domain::types::UserId;

#[derive(Clone, Debug, Deserialize)]
/// Settings for talking to the bookstore backend.
pub struct AppConfig {
    /// Backend origin; resources live under `{api_base_url}/api/`.
    pub api_base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// User whose cart is loaded at start-up.
    #[serde(default)]
    pub user_id: Option<UserId>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE.as_millis() as u64
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    pub fn list_config(&self) -> ListConfig {
        ListConfig {
            page_size: self.page_size,
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use config::{Config, File, FileFormat};

    use super::*;

    fn load(yaml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults_fill_missing_settings() {
        let config = load("api_base_url: http://localhost:5000");

        assert_eq!(config.page_size, 10);
        assert_eq!(config.list_config().debounce, Duration::from_millis(500));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.user_id, None);
    }

    #[test]
    fn explicit_settings_override_defaults() {
        let config = load(
            "api_base_url: http://books.local\npage_size: 25\ndebounce_ms: 300\nuser_id: 7\n",
        );

        assert_eq!(config.list_config().page_size, 25);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.user_id.map(UserId::get), Some(7));
    }
}
