use std::env;
use std::time::Duration;

use crate::api::API_BASE_URL;

pub const ENV_API_KEY: &str = "SUPERHERO_API_KEY";
pub const ENV_API_URL: &str = "SUPERHERO_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "SUPERHERO_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    /// `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: API_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source. A missing key is not an
    /// error here; the catalog rejects the request later.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY).unwrap_or_else(|| {
            log::warn!("{ENV_API_KEY} is not set, requests will be rejected");
            String::new()
        });

        let base_url = lookup(ENV_API_URL)
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| API_BASE_URL.to_string());

        let timeout = lookup(ENV_TIMEOUT_SECS).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(e) => {
                log::warn!("ignoring {ENV_TIMEOUT_SECS}={raw:?}: {e}");
                None
            }
        });

        Self {
            api_key,
            base_url,
            timeout,
        }
    }
}
