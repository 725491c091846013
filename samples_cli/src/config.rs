//! Runtime settings resolved from flags and the environment.

use std::time::Duration;

use anyhow::{bail, Result};

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "SAMPLES_API_URL";
/// Environment variable holding the per-request timeout in seconds.
pub const TIMEOUT_ENV: &str = "SAMPLES_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
}

impl Settings {
    /// Resolves settings, preferring `--base-url` over the environment.
    pub fn resolve(base_url_flag: Option<&str>) -> Result<Self> {
        let env_url = std::env::var(BASE_URL_ENV).ok();
        let timeout_secs = env_u64(TIMEOUT_ENV, DEFAULT_TIMEOUT_SECS);
        Self::from_parts(base_url_flag, env_url.as_deref(), timeout_secs)
    }

    fn from_parts(flag: Option<&str>, env_url: Option<&str>, timeout_secs: u64) -> Result<Self> {
        let base_url = match flag.or(env_url).map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => bail!(
                "No API base URL given. Pass --base-url or set {}",
                BASE_URL_ENV
            ),
        };
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            bail!("Base URL must start with http:// or https://: {}", base_url);
        }
        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs.max(1)),
        })
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}
