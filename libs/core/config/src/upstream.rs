//! Settings for third-party HTTP APIs the services call out to.

use crate::{ConfigError, env_or_default, env_parse_or};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Base URL and request deadline of one upstream API
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl UpstreamConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Reads `{PREFIX}_URL` and `{PREFIX}_TIMEOUT_SECS`.
    ///
    /// The URL falls back to `default_url`, the timeout to 10 seconds.
    pub fn from_env_with_prefix(prefix: &str, default_url: &str) -> Result<Self, ConfigError> {
        let base_url = env_or_default(&format!("{prefix}_URL"), default_url);
        let timeout_secs = env_parse_or(&format!("{prefix}_TIMEOUT_SECS"), DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
