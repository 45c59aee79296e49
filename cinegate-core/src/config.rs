// Copyright 2025 Cinegate Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Gateway configuration.
//!
//! The upstream base URL, identity headers, and signing secret are explicit
//! configuration so a deployment can point at a different environment or
//! rotate the secret without code changes. Load order: built-in defaults,
//! then an optional TOML file, then `CINEGATE_*` environment variables,
//! then CLI overrides applied by the binary.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upstream gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Upstream API base URL, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent sent on every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Device identifier: sent as the `X-Device` header and prepended to
    /// every signed message.
    #[serde(default = "default_device_id")]
    pub device_id: String,

    /// Shared secret used as the HMAC key for request signatures.
    #[serde(default = "default_secret_key")]
    pub secret_key: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://www.cgv.vn/en".to_string()
}

fn default_user_agent() -> String {
    "CGV Cinema/2.9.4 (iPhone; iOS 18.3.1; Scale/3.00)".to_string()
}

fn default_device_id() -> String {
    "iOS_18.3_2.9.4".to_string()
}

fn default_secret_key() -> String {
    "juBDKUIb9C8vfbV171hdMHwSzxo=".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            device_id: default_device_id(),
            secret_key: default_secret_key(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply `CINEGATE_*` environment variable overrides.
    ///
    /// Supported variables:
    /// - CINEGATE_BASE_URL: upstream base URL
    /// - CINEGATE_USER_AGENT: User-Agent header value
    /// - CINEGATE_DEVICE_ID: device identifier (header + signature prefix)
    /// - CINEGATE_SECRET_KEY: HMAC signing secret
    /// - CINEGATE_REQUEST_TIMEOUT: per-request timeout in seconds
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("CINEGATE_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(ua) = std::env::var("CINEGATE_USER_AGENT") {
            self.user_agent = ua;
        }
        if let Ok(device) = std::env::var("CINEGATE_DEVICE_ID") {
            self.device_id = device;
        }
        if let Ok(secret) = std::env::var("CINEGATE_SECRET_KEY") {
            self.secret_key = secret;
        }
        if let Ok(timeout) = std::env::var("CINEGATE_REQUEST_TIMEOUT") {
            if let Ok(val) = timeout.parse() {
                self.request_timeout_secs = val;
            }
        }
    }

    /// Load from an optional file path, then apply environment overrides.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("base_url must not be empty");
        }
        if self.base_url.ends_with('/') {
            anyhow::bail!("base_url must not end with a trailing slash");
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must be an http(s) URL: {}", self.base_url);
        }
        if self.secret_key.is_empty() {
            anyhow::bail!("secret_key must not be empty");
        }
        if self.device_id.is_empty() {
            anyhow::bail!("device_id must not be empty");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = GatewayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, "https://www.cgv.vn/en");
        assert_eq!(config.device_id, "iOS_18.3_2.9.4");
    }

    #[test]
    fn trailing_slash_rejected() {
        let config = GatewayConfig {
            base_url: "https://example.com/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_secret_rejected() {
        let config = GatewayConfig {
            secret_key: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"https://staging.example.com/en\"").unwrap();
        let config = GatewayConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "https://staging.example.com/en");
        assert_eq!(config.device_id, "iOS_18.3_2.9.4");
        assert_eq!(config.request_timeout_secs, 30);
    }
}
