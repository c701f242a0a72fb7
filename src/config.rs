use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::nanopub::RdfFormat;

pub const DEFAULT_SERVER_BASE_URL: &str = "http://localhost:8080";

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server base URL, without the `/nanopublication` path and without a trailing slash.
    pub server_base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
    pub format: RdfFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_base_url: DEFAULT_SERVER_BASE_URL.to_string(),
            timeout_secs: Some(10),
            format: RdfFormat::Trig,
        }
    }
}

impl ClientConfig {
    pub fn from_toml_str(text: &str) -> Result<ClientConfig> {
        toml::from_str(text).context("unable to parse client config")
    }

    pub fn load(path: &Path) -> Result<ClientConfig> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        ClientConfig::from_toml_str(&text)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
