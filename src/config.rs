//! Service configuration.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Root configuration. Every field has a default, so an absent or empty
/// config file yields a working service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Address the management API listens on.
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,

    /// Base URL the feed catalog is resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-feed fetch timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum accepted feed body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// How many feed fetches may be in flight at once.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            max_body_bytes: default_max_body_bytes(),
            concurrency: default_concurrency(),
        }
    }
}

fn default_listen() -> SocketAddr {
    ([127, 0, 0, 1], 3000).into()
}

fn default_base_url() -> String {
    crate::catalog::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_max_body_bytes() -> usize {
    8 * 1024 * 1024
}

fn default_concurrency() -> usize {
    16
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("base_url must not be empty");
        }
        if self.timeout_ms == 0 {
            anyhow::bail!("timeout_ms must be greater than zero");
        }
        if self.concurrency == 0 {
            anyhow::bail!("concurrency must be greater than zero");
        }
        Ok(())
    }

    /// Per-feed fetch timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Generate example configuration YAML.
    pub fn example() -> String {
        r#"# Blocklist Registry Configuration

listen: "127.0.0.1:3000"       # Management API address

# Feed ingestion
base_url: "https://raw.githubusercontent.com/firehol/blocklist-ipsets/master/"
timeout_ms: 30000              # Per-feed fetch timeout
max_body_bytes: 8388608        # Per-feed body cap (8 MiB)
concurrency: 16                # Concurrent feed fetches
"#
        .to_string()
    }
}
