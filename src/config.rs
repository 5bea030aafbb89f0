//! Run configuration derived from CLI arguments
//!
//! Registry endpoints, timeout, and worker-pool size are plain values
//! handed to the adapters and the orchestrator at construction.

use crate::cli::CliArgs;
use crate::error::ConfigError;
use crate::registry::{DEFAULT_TIMEOUT, NPM_REGISTRY_URL, PYPI_API_URL};
use std::time::Duration;

/// Default number of concurrent registry requests
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Validated run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the PyPI JSON API, without trailing slash
    pub pypi_url: String,
    /// Base URL of the npm registry, without trailing slash
    pub npm_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum concurrent registry requests
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pypi_url: PYPI_API_URL.to_string(),
            npm_url: NPM_REGISTRY_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl Config {
    /// Build and validate configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        if args.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency {
                value: args.concurrency,
            });
        }
        if args.timeout == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(Self {
            pypi_url: normalize_url(&args.pypi_url)?,
            npm_url: normalize_url(&args.npm_url)?,
            timeout: Duration::from_secs(args.timeout),
            concurrency: args.concurrency,
        })
    }

    /// Set both registry base URLs (for pointing at a mirror or test server)
    pub fn with_registry_urls(mut self, pypi_url: &str, npm_url: &str) -> Self {
        self.pypi_url = pypi_url.trim_end_matches('/').to_string();
        self.npm_url = npm_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the worker-pool size
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

fn normalize_url(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl {
            value: value.to_string(),
        });
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
