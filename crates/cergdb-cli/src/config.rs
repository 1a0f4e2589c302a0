//! Connection configuration for the CERGDB CLI
//!
//! Values come from command-line flags, `CERGDB_*` environment variables or a
//! `.env` file in the working directory (loaded by `main`).

use crate::api::endpoints;
use crate::error::{CliError, Result};

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Prefix of every environment variable read by the CLI.
pub const ENV_PREFIX: &str = "CERGDB";

/// Default server host
pub const DEFAULT_SERVER: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 4000;

/// https unless `--tls false` is given
pub const DEFAULT_TLS: bool = true;

/// Default output file for `retrieve`
pub const DEFAULT_RETRIEVE_OUTPUT: &str = "all_data.json";

/// Account used by `adduser` unless another administrator is named
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Where and how to reach the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,

    pub port: u16,

    /// Use https instead of http
    pub tls: bool,

    /// Verify the server certificate when `tls` is on
    pub tls_verify: bool,

    /// Path prefix in front of every endpoint (may be empty)
    pub api_root: String,
}

impl ConnectionConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_tls(mut self, tls: bool) -> Self {
        self.tls = tls;
        self
    }

    pub fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    /// Check the settings before any request is made
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(CliError::config("Server host is empty"));
        }
        if self.host.contains("://") {
            return Err(CliError::config(format!(
                "Server host '{}' must not include a scheme; use --tls to choose https",
                self.host
            )));
        }
        if self.port == 0 {
            return Err(CliError::config("Server port must be non-zero"));
        }
        Ok(())
    }

    /// Certificate verification only matters for https
    pub fn is_insecure(&self) -> bool {
        self.tls && !self.tls_verify
    }

    /// Base URL every endpoint path is appended to
    pub fn server_url(&self) -> String {
        endpoints::server_url(&self.host, self.port, self.tls, &self.api_root)
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER.to_string(),
            port: DEFAULT_PORT,
            tls: DEFAULT_TLS,
            tls_verify: true,
            api_root: String::new(),
        }
    }
}

/// Format a config key as its environment variable name
pub fn env_var_name(key: &str) -> String {
    format!("{}_{}", ENV_PREFIX, key.replace('-', "_").to_uppercase())
}
