//! Error types for the CERGDB CLI
//!
//! Every variant carries a user-facing message with a hint on how to fix the
//! problem. Authentication failures are the only errors raised by the API
//! client itself; ordinary request failures are reported through
//! [`crate::api::ApiResponse`] and turned into [`CliError::RequestFailed`]
//! by the commands.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// Login failed or credentials could not be resolved
    #[error("Authentication failed: {0}. Check your username and password (or CERGDB_USERNAME / CERGDB_PASSWORD).")]
    Authentication(String),

    /// The server answered with a non-success status
    #[error("Operation failed [{status}]: {body}")]
    RequestFailed { status: u16, body: String },

    /// Required input file is missing
    #[error("File not found: '{0}'. Verify the file path exists and you have read permissions.")]
    FileNotFound(String),

    /// Input file parsed but has the wrong shape, or arguments conflict
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Connection settings are invalid
    #[error("Configuration error: {0}. Check --server/--port/--api-root or the CERGDB_* environment variables.")]
    Config(String),

    /// Interactive prompt could not be shown or was cancelled
    #[error("Prompt failed: {0}. Pass the value as a flag or environment variable when running non-interactively.")]
    Prompt(#[from] inquire::InquireError),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// HTTP transport failed (connect, TLS, DNS)
    #[error("Network request failed: {0}. Check that the server is reachable and the --tls setting matches it.")]
    Http(#[from] reqwest::Error),

    /// A header value could not be built (e.g. token with control characters)
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// JSON parsing failed
    #[error("Failed to parse JSON: {0}. Check the file syntax.")]
    JsonParse(#[from] serde_json::Error),

    /// CSV parsing failed
    #[error("Failed to parse CSV: {0}. The first row must be a header row.")]
    CsvParse(#[from] csv::Error),

    /// TOML parsing failed
    #[error("Failed to parse TOML: {0}. Check the file syntax at the indicated line/column.")]
    TomlParse(#[from] toml::de::Error),
}

impl CliError {
    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Build a request failure from a status and an optional JSON body
    pub fn request_failed(status: u16, body: Option<&serde_json::Value>) -> Self {
        Self::RequestFailed {
            status,
            body: body.map_or_else(|| "<no JSON body>".to_string(), ToString::to_string),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
