//! CERGDB CLI Library
//!
//! Command-line client for the CERGDB benchmark results database.
//!
//! # Overview
//!
//! - **Submission**: Upload timing and synthesis results (`cergdb submit`)
//! - **Retrieval**: Download stored results to a JSON file (`cergdb retrieve`)
//! - **Maintenance**: Delete or rename entries (`cergdb delete`, `cergdb rename`)
//! - **Accounts**: Register users as administrator (`cergdb adduser`), show the
//!   logged-in user (`cergdb profile`)
//!
//! Every command logs in first; credentials come from flags, `CERGDB_*`
//! environment variables (also read from `.env`) or interactive prompts.

pub mod api;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod error;
pub mod progress;
pub mod submission;

// Re-export commonly used types
pub use api::{ApiClient, ApiResponse};
pub use config::ConnectionConfig;
pub use error::{CliError, Result};

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use cergdb_common::types::DEFAULT_CATEGORY;
use config::{
    DEFAULT_ADMIN_USERNAME, DEFAULT_PORT, DEFAULT_RETRIEVE_OUTPUT, DEFAULT_SERVER, DEFAULT_TLS,
};

/// CERGDB - benchmark results database client
#[derive(Parser, Debug)]
#[command(name = "cergdb")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the full command reference as Markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,

    /// Server host name or address
    #[arg(long, env = "CERGDB_SERVER", default_value = DEFAULT_SERVER, global = true)]
    pub server: String,

    /// Server port
    #[arg(long, env = "CERGDB_PORT", default_value_t = DEFAULT_PORT, global = true)]
    pub port: u16,

    /// Connect with https
    #[arg(
        long,
        env = "CERGDB_TLS",
        default_value_t = DEFAULT_TLS,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub tls: bool,

    /// Verify the server's TLS certificate (disabling this is insecure)
    #[arg(
        long,
        env = "CERGDB_TLS_VERIFY",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub tls_verify: bool,

    /// Path prefix of the API on the server
    #[arg(long, env = "CERGDB_API_ROOT", default_value = "", global = true)]
    pub api_root: String,

    /// User name (email) to log in with
    #[arg(short, long, env = "CERGDB_USERNAME", global = true)]
    pub username: Option<String>,

    /// Password to log in with
    #[arg(long, env = "CERGDB_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Never prompt; fail when a credential is missing
    #[arg(long, global = true)]
    pub non_interactive: bool,
}

impl Cli {
    /// Connection settings from the global flags
    pub fn connection(&self) -> ConnectionConfig {
        ConnectionConfig::new(self.server.clone(), self.port)
            .with_tls(self.tls)
            .with_tls_verify(self.tls_verify)
            .with_api_root(self.api_root.clone())
    }

    /// API client carrying the global credentials as defaults
    pub fn api_client(&self) -> Result<ApiClient> {
        Ok(ApiClient::new(&self.connection())?
            .with_credentials(self.username.clone(), self.password.clone())
            .interactive(!self.non_interactive))
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit benchmark results for a design
    Submit {
        /// Unique id: lower-case letters, numbers and underscores, no spaces
        #[arg(long)]
        submission_id: String,

        /// Human-readable name
        #[arg(long)]
        submission_name: String,

        /// Category of the submission
        #[arg(long, default_value = DEFAULT_CATEGORY)]
        submission_category: String,

        /// Timing results (CSV with header row)
        #[arg(long, value_name = "CSV")]
        timing_results: Option<PathBuf>,

        /// Synthesis settings (JSON object, merged into metadata)
        #[arg(long, value_name = "JSON")]
        synthesis_settings: Option<PathBuf>,

        /// Synthesis results (JSON)
        #[arg(long, value_name = "JSON")]
        synthesis_results: Option<PathBuf>,

        /// Design description (TOML, stored as metadata.design)
        #[arg(long, value_name = "TOML")]
        design_toml: Option<PathBuf>,
    },

    /// Register a new user (requires administrator credentials)
    #[command(name = "adduser")]
    AddUser {
        /// User name (email) of the new account
        #[arg(value_name = "USERNAME")]
        new_username: String,

        /// Administrator account to log in with
        #[arg(long, default_value = DEFAULT_ADMIN_USERNAME)]
        admin_username: String,

        /// Administrator password
        #[arg(long, env = "CERGDB_ADMIN_PASSWORD", hide_env_values = true)]
        admin_password: Option<String>,

        /// Password for the new account
        #[arg(long, env = "CERGDB_NEW_PASSWORD", hide_env_values = true)]
        new_password: Option<String>,
    },

    /// Download stored results to a JSON file
    Retrieve {
        /// Output file
        #[arg(short, long, default_value = DEFAULT_RETRIEVE_OUTPUT)]
        output: PathBuf,

        /// Maximum number of entries
        #[arg(long)]
        limit: Option<i32>,

        /// Number of entries to skip
        #[arg(long)]
        offset: Option<i32>,

        /// Server-side filter expression
        #[arg(long)]
        filter: Option<String>,
    },

    /// Delete a stored entry
    Delete {
        /// Id of the entry
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Change the id of a stored entry
    Rename {
        /// Current id
        current_id: String,

        /// New id
        new_id: String,
    },

    /// Show the user the credentials belong to
    Profile,
}
