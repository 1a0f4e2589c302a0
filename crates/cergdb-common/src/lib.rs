//! CERGDB Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types and logging for the CERGDB client.
//!
//! # Overview
//!
//! - **Types**: JSON payloads exchanged with the CERGDB server
//!   (submission records, login, delete/rename/retrieve requests)
//! - **Logging**: `tracing` subscriber setup used by the `cergdb` binary
//!
//! # Example
//!
//! ```no_run
//! use cergdb_common::types::Submission;
//!
//! let submission = Submission::new("ascon_v1", "Ascon v1.2");
//! println!("{}", serde_json::to_string(&submission).unwrap());
//! ```

pub mod logging;
pub mod types;

// Re-export commonly used types
pub use types::{Credentials, Submission, DEFAULT_CATEGORY};
