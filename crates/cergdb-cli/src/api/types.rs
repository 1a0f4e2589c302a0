//! Response type returned by every API call
//!
//! Request payloads live in `cergdb_common::types` and are re-exported here.

use crate::error::{CliError, Result};
use serde_json::Value;

pub use cergdb_common::types::{
    Credentials, DeleteRequest, RenameRequest, RetrieveQuery, Submission, TimingRow,
    TokenResponse, DEFAULT_CATEGORY,
};

/// Outcome of a request that reached the server
///
/// `success` is true only for status 200. `body` is `None` when the response
/// was empty or not valid JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub success: bool,
    pub body: Option<Value>,
}

impl ApiResponse {
    /// Build a response from a status code and the raw body bytes
    pub fn from_parts(status: u16, bytes: &[u8]) -> Self {
        Self {
            status,
            success: status == 200,
            body: serde_json::from_slice(bytes).ok(),
        }
    }

    /// The `(success, body)` pair
    pub fn into_pair(self) -> (bool, Option<Value>) {
        (self.success, self.body)
    }

    /// Turn a failed response into [`CliError::RequestFailed`]
    pub fn into_result(self) -> Result<Option<Value>> {
        if self.success {
            Ok(self.body)
        } else {
            Err(CliError::request_failed(self.status, self.body.as_ref()))
        }
    }

    /// Body rendered for display, `null` when absent
    pub fn body_text(&self) -> String {
        self.body
            .as_ref()
            .map_or_else(|| "null".to_string(), ToString::to_string)
    }
}
