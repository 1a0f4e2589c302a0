//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function. Every command
//! logs in once, issues one request and reports the server's answer.

pub mod adduser;
pub mod delete;
pub mod profile;
pub mod rename;
pub mod retrieve;
pub mod submit;

use crate::api::ApiResponse;
use crate::error::Result;
use crate::progress;
use serde_json::Value;
use std::future::Future;

/// Await a request behind a spinner and fail on a non-success status
pub(crate) async fn send<F>(message: &str, request: F) -> Result<Option<Value>>
where
    F: Future<Output = Result<ApiResponse>>,
{
    let spinner = progress::create_spinner(message);
    let response = request.await;
    spinner.finish_and_clear();
    response?.into_result()
}

/// Render a response body for the terminal
pub(crate) fn display_body(body: &Option<Value>) -> String {
    match body {
        Some(value) => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
        None => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use serde_json::json;

    #[tokio::test]
    async fn test_send_passes_success_through() {
        let body = send("Testing...", async {
            Ok::<_, CliError>(ApiResponse::from_parts(200, br#"{"ok":true}"#))
        })
        .await
        .unwrap();
        assert_eq!(body, Some(json!({"ok": true})));
    }

    #[tokio::test]
    async fn test_send_turns_failure_into_error() {
        let err = send("Testing...", async { Ok::<_, CliError>(ApiResponse::from_parts(500, b"")) })
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::RequestFailed { status: 500, .. }));
    }

    #[test]
    fn test_display_body() {
        assert_eq!(display_body(&None), "null");
        assert!(display_body(&Some(json!({"id": "x1"}))).contains("\"id\": \"x1\""));
    }
}
