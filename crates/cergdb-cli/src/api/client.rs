//! HTTP API client for the CERGDB server
//!
//! The client owns the session headers. `login` is the only call that changes
//! them: on success it adds `Authorization: Bearer <token>`, which every later
//! request made through the same client then carries.

use crate::api::{endpoints, types::*};
use crate::config::{env_var_name, ConnectionConfig};
use crate::credentials;
use crate::error::{CliError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

/// API client for the CERGDB server
pub struct ApiClient {
    http: Client,
    base_url: String,
    headers: HeaderMap,
    username: Option<String>,
    password: Option<String>,
    interactive: bool,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &ConnectionConfig) -> Result<Self> {
        config.validate()?;

        if config.is_insecure() {
            warn!(
                host = %config.host,
                "TLS certificate verification is disabled; the server's identity is not checked"
            );
        }

        let http = Client::builder()
            .user_agent(format!("cergdb/{}", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(config.is_insecure())
            .build()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Self {
            http,
            base_url: config.server_url(),
            headers,
            username: None,
            password: None,
            interactive: true,
        })
    }

    /// Set default credentials used by `login` when none are passed
    pub fn with_credentials(mut self, username: Option<String>, password: Option<String>) -> Self {
        self.username = username;
        self.password = password;
        self
    }

    /// Allow or forbid falling back to terminal prompts
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn is_authenticated(&self) -> bool {
        self.headers.contains_key(AUTHORIZATION)
    }

    /// Authenticate and store the bearer token for later calls
    ///
    /// Credentials are resolved from the arguments, then the client defaults,
    /// then a prompt (interactive clients only). Headers are left untouched
    /// when this returns an error.
    pub async fn login(&mut self, username: Option<&str>, password: Option<&str>) -> Result<()> {
        let interactive = self.interactive;

        let email = credentials::resolve(username.map(str::to_owned), self.username.clone(), || {
            if interactive {
                credentials::prompt_username("Username:")
            } else {
                Ok(None)
            }
        })?
        .ok_or_else(|| {
            CliError::authentication(format!(
                "no username given (use --username or {})",
                env_var_name("username")
            ))
        })?;

        let password = credentials::resolve(password.map(str::to_owned), self.password.clone(), || {
            if interactive {
                credentials::prompt_password(&format!("Password for {}:", email))
            } else {
                Ok(None)
            }
        })?
        .ok_or_else(|| {
            CliError::authentication(format!(
                "no password given for '{}' (use --password or {})",
                email,
                env_var_name("password")
            ))
        })?;

        debug!(user = %email, "Logging in");
        let response = self
            .post(endpoints::LOGIN, Some(&Credentials::new(email.as_str(), password)))
            .await?;

        let token = access_token(&response)?;
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);

        info!(user = %email, "Logged in");
        Ok(())
    }

    /// GET `path` with optional query parameters
    pub async fn get<Q>(&self, path: &str, params: Option<&Q>) -> Result<ApiResponse>
    where
        Q: Serialize + ?Sized,
    {
        self.request::<Q, ()>(Method::GET, path, params, None).await
    }

    /// POST `path` with an optional JSON body
    pub async fn post<B>(&self, path: &str, json: Option<&B>) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        self.request::<(), B>(Method::POST, path, None, json).await
    }

    async fn request<Q, B>(
        &self,
        method: Method,
        path: &str,
        params: Option<&Q>,
        json: Option<&B>,
    ) -> Result<ApiResponse>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = endpoints::endpoint_url(&self.base_url, path);
        debug!(%method, %url, "Sending request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .headers(self.headers.clone());
        if let Some(params) = params {
            request = request.query(params);
        }
        if let Some(json) = json {
            request = request.json(json);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let api_response = ApiResponse::from_parts(status, &bytes);

        if api_response.success {
            debug!(%method, %url, status, "Request succeeded");
        } else {
            warn!(%method, %url, status, body = %api_response.body_text(), "Request failed");
        }

        Ok(api_response)
    }

    /// Submit (insert or update) a benchmark entry
    pub async fn submit(&self, submission: &Submission) -> Result<ApiResponse> {
        self.post(endpoints::SUBMIT, Some(submission)).await
    }

    /// Fetch stored entries; the query is passed as URL parameters
    pub async fn retrieve(&self, query: &RetrieveQuery) -> Result<ApiResponse> {
        let params = (!query.is_empty()).then_some(query);
        self.request::<RetrieveQuery, ()>(Method::POST, endpoints::RETRIEVE, params, None)
            .await
    }

    /// Delete the entry with the given id
    pub async fn delete(&self, id: &str) -> Result<ApiResponse> {
        let request = DeleteRequest { id: id.to_string() };
        self.post(endpoints::DELETE, Some(&request)).await
    }

    /// Change the id of a stored entry
    pub async fn rename(&self, current_id: &str, new_id: &str) -> Result<ApiResponse> {
        let request = RenameRequest {
            current_id: current_id.to_string(),
            new_id: new_id.to_string(),
        };
        self.post(endpoints::RENAME, Some(&request)).await
    }

    /// Register a new user; requires an administrator session
    pub async fn add_user(&self, email: &str, password: &str) -> Result<ApiResponse> {
        self.post(endpoints::REGISTER, Some(&Credentials::new(email, password)))
            .await
    }

    pub async fn get_user_profile(&self) -> Result<ApiResponse> {
        self.get::<()>(endpoints::USER_PROFILE, None).await
    }
}

/// Extract the token from a `login` response
///
/// Fails unless the status is 200, the body has no `error` field and it
/// carries a string `access_token`.
pub fn access_token(response: &ApiResponse) -> Result<String> {
    let body = response.body.as_ref();

    if !response.success {
        return Err(CliError::authentication(format!(
            "server answered {} with {}",
            response.status,
            response.body_text()
        )));
    }

    if let Some(error) = body.and_then(|b| b.get("error")) {
        return Err(CliError::authentication(format!("server reported {}", error)));
    }

    let token: TokenResponse = body
        .cloned()
        .and_then(|b| serde_json::from_value(b).ok())
        .ok_or_else(|| {
            CliError::authentication(format!(
                "no access_token in response {}",
                response.body_text()
            ))
        })?;

    Ok(token.access_token)
}

/// Username reported by `user_profile`, if present
pub fn profile_username(body: &Value) -> Option<&str> {
    body.get("username").and_then(Value::as_str)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16, body: Value) -> ApiResponse {
        ApiResponse::from_parts(status, body.to_string().as_bytes())
    }

    #[test]
    fn test_api_client_creation() {
        let config = ConnectionConfig::new("127.0.0.1", 4000).with_tls(false);
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:4000/");
        assert_eq!(client.headers().get(ACCEPT).unwrap(), "application/json");
        assert!(!client.is_authenticated());
        assert!(client.is_interactive());
    }

    #[test]
    fn test_api_client_rejects_bad_config() {
        let config = ConnectionConfig::new("", 4000);
        assert!(matches!(ApiClient::new(&config), Err(CliError::Config(_))));
    }

    #[test]
    fn test_insecure_client_builds() {
        let config = ConnectionConfig::new("localhost", 8443)
            .with_tls(true)
            .with_tls_verify(false);
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://localhost:8443/");
    }

    #[test]
    fn test_access_token_ok() {
        let token = access_token(&response(200, json!({"access_token": "tok123", "type": "Bearer"})));
        assert_eq!(token.unwrap(), "tok123");
    }

    #[test]
    fn test_access_token_rejects_error_field() {
        let resp = response(200, json!({"access_token": "tok123", "error": "boom"}));
        assert!(matches!(access_token(&resp), Err(CliError::Authentication(_))));
    }

    #[test]
    fn test_access_token_rejects_missing_token() {
        let resp = response(200, json!({"type": "Bearer"}));
        assert!(matches!(access_token(&resp), Err(CliError::Authentication(_))));

        let resp = ApiResponse::from_parts(200, b"not json");
        assert!(matches!(access_token(&resp), Err(CliError::Authentication(_))));
    }

    #[test]
    fn test_access_token_rejects_non_200() {
        let resp = response(401, json!({"access_token": "tok123"}));
        assert!(matches!(access_token(&resp), Err(CliError::Authentication(_))));
    }

    #[test]
    fn test_profile_username() {
        assert_eq!(profile_username(&json!({"username": "alice"})), Some("alice"));
        assert_eq!(profile_username(&json!({})), None);
    }

    #[tokio::test]
    async fn test_non_interactive_login_without_credentials() {
        let mut client = ApiClient::new(&ConnectionConfig::default())
            .unwrap()
            .interactive(false);

        let err = client.login(None, None).await.unwrap_err();
        assert!(matches!(err, CliError::Authentication(_)));
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn test_non_interactive_login_without_password() {
        let mut client = ApiClient::new(&ConnectionConfig::default())
            .unwrap()
            .with_credentials(Some("alice".into()), None)
            .interactive(false);

        let err = client.login(None, None).await.unwrap_err();
        assert!(err.to_string().contains("no password given for 'alice'"));
    }
}
