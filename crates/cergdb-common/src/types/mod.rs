//! Request and response payloads exchanged with the CERGDB server

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category assigned to a submission when none is given.
pub const DEFAULT_CATEGORY: &str = "HW:LWC:NIST:finalist";

/// One row of timing results, keyed by CSV column name.
pub type TimingRow = Map<String, Value>;

/// A benchmark entry as accepted by the `submit` endpoint.
///
/// `timing` and `synthesis` are left out of the JSON when absent so that the
/// server keeps any values it already stores for the same `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Unique identifier, chosen by the submitter
    pub id: String,

    pub name: String,

    pub category: String,

    /// Free-form nested metadata (design description, synthesis settings)
    #[serde(default)]
    pub metadata: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<Vec<TimingRow>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthesis: Option<Value>,
}

impl Submission {
    /// Create a submission with the default category and no results attached
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: DEFAULT_CATEGORY.to_string(),
            metadata: Map::new(),
            timing: None,
            synthesis: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Body of `login` and `register` requests.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful `login` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRequest {
    pub current_id: String,
    pub new_id: String,
}

/// Paging and filtering for `retrieve`, sent as URL query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieveQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl RetrieveQuery {
    pub fn is_empty(&self) -> bool {
        self.limit.is_none() && self.offset.is_none() && self.filter.is_none()
    }
}
