use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login route of the JWT auth backend
pub const LOGIN_PATH: &str = "/auth/jwt/login";

/// Registration route
pub const REGISTER_PATH: &str = "/auth/register";

/// Form-encoded login body.
///
/// The backend follows the OAuth2 password form, so `username` carries the
/// email address the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// JSON registration body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Bearer token returned by the login route when it answers with a body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl TokenResponse {
    /// Pull the access token out of an arbitrary JSON body.
    ///
    /// Returns `None` unless `access_token` is present and is a non-empty string.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let access_token = value
            .get("access_token")?
            .as_str()
            .filter(|t| !t.is_empty())?
            .to_string();
        let token_type = value
            .get("token_type")
            .and_then(|t| t.as_str())
            .map(String::from)
            .unwrap_or_else(default_token_type);

        Some(Self {
            access_token,
            token_type,
        })
    }
}

/// User record echoed back by a successful registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisteredUser {
    pub id: Option<Uuid>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
}
