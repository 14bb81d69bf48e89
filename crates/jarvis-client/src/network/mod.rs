mod api;
mod reply;

pub use reply::Reply;

use jarvis_protocol::{error_detail, error_detail_from_slice, RegisteredUser, TokenResponse};
use reqwest::{StatusCode, Url};

use crate::config::ClientConfig;
use crate::error::{AuthError, Result};
use crate::state::{Credentials, RegistrationPayload};

/// A login the server accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    /// Token to persist, if the server handed one out
    pub token: Option<String>,
}

/// HTTP side of the two auth endpoints.
///
/// Keeps a cookie store so the backend's session cookie survives the login.
/// Redirects are not followed; a 3xx reaches `interpret_login` as a rejection.
#[derive(Clone)]
pub struct NetworkClient {
    http: reqwest::Client,
    login_url: Url,
    register_url: Url,
    auth_cookie: String,
}

impl NetworkClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            http,
            login_url: config.login_url()?,
            register_url: config.register_url()?,
            auth_cookie: config.auth_cookie.clone(),
        })
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginSuccess> {
        tracing::info!("Logging in as {}", credentials.email);

        let reply = api::post_form(&self.http, &self.login_url, &credentials.to_form()).await?;
        interpret_login(&reply, &self.auth_cookie)
    }

    pub async fn register(&self, payload: &RegistrationPayload) -> Result<RegisteredUser> {
        tracing::info!("Registering {} <{}>", payload.username, payload.email);

        let reply = api::post_json(&self.http, &self.register_url, &payload.to_request()).await?;
        interpret_register(&reply)
    }
}

/// Decide whether a login reply is a success.
///
/// 204 is success (the token, if any, rides in `auth_cookie`). Any other 2xx
/// must carry a JSON body with `access_token`. Everything else is a rejection.
pub fn interpret_login(reply: &Reply, auth_cookie: &str) -> Result<LoginSuccess> {
    if reply.status == StatusCode::NO_CONTENT {
        return Ok(LoginSuccess {
            token: reply.cookie(auth_cookie).map(String::from),
        });
    }

    if reply.status.is_success() {
        let body: serde_json::Value = serde_json::from_slice(&reply.body)?;
        let token = TokenResponse::from_value(&body).ok_or(AuthError::MissingToken)?;
        return Ok(LoginSuccess {
            token: Some(token.access_token),
        });
    }

    // Non-JSON error pages are shown as-is
    let detail = match serde_json::from_slice::<serde_json::Value>(&reply.body) {
        Ok(body) => error_detail(&body),
        Err(_) => reply.text(),
    };

    Err(AuthError::Rejected {
        status: reply.status.as_u16(),
        detail,
    })
}

/// 2xx is success whatever the body holds; the echoed user is best-effort.
pub fn interpret_register(reply: &Reply) -> Result<RegisteredUser> {
    if reply.status.is_success() {
        let user = serde_json::from_slice(&reply.body).unwrap_or_else(|e| {
            tracing::debug!("Registration reply had no readable user: {}", e);
            RegisteredUser::default()
        });
        return Ok(user);
    }

    Err(AuthError::Rejected {
        status: reply.status.as_u16(),
        detail: error_detail_from_slice(&reply.body),
    })
}
