//! Login and signup submitters
//!
//! Each submission is one request/response exchange followed by exactly one
//! acknowledgment. A successful login also persists the token (when the
//! server sent one) and navigates to the post-login destination.

mod feedback;
mod guard;

pub use feedback::{Acknowledgment, BrowserNavigator, Navigator, Notifier, Severity};
pub use guard::{InFlight, InFlightGuard};

use std::sync::Arc;

use jarvis_protocol::RegisteredUser;
use reqwest::Url;

use crate::config::ClientConfig;
use crate::error::{AuthError, Result};
use crate::network::{LoginSuccess, NetworkClient};
use crate::state::{Credentials, FormKind, RegistrationPayload, TokenStore};

#[derive(Clone)]
pub struct AuthController {
    network: NetworkClient,
    store: Arc<dyn TokenStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    token_key: String,
    destination: Url,
    login_flight: InFlight,
    signup_flight: InFlight,
}

impl AuthController {
    pub fn new(
        config: &ClientConfig,
        store: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        Ok(Self {
            network: NetworkClient::new(config)?,
            store,
            notifier,
            navigator,
            token_key: config.token_key.clone(),
            destination: config.destination_url()?,
            login_flight: InFlight::new(),
            signup_flight: InFlight::new(),
        })
    }

    pub fn is_in_flight(&self, form: FormKind) -> bool {
        self.flight(form).is_active()
    }

    /// Token written by the most recent successful login, if any
    pub fn stored_token(&self) -> Result<Option<String>> {
        self.store.load(&self.token_key)
    }

    fn flight(&self, form: FormKind) -> &InFlight {
        match form {
            FormKind::Login => &self.login_flight,
            FormKind::Signup => &self.signup_flight,
        }
    }

    fn begin(&self, form: FormKind) -> Result<InFlightGuard> {
        self.flight(form).try_begin().ok_or_else(|| {
            tracing::warn!("Ignoring {} submit while another is pending", form);
            let err = AuthError::InFlight(form);
            self.notifier.notify(Acknowledgment::failure(form, &err));
            err
        })
    }

    pub async fn submit_login(&self, credentials: Credentials) -> Result<LoginSuccess> {
        let _guard = self.begin(FormKind::Login)?;

        match self.login(&credentials).await {
            Ok(success) => {
                tracing::info!("Login successful for {}", credentials.email);
                self.notifier.notify(Acknowledgment::success(FormKind::Login));

                tracing::info!("Navigating to {}", self.destination);
                self.navigator.navigate(&self.destination);
                Ok(success)
            }
            Err(e) => {
                tracing::error!("Login failed for {}: {}", credentials.email, e);
                self.notifier.notify(Acknowledgment::failure(FormKind::Login, &e));
                Err(e)
            }
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginSuccess> {
        let success = self.network.login(credentials).await?;

        match &success.token {
            Some(token) => {
                self.store.store(&self.token_key, token)?;
                tracing::debug!("Stored access token under {}", self.token_key);
            }
            None => tracing::debug!("Login reply carried no token"),
        }

        Ok(success)
    }

    pub async fn submit_signup(&self, payload: RegistrationPayload) -> Result<RegisteredUser> {
        let _guard = self.begin(FormKind::Signup)?;

        match self.network.register(&payload).await {
            Ok(user) => {
                tracing::info!("Registered {} (id {:?})", payload.username, user.id);
                self.notifier.notify(Acknowledgment::success(FormKind::Signup));
                Ok(user)
            }
            Err(e) => {
                tracing::error!("Signup failed for {}: {}", payload.username, e);
                self.notifier.notify(Acknowledgment::failure(FormKind::Signup, &e));
                Err(e)
            }
        }
    }
}
