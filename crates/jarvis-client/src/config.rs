//! Client configuration
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `JARVIS_*` environment variables (a `.env` file is read first).

use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::Deserialize;

use crate::error::{AuthError, Result};

const DEFAULT_CONFIG_FILE: &str = "jarvis.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub server_url: String,
    pub login_path: String,
    pub register_path: String,
    pub post_login_destination: String,
    /// Storage key the access token is written under
    pub token_key: String,
    /// Cookie the backend sets on a 204 login
    pub auth_cookie: String,
    pub storage_path: Option<PathBuf>,
    pub open_browser: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8000".to_string(),
            login_path: jarvis_protocol::LOGIN_PATH.to_string(),
            register_path: jarvis_protocol::REGISTER_PATH.to_string(),
            post_login_destination: "/".to_string(),
            token_key: "access_token".to_string(),
            auth_cookie: "bonds".to_string(),
            storage_path: None,
            open_browser: false,
        }
    }
}

impl ClientConfig {
    /// Load from `.env`, the config file and the environment.
    ///
    /// The file is `$JARVIS_CONFIG` when set, otherwise `jarvis.toml` in the
    /// working directory. A missing file is not an error.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let file = std::env::var("JARVIS_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let builder = Self::builder(Some(file.as_path()))?
            .add_source(config::Environment::with_prefix("JARVIS").try_parsing(true));

        Self::finish(builder)
    }

    /// Load from a single file on top of the defaults, ignoring the environment.
    pub fn load_file(path: &Path) -> Result<Self> {
        Self::finish(Self::builder(Some(path))?)
    }

    fn builder(
        file: Option<&Path>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("server_url", defaults.server_url)?
            .set_default("login_path", defaults.login_path)?
            .set_default("register_path", defaults.register_path)?
            .set_default("post_login_destination", defaults.post_login_destination)?
            .set_default("token_key", defaults.token_key)?
            .set_default("auth_cookie", defaults.auth_cookie)?
            .set_default("open_browser", defaults.open_browser)?;

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        Ok(builder)
    }

    fn finish(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config: Self = builder.build()?.try_deserialize()?;

        // Fail at startup rather than on the first submit
        config.login_url()?;
        config.register_url()?;
        config.destination_url()?;

        tracing::debug!("Loaded client config for {}", config.server_url);
        Ok(config)
    }

    pub fn login_url(&self) -> Result<Url> {
        self.endpoint(&self.login_path)
    }

    pub fn register_url(&self) -> Result<Url> {
        self.endpoint(&self.register_path)
    }

    /// Where a successful login sends the user
    pub fn destination_url(&self) -> Result<Url> {
        self.endpoint(&self.post_login_destination)
    }

    /// Token storage file, falling back to the platform data directory
    pub fn storage_file(&self) -> Option<PathBuf> {
        self.storage_path.clone().or_else(|| {
            dirs::data_local_dir().map(|p| p.join("jarvis").join("storage.json"))
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.server_url.trim_end_matches('/');
        let joined = if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        };

        Url::parse(&joined).map_err(|e| AuthError::InvalidUrl(format!("{}: {}", joined, e)))
    }
}
