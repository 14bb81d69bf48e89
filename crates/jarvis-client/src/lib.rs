//! JaRvis client library
//!
//! Login and signup against the JaRvis auth backend: form reading, the two
//! HTTP exchanges, token storage and the desktop front-end driving them.

pub mod config;
pub mod controller;
pub mod error;
pub mod network;
pub mod state;
pub mod ui;

pub use config::ClientConfig;
pub use controller::AuthController;
pub use error::{AuthError, Result};
