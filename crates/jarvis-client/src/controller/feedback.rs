use reqwest::Url;

use crate::error::AuthError;
use crate::state::FormKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Failure,
    /// Submission was not attempted
    Notice,
}

/// The single user-facing message a submission ends with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub form: FormKind,
    pub severity: Severity,
    pub message: String,
}

impl Acknowledgment {
    pub fn success(form: FormKind) -> Self {
        let message = match form {
            FormKind::Login => "Login successful",
            FormKind::Signup => "Signup successful, please login.",
        };

        Self {
            form,
            severity: Severity::Success,
            message: message.to_string(),
        }
    }

    pub fn failure(form: FormKind, error: &AuthError) -> Self {
        let message = match (error, form) {
            (AuthError::Rejected { detail: Some(detail), .. }, _) => {
                format!("{} failed: {}", form, detail)
            }
            (AuthError::Rejected { detail: None, .. }, FormKind::Login) => {
                "Login failed".to_string()
            }
            (AuthError::Rejected { detail: None, .. }, FormKind::Signup) => {
                "Signup failed: Error".to_string()
            }
            (AuthError::InFlight(_), _) => {
                return Self {
                    form,
                    severity: Severity::Notice,
                    message: error.to_string(),
                };
            }
            _ => format!("{} error: {}", form, error),
        };

        Self {
            form,
            severity: Severity::Failure,
            message,
        }
    }
}

/// Surfaces acknowledgments to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, ack: Acknowledgment);
}

/// Moves the user on after a successful login
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: &Url);
}

/// Opens the destination in the system browser
#[derive(Debug, Clone, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, destination: &Url) {
        if let Err(e) = open::that(destination.as_str()) {
            tracing::error!("Failed to open {}: {}", destination, e);
        }
    }
}
