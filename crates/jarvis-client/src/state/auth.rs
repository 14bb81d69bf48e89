//! Form-reading boundary
//!
//! Submitters never look up inputs themselves. A front-end hands over its
//! named field values through [`FormFields`] and gets back a typed payload.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

use jarvis_protocol::{LoginForm, RegisterRequest};

use crate::error::{AuthError, Result};

pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_USERNAME: &str = "username";

/// Named input values of a single form
pub trait FormFields {
    fn value(&self, name: &str) -> Option<&str>;
}

impl<K, V> FormFields for HashMap<K, V>
where
    K: std::borrow::Borrow<str> + Hash + Eq,
    V: AsRef<str>,
{
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|v| v.as_ref())
    }
}

impl<K, V> FormFields for BTreeMap<K, V>
where
    K: std::borrow::Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|v| v.as_ref())
    }
}

fn require<'a>(form: &'a impl FormFields, name: &'static str) -> Result<&'a str> {
    form.value(name).ok_or_else(|| {
        tracing::error!("Form is missing the {} input", name);
        AuthError::MissingField(name)
    })
}

/// Login credentials, read fresh for each submission.
///
/// Blank values are passed through; the server decides whether they are valid.
#[derive(Clone, PartialEq, Eq)]
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

    pub fn read(form: &impl FormFields) -> Result<Self> {
        Ok(Self::new(
            require(form, FIELD_EMAIL)?,
            require(form, FIELD_PASSWORD)?,
        ))
    }

    pub fn to_form(&self) -> LoginForm {
        LoginForm {
            username: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegistrationPayload {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn read(form: &impl FormFields) -> Result<Self> {
        Ok(Self::new(
            require(form, FIELD_USERNAME)?,
            require(form, FIELD_EMAIL)?,
            require(form, FIELD_PASSWORD)?,
        ))
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for RegistrationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationPayload")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_credentials() {
        let form = HashMap::from([("email", "a@b.io"), ("password", "secret")]);
        let credentials = Credentials::read(&form).unwrap();

        assert_eq!(credentials, Credentials::new("a@b.io", "secret"));
        let login = credentials.to_form();
        assert_eq!(login.username, "a@b.io");
        assert_eq!(login.password, "secret");
    }

    #[test]
    fn test_blank_values_are_kept() {
        let form = BTreeMap::from([
            ("email".to_string(), String::new()),
            ("password".to_string(), String::new()),
        ]);
        let credentials = Credentials::read(&form).unwrap();
        assert_eq!(credentials.email, "");
        assert_eq!(credentials.password, "");
    }

    #[test]
    fn test_missing_field_is_reported() {
        let form = HashMap::from([("email", "a@b.io")]);
        let err = Credentials::read(&form).unwrap_err();
        assert!(matches!(err, AuthError::MissingField("password")));

        let form = HashMap::from([("email", "a@b.io"), ("password", "pw")]);
        let err = RegistrationPayload::read(&form).unwrap_err();
        assert!(matches!(err, AuthError::MissingField("username")));
    }

    #[test]
    fn test_read_registration() {
        let form = HashMap::from([
            ("username", "tony"),
            ("email", "tony@stark.io"),
            ("password", "mark42"),
            ("remember", "on"),
        ]);
        let payload = RegistrationPayload::read(&form).unwrap();
        let request = payload.to_request();

        assert_eq!(request.username, "tony");
        assert_eq!(request.email, "tony@stark.io");
        assert_eq!(request.password, "mark42");
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("a@b.io", "topsecret");
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("a@b.io"));
        assert!(!rendered.contains("topsecret"));

        let payload = RegistrationPayload::new("tony", "tony@stark.io", "mark42");
        assert!(!format!("{:?}", payload).contains("mark42"));
    }
}
