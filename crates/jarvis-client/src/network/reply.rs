use reqwest::StatusCode;

/// Status, cookies and raw body of a finished exchange
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub cookies: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            cookies: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.push((name.to_string(), value.to_string()));
        self
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(n, v)| n == name && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }

    /// Body as trimmed text, if it is non-empty UTF-8
    pub fn text(&self) -> Option<String> {
        let text = std::str::from_utf8(&self.body).ok()?.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}
