//! Client-side token storage
//!
//! Keeps named string entries the way browser local storage does. The login
//! flow writes the access token under a fixed key and never removes it.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::{Map, Value};

use crate::error::Result;

pub trait TokenStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write `token` under `key`, replacing any previous value
    fn store(&self, key: &str, token: &str) -> Result<()>;
}

/// JSON object file of named entries.
///
/// Entries written by other parts of the client may hold any JSON value and
/// are kept untouched; only string values are handed out as tokens.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Current entries. A file that is not a JSON object is an error, never
    /// silently replaced.
    fn read_entries(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(_) => {
                tracing::error!("Storage file {:?} is not a JSON object", self.path);
                Err(io::Error::new(io::ErrorKind::InvalidData, "storage file is not a JSON object").into())
            }
            Err(e) => {
                tracing::error!("Unreadable storage file {:?}: {}", self.path, e);
                Err(io::Error::new(io::ErrorKind::InvalidData, e).into())
            }
        }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match self.read_entries()?.remove(key) {
            Some(Value::String(token)) => Ok(Some(token)),
            Some(_) => {
                tracing::warn!("Storage entry {} is not a string", key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn store(&self, key: &str, token: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), Value::String(token.to_string()));

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&entries).map_err(io::Error::other)?;
        std::fs::write(&self.path, json)?;

        tracing::debug!("Saved {} to {:?}", key, self.path);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| io::Error::other("token store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn store(&self, key: &str, token: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| io::Error::other("token store lock poisoned"))?;
        entries.insert(key.to_string(), token.to_string());
        Ok(())
    }
}
