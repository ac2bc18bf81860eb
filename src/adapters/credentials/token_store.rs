//! File-backed key/value store holding the voter's bearer token between runs.

use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use error_stack::ResultExt;
use thiserror::Error;
use tracing::{instrument, warn};

use crate::ports::credential_provider::CredentialProvider;

pub const AUTH_TOKEN_KEY: &str = "authToken";

#[derive(Error, Debug)]
pub enum TokenStoreError {
    #[error("Failed to read token store")]
    Read,
    #[error("Token store is not valid JSON")]
    Corrupted,
    #[error("Failed to write token store")]
    Write,
}

#[derive(Debug, Clone)]
pub struct TokenFileStore {
    path: PathBuf,
    key: String,
}

impl TokenFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            key: AUTH_TOKEN_KEY.to_string(),
        }
    }

    pub fn with_key<S: Into<String>>(mut self, key: S) -> Self {
        self.key = key.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> error_stack::Result<BTreeMap<String, String>, TokenStoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .change_context(TokenStoreError::Read)
            .attach_printable_lazy(|| format!("path: {}", self.path.display()))?;

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents)
            .change_context(TokenStoreError::Corrupted)
            .attach_printable_lazy(|| format!("path: {}", self.path.display()))
    }

    fn write_entries(
        &self,
        entries: &BTreeMap<String, String>,
    ) -> error_stack::Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).change_context(TokenStoreError::Write)?;
        }

        let contents =
            serde_json::to_string_pretty(entries).change_context(TokenStoreError::Write)?;

        write_private(&self.path, contents.as_bytes())
            .change_context(TokenStoreError::Write)
            .attach_printable_lazy(|| format!("path: {}", self.path.display()))
    }

    pub fn get(&self) -> error_stack::Result<Option<String>, TokenStoreError> {
        Ok(self.read_entries()?.remove(&self.key))
    }

    #[instrument(skip(token))]
    pub fn set(&self, token: &str) -> error_stack::Result<(), TokenStoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(self.key.clone(), token.to_string());
        self.write_entries(&entries)
    }

    /// Returns whether a token was stored.
    #[instrument]
    pub fn remove(&self) -> error_stack::Result<bool, TokenStoreError> {
        let mut entries = self.read_entries()?;
        if entries.remove(&self.key).is_none() {
            return Ok(false);
        }
        self.write_entries(&entries)?;
        Ok(true)
    }
}

/// Writes `contents` readable by the owner only on unix, including over an existing file.
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        options.mode(0o600);
        let mut file = options.open(path)?;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
        file.write_all(contents)
    }
    #[cfg(not(unix))]
    {
        options.open(path)?.write_all(contents)
    }
}

impl CredentialProvider for TokenFileStore {
    fn bearer_token(&self) -> Option<String> {
        match self.get() {
            Ok(token) => token,
            Err(report) => {
                warn!(?report, "Could not read the stored token");
                None
            }
        }
    }
}
