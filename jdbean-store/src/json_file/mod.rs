use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jdbean_core::CredentialSet;

use crate::store::{CredentialStore, StoreError};

/// Default snapshot location, relative to the working directory.
pub const DEFAULT_SNAPSHOT_PATH: &str = "jd_cookies.json";

/// Stores the credential snapshot as a pretty-printed JSON object mapping
/// cookie name to value.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_SNAPSHOT_PATH)
    }
}

#[async_trait]
impl CredentialStore for JsonFileStore {
    async fn load(&self) -> Result<Option<CredentialSet>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let set: CredentialSet = serde_json::from_str(&raw)?;
        Ok(Some(set))
    }

    async fn save(&self, credentials: &CredentialSet) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(credentials)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn delete(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
