use async_trait::async_trait;
use jdbean_core::CredentialSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not a valid cookie mapping: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Durable storage for the current credential snapshot.
///
/// The snapshot is always written and read as one whole set; there is no
/// partial update. `delete` invalidates the snapshot so the next run forces
/// re-acquisition.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Load the persisted set, or `None` when no snapshot exists.
    async fn load(&self) -> Result<Option<CredentialSet>, StoreError>;

    /// Replace the persisted snapshot with `credentials`.
    async fn save(&self, credentials: &CredentialSet) -> Result<(), StoreError>;

    /// Remove the snapshot. Removing an absent snapshot is not an error.
    async fn delete(&self) -> Result<(), StoreError>;
}
