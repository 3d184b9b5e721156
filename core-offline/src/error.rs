use bridge_traits::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OfflineError {
    #[error("Storage bridge error: {0}")]
    Storage(#[from] BridgeError),

    #[error("Persisted cache list is corrupt: {0}")]
    StorageCorrupt(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OfflineError>;
