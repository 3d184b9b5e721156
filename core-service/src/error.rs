use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Core initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Runtime error: {0}")]
    Runtime(#[from] core_runtime::Error),

    #[error("Offline cache error: {0}")]
    Offline(#[from] core_offline::OfflineError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
