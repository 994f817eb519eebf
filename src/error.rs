use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Wallet result type alias
pub type WalletResult<T> = Result<T, WalletError>;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Wallet is not open")]
    NotOpen,

    #[error("Invalid wallet password")]
    WalletLocked,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Insufficient funds: available {available}, required {required}")]
    InsufficientFunds { available: u64, required: u64 },

    #[error("Deposit {0} is not unlocked")]
    NotUnlocked(String),

    #[error("Invalid seed phrase: {0} words (expected 12, 18 or 24)")]
    InvalidSeedLength(usize),

    #[error("Invalid mining thread count: {0} (expected 1..=32)")]
    InvalidThreadCount(u32),

    #[error("Mining is already running")]
    AlreadyMining,

    #[error("Mining is not running")]
    NotMining,

    #[error("Address book entry already exists: {0}")]
    AlreadyExists(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Wallet file not found: {0}")]
    FileNotFound(String),
}

impl IntoResponse for WalletError {
    fn into_response(self) -> Response {
        let status = match self {
            WalletError::NotOpen => StatusCode::CONFLICT,
            WalletError::WalletLocked => StatusCode::UNAUTHORIZED,
            WalletError::NotFound(_) => StatusCode::NOT_FOUND,
            WalletError::InsufficientFunds { .. } => StatusCode::BAD_REQUEST,
            WalletError::NotUnlocked(_) => StatusCode::BAD_REQUEST,
            WalletError::InvalidSeedLength(_) => StatusCode::BAD_REQUEST,
            WalletError::InvalidThreadCount(_) => StatusCode::BAD_REQUEST,
            WalletError::AlreadyMining => StatusCode::CONFLICT,
            WalletError::NotMining => StatusCode::CONFLICT,
            WalletError::AlreadyExists(_) => StatusCode::CONFLICT,
            WalletError::Storage(StorageError::FileNotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
