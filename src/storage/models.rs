use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// On-disk wallet bundle.
///
/// The seed phrase and keys are stored as produced by the key vault; the
/// password is stored only as a SHA-256 hex digest used to gate `open`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletFile {
    pub address: String,
    pub password_hash: String,
    pub seed_phrase: String,
    pub view_key: String,
    pub spend_key: String,
    pub restore_height: u64,
    pub created_at: DateTime<Utc>,
}
