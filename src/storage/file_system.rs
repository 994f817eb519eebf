use std::fs;
use std::path::{Path, PathBuf};

use super::models::WalletFile;
use crate::error::StorageError;

#[derive(Clone)]
pub struct Storage {
    base_path: PathBuf,
}

impl Storage {
    /// Create a storage instance rooted at the given base directory
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Resolve a caller-supplied wallet path: absolute paths are used as-is,
    /// relative ones land under the base directory.
    pub fn wallet_path(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.base_path.join(candidate)
        }
    }

    /// Check whether a wallet file exists at the given path
    pub fn wallet_exists(&self, path: &str) -> bool {
        self.wallet_path(path).exists()
    }

    /// Write a wallet bundle to disk, creating parent directories as needed
    pub fn save_wallet(&self, path: &str, file: &WalletFile) -> Result<(), StorageError> {
        let full = self.wallet_path(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(file)?;
        fs::write(&full, json)?;
        log::debug!("Wallet file written: {}", full.display());
        Ok(())
    }

    /// Load a wallet bundle from disk
    pub fn load_wallet(&self, path: &str) -> Result<WalletFile, StorageError> {
        let full = self.wallet_path(path);
        if !full.exists() {
            return Err(StorageError::FileNotFound(full.display().to_string()));
        }
        let json = fs::read_to_string(&full)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn sample_file() -> WalletFile {
        WalletFile {
            address: "fire00".to_string(),
            password_hash: "ab".to_string(),
            seed_phrase: "word ".repeat(24).trim_end().to_string(),
            view_key: "aa".to_string(),
            spend_key: "bb".to_string(),
            restore_height: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().to_path_buf());

        storage.save_wallet("main.wallet", &sample_file()).unwrap();
        assert!(storage.wallet_exists("main.wallet"));

        let loaded = storage.load_wallet("main.wallet").unwrap();
        assert_eq!(loaded.address, "fire00");
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().to_path_buf());

        assert!(matches!(
            storage.load_wallet("absent.wallet"),
            Err(StorageError::FileNotFound(_))
        ));
    }
}
