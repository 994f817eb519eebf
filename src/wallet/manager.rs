//! Wallet lifecycle manager
//!
//! Owns the single open wallet and coordinates all operations on it. At most
//! one wallet is open at a time; opening or creating a new one tears the
//! previous wallet down first, including its worker threads.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::api::types::{
    AddressBookEntryInfo, DepositInfo, MiningInfo, MiningStats, SyncProgress, TransactionInfo,
    WalletInfo,
};
use crate::config::WalletConfig;
use crate::error::{WalletError, WalletResult};
use crate::network;
use crate::storage::{Storage, WalletFile};
use crate::wallet::address_book::AddressBook;
use crate::wallet::deposits::DepositManager;
use crate::wallet::keys::{hash_password, KeyBundle, KeyVault};
use crate::wallet::ledger::{self, TransactionLedger, TransactionRecord};
use crate::wallet::mining::{MiningSession, MiningWorker};
use crate::wallet::sync::{SyncState, SyncWorker};

/// An open wallet: key material, in-memory state and worker threads.
///
/// Workers hold `Arc` clones of `sync_state` / `mining_session` only. The
/// `Wallet` itself is never shared with a worker thread, so once both
/// workers are joined it can be dropped safely.
pub struct Wallet {
    address: String,
    password_hash: String,
    restore_height: u64,
    keys: KeyVault,
    ledger: TransactionLedger,
    deposits: DepositManager,
    address_book: AddressBook,
    sync_state: Arc<SyncState>,
    sync_worker: Option<SyncWorker>,
    mining_session: Arc<MiningSession>,
    mining_worker: Option<MiningWorker>,
}

impl Wallet {
    fn from_parts(address: String, password_hash: String, keys: KeyVault, restore_height: u64) -> Self {
        Self {
            address,
            password_hash,
            restore_height,
            keys,
            ledger: TransactionLedger::new(),
            deposits: DepositManager::new(),
            address_book: AddressBook::new(),
            sync_state: Arc::new(SyncState::new()),
            sync_worker: None,
            mining_session: Arc::new(MiningSession::new()),
            mining_worker: None,
        }
    }

    /// Stop and join both worker threads. Idempotent; after this returns no
    /// thread holds a reference into this wallet's state.
    fn shutdown_workers(&mut self) {
        if let Some(mut worker) = self.mining_worker.take() {
            worker.stop();
        }
        if let Some(mut worker) = self.sync_worker.take() {
            worker.stop();
        }
        self.sync_state.disconnect();
    }
}

impl Drop for Wallet {
    fn drop(&mut self) {
        self.shutdown_workers();
    }
}

/// Top level wallet engine. One instance per process, shared behind an `Arc`
/// by the HTTP handlers.
pub struct WalletManager {
    config: WalletConfig,
    storage: Storage,
    slot: Mutex<Option<Wallet>>,
}

impl WalletManager {
    pub fn new(config: WalletConfig) -> Self {
        let storage = Storage::new(config.data_dir.clone());
        Self {
            config,
            storage,
            slot: Mutex::new(None),
        }
    }

    /// Construct against an explicit storage root, bypassing the
    /// environment. Used by tests.
    pub fn new_with_storage(config: WalletConfig, storage: Storage) -> Self {
        Self {
            config,
            storage,
            slot: Mutex::new(None),
        }
    }

    fn lock_slot(&self) -> WalletResult<MutexGuard<'_, Option<Wallet>>> {
        self.slot
            .lock()
            .map_err(|_| WalletError::Internal("wallet slot mutex poisoned".to_string()))
    }

    fn with_wallet<T>(
        &self,
        f: impl FnOnce(&mut Wallet) -> WalletResult<T>,
    ) -> WalletResult<T> {
        let mut slot = self.lock_slot()?;
        match slot.as_mut() {
            Some(wallet) => f(wallet),
            None => Err(WalletError::NotOpen),
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Create a new wallet file and open it, replacing any currently open
    /// wallet. Returns the new wallet's address.
    pub fn create_wallet(
        &self,
        password: &str,
        path: &str,
        seed_phrase: Option<&str>,
        restore_height: u64,
    ) -> WalletResult<String> {
        let phrase = match seed_phrase {
            Some(phrase) => {
                KeyVault::validate_seed_phrase(phrase)?;
                phrase.split_whitespace().collect::<Vec<_>>().join(" ")
            }
            None => KeyVault::generate_seed_phrase(),
        };

        let mut vault = KeyVault::new();
        vault.derive_keys_from_seed(&phrase, password)?;
        let address = vault
            .address()
            .ok_or_else(|| WalletError::Internal("key derivation yielded no address".to_string()))?;

        let password_hash = hash_password(password);
        let file = WalletFile {
            address: address.clone(),
            password_hash: password_hash.clone(),
            seed_phrase: phrase,
            view_key: vault
                .view_key()
                .ok_or_else(|| WalletError::Internal("missing view key".to_string()))?
                .to_string(),
            spend_key: vault
                .spend_key()
                .ok_or_else(|| WalletError::Internal("missing spend key".to_string()))?
                .to_string(),
            restore_height,
            created_at: chrono::Utc::now(),
        };
        self.storage.save_wallet(path, &file)?;

        let wallet = Wallet::from_parts(address.clone(), password_hash, vault, restore_height);
        self.install(wallet)?;

        log::info!("Created wallet {} at {}", address, path);
        Ok(address)
    }

    /// Open an existing wallet file, replacing any currently open wallet.
    pub fn open_wallet(&self, path: &str, password: &str) -> WalletResult<String> {
        let file = self.storage.load_wallet(path)?;
        if hash_password(password) != file.password_hash {
            return Err(WalletError::WalletLocked);
        }

        let mut vault = KeyVault::new();
        vault.import_keys(KeyBundle {
            address: file.address.clone(),
            view_key: file.view_key,
            spend_key: file.spend_key,
            seed_phrase: file.seed_phrase,
        });

        let wallet = Wallet::from_parts(
            file.address.clone(),
            file.password_hash,
            vault,
            file.restore_height,
        );
        self.install(wallet)?;

        log::info!("Opened wallet {} from {}", file.address, path);
        Ok(file.address)
    }

    /// Close the open wallet, stopping its workers first. Closing when no
    /// wallet is open is a no-op.
    pub fn close_wallet(&self) -> WalletResult<()> {
        let previous = self.lock_slot()?.take();
        if let Some(mut wallet) = previous {
            wallet.shutdown_workers();
            log::info!("Closed wallet {}", wallet.address);
        }
        Ok(())
    }

    pub fn is_open(&self) -> WalletResult<bool> {
        Ok(self.lock_slot()?.is_some())
    }

    fn install(&self, wallet: Wallet) -> WalletResult<()> {
        let mut slot = self.lock_slot()?;
        if let Some(mut previous) = slot.take() {
            previous.shutdown_workers();
            log::info!("Closed wallet {}", previous.address);
        }
        *slot = Some(wallet);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Node connection and sync
    // -----------------------------------------------------------------------

    /// Daemon endpoints to try, in order. An explicit address is used alone;
    /// otherwise the configured default is tried first, then the remaining
    /// known public nodes.
    fn node_candidates(&self, address: Option<&str>, port: Option<u16>) -> Vec<(String, u16)> {
        if let Some(host) = address.filter(|a| !a.is_empty()) {
            return vec![(
                host.to_string(),
                port.unwrap_or(self.config.default_node_port),
            )];
        }
        let mut candidates = vec![(
            self.config.default_node_address.clone(),
            self.config.default_node_port,
        )];
        for (host, port) in network::KNOWN_NODES {
            if *host != self.config.default_node_address {
                candidates.push((host.to_string(), *port));
            }
        }
        candidates
    }

    /// Connect the open wallet to a daemon and start the sync worker. A
    /// previous worker is stopped first so exactly one is ever running.
    /// Without an explicit address, candidates are tried in order and the
    /// first one whose worker starts wins.
    pub fn connect_node(&self, address: Option<&str>, port: Option<u16>) -> WalletResult<String> {
        let candidates = self.node_candidates(address, port);

        self.with_wallet(|wallet| {
            if let Some(mut worker) = wallet.sync_worker.take() {
                worker.stop();
            }

            // Resume from where a previous session left off, never below
            // the restore height.
            let start = wallet
                .sync_state
                .current_height()
                .max(wallet.restore_height);

            let mut last_err = None;
            for (host, port) in &candidates {
                let connection = format!("{}:{}", host, port);
                wallet.sync_state.connect(
                    start,
                    network::DEFAULT_NETWORK_HEIGHT,
                    &connection,
                    network::DEFAULT_PEER_COUNT,
                );
                match SyncWorker::start(Arc::clone(&wallet.sync_state)) {
                    Ok(worker) => {
                        wallet.sync_worker = Some(worker);
                        log::info!("Connected to node {}", connection);
                        return Ok(connection);
                    }
                    Err(e) => {
                        log::warn!("Failed to connect to {}: {}", connection, e);
                        last_err = Some(e);
                    }
                }
            }

            wallet.sync_state.disconnect();
            Err(last_err
                .unwrap_or_else(|| WalletError::Internal("no node candidates".to_string())))
        })
    }

    /// Disconnect from the daemon and stop the sync worker.
    pub fn disconnect_node(&self) -> WalletResult<()> {
        self.with_wallet(|wallet| {
            if let Some(mut worker) = wallet.sync_worker.take() {
                worker.stop();
            }
            wallet.sync_state.disconnect();
            log::info!("Disconnected from node");
            Ok(())
        })
    }

    /// Force one synchronous sync step. When the worker is live it is
    /// already advancing, so this only acts on an idle wallet.
    pub fn refresh(&self) -> WalletResult<()> {
        self.with_wallet(|wallet| {
            if wallet.sync_worker.is_none() {
                wallet.sync_state.advance_once();
            }
            Ok(())
        })
    }

    /// Restart synchronization from `start_height`. If connected, the sync
    /// worker is restarted so the rescan runs to completion.
    pub fn rescan(&self, start_height: u64) -> WalletResult<()> {
        self.with_wallet(|wallet| {
            if let Some(mut worker) = wallet.sync_worker.take() {
                worker.stop();
            }
            wallet.sync_state.rescan(start_height);
            if wallet.sync_state.is_connected() {
                wallet.sync_worker = Some(SyncWorker::start(Arc::clone(&wallet.sync_state))?);
            }
            log::info!("Rescanning blockchain from height {}", start_height);
            Ok(())
        })
    }

    /// Point-in-time wallet snapshot, or `None` when no wallet is open.
    pub fn wallet_info(&self) -> WalletResult<Option<WalletInfo>> {
        let slot = self.lock_slot()?;
        Ok(slot.as_ref().map(|wallet| {
            let sync = wallet.sync_state.snapshot();
            let balance = wallet.ledger.balance();
            let unlocked = wallet.ledger.unlocked_balance();
            WalletInfo {
                address: wallet.address.clone(),
                balance,
                unlocked_balance: unlocked,
                locked_balance: balance.saturating_sub(unlocked),
                total_received: wallet.ledger.total_received(),
                total_sent: wallet.ledger.total_sent(),
                transaction_count: wallet.ledger.transaction_count(),
                is_synced: !sync.is_syncing,
                sync_height: sync.current_height,
                network_height: sync.target_height,
                is_connected: sync.is_connected,
                peer_count: sync.peer_count,
                last_block_time: sync.last_block_time,
            }
        }))
    }

    pub fn sync_progress(&self) -> WalletResult<Option<SyncProgress>> {
        let slot = self.lock_slot()?;
        Ok(slot.as_ref().map(|wallet| {
            let sync = wallet.sync_state.snapshot();
            SyncProgress {
                current_height: sync.current_height,
                total_height: sync.target_height,
                progress_percentage: sync.progress_percentage,
                estimated_time_remaining: sync.estimated_time_remaining,
                is_syncing: sync.is_syncing,
            }
        }))
    }

    // -----------------------------------------------------------------------
    // Transactions
    // -----------------------------------------------------------------------

    pub fn send_transaction(
        &self,
        address: &str,
        amount: u64,
        payment_id: Option<String>,
        mixin: Option<u64>,
    ) -> WalletResult<String> {
        self.with_wallet(|wallet| {
            let own = wallet.address.clone();
            let hash = wallet.ledger.send_transaction(
                &own,
                address,
                amount,
                payment_id,
                mixin.unwrap_or(3),
            )?;
            log::info!("Sent {} atomic units to {} ({})", amount, address, hash);
            Ok(hash)
        })
    }

    /// Credit incoming funds, as reported by the sync layer.
    pub fn record_incoming(&self, amount: u64) -> WalletResult<String> {
        self.with_wallet(|wallet| {
            let own = wallet.address.clone();
            let height = wallet.sync_state.current_height();
            Ok(wallet.ledger.record_incoming(&own, amount, height))
        })
    }

    pub fn get_transactions(&self, limit: u64, offset: u64) -> WalletResult<Vec<TransactionInfo>> {
        self.with_wallet(|wallet| {
            Ok(wallet
                .ledger
                .get_transactions(limit, offset)
                .into_iter()
                .map(TransactionInfo::from)
                .collect())
        })
    }

    pub fn get_transaction(&self, hash: &str) -> WalletResult<TransactionInfo> {
        self.with_wallet(|wallet| {
            wallet
                .ledger
                .get_by_hash(hash)
                .map(TransactionInfo::from)
                .ok_or_else(|| WalletError::NotFound(format!("transaction {}", hash)))
        })
    }

    pub fn estimate_fee(&self, address: &str, amount: u64, mixin: Option<u64>) -> WalletResult<u64> {
        self.with_wallet(|wallet| {
            Ok(wallet
                .ledger
                .estimate_fee(address, amount, mixin.unwrap_or(3)))
        })
    }

    // -----------------------------------------------------------------------
    // Deposits
    // -----------------------------------------------------------------------

    /// Lock `amount` into a term deposit. Debits the balance and appends the
    /// creating transaction before registering the deposit.
    pub fn create_deposit(&self, amount: u64, term_days: u32) -> WalletResult<DepositInfo> {
        self.with_wallet(|wallet| {
            let height = wallet.sync_state.current_height();
            wallet.ledger.debit(amount)?;

            let hash = ledger::new_tx_hash();
            let own = wallet.address.clone();
            wallet.ledger.append(TransactionRecord {
                id: uuid::Uuid::new_v4().to_string(),
                hash: hash.clone(),
                amount: -(amount as i64),
                fee: network::NOMINAL_FEE,
                height,
                timestamp: chrono::Utc::now().timestamp() as u64,
                confirmations: 0,
                is_confirmed: false,
                is_pending: true,
                payment_id: None,
                destination_addresses: vec![own.clone()],
                source_addresses: vec![own],
                unlock_time: Some(height + network::term_days_to_blocks(term_days)),
            });

            let deposit = wallet.deposits.create(amount, term_days, height, hash);
            log::info!(
                "Created deposit {} ({} atomic units, {} days)",
                deposit.id,
                amount,
                term_days
            );
            Ok(DepositInfo::from_deposit(deposit, height))
        })
    }

    /// Withdraw a matured deposit, crediting principal plus interest.
    pub fn withdraw_deposit(&self, deposit_id: &str) -> WalletResult<String> {
        self.with_wallet(|wallet| {
            let height = wallet.sync_state.current_height();
            let hash = ledger::new_tx_hash();
            let (amount, interest) = {
                let deposit = wallet
                    .deposits
                    .withdraw(deposit_id, height, hash.clone())?;
                (deposit.amount, deposit.interest)
            };

            let credit = amount + interest;
            wallet.ledger.credit(credit);
            let own = wallet.address.clone();
            wallet.ledger.append(TransactionRecord {
                id: uuid::Uuid::new_v4().to_string(),
                hash: hash.clone(),
                amount: credit as i64,
                fee: 0,
                height,
                timestamp: chrono::Utc::now().timestamp() as u64,
                confirmations: 0,
                is_confirmed: false,
                is_pending: true,
                payment_id: None,
                destination_addresses: vec![own.clone()],
                source_addresses: vec![own],
                unlock_time: None,
            });

            log::info!(
                "Withdrew deposit {} ({} + {} interest)",
                deposit_id,
                amount,
                interest
            );
            Ok(hash)
        })
    }

    pub fn list_deposits(&self) -> WalletResult<Vec<DepositInfo>> {
        self.with_wallet(|wallet| {
            let height = wallet.sync_state.current_height();
            Ok(wallet
                .deposits
                .list()
                .iter()
                .map(|d| DepositInfo::from_deposit(d, height))
                .collect())
        })
    }

    pub fn get_deposit(&self, deposit_id: &str) -> WalletResult<DepositInfo> {
        self.with_wallet(|wallet| {
            let height = wallet.sync_state.current_height();
            wallet
                .deposits
                .get(deposit_id)
                .map(|d| DepositInfo::from_deposit(d, height))
                .ok_or_else(|| WalletError::NotFound(format!("deposit {}", deposit_id)))
        })
    }

    // -----------------------------------------------------------------------
    // Mining
    // -----------------------------------------------------------------------

    pub fn start_mining(&self, threads: u32, background: bool) -> WalletResult<()> {
        self.with_wallet(|wallet| {
            if wallet.mining_worker.is_some() {
                return Err(WalletError::AlreadyMining);
            }
            wallet.mining_worker = Some(MiningWorker::start(
                Arc::clone(&wallet.mining_session),
                threads,
                background,
            )?);
            Ok(())
        })
    }

    pub fn stop_mining(&self) -> WalletResult<()> {
        self.with_wallet(|wallet| match wallet.mining_worker.take() {
            Some(mut worker) => {
                worker.stop();
                log::info!("Mining stopped");
                Ok(())
            }
            None => Err(WalletError::NotMining),
        })
    }

    pub fn mining_info(&self) -> WalletResult<Option<MiningInfo>> {
        let slot = self.lock_slot()?;
        Ok(slot
            .as_ref()
            .map(|wallet| MiningInfo::from(&wallet.mining_session.snapshot())))
    }

    pub fn mining_stats(&self) -> WalletResult<Option<MiningStats>> {
        let slot = self.lock_slot()?;
        Ok(slot
            .as_ref()
            .map(|wallet| MiningStats::from(&wallet.mining_session.snapshot())))
    }

    pub fn set_mining_pool(
        &self,
        pool_address: Option<String>,
        worker_name: Option<String>,
    ) -> WalletResult<()> {
        self.with_wallet(|wallet| {
            wallet.mining_session.set_pool(pool_address, worker_name);
            Ok(())
        })
    }

    // -----------------------------------------------------------------------
    // Address book
    // -----------------------------------------------------------------------

    pub fn add_address(
        &self,
        address: &str,
        label: &str,
        description: &str,
    ) -> WalletResult<()> {
        self.with_wallet(|wallet| wallet.address_book.add(address, label, description))
    }

    pub fn remove_address(&self, address: &str) -> WalletResult<()> {
        self.with_wallet(|wallet| wallet.address_book.remove(address))
    }

    pub fn update_address(
        &self,
        address: &str,
        label: Option<&str>,
        description: Option<&str>,
    ) -> WalletResult<()> {
        self.with_wallet(|wallet| wallet.address_book.update(address, label, description))
    }

    pub fn mark_address_used(&self, address: &str) -> WalletResult<()> {
        self.with_wallet(|wallet| wallet.address_book.mark_used(address))
    }

    pub fn get_address(&self, address: &str) -> WalletResult<AddressBookEntryInfo> {
        self.with_wallet(|wallet| {
            wallet
                .address_book
                .get(address)
                .map(AddressBookEntryInfo::from)
                .ok_or_else(|| WalletError::NotFound(format!("address book entry {}", address)))
        })
    }

    pub fn list_addresses(&self) -> WalletResult<Vec<AddressBookEntryInfo>> {
        self.with_wallet(|wallet| {
            Ok(wallet
                .address_book
                .list()
                .into_iter()
                .map(AddressBookEntryInfo::from)
                .collect())
        })
    }

    // -----------------------------------------------------------------------
    // Keys
    // -----------------------------------------------------------------------

    pub fn generate_seed_phrase(&self) -> String {
        KeyVault::generate_seed_phrase()
    }

    pub fn validate_seed_phrase(&self, phrase: &str) -> WalletResult<()> {
        KeyVault::validate_seed_phrase(phrase)
    }

    /// Re-derive key material from a seed phrase, replacing the open
    /// wallet's keys and address.
    pub fn derive_keys(&self, phrase: &str, password: &str) -> WalletResult<KeyBundle> {
        self.with_wallet(|wallet| {
            wallet.keys.derive_keys_from_seed(phrase, password)?;
            if let Some(address) = wallet.keys.address() {
                wallet.address = address;
            }
            wallet
                .keys
                .export_keys()
                .ok_or_else(|| WalletError::Internal("key derivation yielded no keys".to_string()))
        })
    }

    pub fn export_keys(&self) -> WalletResult<KeyBundle> {
        self.with_wallet(|wallet| {
            wallet
                .keys
                .export_keys()
                .ok_or_else(|| WalletError::NotFound("key material".to_string()))
        })
    }

    pub fn import_keys(&self, bundle: KeyBundle) -> WalletResult<()> {
        self.with_wallet(|wallet| {
            wallet.address = bundle.address.clone();
            wallet.keys.import_keys(bundle);
            Ok(())
        })
    }

    pub fn view_key(&self) -> WalletResult<String> {
        self.with_wallet(|wallet| {
            wallet
                .keys
                .view_key()
                .map(str::to_string)
                .ok_or_else(|| WalletError::NotFound("view key".to_string()))
        })
    }

    pub fn spend_key(&self) -> WalletResult<String> {
        self.with_wallet(|wallet| {
            wallet
                .keys
                .spend_key()
                .map(str::to_string)
                .ok_or_else(|| WalletError::NotFound("spend key".to_string()))
        })
    }

    /// The seed phrase is gated behind the wallet password even when the
    /// wallet is already open.
    pub fn seed_phrase(&self, password: &str) -> WalletResult<String> {
        self.with_wallet(|wallet| {
            if hash_password(password) != wallet.password_hash {
                return Err(WalletError::WalletLocked);
            }
            wallet
                .keys
                .seed_phrase()
                .map(str::to_string)
                .ok_or_else(|| WalletError::NotFound("seed phrase".to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager() -> (WalletManager, TempDir) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().to_path_buf());
        let manager = WalletManager::new_with_storage(WalletConfig::default(), storage);
        (manager, dir)
    }

    #[test]
    fn create_then_reopen() {
        let (manager, _dir) = manager();
        let address = manager
            .create_wallet("hunter2", "main.wallet", None, 0)
            .unwrap();
        assert!(address.starts_with("fire"));

        manager.close_wallet().unwrap();
        assert!(!manager.is_open().unwrap());

        let reopened = manager.open_wallet("main.wallet", "hunter2").unwrap();
        assert_eq!(reopened, address);
    }

    #[test]
    fn open_rejects_wrong_password() {
        let (manager, _dir) = manager();
        manager
            .create_wallet("hunter2", "main.wallet", None, 0)
            .unwrap();
        manager.close_wallet().unwrap();

        let err = manager.open_wallet("main.wallet", "wrong").unwrap_err();
        assert!(matches!(err, WalletError::WalletLocked));
    }

    #[test]
    fn operations_require_open_wallet() {
        let (manager, _dir) = manager();
        assert!(matches!(
            manager.send_transaction("fireabc", 1, None, None),
            Err(WalletError::NotOpen)
        ));
        assert!(manager.wallet_info().unwrap().is_none());
        assert!(manager.mining_info().unwrap().is_none());
    }

    #[test]
    fn deposit_lifecycle_moves_funds() {
        let (manager, _dir) = manager();
        manager
            .create_wallet("hunter2", "main.wallet", None, 0)
            .unwrap();
        manager.record_incoming(1_000_000_000).unwrap();

        let deposit = manager.create_deposit(400_000_000, 30).unwrap();
        let info = manager.wallet_info().unwrap().unwrap();
        assert_eq!(info.balance, 600_000_000);

        // Not matured yet at height 0.
        let err = manager.withdraw_deposit(&deposit.id).unwrap_err();
        assert!(matches!(err, WalletError::NotUnlocked(_)));
    }

    #[test]
    fn mining_stop_without_start_fails() {
        let (manager, _dir) = manager();
        manager
            .create_wallet("hunter2", "main.wallet", None, 0)
            .unwrap();
        assert!(matches!(manager.stop_mining(), Err(WalletError::NotMining)));
    }

    #[test]
    fn seed_phrase_gated_by_password() {
        let (manager, _dir) = manager();
        manager
            .create_wallet("hunter2", "main.wallet", None, 0)
            .unwrap();
        assert!(manager.seed_phrase("hunter2").is_ok());
        assert!(matches!(
            manager.seed_phrase("nope"),
            Err(WalletError::WalletLocked)
        ));
    }
}
