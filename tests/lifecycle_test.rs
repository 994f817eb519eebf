//! End to end lifecycle tests against a wallet manager backed by a
//! temporary directory. Worker threads are real; every test ends with
//! both workers joined.

use std::time::{Duration, Instant};

use tempfile::TempDir;

use fuego_wallet::config::WalletConfig;
use fuego_wallet::error::WalletError;
use fuego_wallet::storage::Storage;
use fuego_wallet::wallet::WalletManager;

fn manager() -> (WalletManager, TempDir) {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().to_path_buf());
    let manager = WalletManager::new_with_storage(WalletConfig::default(), storage);
    (manager, dir)
}

fn open_funded(manager: &WalletManager, amount: u64) {
    manager
        .create_wallet("hunter2", "test.wallet", None, 0)
        .unwrap();
    if amount > 0 {
        manager.record_incoming(amount).unwrap();
    }
}

#[test]
fn create_close_reopen_roundtrip() {
    let (manager, _dir) = manager();
    let address = manager
        .create_wallet("hunter2", "main.wallet", None, 0)
        .unwrap();
    assert!(address.starts_with("fire"));
    assert_eq!(address.len(), 4 + 95);

    manager.close_wallet().unwrap();
    let reopened = manager.open_wallet("main.wallet", "hunter2").unwrap();
    assert_eq!(reopened, address);
}

#[test]
fn open_missing_wallet_is_not_found() {
    let (manager, _dir) = manager();
    let err = manager.open_wallet("nope.wallet", "pw").unwrap_err();
    assert!(matches!(
        err,
        WalletError::Storage(fuego_wallet::error::StorageError::FileNotFound(_))
    ));
}

#[test]
fn close_is_idempotent() {
    let (manager, _dir) = manager();
    manager.close_wallet().unwrap();
    open_funded(&manager, 0);
    manager.close_wallet().unwrap();
    manager.close_wallet().unwrap();
}

#[test]
fn close_with_both_workers_running_terminates_promptly() {
    let (manager, _dir) = manager();
    open_funded(&manager, 0);

    manager.connect_node(None, None).unwrap();
    manager.start_mining(2, false).unwrap();

    // Let both workers take a few ticks.
    std::thread::sleep(Duration::from_millis(300));
    let stats = manager.mining_stats().unwrap().unwrap();
    assert!(stats.is_mining);
    assert!(stats.total_hashes > 0);

    let started = Instant::now();
    manager.close_wallet().unwrap();
    // Each worker stops within one poll quantum; well under a second.
    assert!(started.elapsed() < Duration::from_secs(1));

    assert!(manager.wallet_info().unwrap().is_none());
}

#[test]
fn connect_falls_back_to_known_nodes() {
    let (manager, _dir) = manager();
    open_funded(&manager, 0);

    // No address: the first known public node is the configured default.
    let (host, port) = fuego_wallet::network::KNOWN_NODES[0];
    let connection = manager.connect_node(None, None).unwrap();
    assert_eq!(connection, format!("{}:{}", host, port));

    // Explicit address wins over the candidate list.
    let connection = manager
        .connect_node(Some("node.example.com"), Some(9_999))
        .unwrap();
    assert_eq!(connection, "node.example.com:9999");

    manager.close_wallet().unwrap();
}

#[test]
fn sync_makes_monotonic_progress() {
    let (manager, _dir) = manager();
    open_funded(&manager, 0);

    // is_synced mirrors the syncing flag: an idle wallet is not mid-sync.
    let info = manager.wallet_info().unwrap().unwrap();
    assert!(info.is_synced);
    assert!(!info.is_connected);

    manager.connect_node(None, None).unwrap();
    let info = manager.wallet_info().unwrap().unwrap();
    assert!(!info.is_synced);

    std::thread::sleep(Duration::from_millis(200));
    let a = manager.sync_progress().unwrap().unwrap();
    std::thread::sleep(Duration::from_millis(200));
    let b = manager.sync_progress().unwrap().unwrap();

    assert!(b.current_height >= a.current_height);
    assert!(a.current_height <= a.total_height);
    assert!(b.current_height <= b.total_height);

    manager.close_wallet().unwrap();
}

#[test]
fn send_and_deposit_preserve_balance_invariants() {
    let (manager, _dir) = manager();
    open_funded(&manager, 2_000_000_000);

    manager
        .send_transaction("fire", 500_000_000, None, None)
        .unwrap();
    let info = manager.wallet_info().unwrap().unwrap();
    assert_eq!(info.balance, 1_500_000_000);
    assert!(info.unlocked_balance <= info.balance);

    manager.create_deposit(1_000_000_000, 90).unwrap();
    let info = manager.wallet_info().unwrap().unwrap();
    assert_eq!(info.balance, 500_000_000);
    assert!(info.unlocked_balance <= info.balance);

    // Overdraft is rejected and leaves the ledger untouched.
    let err = manager
        .send_transaction("fire", 600_000_000, None, None)
        .unwrap_err();
    assert!(matches!(err, WalletError::InsufficientFunds { .. }));
    let after = manager.wallet_info().unwrap().unwrap();
    assert_eq!(after.balance, 500_000_000);
}

#[test]
fn transaction_history_pagination() {
    let (manager, _dir) = manager();
    open_funded(&manager, 1_000_000);
    for _ in 0..4 {
        manager.record_incoming(100).unwrap();
    }

    let all = manager.get_transactions(50, 0).unwrap();
    assert_eq!(all.len(), 5);

    let page = manager.get_transactions(2, 1).unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].hash, all[1].hash);
    assert_eq!(page[1].hash, all[2].hash);

    let by_hash = manager.get_transaction(&all[0].hash).unwrap();
    assert_eq!(by_hash.amount, 100);
}

#[test]
fn mining_restart_after_stop() {
    let (manager, _dir) = manager();
    open_funded(&manager, 0);

    manager.start_mining(1, true).unwrap();
    assert!(matches!(
        manager.start_mining(1, true),
        Err(WalletError::AlreadyMining)
    ));
    manager.stop_mining().unwrap();

    let info = manager.mining_info().unwrap().unwrap();
    assert!(!info.is_mining);
    assert_eq!(info.threads, 0);

    // Stopping released the session, so a fresh start works.
    manager.start_mining(4, false).unwrap();
    manager.close_wallet().unwrap();
}

#[test]
fn invalid_mining_thread_counts_rejected() {
    let (manager, _dir) = manager();
    open_funded(&manager, 0);
    assert!(matches!(
        manager.start_mining(0, false),
        Err(WalletError::InvalidThreadCount(0))
    ));
    assert!(matches!(
        manager.start_mining(33, false),
        Err(WalletError::InvalidThreadCount(33))
    ));
}

#[test]
fn address_book_crud() {
    let (manager, _dir) = manager();
    open_funded(&manager, 0);

    manager.add_address("fireabc", "Alice", "rent").unwrap();
    assert!(matches!(
        manager.add_address("fireabc", "Alice again", ""),
        Err(WalletError::AlreadyExists(_))
    ));

    manager
        .update_address("fireabc", Some("Alice B."), None)
        .unwrap();
    manager.mark_address_used("fireabc").unwrap();

    let entry = manager.get_address("fireabc").unwrap();
    assert_eq!(entry.label, "Alice B.");
    assert!(matches!(
        manager.get_address("firemissing"),
        Err(WalletError::NotFound(_))
    ));

    let entries = manager.list_addresses().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].label, "Alice B.");
    assert_eq!(entries[0].use_count, 1);

    manager.remove_address("fireabc").unwrap();
    assert!(manager.list_addresses().unwrap().is_empty());
}

#[test]
fn key_material_survives_reopen() {
    let (manager, _dir) = manager();
    manager
        .create_wallet("hunter2", "keys.wallet", None, 0)
        .unwrap();
    let exported = manager.export_keys().unwrap();

    manager.close_wallet().unwrap();
    manager.open_wallet("keys.wallet", "hunter2").unwrap();

    let reexported = manager.export_keys().unwrap();
    assert_eq!(exported.address, reexported.address);
    assert_eq!(exported.view_key, reexported.view_key);
    assert_eq!(exported.spend_key, reexported.spend_key);
    assert_eq!(exported.seed_phrase, reexported.seed_phrase);
}

#[test]
fn same_seed_same_keys() {
    let (manager, _dir) = manager();
    let phrase = manager.generate_seed_phrase();

    let a = manager
        .create_wallet("pw", "a.wallet", Some(&phrase), 0)
        .unwrap();
    manager.close_wallet().unwrap();
    let b = manager
        .create_wallet("pw", "b.wallet", Some(&phrase), 0)
        .unwrap();
    assert_eq!(a, b);
}
