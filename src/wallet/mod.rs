//! Wallet engine modules
//!
//! `manager` is the entry point; everything else is an internal collaborator
//! it delegates to:
//! - `keys`: seed phrases and key material
//! - `ledger`: balances and transaction history
//! - `deposits`: term deposits and interest
//! - `address_book`: saved recipient addresses
//! - `sync`: blockchain sync state and its worker thread
//! - `mining`: mining session and its worker thread

pub mod address_book;
pub mod deposits;
pub mod keys;
pub mod ledger;
pub mod manager;
pub mod mining;
pub mod sync;

pub use manager::WalletManager;
