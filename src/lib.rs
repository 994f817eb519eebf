//! Fuego desktop wallet backend.
//!
//! This crate implements the wallet state engine behind the Fuego desktop
//! wallet UI: balances, transaction history, term deposits, blockchain sync
//! and an optional local mining session, exposed as a JSON HTTP API.
//!
//! # Architecture
//!
//! - **WalletManager**: aggregate root owning the single open wallet slot and
//!   the lifecycle of both background workers
//! - **SyncWorker / MiningWorker**: dedicated background threads with
//!   cooperative shutdown (polled flag + join)
//! - **TransactionLedger / DepositManager / AddressBook / KeyVault**: the
//!   wallet sub-state mutated through the manager
//!
//! Real cryptography, transaction construction and P2P networking live in the
//! external CryptoNote library; this crate owns the state machine and the
//! contracts those collaborators must satisfy.

pub mod api;
pub mod config;
pub mod error;
pub mod network;
pub mod storage;
pub mod wallet;
