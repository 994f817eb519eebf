//! Wallet-file persistence
//!
//! Stores a JSON bundle per wallet (address, key material, password hash).
//! Chain state is never persisted here; balance and history are rebuilt from
//! the network after open.

pub mod file_system;
pub mod models;

pub use file_system::Storage;
pub use models::WalletFile;
