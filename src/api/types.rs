use serde::{Deserialize, Serialize};

use crate::wallet::address_book::AddressBookEntry;
use crate::wallet::deposits::Deposit;
use crate::wallet::ledger::TransactionRecord;
use crate::wallet::mining::MiningSnapshot;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateWalletRequest {
    pub password: String,
    pub path: String,
    pub seed_phrase: Option<String>,
    pub restore_height: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct OpenWalletRequest {
    pub path: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ConnectNodeRequest {
    /// Daemon host; falls back to the configured default node
    pub address: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct RescanRequest {
    pub start_height: u64,
}

#[derive(Debug, Deserialize)]
pub struct SendTransactionRequest {
    pub address: String,
    pub amount: u64,
    pub payment_id: Option<String>,
    /// Ring-size privacy parameter, passed through to tx construction
    pub mixin: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct EstimateFeeRequest {
    pub address: String,
    pub amount: u64,
    pub mixin: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateDepositRequest {
    pub amount: u64,
    pub term_days: u32,
}

#[derive(Debug, Deserialize)]
pub struct StartMiningRequest {
    pub threads: u32,
    #[serde(default)]
    pub background: bool,
}

#[derive(Debug, Deserialize)]
pub struct SetMiningPoolRequest {
    pub pool_address: Option<String>,
    pub worker_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddAddressBookRequest {
    pub address: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAddressBookRequest {
    pub label: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateSeedRequest {
    pub seed_phrase: String,
}

#[derive(Debug, Deserialize)]
pub struct DeriveKeysRequest {
    pub seed_phrase: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ConnectNodeResponse {
    pub connected: bool,
}

/// Aggregate wallet snapshot consumed by the UI dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct WalletInfo {
    pub address: String,
    pub balance: u64,
    pub unlocked_balance: u64,
    pub locked_balance: u64,
    pub total_received: u64,
    pub total_sent: u64,
    pub transaction_count: u32,
    pub is_synced: bool,
    pub sync_height: u64,
    pub network_height: u64,
    pub is_connected: bool,
    pub peer_count: u32,
    pub last_block_time: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncProgress {
    pub current_height: u64,
    pub total_height: u64,
    pub progress_percentage: f32,
    pub estimated_time_remaining: u64,
    pub is_syncing: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionInfo {
    pub id: String,
    pub hash: String,
    pub amount: i64,
    pub fee: u64,
    pub height: u64,
    pub timestamp: u64,
    pub confirmations: u32,
    pub is_confirmed: bool,
    pub is_pending: bool,
    pub payment_id: Option<String>,
    pub destination_addresses: Vec<String>,
    pub source_addresses: Vec<String>,
    pub unlock_time: Option<u64>,
}

impl From<&TransactionRecord> for TransactionInfo {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            id: record.id.clone(),
            hash: record.hash.clone(),
            amount: record.amount,
            fee: record.fee,
            height: record.height,
            timestamp: record.timestamp,
            confirmations: record.confirmations,
            is_confirmed: record.is_confirmed,
            is_pending: record.is_pending,
            payment_id: record.payment_id.clone(),
            destination_addresses: record.destination_addresses.clone(),
            source_addresses: record.source_addresses.clone(),
            unlock_time: record.unlock_time,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SendTransactionResponse {
    pub tx_hash: String,
}

#[derive(Debug, Serialize)]
pub struct FeeResponse {
    pub fee: u64,
}

#[derive(Debug, Serialize)]
pub struct WithdrawDepositResponse {
    pub tx_hash: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepositInfo {
    pub id: String,
    pub amount: u64,
    pub interest: u64,
    pub term: u32,
    pub rate: f64,
    pub status: String,
    pub unlock_height: u64,
    pub creating_transaction_hash: String,
    pub creating_height: u64,
    pub creating_time: String,
    pub spending_transaction_hash: Option<String>,
    pub spending_height: Option<u64>,
    pub spending_time: Option<String>,
}

impl DepositInfo {
    /// Build the UI view of a deposit; status is resolved lazily against the
    /// supplied sync height.
    pub fn from_deposit(deposit: &Deposit, current_height: u64) -> Self {
        Self {
            id: deposit.id.clone(),
            amount: deposit.amount,
            interest: deposit.interest,
            term: deposit.term_days,
            rate: deposit.rate,
            status: deposit.status_at(current_height).as_str().to_string(),
            unlock_height: deposit.unlock_height,
            creating_transaction_hash: deposit.creating_tx_hash.clone(),
            creating_height: deposit.creating_height,
            creating_time: deposit.creating_time.to_rfc3339(),
            spending_transaction_hash: deposit.spending_tx_hash.clone(),
            spending_height: deposit.spending_height,
            spending_time: deposit.spending_time.map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MiningInfo {
    pub is_mining: bool,
    pub hashrate: f64,
    pub difficulty: u64,
    pub block_reward: u64,
    pub threads: u32,
    pub pool_address: Option<String>,
    pub worker_name: Option<String>,
}

impl From<&MiningSnapshot> for MiningInfo {
    fn from(snapshot: &MiningSnapshot) -> Self {
        Self {
            is_mining: snapshot.is_mining,
            hashrate: snapshot.hashrate as f64,
            difficulty: snapshot.difficulty,
            block_reward: snapshot.block_reward,
            threads: snapshot.threads,
            pool_address: snapshot.pool_address.clone(),
            worker_name: snapshot.worker_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MiningStats {
    pub is_mining: bool,
    pub threads: u32,
    pub hashrate: f64,
    pub total_hashes: u64,
    pub valid_shares: u64,
    pub invalid_shares: u64,
    pub uptime_secs: u64,
    pub last_share_time: Option<u64>,
    pub pool_address: Option<String>,
    pub worker_name: Option<String>,
}

impl From<&MiningSnapshot> for MiningStats {
    fn from(snapshot: &MiningSnapshot) -> Self {
        Self {
            is_mining: snapshot.is_mining,
            threads: snapshot.threads,
            hashrate: snapshot.hashrate as f64,
            total_hashes: snapshot.total_hashes,
            valid_shares: snapshot.valid_shares,
            invalid_shares: snapshot.invalid_shares,
            uptime_secs: snapshot.uptime_secs,
            last_share_time: snapshot.last_share_time,
            pool_address: snapshot.pool_address.clone(),
            worker_name: snapshot.worker_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AddressBookEntryInfo {
    pub address: String,
    pub label: String,
    pub description: String,
    pub created_time: String,
    pub last_used_time: Option<String>,
    pub use_count: u32,
}

impl From<&AddressBookEntry> for AddressBookEntryInfo {
    fn from(entry: &AddressBookEntry) -> Self {
        Self {
            address: entry.address.clone(),
            label: entry.label.clone(),
            description: entry.description.clone(),
            created_time: entry.created_time.to_rfc3339(),
            last_used_time: entry.last_used_time.map(|t| t.to_rfc3339()),
            use_count: entry.use_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SeedPhraseResponse {
    pub seed_phrase: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateSeedResponse {
    pub valid: bool,
    pub word_count: usize,
}

#[derive(Debug, Serialize)]
pub struct KeyResponse {
    pub key: String,
}
