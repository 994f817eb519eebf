use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::WalletError;
use crate::wallet::keys::KeyBundle;
use crate::wallet::WalletManager;

use super::types::*;

/// Run a blocking manager call off the async runtime. Used for operations
/// that join worker threads.
async fn blocking<T, F>(f: F) -> Result<T, WalletError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, WalletError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| WalletError::Internal(format!("blocking task failed: {}", e)))?
}

// ---------------------------------------------------------------------------
// Wallet lifecycle
// ---------------------------------------------------------------------------

pub async fn create_wallet_handler(
    State(manager): State<Arc<WalletManager>>,
    Json(req): Json<CreateWalletRequest>,
) -> Result<Json<AddressResponse>, WalletError> {
    let address = blocking(move || {
        manager.create_wallet(
            &req.password,
            &req.path,
            req.seed_phrase.as_deref(),
            req.restore_height.unwrap_or(0),
        )
    })
    .await?;
    Ok(Json(AddressResponse { address }))
}

pub async fn open_wallet_handler(
    State(manager): State<Arc<WalletManager>>,
    Json(req): Json<OpenWalletRequest>,
) -> Result<Json<AddressResponse>, WalletError> {
    let address = blocking(move || manager.open_wallet(&req.path, &req.password)).await?;
    Ok(Json(AddressResponse { address }))
}

pub async fn close_wallet_handler(
    State(manager): State<Arc<WalletManager>>,
) -> Result<Json<StatusResponse>, WalletError> {
    blocking(move || manager.close_wallet()).await?;
    Ok(Json(StatusResponse {
        status: "closed".to_string(),
    }))
}

pub async fn wallet_info_handler(
    State(manager): State<Arc<WalletManager>>,
) -> Result<Json<Option<WalletInfo>>, WalletError> {
    Ok(Json(manager.wallet_info()?))
}

// ---------------------------------------------------------------------------
// Node connection and sync
// ---------------------------------------------------------------------------

pub async fn connect_node_handler(
    State(manager): State<Arc<WalletManager>>,
    Json(req): Json<ConnectNodeRequest>,
) -> Result<Json<ConnectNodeResponse>, WalletError> {
    blocking(move || manager.connect_node(req.address.as_deref(), req.port)).await?;
    Ok(Json(ConnectNodeResponse { connected: true }))
}

pub async fn disconnect_node_handler(
    State(manager): State<Arc<WalletManager>>,
) -> Result<Json<ConnectNodeResponse>, WalletError> {
    blocking(move || manager.disconnect_node()).await?;
    Ok(Json(ConnectNodeResponse { connected: false }))
}

pub async fn refresh_handler(
    State(manager): State<Arc<WalletManager>>,
) -> Result<Json<StatusResponse>, WalletError> {
    manager.refresh()?;
    Ok(Json(StatusResponse {
        status: "refreshed".to_string(),
    }))
}

pub async fn rescan_handler(
    State(manager): State<Arc<WalletManager>>,
    Json(req): Json<RescanRequest>,
) -> Result<Json<StatusResponse>, WalletError> {
    blocking(move || manager.rescan(req.start_height)).await?;
    Ok(Json(StatusResponse {
        status: "rescanning".to_string(),
    }))
}

pub async fn sync_progress_handler(
    State(manager): State<Arc<WalletManager>>,
) -> Result<Json<Option<SyncProgress>>, WalletError> {
    Ok(Json(manager.sync_progress()?))
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

pub async fn send_transaction_handler(
    State(manager): State<Arc<WalletManager>>,
    Json(req): Json<SendTransactionRequest>,
) -> Result<Json<SendTransactionResponse>, WalletError> {
    let tx_hash =
        manager.send_transaction(&req.address, req.amount, req.payment_id.clone(), req.mixin)?;
    Ok(Json(SendTransactionResponse { tx_hash }))
}

#[derive(Debug, Deserialize)]
pub struct TransactionListQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

pub async fn list_transactions_handler(
    State(manager): State<Arc<WalletManager>>,
    Query(query): Query<TransactionListQuery>,
) -> Result<Json<Vec<TransactionInfo>>, WalletError> {
    let transactions =
        manager.get_transactions(query.limit.unwrap_or(50), query.offset.unwrap_or(0))?;
    Ok(Json(transactions))
}

pub async fn get_transaction_handler(
    State(manager): State<Arc<WalletManager>>,
    Path(hash): Path<String>,
) -> Result<Json<TransactionInfo>, WalletError> {
    Ok(Json(manager.get_transaction(&hash)?))
}

pub async fn estimate_fee_handler(
    State(manager): State<Arc<WalletManager>>,
    Json(req): Json<EstimateFeeRequest>,
) -> Result<Json<FeeResponse>, WalletError> {
    let fee = manager.estimate_fee(&req.address, req.amount, req.mixin)?;
    Ok(Json(FeeResponse { fee }))
}

// ---------------------------------------------------------------------------
// Deposits
// ---------------------------------------------------------------------------

pub async fn create_deposit_handler(
    State(manager): State<Arc<WalletManager>>,
    Json(req): Json<CreateDepositRequest>,
) -> Result<Json<DepositInfo>, WalletError> {
    Ok(Json(manager.create_deposit(req.amount, req.term_days)?))
}

pub async fn list_deposits_handler(
    State(manager): State<Arc<WalletManager>>,
) -> Result<Json<Vec<DepositInfo>>, WalletError> {
    Ok(Json(manager.list_deposits()?))
}

pub async fn get_deposit_handler(
    State(manager): State<Arc<WalletManager>>,
    Path(deposit_id): Path<String>,
) -> Result<Json<DepositInfo>, WalletError> {
    Ok(Json(manager.get_deposit(&deposit_id)?))
}

pub async fn withdraw_deposit_handler(
    State(manager): State<Arc<WalletManager>>,
    Path(deposit_id): Path<String>,
) -> Result<Json<WithdrawDepositResponse>, WalletError> {
    let tx_hash = manager.withdraw_deposit(&deposit_id)?;
    Ok(Json(WithdrawDepositResponse { tx_hash }))
}

// ---------------------------------------------------------------------------
// Mining
// ---------------------------------------------------------------------------

pub async fn start_mining_handler(
    State(manager): State<Arc<WalletManager>>,
    Json(req): Json<StartMiningRequest>,
) -> Result<Json<StatusResponse>, WalletError> {
    manager.start_mining(req.threads, req.background)?;
    Ok(Json(StatusResponse {
        status: "mining".to_string(),
    }))
}

pub async fn stop_mining_handler(
    State(manager): State<Arc<WalletManager>>,
) -> Result<Json<StatusResponse>, WalletError> {
    blocking(move || manager.stop_mining()).await?;
    Ok(Json(StatusResponse {
        status: "stopped".to_string(),
    }))
}

pub async fn mining_info_handler(
    State(manager): State<Arc<WalletManager>>,
) -> Result<Json<Option<MiningInfo>>, WalletError> {
    Ok(Json(manager.mining_info()?))
}

pub async fn mining_stats_handler(
    State(manager): State<Arc<WalletManager>>,
) -> Result<Json<Option<MiningStats>>, WalletError> {
    Ok(Json(manager.mining_stats()?))
}

pub async fn set_mining_pool_handler(
    State(manager): State<Arc<WalletManager>>,
    Json(req): Json<SetMiningPoolRequest>,
) -> Result<Json<StatusResponse>, WalletError> {
    manager.set_mining_pool(req.pool_address, req.worker_name)?;
    Ok(Json(StatusResponse {
        status: "ok".to_string(),
    }))
}

// ---------------------------------------------------------------------------
// Address book
// ---------------------------------------------------------------------------

pub async fn add_address_handler(
    State(manager): State<Arc<WalletManager>>,
    Json(req): Json<AddAddressBookRequest>,
) -> Result<Json<StatusResponse>, WalletError> {
    manager.add_address(&req.address, &req.label, &req.description)?;
    Ok(Json(StatusResponse {
        status: "added".to_string(),
    }))
}

pub async fn list_addresses_handler(
    State(manager): State<Arc<WalletManager>>,
) -> Result<Json<Vec<AddressBookEntryInfo>>, WalletError> {
    Ok(Json(manager.list_addresses()?))
}

pub async fn get_address_handler(
    State(manager): State<Arc<WalletManager>>,
    Path(address): Path<String>,
) -> Result<Json<AddressBookEntryInfo>, WalletError> {
    Ok(Json(manager.get_address(&address)?))
}

pub async fn update_address_handler(
    State(manager): State<Arc<WalletManager>>,
    Path(address): Path<String>,
    Json(req): Json<UpdateAddressBookRequest>,
) -> Result<Json<StatusResponse>, WalletError> {
    manager.update_address(&address, req.label.as_deref(), req.description.as_deref())?;
    Ok(Json(StatusResponse {
        status: "updated".to_string(),
    }))
}

pub async fn remove_address_handler(
    State(manager): State<Arc<WalletManager>>,
    Path(address): Path<String>,
) -> Result<Json<StatusResponse>, WalletError> {
    manager.remove_address(&address)?;
    Ok(Json(StatusResponse {
        status: "removed".to_string(),
    }))
}

pub async fn mark_address_used_handler(
    State(manager): State<Arc<WalletManager>>,
    Path(address): Path<String>,
) -> Result<Json<StatusResponse>, WalletError> {
    manager.mark_address_used(&address)?;
    Ok(Json(StatusResponse {
        status: "marked".to_string(),
    }))
}

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

pub async fn generate_seed_handler(
    State(manager): State<Arc<WalletManager>>,
) -> Result<Json<SeedPhraseResponse>, WalletError> {
    Ok(Json(SeedPhraseResponse {
        seed_phrase: manager.generate_seed_phrase(),
    }))
}

pub async fn validate_seed_handler(
    State(manager): State<Arc<WalletManager>>,
    Json(req): Json<ValidateSeedRequest>,
) -> Result<Json<ValidateSeedResponse>, WalletError> {
    let word_count = req.seed_phrase.split_whitespace().count();
    let valid = manager.validate_seed_phrase(&req.seed_phrase).is_ok();
    Ok(Json(ValidateSeedResponse { valid, word_count }))
}

pub async fn derive_keys_handler(
    State(manager): State<Arc<WalletManager>>,
    Json(req): Json<DeriveKeysRequest>,
) -> Result<Json<KeyBundle>, WalletError> {
    Ok(Json(manager.derive_keys(&req.seed_phrase, &req.password)?))
}

pub async fn export_keys_handler(
    State(manager): State<Arc<WalletManager>>,
) -> Result<Json<KeyBundle>, WalletError> {
    Ok(Json(manager.export_keys()?))
}

pub async fn import_keys_handler(
    State(manager): State<Arc<WalletManager>>,
    Json(bundle): Json<KeyBundle>,
) -> Result<Json<StatusResponse>, WalletError> {
    manager.import_keys(bundle)?;
    Ok(Json(StatusResponse {
        status: "imported".to_string(),
    }))
}

pub async fn view_key_handler(
    State(manager): State<Arc<WalletManager>>,
) -> Result<Json<KeyResponse>, WalletError> {
    Ok(Json(KeyResponse {
        key: manager.view_key()?,
    }))
}

pub async fn spend_key_handler(
    State(manager): State<Arc<WalletManager>>,
) -> Result<Json<KeyResponse>, WalletError> {
    Ok(Json(KeyResponse {
        key: manager.spend_key()?,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SeedPhraseQuery {
    pub password: String,
}

pub async fn seed_phrase_handler(
    State(manager): State<Arc<WalletManager>>,
    Json(req): Json<SeedPhraseQuery>,
) -> Result<Json<SeedPhraseResponse>, WalletError> {
    Ok(Json(SeedPhraseResponse {
        seed_phrase: manager.seed_phrase(&req.password)?,
    }))
}
